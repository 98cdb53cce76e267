//! Terminal renderer for MoodBoard.
//!
//! Each component draws from a board snapshot; none of them mutate it.

pub mod app;
mod footer;
mod header;
mod mood_filter;
mod quote_card;
mod waves;

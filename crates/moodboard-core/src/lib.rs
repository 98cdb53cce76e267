//! # MoodBoard Core Library
//!
//! Everything MoodBoard does that is independent of how it is drawn: the
//! mood catalog, the quote store, random quote selection and the board
//! state machine that a renderer observes.
//!
//! ## Modules
//!
//! - `mood`: mood identifiers and the ordered catalog
//! - `quotes`: quote records and the immutable store
//! - `selection`: injectable randomness and quote picking
//! - `board`: per-session board state
//! - `controller`: event dispatch and change notification
//! - `settings`: configuration management
//! - `theme`: UI theming and accent palettes

pub mod board;
pub mod controller;
pub mod mood;
pub mod quotes;
pub mod selection;
pub mod settings;
pub mod theme;

pub use board::{BoardPhase, BoardState};
pub use controller::{BoardEvent, ControllerError, InteractionController, SubscriptionId};
pub use mood::{CatalogError, Mood, MoodCatalog};
pub use quotes::{Quote, QuoteStore};
pub use selection::{pick_quote, RandomSource, RngSource, SequenceSource};

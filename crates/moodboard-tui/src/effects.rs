//! Decorative, time-based effects.
//!
//! `Effects` only ever reads board snapshots handed to it by the controller's
//! subscription. It decides what is currently animating and how far along it
//! is; it never feeds anything back into the board.

use moodboard_core::{BoardEvent, BoardState, Mood, Quote};
use std::time::{Duration, Instant};

const RIPPLE_DURATION: Duration = Duration::from_millis(1000);
const ENTRANCE_DURATION: Duration = Duration::from_millis(1200);
const EXIT_DURATION: Duration = Duration::from_millis(600);
const PULSE_DURATION: Duration = Duration::from_millis(300);
/// One full wave period.
const WAVE_PERIOD: Duration = Duration::from_millis(4000);

fn progress(started: Option<Instant>, duration: Duration, now: Instant) -> Option<f32> {
    let elapsed = now.checked_duration_since(started?)?;
    if elapsed >= duration {
        return None;
    }
    Some(elapsed.as_secs_f32() / duration.as_secs_f32())
}

pub struct Effects {
    snapshot: BoardState,
    born: Instant,
    ripple: Option<Instant>,
    entrance: Option<Instant>,
    exit: Option<(Quote, Instant)>,
    pulse: Option<(Mood, Instant)>,
}

impl Effects {
    pub fn new(initial: BoardState, now: Instant) -> Self {
        Self {
            snapshot: initial,
            born: now,
            ripple: None,
            entrance: None,
            exit: None,
            pulse: None,
        }
    }

    /// The most recent board snapshot received.
    pub fn snapshot(&self) -> &BoardState {
        &self.snapshot
    }

    /// Take in the snapshot produced by `event`.
    pub fn observe(&mut self, event: BoardEvent, next: BoardState, now: Instant) {
        match event {
            BoardEvent::CycleAccent => self.ripple = Some(now),
            BoardEvent::SelectMood(mood) => {
                self.pulse = Some((mood, now));
                // A fresh pick always replays the entrance, even if the same
                // quote came up again. A miss leaves the card as it was.
                if next.displayed_quote.as_ref().is_some_and(|q| q.mood == mood) {
                    self.entrance = Some(now);
                    self.exit = None;
                }
            }
            BoardEvent::DismissQuote => {
                let prev = &self.snapshot;
                if let (Some(old), true) = (&prev.displayed_quote, prev.quote_panel_visible) {
                    self.exit = Some((old.clone(), now));
                    self.entrance = None;
                }
            }
        }
        self.snapshot = next;
    }

    pub fn ripple_progress(&self, now: Instant) -> Option<f32> {
        progress(self.ripple, RIPPLE_DURATION, now)
    }

    /// Entrance progress of the shown quote; `1.0` once settled.
    pub fn entrance_progress(&self, now: Instant) -> f32 {
        match self.entrance {
            Some(_) => progress(self.entrance, ENTRANCE_DURATION, now).unwrap_or(1.0),
            None => 1.0,
        }
    }

    /// A dismissed quote that is still fading out.
    pub fn exiting_quote(&self, now: Instant) -> Option<(&Quote, f32)> {
        let (quote, started) = self.exit.as_ref()?;
        progress(Some(*started), EXIT_DURATION, now).map(|p| (quote, p))
    }

    pub fn pulse(&self, now: Instant) -> Option<(Mood, f32)> {
        let (mood, started) = self.pulse?;
        progress(Some(started), PULSE_DURATION, now).map(|p| (mood, p))
    }

    /// Wave phase in radians.
    pub fn wave_phase(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.born).as_secs_f32();
        elapsed / WAVE_PERIOD.as_secs_f32() * std::f32::consts::TAU
    }
}

use crate::mood::Mood;
use crate::quotes::Quote;
use serde::Serialize;

/// Per-session board state. Mutated only by the interaction controller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BoardState {
    pub selected_mood: Option<Mood>,
    pub displayed_quote: Option<Quote>,
    pub quote_panel_visible: bool,
    pub accent_index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardPhase {
    Idle,
    /// A mood is selected but it had no quotes.
    MoodChosen,
    /// A quote is on the board. After a selection miss it may belong to an
    /// earlier mood than `selected_mood`.
    QuoteShown,
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> BoardPhase {
        match (&self.selected_mood, &self.displayed_quote) {
            (_, Some(_)) => BoardPhase::QuoteShown,
            (Some(_), None) => BoardPhase::MoodChosen,
            (None, None) => BoardPhase::Idle,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.phase() == BoardPhase::Idle
    }

    /// True when the selected mood had no quotes to show, whether or not an
    /// older quote is still on the board.
    pub fn selection_missed(&self) -> bool {
        match (&self.selected_mood, &self.displayed_quote) {
            (Some(mood), Some(quote)) => quote.mood != *mood,
            (Some(_), None) => true,
            (None, _) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = BoardState::new();
        assert_eq!(state.selected_mood, None);
        assert_eq!(state.displayed_quote, None);
        assert!(!state.quote_panel_visible);
        assert_eq!(state.accent_index, 0);
        assert!(state.is_idle());
    }

    #[test]
    fn test_phase_derivation() {
        let mut state = BoardState::new();
        state.selected_mood = Some(Mood::Relaxed);
        assert_eq!(state.phase(), BoardPhase::MoodChosen);

        state.displayed_quote = Some(Quote::new("Breathe", Mood::Relaxed));
        state.quote_panel_visible = true;
        assert_eq!(state.phase(), BoardPhase::QuoteShown);
    }

    #[test]
    fn test_quote_from_earlier_mood() {
        let mut state = BoardState::new();
        assert!(!state.selection_missed());

        state.selected_mood = Some(Mood::Motivated);
        assert!(state.selection_missed());

        state.displayed_quote = Some(Quote::new("Breathe", Mood::Relaxed));
        state.quote_panel_visible = true;
        assert_eq!(state.phase(), BoardPhase::QuoteShown);
        assert!(state.selection_missed());

        state.selected_mood = Some(Mood::Relaxed);
        assert!(!state.selection_missed());
    }
}

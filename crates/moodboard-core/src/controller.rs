use crate::board::{BoardPhase, BoardState};
use crate::mood::{Mood, MoodCatalog};
use crate::quotes::QuoteStore;
use crate::selection::{pick_quote, RandomSource};
use crate::theme::ACCENT_COUNT;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardEvent {
    SelectMood(Mood),
    DismissQuote,
    /// Title activation: advance the background accent.
    CycleAccent,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ControllerError {
    #[error("mood '{0}' is not part of the catalog")]
    UnknownMood(Mood),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&BoardEvent, &BoardState)>;

/// Owns the board state and applies events to it one at a time.
pub struct InteractionController<R> {
    catalog: Arc<MoodCatalog>,
    store: Arc<QuoteStore>,
    rng: R,
    state: BoardState,
    accent_count: usize,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl<R: RandomSource> InteractionController<R> {
    pub fn new(catalog: Arc<MoodCatalog>, store: Arc<QuoteStore>, rng: R) -> Self {
        Self {
            catalog,
            store,
            rng,
            state: BoardState::new(),
            accent_count: ACCENT_COUNT,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Override the accent palette size. Zero is treated as one.
    pub fn with_accent_count(mut self, count: usize) -> Self {
        self.accent_count = count.max(1);
        self.state.accent_index %= self.accent_count;
        self
    }

    pub fn catalog(&self) -> &MoodCatalog {
        &self.catalog
    }

    pub fn accent_count(&self) -> usize {
        self.accent_count
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn snapshot(&self) -> BoardState {
        self.state.clone()
    }

    pub fn phase(&self) -> BoardPhase {
        self.state.phase()
    }

    /// Register a listener called with the applied event and the new state
    /// after every mutation.
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&BoardEvent, &BoardState) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    /// Apply one event. Returns `Ok(true)` when the state changed and
    /// listeners were notified.
    pub fn dispatch(&mut self, event: BoardEvent) -> Result<bool, ControllerError> {
        let changed = match event {
            BoardEvent::SelectMood(mood) => {
                if !self.catalog.contains(mood) {
                    tracing::warn!(%mood, "rejected selection of mood outside the catalog");
                    return Err(ControllerError::UnknownMood(mood));
                }
                self.select_mood(mood);
                true
            }
            BoardEvent::DismissQuote => self.dismiss_quote(),
            BoardEvent::CycleAccent => {
                self.cycle_accent();
                true
            }
        };

        if changed {
            self.notify(&event);
        }
        Ok(changed)
    }

    fn select_mood(&mut self, mood: Mood) {
        self.state.selected_mood = Some(mood);
        match pick_quote(mood, &self.store, &mut self.rng) {
            Some(quote) => {
                tracing::debug!(%mood, quote = %quote.text, "quote shown");
                self.state.displayed_quote = Some(quote.clone());
                self.state.quote_panel_visible = true;
            }
            // A miss only moves the selection; whatever quote is on the
            // panel stays there.
            None => tracing::debug!(%mood, "no quotes for mood"),
        }
    }

    fn dismiss_quote(&mut self) -> bool {
        if !self.state.quote_panel_visible {
            return false;
        }
        self.state.quote_panel_visible = false;
        self.state.displayed_quote = None;
        self.state.selected_mood = None;
        tracing::debug!("quote dismissed");
        true
    }

    fn cycle_accent(&mut self) {
        self.state.accent_index = (self.state.accent_index + 1) % self.accent_count;
        tracing::debug!(accent = self.state.accent_index, "accent cycled");
    }

    fn notify(&mut self, event: &BoardEvent) {
        let snapshot = &self.state;
        for (_, listener) in self.listeners.iter_mut() {
            listener(event, snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quotes::Quote;
    use crate::selection::SequenceSource;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn controller(quotes: Vec<Quote>) -> InteractionController<SequenceSource> {
        let catalog = Arc::new(MoodCatalog::default());
        let store = Arc::new(QuoteStore::new(quotes, &catalog).unwrap());
        InteractionController::new(catalog, store, SequenceSource::new(vec![0, 1, 2]))
    }

    #[test]
    fn test_select_then_dismiss() {
        let mut ctl = controller(vec![
            Quote::new("Keep going", Mood::Happy),
            Quote::new("Breathe", Mood::Focused),
        ]);

        assert_eq!(ctl.dispatch(BoardEvent::SelectMood(Mood::Happy)), Ok(true));
        assert_eq!(ctl.phase(), BoardPhase::QuoteShown);
        assert_eq!(ctl.state().selected_mood, Some(Mood::Happy));
        assert_eq!(ctl.state().displayed_quote.as_ref().unwrap().text, "Keep going");
        assert!(ctl.state().quote_panel_visible);

        assert_eq!(ctl.dispatch(BoardEvent::DismissQuote), Ok(true));
        assert_eq!(ctl.state(), &BoardState::new());
    }

    #[test]
    fn test_dismiss_is_idempotent() {
        let mut ctl = controller(vec![Quote::new("Keep going", Mood::Happy)]);
        assert_eq!(ctl.dispatch(BoardEvent::DismissQuote), Ok(false));

        ctl.dispatch(BoardEvent::SelectMood(Mood::Happy)).unwrap();
        assert_eq!(ctl.dispatch(BoardEvent::DismissQuote), Ok(true));
        assert_eq!(ctl.dispatch(BoardEvent::DismissQuote), Ok(false));
        assert_eq!(ctl.state(), &BoardState::new());
    }

    #[test]
    fn test_select_mood_without_quotes() {
        let mut ctl = controller(vec![Quote::new("Keep going", Mood::Happy)]);
        ctl.dispatch(BoardEvent::SelectMood(Mood::Relaxed)).unwrap();
        assert_eq!(ctl.phase(), BoardPhase::MoodChosen);
        assert_eq!(ctl.state().selected_mood, Some(Mood::Relaxed));
        assert_eq!(ctl.state().displayed_quote, None);
        assert!(!ctl.state().quote_panel_visible);

        // Nothing visible, so dismissal has nothing to cancel.
        assert_eq!(ctl.dispatch(BoardEvent::DismissQuote), Ok(false));
        assert_eq!(ctl.state().selected_mood, Some(Mood::Relaxed));
    }

    #[test]
    fn test_reselect_replaces_quote() {
        let mut ctl = controller(vec![
            Quote::new("Keep going", Mood::Happy),
            Quote::new("Smile", Mood::Happy),
            Quote::new("Breathe", Mood::Focused),
        ]);
        ctl.dispatch(BoardEvent::SelectMood(Mood::Happy)).unwrap();
        assert_eq!(ctl.state().displayed_quote.as_ref().unwrap().text, "Keep going");

        ctl.dispatch(BoardEvent::SelectMood(Mood::Happy)).unwrap();
        assert_eq!(ctl.state().displayed_quote.as_ref().unwrap().text, "Smile");

        ctl.dispatch(BoardEvent::SelectMood(Mood::Focused)).unwrap();
        assert_eq!(ctl.state().selected_mood, Some(Mood::Focused));
        assert_eq!(ctl.state().displayed_quote.as_ref().unwrap().text, "Breathe");
    }

    #[test]
    fn test_miss_keeps_shown_quote() {
        let mut ctl = controller(vec![Quote::new("Keep going", Mood::Happy)]);
        ctl.dispatch(BoardEvent::SelectMood(Mood::Happy)).unwrap();
        let before = ctl.snapshot();

        assert_eq!(ctl.dispatch(BoardEvent::SelectMood(Mood::Relaxed)), Ok(true));
        let after = ctl.state();
        assert_eq!(after.selected_mood, Some(Mood::Relaxed));
        assert_eq!(after.displayed_quote, before.displayed_quote);
        assert!(after.quote_panel_visible);
        assert_eq!(after.accent_index, before.accent_index);
        assert_eq!(ctl.phase(), BoardPhase::QuoteShown);
        assert!(after.selection_missed());

        // The panel is still up, so dismissal clears everything.
        assert_eq!(ctl.dispatch(BoardEvent::DismissQuote), Ok(true));
        assert_eq!(ctl.state(), &BoardState::new());
    }

    #[test]
    fn test_cycle_accent_wraps() {
        let mut ctl = controller(Vec::new());
        let n = ctl.accent_count();
        for i in 1..n {
            ctl.dispatch(BoardEvent::CycleAccent).unwrap();
            assert_eq!(ctl.state().accent_index, i);
        }
        ctl.dispatch(BoardEvent::CycleAccent).unwrap();
        assert_eq!(ctl.state().accent_index, 0);
    }

    #[test]
    fn test_cycle_accent_keeps_quote() {
        let mut ctl = controller(vec![Quote::new("Keep going", Mood::Happy)]).with_accent_count(3);
        ctl.dispatch(BoardEvent::SelectMood(Mood::Happy)).unwrap();
        let before = ctl.snapshot();
        for _ in 0..3 {
            ctl.dispatch(BoardEvent::CycleAccent).unwrap();
        }
        assert_eq!(ctl.snapshot(), before);
    }

    #[test]
    fn test_unknown_mood_is_rejected() {
        let catalog = Arc::new(MoodCatalog::new(vec![Mood::Happy]).unwrap());
        let store = Arc::new(QuoteStore::builtin(&catalog));
        let mut ctl = InteractionController::new(catalog, store, SequenceSource::new(vec![0]));
        let calls = Rc::new(RefCell::new(0));
        let seen = Rc::clone(&calls);
        ctl.subscribe(move |_, _| *seen.borrow_mut() += 1);

        assert_eq!(
            ctl.dispatch(BoardEvent::SelectMood(Mood::Relaxed)),
            Err(ControllerError::UnknownMood(Mood::Relaxed))
        );
        assert!(ctl.state().is_idle());
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn test_listeners_receive_snapshots() {
        let mut ctl = controller(vec![Quote::new("Keep going", Mood::Happy)]);
        let seen: Rc<RefCell<Vec<(BoardEvent, BoardState)>>> = Rc::default();
        let sink = Rc::clone(&seen);
        let id = ctl.subscribe(move |event, state| sink.borrow_mut().push((*event, state.clone())));

        ctl.dispatch(BoardEvent::SelectMood(Mood::Happy)).unwrap();
        ctl.dispatch(BoardEvent::DismissQuote).unwrap();
        ctl.dispatch(BoardEvent::DismissQuote).unwrap();
        ctl.dispatch(BoardEvent::CycleAccent).unwrap();

        {
            let seen = seen.borrow();
            assert_eq!(seen.len(), 3);
            assert_eq!(seen[0].0, BoardEvent::SelectMood(Mood::Happy));
            assert!(seen[0].1.quote_panel_visible);
            assert_eq!(seen[1].0, BoardEvent::DismissQuote);
            assert!(seen[1].1.is_idle());
            assert_eq!(seen[2].0, BoardEvent::CycleAccent);
            assert_eq!(seen[2].1.accent_index, 1);
        }

        assert!(ctl.unsubscribe(id));
        assert!(!ctl.unsubscribe(id));
        ctl.dispatch(BoardEvent::CycleAccent).unwrap();
        assert_eq!(seen.borrow().len(), 3);
    }
}

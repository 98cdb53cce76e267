use super::{
    footer::render_footer,
    header::render_header,
    mood_filter::{render_mood_filter, row_width, MoodFilterParams},
    quote_card::{card_area, render_quote_card, CardPhase},
    waves::render_waves,
};
use crate::effects::Effects;
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use moodboard_core::{
    settings::Settings,
    theme::{accent_color, mood_color, Element, Theme},
    BoardEvent, BoardState, InteractionController, RandomSource,
};
use ratatui::{
    prelude::{Constraint, CrosstermBackend, Direction, Frame, Layout, Rect, Terminal},
    widgets::{Block, Borders, Clear},
};
use std::io::Stdout;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::{self, UnboundedReceiver};

pub struct App<R> {
    should_quit: bool,
    theme: Theme,
    /// Where a theme toggle is persisted.
    config_path: PathBuf,
    board: InteractionController<R>,
    snapshots: UnboundedReceiver<(BoardEvent, BoardState)>,
    effects: Effects,
    focus: usize,
    tick_rate: Duration,
}

impl<R: RandomSource> App<R> {
    pub fn new(
        settings: &Settings,
        mut board: InteractionController<R>,
        config_path: PathBuf,
    ) -> Self {
        let (tx, snapshots) = mpsc::unbounded_channel();
        board.subscribe(move |event, state| {
            // The receiver lives as long as the app; a failed send only
            // happens during teardown.
            let _ = tx.send((*event, state.clone()));
        });

        let effects = Effects::new(board.snapshot(), Instant::now());
        Self {
            should_quit: false,
            theme: Theme::new(settings.theme),
            tick_rate: Duration::from_millis(settings.tick_rate_ms.max(1)),
            config_path,
            board,
            snapshots,
            effects,
            focus: 0,
        }
    }

    pub async fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        while !self.should_quit {
            let now = Instant::now();
            self.sync_effects(now);
            terminal.draw(|frame| self.render(frame, now))?;
            self.handle_events()?;
            tokio::task::yield_now().await;
        }
        Ok(())
    }

    /// Feed pending board snapshots to the effects engine.
    fn sync_effects(&mut self, now: Instant) {
        while let Ok((event, snapshot)) = self.snapshots.try_recv() {
            self.effects.observe(event, snapshot, now);
        }
    }

    fn render(&self, frame: &mut Frame, now: Instant) {
        let state = self.effects.snapshot();
        let area = frame.size();
        frame.render_widget(
            Block::new()
                .borders(Borders::NONE)
                .style(self.theme.ratatui_style(Element::Background)),
            area,
        );

        let app_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(area);

        render_header(
            frame,
            app_chunks[0],
            &self.theme,
            state,
            self.effects.ripple_progress(now),
        );

        let body = app_chunks[1];
        let tint = state
            .selected_mood
            .map(mood_color)
            .unwrap_or_else(|| accent_color(state.accent_index));
        render_waves(frame, body, &self.theme, tint, self.effects.wave_phase(now));

        if body.height > 0 {
            let catalog = self.board.catalog();
            let width = (row_width(catalog) as u16).min(body.width);
            let row = Rect::new(
                body.x + (body.width - width) / 2,
                body.y + body.height / 2,
                width,
                1,
            );
            frame.render_widget(Clear, row);
            render_mood_filter(
                frame,
                row,
                MoodFilterParams {
                    theme: &self.theme,
                    catalog,
                    active: state.selected_mood,
                    focus: self.focus,
                    pulse: self.effects.pulse(now).map(|(mood, _)| mood),
                },
            );
        }

        render_footer(
            frame,
            app_chunks[2],
            &self.theme,
            self.board.catalog().len(),
            state.quote_panel_visible,
        );

        let card = card_area(area);
        match (&state.displayed_quote, state.quote_panel_visible) {
            (Some(quote), true) => {
                let phase = CardPhase::Entering(self.effects.entrance_progress(now));
                render_quote_card(frame, card, &self.theme, quote, phase);
            }
            _ => {
                if let Some((quote, p)) = self.effects.exiting_quote(now) {
                    render_quote_card(frame, card, &self.theme, quote, CardPhase::Leaving(p));
                }
            }
        }
    }

    fn handle_events(&mut self) -> Result<()> {
        if event::poll(self.tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key.code);
                }
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, code: KeyCode) {
        let mood_count = self.board.catalog().len();
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                self.select_index(index);
            }
            KeyCode::Left => {
                self.focus = (self.focus + mood_count - 1) % mood_count;
            }
            KeyCode::Right => {
                self.focus = (self.focus + 1) % mood_count;
            }
            KeyCode::Enter => self.select_index(self.focus),
            KeyCode::Char(' ') | KeyCode::Char('c') => self.dispatch(BoardEvent::CycleAccent),
            KeyCode::Esc | KeyCode::Char('x') => self.dispatch(BoardEvent::DismissQuote),
            KeyCode::Char('t') => {
                self.theme.toggle();
                if let Err(err) = Settings::save_theme_to(&self.config_path, self.theme.variant()) {
                    tracing::warn!(%err, "failed to persist theme");
                }
            }
            _ => {}
        }
    }

    fn select_index(&mut self, index: usize) {
        // Only catalog positions are offered, so the mood is valid by
        // construction.
        if let Some(mood) = self.board.catalog().get(index) {
            self.focus = index;
            self.dispatch(BoardEvent::SelectMood(mood));
        }
    }

    fn dispatch(&mut self, event: BoardEvent) {
        if let Err(err) = self.board.dispatch(event) {
            tracing::warn!(%err, ?event, "event rejected");
        }
    }
}

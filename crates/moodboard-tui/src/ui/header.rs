use moodboard_core::{
    theme::{accent_color, Element, Theme, ACCENT_COUNT},
    BoardPhase, BoardState,
};
use ratatui::{
    prelude::{Alignment, Frame, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const TITLE: &str = "MoodBoard";

/// Colours swept through the title letters during a ripple.
const TITLE_WAVE: [Color; 7] = [
    Color::Rgb(0xff, 0xe0, 0x66),
    Color::Rgb(0xff, 0x6b, 0x6b),
    Color::Rgb(0x4e, 0xcd, 0xc4),
    Color::Rgb(0x45, 0xb7, 0xd1),
    Color::Rgb(0x96, 0xce, 0xb4),
    Color::Rgb(0xff, 0xea, 0xa7),
    Color::Rgb(0xdd, 0xa0, 0xdd),
];

pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    state: &BoardState,
    ripple: Option<f32>,
) {
    let accent = accent_color(state.accent_index);
    let title = title_line(accent, ripple, theme);

    let status = Span::styled(status_text(state), theme.ratatui_style(Element::Inactive));

    let block = Block::new()
        .borders(Borders::ALL)
        .title(status)
        .title_alignment(Alignment::Right)
        .border_style(Style::default().fg(accent))
        .style(theme.ratatui_style(Element::Text));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    frame.render_widget(Paragraph::new(title).alignment(Alignment::Center), inner);
}

fn title_line(accent: Color, ripple: Option<f32>, theme: &Theme) -> Line<'static> {
    let base = theme.ratatui_style(Element::Title);
    let Some(progress) = ripple else {
        return Line::from(Span::styled(TITLE, base.fg(accent)));
    };

    // The colour band travels left to right across the letters.
    let shift = (progress * TITLE_WAVE.len() as f32) as usize;
    let spans: Vec<Span> = TITLE
        .chars()
        .enumerate()
        .map(|(i, c)| {
            let color = TITLE_WAVE[(i + shift) % TITLE_WAVE.len()];
            Span::styled(c.to_string(), base.fg(color).add_modifier(Modifier::ITALIC))
        })
        .collect();
    Line::from(spans)
}

fn status_text(state: &BoardState) -> String {
    let accent = format!("accent {}/{}", state.accent_index + 1, ACCENT_COUNT);
    match (state.phase(), state.selected_mood) {
        (BoardPhase::Idle, _) | (_, None) => format!("pick a mood :: {} ", accent),
        (_, Some(mood)) if state.selection_missed() => {
            format!("{} :: no quotes yet :: {} ", mood, accent)
        }
        (_, Some(mood)) => format!("{} :: {} ", mood, accent),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moodboard_core::{Mood, Quote};

    #[test]
    fn test_status_text() {
        let mut state = BoardState::new();
        assert_eq!(status_text(&state), "pick a mood :: accent 1/8 ");

        state.selected_mood = Some(Mood::Relaxed);
        state.accent_index = 2;
        assert_eq!(status_text(&state), "relaxed :: no quotes yet :: accent 3/8 ");

        state.displayed_quote = Some(Quote::new("Breathe", Mood::Relaxed));
        state.quote_panel_visible = true;
        assert_eq!(status_text(&state), "relaxed :: accent 3/8 ");

        // An older quote stays up after a miss.
        state.selected_mood = Some(Mood::Motivated);
        assert_eq!(status_text(&state), "motivated :: no quotes yet :: accent 3/8 ");
    }

    #[test]
    fn test_ripple_colours_each_letter() {
        let line = title_line(Color::Red, Some(0.5), &Theme::default());
        assert_eq!(line.spans.len(), TITLE.len());
        let plain = title_line(Color::Red, None, &Theme::default());
        assert_eq!(plain.spans.len(), 1);
    }
}

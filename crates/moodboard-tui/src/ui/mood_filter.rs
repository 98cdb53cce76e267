use moodboard_core::{
    theme::{mood_color, Element, Theme},
    Mood, MoodCatalog,
};
use ratatui::{
    prelude::{Alignment, Frame, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

const BUTTON_GAP: &str = "  ";

pub struct MoodFilterParams<'a> {
    pub theme: &'a Theme,
    pub catalog: &'a MoodCatalog,
    pub active: Option<Mood>,
    pub focus: usize,
    /// Mood button currently bouncing after a click.
    pub pulse: Option<Mood>,
}

fn button_label(index: usize, mood: Mood) -> String {
    format!(" {} {} ", index + 1, mood.as_ref().to_uppercase())
}

/// Display width of the whole button row.
pub fn row_width(catalog: &MoodCatalog) -> usize {
    let buttons: usize = catalog
        .all_moods()
        .iter()
        .enumerate()
        .map(|(i, mood)| button_label(i, *mood).width() + 2)
        .sum();
    buttons + BUTTON_GAP.width() * catalog.len().saturating_sub(1)
}

pub fn render_mood_filter(frame: &mut Frame, area: Rect, params: MoodFilterParams) {
    let theme = params.theme;
    let mut spans = Vec::new();

    for (i, mood) in params.catalog.all_moods().iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(BUTTON_GAP));
        }

        let is_active = params.active == Some(*mood);
        let mut style = if is_active {
            theme.highlight_style()
        } else {
            theme.text_style()
        };
        if params.pulse == Some(*mood) {
            style = style.add_modifier(Modifier::REVERSED);
        }

        let (open, close) = if i == params.focus { ("[", "]") } else { ("(", ")") };
        let bracket = Style::default().fg(mood_color(*mood));

        spans.push(Span::styled(open, bracket));
        spans.push(Span::styled(button_label(i, *mood), style.add_modifier(Modifier::BOLD)));
        spans.push(Span::styled(close, bracket));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .style(theme.ratatui_style(Element::Background));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_label() {
        assert_eq!(button_label(0, Mood::Happy), " 1 HAPPY ");
        assert_eq!(button_label(3, Mood::Motivated), " 4 MOTIVATED ");
    }

    #[test]
    fn test_row_width() {
        let catalog = MoodCatalog::new(vec![Mood::Happy, Mood::Focused]).unwrap();
        // "( 1 HAPPY )" + "  " + "( 2 FOCUSED )"
        assert_eq!(row_width(&catalog), 11 + 2 + 13);
    }
}

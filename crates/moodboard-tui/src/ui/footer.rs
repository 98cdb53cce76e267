use moodboard_core::theme::{Element, Theme};
use ratatui::{
    prelude::{Alignment, Frame, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub fn render_footer(frame: &mut Frame, area: Rect, theme: &Theme, mood_count: usize, card_open: bool) {
    let footer_block = Block::default()
        .borders(Borders::ALL)
        .style(theme.ratatui_style(Element::Border));

    let inner_area = footer_block.inner(area);
    let hint = theme.ratatui_style(Element::Inactive);

    let mut spans = vec![
        Span::raw(format!("[1-{}]", mood_count.min(9))),
        Span::styled(" Mood", hint),
        Span::raw(" | "),
        Span::raw("[\u{2190}\u{2192}\u{23ce}]"),
        Span::styled(" Pick", hint),
        Span::raw(" | "),
        Span::raw("[Space]"),
        Span::styled(" Title", hint),
        Span::raw(" | "),
    ];
    if card_open {
        spans.push(Span::raw("[Esc]"));
        spans.push(Span::styled(" Dismiss", hint));
        spans.push(Span::raw(" | "));
    }
    spans.extend([
        Span::raw("[T]"),
        Span::styled("heme", hint),
        Span::raw(" | "),
        Span::raw("[Q]"),
        Span::styled("uit", hint),
    ]);

    let footer_paragraph = Paragraph::new(Line::from(spans).alignment(Alignment::Center))
        .style(theme.ratatui_style(Element::Text));

    frame.render_widget(footer_block, area);
    frame.render_widget(footer_paragraph, inner_area);
}

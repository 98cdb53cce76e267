use moodboard_core::{
    theme::{Element, Theme},
    Quote,
};
use ratatui::{
    prelude::{Alignment, Constraint, Direction, Frame, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

pub enum CardPhase {
    /// Typewriter entrance, 0.0 to 1.0.
    Entering(f32),
    /// Fading out after dismissal, 0.0 to 1.0.
    Leaving(f32),
}

/// Card size: 60% of the screen, at least 30x7 and at most 64x12.
pub fn card_area(screen: Rect) -> Rect {
    let width = (((screen.width as f32) * 0.6).round() as u16)
        .clamp(30, 64)
        .min(screen.width);
    let height = (((screen.height as f32) * 0.4).round() as u16)
        .clamp(7, 12)
        .min(screen.height);
    Rect::new(
        screen.x + (screen.width.saturating_sub(width)) / 2,
        screen.y + (screen.height.saturating_sub(height)) / 2,
        width,
        height,
    )
}

/// Wrap the quote and keep only the first `visible` characters.
fn reveal(text: &str, width: usize, visible: usize) -> Vec<String> {
    let quoted = format!("\u{201c}{}\u{201d}", text);
    let mut remaining = visible;
    let mut lines = Vec::new();
    for line in textwrap::wrap(&quoted, width.max(1)) {
        let count = line.chars().count();
        if remaining >= count {
            lines.push(line.into_owned());
            remaining -= count;
        } else {
            lines.push(line.chars().take(remaining).collect());
            break;
        }
    }
    lines
}

pub fn render_quote_card(frame: &mut Frame, area: Rect, theme: &Theme, quote: &Quote, phase: CardPhase) {
    let (shown, fading) = match phase {
        CardPhase::Entering(p) => (p.clamp(0.0, 1.0), false),
        CardPhase::Leaving(p) => (1.0 - p.clamp(0.0, 1.0), true),
    };

    let mut card_style = theme.ratatui_style(Element::Card);
    if fading {
        card_style = card_style.add_modifier(Modifier::DIM);
    }

    let block = Block::new()
        .borders(Borders::ALL)
        .title(" \u{2715} [Esc] ")
        .title_alignment(Alignment::Right)
        .style(card_style);

    frame.render_widget(Clear, area);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Min(0),    // Quote text
            Constraint::Length(1), // Mood tag
        ])
        .split(inner);

    let total = quote.text.chars().count() + 2;
    let visible = (total as f32 * shown).round() as usize;
    let lines: Vec<Line> = reveal(&quote.text, chunks[0].width as usize, visible)
        .into_iter()
        .map(|l| Line::from(Span::styled(l, card_style.add_modifier(Modifier::ITALIC))))
        .collect();
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        chunks[0],
    );

    // The tag pops in once the text has finished typing.
    if shown >= 1.0 || fading {
        let mut tag_style = theme.ratatui_style(Element::MoodTag);
        if fading {
            tag_style = tag_style.add_modifier(Modifier::DIM);
        }
        let tag = Paragraph::new(Span::styled(
            format!(" {} ", quote.mood.as_ref().to_uppercase()),
            tag_style,
        ))
        .alignment(Alignment::Center);
        frame.render_widget(tag, chunks[1]);
    }
}

use moodboard_core::theme::{Element, Theme};
use ratatui::{
    prelude::{Frame, Rect},
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
};

const GLYPHS: [char; 4] = [' ', '.', '~', '\u{2248}'];

fn glyph(x: u16, y: u16, phase: f32) -> char {
    let fx = x as f32 * 0.18;
    let fy = y as f32 * 0.7;
    let v = (fx + phase + fy).sin() * 0.6 + (fx * 0.5 - phase * 0.7).cos() * 0.4;
    // v in [-1, 1]
    let idx = (((v + 1.0) / 2.0) * GLYPHS.len() as f32) as usize;
    GLYPHS[idx.min(GLYPHS.len() - 1)]
}

/// Animated background waves tinted with `tint`.
pub fn render_waves(frame: &mut Frame, area: Rect, theme: &Theme, tint: Color, phase: f32) {
    let style = Style::default()
        .fg(tint)
        .bg(theme.ratatui_style(Element::Background).bg.unwrap_or(Color::Reset));

    let lines: Vec<Line> = (0..area.height)
        .map(|y| {
            let row: String = (0..area.width).map(|x| glyph(x, y, phase)).collect();
            Line::styled(row, style)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_is_from_set() {
        for x in 0..80 {
            for y in 0..10 {
                assert!(GLYPHS.contains(&glyph(x, y, 1.3)));
            }
        }
    }

    #[test]
    fn test_phase_moves_the_waves() {
        let row = |phase: f32| (0..80).map(|x| glyph(x, 0, phase)).collect::<String>();
        assert_ne!(row(0.0), row(1.5));
    }
}

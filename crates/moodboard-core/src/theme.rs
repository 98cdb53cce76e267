//! Theme System for MoodBoard
//!
//! Dark/Light base palettes plus the decorative accent palette that the
//! title cycles through and the per-mood tint colours.

use crate::mood::Mood;
use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// Accent colours cycled by title activation.
pub const ACCENT_PALETTE: [Color; 8] = [
    Color::Rgb(0x66, 0x7e, 0xea), // #667eea purple-blue
    Color::Rgb(0xf0, 0x93, 0xfb), // #f093fb pink
    Color::Rgb(0x4f, 0xac, 0xfe), // #4facfe light blue
    Color::Rgb(0x43, 0xe9, 0x7b), // #43e97b green
    Color::Rgb(0xfa, 0x70, 0x9a), // #fa709a pink-orange
    Color::Rgb(0xa8, 0xed, 0xea), // #a8edea mint
    Color::Rgb(0xff, 0x9a, 0x9e), // #ff9a9e coral
    Color::Rgb(0x76, 0x4b, 0xa2), // #764ba2 deep purple
];

pub const ACCENT_COUNT: usize = ACCENT_PALETTE.len();

/// Accent colour for an index, wrapping out-of-range values.
pub fn accent_color(index: usize) -> Color {
    ACCENT_PALETTE[index % ACCENT_COUNT]
}

pub fn mood_color(mood: Mood) -> Color {
    match mood {
        Mood::Happy => Color::Rgb(0xff, 0xe0, 0x66),
        Mood::Focused => Color::Rgb(0x66, 0x7e, 0xea),
        Mood::Relaxed => Color::Rgb(0xa8, 0xed, 0xea),
        Mood::Motivated => Color::Rgb(0xff, 0x9a, 0x9e),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    #[default]
    Dark,
    Light,
}

impl ThemeVariant {
    pub fn toggle(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ColorPalette {
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
    pub selection: Color,
    pub highlight: Color,
    pub card: Color,
    pub card_text: Color,
}

/// UI element types for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    /// Normal text content
    Text,
    Title,
    Border,
    /// Active mood button
    Highlight,
    Background,
    Inactive,
    /// Quote card body
    Card,
    /// Mood tag inside the quote card
    MoodTag,
}

#[derive(Debug, Clone)]
pub struct Theme {
    variant: ThemeVariant,
    colors: ColorPalette,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeVariant::default())
    }
}

impl Theme {
    pub fn new(variant: ThemeVariant) -> Self {
        let colors = match variant {
            ThemeVariant::Dark => ColorPalette {
                background: Color::Rgb(30, 27, 46),
                foreground: Color::Rgb(229, 231, 235), // #e5e7eb
                border: Color::Rgb(107, 114, 128),     // #6b7280
                selection: Color::Rgb(139, 92, 246),   // #8b5cf6
                highlight: Color::Rgb(255, 255, 255),
                card: Color::Rgb(248, 250, 252), // #f8fafc
                card_text: Color::Rgb(55, 65, 81), // #374151
            },
            ThemeVariant::Light => ColorPalette {
                background: Color::Rgb(250, 245, 255),
                foreground: Color::Rgb(55, 65, 81),
                border: Color::Rgb(156, 163, 175),
                selection: Color::Rgb(139, 92, 246),
                highlight: Color::Rgb(255, 255, 255),
                card: Color::Rgb(255, 255, 255),
                card_text: Color::Rgb(55, 65, 81),
            },
        };

        Self { variant, colors }
    }

    pub fn variant(&self) -> ThemeVariant {
        self.variant
    }

    pub fn toggle(&mut self) {
        *self = Self::new(self.variant.toggle());
    }

    pub fn ratatui_style(&self, element: Element) -> Style {
        match element {
            Element::Text | Element::Background => Style::default()
                .fg(self.colors.foreground)
                .bg(self.colors.background),

            Element::Title => Style::default()
                .fg(self.colors.foreground)
                .bg(self.colors.background)
                .add_modifier(Modifier::BOLD),

            Element::Border => Style::default()
                .fg(self.colors.border)
                .bg(self.colors.background),

            Element::Highlight => Style::default()
                .fg(self.colors.highlight)
                .bg(self.colors.selection)
                .add_modifier(Modifier::BOLD),

            Element::Inactive => Style::default()
                .fg(self.colors.border)
                .bg(self.colors.background),

            Element::Card => Style::default()
                .fg(self.colors.card_text)
                .bg(self.colors.card),

            Element::MoodTag => Style::default()
                .fg(self.colors.selection)
                .bg(self.colors.card)
                .add_modifier(Modifier::BOLD),
        }
    }

    pub fn text_style(&self) -> Style {
        self.ratatui_style(Element::Text)
    }

    pub fn highlight_style(&self) -> Style {
        self.ratatui_style(Element::Highlight)
    }
}

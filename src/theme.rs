//! Theme system for the TUI.
//!
//! `ThemeVariant` selects between the Dark and Light palettes; `ColorPalette`
//! maps every semantic UI role to a ratatui `Style`.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Theme Variant
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeVariant {
    #[default]
    Dark,
    Light,
}

impl ThemeVariant {
    /// Parse a variant name (case-insensitive).
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    pub fn palette(self) -> ColorPalette {
        match self {
            Self::Dark => ColorPalette::dark(),
            Self::Light => ColorPalette::light(),
        }
    }

    /// Dark → Light → Dark.
    pub fn next(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }
}

// ============================================================================
// Color Palette
// ============================================================================

/// Every semantic UI role mapped to a `Style`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorPalette {
    // -- Header --
    pub header_title: Style,
    pub header_subtitle: Style,
    pub spinner: Style,

    // -- Category strip --
    pub category_active: Style,
    pub category_inactive: Style,

    // -- News cards --
    pub card_title: Style,
    pub card_description: Style,
    pub card_meta: Style,
    pub card_category: Style,
    pub card_selected: Style,
    pub bookmark_marker: Style,
    pub empty_state: Style,

    // -- Article detail --
    pub reader_heading: Style,
    pub reader_body: Style,
    pub reader_metadata: Style,
    pub reader_link: Style,

    // -- Chrome --
    pub tab_active: Style,
    pub tab_inactive: Style,
    pub toast: Style,
    pub search_input: Style,
    pub panel_border: Style,
    pub panel_border_focused: Style,
    pub picker_selected: Style,
}

impl ColorPalette {
    fn dark() -> Self {
        let accent = Color::Cyan;
        let selected = Style::default().bg(Color::DarkGray).fg(Color::White);
        Self {
            header_title: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            header_subtitle: Style::default().fg(Color::Gray),
            spinner: Style::default().fg(Color::Yellow),

            category_active: Style::default()
                .bg(accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            category_inactive: Style::default().fg(Color::Gray),

            card_title: Style::default().add_modifier(Modifier::BOLD),
            card_description: Style::default().fg(Color::Gray),
            card_meta: Style::default().fg(Color::DarkGray),
            card_category: Style::default().fg(accent),
            card_selected: selected,
            bookmark_marker: Style::default().fg(Color::Yellow),
            empty_state: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),

            reader_heading: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            reader_body: Style::default(),
            reader_metadata: Style::default().fg(Color::DarkGray),
            reader_link: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::UNDERLINED),

            tab_active: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::DarkGray),
            toast: Style::default().bg(Color::White).fg(Color::Black),
            search_input: Style::default().fg(Color::White),
            panel_border: Style::default().fg(Color::DarkGray),
            panel_border_focused: Style::default().fg(accent),
            picker_selected: selected.add_modifier(Modifier::BOLD),
        }
    }

    fn light() -> Self {
        let accent = Color::Blue;
        let selected = Style::default().bg(Color::Blue).fg(Color::White);
        Self {
            header_title: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            header_subtitle: Style::default().fg(Color::DarkGray),
            spinner: Style::default().fg(Color::Magenta),

            category_active: Style::default()
                .bg(accent)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            category_inactive: Style::default().fg(Color::DarkGray),

            card_title: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            card_description: Style::default().fg(Color::DarkGray),
            card_meta: Style::default().fg(Color::DarkGray),
            card_category: Style::default().fg(accent),
            card_selected: selected,
            bookmark_marker: Style::default().fg(Color::Magenta),
            empty_state: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),

            reader_heading: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            reader_body: Style::default().fg(Color::Black),
            reader_metadata: Style::default().fg(Color::DarkGray),
            reader_link: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::UNDERLINED),

            tab_active: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::DarkGray),
            toast: Style::default().bg(Color::Black).fg(Color::White),
            search_input: Style::default().fg(Color::Black),
            panel_border: Style::default().fg(Color::DarkGray),
            panel_border_focused: Style::default().fg(accent),
            picker_selected: selected.add_modifier(Modifier::BOLD),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

//! TUI color semantics and style constants.
//!
//! Pure data, consumed by the rendering layer and by the table's
//! per-cell style function.
//!
//! Color semantics:
//! - Green accent: the focused pane, the locked row
//! - Sand accent: panes without focus
//! - Per-type colors: categorical table columns, dimmed on even rows
//! - Two grays: zebra striping for plain columns

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// ACCENTS
// ============================================================================

/// Border of the pane that has focus.
pub const ACCENT_ACTIVE: Color = Color::Rgb(0x01, 0xBE, 0x85);

/// Border of panes without focus.
pub const ACCENT_NEUTRAL: Color = Color::Rgb(0xF2, 0xCC, 0x8F);

// ============================================================================
// TABLE STYLES
// ============================================================================

/// Header row, overriding category and parity styling.
pub const STYLE_HEADER: Style = Style::new()
    .fg(Color::Indexed(252))
    .add_modifier(Modifier::BOLD);

/// Locked row, overriding everything else.
pub const STYLE_SELECTED: Style = Style::new()
    .fg(Color::Rgb(0x01, 0xBE, 0x85))
    .bg(Color::Rgb(0x00, 0x43, 0x2F));

/// Plain cells on odd rows.
pub const STYLE_ROW_ODD: Style = Style::new().fg(Color::Indexed(252));

/// Plain cells on even rows.
pub const STYLE_ROW_EVEN: Style = Style::new().fg(Color::Indexed(245));

/// Marker drawn in front of the highlighted row.
pub const HIGHLIGHT_SYMBOL: &str = "▶ ";

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

/// Title bar.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

/// Wizard prompt above the field.
pub const STYLE_PROMPT: Style = Style::new().add_modifier(Modifier::BOLD);

/// De-emphasized text.
pub const STYLE_DIM: Style = Style::new().fg(Color::DarkGray);

/// Important text.
pub const STYLE_IMPORTANT: Style = Style::new().add_modifier(Modifier::BOLD);

// ============================================================================
// CATEGORY PALETTE
// ============================================================================

/// (category, bright, dimmed)
const CATEGORY_COLORS: [(&str, Color, Color); 9] = [
    ("Bug", Color::Rgb(0xD7, 0xFF, 0x87), Color::Rgb(0x97, 0xAD, 0x64)),
    ("Electric", Color::Rgb(0xFD, 0xFF, 0x90), Color::Rgb(0xFC, 0xFF, 0x5F)),
    ("Fire", Color::Rgb(0xFF, 0x76, 0x98), Color::Rgb(0xBA, 0x5F, 0x75)),
    ("Flying", Color::Rgb(0xFF, 0x87, 0xD7), Color::Rgb(0xC9, 0x7A, 0xB2)),
    ("Grass", Color::Rgb(0x75, 0xFB, 0xAB), Color::Rgb(0x59, 0xB9, 0x80)),
    ("Ground", Color::Rgb(0xFF, 0x87, 0x5F), Color::Rgb(0xC7, 0x72, 0x52)),
    ("Normal", Color::Rgb(0x92, 0x92, 0x92), Color::Rgb(0x72, 0x72, 0x72)),
    ("Poison", Color::Rgb(0x7D, 0x5A, 0xFC), Color::Rgb(0x63, 0x4B, 0xD0)),
    ("Water", Color::Rgb(0x00, 0xE2, 0xC7), Color::Rgb(0x43, 0x9F, 0x8E)),
];

/// Color for a category value, dimmed for even rows. Unknown categories
/// have no color.
pub fn category_color(category: &str, dimmed: bool) -> Option<Color> {
    CATEGORY_COLORS
        .iter()
        .find(|(name, _, _)| *name == category)
        .map(|&(_, bright, dim)| if dimmed { dim } else { bright })
}

/// Border color for a pane.
pub fn border_color(active: bool) -> Color {
    if active { ACCENT_ACTIVE } else { ACCENT_NEUTRAL }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_categories_have_bright_and_dim_colors() {
        assert_eq!(category_color("Fire", false), Some(Color::Rgb(0xFF, 0x76, 0x98)));
        assert_eq!(category_color("Fire", true), Some(Color::Rgb(0xBA, 0x5F, 0x75)));
    }

    #[test]
    fn unknown_category_has_no_color() {
        assert_eq!(category_color("Dragon", false), None);
        assert_eq!(category_color("", true), None);
    }

    #[test]
    fn header_style_is_bold() {
        assert!(STYLE_HEADER.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn selected_style_sets_both_colors() {
        assert!(STYLE_SELECTED.fg.is_some());
        assert!(STYLE_SELECTED.bg.is_some());
    }

    #[test]
    fn border_color_follows_focus() {
        assert_eq!(border_color(true), ACCENT_ACTIVE);
        assert_eq!(border_color(false), ACCENT_NEUTRAL);
    }
}

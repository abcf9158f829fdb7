//! Static row styling.
//!
//! Rows never build their colour styles while rendering: both variants are
//! formatted once from the configured [`PaletteTable`] and selected by flag.

use shared::config::{ColorPair, PaletteTable};
use yew::AttrValue;

/// Layout shared by every row, independent of its colour scheme.
pub const ROW_LAYOUT_STYLE: &str = "display: flex; gap: 1rem; align-items: center; \
    position: relative; padding: 1rem; border-radius: 8px; \
    box-shadow: 0 2px 4px rgba(0, 0, 0, 0.1);";

/// Presence dot pinned to the right edge of the row.
pub const PRESENCE_DOT_STYLE: &str = "width: 10px; height: 10px; border-radius: 50%; \
    background-color: green; position: absolute; top: 50%; right: 1rem; \
    transform: translateY(-50%);";

/// Reset applied to the anchor wrapping each row.
pub const ROW_LINK_STYLE: &str = "display: block; padding: 0; text-decoration: none;";

/// Pre-rendered colour styles for the two row states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowPalette {
    default: AttrValue,
    highlighted: AttrValue,
}

impl RowPalette {
    pub fn new(table: &PaletteTable) -> Self {
        Self {
            default: AttrValue::from(color_style(&table.default)),
            highlighted: AttrValue::from(color_style(&table.highlighted)),
        }
    }

    /// Colour declarations for a row in the given state.
    pub fn select(&self, is_highlighted: bool) -> &AttrValue {
        if is_highlighted {
            &self.highlighted
        } else {
            &self.default
        }
    }
}

impl Default for RowPalette {
    fn default() -> Self {
        Self::new(&PaletteTable::default())
    }
}

fn color_style(pair: &ColorPair) -> String {
    format!(
        "background-color: {}; color: {};",
        pair.background, pair.foreground
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette_styles() {
        let palette = RowPalette::default();
        assert_eq!(
            palette.select(false).as_str(),
            "background-color: #fff; color: #000;"
        );
        assert_eq!(
            palette.select(true).as_str(),
            "background-color: #333; color: #fff;"
        );
    }

    #[test]
    fn test_configured_pairs_never_mix() {
        let table = PaletteTable {
            default: ColorPair::new("navy", "ivory"),
            highlighted: ColorPair::new("white", "teal"),
        };
        let palette = RowPalette::new(&table);

        let plain = palette.select(false);
        assert!(plain.contains("ivory") && plain.contains("navy"));
        assert!(!plain.contains("teal") && !plain.contains("white"));

        let highlighted = palette.select(true);
        assert!(highlighted.contains("teal") && highlighted.contains("white"));
        assert!(!highlighted.contains("ivory") && !highlighted.contains("navy"));
    }

    #[test]
    fn test_select_returns_same_instance() {
        let palette = RowPalette::default();
        assert!(std::ptr::eq(palette.select(true), palette.select(true)));
    }
}

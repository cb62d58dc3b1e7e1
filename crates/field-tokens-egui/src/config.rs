//! Render configuration.

use crate::{DEFAULT_ICON_SIZE, DEFAULT_LABEL_SIZE, DEFAULT_ROW_HEIGHT};
use serde::{Deserialize, Serialize};

/// Sizing and behavior knobs for option rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Glyph text size (points).
    pub icon_size: f32,

    /// Label text size (points).
    pub label_size: f32,

    /// Row height (points).
    pub row_height: f32,

    /// Show the icon-set key as hover text on the glyph.
    pub show_icon_tooltip: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            icon_size: DEFAULT_ICON_SIZE,
            label_size: DEFAULT_LABEL_SIZE,
            row_height: DEFAULT_ROW_HEIGHT,
            show_icon_tooltip: true,
        }
    }
}

impl RenderConfig {
    /// Dense variant for narrow side panels.
    pub fn compact() -> Self {
        Self {
            icon_size: 12.0,
            label_size: 12.0,
            row_height: 18.0,
            show_icon_tooltip: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_crate_defaults() {
        let config = RenderConfig::default();
        assert_eq!(config.icon_size, DEFAULT_ICON_SIZE);
        assert_eq!(config.label_size, DEFAULT_LABEL_SIZE);
        assert_eq!(config.row_height, DEFAULT_ROW_HEIGHT);
        assert!(config.show_icon_tooltip);
    }

    #[test]
    fn compact_fits_tighter_rows() {
        let compact = RenderConfig::compact();
        let default = RenderConfig::default();
        assert!(compact.row_height < default.row_height);
        assert!(compact.icon_size <= compact.row_height);
        assert!(compact.label_size <= compact.row_height);
    }
}

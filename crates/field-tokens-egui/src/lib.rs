//! egui renderer for dtype-tagged field options.
//!
//! This crate draws the rows `field_tokens` decides. It follows egui's
//! immediate mode paradigm with pure widgets: data comes in as arguments
//! and events come back via return values, never through host state.
//!
//! The glyph stand-in is what gets drawn; icon-set keys are surfaced as
//! hover text, since named-icon resolution belongs to the host.
//!
//! # Example
//!
//! ```ignore
//! use field_tokens::{IdPrefixer, Side};
//! use field_tokens_egui::{field_select_rows, RenderConfig};
//!
//! // In your egui app's update function:
//! egui::SidePanel::right("fields").show(ctx, |ui| {
//!     let picked = field_select_rows(ui, &self.ids, Side::Right, &self.options, &self.config);
//!     if let Some(index) = picked {
//!         self.select_field(index);
//!     }
//! });
//! ```

mod config;
mod row;

pub use config::RenderConfig;
pub use row::{field_select_rows, option_row};

/// Default glyph text size (points).
pub const DEFAULT_ICON_SIZE: f32 = 16.0;

/// Default label text size (points).
pub const DEFAULT_LABEL_SIZE: f32 = 14.0;

/// Default row height (points).
pub const DEFAULT_ROW_HEIGHT: f32 = 22.0;

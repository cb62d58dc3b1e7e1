//! Dtype-tagged field option tokens.
//!
//! A select option's value can carry its column dtype inline, as
//! `label<<kind>>` with `kind` one of seven closed kind words. This crate
//! decodes those values, picks the icon for the kind, and decides row
//! layout, all as pure functions over the input strings.
//!
//! # Architecture
//!
//! ```text
//! value "revenue<<float>>" ──► extract_kind ──► Some(Float) ──► icon_for
//!                                                                  │
//! label "Revenue" ────────────────────► render_option ◄────────────┘
//!                                            │
//!                                            ▼
//!                            RenderedOption { justify, elements }
//! ```
//!
//! Decoding is total: a value with no tag, an unknown kind word, or
//! malformed marker text is "untyped" and renders with the fallback icon.
//! Only the producer side ([`encode_value`], [`build_options`]) can fail.
//!
//! # Example
//!
//! ```
//! use field_tokens::{extract_kind, render_option, DtypeKind, Justify, Side};
//!
//! assert_eq!(extract_kind("revenue<<float>>"), Some(DtypeKind::Float));
//! assert_eq!(extract_kind("notes"), None);
//!
//! let row = render_option(Side::Right, "revenue<<float>>", "Revenue");
//! assert_eq!(row.justify, Justify::SpaceBetween);
//! ```

mod error;
mod icon;
mod kind;
mod options;
mod render;
mod tag;

pub use error::TokenError;
pub use icon::{icon_for, IconDef, UNKNOWN_ICON};
pub use kind::DtypeKind;
pub use options::{build_options, ColumnSpec, FieldOption, IdPrefixer};
pub use render::{render_option, Element, Justify, RenderedOption, Side};
pub use tag::{
    display_label, encode_value, extract_kind, split_tagged, CLOSE_MARKER, OPEN_MARKER,
};

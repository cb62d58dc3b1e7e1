//! Icon lookup table.
//!
//! Fixed mapping from dtype kind to an icon: an icon-set key for hosts that
//! resolve named icons, plus a short glyph stand-in for text-only rendering.
//! The table is closed; the match in [`DtypeKind::icon`] is the single place
//! a new kind gets its row.

use crate::kind::DtypeKind;
use serde::Serialize;

/// Icon reference: icon-set key plus a glyph stand-in.
///
/// The key is an external asset reference; resolving it to pixels is the
/// host renderer's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IconDef {
    /// Key into the external icon set (e.g. `"carbon:boolean"`).
    pub icon_name: &'static str,
    /// Short text stand-in when named icons are unavailable.
    pub glyph: &'static str,
}

/// Fallback icon for untyped values and unrecognized kind words.
pub const UNKNOWN_ICON: IconDef = IconDef {
    icon_name: "carbon:unknown",
    glyph: "?",
};

impl DtypeKind {
    /// Icon for this kind.
    pub const fn icon(self) -> IconDef {
        match self {
            DtypeKind::Str => IconDef {
                icon_name: "carbon:string-text",
                glyph: "abc",
            },
            DtypeKind::Category => IconDef {
                icon_name: "carbon:category",
                glyph: "a|b",
            },
            DtypeKind::Int => IconDef {
                icon_name: "carbon:string-integer",
                glyph: "123",
            },
            DtypeKind::Float => IconDef {
                icon_name: "carbon:character-decimal",
                glyph: "1.0",
            },
            DtypeKind::Bool => IconDef {
                icon_name: "carbon:boolean",
                glyph: "t/f",
            },
            DtypeKind::Date => IconDef {
                icon_name: "carbon:calendar",
                glyph: "▦",
            },
            DtypeKind::Datetime => IconDef {
                icon_name: "carbon:time",
                glyph: "◷",
            },
        }
    }
}

/// Icon for a maybe-absent kind, falling back to [`UNKNOWN_ICON`].
///
/// # Example
///
/// ```
/// use field_tokens::{extract_kind, icon_for, UNKNOWN_ICON};
///
/// assert_eq!(icon_for(extract_kind("flag<<bool>>")).icon_name, "carbon:boolean");
/// assert_eq!(icon_for(extract_kind("notes")), UNKNOWN_ICON);
/// ```
pub fn icon_for(kind: Option<DtypeKind>) -> IconDef {
    kind.map(DtypeKind::icon).unwrap_or(UNKNOWN_ICON)
}

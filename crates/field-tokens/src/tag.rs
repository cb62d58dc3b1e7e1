//! Tagged value codec.
//!
//! A select option's value may carry its column dtype inline: `label<<kind>>`
//! with `kind` one of the closed kind words. Decoding is total and strict:
//! the whole value must match, the kind word must be known, and the label
//! part must not itself contain marker text. Everything else is untyped.

use crate::error::TokenError;
use crate::kind::DtypeKind;
use regex::Regex;
use std::sync::LazyLock;

/// Opens a trailing dtype tag.
pub const OPEN_MARKER: &str = "<<";

/// Closes a trailing dtype tag.
pub const CLOSE_MARKER: &str = ">>";

/// Anchored `label<<kind>>` pattern over the closed kind set.
///
/// `(?s)` lets the label part span any character; strictness comes from the
/// full-string anchors and the marker check in [`split_tagged`].
static TAGGED_RE: LazyLock<Regex> = LazyLock::new(|| {
    let kinds = DtypeKind::ALL.map(|k| k.as_str()).join("|");
    Regex::new(&format!(r"(?s)^(.+)<<({})>>$", kinds)).unwrap()
});

/// Split a raw option value into its label and kind.
///
/// Returns `None` for any value that is not exactly `label<<kind>>`: no tag,
/// an unknown kind word, trailing characters after the tag, or marker text
/// inside the label part (a value carrying more than one tag is rejected
/// whole rather than matched partially).
///
/// # Example
///
/// ```
/// use field_tokens::{split_tagged, DtypeKind};
///
/// assert_eq!(split_tagged("age<<int>>"), Some(("age", DtypeKind::Int)));
/// assert_eq!(split_tagged("age<<int>> "), None);
/// assert_eq!(split_tagged("age<<int>><<bool>>"), None);
/// ```
pub fn split_tagged(value: &str) -> Option<(&str, DtypeKind)> {
    let caps = TAGGED_RE.captures(value)?;
    let label = caps.get(1)?.as_str();
    if label.contains(OPEN_MARKER) || label.contains(CLOSE_MARKER) {
        return None;
    }
    // The alternation only admits known kind words, so this parse holds.
    let kind = caps.get(2)?.as_str().parse().ok()?;
    Some((label, kind))
}

/// Extract the dtype kind from a raw option value, if strictly tagged.
///
/// # Example
///
/// ```
/// use field_tokens::{extract_kind, DtypeKind};
///
/// assert_eq!(extract_kind("revenue<<float>>"), Some(DtypeKind::Float));
/// assert_eq!(extract_kind("notes"), None);
/// assert_eq!(extract_kind("weird<<xyz>>"), None);
/// ```
pub fn extract_kind(value: &str) -> Option<DtypeKind> {
    split_tagged(value).map(|(_, kind)| kind)
}

/// Display text for a raw option value: the label part when tagged, the
/// whole value otherwise.
///
/// # Example
///
/// ```
/// use field_tokens::display_label;
///
/// assert_eq!(display_label("revenue<<float>>"), "revenue");
/// assert_eq!(display_label("notes"), "notes");
/// ```
pub fn display_label(value: &str) -> &str {
    split_tagged(value).map_or(value, |(label, _)| label)
}

/// Build the tagged wire form of a label and kind.
///
/// Rejects labels the strict decoder could not round-trip: empty labels and
/// labels containing marker text.
///
/// # Example
///
/// ```
/// use field_tokens::{encode_value, DtypeKind};
///
/// let value = encode_value("revenue", DtypeKind::Float).unwrap();
/// assert_eq!(value, "revenue<<float>>");
/// assert!(encode_value("", DtypeKind::Str).is_err());
/// ```
pub fn encode_value(label: &str, kind: DtypeKind) -> Result<String, TokenError> {
    validate_label(label)?;
    Ok(format!(
        "{}{}{}{}",
        label,
        OPEN_MARKER,
        kind.as_str(),
        CLOSE_MARKER
    ))
}

/// Check that a label survives the strict decoder unchanged.
pub(crate) fn validate_label(label: &str) -> Result<(), TokenError> {
    if label.is_empty() {
        return Err(TokenError::EmptyLabel);
    }
    if label.contains(OPEN_MARKER) || label.contains(CLOSE_MARKER) {
        return Err(TokenError::ReservedMarker(label.to_string()));
    }
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================


// ---------------------------------------------------------------------------
// Property tests
// ---------------------------------------------------------------------------

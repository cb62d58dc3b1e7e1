//! Fault types for the value codec.
//!
//! The decode side is total: malformed or missing tags are the "untyped"
//! case, not errors. Faults only exist where we produce values (encoding,
//! option building) or parse a bare kind word.

use thiserror::Error;

/// Error raised when producing tagged values or parsing a kind word.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Label part is empty.
    #[error("Empty label: a tagged value needs a non-empty label")]
    EmptyLabel,

    /// Label contains the tag marker text, which the decoder reserves.
    #[error("Label {0:?} contains a reserved tag marker")]
    ReservedMarker(String),

    /// Kind word outside the closed set.
    #[error("Unknown dtype tag: {0}")]
    UnknownTag(String),
}

//! Dtype kind model.
//!
//! The closed set of data-type kinds a field option can carry. Kind words
//! are exact and lowercase on the wire (`str`, never `Str` or ` str`),
//! matching the option values the schema layer produces.

use crate::error::TokenError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Data-type kind carried by a tagged option value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DtypeKind {
    /// Free-form text column.
    Str,
    /// Categorical column with a bounded value set.
    Category,
    /// Whole-number column.
    Int,
    /// Floating-point column.
    Float,
    /// Boolean column.
    Bool,
    /// Calendar date column.
    Date,
    /// Date-with-time column.
    Datetime,
}

impl DtypeKind {
    /// Every kind, in display order.
    pub const ALL: [DtypeKind; 7] = [
        DtypeKind::Str,
        DtypeKind::Category,
        DtypeKind::Int,
        DtypeKind::Float,
        DtypeKind::Bool,
        DtypeKind::Date,
        DtypeKind::Datetime,
    ];

    /// The wire kind word.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Str => "str",
            Self::Category => "category",
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::Date => "date",
            Self::Datetime => "datetime",
        }
    }

    /// Is this a numeric column kind?
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Int | Self::Float)
    }

    /// Is this a date or datetime column kind?
    pub fn is_temporal(&self) -> bool {
        matches!(self, Self::Date | Self::Datetime)
    }
}

impl FromStr for DtypeKind {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "str" => Ok(Self::Str),
            "category" => Ok(Self::Category),
            "int" => Ok(Self::Int),
            "float" => Ok(Self::Float),
            "bool" => Ok(Self::Bool),
            "date" => Ok(Self::Date),
            "datetime" => Ok(Self::Datetime),
            _ => Err(TokenError::UnknownTag(s.to_string())),
        }
    }
}

impl std::fmt::Display for DtypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

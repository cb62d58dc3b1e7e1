//! Option list building.
//!
//! Producer side of the codec: turn a datasource's column listing into the
//! `{value, label}` pairs a select control consumes, with the dtype tag
//! folded into each value. Every produced value decodes back to its column
//! under the strict rules in [`crate::tag`].

use crate::error::TokenError;
use crate::kind::DtypeKind;
use crate::tag::{encode_value, validate_label};
use serde::{Deserialize, Serialize};

/// One column of the backing datasource: display name plus optional dtype.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Column name, used verbatim as the option label.
    pub name: String,
    /// Column dtype, when the datasource knows it.
    #[serde(default)]
    pub kind: Option<DtypeKind>,
}

impl ColumnSpec {
    /// Column with a known dtype.
    pub fn typed(name: impl Into<String>, kind: DtypeKind) -> Self {
        Self {
            name: name.into(),
            kind: Some(kind),
        }
    }

    /// Column without dtype information.
    pub fn untyped(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: None,
        }
    }
}

/// One entry of a select control: raw value plus display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOption {
    /// Raw option value, tagged when the column has a dtype.
    pub value: String,
    /// Display text.
    pub label: String,
}

/// Build select options from a column listing.
///
/// Tagged values are produced for columns with a known dtype; untyped
/// columns pass their name through as-is. Names are validated uniformly so
/// every produced value survives the strict decoder, tagged or not.
///
/// # Example
///
/// ```
/// use field_tokens::{build_options, ColumnSpec, DtypeKind};
///
/// let options = build_options(&[
///     ColumnSpec::typed("revenue", DtypeKind::Float),
///     ColumnSpec::untyped("notes"),
/// ])
/// .unwrap();
///
/// assert_eq!(options[0].value, "revenue<<float>>");
/// assert_eq!(options[1].value, "notes");
/// ```
pub fn build_options(columns: &[ColumnSpec]) -> Result<Vec<FieldOption>, TokenError> {
    columns
        .iter()
        .map(|column| {
            let value = match column.kind {
                Some(kind) => encode_value(&column.name, kind)?,
                None => {
                    validate_label(&column.name)?;
                    column.name.clone()
                }
            };
            Ok(FieldOption {
                value,
                label: column.name.clone(),
            })
        })
        .collect()
}

/// Component id prefixer for pages that mount the same control set more
/// than once. The prefix carries its own separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdPrefixer {
    prefix: String,
}

impl IdPrefixer {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Prefixed component id.
    pub fn id(&self, name: &str) -> String {
        format!("{}{}", self.prefix, name)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::{display_label, extract_kind};

    fn demo_columns() -> Vec<ColumnSpec> {
        vec![
            ColumnSpec::typed("revenue", DtypeKind::Float),
            ColumnSpec::typed("region", DtypeKind::Category),
            ColumnSpec::typed("active", DtypeKind::Bool),
            ColumnSpec::untyped("notes"),
        ]
    }

    #[test]
    fn builds_tagged_and_plain_values() {
        let options = build_options(&demo_columns()).unwrap();

        assert_eq!(options.len(), 4);
        assert_eq!(options[0].value, "revenue<<float>>");
        assert_eq!(options[0].label, "revenue");
        assert_eq!(options[1].value, "region<<category>>");
        assert_eq!(options[2].value, "active<<bool>>");
        assert_eq!(options[3].value, "notes");
        assert_eq!(options[3].label, "notes");
    }

    #[test]
    fn produced_values_decode_back_to_their_columns() {
        let columns = demo_columns();
        let options = build_options(&columns).unwrap();

        for (column, option) in columns.iter().zip(&options) {
            assert_eq!(extract_kind(&option.value), column.kind);
            assert_eq!(display_label(&option.value), column.name);
            assert_eq!(option.label, column.name);
        }
    }

    #[test]
    fn rejects_names_the_decoder_would_misread() {
        let err = build_options(&[ColumnSpec::typed("a<<b", DtypeKind::Int)]).unwrap_err();
        assert_eq!(err, TokenError::ReservedMarker("a<<b".to_string()));

        // Untyped names go through the same validation.
        let err = build_options(&[ColumnSpec::untyped("a>>b")]).unwrap_err();
        assert_eq!(err, TokenError::ReservedMarker("a>>b".to_string()));

        let err = build_options(&[ColumnSpec::untyped("")]).unwrap_err();
        assert_eq!(err, TokenError::EmptyLabel);
    }

    #[test]
    fn one_bad_column_fails_the_whole_listing() {
        let columns = vec![
            ColumnSpec::typed("ok", DtypeKind::Str),
            ColumnSpec::untyped(""),
        ];
        assert!(build_options(&columns).is_err());
    }

    #[test]
    fn prefixer_concatenates_verbatim() {
        let ids = IdPrefixer::new("distro-demo_set-");
        assert_eq!(ids.id("field-select"), "distro-demo_set-field-select");

        // No separator is invented for the caller.
        let ids = IdPrefixer::new("x");
        assert_eq!(ids.id("y"), "xy");
    }

    #[test]
    fn column_spec_deserializes_without_kind() {
        let column: ColumnSpec = serde_json::from_str(r#"{"name": "notes"}"#).unwrap();
        assert_eq!(column, ColumnSpec::untyped("notes"));

        let column: ColumnSpec =
            serde_json::from_str(r#"{"name": "age", "kind": "int"}"#).unwrap();
        assert_eq!(column, ColumnSpec::typed("age", DtypeKind::Int));
    }
}

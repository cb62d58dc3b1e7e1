//! Render decision for option rows.
//!
//! [`render_option`] turns one raw option (value string plus display label)
//! into a fully decided row: container justification and the two elements in
//! draw order. The decision is pure; hosts only have to draw what they get.

use crate::icon::icon_for;
use crate::tag::extract_kind;
use serde::{Deserialize, Serialize};

/// Which side of the control the icon column sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Container justification for this side: left-side rows pack together,
    /// right-side rows push their elements apart.
    pub fn justify(self) -> Justify {
        match self {
            Side::Left => Justify::FlexStart,
            Side::Right => Justify::SpaceBetween,
        }
    }
}

/// Row container justification. Serialized form is the CSS keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Justify {
    FlexStart,
    SpaceBetween,
}

/// One element of a rendered row, in draw order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    /// The kind icon (or the fallback icon).
    Icon { name: String, glyph: String },
    /// The option's display text.
    Label { text: String },
}

/// A fully decided option row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedOption {
    /// Container justification.
    pub justify: Justify,
    /// The icon and label in draw order.
    pub elements: [Element; 2],
}

impl RenderedOption {
    /// The row's icon element as `(icon_name, glyph)`, wherever it sits in
    /// the pair.
    pub fn icon(&self) -> Option<(&str, &str)> {
        self.elements.iter().find_map(|element| match element {
            Element::Icon { name, glyph } => Some((name.as_str(), glyph.as_str())),
            Element::Label { .. } => None,
        })
    }

    /// The row's label text, wherever it sits in the pair.
    pub fn label(&self) -> Option<&str> {
        self.elements.iter().find_map(|element| match element {
            Element::Label { text } => Some(text.as_str()),
            Element::Icon { .. } => None,
        })
    }
}

/// Decide the row for one option.
///
/// The icon comes from the value's dtype tag (fallback when absent or
/// unrecognized). `Side::Left` draws the icon first, packed; `Side::Right`
/// draws the label first with the icon pushed to the far edge.
///
/// # Example
///
/// ```
/// use field_tokens::{render_option, Element, Justify, Side};
///
/// let row = render_option(Side::Left, "revenue<<float>>", "Revenue");
/// assert_eq!(row.justify, Justify::FlexStart);
/// assert!(matches!(&row.elements[0], Element::Icon { .. }));
/// assert!(matches!(&row.elements[1], Element::Label { text } if text == "Revenue"));
/// ```
pub fn render_option(side: Side, value: &str, label: &str) -> RenderedOption {
    let icon = icon_for(extract_kind(value));
    let icon_element = Element::Icon {
        name: icon.icon_name.to_string(),
        glyph: icon.glyph.to_string(),
    };
    let label_element = Element::Label {
        text: label.to_string(),
    };

    let elements = match side {
        Side::Left => [icon_element, label_element],
        Side::Right => [label_element, icon_element],
    };

    RenderedOption {
        justify: side.justify(),
        elements,
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::UNKNOWN_ICON;
    use crate::kind::DtypeKind;

    #[test]
    fn left_side_packs_icon_then_label() {
        let row = render_option(Side::Left, "revenue<<float>>", "Revenue");
        assert_eq!(row.justify, Justify::FlexStart);
        assert!(matches!(&row.elements[0], Element::Icon { .. }));
        assert!(matches!(&row.elements[1], Element::Label { .. }));
        assert_eq!(
            row.icon().map(|(name, _)| name),
            Some(DtypeKind::Float.icon().icon_name)
        );
        assert_eq!(row.label(), Some("Revenue"));
    }

    #[test]
    fn right_side_spreads_label_then_icon() {
        let row = render_option(Side::Right, "revenue<<float>>", "Revenue");
        assert_eq!(row.justify, Justify::SpaceBetween);
        assert!(matches!(&row.elements[0], Element::Label { .. }));
        assert!(matches!(&row.elements[1], Element::Icon { .. }));
        assert_eq!(
            row.icon().map(|(name, _)| name),
            Some(DtypeKind::Float.icon().icon_name)
        );
        assert_eq!(row.label(), Some("Revenue"));
    }

    #[test]
    fn untagged_value_renders_the_fallback_icon() {
        let row = render_option(Side::Left, "notes", "Notes");
        assert!(matches!(&row.elements[0], Element::Icon { .. }));
        assert_eq!(row.icon().map(|(name, _)| name), Some(UNKNOWN_ICON.icon_name));
        assert_eq!(row.label(), Some("Notes"));
    }

    #[test]
    fn bool_tag_renders_the_bool_icon() {
        let row = render_option(Side::Left, "flag<<bool>>", "Flag");
        assert_eq!(
            row.icon().map(|(name, _)| name),
            Some(DtypeKind::Bool.icon().icon_name)
        );
    }

    #[test]
    fn unknown_kind_word_renders_the_fallback_icon() {
        let row = render_option(Side::Left, "weird<<xyz>>", "Weird");
        assert_eq!(row.icon().map(|(name, _)| name), Some(UNKNOWN_ICON.icon_name));
    }

    #[test]
    fn accessors_find_elements_on_either_side() {
        let left = render_option(Side::Left, "when<<date>>", "When");
        let right = render_option(Side::Right, "when<<date>>", "When");

        assert_eq!(left.icon(), right.icon());
        assert_eq!(left.label(), right.label());
        assert_eq!(
            left.icon().map(|(_, glyph)| glyph),
            Some(DtypeKind::Date.icon().glyph)
        );
    }

    #[test]
    fn render_is_pure() {
        let first = render_option(Side::Right, "age<<int>>", "Age");
        let second = render_option(Side::Right, "age<<int>>", "Age");
        assert_eq!(first, second);
    }

    #[test]
    fn wire_shape_uses_css_keywords_and_tagged_elements() {
        let row = render_option(Side::Right, "age<<int>>", "Age");
        let json = serde_json::to_value(&row).unwrap();

        assert_eq!(json["justify"], "space-between");
        assert_eq!(json["elements"][0]["type"], "label");
        assert_eq!(json["elements"][0]["text"], "Age");
        assert_eq!(json["elements"][1]["type"], "icon");
        assert_eq!(json["elements"][1]["name"], "carbon:string-integer");
        assert_eq!(json["elements"][1]["glyph"], "123");

        let row = render_option(Side::Left, "age<<int>>", "Age");
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["justify"], "flex-start");
        assert_eq!(json["elements"][0]["type"], "icon");
    }

    #[test]
    fn wire_shape_round_trips() {
        let row = render_option(Side::Left, "when<<datetime>>", "When");
        let json = serde_json::to_string(&row).unwrap();
        let back: RenderedOption = serde_json::from_str(&json).unwrap();
        assert_eq!(back, row);
    }
}

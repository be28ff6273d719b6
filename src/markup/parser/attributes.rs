//! Attribute table: which attributes each tag accepts, and how their values are read.

use serde_json::Value;

use crate::markup::ast::NodeKind;

/// How an attribute's value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeShape {
    /// Free text (`bullet`).
    Text,
    /// A color name (`fg`, `bg`).
    Color,
    /// Boolean; bare presence means true.
    Flag,
    /// Integer (margins, `indent`).
    Number,
    /// Underline style; bare presence means single.
    Underline,
}

const MARGINS: [&str; 5] = [
    "margin",
    "marginLeft",
    "marginRight",
    "marginTop",
    "marginBottom",
];

/// The shape of attribute `name` on `kind`, or `None` if the tag does not accept it.
///
/// `name` must already be camelCase.
pub fn shape(kind: NodeKind, name: &str) -> Option<AttributeShape> {
    match kind {
        NodeKind::Color => match name {
            "fg" | "bg" => Some(AttributeShape::Color),
            _ => None,
        },
        NodeKind::Underline => (name == "type").then_some(AttributeShape::Underline),
        kind if kind.is_attributed() => match name {
            "fg" | "bg" => Some(AttributeShape::Color),
            "bold" | "italics" => Some(AttributeShape::Flag),
            "underline" => Some(AttributeShape::Underline),
            name if MARGINS.contains(&name) => Some(AttributeShape::Number),
            "bullet" if kind == NodeKind::ListItem => Some(AttributeShape::Text),
            "indent" if kind == NodeKind::ListItem => Some(AttributeShape::Number),
            _ => None,
        },
        _ => None,
    }
}

/// Read a boolean-like string: `true`/`yes`/`false`/`no`, any case.
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" => Some(true),
        "false" | "no" => Some(false),
        _ => None,
    }
}

/// Turn a written attribute (`None` when bare) into its raw tree value.
///
/// Only the syntax is checked here; colors, underline styles and ranges are the validator's job.
pub fn coerce(shape: AttributeShape, value: Option<&str>) -> Result<Value, String> {
    match (shape, value) {
        (AttributeShape::Flag, None) => Ok(Value::Bool(true)),
        (AttributeShape::Flag, Some(raw)) => parse_flag(raw)
            .map(Value::Bool)
            .ok_or_else(|| format!("expected true, yes, false or no, found `{raw}`")),
        (AttributeShape::Number, Some(raw)) => raw
            .trim()
            .parse::<i64>()
            .map(Value::from)
            .map_err(|_| format!("expected an integer, found `{raw}`")),
        (AttributeShape::Underline, None) => Ok(Value::Bool(true)),
        (AttributeShape::Text | AttributeShape::Color | AttributeShape::Underline, Some(raw)) => {
            Ok(Value::from(raw))
        }
        (AttributeShape::Text | AttributeShape::Color | AttributeShape::Number, None) => {
            Err("a value is required".to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(NodeKind::H1, "fg", Some(AttributeShape::Color))]
    #[case(NodeKind::Span, "italics", Some(AttributeShape::Flag))]
    #[case(NodeKind::Div, "marginTop", Some(AttributeShape::Number))]
    #[case(NodeKind::ListItem, "bullet", Some(AttributeShape::Text))]
    #[case(NodeKind::ListItem, "indent", Some(AttributeShape::Number))]
    #[case(NodeKind::Paragraph, "bullet", None)]
    #[case(NodeKind::Underline, "type", Some(AttributeShape::Underline))]
    #[case(NodeKind::Color, "bold", None)]
    #[case(NodeKind::Bold, "fg", None)]
    #[case(NodeKind::Break, "fg", None)]
    fn test_shape(
        #[case] kind: NodeKind,
        #[case] name: &str,
        #[case] expected: Option<AttributeShape>,
    ) {
        assert_eq!(shape(kind, name), expected);
    }

    #[rstest]
    #[case(AttributeShape::Flag, None, json!(true))]
    #[case(AttributeShape::Flag, Some("No"), json!(false))]
    #[case(AttributeShape::Flag, Some("YES"), json!(true))]
    #[case(AttributeShape::Number, Some("2"), json!(2))]
    #[case(AttributeShape::Number, Some("-1"), json!(-1))]
    #[case(AttributeShape::Underline, None, json!(true))]
    #[case(AttributeShape::Underline, Some("double"), json!("double"))]
    #[case(AttributeShape::Text, Some("- "), json!("- "))]
    fn test_coerce(
        #[case] shape: AttributeShape,
        #[case] value: Option<&str>,
        #[case] expected: Value,
    ) {
        assert_eq!(coerce(shape, value).unwrap(), expected);
    }

    #[rstest]
    #[case(AttributeShape::Flag, Some("maybe"))]
    #[case(AttributeShape::Number, Some("two"))]
    #[case(AttributeShape::Number, None)]
    #[case(AttributeShape::Color, None)]
    fn test_coerce_rejects(#[case] shape: AttributeShape, #[case] value: Option<&str>) {
        assert!(coerce(shape, value).is_err());
    }
}

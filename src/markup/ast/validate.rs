//! Raw tree validation
//!
//! [validate] walks the whole raw tree and records an issue for every violated constraint instead
//! of stopping at the first one. It never panics: any JSON value is acceptable input.

use serde_json::{Map, Value};

use super::node::{
    AttributedNode, ColorNode, Content, InlineNode, Node, NodeKind, TextNode, UnderlineNode,
};
use super::{Ast, MAX_NESTING};
use crate::markup::error::{ValidationError, ValidationIssue};
use crate::markup::parser::attributes::{parse_flag, shape, AttributeShape};
use crate::markup::theme::{Color, Style, UnderlineStyle};

/// Narrow a raw tree into an [Ast].
pub fn validate(raw: &Value) -> Result<Ast, ValidationError> {
    let mut validator = Validator::default();
    let nodes = match raw {
        Value::Array(items) => validator.nodes(items, "$"),
        other => {
            validator.issue("$", "document must be a list of nodes", "array", other);
            Vec::new()
        }
    };
    if validator.issues.is_empty() {
        Ok(Ast::new(nodes))
    } else {
        Err(ValidationError::new(validator.issues))
    }
}

/// Short description of a raw value for issue reports.
fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(flag) => format!("boolean {flag}"),
        Value::Number(number) => format!("number {number}"),
        Value::String(text) => format!("string {text:?}"),
        Value::Array(items) => format!("array of {}", items.len()),
        Value::Object(_) => "object".to_string(),
    }
}

fn tag_list() -> String {
    NodeKind::ALL
        .iter()
        .map(|kind| kind.tag())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Default)]
struct Validator {
    issues: Vec<ValidationIssue>,
    /// Elements currently open around the node being checked.
    depth: usize,
}

impl Validator {
    fn issue(&mut self, path: &str, message: impl Into<String>, expected: &str, received: &Value) {
        self.push(path, message, expected, describe(received));
    }

    fn missing(&mut self, path: &str, message: impl Into<String>, expected: &str) {
        self.push(path, message, expected, "nothing".to_string());
    }

    fn push(&mut self, path: &str, message: impl Into<String>, expected: &str, received: String) {
        self.issues.push(ValidationIssue {
            path: path.to_string(),
            message: message.into(),
            expected: expected.to_string(),
            received,
        });
    }

    fn nodes(&mut self, items: &[Value], path: &str) -> Vec<Node> {
        items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| self.node(item, &format!("{path}[{index}]")))
            .collect()
    }

    fn content(&mut self, value: &Value, path: &str) -> Option<Content> {
        match value {
            Value::Object(_) => self
                .node(value, path)
                .map(|node| Content::Single(Box::new(node))),
            Value::Array(items) => Content::from_nodes(self.nodes(items, path)),
            other => {
                self.issue(
                    path,
                    "content must be a node or a list of nodes",
                    "object or array",
                    other,
                );
                None
            }
        }
    }

    fn node(&mut self, value: &Value, path: &str) -> Option<Node> {
        let Value::Object(object) = value else {
            self.issue(path, "node must be an object", "object", value);
            return None;
        };
        let kind = self.kind(object, path)?;

        for (key, value) in object {
            let known = key == "node"
                || (key == "content" && kind.has_content())
                || (key == "value" && kind == NodeKind::Text)
                || shape(kind, key).is_some();
            if !known {
                self.issue(
                    &format!("{path}.{key}"),
                    format!("unrecognised attribute `{key}` on `{kind}`"),
                    "no such attribute",
                    value,
                );
            }
        }

        let node = match kind {
            NodeKind::Text => Node::Text(TextNode::new(self.text_value(object, path))),
            NodeKind::Break => Node::Break,
            NodeKind::Bold => Node::Bold(InlineNode::new(self.content_of(object, path))),
            NodeKind::Italics => Node::Italics(InlineNode::new(self.content_of(object, path))),
            NodeKind::Underline => {
                let style = self.underline_type(object, path);
                Node::Underline(UnderlineNode {
                    style,
                    content: self.content_of(object, path),
                })
            }
            NodeKind::Color => {
                let fg = self.color_attribute(object, "fg", path);
                let bg = self.color_attribute(object, "bg", path);
                Node::Color(ColorNode {
                    fg,
                    bg,
                    content: self.content_of(object, path),
                })
            }
            kind => {
                let style = self.style(kind, object, path);
                let content = self.content_of(object, path);
                Node::attributed(kind, AttributedNode { style, content })?
            }
        };
        Some(node)
    }

    fn content_of(&mut self, object: &Map<String, Value>, path: &str) -> Option<Content> {
        let value = object.get("content")?;
        let path = format!("{path}.content");
        if self.depth >= MAX_NESTING {
            self.push(
                &path,
                "nesting too deep",
                &format!("at most {MAX_NESTING} levels"),
                describe(value),
            );
            return None;
        }
        self.depth += 1;
        let content = self.content(value, &path);
        self.depth -= 1;
        content
    }

    fn kind(&mut self, object: &Map<String, Value>, path: &str) -> Option<NodeKind> {
        let path = format!("{path}.node");
        match object.get("node") {
            None => {
                self.missing(&path, "missing node type", &tag_list());
                None
            }
            Some(Value::String(tag)) => {
                let kind = NodeKind::from_tag(tag);
                if kind.is_none() {
                    self.push(
                        &path,
                        format!("unknown node type `{tag}`"),
                        &tag_list(),
                        format!("string {tag:?}"),
                    );
                }
                kind
            }
            Some(other) => {
                self.issue(&path, "node type must be a string", &tag_list(), other);
                None
            }
        }
    }

    fn text_value(&mut self, object: &Map<String, Value>, path: &str) -> String {
        let path = format!("{path}.value");
        match object.get("value") {
            Some(Value::String(text)) => text.clone(),
            Some(other) => {
                self.issue(&path, "text value must be a string", "string", other);
                String::new()
            }
            None => {
                self.missing(&path, "missing required attribute `value`", "string");
                String::new()
            }
        }
    }

    fn underline_type(&mut self, object: &Map<String, Value>, path: &str) -> UnderlineStyle {
        let path = format!("{path}.type");
        let Some(value) = object.get("type") else {
            self.missing(&path, "missing required attribute `type`", "single or double");
            return UnderlineStyle::Single;
        };
        match self.underline_style(value, &path) {
            Some(UnderlineStyle::Off) => {
                self.issue(
                    &path,
                    "underline type must be single or double",
                    "single or double",
                    value,
                );
                UnderlineStyle::Single
            }
            Some(style) => style,
            None => UnderlineStyle::Single,
        }
    }

    fn color_attribute(
        &mut self,
        object: &Map<String, Value>,
        name: &str,
        path: &str,
    ) -> Option<Color> {
        let value = object.get(name)?;
        self.color(value, &format!("{path}.{name}"))
    }

    fn color(&mut self, value: &Value, path: &str) -> Option<Color> {
        match value {
            Value::String(name) => match name.parse::<Color>() {
                Ok(color) => Some(color),
                Err(message) => {
                    self.issue(path, message, "color name", value);
                    None
                }
            },
            other => {
                self.issue(path, "color must be a string", "color name", other);
                None
            }
        }
    }

    fn flag(&mut self, value: &Value, path: &str) -> Option<bool> {
        let flag = match value {
            Value::Bool(flag) => Some(*flag),
            Value::String(text) => parse_flag(text),
            _ => None,
        };
        if flag.is_none() {
            self.issue(path, "invalid boolean", "true, yes, false or no", value);
        }
        flag
    }

    fn number(&mut self, value: &Value, path: &str) -> Option<u16> {
        let number = value.as_u64().and_then(|n| u16::try_from(n).ok());
        if number.is_none() {
            self.issue(path, "invalid count", "non-negative integer", value);
        }
        number
    }

    fn underline_style(&mut self, value: &Value, path: &str) -> Option<UnderlineStyle> {
        match value {
            Value::Bool(true) => Some(UnderlineStyle::Single),
            Value::Bool(false) => Some(UnderlineStyle::Off),
            Value::String(text) => match text.parse::<UnderlineStyle>() {
                Ok(style) => Some(style),
                Err(message) => {
                    self.issue(path, message, "single, double or none", value);
                    None
                }
            },
            other => {
                self.issue(path, "invalid underline style", "single, double or none", other);
                None
            }
        }
    }

    fn style(&mut self, kind: NodeKind, object: &Map<String, Value>, path: &str) -> Style {
        let mut style = Style::default();
        for (name, value) in object {
            let Some(shape) = shape(kind, name) else {
                continue;
            };
            let path = format!("{path}.{name}");
            match (shape, name.as_str()) {
                (AttributeShape::Color, "fg") => style.font.fg = self.color(value, &path),
                (AttributeShape::Color, _) => style.font.bg = self.color(value, &path),
                (AttributeShape::Flag, "bold") => style.font.bold = self.flag(value, &path),
                (AttributeShape::Flag, _) => style.font.italics = self.flag(value, &path),
                (AttributeShape::Underline, _) => {
                    style.font.underline = self.underline_style(value, &path)
                }
                (AttributeShape::Text, _) => match value {
                    Value::String(bullet) => style.list.bullet = Some(bullet.clone()),
                    other => self.issue(&path, "bullet must be a string", "string", other),
                },
                (AttributeShape::Number, name) => {
                    let number = self.number(value, &path);
                    let spacing = &mut style.spacing;
                    match name {
                        "margin" => spacing.margin = number,
                        "marginLeft" => spacing.margin_left = number,
                        "marginRight" => spacing.margin_right = number,
                        "marginTop" => spacing.margin_top = number,
                        "marginBottom" => spacing.margin_bottom = number,
                        _ => style.list.indent = number,
                    }
                }
            }
        }
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::theme::{FontStyle, SpacingStyle};
    use serde_json::json;

    fn issues(raw: Value) -> Vec<ValidationIssue> {
        validate(&raw).unwrap_err().issues
    }

    #[test]
    fn test_valid_tree() {
        let ast = validate(&json!([
            {"node": "h1", "fg": "red", "bold": true, "marginTop": 2,
             "content": {"node": "text", "value": "hi"}},
            {"node": "br"},
            {"node": "color", "bg": "blue", "content": [
                {"node": "text", "value": "a"},
                {"node": "underline", "type": "double", "content": {"node": "text", "value": "b"}}
            ]}
        ]))
        .unwrap();

        assert_eq!(ast.len(), 3);
        let Node::H1(h1) = &ast.nodes[0] else {
            panic!("expected h1, got {:?}", ast.nodes[0]);
        };
        assert_eq!(
            h1.style,
            Style::default()
                .with_font(FontStyle {
                    fg: Some(Color::Red),
                    bold: Some(true),
                    ..FontStyle::default()
                })
                .with_spacing(SpacingStyle {
                    margin_top: Some(2),
                    ..SpacingStyle::default()
                })
        );
        assert_eq!(ast.nodes[1], Node::Break);
        assert_eq!(ast.nodes[2].children().count(), 2);
    }

    #[test]
    fn test_boolean_like_strings_are_flags() {
        let ast = validate(&json!([{"node": "span", "italics": "yes", "bold": "No"}])).unwrap();
        let style = ast.nodes[0].style().unwrap();
        assert_eq!(style.font.italics, Some(true));
        assert_eq!(style.font.bold, Some(false));
    }

    #[test]
    fn test_document_must_be_array() {
        let issues = issues(json!({"node": "br"}));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].path, "$");
        assert_eq!(issues[0].received, "object");
    }

    #[test]
    fn test_reports_every_issue_with_paths() {
        let issues = issues(json!([
            {"node": "h1", "fg": "purple", "content": [
                {"node": "text", "value": "ok"},
                {"node": "p", "marginTop": -1}
            ]},
            {"node": "marquee"},
            {"node": "br", "fg": "red"}
        ]));
        let paths: Vec<_> = issues.iter().map(|issue| issue.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["$[0].fg", "$[0].content[1].marginTop", "$[1].node", "$[2].fg"]
        );
        assert_eq!(issues[0].received, "string \"purple\"");
        assert_eq!(issues[1].expected, "non-negative integer");
        assert!(issues[2].message.contains("marquee"));
    }

    #[test]
    fn test_required_attributes() {
        let issues = issues(json!([
            {"node": "text"},
            {"node": "underline", "content": {"node": "text", "value": "x"}}
        ]));
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].path, "$[0].value");
        assert_eq!(issues[1].path, "$[1].type");
        assert_eq!(issues[1].received, "nothing");
    }

    #[test]
    fn test_underline_node_rejects_off() {
        let issues = issues(json!([{"node": "underline", "type": "none"}]));
        assert_eq!(issues[0].path, "$[0].type");
        // Text attribute nodes may switch a themed underline off.
        let ast = validate(&json!([{"node": "h1", "underline": false}])).unwrap();
        assert_eq!(
            ast.nodes[0].style().unwrap().font.underline,
            Some(UnderlineStyle::Off)
        );
    }

    #[test]
    fn test_leaves_take_no_content() {
        let issues = issues(json!([{"node": "text", "value": "x", "content": []}]));
        assert_eq!(issues[0].path, "$[0].content");
    }

    #[test]
    fn test_content_shape() {
        let issues = issues(json!([{"node": "bold", "content": "x"}]));
        assert_eq!(issues[0].path, "$[0].content");
        assert_eq!(issues[0].expected, "object or array");
    }

    #[test]
    fn test_malformed_values_never_panic() {
        for raw in [
            json!(null),
            json!([null, 1, "x", [], {}]),
            json!([{"node": 7}]),
            json!([{"node": "li", "indent": 70000, "bullet": 3}]),
        ] {
            assert!(validate(&raw).is_err());
        }
    }

    #[test]
    fn test_to_raw_validates_back() {
        let raw = json!([
            {"node": "li", "bullet": "- ", "indent": 2, "margin": 0,
             "content": [{"node": "text", "value": "x"}, {"node": "br"}]},
            {"node": "color", "fg": "green"}
        ]);
        let ast = validate(&raw).unwrap();
        assert_eq!(validate(&ast.to_raw()).unwrap(), ast);
    }

    fn nested_bold(depth: usize) -> Value {
        let mut node = json!({"node": "text", "value": "x"});
        for _ in 0..depth {
            node = json!({"node": "bold", "content": node});
        }
        json!([node])
    }

    #[test]
    fn test_nesting_limit() {
        assert!(validate(&nested_bold(MAX_NESTING)).is_ok());

        let found = issues(nested_bold(MAX_NESTING + 1));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].message, "nesting too deep");
        assert!(found[0].path.ends_with(".content"));
        assert_eq!(found[0].received, "object");
    }
}

//! Conversion from parsed elements to the raw tree
//!
//! This is where tag and attribute names get their meaning: unknown tags, unknown or duplicate
//! attributes, bad attribute syntax, mismatched close tags and `<br>` bodies are rejected here,
//! each at the span of the offending text.

use std::ops::Range;

use serde_json::{Map, Value};

use super::attributes::{coerce, shape};
use super::grammar::{ElementWithSpans, ParsedNode};
use crate::markup::ast::NodeKind;
use crate::markup::utilities::case::to_camel_case;
use crate::markup::utilities::entities::unescape;

/// A message and the byte range it applies to.
pub type ConversionError = (String, Range<usize>);

/// Convert parsed nodes into raw tree nodes.
pub fn convert_nodes(nodes: Vec<ParsedNode>) -> Result<Vec<Value>, ConversionError> {
    nodes.into_iter().map(convert_node).collect()
}

fn convert_node(node: ParsedNode) -> Result<Value, ConversionError> {
    match node {
        ParsedNode::Text(value) => {
            let mut object = Map::new();
            object.insert("node".into(), Value::from(NodeKind::Text.tag()));
            object.insert("value".into(), Value::from(unescape(&value).into_owned()));
            Ok(Value::Object(object))
        }
        ParsedNode::Element(element) => convert_element(element),
    }
}

fn convert_element(element: ElementWithSpans) -> Result<Value, ConversionError> {
    let ElementWithSpans {
        name,
        name_span,
        attributes,
        body,
        close,
    } = element;

    let kind = NodeKind::from_tag(&name)
        .filter(|kind| *kind != NodeKind::Text)
        .ok_or_else(|| (format!("unknown tag `<{name}>`"), name_span.clone()))?;

    if let Some((close_name, close_span)) = close {
        if close_name != name {
            return Err((
                format!("mismatched closing tag `</{close_name}>` for `<{name}>`"),
                close_span,
            ));
        }
    }
    if kind == NodeKind::Break && body.is_some() {
        return Err(("`<br>` must be self-closing".to_string(), name_span));
    }

    let mut object = Map::new();
    object.insert("node".into(), Value::from(kind.tag()));

    for attribute in attributes {
        let attribute_name = to_camel_case(&attribute.name);
        let Some(shape) = shape(kind, &attribute_name) else {
            return Err((
                format!("unknown attribute `{attribute_name}` on `<{name}>`"),
                attribute.span,
            ));
        };
        if object.contains_key(&attribute_name) {
            return Err((
                format!("duplicate attribute `{attribute_name}` on `<{name}>`"),
                attribute.span,
            ));
        }
        let written = attribute.value.as_deref().map(unescape);
        let value = coerce(shape, written.as_deref()).map_err(|message| {
            (
                format!("invalid value for `{attribute_name}` on `<{name}>`: {message}"),
                attribute.span.clone(),
            )
        })?;
        object.insert(attribute_name, value);
    }

    if let Some(children) = body {
        let mut children = convert_nodes(children)?;
        match children.len() {
            0 => {}
            1 => {
                object.insert("content".into(), children.remove(0));
            }
            _ => {
                object.insert("content".into(), Value::Array(children));
            }
        }
    }

    Ok(Value::Object(object))
}

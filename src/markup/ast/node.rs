//! Node types
//!
//! Every tag in the markup has exactly one [Node] variant. The text-attribute tags (h1-h3, body,
//! p, span, div) and list items share [AttributedNode], whose attributes are already folded into
//! a [Style] of explicit overrides.

use std::fmt;

use serde_json::{Map, Value};

use crate::markup::theme::{Color, Style, UnderlineStyle};

/// Discriminator of a [Node]; the closed set of tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Text,
    Break,
    Bold,
    Italics,
    Underline,
    Color,
    H1,
    H2,
    H3,
    Body,
    Paragraph,
    Span,
    Div,
    ListItem,
}

impl NodeKind {
    pub const ALL: [NodeKind; 14] = [
        NodeKind::Text,
        NodeKind::Break,
        NodeKind::Bold,
        NodeKind::Italics,
        NodeKind::Underline,
        NodeKind::Color,
        NodeKind::H1,
        NodeKind::H2,
        NodeKind::H3,
        NodeKind::Body,
        NodeKind::Paragraph,
        NodeKind::Span,
        NodeKind::Div,
        NodeKind::ListItem,
    ];

    /// Tag name as written in markup and in the raw tree's `node` field.
    pub fn tag(self) -> &'static str {
        match self {
            NodeKind::Text => "text",
            NodeKind::Break => "br",
            NodeKind::Bold => "bold",
            NodeKind::Italics => "italics",
            NodeKind::Underline => "underline",
            NodeKind::Color => "color",
            NodeKind::H1 => "h1",
            NodeKind::H2 => "h2",
            NodeKind::H3 => "h3",
            NodeKind::Body => "body",
            NodeKind::Paragraph => "p",
            NodeKind::Span => "span",
            NodeKind::Div => "div",
            NodeKind::ListItem => "li",
        }
    }

    pub fn from_tag(tag: &str) -> Option<NodeKind> {
        NodeKind::ALL.into_iter().find(|kind| kind.tag() == tag)
    }

    /// Block nodes start on a fresh line in ANSI output.
    pub fn is_block(self) -> bool {
        matches!(
            self,
            NodeKind::H1
                | NodeKind::H2
                | NodeKind::H3
                | NodeKind::Paragraph
                | NodeKind::Div
                | NodeKind::ListItem
        )
    }

    pub fn has_content(self) -> bool {
        !matches!(self, NodeKind::Text | NodeKind::Break)
    }

    /// Kinds carrying a full [Style] and looked up in the theme.
    pub fn is_attributed(self) -> bool {
        matches!(
            self,
            NodeKind::H1
                | NodeKind::H2
                | NodeKind::H3
                | NodeKind::Body
                | NodeKind::Paragraph
                | NodeKind::Span
                | NodeKind::Div
                | NodeKind::ListItem
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Children of a node: one child or an ordered list.
///
/// Equality is structural over the children, so `Single(x) == Many(vec![x])`.
#[derive(Debug, Clone)]
pub enum Content {
    Single(Box<Node>),
    Many(Vec<Node>),
}

impl Content {
    /// `None` for no nodes, [Content::Single] for one, [Content::Many] otherwise.
    pub fn from_nodes(mut nodes: Vec<Node>) -> Option<Content> {
        match nodes.len() {
            0 => None,
            1 => nodes.pop().map(|node| Content::Single(Box::new(node))),
            _ => Some(Content::Many(nodes)),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        match self {
            Content::Single(node) => std::slice::from_ref(node.as_ref()).iter(),
            Content::Many(nodes) => nodes.iter(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Content::Single(_) => 1,
            Content::Many(nodes) => nodes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn to_raw(&self) -> Value {
        match self {
            Content::Single(node) => node.to_raw(),
            Content::Many(nodes) => Value::Array(nodes.iter().map(Node::to_raw).collect()),
        }
    }
}

impl PartialEq for Content {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<'a> IntoIterator for &'a Content {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextNode {
    pub value: String,
}

impl TextNode {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// `bold` and `italics`: no attributes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InlineNode {
    pub content: Option<Content>,
}

impl InlineNode {
    pub fn new(content: Option<Content>) -> Self {
        Self { content }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnderlineNode {
    pub style: UnderlineStyle,
    pub content: Option<Content>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColorNode {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub content: Option<Content>,
}

/// Text-attribute tags and list items. `style` holds only the attributes written on the node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributedNode {
    pub style: Style,
    pub content: Option<Content>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Text(TextNode),
    Break,
    Bold(InlineNode),
    Italics(InlineNode),
    Underline(UnderlineNode),
    Color(ColorNode),
    H1(AttributedNode),
    H2(AttributedNode),
    H3(AttributedNode),
    Body(AttributedNode),
    Paragraph(AttributedNode),
    Span(AttributedNode),
    Div(AttributedNode),
    ListItem(AttributedNode),
}

impl Node {
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(TextNode::new(value))
    }

    /// Build an attributed node. `None` for kinds that are not attributed.
    pub fn attributed(kind: NodeKind, node: AttributedNode) -> Option<Self> {
        let node = match kind {
            NodeKind::H1 => Node::H1(node),
            NodeKind::H2 => Node::H2(node),
            NodeKind::H3 => Node::H3(node),
            NodeKind::Body => Node::Body(node),
            NodeKind::Paragraph => Node::Paragraph(node),
            NodeKind::Span => Node::Span(node),
            NodeKind::Div => Node::Div(node),
            NodeKind::ListItem => Node::ListItem(node),
            _ => return None,
        };
        Some(node)
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Text(_) => NodeKind::Text,
            Node::Break => NodeKind::Break,
            Node::Bold(_) => NodeKind::Bold,
            Node::Italics(_) => NodeKind::Italics,
            Node::Underline(_) => NodeKind::Underline,
            Node::Color(_) => NodeKind::Color,
            Node::H1(_) => NodeKind::H1,
            Node::H2(_) => NodeKind::H2,
            Node::H3(_) => NodeKind::H3,
            Node::Body(_) => NodeKind::Body,
            Node::Paragraph(_) => NodeKind::Paragraph,
            Node::Span(_) => NodeKind::Span,
            Node::Div(_) => NodeKind::Div,
            Node::ListItem(_) => NodeKind::ListItem,
        }
    }

    pub fn content(&self) -> Option<&Content> {
        match self {
            Node::Text(_) | Node::Break => None,
            Node::Bold(node) | Node::Italics(node) => node.content.as_ref(),
            Node::Underline(node) => node.content.as_ref(),
            Node::Color(node) => node.content.as_ref(),
            Node::H1(node)
            | Node::H2(node)
            | Node::H3(node)
            | Node::Body(node)
            | Node::Paragraph(node)
            | Node::Span(node)
            | Node::Div(node)
            | Node::ListItem(node) => node.content.as_ref(),
        }
    }

    /// Children in order; empty for leaves.
    pub fn children(&self) -> std::slice::Iter<'_, Node> {
        match self.content() {
            Some(content) => content.iter(),
            None => Default::default(),
        }
    }

    /// The node's own style overrides, for attributed nodes.
    pub fn style(&self) -> Option<&Style> {
        match self {
            Node::H1(node)
            | Node::H2(node)
            | Node::H3(node)
            | Node::Body(node)
            | Node::Paragraph(node)
            | Node::Span(node)
            | Node::Div(node)
            | Node::ListItem(node) => Some(&node.style),
            _ => None,
        }
    }

    /// Render back into the raw tree shape accepted by the validator.
    pub fn to_raw(&self) -> Value {
        let mut object = Map::new();
        object.insert("node".into(), Value::from(self.kind().tag()));
        match self {
            Node::Text(text) => {
                object.insert("value".into(), Value::from(text.value.as_str()));
            }
            Node::Break | Node::Bold(_) | Node::Italics(_) => {}
            Node::Underline(node) => {
                object.insert("type".into(), Value::from(node.style.name()));
            }
            Node::Color(node) => {
                if let Some(fg) = node.fg {
                    object.insert("fg".into(), Value::from(fg.name()));
                }
                if let Some(bg) = node.bg {
                    object.insert("bg".into(), Value::from(bg.name()));
                }
            }
            Node::H1(node)
            | Node::H2(node)
            | Node::H3(node)
            | Node::Body(node)
            | Node::Paragraph(node)
            | Node::Span(node)
            | Node::Div(node)
            | Node::ListItem(node) => style_to_raw(&node.style, &mut object),
        }
        if let Some(content) = self.content() {
            object.insert("content".into(), content.to_raw());
        }
        Value::Object(object)
    }
}

fn style_to_raw(style: &Style, object: &mut Map<String, Value>) {
    let font = &style.font;
    let spacing = &style.spacing;
    let mut insert = |name: &str, value: Option<Value>| {
        if let Some(value) = value {
            object.insert(name.to_string(), value);
        }
    };
    insert("fg", font.fg.map(|color| Value::from(color.name())));
    insert("bg", font.bg.map(|color| Value::from(color.name())));
    insert("bold", font.bold.map(Value::from));
    insert("underline", font.underline.map(|u| Value::from(u.name())));
    insert("italics", font.italics.map(Value::from));
    insert("margin", spacing.margin.map(Value::from));
    insert("marginLeft", spacing.margin_left.map(Value::from));
    insert("marginRight", spacing.margin_right.map(Value::from));
    insert("marginTop", spacing.margin_top.map(Value::from));
    insert("marginBottom", spacing.margin_bottom.map(Value::from));
    insert("bullet", style.list.bullet.as_deref().map(Value::from));
    insert("indent", style.list.indent.map(Value::from));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tags_round_trip() {
        for kind in NodeKind::ALL {
            assert_eq!(NodeKind::from_tag(kind.tag()), Some(kind));
        }
        assert_eq!(NodeKind::from_tag("foo"), None);
        assert_eq!(NodeKind::Paragraph.to_string(), "p");
    }

    #[test]
    fn test_block_kinds() {
        let blocks: Vec<_> = NodeKind::ALL.into_iter().filter(|k| k.is_block()).collect();
        assert_eq!(
            blocks,
            vec![
                NodeKind::H1,
                NodeKind::H2,
                NodeKind::H3,
                NodeKind::Paragraph,
                NodeKind::Div,
                NodeKind::ListItem
            ]
        );
    }

    #[test]
    fn test_content_equality_is_structural() {
        let single = Content::Single(Box::new(Node::text("a")));
        let many = Content::Many(vec![Node::text("a")]);
        assert_eq!(single, many);
        assert_ne!(many, Content::Many(vec![Node::text("a"), Node::Break]));
    }

    #[test]
    fn test_from_nodes_shapes() {
        assert!(Content::from_nodes(vec![]).is_none());
        assert!(matches!(
            Content::from_nodes(vec![Node::Break]),
            Some(Content::Single(_))
        ));
        assert!(matches!(
            Content::from_nodes(vec![Node::Break, Node::Break]),
            Some(Content::Many(_))
        ));
    }

    #[test]
    fn test_to_raw() {
        let node = Node::Color(ColorNode {
            fg: Some(Color::Red),
            bg: None,
            content: Content::from_nodes(vec![Node::text("x"), Node::Break]),
        });
        assert_eq!(
            node.to_raw(),
            json!({
                "node": "color",
                "fg": "red",
                "content": [{"node": "text", "value": "x"}, {"node": "br"}]
            })
        );
    }
}

//! The composer node type.

use std::fmt;
use std::sync::Arc;

use crate::markup::ast::{
    Ast, AttributedNode, ColorNode, Content, InlineNode, Node, NodeKind, UnderlineNode,
};
use crate::markup::compiler::{Compiler, Format};
use crate::markup::error::CompilerError;
use crate::markup::theme::{Color, ListStyle, Style, Theme, UnderlineStyle, DEFAULT_THEME};
use crate::markup::utilities::entities::escape_text;
use crate::markup::utilities::tags::{close_tag, open_tag, self_closing_tag};

/// What a composer node renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposerKind {
    Tag(NodeKind),
    /// A group of siblings with no tag of its own.
    Bundle,
}

/// A node of a composer tree.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposerNode {
    kind: ComposerKind,
    value: Option<String>,
    style: Style,
    children: Vec<ComposerNode>,
    theme: Option<Arc<Theme>>,
}

impl ComposerNode {
    pub(crate) fn new(kind: ComposerKind, children: Vec<ComposerNode>) -> Self {
        Self {
            kind,
            value: None,
            style: Style::default(),
            children,
            theme: None,
        }
    }

    pub(crate) fn text(value: String) -> Self {
        Self {
            value: Some(value),
            ..Self::new(ComposerKind::Tag(NodeKind::Text), Vec::new())
        }
    }

    pub fn kind(&self) -> ComposerKind {
        self.kind
    }

    pub fn children(&self) -> &[ComposerNode] {
        &self.children
    }

    /// The text of a text node.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Explicit overrides set on this node.
    pub fn overrides(&self) -> &Style {
        &self.style
    }

    pub fn theme(&self) -> Option<&Arc<Theme>> {
        self.theme.as_ref()
    }

    /// Layer `style` over this node's overrides.
    ///
    /// Kinds without attributes (bold, italics, text, br, bundles) ignore the overrides.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = self.style.merge(&style);
        self
    }

    pub fn fg(mut self, color: Color) -> Self {
        self.style.font.fg = Some(color);
        self
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.style.font.bg = Some(color);
        self
    }

    /// Use `theme` for this node and every descendant that has no theme of its own.
    pub fn with_theme(mut self, theme: impl Into<Arc<Theme>>) -> Self {
        let theme = theme.into();
        self.children = std::mem::take(&mut self.children)
            .into_iter()
            .map(|child| child.inherit_theme(&theme))
            .collect();
        self.theme = Some(theme);
        self
    }

    fn inherit_theme(self, theme: &Arc<Theme>) -> Self {
        if self.theme.is_some() {
            return self;
        }
        self.with_theme(Arc::clone(theme))
    }

    /// Overrides layered over the theme entry for themed kinds, the bare overrides otherwise.
    pub fn effective_style(&self) -> Style {
        let ComposerKind::Tag(kind) = self.kind else {
            return Style::default();
        };
        if !kind.is_attributed() {
            return self.style.clone();
        }
        let theme: &Theme = self.theme.as_deref().unwrap_or(&*DEFAULT_THEME);
        let mut style = theme.resolve(kind).merge(&self.style);
        if kind != NodeKind::ListItem {
            style.list = ListStyle::default();
        }
        style
    }

    /// An underline node with type `none` renders as its bare children.
    fn is_transparent(&self) -> bool {
        match self.kind {
            ComposerKind::Bundle => true,
            ComposerKind::Tag(NodeKind::Underline) => {
                self.style.font.underline == Some(UnderlineStyle::Off)
            }
            ComposerKind::Tag(_) => false,
        }
    }

    fn attributes(&self, kind: NodeKind) -> Vec<(&'static str, String)> {
        match kind {
            NodeKind::Underline => vec![("type", self.underline_style().to_string())],
            NodeKind::Color => [("fg", self.style.font.fg), ("bg", self.style.font.bg)]
                .into_iter()
                .filter_map(|(name, color)| color.map(|color| (name, color.to_string())))
                .collect(),
            kind if kind.is_attributed() => self.effective_style().markup_attributes(),
            _ => Vec::new(),
        }
    }

    fn underline_style(&self) -> UnderlineStyle {
        self.style.font.underline.unwrap_or(UnderlineStyle::Single)
    }

    fn write_markup(&self, output: &mut String) {
        if self.is_transparent() {
            for child in &self.children {
                child.write_markup(output);
            }
            return;
        }
        let ComposerKind::Tag(kind) = self.kind else {
            return;
        };
        match kind {
            NodeKind::Text => {
                output.push_str(&escape_text(self.value.as_deref().unwrap_or_default()))
            }
            NodeKind::Break => output.push_str(&self_closing_tag(kind.tag(), &[])),
            kind => {
                output.push_str(&open_tag(kind.tag(), &self.attributes(kind)));
                for child in &self.children {
                    child.write_markup(output);
                }
                output.push_str(&close_tag(kind.tag()));
            }
        }
    }

    /// Canonical markup for this tree. Same as `to_string()`.
    pub fn to_markup(&self) -> String {
        let mut output = String::new();
        self.write_markup(&mut output);
        output
    }

    fn collect_nodes(&self, nodes: &mut Vec<Node>) {
        if self.is_transparent() {
            for child in &self.children {
                child.collect_nodes(nodes);
            }
            return;
        }
        let ComposerKind::Tag(kind) = self.kind else {
            return;
        };
        if kind == NodeKind::Text {
            let value = self.value.as_deref().unwrap_or_default();
            if value.is_empty() {
                return;
            }
            if let Some(Node::Text(last)) = nodes.last_mut() {
                last.value.push_str(value);
            } else {
                nodes.push(Node::text(value));
            }
            return;
        }
        nodes.push(self.build(kind));
    }

    fn content(&self) -> Option<Content> {
        let mut nodes = Vec::new();
        for child in &self.children {
            child.collect_nodes(&mut nodes);
        }
        Content::from_nodes(nodes)
    }

    fn build(&self, kind: NodeKind) -> Node {
        let attributed = || AttributedNode {
            style: self.effective_style(),
            content: self.content(),
        };
        match kind {
            NodeKind::Text => Node::text(self.value.as_deref().unwrap_or_default()),
            NodeKind::Break => Node::Break,
            NodeKind::Bold => Node::Bold(InlineNode::new(self.content())),
            NodeKind::Italics => Node::Italics(InlineNode::new(self.content())),
            NodeKind::Underline => Node::Underline(UnderlineNode {
                style: self.underline_style(),
                content: self.content(),
            }),
            NodeKind::Color => Node::Color(ColorNode {
                fg: self.style.font.fg,
                bg: self.style.font.bg,
                content: self.content(),
            }),
            NodeKind::H1 => Node::H1(attributed()),
            NodeKind::H2 => Node::H2(attributed()),
            NodeKind::H3 => Node::H3(attributed()),
            NodeKind::Body => Node::Body(attributed()),
            NodeKind::Paragraph => Node::Paragraph(attributed()),
            NodeKind::Span => Node::Span(attributed()),
            NodeKind::Div => Node::Div(attributed()),
            NodeKind::ListItem => Node::ListItem(attributed()),
        }
    }

    /// The typed nodes this tree stands for: bundles flattened, empty text dropped and
    /// adjacent text merged, exactly as its markup parses.
    pub fn to_nodes(&self) -> Vec<Node> {
        let mut nodes = Vec::new();
        self.collect_nodes(&mut nodes);
        nodes
    }

    pub fn to_ast(&self) -> Ast {
        Ast::new(self.to_nodes())
    }

    /// Compile with the default handlers. Themes are already folded into the node attributes.
    pub fn compile(&self, format: Format) -> Result<String, CompilerError> {
        Compiler::new().compile(&self.to_ast(), format)
    }
}

impl fmt::Display for ComposerNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_markup())
    }
}

impl From<&str> for ComposerNode {
    fn from(value: &str) -> Self {
        ComposerNode::text(value.to_string())
    }
}

impl From<String> for ComposerNode {
    fn from(value: String) -> Self {
        ComposerNode::text(value)
    }
}

/// Anything a builder accepts as children: nodes, strings (wrapped as text), or lists of either.
pub trait IntoChildren {
    fn into_children(self) -> Vec<ComposerNode>;
}

impl IntoChildren for ComposerNode {
    fn into_children(self) -> Vec<ComposerNode> {
        vec![self]
    }
}

impl IntoChildren for &str {
    fn into_children(self) -> Vec<ComposerNode> {
        vec![self.into()]
    }
}

impl IntoChildren for String {
    fn into_children(self) -> Vec<ComposerNode> {
        vec![self.into()]
    }
}

impl IntoChildren for Vec<ComposerNode> {
    fn into_children(self) -> Vec<ComposerNode> {
        self
    }
}

impl IntoChildren for Vec<&str> {
    fn into_children(self) -> Vec<ComposerNode> {
        self.into_iter().map(ComposerNode::from).collect()
    }
}

impl IntoChildren for Vec<String> {
    fn into_children(self) -> Vec<ComposerNode> {
        self.into_iter().map(ComposerNode::from).collect()
    }
}

impl<const N: usize> IntoChildren for [ComposerNode; N] {
    fn into_children(self) -> Vec<ComposerNode> {
        self.into()
    }
}

impl<const N: usize> IntoChildren for [&str; N] {
    fn into_children(self) -> Vec<ComposerNode> {
        self.into_iter().map(ComposerNode::from).collect()
    }
}

impl IntoChildren for () {
    fn into_children(self) -> Vec<ComposerNode> {
        Vec::new()
    }
}

//! Typed syntax tree
//!
//! The parser produces a loosely typed raw tree (`serde_json::Value`); [validate] narrows it into
//! an [Ast] of [Node]s, one variant per tag. Everything downstream (the compiler, the handlers,
//! the composer's `to_ast`) works on the typed tree only.

pub mod node;
pub mod validate;

pub use node::{
    AttributedNode, ColorNode, Content, InlineNode, Node, NodeKind, TextNode, UnderlineNode,
};
pub use validate::validate;

use serde_json::Value;

/// Deepest allowed element nesting. The parser, the validator and the compiler all recurse once
/// per level and refuse anything deeper.
pub const MAX_NESTING: usize = 64;

/// A parsed document: the ordered top-level nodes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ast {
    pub nodes: Vec<Node>,
}

impl Ast {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    /// The raw tree this AST validates from. `validate(&ast.to_raw())` gives back `ast`.
    pub fn to_raw(&self) -> Value {
        Value::Array(self.nodes.iter().map(Node::to_raw).collect())
    }
}

impl<'a> IntoIterator for &'a Ast {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

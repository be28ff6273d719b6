use super::NodeHandler;
use crate::markup::ast::{Node, NodeKind};
use crate::markup::compiler::{Format, RenderContext};
use crate::markup::error::CompilerError;
use crate::markup::utilities::tags::self_closing_tag;

/// `<br/>`: a newline in ANSI.
pub struct BreakHandler;

impl NodeHandler for BreakHandler {
    fn name(&self) -> &str {
        "br"
    }

    fn is_type(&self, node: &Node) -> bool {
        matches!(node, Node::Break)
    }

    fn handle_enter(
        &self,
        _node: &Node,
        _stack: &[&Node],
        context: &RenderContext<'_>,
    ) -> Result<String, CompilerError> {
        Ok(match context.format {
            Format::Ansi => "\n".to_string(),
            Format::Markup => self_closing_tag(NodeKind::Break.tag(), &[]),
        })
    }

    fn handle_exit(
        &self,
        _node: &Node,
        _stack: &[&Node],
        _context: &RenderContext<'_>,
    ) -> Result<String, CompilerError> {
        Ok(String::new())
    }
}

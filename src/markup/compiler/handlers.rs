//! Node handlers
//!
//! One handler per node kind renders the opening and closing output of its nodes for both
//! formats. The compiler dispatches each node to the first handler whose [NodeHandler::is_type]
//! accepts it, so new kinds plug in with [Compiler::register](super::Compiler::register).

pub mod color;
pub mod line_break;
pub mod list_item;
pub mod style;
pub mod text;
pub mod text_attributes;
pub mod underline;

pub use color::ColorHandler;
pub use line_break::BreakHandler;
pub use list_item::ListItemHandler;
pub use style::StyleHandler;
pub use text::TextHandler;
pub use text_attributes::TextAttributeHandler;
pub use underline::UnderlineHandler;

use super::RenderContext;
use crate::markup::ast::{Node, NodeKind};
use crate::markup::error::CompilerError;

/// Renders one kind of node.
///
/// `stack` holds every open node, outermost first, and always ends with `node` itself.
/// Handlers read it but never change it.
pub trait NodeHandler: Send + Sync {
    fn name(&self) -> &str;

    fn is_type(&self, node: &Node) -> bool;

    fn handle_enter(
        &self,
        node: &Node,
        stack: &[&Node],
        context: &RenderContext<'_>,
    ) -> Result<String, CompilerError>;

    fn handle_exit(
        &self,
        node: &Node,
        stack: &[&Node],
        context: &RenderContext<'_>,
    ) -> Result<String, CompilerError>;
}

/// Fatal error for a node handed to a handler that does not render its kind.
pub(crate) fn wrong_node(handler: &str, node: &Node, stack: &[&Node]) -> CompilerError {
    CompilerError::fatal(
        format!("handler `{handler}` cannot render `{}`", node.kind()),
        node,
        stack,
    )
}

/// Handlers for every built-in node kind.
pub fn default_handlers() -> Vec<Box<dyn NodeHandler>> {
    vec![
        Box::new(TextHandler),
        Box::new(BreakHandler),
        Box::new(StyleHandler::bold()),
        Box::new(StyleHandler::italics()),
        Box::new(UnderlineHandler),
        Box::new(ColorHandler),
        Box::new(TextAttributeHandler::new(NodeKind::H1)),
        Box::new(TextAttributeHandler::new(NodeKind::H2)),
        Box::new(TextAttributeHandler::new(NodeKind::H3)),
        Box::new(TextAttributeHandler::new(NodeKind::Body)),
        Box::new(TextAttributeHandler::new(NodeKind::Paragraph)),
        Box::new(TextAttributeHandler::new(NodeKind::Span)),
        Box::new(TextAttributeHandler::new(NodeKind::Div)),
        Box::new(ListItemHandler),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::ast::{ColorNode, UnderlineNode};
    use crate::markup::theme::UnderlineStyle;

    #[test]
    fn test_every_kind_has_exactly_one_default_handler() {
        let handlers = default_handlers();
        let samples = [
            Node::text("x"),
            Node::Break,
            Node::Bold(Default::default()),
            Node::Italics(Default::default()),
            Node::Underline(UnderlineNode {
                style: UnderlineStyle::Single,
                content: None,
            }),
            Node::Color(ColorNode {
                fg: None,
                bg: None,
                content: None,
            }),
            Node::H1(Default::default()),
            Node::H2(Default::default()),
            Node::H3(Default::default()),
            Node::Body(Default::default()),
            Node::Paragraph(Default::default()),
            Node::Span(Default::default()),
            Node::Div(Default::default()),
            Node::ListItem(Default::default()),
        ];
        for node in &samples {
            let claiming = handlers.iter().filter(|h| h.is_type(node)).count();
            assert_eq!(claiming, 1, "{} is claimed by {claiming} handlers", node.kind());
        }
    }
}

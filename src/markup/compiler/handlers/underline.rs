use super::{wrong_node, NodeHandler};
use crate::markup::ast::{Node, NodeKind, UnderlineNode};
use crate::markup::compiler::{Format, RenderContext};
use crate::markup::error::CompilerError;
use crate::markup::utilities::escape_codes::{sgr, underline_code, UNDERLINE_OFF};
use crate::markup::utilities::tags::{close_tag, open_tag};

/// `<underline type="single|double">`.
pub struct UnderlineHandler;

impl UnderlineHandler {
    fn underline<'n>(
        &self,
        node: &'n Node,
        stack: &[&Node],
    ) -> Result<&'n UnderlineNode, CompilerError> {
        match node {
            Node::Underline(underline) => Ok(underline),
            _ => Err(wrong_node(self.name(), node, stack)),
        }
    }
}

impl NodeHandler for UnderlineHandler {
    fn name(&self) -> &str {
        "underline"
    }

    fn is_type(&self, node: &Node) -> bool {
        matches!(node, Node::Underline(_))
    }

    fn handle_enter(
        &self,
        node: &Node,
        stack: &[&Node],
        context: &RenderContext<'_>,
    ) -> Result<String, CompilerError> {
        let underline = self.underline(node, stack)?;
        match context.format {
            Format::Ansi => match underline_code(underline.style) {
                Some(code) => Ok(sgr(&[code])),
                None => Err(CompilerError::recoverable(
                    format!("underline type `{}` renders nothing", underline.style),
                    node,
                    stack,
                )),
            },
            Format::Markup => Ok(open_tag(
                NodeKind::Underline.tag(),
                &[("type", underline.style.to_string())],
            )),
        }
    }

    fn handle_exit(
        &self,
        node: &Node,
        stack: &[&Node],
        context: &RenderContext<'_>,
    ) -> Result<String, CompilerError> {
        let underline = self.underline(node, stack)?;
        Ok(match context.format {
            Format::Ansi if underline_code(underline.style).is_some() => sgr(&[UNDERLINE_OFF]),
            Format::Ansi => String::new(),
            Format::Markup => close_tag(NodeKind::Underline.tag()),
        })
    }
}

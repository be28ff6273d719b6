use super::NodeHandler;
use crate::markup::ast::{Node, NodeKind};
use crate::markup::compiler::{Format, RenderContext};
use crate::markup::error::CompilerError;
use crate::markup::utilities::escape_codes::{sgr, BOLD, BOLD_OFF, ITALICS, ITALICS_OFF};
use crate::markup::utilities::tags::{close_tag, open_tag};

/// Attribute-free font toggles: `<bold>` and `<italics>`.
pub struct StyleHandler {
    kind: NodeKind,
    on: u8,
    off: u8,
}

impl StyleHandler {
    pub fn bold() -> Self {
        Self {
            kind: NodeKind::Bold,
            on: BOLD,
            off: BOLD_OFF,
        }
    }

    pub fn italics() -> Self {
        Self {
            kind: NodeKind::Italics,
            on: ITALICS,
            off: ITALICS_OFF,
        }
    }
}

impl NodeHandler for StyleHandler {
    fn name(&self) -> &str {
        self.kind.tag()
    }

    fn is_type(&self, node: &Node) -> bool {
        node.kind() == self.kind
    }

    fn handle_enter(
        &self,
        _node: &Node,
        _stack: &[&Node],
        context: &RenderContext<'_>,
    ) -> Result<String, CompilerError> {
        Ok(match context.format {
            Format::Ansi => sgr(&[self.on]),
            Format::Markup => open_tag(self.kind.tag(), &[]),
        })
    }

    fn handle_exit(
        &self,
        _node: &Node,
        _stack: &[&Node],
        context: &RenderContext<'_>,
    ) -> Result<String, CompilerError> {
        Ok(match context.format {
            Format::Ansi => sgr(&[self.off]),
            Format::Markup => close_tag(self.kind.tag()),
        })
    }
}

use super::text_attributes::{ansi_enter, ansi_exit, effective_style, markup_enter, own_style};
use super::NodeHandler;
use crate::markup::ast::{Node, NodeKind};
use crate::markup::compiler::{Format, RenderContext};
use crate::markup::error::CompilerError;
use crate::markup::utilities::spacing::spaces;
use crate::markup::utilities::tags::close_tag;

/// `<li>`: a text-attribute node that also writes `indent` spaces and the bullet before its
/// content.
pub struct ListItemHandler;

impl NodeHandler for ListItemHandler {
    fn name(&self) -> &str {
        NodeKind::ListItem.tag()
    }

    fn is_type(&self, node: &Node) -> bool {
        matches!(node, Node::ListItem(_))
    }

    fn handle_enter(
        &self,
        node: &Node,
        stack: &[&Node],
        context: &RenderContext<'_>,
    ) -> Result<String, CompilerError> {
        let own = own_style(self.name(), node, stack)?;
        if context.format == Format::Markup {
            return Ok(markup_enter(NodeKind::ListItem, own));
        }
        let style = effective_style(NodeKind::ListItem, own, context.theme);
        let mut output = ansi_enter(NodeKind::ListItem, &style);
        output.push_str(&spaces(style.list.indent.unwrap_or(0)));
        if let Some(bullet) = &style.list.bullet {
            output.push_str(bullet);
        }
        Ok(output)
    }

    fn handle_exit(
        &self,
        node: &Node,
        stack: &[&Node],
        context: &RenderContext<'_>,
    ) -> Result<String, CompilerError> {
        let own = own_style(self.name(), node, stack)?;
        Ok(match context.format {
            Format::Ansi => ansi_exit(&effective_style(NodeKind::ListItem, own, context.theme)),
            Format::Markup => close_tag(NodeKind::ListItem.tag()),
        })
    }
}

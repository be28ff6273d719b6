//! Text-attribute nodes: h1, h2, h3, body, p, span and div
//!
//! These render from their effective style, the node's own attributes merged over the theme
//! entry for the kind. The ANSI layout is
//!
//! ```text
//! enter: [block newline] [top newlines] [SGR on] [left spaces]
//! exit:  [right spaces] [SGR off] [bottom newlines]
//! ```
//!
//! with one combined SGR sequence each way. Markup output writes only the node's own attributes,
//! so re-parsing it gives back the same node.
//!
//! The off sequence always resets a color these nodes set to the terminal default (39/49), even
//! inside a `<color>`: `<color fg="red"><span fg="blue">x</span>y</color>` prints `y` in the
//! default color. Only closing a `<color>` restores the enclosing one; wrap the text in a
//! `<color>` instead of giving the span an `fg` when the outer color should come back.

use super::{wrong_node, NodeHandler};
use crate::markup::ast::{Node, NodeKind};
use crate::markup::compiler::{Format, RenderContext};
use crate::markup::error::CompilerError;
use crate::markup::theme::{Style, Theme};
use crate::markup::utilities::escape_codes::{font_off_codes, font_on_codes, sgr};
use crate::markup::utilities::spacing::{newlines, spaces};
use crate::markup::utilities::tags::{close_tag, open_tag};

pub struct TextAttributeHandler {
    kind: NodeKind,
}

impl TextAttributeHandler {
    pub fn new(kind: NodeKind) -> Self {
        Self { kind }
    }
}

/// The node's own attributes layered over the theme.
pub(crate) fn effective_style(kind: NodeKind, own: &Style, theme: &Theme) -> Style {
    theme.resolve(kind).merge(own)
}

/// The node's own style, or a fatal error for nodes without one.
pub(crate) fn own_style<'n>(
    handler: &str,
    node: &'n Node,
    stack: &[&Node],
) -> Result<&'n Style, CompilerError> {
    node.style().ok_or_else(|| wrong_node(handler, node, stack))
}

pub(crate) fn ansi_enter(kind: NodeKind, style: &Style) -> String {
    let margins = style.spacing.resolve();
    let mut output = String::new();
    if kind.is_block() {
        output.push('\n');
    }
    output.push_str(&newlines(margins.top));
    output.push_str(&sgr(&font_on_codes(&style.font)));
    output.push_str(&spaces(margins.left));
    output
}

pub(crate) fn ansi_exit(style: &Style) -> String {
    let margins = style.spacing.resolve();
    let mut output = spaces(margins.right);
    output.push_str(&sgr(&font_off_codes(&style.font)));
    output.push_str(&newlines(margins.bottom));
    output
}

pub(crate) fn markup_enter(kind: NodeKind, own: &Style) -> String {
    open_tag(kind.tag(), &own.markup_attributes())
}

impl NodeHandler for TextAttributeHandler {
    fn name(&self) -> &str {
        self.kind.tag()
    }

    fn is_type(&self, node: &Node) -> bool {
        node.kind() == self.kind
    }

    fn handle_enter(
        &self,
        node: &Node,
        stack: &[&Node],
        context: &RenderContext<'_>,
    ) -> Result<String, CompilerError> {
        let own = own_style(self.name(), node, stack)?;
        Ok(match context.format {
            Format::Ansi => ansi_enter(self.kind, &effective_style(self.kind, own, context.theme)),
            Format::Markup => markup_enter(self.kind, own),
        })
    }

    fn handle_exit(
        &self,
        node: &Node,
        stack: &[&Node],
        context: &RenderContext<'_>,
    ) -> Result<String, CompilerError> {
        let own = own_style(self.name(), node, stack)?;
        Ok(match context.format {
            Format::Ansi => ansi_exit(&effective_style(self.kind, own, context.theme)),
            Format::Markup => close_tag(self.kind.tag()),
        })
    }
}

//! Builder functions, one per tag.

use super::node::{ComposerKind, ComposerNode, IntoChildren};
use crate::markup::ast::NodeKind;
use crate::markup::theme::{SpacingStyle, Style, UnderlineStyle};

fn tag(kind: NodeKind, children: impl IntoChildren) -> ComposerNode {
    ComposerNode::new(ComposerKind::Tag(kind), children.into_children())
}

pub fn h1(children: impl IntoChildren) -> ComposerNode {
    tag(NodeKind::H1, children)
}

pub fn h2(children: impl IntoChildren) -> ComposerNode {
    tag(NodeKind::H2, children)
}

pub fn h3(children: impl IntoChildren) -> ComposerNode {
    tag(NodeKind::H3, children)
}

pub fn body(children: impl IntoChildren) -> ComposerNode {
    tag(NodeKind::Body, children)
}

pub fn p(children: impl IntoChildren) -> ComposerNode {
    tag(NodeKind::Paragraph, children)
}

pub fn div(children: impl IntoChildren) -> ComposerNode {
    tag(NodeKind::Div, children)
}

pub fn span(children: impl IntoChildren) -> ComposerNode {
    tag(NodeKind::Span, children)
}

pub fn li(children: impl IntoChildren) -> ComposerNode {
    tag(NodeKind::ListItem, children)
}

pub fn bold(children: impl IntoChildren) -> ComposerNode {
    tag(NodeKind::Bold, children)
}

pub fn italics(children: impl IntoChildren) -> ComposerNode {
    tag(NodeKind::Italics, children)
}

/// `<underline type="...">`. [UnderlineStyle::Off] leaves the children unwrapped.
pub fn underline(children: impl IntoChildren, style: UnderlineStyle) -> ComposerNode {
    let mut overrides = Style::default();
    overrides.font.underline = Some(style);
    tag(NodeKind::Underline, children).with_style(overrides)
}

/// `<color>`; set the colors with [ComposerNode::fg] and [ComposerNode::bg].
pub fn color(children: impl IntoChildren) -> ComposerNode {
    tag(NodeKind::Color, children)
}

pub fn text(value: impl Into<String>) -> ComposerNode {
    ComposerNode::text(value.into())
}

pub fn br() -> ComposerNode {
    tag(NodeKind::Break, ())
}

/// Siblings without a wrapping tag.
pub fn bundle(children: impl IntoChildren) -> ComposerNode {
    ComposerNode::new(ComposerKind::Bundle, children.into_children())
}

/// One list item per entry, each in its own zero-margin `div` so every item gets its own block
/// spacing from the `li` theme.
pub fn list(items: impl IntoChildren) -> ComposerNode {
    list_with_style(items, Style::default())
}

/// [list] with `style` layered over every `li`.
pub fn list_with_style(items: impl IntoChildren, style: Style) -> ComposerNode {
    let wrapper = Style::default().with_spacing(SpacingStyle::uniform(0));
    bundle(
        items
            .into_children()
            .into_iter()
            .map(|item| div(li(item).with_style(style.clone())).with_style(wrapper.clone()))
            .collect::<Vec<_>>(),
    )
}

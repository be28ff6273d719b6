//! `<color fg="..." bg="...">`
//!
//! Closing a color node restores whatever the enclosing color nodes set. Each channel the node
//! set is handed back to the nearest enclosing color node that sets the same channel, or to the
//! terminal default when there is none.

use super::{wrong_node, NodeHandler};
use crate::markup::ast::{ColorNode, Node, NodeKind};
use crate::markup::compiler::{Format, RenderContext};
use crate::markup::error::CompilerError;
use crate::markup::theme::Color;
use crate::markup::utilities::escape_codes::{sgr, BG_DEFAULT, FG_DEFAULT};
use crate::markup::utilities::tags::{close_tag, open_tag};

pub struct ColorHandler;

impl ColorHandler {
    fn color<'n>(&self, node: &'n Node, stack: &[&Node]) -> Result<&'n ColorNode, CompilerError> {
        match node {
            Node::Color(color) => Ok(color),
            _ => Err(wrong_node(self.name(), node, stack)),
        }
    }
}

/// Nearest color node below the top of `stack` that sets `channel`.
fn enclosing(stack: &[&Node], channel: fn(&ColorNode) -> Option<Color>) -> Option<Color> {
    let outer = &stack[..stack.len().saturating_sub(1)];
    outer.iter().rev().find_map(|node| match node {
        Node::Color(color) => channel(color),
        _ => None,
    })
}

impl NodeHandler for ColorHandler {
    fn name(&self) -> &str {
        "color"
    }

    fn is_type(&self, node: &Node) -> bool {
        matches!(node, Node::Color(_))
    }

    fn handle_enter(
        &self,
        node: &Node,
        stack: &[&Node],
        context: &RenderContext<'_>,
    ) -> Result<String, CompilerError> {
        let color = self.color(node, stack)?;
        match context.format {
            Format::Ansi => {
                let codes: Vec<u8> = color
                    .fg
                    .map(Color::fg_code)
                    .into_iter()
                    .chain(color.bg.map(Color::bg_code))
                    .collect();
                if codes.is_empty() {
                    return Err(CompilerError::recoverable(
                        "color node sets neither fg nor bg",
                        node,
                        stack,
                    ));
                }
                Ok(sgr(&codes))
            }
            Format::Markup => {
                let attributes: Vec<_> = [("fg", color.fg), ("bg", color.bg)]
                    .into_iter()
                    .filter_map(|(name, value)| value.map(|color| (name, color.to_string())))
                    .collect();
                Ok(open_tag(NodeKind::Color.tag(), &attributes))
            }
        }
    }

    fn handle_exit(
        &self,
        node: &Node,
        stack: &[&Node],
        context: &RenderContext<'_>,
    ) -> Result<String, CompilerError> {
        let color = self.color(node, stack)?;
        match context.format {
            Format::Ansi => {
                let mut codes = Vec::new();
                if color.fg.is_some() {
                    codes.push(
                        enclosing(stack, |outer| outer.fg).map_or(FG_DEFAULT, Color::fg_code),
                    );
                }
                if color.bg.is_some() {
                    codes.push(
                        enclosing(stack, |outer| outer.bg).map_or(BG_DEFAULT, Color::bg_code),
                    );
                }
                Ok(sgr(&codes))
            }
            Format::Markup => Ok(close_tag(NodeKind::Color.tag())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::theme::Theme;

    fn color(fg: Option<Color>, bg: Option<Color>) -> Node {
        Node::Color(ColorNode {
            fg,
            bg,
            content: None,
        })
    }

    fn exit(stack: &[&Node]) -> String {
        let theme = Theme::default();
        let context = RenderContext {
            format: Format::Ansi,
            theme: &theme,
        };
        let node = stack[stack.len() - 1];
        ColorHandler.handle_exit(node, stack, &context).unwrap()
    }

    #[test]
    fn test_restores_per_channel() {
        let outer_fg = color(Some(Color::Red), None);
        let outer_bg = color(None, Some(Color::Green));
        let inner = color(Some(Color::Blue), Some(Color::White));
        assert_eq!(exit(&[&outer_fg, &outer_bg, &inner]), "\x1b[31;42m");
        assert_eq!(exit(&[&outer_bg, &inner]), "\x1b[39;42m");
        assert_eq!(exit(&[&inner]), "\x1b[39;49m");
    }

    #[test]
    fn test_skips_other_nodes_in_between() {
        let outer = color(Some(Color::Yellow), None);
        let bold = Node::Bold(Default::default());
        let inner = color(Some(Color::Blue), None);
        assert_eq!(exit(&[&outer, &bold, &inner]), "\x1b[33m");
    }

    #[test]
    fn test_markup() {
        let theme = Theme::default();
        let context = RenderContext {
            format: Format::Markup,
            theme: &theme,
        };
        let node = color(Some(Color::Red), Some(Color::BrightBlue));
        assert_eq!(
            ColorHandler.handle_enter(&node, &[&node], &context).unwrap(),
            r#"<color fg="red" bg="brightblue">"#
        );
    }
}

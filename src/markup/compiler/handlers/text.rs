use super::{wrong_node, NodeHandler};
use crate::markup::ast::Node;
use crate::markup::compiler::{Format, RenderContext};
use crate::markup::error::CompilerError;
use crate::markup::utilities::{emoji, entities};

/// Text runs. ANSI output substitutes emoji shortcodes; markup output escapes `&` and `<`.
pub struct TextHandler;

impl NodeHandler for TextHandler {
    fn name(&self) -> &str {
        "text"
    }

    fn is_type(&self, node: &Node) -> bool {
        matches!(node, Node::Text(_))
    }

    fn handle_enter(
        &self,
        node: &Node,
        stack: &[&Node],
        context: &RenderContext<'_>,
    ) -> Result<String, CompilerError> {
        let Node::Text(text) = node else {
            return Err(wrong_node(self.name(), node, stack));
        };
        Ok(match context.format {
            Format::Ansi => emoji::substitute(&text.value).into_owned(),
            Format::Markup => entities::escape_text(&text.value).into_owned(),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::theme::Theme;

    #[test]
    fn test_text_formats() {
        let theme = Theme::default();
        let node = Node::text(":tada: <done>");
        let cases = [
            (Format::Ansi, "🎉 <done>"),
            (Format::Markup, ":tada: &lt;done>"),
        ];
        for (format, expected) in cases {
            let context = RenderContext {
                format,
                theme: &theme,
            };
            assert_eq!(
                TextHandler.handle_enter(&node, &[&node], &context).unwrap(),
                expected
            );
        }
    }

    #[test]
    fn test_rejects_other_nodes() {
        let theme = Theme::default();
        let context = RenderContext {
            format: Format::Ansi,
            theme: &theme,
        };
        let error = TextHandler
            .handle_enter(&Node::Break, &[&Node::Break], &context)
            .unwrap_err();
        assert!(error.fatal);
    }
}

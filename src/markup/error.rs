//! Error types for the markup pipeline
//!
//! Each stage has its own error:
//!
//! - [SyntaxError]: the lexer or grammar rejected the text. Always fatal.
//! - [ValidationError]: the raw tree does not fit the node schema. Carries every issue found.
//! - [CompilerError]: a handler rejected a node. Carries a `fatal` flag; non-fatal errors are
//!   logged and compilation continues.
//! - [ThemeError]: a theme file could not be read or deserialized.
//!
//! [AnsieError] wraps all of them for the one-call helpers.

use std::fmt;
use std::ops::Range;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use super::ast::{Node, NodeKind};

/// Grammar-level failure with its position in the source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("syntax error at line {line}, column {column}: {message}")]
pub struct SyntaxError {
    pub message: String,
    /// Byte range of the offending input.
    pub span: Range<usize>,
    /// 1-based line of `span.start`.
    pub line: usize,
    /// 1-based column (in characters) of `span.start`.
    pub column: usize,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, span: Range<usize>, source: &str) -> Self {
        let (line, column) = line_column(source, span.start);
        Self {
            message: message.into(),
            span,
            line,
            column,
        }
    }
}

/// Convert a byte offset into a 1-based (line, column) pair.
fn line_column(source: &str, offset: usize) -> (usize, usize) {
    let mut line = 1;
    let mut column = 1;
    for (index, ch) in source.char_indices() {
        if index >= offset {
            break;
        }
        if ch == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }
    (line, column)
}

/// One violated constraint found while validating a raw tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// Location in the raw tree, e.g. `$[0].content[1].fg`.
    pub path: String,
    pub message: String,
    pub expected: String,
    pub received: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} (expected {}, received {})",
            self.path, self.message, self.expected, self.received
        )
    }
}

/// The raw tree did not validate. Holds every issue, in tree order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid markup tree: {}", summarize(.issues))]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationError {
    pub fn new(issues: Vec<ValidationIssue>) -> Self {
        Self { issues }
    }
}

fn summarize(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A node handler rejected a node during compilation.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message} (at `{}` in {})", .node.kind(), render_stack(.stack))]
pub struct CompilerError {
    pub message: String,
    /// The offending node.
    pub node: Node,
    /// Kinds of the open nodes at the time of the error, outermost first.
    pub stack: Vec<NodeKind>,
    /// Fatal errors abort compilation; others are logged and skipped.
    pub fatal: bool,
}

impl CompilerError {
    pub fn new(message: impl Into<String>, node: &Node, stack: &[&Node], fatal: bool) -> Self {
        Self {
            message: message.into(),
            node: node.clone(),
            stack: stack.iter().map(|open| open.kind()).collect(),
            fatal,
        }
    }

    pub fn fatal(message: impl Into<String>, node: &Node, stack: &[&Node]) -> Self {
        Self::new(message, node, stack, true)
    }

    pub fn recoverable(message: impl Into<String>, node: &Node, stack: &[&Node]) -> Self {
        Self::new(message, node, stack, false)
    }
}

fn render_stack(stack: &[NodeKind]) -> String {
    if stack.is_empty() {
        return "document root".to_string();
    }
    stack
        .iter()
        .map(|kind| kind.tag())
        .collect::<Vec<_>>()
        .join(" > ")
}

/// Loading a theme failed.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("failed to read theme file `{path}`: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid theme: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Any failure of the markup pipeline.
#[derive(Debug, Error)]
pub enum AnsieError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Compile(#[from] CompilerError),

    #[error(transparent)]
    Theme(#[from] ThemeError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::ast::{Content, InlineNode, TextNode};

    #[test]
    fn test_line_column_tracks_newlines() {
        assert_eq!(line_column("ab\ncd", 0), (1, 1));
        assert_eq!(line_column("ab\ncd", 4), (2, 2));
        assert_eq!(line_column("ab", 10), (1, 3));
    }

    #[test]
    fn test_syntax_error_display() {
        let error = SyntaxError::new("unknown tag `<foo>`", 4..7, "abc\n<foo>");
        assert_eq!(error.line, 2);
        assert_eq!(error.column, 1);
        assert_eq!(
            error.to_string(),
            "syntax error at line 2, column 1: unknown tag `<foo>`"
        );
    }

    #[test]
    fn test_compiler_error_names_stack() {
        let text = Node::Text(TextNode::new("x"));
        let bold = Node::Bold(InlineNode::new(Content::from_nodes(vec![text.clone()])));
        let error = CompilerError::recoverable("boom", &text, &[&bold, &text]);
        assert!(!error.fatal);
        assert_eq!(error.stack, vec![NodeKind::Bold, NodeKind::Text]);
        assert_eq!(error.to_string(), "boom (at `text` in bold > text)");
    }

    #[test]
    fn test_validation_error_lists_issues() {
        let error = ValidationError::new(vec![ValidationIssue {
            path: "$[0].fg".to_string(),
            message: "unknown color `purple`".to_string(),
            expected: "color name".to_string(),
            received: "string \"purple\"".to_string(),
        }]);
        assert!(error.to_string().contains("$[0].fg: unknown color `purple`"));
    }
}

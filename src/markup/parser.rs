//! Markup parser
//!
//! Parsing runs in two passes, the same way the structure and the meaning of a tag are kept
//! apart:
//!
//! 1. [grammar] is a chumsky grammar over the lexer's token stream. It only knows about nesting:
//!    text runs, open tags with attributes, bodies and close tags, all with byte spans.
//! 2. [conversion] checks each element against the closed tag and attribute tables and builds
//!    the raw tree, a `serde_json::Value` array of `{"node": tag, ...attributes, "content"}`
//!    objects.
//!
//! Any failure in either pass is a [SyntaxError] pointing into the source.

pub mod attributes;
pub mod conversion;
pub mod grammar;

use std::ops::Range;

use chumsky::{Parser, Stream};
use serde_json::Value;

use super::ast::MAX_NESTING;
use super::error::SyntaxError;
use super::lexer::{tokenize_with_spans, Token};

/// Parse markup into the raw tree.
pub fn parse(source: &str) -> Result<Value, SyntaxError> {
    let tokens = tokenize_with_spans(source)?;
    check_nesting(&tokens, source)?;
    let end = source.len();
    let parsed = grammar::document()
        .parse(Stream::from_iter(end..end, tokens.into_iter()))
        .map_err(|errors| match errors.into_iter().next() {
            Some(error) => grammar::syntax_error(error, source),
            None => SyntaxError::new("invalid markup", end..end, source),
        })?;
    let nodes = conversion::convert_nodes(parsed)
        .map_err(|(message, span)| SyntaxError::new(message, span, source))?;
    tracing::debug!(nodes = nodes.len(), "parsed markup");
    Ok(Value::Array(nodes))
}

/// Reject documents nested deeper than [MAX_NESTING] before the grammar recurses into them.
fn check_nesting(tokens: &[(Token, Range<usize>)], source: &str) -> Result<(), SyntaxError> {
    let mut depth = 0usize;
    let mut opening = None;
    for (token, span) in tokens {
        match token {
            Token::TagOpen => opening = Some(span.start),
            Token::CloseTagOpen => {
                opening = None;
                depth = depth.saturating_sub(1);
            }
            Token::SelfClose => opening = None,
            Token::TagEnd => {
                if let Some(start) = opening.take() {
                    depth += 1;
                    if depth > MAX_NESTING {
                        return Err(SyntaxError::new(
                            format!("nesting too deep (more than {MAX_NESTING} open tags)"),
                            start..span.end,
                            source,
                        ));
                    }
                }
            }
            _ => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_plain_text() {
        assert_eq!(
            parse("hello").unwrap(),
            json!([{"node": "text", "value": "hello"}])
        );
        assert_eq!(parse("").unwrap(), json!([]));
    }

    #[test]
    fn test_parse_nested_elements() {
        let raw = parse(r#"<h1 fg="red" margin-top="2">Title <bold>now</bold></h1><br/>"#).unwrap();
        assert_eq!(
            raw,
            json!([
                {"node": "h1", "fg": "red", "marginTop": 2, "content": [
                    {"node": "text", "value": "Title "},
                    {"node": "bold", "content": {"node": "text", "value": "now"}}
                ]},
                {"node": "br"}
            ])
        );
    }

    #[test]
    fn test_parse_flags_and_underline() {
        let raw = parse("<span bold italics='no' underline>x</span>").unwrap();
        assert_eq!(
            raw,
            json!([{"node": "span", "bold": true, "italics": false, "underline": true,
                    "content": {"node": "text", "value": "x"}}])
        );
    }

    #[test]
    fn test_empty_body_has_no_content() {
        assert_eq!(parse("<p></p>").unwrap(), json!([{"node": "p"}]));
    }

    #[test]
    fn test_unknown_tag() {
        let error = parse("<foo>x</foo>").unwrap_err();
        assert_eq!(error.span, 1..4);
        assert_eq!(error.message, "unknown tag `<foo>`");
    }

    #[test]
    fn test_unknown_attribute() {
        let error = parse("<bold fg=\"red\">x</bold>").unwrap_err();
        assert_eq!(error.span, 6..14);
        assert!(error.message.contains("unknown attribute `fg`"));
    }

    #[test]
    fn test_duplicate_attribute() {
        let error = parse("<p marginTop=\"1\" margin-top=\"2\">x</p>").unwrap_err();
        assert!(error.message.contains("duplicate attribute `marginTop`"));
    }

    #[test]
    fn test_mismatched_close_tag() {
        let error = parse("<bold>x</italics>").unwrap_err();
        assert_eq!(error.span, 9..16);
        assert!(error.message.contains("mismatched"));
    }

    #[test]
    fn test_break_must_self_close() {
        assert!(parse("<br></br>").is_err());
        assert!(parse("<br>x</br>").is_err());
        assert_eq!(parse("<br />").unwrap(), json!([{"node": "br"}]));
    }

    #[test]
    fn test_structural_errors() {
        assert!(parse("<bold>x").is_err());
        assert!(parse("x</bold>").is_err());
        assert!(parse("<bold x=>y</bold>").is_err());
    }

    #[test]
    fn test_nesting_limit() {
        let nested = |depth: usize| {
            format!("{}x{}", "<bold>".repeat(depth), "</bold>".repeat(depth))
        };
        assert!(parse(&nested(MAX_NESTING)).is_ok());

        let error = parse(&nested(MAX_NESTING + 1)).unwrap_err();
        assert!(error.message.starts_with("nesting too deep"));
        assert_eq!(error.span, 6 * MAX_NESTING..6 * (MAX_NESTING + 1));

        let error = parse(&nested(5000)).unwrap_err();
        assert!(error.message.starts_with("nesting too deep"));
    }

    #[test]
    fn test_siblings_do_not_count_as_nesting() {
        let siblings = "<p><bold>x</bold><br/></p>".repeat(MAX_NESTING * 2);
        assert!(parse(&siblings).is_ok());
    }

    #[test]
    fn test_character_references_are_decoded() {
        let raw = parse(r#"<li bullet="&quot;&apos;">a &lt; b & c</li>"#).unwrap();
        assert_eq!(
            raw,
            json!([{"node": "li", "bullet": "\"'",
                    "content": {"node": "text", "value": "a < b & c"}}])
        );
    }

    #[test]
    fn test_error_position() {
        let error = parse("line one\n<p>\n  <nope/></p>").unwrap_err();
        assert_eq!(error.line, 3);
        assert_eq!(error.column, 4);
    }
}

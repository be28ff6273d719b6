//! Chumsky grammar over the token stream
//!
//! ```text
//! document := (text | element)*
//! element  := "<" name attribute* ("/>" | ">" document "</" name ">")
//! attribute := name ("=" string)?
//! ```
//!
//! The grammar accepts any name; which names mean something is decided in
//! [conversion](super::conversion).

use std::ops::Range;

use chumsky::error::SimpleReason;
use chumsky::prelude::*;
use chumsky::select;

use crate::markup::error::SyntaxError;
use crate::markup::lexer::Token;

type ParserError = Simple<Token>;

/// Element as written, before any tag or attribute checks.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementWithSpans {
    pub name: String,
    pub name_span: Range<usize>,
    pub attributes: Vec<AttributeWithSpans>,
    /// `None` for a self-closing element.
    pub body: Option<Vec<ParsedNode>>,
    /// Name and span of the close tag, when there is one.
    pub close: Option<(String, Range<usize>)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttributeWithSpans {
    pub name: String,
    /// `None` for a bare attribute.
    pub value: Option<String>,
    pub span: Range<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParsedNode {
    Text(String),
    Element(ElementWithSpans),
}

fn name() -> impl Parser<Token, (String, Range<usize>), Error = ParserError> + Clone {
    select! { Token::Ident(name) => name }.map_with_span(|name, span| (name, span))
}

fn attribute() -> impl Parser<Token, AttributeWithSpans, Error = ParserError> + Clone {
    let value = select! { Token::Str(value) => value };
    select! { Token::Ident(name) => name }
        .then(just(Token::Equals).ignore_then(value).or_not())
        .map_with_span(|(name, value), span| AttributeWithSpans { name, value, span })
}

/// Parser for a whole document.
pub fn document() -> impl Parser<Token, Vec<ParsedNode>, Error = ParserError> {
    recursive(|nodes| {
        let text = select! { Token::Text(value) => ParsedNode::Text(value) };

        let close = just(Token::CloseTagOpen)
            .ignore_then(name())
            .then_ignore(just(Token::TagEnd));

        let body = choice((
            just(Token::SelfClose).to(None),
            just(Token::TagEnd)
                .ignore_then(nodes)
                .then(close)
                .map(Some),
        ));

        let element = just(Token::TagOpen)
            .ignore_then(name())
            .then(attribute().repeated())
            .then(body)
            .map(|(((name, name_span), attributes), body)| {
                let (body, close) = match body {
                    Some((children, close)) => (Some(children), Some(close)),
                    None => (None, None),
                };
                ParsedNode::Element(ElementWithSpans {
                    name,
                    name_span,
                    attributes,
                    body,
                    close,
                })
            });

        choice((text, element)).repeated()
    })
    .then_ignore(end())
}

/// Describe a chumsky error in terms of the markup.
pub fn syntax_error(error: ParserError, source: &str) -> SyntaxError {
    let message = match error.reason() {
        SimpleReason::Unclosed { delimiter, .. } => format!("unclosed {delimiter}"),
        SimpleReason::Custom(message) => message.clone(),
        SimpleReason::Unexpected => {
            let found = error
                .found()
                .map_or_else(|| "end of input".to_string(), ToString::to_string);
            let mut expected: Vec<String> = error
                .expected()
                .map(|token| {
                    token
                        .as_ref()
                        .map_or_else(|| "end of input".to_string(), ToString::to_string)
                })
                .collect();
            expected.sort();
            expected.dedup();
            if expected.is_empty() {
                format!("unexpected {found}")
            } else {
                format!("unexpected {found}, expected {}", expected.join(" or "))
            }
        }
    };
    SyntaxError::new(message, error.span(), source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::lexer::tokenize_with_spans;
    use chumsky::Stream;

    fn parse(source: &str) -> Result<Vec<ParsedNode>, Vec<ParserError>> {
        let tokens = tokenize_with_spans(source).unwrap();
        let end = source.len();
        document().parse(Stream::from_iter(end..end, tokens.into_iter()))
    }

    #[test]
    fn test_text_and_elements() {
        let nodes = parse("a<b x='1' y>c</b><br/>").unwrap();
        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[0], ParsedNode::Text("a".to_string()));
        let ParsedNode::Element(element) = &nodes[1] else {
            panic!("expected an element, got {:?}", nodes[1]);
        };
        assert_eq!(element.name, "b");
        assert_eq!(element.name_span, 2..3);
        assert_eq!(
            element.attributes,
            vec![
                AttributeWithSpans {
                    name: "x".to_string(),
                    value: Some("1".to_string()),
                    span: 4..9,
                },
                AttributeWithSpans {
                    name: "y".to_string(),
                    value: None,
                    span: 10..11,
                },
            ]
        );
        assert_eq!(element.body, Some(vec![ParsedNode::Text("c".to_string())]));
        assert_eq!(element.close, Some(("b".to_string(), 15..16)));
        let ParsedNode::Element(br) = &nodes[2] else {
            panic!("expected an element, got {:?}", nodes[2]);
        };
        assert_eq!(br.body, None);
    }

    #[test]
    fn test_close_names_are_not_checked_here() {
        assert!(parse("<a>x</b>").is_ok());
    }

    #[test]
    fn test_unclosed_element() {
        let errors = parse("<a>x").unwrap_err();
        let error = syntax_error(errors[0].clone(), "<a>x");
        assert_eq!(error.line, 1);
    }

    #[test]
    fn test_stray_close_tag() {
        assert!(parse("x</a>").is_err());
    }
}

//! Mode-switching tokenization.

use std::ops::Range;

use logos::Logos;

use super::tokens::{ContentToken, TagToken, Token};
use crate::markup::error::SyntaxError;

/// Tokenize `source`, dropping the spans.
pub fn tokenize(source: &str) -> Result<Vec<Token>, SyntaxError> {
    Ok(tokenize_with_spans(source)?
        .into_iter()
        .map(|(token, _)| token)
        .collect())
}

/// Tokenize `source` into tokens with their byte ranges.
///
/// A tag left open at the end of input is reported at the end of input.
pub fn tokenize_with_spans(source: &str) -> Result<Vec<(Token, Range<usize>)>, SyntaxError> {
    let mut tokens = Vec::new();
    let mut content = ContentToken::lexer(source);

    while let Some(result) = content.next() {
        let span = content.span();
        let token = result.map_err(|()| unexpected(content.slice(), span.clone(), source))?;
        tokens.push((Token::from_content(token, content.slice()), span));
        if token == ContentToken::Text {
            continue;
        }

        let mut tag = content.morph::<TagToken>();
        loop {
            let Some(result) = tag.next() else {
                let end = source.len();
                return Err(SyntaxError::new("unterminated tag", end..end, source));
            };
            let token = result.map_err(|()| unexpected(tag.slice(), tag.span(), source))?;
            tokens.push((Token::from_tag(token, tag.slice()), tag.span()));
            if token.closes_tag() {
                break;
            }
        }
        content = tag.morph();
    }

    Ok(tokens)
}

fn unexpected(slice: &str, span: Range<usize>, source: &str) -> SyntaxError {
    SyntaxError::new(format!("unexpected character `{slice}`"), span, source)
}

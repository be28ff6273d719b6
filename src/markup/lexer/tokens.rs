//! Token definitions
//!
//! [ContentToken] and [TagToken] are the raw logos tokens of the two lexer modes. [Token] is
//! what the parser consumes: the union of both, carrying the text it needs.

use std::fmt;

use logos::Logos;

/// Tokens between tags.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentToken {
    #[token("<")]
    TagOpen,

    #[token("</")]
    CloseTagOpen,

    // Whitespace is significant in text, so it is part of the run.
    #[regex(r"[^<]+")]
    Text,
}

/// Tokens inside a tag, between `<` and `>` or `/>`.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
pub enum TagToken {
    #[regex(r"[A-Za-z][A-Za-z0-9_-]*")]
    Ident,

    #[token("=")]
    Equals,

    // Character references are decoded by the parser, not here.
    #[regex(r#""[^"]*""#)]
    #[regex(r"'[^']*'")]
    Quoted,

    #[token(">")]
    TagEnd,

    #[token("/>")]
    SelfClose,
}

impl TagToken {
    /// Whether this token ends the tag and hands back to content mode.
    pub fn closes_tag(self) -> bool {
        matches!(self, TagToken::TagEnd | TagToken::SelfClose)
    }
}

/// A token of the unified stream.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// `<`
    TagOpen,
    /// `</`
    CloseTagOpen,
    /// A verbatim text run.
    Text(String),
    /// Tag or attribute name.
    Ident(String),
    /// `=`
    Equals,
    /// Attribute value with the quotes removed.
    Str(String),
    /// `>`
    TagEnd,
    /// `/>`
    SelfClose,
}

impl Token {
    pub(crate) fn from_content(token: ContentToken, slice: &str) -> Self {
        match token {
            ContentToken::TagOpen => Token::TagOpen,
            ContentToken::CloseTagOpen => Token::CloseTagOpen,
            ContentToken::Text => Token::Text(slice.to_string()),
        }
    }

    pub(crate) fn from_tag(token: TagToken, slice: &str) -> Self {
        match token {
            TagToken::Ident => Token::Ident(slice.to_string()),
            TagToken::Equals => Token::Equals,
            // Both quote characters are one byte wide.
            TagToken::Quoted => Token::Str(slice[1..slice.len() - 1].to_string()),
            TagToken::TagEnd => Token::TagEnd,
            TagToken::SelfClose => Token::SelfClose,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::TagOpen => f.write_str("`<`"),
            Token::CloseTagOpen => f.write_str("`</`"),
            Token::Text(_) => f.write_str("text"),
            Token::Ident(name) => write!(f, "`{name}`"),
            Token::Equals => f.write_str("`=`"),
            Token::Str(value) => write!(f, "{value:?}"),
            Token::TagEnd => f.write_str("`>`"),
            Token::SelfClose => f.write_str("`/>`"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_mode() {
        let mut lexer = ContentToken::lexer("a b</");
        assert_eq!(lexer.next(), Some(Ok(ContentToken::Text)));
        assert_eq!(lexer.slice(), "a b");
        assert_eq!(lexer.next(), Some(Ok(ContentToken::CloseTagOpen)));
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_tag_mode() {
        let mut lexer = TagToken::lexer("h1 fg = 'red' bold/>");
        let tokens: Vec<_> = lexer.by_ref().map(|token| token.unwrap()).collect();
        assert_eq!(
            tokens,
            vec![
                TagToken::Ident,
                TagToken::Ident,
                TagToken::Equals,
                TagToken::Quoted,
                TagToken::Ident,
                TagToken::SelfClose
            ]
        );
    }

    #[test]
    fn test_quoted_value_is_unwrapped() {
        assert_eq!(
            Token::from_tag(TagToken::Quoted, "\"a 'b'\""),
            Token::Str("a 'b'".to_string())
        );
    }
}

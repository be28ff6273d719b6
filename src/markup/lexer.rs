//! Lexer for ansie markup
//!
//! Markup is lexed in two modes. Outside of tags everything up to the next `<` is one text run;
//! inside a tag the lexer sees identifiers, `=`, quoted values and the tag terminators, with
//! whitespace skipped. The two logos lexers hand over to each other with `Lexer::morph`, and
//! [tokenize_with_spans] flattens both into one [Token] stream for the parser.
//!
//! Text and quoted values are passed through as written; `&lt;` and the other character
//! references are decoded later, when the parser builds the raw tree.

pub mod lexer_impl;
pub mod tokens;

pub use lexer_impl::{tokenize, tokenize_with_spans};
pub use tokens::Token;

//! Main module for ansie markup
//!
//! Pipeline
//!
//!     markup text -> [lexer] -> tokens -> [parser] -> raw tree -> [ast::validate] -> Ast
//!     -> [compiler] -> ANSI or markup text
//!
//!     The [composer] produces the same trees from code and stringifies them to markup,
//!     which can re-enter the pipeline at the top.

pub mod ast;
pub mod compiler;
pub mod composer;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod theme;
pub mod utilities;

pub use ast::{validate, Ast, Node, NodeKind};
pub use compiler::{Compiler, Format};
pub use error::{AnsieError, CompilerError, SyntaxError, ThemeError, ValidationError};
pub use theme::Theme;

/// Parse markup text and validate it into a typed [Ast].
pub fn parse_ast(source: &str) -> Result<Ast, AnsieError> {
    let raw = parser::parse(source)?;
    let ast = ast::validate(&raw)?;
    tracing::debug!(nodes = ast.len(), "validated markup");
    Ok(ast)
}

/// Compile markup text using the built-in theme.
pub fn compile(source: &str, format: Format) -> Result<String, AnsieError> {
    compile_with_theme(source, format, &Theme::default())
}

/// Compile markup text, rendering themed nodes with `theme`.
pub fn compile_with_theme(
    source: &str,
    format: Format,
    theme: &Theme,
) -> Result<String, AnsieError> {
    let ast = parse_ast(source)?;
    let output = Compiler::with_theme(theme.clone()).compile(&ast, format)?;
    Ok(output)
}

//! Composer: building markup trees in code
//!
//! The builder functions in [builders] return immutable [ComposerNode]s. A composer tree
//! stringifies to markup (`to_string()`), builds the typed AST directly (`to_ast()`), or compiles
//! in one step (`compile()`):
//!
//! ```text
//! use ansie::markup::composer::*;
//!
//! let page = bundle([
//!     h1("Release notes"),
//!     p([text("Shipped "), bold("three"), text(" fixes :tada:")]),
//!     list(["faster lexer", "new themes"]),
//! ]);
//! println!("{}", page.compile(Format::Ansi)?);
//! ```
//!
//! Themed kinds (headings, paragraphs, spans, divs, list items) write out their effective style,
//! the node's overrides layered over its theme, so the markup carries every attribute it renders
//! with. Parsing that markup back gives exactly `to_ast()`.

pub mod builders;
pub mod node;

pub use builders::*;
pub use node::{ComposerKind, ComposerNode, IntoChildren};

pub use super::compiler::Format;

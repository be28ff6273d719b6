//! Compiler: walks a typed [Ast] and renders it through node handlers
//!
//! The walk is a single depth-first pass with an explicit stack of open nodes. For each node the
//! compiler pushes it, asks the first matching handler for the opening output, compiles the
//! children in order, asks the same handler for the closing output (the node is still on the
//! stack), then pops it.
//!
//! Handlers return [CompilerError]s. Fatal ones abort the compile; non-fatal ones are logged,
//! collected as warnings, and the failing marker renders as nothing while the children still
//! render.
//!
//! ```text
//! let compiler = Compiler::new();
//! let output = compiler.compile(&ast, Format::Ansi)?;
//! ```

pub mod handlers;

use std::fmt;
use std::str::FromStr;

use super::ast::{Ast, Node, MAX_NESTING};
use super::error::CompilerError;
use super::theme::Theme;
use handlers::{default_handlers, NodeHandler};

/// Output target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Format {
    /// Terminal text with SGR escape codes.
    #[default]
    Ansi,
    /// Canonical markup.
    Markup,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Ansi => f.write_str("ansi"),
            Format::Markup => f.write_str("markup"),
        }
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ansi" => Ok(Format::Ansi),
            "markup" => Ok(Format::Markup),
            _ => Err(format!("unknown format `{s}` (expected ansi or markup)")),
        }
    }
}

/// What handlers see besides the node and the stack.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub format: Format,
    pub theme: &'a Theme,
}

/// Output plus the non-fatal errors met on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Compilation {
    pub output: String,
    pub warnings: Vec<CompilerError>,
}

/// Renders ASTs. Holds the handler list and the theme; every compile call is independent.
pub struct Compiler {
    handlers: Vec<Box<dyn NodeHandler>>,
    theme: Theme,
}

impl Compiler {
    /// A compiler with the default handlers and the built-in theme.
    pub fn new() -> Self {
        Self::with_theme(Theme::default())
    }

    pub fn with_theme(theme: Theme) -> Self {
        Self {
            handlers: default_handlers(),
            theme,
        }
    }

    /// Add a handler. Dispatch picks the first registered handler claiming a node, so a handler
    /// registered here only sees kinds no default handler claims.
    pub fn register(&mut self, handler: Box<dyn NodeHandler>) {
        self.handlers.push(handler);
    }

    pub fn handler_names(&self) -> Vec<&str> {
        self.handlers.iter().map(|handler| handler.name()).collect()
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn compile(&self, ast: &Ast, format: Format) -> Result<String, CompilerError> {
        Ok(self.compile_with_diagnostics(ast, format)?.output)
    }

    pub fn compile_with_diagnostics(
        &self,
        ast: &Ast,
        format: Format,
    ) -> Result<Compilation, CompilerError> {
        let context = RenderContext {
            format,
            theme: &self.theme,
        };
        let mut walk = Walk {
            handlers: &self.handlers,
            context,
            stack: Vec::new(),
            output: String::new(),
            warnings: Vec::new(),
        };
        for node in ast {
            walk.visit(node)?;
        }
        tracing::debug!(
            %format,
            bytes = walk.output.len(),
            warnings = walk.warnings.len(),
            "compiled markup"
        );
        Ok(Compilation {
            output: walk.output,
            warnings: walk.warnings,
        })
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Compiler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Compiler")
            .field("handlers", &self.handler_names())
            .field("theme", &self.theme)
            .finish()
    }
}

/// State of one compile call.
struct Walk<'c, 'a> {
    handlers: &'c [Box<dyn NodeHandler>],
    context: RenderContext<'c>,
    stack: Vec<&'a Node>,
    output: String,
    warnings: Vec<CompilerError>,
}

impl<'c, 'a> Walk<'c, 'a> {
    fn visit(&mut self, node: &'a Node) -> Result<(), CompilerError> {
        let handlers = self.handlers;
        let Some(handler) = handlers.iter().find(|handler| handler.is_type(node)) else {
            return Err(CompilerError::fatal(
                format!("no handler registered for `{}`", node.kind()),
                node,
                &self.stack,
            ));
        };

        if self.stack.len() > MAX_NESTING {
            return Err(CompilerError::fatal(
                format!("nesting too deep (more than {MAX_NESTING} levels)"),
                node,
                &self.stack,
            ));
        }

        self.stack.push(node);
        let entered = handler.handle_enter(node, &self.stack, &self.context);
        self.absorb(entered)?;
        for child in node.children() {
            self.visit(child)?;
        }
        let exited = handler.handle_exit(node, &self.stack, &self.context);
        self.absorb(exited)?;
        self.stack.pop();
        Ok(())
    }

    fn absorb(&mut self, result: Result<String, CompilerError>) -> Result<(), CompilerError> {
        match result {
            Ok(text) => self.output.push_str(&text),
            Err(error) if error.fatal => return Err(error),
            Err(error) => {
                tracing::warn!(
                    node = %error.node.kind(),
                    stack = ?error.stack,
                    "{}",
                    error.message
                );
                self.warnings.push(error);
            }
        }
        Ok(())
    }
}

//! # ansie
//!
//! A compiler for ansie markup, a small tag language describing styled terminal output.
//!
//! The pipeline lives in the [markup] module: markup text is tokenized, parsed into a raw
//! tree, validated into a typed AST and finally compiled to ANSI escape codes (or back to
//! canonical markup). The [composer](markup::composer) builds the same trees in code.

pub mod markup;

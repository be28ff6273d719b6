//! Pure helpers shared by the parser, the handlers and the composer.

pub mod case;
pub mod emoji;
pub mod entities;
pub mod escape_codes;
pub mod spacing;
pub mod tags;

//! Margin arithmetic.
//!
//! Vertical margins render as newlines, horizontal margins as spaces.

use crate::markup::theme::SpacingStyle;

/// Fully resolved margins, one value per direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Margins {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

/// Resolve the `margin` shorthand against the specific directions. Unset means zero.
pub fn resolve(spacing: &SpacingStyle) -> Margins {
    Margins {
        top: spacing.top().unwrap_or(0),
        right: spacing.right().unwrap_or(0),
        bottom: spacing.bottom().unwrap_or(0),
        left: spacing.left().unwrap_or(0),
    }
}

pub fn newlines(count: u16) -> String {
    "\n".repeat(usize::from(count))
}

pub fn spaces(count: u16) -> String {
    " ".repeat(usize::from(count))
}

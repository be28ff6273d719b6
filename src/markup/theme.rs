//! Themes: default styles per node kind
//!
//! A [Theme] maps every styleable tag to a [Style]. When a node is rendered its effective style
//! is the node's own attributes layered over its theme entry, which is itself layered over the
//! built-in theme ([DEFAULT_THEME]). Fields left unset anywhere simply fall through.
//!
//! Themes can be written in YAML; missing tags and fields fall back to the built-in values, and
//! unknown ones are rejected:
//!
//! ```text
//! h1:
//!   font:
//!     fg: magenta
//! li:
//!   list:
//!     bullet: "- "
//! ```

pub mod style;

use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::ast::NodeKind;
use super::error::ThemeError;
pub use style::{Color, FontStyle, ListStyle, SpacingStyle, Style, UnderlineStyle};

/// The built-in theme, shared by every compile and composer call.
pub static DEFAULT_THEME: Lazy<Theme> = Lazy::new(Theme::builtin);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Theme {
    pub h1: Style,
    pub h2: Style,
    pub h3: Style,
    pub body: Style,
    pub p: Style,
    pub div: Style,
    pub span: Style,
    pub li: Style,
    pub br: Style,
}

impl Theme {
    /// The built-in defaults.
    pub fn builtin() -> Self {
        let top_margin = |n| SpacingStyle {
            margin_top: Some(n),
            ..SpacingStyle::default()
        };
        Self {
            h1: Style::default()
                .with_font(FontStyle {
                    fg: Some(Color::Blue),
                    bold: Some(true),
                    underline: Some(UnderlineStyle::Double),
                    ..FontStyle::default()
                })
                .with_spacing(top_margin(1)),
            h2: Style::default()
                .with_font(FontStyle {
                    fg: Some(Color::Default),
                    bold: Some(true),
                    underline: Some(UnderlineStyle::Single),
                    ..FontStyle::default()
                })
                .with_spacing(top_margin(1)),
            h3: Style::default()
                .with_font(FontStyle {
                    fg: Some(Color::Gray),
                    bold: Some(true),
                    ..FontStyle::default()
                })
                .with_spacing(top_margin(1)),
            body: Style::default(),
            p: Style::default().with_spacing(top_margin(1)),
            div: Style::default().with_spacing(top_margin(1)),
            span: Style::default(),
            li: Style::default()
                .with_spacing(top_margin(1))
                .with_list(ListStyle {
                    bullet: Some("* ".to_string()),
                    indent: Some(1),
                }),
            br: Style::default(),
        }
    }

    /// A theme with no entries. Rendering with it still falls through to the built-in values.
    pub fn empty() -> Self {
        Self {
            h1: Style::default(),
            h2: Style::default(),
            h3: Style::default(),
            body: Style::default(),
            p: Style::default(),
            div: Style::default(),
            span: Style::default(),
            li: Style::default(),
            br: Style::default(),
        }
    }

    /// The entry for `kind`, or `None` for kinds that are not themed.
    pub fn style(&self, kind: NodeKind) -> Option<&Style> {
        match kind {
            NodeKind::H1 => Some(&self.h1),
            NodeKind::H2 => Some(&self.h2),
            NodeKind::H3 => Some(&self.h3),
            NodeKind::Body => Some(&self.body),
            NodeKind::Paragraph => Some(&self.p),
            NodeKind::Div => Some(&self.div),
            NodeKind::Span => Some(&self.span),
            NodeKind::ListItem => Some(&self.li),
            NodeKind::Break => Some(&self.br),
            NodeKind::Text
            | NodeKind::Bold
            | NodeKind::Italics
            | NodeKind::Underline
            | NodeKind::Color => None,
        }
    }

    fn style_mut(&mut self, kind: NodeKind) -> Option<&mut Style> {
        match kind {
            NodeKind::H1 => Some(&mut self.h1),
            NodeKind::H2 => Some(&mut self.h2),
            NodeKind::H3 => Some(&mut self.h3),
            NodeKind::Body => Some(&mut self.body),
            NodeKind::Paragraph => Some(&mut self.p),
            NodeKind::Div => Some(&mut self.div),
            NodeKind::Span => Some(&mut self.span),
            NodeKind::ListItem => Some(&mut self.li),
            NodeKind::Break => Some(&mut self.br),
            _ => None,
        }
    }

    /// Replace the entry for `kind`. Kinds that are not themed are left alone.
    pub fn with_style(mut self, kind: NodeKind, style: Style) -> Self {
        if let Some(entry) = self.style_mut(kind) {
            *entry = style;
        }
        self
    }

    /// The entry for `kind` layered over the built-in entry.
    pub fn resolve(&self, kind: NodeKind) -> Style {
        let fallback = DEFAULT_THEME.style(kind).cloned().unwrap_or_default();
        match self.style(kind) {
            Some(style) => fallback.merge(style),
            None => fallback,
        }
    }

    pub fn from_yaml_str(source: &str) -> Result<Self, ThemeError> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ThemeError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let theme = Self::from_yaml_str(&source)?;
        tracing::debug!(path = %path.display(), "loaded theme");
        Ok(theme)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_headings() {
        let theme = Theme::builtin();
        assert_eq!(theme.h1.font.fg, Some(Color::Blue));
        assert_eq!(theme.h1.font.underline, Some(UnderlineStyle::Double));
        assert_eq!(theme.h2.font.fg, Some(Color::Default));
        assert_eq!(theme.h2.font.underline, Some(UnderlineStyle::Single));
        assert_eq!(theme.h3.font.fg, Some(Color::Gray));
        assert_eq!(theme.h3.font.underline, None);
        for style in [&theme.h1, &theme.h2, &theme.h3] {
            assert_eq!(style.font.bold, Some(true));
            assert_eq!(style.spacing.top(), Some(1));
        }
    }

    #[test]
    fn test_builtin_blocks_and_lists() {
        let theme = Theme::builtin();
        assert_eq!(theme.p.spacing.top(), Some(1));
        assert_eq!(theme.div.spacing.top(), Some(1));
        assert_eq!(theme.li.list.bullet.as_deref(), Some("* "));
        assert_eq!(theme.li.list.indent, Some(1));
        assert_eq!(theme.span, Style::default());
        assert_eq!(theme.body, Style::default());
        assert_eq!(theme.br, Style::default());
    }

    #[test]
    fn test_unthemed_kinds_have_no_entry() {
        assert!(Theme::builtin().style(NodeKind::Bold).is_none());
        assert_eq!(Theme::builtin().resolve(NodeKind::Color), Style::default());
    }

    #[test]
    fn test_resolve_falls_through_to_builtin() {
        let theme = Theme::empty().with_style(
            NodeKind::H1,
            Style::default().with_font(FontStyle {
                fg: Some(Color::Magenta),
                ..FontStyle::default()
            }),
        );
        let h1 = theme.resolve(NodeKind::H1);
        assert_eq!(h1.font.fg, Some(Color::Magenta));
        assert_eq!(h1.font.bold, Some(true));
        assert_eq!(h1.spacing.top(), Some(1));
    }

    #[test]
    fn test_yaml_partial_theme() {
        let theme = Theme::from_yaml_str(
            "h2:\n  font:\n    underline: double\nli:\n  list:\n    bullet: \"- \"\n  spacing:\n    marginTop: 0\n",
        )
        .unwrap();
        assert_eq!(theme.h2.font.underline, Some(UnderlineStyle::Double));
        let li = theme.resolve(NodeKind::ListItem);
        assert_eq!(li.list.bullet.as_deref(), Some("- "));
        assert_eq!(li.list.indent, Some(1));
        assert_eq!(li.spacing.top(), Some(0));
        // Untouched entries keep the built-in values.
        assert_eq!(theme.h1, Theme::builtin().h1);
    }

    #[test]
    fn test_yaml_rejects_unknown_color() {
        assert!(Theme::from_yaml_str("h1:\n  font:\n    fg: purple\n").is_err());
    }

    #[test]
    fn test_yaml_rejects_unknown_keys() {
        for source in [
            "h4:\n  font:\n    bold: true\n",
            "h1:\n  font:\n    colour: red\n",
            "p:\n  spacing:\n    margin_top: 1\n",
            "li:\n  list:\n    bulet: \"- \"\n",
            "span:\n  fonts: {}\n",
        ] {
            let error = Theme::from_yaml_str(source).unwrap_err();
            assert!(error.to_string().contains("unknown field"), "{source:?}: {error}");
        }
    }

    #[test]
    fn test_missing_theme_file() {
        let error = Theme::from_yaml_file("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(error, ThemeError::Read { .. }));
    }
}

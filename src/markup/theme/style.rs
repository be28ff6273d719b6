//! Style records and the attribute value types they are built from.
//!
//! A [Style] is plain data: every field is optional and unset fields fall through to whatever
//! the style is merged over. Merging never mutates, it returns a new record.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::markup::utilities::spacing;

/// Named terminal colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    #[serde(alias = "grey")]
    Gray,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
    Default,
}

impl Color {
    pub const ALL: [Color; 17] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
        Color::Gray,
        Color::BrightRed,
        Color::BrightGreen,
        Color::BrightYellow,
        Color::BrightBlue,
        Color::BrightMagenta,
        Color::BrightCyan,
        Color::BrightWhite,
        Color::Default,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
            Color::Gray => "gray",
            Color::BrightRed => "brightred",
            Color::BrightGreen => "brightgreen",
            Color::BrightYellow => "brightyellow",
            Color::BrightBlue => "brightblue",
            Color::BrightMagenta => "brightmagenta",
            Color::BrightCyan => "brightcyan",
            Color::BrightWhite => "brightwhite",
            Color::Default => "default",
        }
    }

    /// SGR code selecting this color as foreground.
    pub fn fg_code(self) -> u8 {
        match self {
            Color::Black => 30,
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
            Color::Magenta => 35,
            Color::Cyan => 36,
            Color::White => 37,
            Color::Gray => 90,
            Color::BrightRed => 91,
            Color::BrightGreen => 92,
            Color::BrightYellow => 93,
            Color::BrightBlue => 94,
            Color::BrightMagenta => 95,
            Color::BrightCyan => 96,
            Color::BrightWhite => 97,
            Color::Default => 39,
        }
    }

    /// SGR code selecting this color as background. Always the foreground code plus 10.
    pub fn bg_code(self) -> u8 {
        self.fg_code() + 10
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        if name == "grey" {
            return Ok(Color::Gray);
        }
        Color::ALL
            .into_iter()
            .find(|color| color.name() == name)
            .ok_or_else(|| format!("unknown color `{s}`"))
    }
}

/// Underline styles. `Off` only makes sense as an override of a themed underline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnderlineStyle {
    Single,
    Double,
    #[serde(rename = "none", alias = "off")]
    Off,
}

impl UnderlineStyle {
    pub fn name(self) -> &'static str {
        match self {
            UnderlineStyle::Single => "single",
            UnderlineStyle::Double => "double",
            UnderlineStyle::Off => "none",
        }
    }
}

impl fmt::Display for UnderlineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for UnderlineStyle {
    type Err = String;

    /// Truthy forms mean `single`, falsy forms mean `none`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" | "true" | "yes" => Ok(UnderlineStyle::Single),
            "double" => Ok(UnderlineStyle::Double),
            "none" | "off" | "false" | "no" => Ok(UnderlineStyle::Off),
            _ => Err(format!("unknown underline style `{s}`")),
        }
    }
}

/// Font attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FontStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fg: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underline: Option<UnderlineStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italics: Option<bool>,
}

impl FontStyle {
    pub fn merge(&self, overrides: &FontStyle) -> FontStyle {
        FontStyle {
            fg: overrides.fg.or(self.fg),
            bg: overrides.bg.or(self.bg),
            bold: overrides.bold.or(self.bold),
            underline: overrides.underline.or(self.underline),
            italics: overrides.italics.or(self.italics),
        }
    }
}

/// Margins. `margin` is shorthand for all four directions; a specific direction wins over it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct SpacingStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_left: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_right: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<u16>,
}

impl SpacingStyle {
    /// The same margin in every direction.
    pub fn uniform(margin: u16) -> Self {
        Self {
            margin: Some(margin),
            ..Self::default()
        }
    }

    pub fn top(&self) -> Option<u16> {
        self.margin_top.or(self.margin)
    }

    pub fn bottom(&self) -> Option<u16> {
        self.margin_bottom.or(self.margin)
    }

    pub fn left(&self) -> Option<u16> {
        self.margin_left.or(self.margin)
    }

    pub fn right(&self) -> Option<u16> {
        self.margin_right.or(self.margin)
    }

    /// Each direction is resolved on both sides before merging, so an override's `margin`
    /// beats a base `marginTop`. The result only uses the specific directions.
    pub fn merge(&self, overrides: &SpacingStyle) -> SpacingStyle {
        SpacingStyle {
            margin: None,
            margin_left: overrides.left().or(self.left()),
            margin_right: overrides.right().or(self.right()),
            margin_top: overrides.top().or(self.top()),
            margin_bottom: overrides.bottom().or(self.bottom()),
        }
    }

    pub fn resolve(&self) -> spacing::Margins {
        spacing::resolve(self)
    }
}

/// List item decoration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ListStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bullet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indent: Option<u16>,
}

impl ListStyle {
    pub fn merge(&self, overrides: &ListStyle) -> ListStyle {
        ListStyle {
            bullet: overrides.bullet.clone().or_else(|| self.bullet.clone()),
            indent: overrides.indent.or(self.indent),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bullet.is_none() && self.indent.is_none()
    }
}

/// Visual attributes of one node kind, or explicit overrides for one node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Style {
    pub font: FontStyle,
    pub spacing: SpacingStyle,
    pub list: ListStyle,
}

impl Style {
    /// A new style with `overrides` layered over `self`.
    pub fn merge(&self, overrides: &Style) -> Style {
        Style {
            font: self.font.merge(&overrides.font),
            spacing: self.spacing.merge(&overrides.spacing),
            list: self.list.merge(&overrides.list),
        }
    }

    pub fn with_font(mut self, font: FontStyle) -> Self {
        self.font = font;
        self
    }

    pub fn with_spacing(mut self, spacing: SpacingStyle) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_list(mut self, list: ListStyle) -> Self {
        self.list = list;
        self
    }

    /// Markup attributes for every field that is set, in canonical order.
    pub fn markup_attributes(&self) -> Vec<(&'static str, String)> {
        let font = &self.font;
        let spacing = &self.spacing;
        let mut attributes = Vec::new();
        let mut push = |name: &'static str, value: Option<String>| {
            if let Some(value) = value {
                attributes.push((name, value));
            }
        };
        push("fg", font.fg.map(|color| color.to_string()));
        push("bg", font.bg.map(|color| color.to_string()));
        push("bold", font.bold.map(|flag| flag.to_string()));
        push("underline", font.underline.map(|style| style.to_string()));
        push("italics", font.italics.map(|flag| flag.to_string()));
        push("margin", spacing.margin.map(|n| n.to_string()));
        push("marginLeft", spacing.margin_left.map(|n| n.to_string()));
        push("marginRight", spacing.margin_right.map(|n| n.to_string()));
        push("marginTop", spacing.margin_top.map(|n| n.to_string()));
        push("marginBottom", spacing.margin_bottom.map(|n| n.to_string()));
        push("bullet", self.list.bullet.clone());
        push("indent", self.list.indent.map(|n| n.to_string()));
        attributes
    }
}

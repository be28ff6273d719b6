//! ANSI SGR escape codes.
//!
//! Color codes live on [Color](crate::markup::theme::Color); the attribute codes are here.
//! Several codes are always combined into one `ESC [ a ; b ; c m` sequence.

use crate::markup::theme::{FontStyle, UnderlineStyle};

pub const BOLD: u8 = 1;
pub const BOLD_OFF: u8 = 22;
pub const ITALICS: u8 = 3;
pub const ITALICS_OFF: u8 = 23;
pub const UNDERLINE: u8 = 4;
pub const DOUBLE_UNDERLINE: u8 = 21;
pub const UNDERLINE_OFF: u8 = 24;
pub const FG_DEFAULT: u8 = 39;
pub const BG_DEFAULT: u8 = 49;

/// Build a single SGR sequence from `codes`. No codes, no sequence.
pub fn sgr(codes: &[u8]) -> String {
    if codes.is_empty() {
        return String::new();
    }
    let joined = codes
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(";");
    format!("\x1b[{joined}m")
}

pub fn underline_code(style: UnderlineStyle) -> Option<u8> {
    match style {
        UnderlineStyle::Single => Some(UNDERLINE),
        UnderlineStyle::Double => Some(DOUBLE_UNDERLINE),
        UnderlineStyle::Off => None,
    }
}

/// Codes switching on every active attribute: fg, bg, bold, underline, italics.
pub fn font_on_codes(font: &FontStyle) -> Vec<u8> {
    let mut codes = Vec::new();
    if let Some(fg) = font.fg {
        codes.push(fg.fg_code());
    }
    if let Some(bg) = font.bg {
        codes.push(bg.bg_code());
    }
    if font.bold == Some(true) {
        codes.push(BOLD);
    }
    if let Some(code) = font.underline.and_then(underline_code) {
        codes.push(code);
    }
    if font.italics == Some(true) {
        codes.push(ITALICS);
    }
    codes
}

/// Codes switching the same attributes off, in reverse order.
pub fn font_off_codes(font: &FontStyle) -> Vec<u8> {
    let mut codes = Vec::new();
    if font.italics == Some(true) {
        codes.push(ITALICS_OFF);
    }
    if font.underline.and_then(underline_code).is_some() {
        codes.push(UNDERLINE_OFF);
    }
    if font.bold == Some(true) {
        codes.push(BOLD_OFF);
    }
    if font.bg.is_some() {
        codes.push(BG_DEFAULT);
    }
    if font.fg.is_some() {
        codes.push(FG_DEFAULT);
    }
    codes
}

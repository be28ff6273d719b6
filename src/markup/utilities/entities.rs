//! Character references in markup text and attribute values.
//!
//! Only five references are recognised: `&lt;` `&gt;` `&amp;` `&quot;` `&apos;`. Any other `&`
//! is literal, so hand-written markup like `a & b` still reads as written.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static REFERENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&(lt|gt|amp|quot|apos);").expect("reference pattern is valid"));

/// Replace character references with the characters they stand for.
pub fn unescape(value: &str) -> Cow<'_, str> {
    REFERENCE.replace_all(value, |captures: &Captures<'_>| match &captures[1] {
        "lt" => "<",
        "gt" => ">",
        "amp" => "&",
        "quot" => "\"",
        _ => "'",
    })
}

/// Escape a text run so the lexer reads it back unchanged.
pub fn escape_text(value: &str) -> Cow<'_, str> {
    escape(value, &['&', '<'])
}

/// Escape a value for a double-quoted attribute.
pub fn escape_attribute(value: &str) -> Cow<'_, str> {
    escape(value, &['&', '<', '"'])
}

fn escape<'a>(value: &'a str, special: &[char]) -> Cow<'a, str> {
    if !value.contains(special) {
        return Cow::Borrowed(value);
    }
    let mut escaped = String::with_capacity(value.len() + 8);
    for ch in value.chars() {
        match ch {
            '&' if special.contains(&'&') => escaped.push_str("&amp;"),
            '<' if special.contains(&'<') => escaped.push_str("&lt;"),
            '"' if special.contains(&'"') => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unescape_known_references() {
        assert_eq!(unescape("a &lt; b &amp;&amp; c &gt; d"), "a < b && c > d");
        assert_eq!(unescape("&quot;hi&apos;"), "\"hi'");
    }

    #[test]
    fn test_unknown_references_are_literal() {
        assert_eq!(unescape("fish & chips &nbsp; &#60;"), "fish & chips &nbsp; &#60;");
        assert!(matches!(unescape("plain"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_unescape_is_single_pass() {
        assert_eq!(unescape("&amp;lt;"), "&lt;");
    }

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("a < b & c > \"d\""), "a &lt; b &amp; c > \"d\"");
        assert!(matches!(escape_text("plain"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_escape_attribute() {
        assert_eq!(escape_attribute("\"'<&"), "&quot;'&lt;&amp;");
    }

    #[test]
    fn test_escape_then_unescape_restores() {
        for value in ["&lt;", "a<b", "\"'", "&amp;&", "x & y"] {
            assert_eq!(unescape(&escape_text(value)), value);
            assert_eq!(unescape(&escape_attribute(value)), value);
        }
    }
}

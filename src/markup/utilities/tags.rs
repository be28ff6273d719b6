//! Markup tag rendering shared by the markup handlers and the composer.

use super::entities::escape_attribute;

/// `<tag a="1" b="2">`
pub fn open_tag(tag: &str, attributes: &[(&str, String)]) -> String {
    format!("<{tag}{}>", render_attributes(attributes))
}

/// `<tag a="1"/>`
pub fn self_closing_tag(tag: &str, attributes: &[(&str, String)]) -> String {
    format!("<{tag}{}/>", render_attributes(attributes))
}

/// `</tag>`
pub fn close_tag(tag: &str) -> String {
    format!("</{tag}>")
}

fn render_attributes(attributes: &[(&str, String)]) -> String {
    attributes
        .iter()
        .map(|(name, value)| format!(" {name}={}", quote(value)))
        .collect()
}

fn quote(value: &str) -> String {
    format!("\"{}\"", escape_attribute(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags() {
        let attributes = [("fg", "red".to_string()), ("bold", "true".to_string())];
        assert_eq!(open_tag("h1", &attributes), r#"<h1 fg="red" bold="true">"#);
        assert_eq!(open_tag("bold", &[]), "<bold>");
        assert_eq!(self_closing_tag("br", &[]), "<br/>");
        assert_eq!(close_tag("h1"), "</h1>");
    }

    #[test]
    fn test_attribute_values_are_escaped() {
        assert_eq!(
            open_tag("li", &[("bullet", "\"'".to_string())]),
            r#"<li bullet="&quot;'">"#
        );
    }
}

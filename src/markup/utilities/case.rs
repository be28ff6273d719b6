//! Case conversion for attribute names.

/// Convert `margin-top`, `margin_top` or `MarginTop` to `marginTop`.
///
/// Names that are already camelCase come back unchanged.
pub fn to_camel_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut upper_next = false;
    for ch in name.chars() {
        if ch == '-' || ch == '_' {
            upper_next = !result.is_empty();
            continue;
        }
        if result.is_empty() {
            result.extend(ch.to_lowercase());
        } else if upper_next {
            result.extend(ch.to_uppercase());
        } else {
            result.push(ch);
        }
        upper_next = false;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("marginTop", "marginTop")]
    #[case("margin-top", "marginTop")]
    #[case("margin_bottom", "marginBottom")]
    #[case("MarginLeft", "marginLeft")]
    #[case("fg", "fg")]
    #[case("-bold", "bold")]
    #[case("margin--right", "marginRight")]
    fn test_to_camel_case(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(to_camel_case(input), expected);
    }
}

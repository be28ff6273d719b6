//! Property tests: composer trees survive stringify -> parse -> validate unchanged.

use ansie::markup::composer::*;
use ansie::markup::theme::{Color, FontStyle, ListStyle, SpacingStyle, Style, UnderlineStyle};
use ansie::markup::{compile, parse_ast, Compiler};
use proptest::prelude::*;

fn any_color() -> impl Strategy<Value = Color> {
    prop::sample::select(Color::ALL.to_vec())
}

fn style() -> impl Strategy<Value = Style> {
    (
        proptest::option::of(any_color()),
        proptest::option::of(any::<bool>()),
        proptest::option::of(0u16..4),
        proptest::option::of(0u16..4),
        proptest::option::of("[-*>'\"<& ]{0,3}"),
    )
        .prop_map(|(fg, bold, margin, margin_top, bullet)| {
            Style::default()
                .with_font(FontStyle {
                    fg,
                    bold,
                    ..FontStyle::default()
                })
                .with_spacing(SpacingStyle {
                    margin,
                    margin_top,
                    ..SpacingStyle::default()
                })
                .with_list(ListStyle {
                    bullet,
                    indent: None,
                })
        })
}

fn leaf() -> impl Strategy<Value = ComposerNode> {
    prop_oneof![
        "[a-zA-Z0-9 .,:!<>&;'\"]{0,10}".prop_map(|value: String| text(value)),
        Just(text("&lt;&amp;")),
        Just(br()),
    ]
}

fn build(kind: usize, children: Vec<ComposerNode>, style: Style, fg: Color) -> ComposerNode {
    match kind {
        0 => h1(children).with_style(style),
        1 => h2(children).with_style(style),
        2 => h3(children).with_style(style),
        3 => body(children).with_style(style),
        4 => p(children).with_style(style),
        5 => div(children).with_style(style),
        6 => span(children).with_style(style),
        7 => li(children).with_style(style),
        8 => bold(children),
        9 => italics(children),
        10 => underline(children, UnderlineStyle::Single),
        11 => underline(children, UnderlineStyle::Double),
        12 => color(children).fg(fg),
        13 => list(children),
        _ => bundle(children),
    }
}

fn tree() -> impl Strategy<Value = ComposerNode> {
    leaf().prop_recursive(4, 48, 4, |inner| {
        (
            0usize..15,
            prop::collection::vec(inner, 0..4),
            style(),
            any_color(),
        )
            .prop_map(|(kind, children, style, fg)| build(kind, children, style, fg))
    })
}

proptest! {
    #[test]
    fn markup_parses_back_to_the_same_ast(node in tree()) {
        let markup = node.to_string();
        let parsed = parse_ast(&markup);
        prop_assert!(parsed.is_ok(), "{markup:?} failed: {parsed:?}");
        prop_assert_eq!(parsed.unwrap(), node.to_ast());
    }

    #[test]
    fn markup_format_reproduces_the_markup(node in tree()) {
        let markup = node.to_string();
        prop_assert_eq!(Compiler::new().compile(&node.to_ast(), Format::Markup).unwrap(), markup);
    }

    #[test]
    fn composer_and_markup_compile_alike(node in tree()) {
        let markup = node.to_string();
        prop_assert_eq!(
            node.compile(Format::Ansi).unwrap(),
            compile(&markup, Format::Ansi).unwrap()
        );
    }
}

//! The six concrete end-to-end scenarios, each checked against its exact
//! expected token sequence.

use crate::wikitext::scanner::tokenize;
use crate::wikitext::tokens::{HeadingLevel, Token};

fn text(s: &str) -> Token {
    Token::Text { text: s.to_string() }
}

#[test]
fn scenario_1_simple_template() {
    let tokens = tokenize("I has a template! {{foo|bar|baz|eggs=spam}} See it?");
    assert_eq!(
        tokens,
        vec![
            text("I has a template! "),
            Token::TemplateOpen,
            text("foo"),
            Token::TemplateParamSeparator,
            text("bar"),
            Token::TemplateParamSeparator,
            text("baz"),
            Token::TemplateParamSeparator,
            text("eggs"),
            Token::TemplateParamEquals,
            text("spam"),
            Token::TemplateClose,
            text(" See it?"),
        ]
    );
}

#[test]
fn scenario_2_nested_templates_with_template_valued_key() {
    let tokens = tokenize("{{foo|{{bar}}={{baz|{{spam}}}}}}");
    assert_eq!(
        tokens,
        vec![
            Token::TemplateOpen,
            text("foo"),
            Token::TemplateParamSeparator,
            Token::TemplateOpen,
            text("bar"),
            Token::TemplateClose,
            Token::TemplateParamEquals,
            Token::TemplateOpen,
            text("baz"),
            Token::TemplateParamSeparator,
            Token::TemplateOpen,
            text("spam"),
            Token::TemplateClose,
            Token::TemplateClose,
            Token::TemplateClose,
        ]
    );
}

#[test]
fn scenario_3_heading() {
    let tokens = tokenize("==Heading==\ntext");
    assert_eq!(
        tokens,
        vec![
            Token::HeadingStart {
                level: HeadingLevel::try_from(2).unwrap()
            },
            text("Heading"),
            Token::HeadingEnd,
            text("\ntext"),
        ]
    );
}

#[test]
fn scenario_4_wikilink_then_broken_wikilink() {
    let tokens = tokenize("[[foo|bar]] and [[broken");
    assert_eq!(
        tokens,
        vec![
            Token::WikilinkOpen,
            text("foo"),
            Token::WikilinkSeparator,
            text("bar"),
            Token::WikilinkClose,
            text(" and [[broken"),
        ]
    );
}

#[test]
fn scenario_5_entities_and_unknown_entity() {
    let tokens = tokenize("&amp; &#65; &#x1F600; &bogus;");
    assert_eq!(
        tokens,
        vec![
            Token::HTMLEntityStart,
            text("amp"),
            Token::HTMLEntityEnd,
            text(" "),
            Token::HTMLEntityStart,
            Token::HTMLEntityNumeric,
            text("65"),
            Token::HTMLEntityEnd,
            text(" "),
            Token::HTMLEntityStart,
            Token::HTMLEntityNumeric,
            Token::HTMLEntityHex { char: 'x' },
            text("1F600"),
            Token::HTMLEntityEnd,
            text(" &bogus;"),
        ]
    );
}

#[test]
fn scenario_6_tag_with_quoted_attribute() {
    let tokens = tokenize(r#"<ref name="foo">body</ref>"#);
    assert_eq!(
        tokens,
        vec![
            Token::TagOpenOpen { showtag: true },
            text("ref"),
            Token::TagAttrStart {
                pad_first: " ".to_string(),
                pad_before_eq: String::new(),
                pad_after_eq: String::new(),
            },
            text("name"),
            Token::TagAttrEquals,
            Token::TagAttrQuote,
            text("foo"),
            Token::TagCloseOpen {
                padding: String::new()
            },
            text("body"),
            Token::TagOpenClose,
            text("ref"),
            Token::TagCloseClose,
        ]
    );
}

#[test]
fn scenario_6_variant_mismatched_case_close_tag_still_matches() {
    let tokens = tokenize("<ref>body</REF>");
    assert!(matches!(tokens.last(), Some(Token::TagCloseClose)));
    assert!(
        tokens
            .iter()
            .any(|t| matches!(t, Token::TagOpenClose))
    );
}

#[test]
fn scenario_6_variant_nowiki_suppresses_nested_markup() {
    let tokens = tokenize("<nowiki>{{not a template}}</nowiki>");
    assert!(
        tokens
            .iter()
            .all(|t| !matches!(t, Token::TemplateOpen | Token::TemplateClose)),
        "nowiki body must not contain template tokens: {tokens:?}"
    );
    assert!(tokens.iter().any(|t| matches!(
        t,
        Token::Text { text } if text.contains("{{not a template}}")
    )));
}

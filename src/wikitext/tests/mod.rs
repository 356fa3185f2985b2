//! Integration tests: the concrete scenarios and property-style laws from
//! the tokenizer's design notes, run over a fixed corpus of fixtures rather
//! than a property-testing crate.

mod laws;
mod scenarios;

use super::Token;
use super::scanner::tokenize;

/// Corpus of wikitext fixtures shared by [`laws`] and exercised individually
/// by [`scenarios`]; kept in one place so a law failing on a fixture points
/// straight at the scenario that introduced it.
pub(super) const CORPUS: &[&str] = &[
    "I has a template! {{foo|bar|baz|eggs=spam}} See it?",
    "{{foo|{{bar}}={{baz|{{spam}}}}}}",
    "==Heading==\ntext",
    "[[foo|bar]] and [[broken",
    "&amp; &#65; &#x1F600; &bogus;",
    r#"<ref name="foo">body</ref>"#,
    "<nowiki>{{not a template}}</nowiki>",
    "plain text with no markup at all",
    "",
];

/// Concatenates the literal representation of a token stream back to
/// wikitext, for the text-preservation law.
///
/// [`Token::TagAttrQuote`] fires once, at the start of a quoted value, and
/// marks the whole value as quoted rather than encoding each quote mark
/// individually (the tokenizer stops at the token stream; it's the
/// consumer's job to pair the mark with the value it wraps). This mirrors
/// that: the closing `"` is inserted right before whatever structural token
/// ends the value.
pub(super) fn render(tokens: &[Token]) -> String {
    let mut out = String::new();
    let mut quote_pending_close = false;
    // Deferred until the `=` and the value are actually reached, since
    // `TagAttrStart` reports both at once but they sit on either side of
    // `TagAttrEquals` in the source text.
    let mut pad_before_eq_pending: Option<String> = None;
    let mut pad_after_eq_pending: Option<String> = None;
    for token in tokens {
        if quote_pending_close && !token.is_text() {
            out.push('"');
            quote_pending_close = false;
        }
        match token {
            Token::Text { text } => out.push_str(text),
            Token::TemplateOpen => out.push_str("{{"),
            Token::TemplateParamSeparator => out.push('|'),
            Token::TemplateParamEquals => out.push('='),
            Token::TemplateClose => out.push_str("}}"),
            Token::ArgumentOpen => out.push_str("{{{"),
            Token::ArgumentSeparator => out.push('|'),
            Token::ArgumentClose => out.push_str("}}}"),
            Token::WikilinkOpen => out.push_str("[["),
            Token::WikilinkSeparator => out.push('|'),
            Token::WikilinkClose => out.push_str("]]"),
            Token::HeadingStart { level } => out.push_str(&"=".repeat(level.get() as usize)),
            Token::HeadingEnd => {}
            Token::HTMLEntityStart => out.push('&'),
            Token::HTMLEntityNumeric => out.push('#'),
            Token::HTMLEntityHex { char } => out.push(*char),
            Token::HTMLEntityEnd => out.push(';'),
            Token::CommentStart => out.push_str("<!--"),
            Token::CommentEnd => out.push_str("-->"),
            Token::TagOpenOpen { .. } => out.push('<'),
            Token::TagAttrStart {
                pad_first,
                pad_before_eq,
                pad_after_eq,
            } => {
                if let Some(pad) = pad_before_eq_pending.take() {
                    out.push_str(&pad);
                }
                if let Some(pad) = pad_after_eq_pending.take() {
                    out.push_str(&pad);
                }
                out.push_str(pad_first);
                pad_before_eq_pending = Some(pad_before_eq.clone());
                pad_after_eq_pending = Some(pad_after_eq.clone());
            }
            Token::TagAttrEquals => {
                if let Some(pad) = pad_before_eq_pending.take() {
                    out.push_str(&pad);
                }
                out.push('=');
                if let Some(pad) = pad_after_eq_pending.take() {
                    out.push_str(&pad);
                }
            }
            Token::TagAttrQuote => {
                out.push('"');
                quote_pending_close = true;
            }
            Token::TagCloseOpen { padding } => {
                out.push_str(padding);
                out.push('>');
            }
            Token::TagCloseSelfclose { padding } => {
                out.push_str(padding);
                out.push_str("/>");
            }
            Token::TagOpenClose => out.push_str("</"),
            Token::TagCloseClose => out.push('>'),
        }
    }
    if let Some(pad) = pad_before_eq_pending.take() {
        out.push_str(&pad);
    }
    if let Some(pad) = pad_after_eq_pending.take() {
        out.push_str(&pad);
    }
    if quote_pending_close {
        out.push('"');
    }
    out
}

#[test]
fn heading_end_closes_with_matching_end_token() {
    let tokens = tokenize("==x==");
    assert!(matches!(tokens.first(), Some(Token::HeadingStart { .. })));
    assert!(matches!(tokens.last(), Some(Token::HeadingEnd)));
}

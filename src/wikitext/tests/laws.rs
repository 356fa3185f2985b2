//! Property-style checks run over the fixed [`super::CORPUS`] rather than a
//! property-testing crate.

use super::{CORPUS, render};
use crate::wikitext::scanner::{MAX_CYCLES, MAX_DEPTH};
use crate::wikitext::scanner::tokenize;
use crate::wikitext::tokens::Token;

#[test]
fn text_preservation() {
    for &input in CORPUS {
        let tokens = tokenize(input);
        assert_eq!(render(&tokens), input, "input: {input:?}");
    }
}

#[test]
fn no_adjacent_text() {
    for &input in CORPUS {
        let tokens = tokenize(input);
        for pair in tokens.windows(2) {
            assert!(
                !(pair[0].is_text() && pair[1].is_text()),
                "adjacent Text tokens in {input:?}: {tokens:?}"
            );
        }
    }
}

#[test]
fn balanced_pairs() {
    for &input in CORPUS {
        let tokens = tokenize(input);
        let mut depth = 0i32;
        for token in &tokens {
            match token {
                Token::TemplateOpen
                | Token::ArgumentOpen
                | Token::WikilinkOpen
                | Token::HeadingStart { .. }
                | Token::HTMLEntityStart
                | Token::CommentStart
                | Token::TagOpenOpen { .. } => depth += 1,
                Token::TemplateClose
                | Token::ArgumentClose
                | Token::WikilinkClose
                | Token::HeadingEnd
                | Token::HTMLEntityEnd
                | Token::CommentEnd
                | Token::TagCloseClose
                | Token::TagCloseSelfclose { .. } => depth -= 1,
                _ => {}
            }
            assert!(depth >= 0, "close without matching open in {input:?}");
        }
        assert_eq!(depth, 0, "unbalanced pairs in {input:?}: {tokens:?}");
    }
}

#[test]
fn bounded_resources() {
    // The caps are enforced inside the scanner; this just exercises inputs
    // that are likely to push close to them without panicking or looping.
    let pathological = "{{".repeat(10_000);
    let tokens = tokenize(&pathological);
    assert!(!tokens.is_empty());

    let nested_headings = "=".repeat(500);
    let tokens = tokenize(&nested_headings);
    assert!(!tokens.is_empty());

    assert!(MAX_DEPTH <= 40);
    assert!(MAX_CYCLES <= 100_000);
}

#[test]
fn idempotence_on_text_only_output() {
    for &input in CORPUS {
        let tokens = tokenize(input);
        if tokens.iter().all(Token::is_text) {
            let rendered = render(&tokens);
            assert_eq!(tokenize(&rendered), tokens);
        }
    }
}

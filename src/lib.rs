//! A speculative, backtracking tokenizer for MediaWiki-flavored wikitext.
//!
//! Re-exports [`tokenize`] and the [`Token`] alphabet it produces.
#![warn(
    clippy::pedantic,
    clippy::missing_docs_in_private_items,
    missing_docs,
    rust_2018_idioms
)]

mod wikitext;

pub use wikitext::{HeadingLevel, HeadingLevelError, Token, tokenize};

//! A speculative, backtracking tokenizer for MediaWiki-flavored wikitext.
//!
//! [`tokenize`] turns a wikitext string into a flat [`Token`] stream: a
//! sequence of open/close marker pairs and literal text runs, with no
//! syntax tree built in between. Consumers that want a tree (or want to
//! render, strip, or otherwise transform the wikitext) build on top of this
//! stream; this crate's job ends at tokenization.

mod contexts;
mod entities;
mod scanner;
mod tag_defs;
#[cfg(test)]
mod tests;
mod tokens;

pub use scanner::tokenize;
pub use tokens::{HeadingLevel, HeadingLevelError, Token};

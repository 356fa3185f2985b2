//! Section headings, `=Title=` through `======Title======`.
//!
//! A run of `=` at the start of a line is ambiguous until its matching
//! close is found: `==x=` is a level-1 heading containing the literal text
//! `=x`, not a malformed level-2 heading. [`Scanner::handle_heading_end`]
//! resolves this by recursively trying to parse another, better closure
//! from the current one before settling for the level the opening run
//! supports.

use super::Scanner;
use crate::wikitext::contexts::Context;
use crate::wikitext::tokens::{HeadingLevel, Token};

impl<'a> Scanner<'a> {
    /// Parses a section heading at the head, assuming the global heading
    /// flag isn't already set (checked by the caller).
    pub(crate) fn parse_heading(&mut self) {
        self.globals.heading = true;
        let reset = self.head;
        self.head += 1;
        let mut best: usize = 1;
        while self.read(0) == "=" {
            best += 1;
            self.head += 1;
        }
        let context = Context::heading_level((best - 1).min(5) as u8 + 1);

        match self.parse(context, true) {
            Err(_) => {
                self.head = reset + best - 1;
                self.write_text(&"=".repeat(best));
            }
            Ok(title) => {
                let level = self
                    .heading_level_result
                    .take()
                    .expect("a successful heading parse always resolves a level");
                let token_level = HeadingLevel::try_from(level)
                    .expect("resolved heading levels are always in 1..=6");
                self.write(Token::HeadingStart { level: token_level });
                if (level as usize) < best {
                    self.write_text(&"=".repeat(best - level as usize));
                }
                self.write_all(title);
                self.write(Token::HeadingEnd);
            }
        }

        self.globals.heading = false;
    }

    /// Handles the `=` that might end a heading, trying to extend the
    /// closure with another heading first, since the rightmost valid
    /// closure always wins (`===x==` closes the inner `==` first only if
    /// nothing longer matches).
    pub(crate) fn handle_heading_end(&mut self) -> (Vec<Token>, u8) {
        let reset = self.head;
        self.head += 1;
        let mut best: usize = 1;
        while self.read(0) == "=" {
            best += 1;
            self.head += 1;
        }
        let current = self
            .context()
            .decode_heading_level()
            .expect("heading context always encodes a level");
        let level = current.min(best.min(6) as u8);

        let context = self.context();
        match self.parse(context, true) {
            Err(_) => {
                if (level as usize) < best {
                    self.write_text(&"=".repeat(best - level as usize));
                }
                self.head = reset + best - 1;
                (self.pop(false), level)
            }
            Ok(after) => {
                self.write_text(&"=".repeat(best));
                self.write_all(after);
                let after_level = self
                    .heading_level_result
                    .take()
                    .expect("a nested heading closure always resolves a level");
                (self.pop(false), after_level)
            }
        }
    }
}

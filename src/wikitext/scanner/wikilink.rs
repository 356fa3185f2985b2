//! Wikilinks, `[[title|text]]`.

use super::Scanner;
use crate::wikitext::contexts::Context;
use crate::wikitext::tokens::Token;

impl<'a> Scanner<'a> {
    /// Parses a wikilink at the head, assuming `[[` hasn't been consumed
    /// yet. Falls back to writing the brackets as literal text on failure.
    pub(crate) fn parse_wikilink(&mut self) {
        self.head += 2;
        let reset = self.head - 1;
        match self.parse(Context::WIKILINK_TITLE, true) {
            Err(_) => {
                self.head = reset;
                self.write_text("[[");
            }
            Ok(wikilink) => {
                if self.context().contains(Context::FAIL_NEXT) {
                    self.context_toggle(Context::FAIL_NEXT);
                }
                self.write(Token::WikilinkOpen);
                self.write_all(wikilink);
                self.write(Token::WikilinkClose);
            }
        }
    }

    /// Handles the `|` that separates a wikilink's title from its display
    /// text.
    pub(crate) fn handle_wikilink_separator(&mut self) {
        self.context_toggle(Context::WIKILINK_TITLE);
        self.context_insert(Context::WIKILINK_TEXT);
        self.write(Token::WikilinkSeparator);
    }

    /// Handles the `]]` that ends a wikilink.
    pub(crate) fn handle_wikilink_end(&mut self) -> Vec<Token> {
        self.head += 1;
        self.pop(false)
    }
}

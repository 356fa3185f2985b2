//! The parts of an argument placeholder (`{{{name|default}}}`) past its
//! opening, which [`super::template`] shares with plain templates.

use super::Scanner;
use crate::wikitext::contexts::Context;
use crate::wikitext::tokens::Token;

impl<'a> Scanner<'a> {
    /// Handles the `|` that separates an argument's name from its default.
    pub(crate) fn handle_argument_separator(&mut self) {
        self.context_toggle(Context::ARGUMENT_NAME);
        self.context_insert(Context::ARGUMENT_DEFAULT);
        self.write(Token::ArgumentSeparator);
    }

    /// Handles the `}}}` that ends an argument placeholder.
    pub(crate) fn handle_argument_end(&mut self) -> Vec<Token> {
        self.head += 2;
        self.pop(false)
    }
}

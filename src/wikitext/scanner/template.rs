//! Templates (`{{name|key=value}}`) and the argument placeholders
//! (`{{{name|default}}}`) that share their opening braces.
//!
//! Which one a run of `{` actually is isn't known until the matching close
//! is found or the route fails, so [`Scanner::parse_template_or_argument`]
//! peels off two or three braces at a time and retries as the other
//! construct before giving up and writing the braces back as literal text.

use super::{Route, Scanner};
use crate::wikitext::contexts::Context;
use crate::wikitext::tokens::Token;

impl<'a> Scanner<'a> {
    /// Parses a run of two or more opening braces as templates and/or
    /// argument placeholders, as many as the brace count supports.
    pub(crate) fn parse_template_or_argument(&mut self) -> Route<()> {
        self.head += 2;
        let mut braces: i32 = 2;
        while self.read(0) == "{" {
            self.head += 1;
            braces += 1;
        }
        self.push(Context::empty());

        while braces > 0 {
            if braces == 1 {
                self.write_text_then_stack("{");
                return Ok(());
            }
            if braces == 2 {
                if self.parse_template().is_err() {
                    self.write_text_then_stack("{{");
                    return Ok(());
                }
                break;
            }
            if self.parse_argument().is_ok() {
                braces -= 3;
            } else if self.parse_template().is_ok() {
                braces -= 2;
            } else {
                self.write_text_then_stack(&"{".repeat(braces as usize));
                return Ok(());
            }
            if braces > 0 {
                self.head += 1;
            }
        }

        let popped = self.pop(false);
        self.write_all(popped);
        if self.context().contains(Context::FAIL_NEXT) {
            self.context_toggle(Context::FAIL_NEXT);
        }
        Ok(())
    }

    /// Parses a template, assuming its opening `{{` was already consumed by
    /// [`Self::parse_template_or_argument`]. Restores the head on failure.
    fn parse_template(&mut self) -> Route<()> {
        let reset = self.head;
        let template = self.parse(Context::TEMPLATE_NAME, true).inspect_err(|_| {
            self.head = reset;
        })?;
        self.write_first(Token::TemplateOpen);
        self.write_all(template);
        self.write(Token::TemplateClose);
        Ok(())
    }

    /// Parses an argument placeholder, assuming its opening `{{{` was
    /// already consumed by [`Self::parse_template_or_argument`].
    fn parse_argument(&mut self) -> Route<()> {
        let reset = self.head;
        let argument = self.parse(Context::ARGUMENT_NAME, true).inspect_err(|_| {
            self.head = reset;
        })?;
        self.write_first(Token::ArgumentOpen);
        self.write_all(argument);
        self.write(Token::ArgumentClose);
        Ok(())
    }

    /// Handles a `|` inside a template: either the first one, ending the
    /// name, or a later one, ending the previous parameter's value.
    pub(crate) fn handle_template_param(&mut self) {
        if self.context().contains(Context::TEMPLATE_NAME) {
            self.context_toggle(Context::TEMPLATE_NAME);
        } else if self.context().contains(Context::TEMPLATE_PARAM_VALUE) {
            self.context_toggle(Context::TEMPLATE_PARAM_VALUE);
        } else if self.context().contains(Context::TEMPLATE_PARAM_KEY) {
            let popped = self.pop(true);
            self.write_all(popped);
        }
        self.context_insert(Context::TEMPLATE_PARAM_KEY);
        self.write(Token::TemplateParamSeparator);
        self.push(self.context());
    }

    /// Handles the `=` that ends a template parameter's key.
    pub(crate) fn handle_template_param_value(&mut self) {
        let popped = self.pop(true);
        self.write_all(popped);
        self.context_toggle(Context::TEMPLATE_PARAM_KEY);
        self.context_insert(Context::TEMPLATE_PARAM_VALUE);
        self.write(Token::TemplateParamEquals);
    }

    /// Handles the `}}` that ends a template.
    pub(crate) fn handle_template_end(&mut self) -> Vec<Token> {
        if self.context().contains(Context::TEMPLATE_PARAM_KEY) {
            let popped = self.pop(true);
            self.write_all(popped);
        }
        self.head += 1;
        self.pop(false)
    }
}

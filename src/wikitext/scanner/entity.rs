//! HTML character references: named (`&amp;`), decimal (`&#38;`), and hex
//! (`&#x26;`).

use super::{Route, Scanner};
use crate::wikitext::contexts::Context;
use crate::wikitext::entities::is_named_entity;
use crate::wikitext::tokens::Token;

impl<'a> Scanner<'a> {
    /// Parses an HTML entity at the head. Falls back to writing the `&` as
    /// literal text if the reference turns out not to be well-formed.
    pub(crate) fn parse_entity(&mut self) {
        let reset = self.head;
        self.push(Context::empty());
        match self.really_parse_entity() {
            Err(_) => {
                self.head = reset;
                let text = self.read(0).text().to_string();
                self.write_text(&text);
            }
            Ok(()) => {
                let popped = self.pop(false);
                self.write_all(popped);
            }
        }
    }

    fn really_parse_entity(&mut self) -> Route<()> {
        self.write(Token::HTMLEntityStart);
        self.head += 1;

        let mut this = self.read_strict(0)?.text();
        let numeric;
        let hexadecimal;
        if this == "#" {
            numeric = true;
            self.write(Token::HTMLEntityNumeric);
            self.head += 1;
            this = self.read_strict(0)?.text();
            let first = match this.chars().next() {
                Some(c) => c,
                None => return Err(self.fail_route()),
            };
            if first.to_ascii_lowercase() == 'x' {
                hexadecimal = true;
                self.write(Token::HTMLEntityHex { char: first });
                this = &this[first.len_utf8()..];
                if this.is_empty() {
                    return Err(self.fail_route());
                }
            } else {
                hexadecimal = false;
            }
        } else {
            numeric = false;
            hexadecimal = false;
        }

        let is_valid = if hexadecimal {
            this.chars().all(|c| c.is_ascii_hexdigit())
        } else if numeric {
            this.chars().all(|c| c.is_ascii_digit())
        } else {
            this.chars().all(|c| c.is_ascii_alphanumeric())
        };
        if !is_valid {
            return Err(self.fail_route());
        }

        self.head += 1;
        if self.read(0) != ";" {
            return Err(self.fail_route());
        }
        if numeric {
            let parsed = if hexadecimal {
                u32::from_str_radix(this, 16)
            } else {
                this.parse::<u32>()
            };
            match parsed {
                Ok(code_point) if (1..=0x0010_FFFF).contains(&code_point) => {}
                _ => return Err(self.fail_route()),
            }
        } else if !is_named_entity(this) {
            return Err(self.fail_route());
        }

        self.write(Token::Text { text: this.to_string() });
        self.write(Token::HTMLEntityEnd);
        Ok(())
    }
}

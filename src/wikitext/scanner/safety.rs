//! Guard-bit verification for the characters the main dispatch loop is about
//! to treat as markers.
//!
//! Some contexts can't simply fail the moment a forbidden character shows
//! up — a template name tolerates a single newline before giving up, an
//! unquoted tag attribute has to see one more `{` or `}` before it knows
//! whether it's looking at a nested template. [`Scanner::verify_safe`] is
//! where those one-character-of-lookahead decisions live, arming and
//! disarming the transient `FAIL_*` bits as it goes.

use super::Scanner;
use super::buffer::Segment;
use crate::wikitext::contexts::Context;

impl<'a> Scanner<'a> {
    /// Checks `this` against the current frame's guard bits, possibly
    /// arming further guards for the characters that follow. Returns false
    /// if the route should be failed.
    pub(crate) fn verify_safe(&mut self, this: Segment<'a>) -> bool {
        let context = self.context();

        if context.contains(Context::FAIL_NEXT) {
            return false;
        }

        if context.contains(Context::WIKILINK_TITLE) {
            if this == "]" || this == "{" {
                self.context_insert(Context::FAIL_NEXT);
            } else if this == "\n" || this == "[" || this == "}" {
                return false;
            }
            return true;
        }

        if context.contains(Context::TEMPLATE_NAME) {
            if this == "{" || this == "}" || this == "[" {
                self.context_insert(Context::FAIL_NEXT);
                return true;
            }
            if this == "]" {
                return false;
            }
            if this == "|" {
                return true;
            }
            if context.contains(Context::HAS_TEXT) {
                if context.contains(Context::FAIL_ON_TEXT) {
                    if matches!(this, Segment::End) || !is_space(this) {
                        return false;
                    }
                } else if this == "\n" {
                    self.context_insert(Context::FAIL_ON_TEXT);
                }
            } else if matches!(this, Segment::End) || !is_space(this) {
                self.context_insert(Context::HAS_TEXT);
            }
            return true;
        }

        if context.contains(Context::TAG_CLOSE) {
            return this != "<";
        }

        if context.contains(Context::FAIL_ON_EQUALS) {
            if this == "=" {
                return false;
            }
        } else if context.contains(Context::FAIL_ON_LBRACE) {
            if this == "{" || (self.read(-1) == "{" && self.read(-2) == "{") {
                if context.intersects(Context::TEMPLATE) {
                    self.context_insert(Context::FAIL_ON_EQUALS);
                } else {
                    self.context_insert(Context::FAIL_NEXT);
                }
                return true;
            }
            self.context_toggle(Context::FAIL_ON_LBRACE);
        } else if context.contains(Context::FAIL_ON_RBRACE) {
            if this == "}" {
                if context.intersects(Context::TEMPLATE) {
                    self.context_insert(Context::FAIL_ON_EQUALS);
                } else {
                    self.context_insert(Context::FAIL_NEXT);
                }
                return true;
            }
            self.context_toggle(Context::FAIL_ON_RBRACE);
        } else if this == "{" {
            self.context_insert(Context::FAIL_ON_LBRACE);
        } else if this == "}" {
            self.context_insert(Context::FAIL_ON_RBRACE);
        }
        true
    }
}

/// Whether a segment is a non-empty run of whitespace.
fn is_space(this: Segment) -> bool {
    matches!(this, Segment::Str(s) if !s.is_empty() && s.chars().all(char::is_whitespace))
}

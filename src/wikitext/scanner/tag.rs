//! HTML comments (`<!--...-->`) and tags (`<ref name="x">...</ref>`).
//!
//! The tag open scanner is the most stateful part of the tokenizer: it has
//! to track, chunk by chunk, whether it's reading the tag name, waiting for
//! an attribute, inside an attribute name or value, inside a quoted value,
//! or waiting for the closing `>` — and to do it without a dedicated
//! lexer pass, since an attribute value can itself contain a template or
//! another tag. [`TagCx`] is that sub-state, kept separate from the main
//! [`Context`] bitmask because it only makes sense while inside a single
//! tag's opening.

use super::buffer::Segment;
use super::{MARKER_CHARS, Route, Scanner};
use bitflags::bitflags;
use crate::wikitext::contexts::Context;
use crate::wikitext::tag_defs::is_parsable;
use crate::wikitext::tokens::Token;

bitflags! {
    /// Sub-state of an HTML tag's opening, tracked alongside the main
    /// [`Context::TAG_OPEN`] frame.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    struct TagCx: u32 {
        /// Reading the tag name.
        const NAME = 1 << 0;
        /// Just saw whitespace; ready for another attribute.
        const ATTR_READY = 1 << 1;
        /// Reading an attribute's name.
        const ATTR_NAME = 1 << 2;
        /// Reading an attribute's value.
        const ATTR_VALUE = 1 << 3;
        /// The attribute value is (or was) quoted.
        const QUOTED = 1 << 4;
        /// Waiting for whitespace before the next attribute, or `>`/`/>`.
        const NEED_SPACE = 1 << 5;
        /// Saw whitespace after an attribute name; still need `=`.
        const NEED_EQUALS = 1 << 6;
        /// Just saw `=`; next non-space chunk decides quoted vs. bare.
        const NEED_QUOTE = 1 << 7;

        /// Either part of an attribute.
        const ATTR = Self::ATTR_NAME.bits() | Self::ATTR_VALUE.bits();
    }
}

/// Pending state for the tag currently being opened.
struct TagOpenData {
    context: TagCx,
    /// Whitespace collected between tokens, flushed into a
    /// [`Token::TagAttrStart`] or [`Token::TagCloseOpen`]/
    /// [`Token::TagCloseSelfclose`] once its slot is known.
    padding_buffer: Vec<String>,
    /// Head position to rewind to if a quote turns out not to close.
    reset: usize,
    /// Set once a `"` has been rejected as a close quote, so the same
    /// position isn't retried.
    ignore_quote: bool,
}

impl TagOpenData {
    fn new() -> Self {
        Self {
            context: TagCx::NAME,
            padding_buffer: Vec::new(),
            reset: 0,
            ignore_quote: false,
        }
    }
}

impl<'a> Scanner<'a> {
    /// Parses an HTML comment at the head, assuming `<!--` hasn't been
    /// consumed yet.
    pub(crate) fn parse_comment(&mut self) {
        self.head += 4;
        let reset = self.head - 1;
        match self.parse(Context::COMMENT, true) {
            Err(_) => {
                self.head = reset;
                self.write_text("<!--");
            }
            Ok(comment) => {
                self.write(Token::CommentStart);
                self.write_all(comment);
                self.write(Token::CommentEnd);
                self.head += 2;
            }
        }
    }

    /// Parses an HTML tag at the head, assuming `<` hasn't been consumed
    /// yet. Falls back to writing `<` as literal text on failure.
    pub(crate) fn parse_tag(&mut self) {
        let reset = self.head;
        self.head += 1;
        match self.really_parse_tag() {
            Err(_) => {
                self.head = reset;
                self.write_text("<");
            }
            Ok(toks) => {
                self.write_all(toks);
            }
        }
    }

    fn really_parse_tag(&mut self) -> Route<Vec<Token>> {
        let mut data = TagOpenData::new();
        self.push(Context::TAG_OPEN);
        self.write(Token::TagOpenOpen { showtag: true });

        loop {
            let this = self.read(0);
            let next = self.read(1);
            let can_exit = !data.context.intersects(TagCx::QUOTED | TagCx::NAME)
                || data.context.contains(TagCx::NEED_SPACE);

            if !this.is_marker() {
                for chunk in split_tag_chunk(this.text()) {
                    self.handle_tag_chunk(&mut data, chunk)?;
                }
            } else if matches!(this, Segment::End) {
                if self.context().contains(Context::TAG_ATTR) {
                    if data.context.contains(TagCx::QUOTED) {
                        self.pop(false);
                    }
                    self.pop(false);
                }
                return Err(self.fail_route());
            } else if this == ">" && can_exit {
                if data.context.intersects(TagCx::ATTR) {
                    self.push_tag_buffer(&mut data);
                }
                let padding = data.padding_buffer.first().cloned().unwrap_or_default();
                self.write(Token::TagCloseOpen { padding });
                self.set_context(Context::TAG_BODY);
                self.head += 1;
                let tag_name = self.opened_tag_name();
                if is_parsable(&tag_name) {
                    return self.parse(Context::empty(), false);
                }
                return self.parse_tag_body_raw(&tag_name);
            } else if this == "/" && next == ">" && can_exit {
                if data.context.intersects(TagCx::ATTR) {
                    self.push_tag_buffer(&mut data);
                }
                let padding = data.padding_buffer.first().cloned().unwrap_or_default();
                self.write(Token::TagCloseSelfclose { padding });
                self.head += 1;
                return Ok(self.pop(false));
            } else {
                for chunk in split_tag_chunk(this.text()) {
                    self.handle_tag_chunk(&mut data, chunk)?;
                }
            }

            self.head += 1;
        }
    }

    /// Handles one chunk of a tag's opening: a whitespace character, a `"`
    /// or `\`, or a run of plain text between them.
    fn handle_tag_chunk(&mut self, data: &mut TagOpenData, chunk: &str) -> Route<()> {
        if chunk.is_empty() {
            return Ok(());
        }

        if data.context.contains(TagCx::NAME) {
            if is_marker_chunk(chunk) || is_space(chunk) {
                return Err(self.fail_route());
            }
            self.write_text(chunk);
            data.context = TagCx::NEED_SPACE;
        } else if data.context.contains(TagCx::NEED_SPACE) {
            if is_space(chunk) {
                if data.context.contains(TagCx::ATTR_VALUE) {
                    self.push_tag_buffer(data);
                }
                data.padding_buffer.push(chunk.to_string());
                data.context = TagCx::ATTR_READY;
            } else if data.context.contains(TagCx::QUOTED) {
                data.context.remove(TagCx::NEED_SPACE | TagCx::QUOTED);
                data.ignore_quote = true;
                self.pop(false);
                self.head = data.reset;
            } else {
                return Err(self.fail_route());
            }
        } else if data.context.contains(TagCx::ATTR_READY) {
            if is_space(chunk) {
                data.padding_buffer.push(chunk.to_string());
            } else {
                data.context = TagCx::ATTR_NAME;
                self.push(Context::TAG_ATTR);
                self.parse_tag_chunk(chunk);
            }
        } else if data.context.contains(TagCx::ATTR_NAME) {
            if is_space(chunk) {
                data.padding_buffer.push(chunk.to_string());
                data.context.insert(TagCx::NEED_EQUALS);
            } else if chunk == "=" {
                if !data.context.contains(TagCx::NEED_EQUALS) {
                    data.padding_buffer.push(String::new());
                }
                data.context = TagCx::ATTR_VALUE | TagCx::NEED_QUOTE;
                self.write(Token::TagAttrEquals);
            } else {
                if data.context.contains(TagCx::NEED_EQUALS) {
                    self.push_tag_buffer(data);
                    data.padding_buffer.push(String::new());
                    data.context = TagCx::ATTR_NAME;
                    self.push(Context::TAG_ATTR);
                }
                self.parse_tag_chunk(chunk);
            }
        } else if data.context.contains(TagCx::ATTR_VALUE) {
            if data.context.contains(TagCx::NEED_QUOTE) {
                if chunk == "\"" && !data.ignore_quote {
                    data.context.remove(TagCx::NEED_QUOTE);
                    data.context.insert(TagCx::QUOTED);
                    self.push(self.context());
                    data.reset = self.head;
                } else if is_space(chunk) {
                    data.padding_buffer.push(chunk.to_string());
                } else {
                    data.context.remove(TagCx::NEED_QUOTE);
                    self.parse_tag_chunk(chunk);
                }
            } else if data.context.contains(TagCx::QUOTED) {
                if chunk == "\"" {
                    data.context.insert(TagCx::NEED_SPACE);
                } else {
                    self.parse_tag_chunk(chunk);
                }
            } else if is_space(chunk) {
                self.push_tag_buffer(data);
                data.padding_buffer.push(chunk.to_string());
                data.context = TagCx::ATTR_READY;
            } else {
                self.parse_tag_chunk(chunk);
            }
        }

        Ok(())
    }

    /// Parses a chunk of an attribute name or value that might itself open
    /// a nested template, wikilink, or tag.
    fn parse_tag_chunk(&mut self, chunk: &str) {
        let next = self.read(1);
        if !self.can_recurse() || !is_marker_chunk(chunk) {
            self.write_text(chunk);
        } else if chunk == "{" && next == "{" {
            let _ = self.parse_template_or_argument();
        } else if chunk == "[" && next == "[" {
            self.parse_wikilink();
        } else if chunk == "<" {
            self.parse_tag();
        } else {
            self.write_text(chunk);
        }
    }

    /// Flushes the pending attribute (name, `=`, quote, value, and
    /// collected padding) into a [`Token::TagAttrStart`].
    fn push_tag_buffer(&mut self, data: &mut TagOpenData) {
        if data.context.contains(TagCx::QUOTED) {
            self.write_first(Token::TagAttrQuote);
            let popped = self.pop(false);
            self.write_all(popped);
        }
        let buf = &mut data.padding_buffer;
        while buf.len() < 3 {
            buf.push(String::new());
        }
        let pad_after_eq = buf.pop().unwrap();
        let pad_before_eq = buf.pop().unwrap();
        let pad_first = buf.pop().unwrap();
        self.write_first(Token::TagAttrStart {
            pad_first,
            pad_before_eq,
            pad_after_eq,
        });
        let popped = self.pop(false);
        self.write_all(popped);
        data.padding_buffer.clear();
        data.ignore_quote = false;
    }

    /// The lowercased, trailing-whitespace-trimmed name of the tag whose
    /// opening this frame holds (the `Text` token right after its
    /// `TagOpenOpen`).
    fn opened_tag_name(&self) -> String {
        self.stack
            .last()
            .and_then(|frame| frame.tokens.get(1))
            .and_then(Token::as_text)
            .map(strip_tag_name)
            .unwrap_or_default()
    }

    /// Scans a non-parsable tag's body (`<nowiki>`, `<pre>`, ...) as opaque
    /// text, recognizing no nested markup, until the literal closing tag
    /// for `tag_name` (case-insensitive).
    fn parse_tag_body_raw(&mut self, tag_name: &str) -> Route<Vec<Token>> {
        loop {
            let this = self.read(0);
            if matches!(this, Segment::End) {
                return Err(self.fail_route());
            }
            if this == "<" && self.read(1) == "/" {
                if let Some((name_text, count)) = self.match_closing_tag(tag_name) {
                    self.write(Token::TagOpenClose);
                    self.head += 2;
                    self.write_text(&name_text);
                    self.head += count;
                    self.write(Token::TagCloseClose);
                    self.head += 1;
                    return Ok(self.pop(false));
                }
            }
            self.write_text(this.text());
            self.head += 1;
        }
    }

    /// Checks whether `</` (already found at the head) is immediately
    /// followed by `tag_name` and a `>`, without consuming input. Returns
    /// the literal text between `</` and `>`, and how many segments it
    /// spans, on a match.
    fn match_closing_tag(&self, tag_name: &str) -> Option<(String, usize)> {
        let mut delta: isize = 2;
        let mut text = String::new();
        let mut count = 0usize;
        loop {
            match self.read(delta) {
                Segment::Str(s) if s == ">" => break,
                Segment::Str(s) => {
                    text.push_str(s);
                    count += 1;
                    delta += 1;
                    if count > 64 {
                        return None;
                    }
                }
                _ => return None,
            }
        }
        if strip_tag_name(&text) == tag_name {
            Some((text, count))
        } else {
            None
        }
    }

    /// Handles the `</` that opens a closing tag.
    pub(crate) fn handle_tag_open_close(&mut self) {
        self.write(Token::TagOpenClose);
        self.push(Context::TAG_CLOSE);
        self.head += 1;
    }

    /// Handles the `>` that ends a closing tag, failing the route if its
    /// name doesn't match the tag that was opened.
    pub(crate) fn handle_tag_close_close(&mut self) -> Route<Vec<Token>> {
        let closing = self.pop(false);
        let matches_opening = match closing.as_slice() {
            [Token::Text { text }] => {
                let opening = self
                    .stack
                    .last()
                    .and_then(|frame| frame.tokens.get(1))
                    .and_then(Token::as_text)
                    .unwrap_or("");
                strip_tag_name(text) == strip_tag_name(opening)
            }
            _ => false,
        };
        if !matches_opening {
            return Err(self.fail_route());
        }
        self.write_all(closing);
        self.write(Token::TagCloseClose);
        Ok(self.pop(false))
    }
}

/// Splits `s` the way the tag scanner expects: every whitespace character,
/// `"`, and `\` becomes its own chunk, with runs of anything else forming
/// the chunks between them (possibly empty, at either end or between two
/// adjacent delimiters).
fn split_tag_chunk(s: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut start = 0;
    for (index, ch) in s.char_indices() {
        if ch.is_whitespace() || ch == '"' || ch == '\\' {
            chunks.push(&s[start..index]);
            let end = index + ch.len_utf8();
            chunks.push(&s[index..end]);
            start = end;
        }
    }
    chunks.push(&s[start..]);
    chunks
}

fn is_space(chunk: &str) -> bool {
    !chunk.is_empty() && chunk.chars().all(char::is_whitespace)
}

fn is_marker_chunk(chunk: &str) -> bool {
    let mut chars = chunk.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => MARKER_CHARS.contains(&c),
        _ => false,
    }
}

fn strip_tag_name(text: &str) -> String {
    text.trim_end().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::split_tag_chunk;

    #[test]
    fn splits_whitespace_and_quotes_individually() {
        assert_eq!(
            split_tag_chunk("name=\"a b\""),
            vec!["name=", "\"", "a", " ", "b", "\"", ""]
        );
    }

    #[test]
    fn plain_text_is_a_single_chunk() {
        assert_eq!(split_tag_chunk("name"), vec!["name"]);
    }
}

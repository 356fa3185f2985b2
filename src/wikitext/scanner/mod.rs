//! The speculative, backtracking scanner.
//!
//! [`Scanner::parse`] is the main dispatch loop (§4.4 of the design this
//! module follows); everything else here is the frame stack and the write
//! primitives it's built on (§4.2, §4.3). The construct sub-scanners
//! (templates, wikilinks, headings, entities, comments, tags) live in
//! sibling modules as `impl Scanner` blocks.

mod argument;
mod buffer;
mod entity;
mod heading;
mod safety;
mod tag;
mod template;
mod wikilink;

use super::contexts::{Context, Globals};
use super::tokens::Token;
use buffer::{Buffer, Segment};
use log::{debug, trace};

pub(crate) use buffer::MARKER_CHARS;

/// The maximum simultaneous route depth.
pub(crate) const MAX_DEPTH: usize = 40;
/// The maximum total number of frame pushes in one [`tokenize`] call.
pub(crate) const MAX_CYCLES: usize = 100_000;

/// Signals that the current speculative tokenization route cannot be
/// completed. Always caught by the sub-scanner that started the
/// speculation; never escapes [`tokenize`].
#[derive(Clone, Copy, Debug)]
pub(crate) struct RouteFailure;

/// The result of a fallible route: `Ok` on success, `Err(RouteFailure)` when
/// the speculative parse must be abandoned and rewound.
pub(crate) type Route<T> = Result<T, RouteFailure>;

/// One frame of the route stack: a tentative tokenization that can be
/// committed (via [`Scanner::pop`]) or abandoned (via
/// [`Scanner::fail_route`]).
struct Frame {
    /// Tokens committed so far in this frame.
    tokens: Vec<Token>,
    /// This frame's parsing context.
    context: Context,
    /// Text pending coalescence into a single `Token::Text`.
    text_buffer: String,
}

impl Frame {
    fn new(context: Context) -> Self {
        Self {
            tokens: Vec::new(),
            context,
            text_buffer: String::new(),
        }
    }
}

/// Runs the scanner over `text` and returns the flat token sequence.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut scanner = Scanner::new(text);
    // The root frame's context is always 0 (empty); failure here is
    // unreachable because the root context sets none of the `fail` bits
    // that would require unwinding past it.
    let tokens = scanner
        .parse(Context::empty(), true)
        .unwrap_or_else(|_| unreachable!("the root parse route never fails"));
    debug!(
        "tokenize: {} tokens, depth_hit_cap={}, cycles={}",
        tokens.len(),
        scanner.depth_cap_hit,
        scanner.cycles
    );
    tokens
}

/// The scanner's mutable state for a single [`tokenize`] call.
pub(crate) struct Scanner<'a> {
    buffer: Buffer<'a>,
    head: usize,
    stack: Vec<Frame>,
    globals: Globals,
    depth: usize,
    cycles: usize,
    depth_cap_hit: bool,
    /// Set by `handle_heading_end` just before it returns, since a heading
    /// close reports both its token list and its resolved level; threaded
    /// here rather than via a tuple return from `parse`, which otherwise
    /// always returns a plain token list.
    heading_level_result: Option<u8>,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            buffer: Buffer::new(text),
            head: 0,
            stack: Vec::new(),
            globals: Globals::default(),
            depth: 0,
            cycles: 0,
            depth_cap_hit: false,
            heading_level_result: None,
        }
    }

    /// The current (topmost) frame's context.
    fn context(&self) -> Context {
        self.stack.last().expect("frame stack is never empty while parsing").context
    }

    fn context_insert(&mut self, flags: Context) {
        self.stack.last_mut().unwrap().context.insert(flags);
    }

    fn context_remove(&mut self, flags: Context) {
        self.stack.last_mut().unwrap().context.remove(flags);
    }

    fn context_toggle(&mut self, flags: Context) {
        self.stack.last_mut().unwrap().context.toggle(flags);
    }

    fn set_context(&mut self, context: Context) {
        self.stack.last_mut().unwrap().context = context;
    }

    /// Reads the segment at `head + delta`.
    fn read(&self, delta: isize) -> Segment<'a> {
        self.buffer.read(self.head, delta, false)
    }

    /// Reads the segment at `head + delta`, failing the route if it is past
    /// the end of the input.
    fn read_strict(&mut self, delta: isize) -> Route<Segment<'a>> {
        let segment = self.buffer.read(self.head, delta, false);
        if matches!(segment, Segment::End) {
            return Err(self.fail_route());
        }
        Ok(segment)
    }

    /// Pushes a new frame with the given context.
    fn push(&mut self, context: Context) {
        self.stack.push(Frame::new(context));
        self.depth += 1;
        self.cycles += 1;
        if self.depth >= MAX_DEPTH || self.cycles >= MAX_CYCLES {
            self.depth_cap_hit = true;
        }
    }

    /// Flushes the current frame's text buffer into a `Token::Text`.
    fn push_textbuffer(&mut self) {
        let frame = self.stack.last_mut().unwrap();
        if !frame.text_buffer.is_empty() {
            let text = std::mem::take(&mut frame.text_buffer);
            frame.tokens.push(Token::Text { text });
        }
    }

    /// Pops the current frame, returning its committed tokens.
    ///
    /// If `keep_context` is true, the popped frame's context replaces the
    /// new top frame's context (used when a template parameter value
    /// finishes and its context must propagate back to the parameter list).
    fn pop(&mut self, keep_context: bool) -> Vec<Token> {
        self.push_textbuffer();
        self.depth -= 1;
        let popped = self.stack.pop().expect("pop without matching push");
        if keep_context {
            if let Some(parent) = self.stack.last_mut() {
                parent.context = popped.context;
            }
        }
        popped.tokens
    }

    /// Returns whether another route may be speculatively started.
    fn can_recurse(&self) -> bool {
        self.depth < MAX_DEPTH && self.cycles < MAX_CYCLES
    }

    /// Discards the current frame and signals a route failure.
    #[must_use]
    fn fail_route(&mut self) -> RouteFailure {
        trace!("route failed at head={} context={:?}", self.head, self.context());
        self.pop(false);
        RouteFailure
    }

    /// Writes a token to the end of the current frame, after flushing any
    /// pending text.
    fn write(&mut self, token: Token) {
        self.push_textbuffer();
        self.stack.last_mut().unwrap().tokens.push(token);
    }

    /// Writes a token to the beginning of the current frame, after flushing
    /// any pending text.
    fn write_first(&mut self, token: Token) {
        self.push_textbuffer();
        self.stack.last_mut().unwrap().tokens.insert(0, token);
    }

    /// Appends `text` to the current frame's text buffer.
    fn write_text(&mut self, text: &str) {
        self.stack.last_mut().unwrap().text_buffer.push_str(text);
    }

    /// Writes a series of tokens to the current frame at once, coalescing a
    /// leading `Text` token into the pending text buffer.
    fn write_all(&mut self, mut tokens: Vec<Token>) {
        if !tokens.is_empty() && tokens[0].is_text() {
            let Token::Text { text } = tokens.remove(0) else {
                unreachable!()
            };
            self.write_text(&text);
        }
        self.push_textbuffer();
        self.stack.last_mut().unwrap().tokens.extend(tokens);
    }

    /// Abandons the current frame as markup: pops it, writes `text` as
    /// literal, then writes the popped tokens back as if they, too, were
    /// literal. Steps the head back by one on the assumption that the
    /// caller's loop will immediately re-advance it.
    fn write_text_then_stack(&mut self, text: &str) {
        let stack = self.pop(false);
        self.write_text(text);
        if !stack.is_empty() {
            self.write_all(stack);
        }
        self.head -= 1;
    }

    /// The main dispatch loop: parses until a terminal marker for `context`
    /// closes the frame, or the input ends.
    ///
    /// Pushes a new frame unless `push` is false (used when a tag's body is
    /// entered without starting a fresh frame).
    fn parse(&mut self, context: Context, push: bool) -> Route<Vec<Token>> {
        const UNSAFE: Context = Context::TEMPLATE_NAME
            .union(Context::WIKILINK_TITLE)
            .union(Context::TEMPLATE_PARAM_KEY)
            .union(Context::ARGUMENT_NAME)
            .union(Context::TAG_CLOSE);
        const FAIL: Context = Context::TEMPLATE
            .union(Context::ARGUMENT)
            .union(Context::WIKILINK)
            .union(Context::HEADING)
            .union(Context::COMMENT)
            .union(Context::TAG);
        const DOUBLE_FAIL: Context = Context::TEMPLATE_PARAM_KEY.union(Context::TAG_CLOSE);

        if push {
            self.push(context);
        }

        loop {
            let this = self.read(0);

            if self.context().intersects(UNSAFE) && !self.verify_safe(this) {
                if self.context().intersects(DOUBLE_FAIL) {
                    self.pop(false);
                }
                return Err(self.fail_route());
            }

            if !this.is_marker() {
                self.write_text(this.text());
                self.head += 1;
                continue;
            }

            if matches!(this, Segment::End) {
                if self.context().intersects(FAIL) {
                    if self.context().intersects(DOUBLE_FAIL) {
                        self.pop(false);
                    }
                    return Err(self.fail_route());
                }
                return Ok(self.pop(false));
            }

            let next = self.read(1);

            if self.context().contains(Context::COMMENT) {
                if this == "-" && next == "-" && self.read(2) == ">" {
                    return Ok(self.pop(false));
                }
                self.write_text(this.text());
            } else if this == "{" && next == "{" {
                if self.can_recurse() {
                    self.parse_template_or_argument()?;
                } else {
                    self.write_text("{");
                }
            } else if this == "|" && self.context().intersects(Context::TEMPLATE) {
                self.handle_template_param();
            } else if this == "=" && self.context().contains(Context::TEMPLATE_PARAM_KEY) {
                self.handle_template_param_value();
            } else if this == "}" && next == "}" && self.context().intersects(Context::TEMPLATE) {
                return Ok(self.handle_template_end());
            } else if this == "|" && self.context().contains(Context::ARGUMENT_NAME) {
                self.handle_argument_separator();
            } else if this == "}" && next == "}" && self.context().intersects(Context::ARGUMENT) {
                if self.read(2) == "}" {
                    return Ok(self.handle_argument_end());
                }
                self.write_text("}");
            } else if this == "[" && next == "[" {
                if !self.context().contains(Context::WIKILINK_TITLE) && self.can_recurse() {
                    self.parse_wikilink();
                } else {
                    self.write_text("[");
                }
            } else if this == "|" && self.context().contains(Context::WIKILINK_TITLE) {
                self.handle_wikilink_separator();
            } else if this == "]" && next == "]" && self.context().intersects(Context::WIKILINK) {
                return Ok(self.handle_wikilink_end());
            } else if this == "=" && !self.globals.heading {
                if matches!(self.read(-1), Segment::Str("\n") | Segment::Start) {
                    self.parse_heading();
                } else {
                    self.write_text("=");
                }
            } else if this == "=" && self.context().intersects(Context::HEADING) {
                let (tokens, level) = self.handle_heading_end();
                self.heading_level_result = Some(level);
                return Ok(tokens);
            } else if this == "\n" && self.context().intersects(Context::HEADING) {
                return Err(self.fail_route());
            } else if this == "&" {
                self.parse_entity();
            } else if this == "<" && next == "!" {
                if self.read(2) == "-" && self.read(3) == "-" {
                    self.parse_comment();
                } else {
                    self.write_text(this.text());
                }
            } else if this == "<" && next == "/" && self.context().contains(Context::TAG_BODY) {
                self.handle_tag_open_close();
            } else if this == "<" {
                if !self.context().contains(Context::TAG_CLOSE) && self.can_recurse() {
                    self.parse_tag();
                } else {
                    self.write_text("<");
                }
            } else if this == ">" && self.context().contains(Context::TAG_CLOSE) {
                return self.handle_tag_close_close();
            } else {
                self.write_text(this.text());
            }

            self.head += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::tokens::Token;
    use super::tokenize;

    #[test]
    fn plain_text_round_trips() {
        let tokens = tokenize("just some plain text");
        assert_eq!(
            tokens,
            vec![Token::Text {
                text: "just some plain text".into()
            }]
        );
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn adjacent_text_tokens_never_occur() {
        let tokens = tokenize("a {{t}} b {{u}} c");
        for window in tokens.windows(2) {
            assert!(!(window[0].is_text() && window[1].is_text()));
        }
    }
}

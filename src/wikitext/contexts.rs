//! The per-frame context bitmask and the tokenizer's single global flag.
//!
//! This mirrors the `contexts` module of the upstream Python tokenizer this
//! crate's scanner is modeled on: a plain bitmask, partitioned into
//! "construct" bits (what is currently being parsed) and "transient guard"
//! bits (conditions that will abort the current route on the next offending
//! character). Composite flags like [`Context::TEMPLATE`] are unions of their
//! sub-states, not independent bits.

use bitflags::bitflags;

bitflags! {
    /// A per-frame parsing context.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub(crate) struct Context: u32 {
        /// Scanning a template's name (`{{name|...}}`).
        const TEMPLATE_NAME = 1 << 0;
        /// Scanning a template parameter's key.
        const TEMPLATE_PARAM_KEY = 1 << 1;
        /// Scanning a template parameter's value.
        const TEMPLATE_PARAM_VALUE = 1 << 2;

        /// Scanning an argument placeholder's name (`{{{name|default}}}`).
        const ARGUMENT_NAME = 1 << 3;
        /// Scanning an argument placeholder's default value.
        const ARGUMENT_DEFAULT = 1 << 4;

        /// Scanning a wikilink's title (`[[title|text]]`).
        const WIKILINK_TITLE = 1 << 5;
        /// Scanning a wikilink's display text.
        const WIKILINK_TEXT = 1 << 6;

        /// Scanning a level-1 heading (`=...=`).
        const HEADING_LEVEL_1 = 1 << 7;
        /// Scanning a level-2 heading (`==...==`).
        const HEADING_LEVEL_2 = 1 << 8;
        /// Scanning a level-3 heading (`===...===`).
        const HEADING_LEVEL_3 = 1 << 9;
        /// Scanning a level-4 heading.
        const HEADING_LEVEL_4 = 1 << 10;
        /// Scanning a level-5 heading.
        const HEADING_LEVEL_5 = 1 << 11;
        /// Scanning a level-6 heading.
        const HEADING_LEVEL_6 = 1 << 12;

        /// Inside an HTML comment (`<!--...-->`).
        const COMMENT = 1 << 13;

        /// Inside a tag's opening (`<name ...`), before the closing `>`.
        const TAG_OPEN = 1 << 14;
        /// Inside a single tag attribute.
        const TAG_ATTR = 1 << 15;
        /// Inside a tag's body, between its open and close tags.
        const TAG_BODY = 1 << 16;
        /// Inside a tag's closing (`</name`), before the closing `>`.
        const TAG_CLOSE = 1 << 17;

        /// Abort the route the moment another character is read.
        const FAIL_NEXT = 1 << 18;
        /// Within a template name, abort on the next non-whitespace run.
        const FAIL_ON_TEXT = 1 << 19;
        /// Arms on a lone `{`; the next character decides success or abort.
        const FAIL_ON_LBRACE = 1 << 20;
        /// Arms on a lone `}`; the next character decides success or abort.
        const FAIL_ON_RBRACE = 1 << 21;
        /// Abort immediately if an `=` is read.
        const FAIL_ON_EQUALS = 1 << 22;
        /// At least one non-whitespace character has been seen.
        const HAS_TEXT = 1 << 23;

        /// Any part of a template (name, parameter key, or parameter value).
        const TEMPLATE = Self::TEMPLATE_NAME.bits()
            | Self::TEMPLATE_PARAM_KEY.bits()
            | Self::TEMPLATE_PARAM_VALUE.bits();
        /// Any part of an argument placeholder.
        const ARGUMENT = Self::ARGUMENT_NAME.bits() | Self::ARGUMENT_DEFAULT.bits();
        /// Any part of a wikilink.
        const WIKILINK = Self::WIKILINK_TITLE.bits() | Self::WIKILINK_TEXT.bits();
        /// Any heading level.
        const HEADING = Self::HEADING_LEVEL_1.bits()
            | Self::HEADING_LEVEL_2.bits()
            | Self::HEADING_LEVEL_3.bits()
            | Self::HEADING_LEVEL_4.bits()
            | Self::HEADING_LEVEL_5.bits()
            | Self::HEADING_LEVEL_6.bits();
        /// Any part of an HTML tag.
        const TAG = Self::TAG_OPEN.bits()
            | Self::TAG_ATTR.bits()
            | Self::TAG_BODY.bits()
            | Self::TAG_CLOSE.bits();
    }
}

impl Context {
    /// Returns the `Context::HEADING_LEVEL_*` flag for the given 1-based
    /// heading level.
    ///
    /// # Panics
    ///
    /// If `level` is not in `1..=6`.
    pub(crate) fn heading_level(level: u8) -> Self {
        assert!((1..=6).contains(&level), "heading level out of range");
        Self::from_bits_retain(Self::HEADING_LEVEL_1.bits() << (level - 1))
    }

    /// Decodes the 1-based heading level encoded by whichever
    /// `HEADING_LEVEL_*` bit is set, if any.
    pub(crate) fn decode_heading_level(self) -> Option<u8> {
        (1..=6).find(|&level| self.contains(Self::heading_level(level)))
    }
}

/// Global, process-wide (really: single-tokenize-call-wide) state, distinct
/// from any one frame's context.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Globals {
    /// Set while any heading is being scanned, to prevent a heading from
    /// being recognized while already inside one.
    pub heading: bool,
}

//! The token alphabet produced by the tokenizer.
//!
//! Tokens form a flat, ordered sequence; open/close pairs nest but never
//! cross, and a [`Token::Text`] never immediately follows another one (see
//! [`crate::tokenize`]).

/// A validated section heading level, 1 (`=`) through 6 (`======`).
///
/// The tokenizer only ever constructs these internally through values it has
/// already bounded; [`HeadingLevel::try_from`] exists for callers building
/// [`Token::HeadingStart`] values of their own (for example, to splice
/// synthetic headings into a token stream).
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    /// Returns the level as a plain `1..=6` integer.
    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for HeadingLevel {
    type Error = HeadingLevelError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        if (1..=6).contains(&level) {
            Ok(Self(level))
        } else {
            Err(HeadingLevelError { level })
        }
    }
}

/// A heading level outside the valid `1..=6` range.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
#[error("heading level {level} is out of range (must be 1..=6)")]
pub struct HeadingLevelError {
    level: u8,
}

/// A single token in the output of [`crate::tokenize`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Token {
    /// A run of opaque literal text.
    Text {
        /// The literal text.
        text: String,
    },

    /// The start of a template, `{{`.
    TemplateOpen,
    /// The separator between a template's name and its parameters, or
    /// between two parameters, `|`.
    TemplateParamSeparator,
    /// The separator between a template parameter's key and value, `=`.
    TemplateParamEquals,
    /// The end of a template, `}}`.
    TemplateClose,

    /// The start of a template argument placeholder, `{{{`.
    ArgumentOpen,
    /// The separator between an argument's name and its default, `|`.
    ArgumentSeparator,
    /// The end of a template argument placeholder, `}}}`.
    ArgumentClose,

    /// The start of a wikilink, `[[`.
    WikilinkOpen,
    /// The separator between a wikilink's title and its display text, `|`.
    WikilinkSeparator,
    /// The end of a wikilink, `]]`.
    WikilinkClose,

    /// The start of a section heading, `=` through `======`.
    HeadingStart {
        /// The heading level, from 1 (`=`) to 6 (`======`).
        level: HeadingLevel,
    },
    /// The end of a section heading.
    HeadingEnd,

    /// The start of an HTML entity reference, `&`.
    HTMLEntityStart,
    /// Marks the entity as numeric (`&#...;`), immediately after the `#`.
    HTMLEntityNumeric,
    /// Marks a numeric entity as hexadecimal (`&#x...;`).
    HTMLEntityHex {
        /// The literal `x` or `X` that introduced the hex digits.
        char: char,
    },
    /// The end of an HTML entity reference, including the terminating `;`.
    HTMLEntityEnd,

    /// The start of an HTML comment, `<!--`.
    CommentStart,
    /// The end of an HTML comment, `-->`.
    CommentEnd,

    /// The opening `<` of an HTML start tag.
    TagOpenOpen {
        /// Whether the tag markup should be rendered (always `true` for tags
        /// produced by this tokenizer; reserved for downstream consumers
        /// that splice in synthetic tags).
        showtag: bool,
    },
    /// The start of a tag attribute, covering any whitespace around its name
    /// and `=` sign.
    TagAttrStart {
        /// Whitespace captured before the attribute name.
        pad_first: String,
        /// Whitespace captured between the attribute name and `=`.
        pad_before_eq: String,
        /// Whitespace captured between `=` and the attribute value.
        pad_after_eq: String,
    },
    /// The `=` of a quoted or unquoted tag attribute.
    TagAttrEquals,
    /// A `"` delimiting a quoted tag attribute value.
    TagAttrQuote,
    /// The closing `>` of an HTML start tag.
    TagCloseOpen {
        /// Whitespace captured immediately before the `>`.
        padding: String,
    },
    /// The closing `/>` of a self-closing HTML tag.
    TagCloseSelfclose {
        /// Whitespace captured immediately before the `/>`.
        padding: String,
    },
    /// The opening `</` of an HTML end tag.
    TagOpenClose,
    /// The closing `>` of an HTML end tag.
    TagCloseClose,
}

impl Token {
    /// Returns the text of this token if it is a [`Token::Text`].
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Token::Text { text } => Some(text),
            _ => None,
        }
    }

    /// Returns true if this is a [`Token::Text`] token.
    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self, Token::Text { .. })
    }
}

//! Tag classification tables.
//!
//! The distilled specification treats "does this tag name admit nested
//! markup in its body" as a supplied predicate. This module supplies it,
//! built the same way `wiki-rs` builds its own tag-name lookup tables:
//! static `phf::Set` literals.

use phf::{Set, phf_set};

/// Tags whose body never contains parsable wikitext: the body is read as
/// opaque text up to the matching close tag.
static NON_PARSABLE_TAGS: Set<&str> = phf_set! {
    "nowiki", "pre", "source", "syntaxhighlight", "math", "score",
    "charinsert", "ce", "chem", "graph", "hiero", "imagemap", "inputbox",
    "mapframe", "maplink", "templatedata", "timeline",
};

/// Returns whether the body of a tag with the given (lowercased) name should
/// be parsed for nested wikitext markup, or treated as opaque text.
///
/// Unknown tag names (anything not in [`NON_PARSABLE_TAGS`]) default to
/// parsable, matching how unrecognized extension and HTML tags behave in
/// practice: the tokenizer does not know every registered extension tag, so
/// only the tags that are unconditionally raw-text in standard MediaWiki are
/// listed here.
#[must_use]
pub(crate) fn is_parsable(tag_name_lowercase: &str) -> bool {
    !NON_PARSABLE_TAGS.contains(tag_name_lowercase)
}

#[cfg(test)]
mod tests {
    use super::is_parsable;

    #[test]
    fn nowiki_and_pre_are_not_parsable() {
        assert!(!is_parsable("nowiki"));
        assert!(!is_parsable("pre"));
        assert!(!is_parsable("source"));
    }

    #[test]
    fn ordinary_tags_are_parsable() {
        assert!(is_parsable("ref"));
        assert!(is_parsable("div"));
        assert!(is_parsable("span"));
    }
}

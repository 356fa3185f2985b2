//! The named HTML character reference table.
//!
//! This is the supplied lookup table the HTML entity sub-scanner (see
//! `scanner::entity`) validates named references (`&amp;`, `&nbsp;`, ...)
//! against. The distilled specification treats this table as supplied by an
//! external collaborator; since this crate ships standalone, it owns a copy
//! of the standard HTML 4 named character reference set, built the same way
//! `wikitext::config` builds its other static lookup tables: a `phf::Set`
//! literal.

use phf::{Set, phf_set};

/// Returns true if `name` (the text between `&` and `;`, case-sensitive) is
/// a recognized named HTML character reference.
#[must_use]
pub(crate) fn is_named_entity(name: &str) -> bool {
    NAMED_ENTITIES.contains(name)
}

/// The HTML 4 named character reference set.
static NAMED_ENTITIES: Set<&'static str> = phf_set! {
    "quot", "amp", "lt", "gt",
    "nbsp", "iexcl", "cent", "pound", "curren", "yen", "brvbar", "sect",
    "uml", "copy", "ordf", "laquo", "not", "shy", "reg", "macr", "deg",
    "plusmn", "sup2", "sup3", "acute", "micro", "para", "middot", "cedil",
    "sup1", "ordm", "raquo", "frac14", "frac12", "frac34", "iquest",
    "Agrave", "Aacute", "Acirc", "Atilde", "Auml", "Aring", "AElig",
    "Ccedil", "Egrave", "Eacute", "Ecirc", "Euml", "Igrave", "Iacute",
    "Icirc", "Iuml", "ETH", "Ntilde", "Ograve", "Oacute", "Ocirc", "Otilde",
    "Ouml", "times", "Oslash", "Ugrave", "Uacute", "Ucirc", "Uuml",
    "Yacute", "THORN", "szlig", "agrave", "aacute", "acirc", "atilde",
    "auml", "aring", "aelig", "ccedil", "egrave", "eacute", "ecirc", "euml",
    "igrave", "iacute", "icirc", "iuml", "eth", "ntilde", "ograve",
    "oacute", "ocirc", "otilde", "ouml", "divide", "oslash", "ugrave",
    "uacute", "ucirc", "uuml", "yacute", "thorn", "yuml",
    "fnof",
    "Alpha", "Beta", "Gamma", "Delta", "Epsilon", "Zeta", "Eta", "Theta",
    "Iota", "Kappa", "Lambda", "Mu", "Nu", "Xi", "Omicron", "Pi", "Rho",
    "Sigma", "Tau", "Upsilon", "Phi", "Chi", "Psi", "Omega",
    "alpha", "beta", "gamma", "delta", "epsilon", "zeta", "eta", "theta",
    "iota", "kappa", "lambda", "mu", "nu", "xi", "omicron", "pi", "rho",
    "sigmaf", "sigma", "tau", "upsilon", "phi", "chi", "psi", "omega",
    "thetasym", "upsih", "piv",
    "bull", "hellip", "prime", "Prime", "oline", "frasl",
    "weierp", "image", "real", "trade", "alefsym",
    "larr", "uarr", "rarr", "darr", "harr", "crarr",
    "lArr", "uArr", "rArr", "dArr", "hArr",
    "forall", "part", "exist", "empty", "nabla", "isin", "notin", "ni",
    "prod", "sum", "minus", "lowast", "radic", "prop", "infin", "ang",
    "and", "or", "cap", "cup", "int", "there4", "sim", "cong", "asymp",
    "ne", "equiv", "le", "ge", "sub", "sup", "nsub", "sube", "supe",
    "oplus", "otimes", "perp", "sdot",
    "lceil", "rceil", "lfloor", "rfloor",
    "lang", "rang",
    "loz", "spades", "clubs", "hearts", "diams",
    "OElig", "oelig", "Scaron", "scaron", "Yuml", "circ", "tilde",
    "ensp", "emsp", "thinsp", "zwnj", "zwj", "lrm", "rlm",
    "ndash", "mdash", "lsquo", "rsquo", "sbquo", "ldquo", "rdquo", "bdquo",
    "dagger", "Dagger", "permil", "lsaquo", "rsaquo", "euro",
};

#[cfg(test)]
mod tests {
    use super::is_named_entity;

    #[test]
    fn recognizes_common_entities() {
        assert!(is_named_entity("amp"));
        assert!(is_named_entity("nbsp"));
        assert!(is_named_entity("copy"));
        assert!(is_named_entity("euro"));
    }

    #[test]
    fn is_case_sensitive() {
        assert!(is_named_entity("amp"));
        assert!(!is_named_entity("AMP"));
        assert!(!is_named_entity("Amp"));
    }

    #[test]
    fn rejects_unknown_names() {
        assert!(!is_named_entity("bogus"));
        assert!(!is_named_entity(""));
    }
}

//! Attribute name classification.

/// How an attribute name can be written in TSX.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameClass {
    /// A legal JSX attribute name, emitted as written.
    Direct,
    /// Not expressible as a bare attribute. Collected into the element's
    /// spread object under a string key.
    NeedsSpread,
}

/// Classifies an attribute name against the JSX attribute-name grammar.
///
/// A name is [`NameClass::Direct`] when it is a JSX identifier, optionally
/// namespaced by a single `:` (`client:load`, `xlink:href`). JSX identifiers
/// may contain `-` after the first character and letters from any script.
///
/// ```
/// use astro_tsx::{classify_attribute_name, NameClass};
///
/// assert_eq!(classify_attribute_name("data-id"), NameClass::Direct);
/// assert_eq!(classify_attribute_name("client:only"), NameClass::Direct);
/// assert_eq!(classify_attribute_name("@click"), NameClass::NeedsSpread);
/// assert_eq!(classify_attribute_name(":class"), NameClass::NeedsSpread);
/// ```
pub fn classify_attribute_name(name: &str) -> NameClass {
    let (namespace, local) = match name.split_once(':') {
        Some((namespace, local)) => (namespace, Some(local)),
        None => (name, None),
    };

    if is_jsx_identifier(namespace) && local.map_or(true, is_jsx_identifier) {
        NameClass::Direct
    } else {
        NameClass::NeedsSpread
    }
}

fn is_jsx_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if is_identifier_start(first) => {
            chars.all(|c| is_identifier_part(c) || c == '-')
        }
        _ => false,
    }
}

/// `ID_Start` plus `$` and `_`, as in ECMAScript `IdentifierStartChar`.
fn is_identifier_start(c: char) -> bool {
    unicode_ident::is_xid_start(c) || c == '$' || c == '_'
}

const ZWNJ: char = '\u{200c}';
const ZWJ: char = '\u{200d}';

/// `ID_Continue` plus `$`, ZWNJ and ZWJ, as in ECMAScript
/// `IdentifierPartChar`.
fn is_identifier_part(c: char) -> bool {
    unicode_ident::is_xid_continue(c) || matches!(c, '$' | ZWNJ | ZWJ)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_names_are_direct() {
        for name in ["name", "class", "data-id", "aria-label", "_private", "$store", "h1"] {
            assert_eq!(classify_attribute_name(name), NameClass::Direct, "{name}");
        }
    }

    #[test]
    fn test_namespaced_names_are_direct() {
        for name in ["client:only", "client:load", "set:html", "xlink:href", "class:list"] {
            assert_eq!(classify_attribute_name(name), NameClass::Direct, "{name}");
        }
    }

    #[test]
    fn test_unicode_letters_are_direct() {
        assert_eq!(classify_attribute_name("丽dfds_fsfdsfs"), NameClass::Direct);
        assert_eq!(classify_attribute_name("données"), NameClass::Direct);
        // combining acute accent
        assert_eq!(classify_attribute_name("c\u{301}"), NameClass::Direct);
        assert_eq!(classify_attribute_name("a\u{200d}b"), NameClass::Direct);
    }

    #[test]
    fn test_punctuation_needs_spread() {
        for name in [
            "@click",
            ":class",
            "x-on:keyup.shift.enter",
            "a:b:c",
            "a.b",
            "1st",
            "-leading",
            "ns:",
            "",
            "a½",
            "b²",
            "Ⅻ²",
            "\u{301}c",
        ] {
            assert_eq!(classify_attribute_name(name), NameClass::NeedsSpread, "{name:?}");
        }
    }
}

use std::fmt;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Case, diacritic and whitespace insensitive form of a query or stored field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedKey(String);

impl NormalizedKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Length in characters, which is what the suggestion threshold counts.
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Display for NormalizedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// trim -> lowercase -> NFD without combining marks -> drop all whitespace.
pub fn normalize_key(value: &str) -> NormalizedKey {
    let lower = value.trim().to_lowercase();
    let key = lower
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .filter(|c| !c.is_whitespace())
        .collect();
    NormalizedKey(key)
}

/// Emails are stored without any whitespace but keep their original casing.
pub(crate) fn strip_whitespace(value: &str) -> String {
    value.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn ignores_case_diacritics_and_spacing() {
        assert_eq!(normalize_key("Ana Chiuntí "), normalize_key("ana chiunti"));
        assert_eq!(normalize_key("  Camilo   Quirós").as_str(), "camiloquiros");
        assert_eq!(
            normalize_key("ACRUZA@noordwijk.edu.mx").as_str(),
            "acruza@noordwijk.edu.mx"
        );
    }

    #[test]
    fn blank_input_normalizes_to_empty_key() {
        assert!(normalize_key("").is_empty());
        assert!(normalize_key(" \t\n ").is_empty());
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert_eq!(normalize_key("ñ").char_len(), 1);
        assert_eq!(normalize_key("Øy").char_len(), 2);
    }

    #[test]
    fn strip_whitespace_keeps_casing() {
        assert_eq!(strip_whitespace(" ACruz @school.mx "), "ACruz@school.mx");
    }

    proptest! {
        #[test]
        fn normalization_is_idempotent(input in "\\PC{0,40}") {
            let once = normalize_key(&input);
            let twice = normalize_key(once.as_str());
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn normalized_keys_contain_no_whitespace(input in "[ a-zA-ZáéíóúñÁÉÍÓÚÑ\\t]{0,30}") {
            let key = normalize_key(&input);
            prop_assert!(!key.as_str().chars().any(char::is_whitespace));
        }
    }
}

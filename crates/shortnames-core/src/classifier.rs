//! Character classification and case folding.
//!
//! The shortener never consults ambient locale state. Everything it needs to
//! know about characters (word membership, case, whitespace) comes from a
//! [`TextClassifier`] handed to it at construction time.

/// Character classification used by the shortener.
///
/// Implementations must be pure: the same character always classifies the
/// same way, so a single classifier can be shared across threads.
pub trait TextClassifier: Send + Sync {
    /// Whether `c` belongs to a word.
    fn is_alphanumeric(&self, c: char) -> bool;

    /// Whether `c` is an uppercase letter.
    fn is_uppercase(&self, c: char) -> bool;

    /// Whether `c` separates words as whitespace.
    fn is_whitespace(&self, c: char) -> bool;

    /// Uppercase mapping of `c`. May expand to more than one character.
    fn to_uppercase(&self, c: char) -> String;

    /// Case-insensitive comparison of two characters.
    fn chars_eq_ignore_case(&self, a: char, b: char) -> bool;

    /// Case-folded form of `s`, used as a lookup key.
    fn fold(&self, s: &str) -> String;
}

/// [`TextClassifier`] backed by the Unicode properties of [`char`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnicodeClassifier;

impl TextClassifier for UnicodeClassifier {
    fn is_alphanumeric(&self, c: char) -> bool {
        c.is_alphanumeric()
    }

    fn is_uppercase(&self, c: char) -> bool {
        c.is_uppercase()
    }

    fn is_whitespace(&self, c: char) -> bool {
        c.is_whitespace()
    }

    fn to_uppercase(&self, c: char) -> String {
        c.to_uppercase().collect()
    }

    fn chars_eq_ignore_case(&self, a: char, b: char) -> bool {
        a == b || a.to_lowercase().eq(b.to_lowercase())
    }

    fn fold(&self, s: &str) -> String {
        s.chars().flat_map(char::to_lowercase).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polish_letters_are_alphanumeric() {
        let c = UnicodeClassifier;
        for ch in ['ą', 'ł', 'Ż', 'ś', 'ü', 'ß', 'ж', '7'] {
            assert!(c.is_alphanumeric(ch), "{ch} should be alphanumeric");
        }
        for ch in [' ', '-', '.', '\'', ','] {
            assert!(!c.is_alphanumeric(ch), "{ch:?} should not be alphanumeric");
        }
    }

    #[test]
    fn case_insensitive_comparison_is_unicode_aware() {
        let c = UnicodeClassifier;
        assert!(c.chars_eq_ignore_case('Ł', 'ł'));
        assert!(c.chars_eq_ignore_case('Ś', 'ś'));
        assert!(c.chars_eq_ignore_case('У', 'у'));
        assert!(!c.chars_eq_ignore_case('l', 'ł'));
    }

    #[test]
    fn fold_lowercases_every_character() {
        assert_eq!(UnicodeClassifier.fold("ŚWIĘTEGO"), "świętego");
        assert_eq!(UnicodeClassifier.fold("Straße"), "straße");
    }

    #[test]
    fn uppercase_may_expand() {
        assert_eq!(UnicodeClassifier.to_uppercase('ś'), "Ś");
        assert_eq!(UnicodeClassifier.to_uppercase('ß'), "SS");
    }
}

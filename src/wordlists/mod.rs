//! Word lists for the game
//!
//! Embedded daily targets and accepted guesses, a file loader for custom lists,
//! and the `Dictionary` used to validate submissions.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::Dictionary;
pub use embedded::{ALLOWED, ALLOWED_COUNT, TARGETS, TARGETS_COUNT};

use crate::core::Word;

/// Embedded targets as `Word`s, in play order
#[must_use]
pub fn embedded_targets() -> Vec<Word> {
    loader::words_from_slice(TARGETS)
}

/// Embedded accepted-guess set, including every target
#[must_use]
pub fn embedded_dictionary() -> Dictionary {
    Dictionary::with_targets(loader::words_from_slice(ALLOWED), &embedded_targets())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn targets_count_matches_const() {
        assert_eq!(TARGETS.len(), TARGETS_COUNT);
    }

    #[test]
    fn allowed_count_matches_const() {
        assert_eq!(ALLOWED.len(), ALLOWED_COUNT);
    }

    #[test]
    fn targets_are_valid_words() {
        for &word in TARGETS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn targets_subset_of_allowed() {
        let allowed: std::collections::HashSet<_> = ALLOWED.iter().collect();

        for target in TARGETS {
            assert!(allowed.contains(target), "Target '{target}' not in allowed list");
        }
    }

    #[test]
    fn allowed_is_larger_than_targets() {
        assert!(ALLOWED_COUNT > TARGETS_COUNT);
    }

    #[test]
    fn embedded_dictionary_accepts_common_guesses() {
        let dictionary = embedded_dictionary();
        for guess in ["crate", "trace", "slate", "guild"] {
            assert!(dictionary.validate(guess).is_ok(), "{guess} rejected");
        }
        assert!(dictionary.validate("zzzzz").is_err());
    }
}

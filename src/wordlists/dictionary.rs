//! Accepted-guess set
//!
//! Membership-only lookup used to reject submissions that are not words.

use crate::core::Word;
use crate::error::GuessError;
use rustc_hash::FxHashSet;

/// The set of words accepted as guesses
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: FxHashSet<Word>,
}

impl Dictionary {
    /// Build a dictionary from any collection of words
    pub fn new<I>(words: I) -> Self
    where
        I: IntoIterator<Item = Word>,
    {
        Self {
            words: words.into_iter().collect(),
        }
    }

    /// Build a dictionary that also accepts every target word
    ///
    /// Guarantees a daily target can always be submitted, even when a custom
    /// allowed list forgets it.
    pub fn with_targets<I>(allowed: I, targets: &[Word]) -> Self
    where
        I: IntoIterator<Item = Word>,
    {
        let mut dictionary = Self::new(allowed);
        dictionary.words.extend(targets.iter().cloned());
        dictionary
    }

    /// Check whether `word` is an accepted guess
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Validate a raw guess string
    ///
    /// # Errors
    ///
    /// Returns `GuessError::InvalidLength` or `GuessError::InvalidCharacters`
    /// for malformed input, and `GuessError::InvalidWord` when the guess is
    /// well-formed but not in the set.
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::Word;
    /// use wordle_daily::error::GuessError;
    /// use wordle_daily::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::new([Word::new("crate").unwrap()]);
    /// assert!(dictionary.validate("CRATE").is_ok());
    /// assert_eq!(
    ///     dictionary.validate("zzzzz"),
    ///     Err(GuessError::InvalidWord("zzzzz".into()))
    /// );
    /// ```
    pub fn validate(&self, guess: &str) -> Result<Word, GuessError> {
        let word = Word::new(guess)?;
        if self.contains(&word) {
            Ok(word)
        } else {
            Err(GuessError::InvalidWord(word.text().to_string()))
        }
    }

    /// Number of accepted words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True if nothing would be accepted
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

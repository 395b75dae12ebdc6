//! Guess evaluation and per-letter feedback
//!
//! Each position of a guess is classified on its own:
//! - `Correct` when the letter matches the target at the same position
//! - `Present` when the letter occurs anywhere else in the target
//! - `Absent` otherwise
//!
//! Letters are not consumed. A letter that occurs once in the target but is
//! guessed twice is `Present` at both non-matching positions.

use super::word::{WORD_LENGTH, Word};
use crate::error::GuessError;
use std::fmt;

/// Outcome for a single letter of an evaluated guess
///
/// Ordered from worst to best so the strongest status seen for a key is `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterStatus {
    /// Letter does not occur in the target
    Absent,
    /// Letter occurs in the target at another position
    Present,
    /// Letter matches the target at this position
    Correct,
}

impl LetterStatus {
    /// Single-character notation (`G`, `Y`, `-`)
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    /// Square emoji used when sharing results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Parse a feedback character (`G/g/🟩`, `Y/y/🟨`, `-/_/./⬜`)
    #[must_use]
    pub const fn from_symbol(c: char) -> Option<Self> {
        match c {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '.' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Feedback for a complete 5-letter guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterStatus; WORD_LENGTH]);

impl Feedback {
    /// All letters correct
    pub const PERFECT: Self = Self([LetterStatus::Correct; WORD_LENGTH]);

    /// Build feedback from explicit statuses
    #[must_use]
    pub const fn new(statuses: [LetterStatus; WORD_LENGTH]) -> Self {
        Self(statuses)
    }

    /// Evaluate `guess` against `target`
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::{Feedback, LetterStatus, Word};
    ///
    /// let target = Word::new("crate").unwrap();
    /// let guess = Word::new("trace").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &target);
    ///
    /// assert_eq!(feedback.to_emoji(), "🟨🟩🟩🟨🟩");
    /// assert_eq!(feedback.count(LetterStatus::Present), 2);
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, target: &Word) -> Self {
        let mut statuses = [LetterStatus::Absent; WORD_LENGTH];

        for (i, status) in statuses.iter_mut().enumerate() {
            let letter = guess.char_at(i);
            *status = if letter == target.char_at(i) {
                LetterStatus::Correct
            } else if target.has_letter(letter) {
                LetterStatus::Present
            } else {
                LetterStatus::Absent
            };
        }

        Self(statuses)
    }

    /// Per-position statuses
    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LENGTH] {
        &self.0
    }

    /// Status at `position`, or `None` past the end
    #[inline]
    #[must_use]
    pub fn get(&self, position: usize) -> Option<LetterStatus> {
        self.0.get(position).copied()
    }

    /// Check if every letter is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count positions with the given status
    #[must_use]
    pub fn count(&self, status: LetterStatus) -> usize {
        self.0.iter().filter(|&&s| s == status).count()
    }

    /// Convert to an emoji string (🟩🟨⬜)
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }

    /// Parse feedback notation such as `"GY-GY"` or `"🟩🟨⬜🟩🟨"`
    ///
    /// Returns `None` unless the input holds exactly five feedback characters.
    #[must_use]
    pub fn parse_symbols(s: &str) -> Option<Self> {
        let mut statuses = [LetterStatus::Absent; WORD_LENGTH];
        let mut chars = s.trim().chars();

        for slot in &mut statuses {
            *slot = LetterStatus::from_symbol(chars.next()?)?;
        }

        if chars.next().is_some() {
            return None;
        }

        Some(Self(statuses))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for status in &self.0 {
            write!(f, "{}", status.symbol())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_symbols(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}

/// Evaluate a raw guess string against the target
///
/// # Errors
///
/// Returns `GuessError::InvalidLength` when the guess is not 5 characters and
/// `GuessError::InvalidCharacters` when it holds anything but letters.
/// Dictionary membership is checked by the caller (see `Dictionary::validate`).
pub fn evaluate_guess(guess: &str, target: &Word) -> Result<Feedback, GuessError> {
    let guess = Word::new(guess)?;
    Ok(Feedback::evaluate(&guess, target))
}

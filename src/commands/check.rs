//! Single-guess evaluation command
//!
//! Evaluates one guess against a target without playing a full game.

use crate::core::{Feedback, Word};
use crate::error::GuessError;
use crate::wordlists::Dictionary;

/// Result of checking a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub guess: Word,
    pub feedback: Feedback,
}

/// Evaluate `guess` against `target`
///
/// # Errors
///
/// Returns `GuessError::InvalidLength` / `InvalidCharacters` for malformed
/// guesses and `GuessError::InvalidWord` when the guess is not accepted by
/// `dictionary`.
pub fn check_guess(
    guess: &str,
    target: &Word,
    dictionary: &Dictionary,
) -> Result<CheckResult, GuessError> {
    let guess = dictionary.validate(guess)?;
    let feedback = Feedback::evaluate(&guess, target);
    Ok(CheckResult { guess, feedback })
}

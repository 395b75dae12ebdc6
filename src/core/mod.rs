//! Core domain types for the game
//!
//! Words and guess evaluation. Everything here is pure and has no knowledge of
//! word lists, dates or the terminal.

mod feedback;
mod word;

pub use feedback::{Feedback, LetterStatus, evaluate_guess};
pub use word::{WORD_LENGTH, Word, WordError};

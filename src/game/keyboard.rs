//! Cumulative per-key status
//!
//! Each letter key remembers the best status it has been revealed with.

use crate::core::LetterStatus;

/// Best status seen for each letter a-z
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    keys: [Option<LetterStatus>; 26],
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a revealed status for `letter`
    ///
    /// A key never downgrades: `Correct` beats `Present` beats `Absent`.
    /// Non-letters are ignored.
    pub fn record(&mut self, letter: u8, status: LetterStatus) {
        if let Some(slot) = Self::slot(letter).map(|i| &mut self.keys[i]) {
            *slot = (*slot).max(Some(status));
        }
    }

    /// Current status of `letter`, `None` if never revealed
    #[must_use]
    pub fn status(&self, letter: u8) -> Option<LetterStatus> {
        Self::slot(letter).and_then(|i| self.keys[i])
    }

    /// Forget everything
    pub fn clear(&mut self) {
        self.keys = [None; 26];
    }

    fn slot(letter: u8) -> Option<usize> {
        let lower = letter.to_ascii_lowercase();
        lower
            .is_ascii_lowercase()
            .then(|| usize::from(lower - b'a'))
    }
}

//! Game session state machine
//!
//! ```text
//! Accepting ──submit (valid)──▶ Evaluating ──reveal done──▶ Accepting (rows left)
//!     ▲  │                                          ├──────▶ Won  (guess == target)
//!     └──┘ submit (invalid): rejected, no change    └──────▶ Lost (no rows left)
//! ```
//!
//! Every input operation checks `accepts_input()` first, so nothing typed
//! while a reveal is in flight can reach the board.

use crate::core::{Feedback, LetterStatus, WORD_LENGTH, Word};
use crate::game::keyboard::KeyboardState;
use crate::wordlists::Dictionary;
use std::fmt;

/// Default number of guesses per game
pub const DEFAULT_MAX_ROWS: usize = 6;

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Player may add/remove letters and submit
    Accepting,
    /// A submitted guess is being revealed; input is locked
    Evaluating,
    /// Target guessed (terminal)
    Won,
    /// Out of rows (terminal)
    Lost,
}

impl Phase {
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// A submitted, evaluated guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRow {
    pub word: Word,
    pub feedback: Feedback,
}

/// Why a submission was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    NotEnoughLetters { count: usize },
    NotAWord,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotEnoughLetters { count } => {
                write!(f, "Not enough letters ({count}/{WORD_LENGTH})")
            }
            Self::NotAWord => write!(f, "Not a word!"),
        }
    }
}

/// Result of `Session::submit`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input is locked or the game is over
    Ignored,
    /// Invalid submission; the session is unchanged
    Rejected(Rejection),
    /// Valid guess; a reveal has started
    Accepted(Feedback),
}

/// A guess being revealed tile by tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reveal {
    row: GuessRow,
    revealed: usize,
}

impl Reveal {
    #[must_use]
    pub const fn row(&self) -> &GuessRow {
        &self.row
    }

    /// Number of tiles already flipped
    #[must_use]
    pub const fn revealed(&self) -> usize {
        self.revealed
    }

    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.revealed >= WORD_LENGTH
    }
}

/// One step of a reveal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealStep {
    /// A tile was flipped and its key updated
    Tile {
        position: usize,
        status: LetterStatus,
    },
    /// The row is committed and the session moved to this phase
    Finished(Phase),
}

/// A single game against one target word
#[derive(Debug, Clone)]
pub struct Session<'a> {
    dictionary: &'a Dictionary,
    target: Word,
    max_rows: usize,
    rows: Vec<GuessRow>,
    pending: String,
    keyboard: KeyboardState,
    phase: Phase,
    reveal: Option<Reveal>,
}

impl<'a> Session<'a> {
    #[must_use]
    pub fn new(target: Word, dictionary: &'a Dictionary) -> Self {
        Self {
            dictionary,
            target,
            max_rows: DEFAULT_MAX_ROWS,
            rows: Vec::with_capacity(DEFAULT_MAX_ROWS),
            pending: String::with_capacity(WORD_LENGTH),
            keyboard: KeyboardState::new(),
            phase: Phase::Accepting,
            reveal: None,
        }
    }

    /// Set the number of guesses allowed (at least one)
    #[must_use]
    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = max_rows.max(1);
        self
    }

    /// Start over against a new target, keeping the dictionary and row count
    pub fn restart(&mut self, target: Word) {
        tracing::debug!("session restarted");
        self.target = target;
        self.rows.clear();
        self.pending.clear();
        self.keyboard.clear();
        self.phase = Phase::Accepting;
        self.reveal = None;
    }

    /// Input guard checked by every input operation
    #[must_use]
    pub fn accepts_input(&self) -> bool {
        self.phase == Phase::Accepting
    }

    /// Add a letter to the active row
    ///
    /// Returns `false` if input is locked, the row is full or `c` is not an
    /// ASCII letter.
    pub fn press_letter(&mut self, c: char) -> bool {
        if !self.accepts_input() || !c.is_ascii_alphabetic() {
            return false;
        }
        if self.pending.len() >= WORD_LENGTH {
            return false;
        }
        self.pending.push(c.to_ascii_lowercase());
        true
    }

    /// Remove the last letter from the active row
    pub fn delete_letter(&mut self) -> bool {
        if !self.accepts_input() {
            return false;
        }
        self.pending.pop().is_some()
    }

    /// Submit the active row
    pub fn submit(&mut self) -> SubmitOutcome {
        if !self.accepts_input() {
            return SubmitOutcome::Ignored;
        }

        let count = self.pending.len();
        if count != WORD_LENGTH {
            tracing::debug!(count, "submission rejected: not enough letters");
            return SubmitOutcome::Rejected(Rejection::NotEnoughLetters { count });
        }

        let word = match self.dictionary.validate(&self.pending) {
            Ok(word) => word,
            Err(err) => {
                tracing::debug!(guess = %self.pending, %err, "submission rejected");
                return SubmitOutcome::Rejected(Rejection::NotAWord);
            }
        };

        let feedback = Feedback::evaluate(&word, &self.target);
        tracing::debug!(guess = %word, feedback = %feedback, "guess accepted");

        self.pending.clear();
        self.reveal = Some(Reveal {
            row: GuessRow { word, feedback },
            revealed: 0,
        });
        self.phase = Phase::Evaluating;

        SubmitOutcome::Accepted(feedback)
    }

    /// Flip the next tile of the reveal in flight
    ///
    /// After the last tile, the next call commits the row and leaves
    /// `Evaluating`. Returns `None` when no reveal is running.
    pub fn advance_reveal(&mut self) -> Option<RevealStep> {
        let reveal = self.reveal.as_mut()?;

        if !reveal.is_complete() {
            let position = reveal.revealed;
            let letter = reveal.row.word.char_at(position);
            let status = reveal.row.feedback.statuses()[position];
            self.keyboard.record(letter, status);
            reveal.revealed += 1;
            return Some(RevealStep::Tile { position, status });
        }

        let row = self.reveal.take()?.row;
        let won = row.word == self.target;
        self.rows.push(row);

        self.phase = if won {
            Phase::Won
        } else if self.rows.len() >= self.max_rows {
            Phase::Lost
        } else {
            Phase::Accepting
        };

        match self.phase {
            Phase::Won => tracing::info!(guesses = self.rows.len(), "game won"),
            Phase::Lost => tracing::info!(word = %self.target, "game lost"),
            _ => tracing::debug!(remaining = self.remaining_rows(), "row committed"),
        }

        Some(RevealStep::Finished(self.phase))
    }

    /// Run the reveal in flight to completion
    ///
    /// Returns the phase the session landed in, or `None` if nothing was
    /// being revealed.
    pub fn finish_reveal(&mut self) -> Option<Phase> {
        loop {
            match self.advance_reveal()? {
                RevealStep::Tile { .. } => {}
                RevealStep::Finished(phase) => return Some(phase),
            }
        }
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// `Some(true)` once won, `Some(false)` once lost, `None` while in play
    #[must_use]
    pub const fn outcome(&self) -> Option<bool> {
        match self.phase {
            Phase::Won => Some(true),
            Phase::Lost => Some(false),
            Phase::Accepting | Phase::Evaluating => None,
        }
    }

    /// Committed rows, oldest first
    #[must_use]
    pub fn rows(&self) -> &[GuessRow] {
        &self.rows
    }

    /// Letters typed into the active row
    #[must_use]
    pub fn pending_letters(&self) -> &str {
        &self.pending
    }

    /// Number of active tiles
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub const fn reveal(&self) -> Option<&Reveal> {
        self.reveal.as_ref()
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    #[must_use]
    pub const fn max_rows(&self) -> usize {
        self.max_rows
    }

    /// Rows not yet used by a committed or in-flight guess
    #[must_use]
    pub fn remaining_rows(&self) -> usize {
        let used = self.rows.len() + usize::from(self.reveal.is_some());
        self.max_rows.saturating_sub(used)
    }

    /// The word being guessed
    ///
    /// Front ends should only show it once `phase().is_over()`.
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }
}

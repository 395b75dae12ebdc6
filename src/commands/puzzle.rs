//! Choosing which word a game is played against

use crate::core::Word;
use crate::daily::DaySelector;
use crate::error::DailyError;
use chrono::{Local, NaiveDate};
use rand::prelude::IndexedRandom;

/// Which puzzle to play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PuzzleChoice {
    /// The local calendar day
    #[default]
    Today,
    Date(NaiveDate),
    Day(i64),
    /// Practice game against a random target
    Random,
}

/// A target word, with its day number when it is a daily puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub day: Option<i64>,
    pub target: Word,
}

impl Puzzle {
    #[must_use]
    pub const fn is_practice(&self) -> bool {
        self.day.is_none()
    }
}

/// Resolve a `PuzzleChoice` against the target list
///
/// # Errors
///
/// Returns `DailyError::EmptyTargetList` if `targets` is empty.
pub fn choose_puzzle(
    choice: PuzzleChoice,
    selector: &DaySelector,
    targets: &[Word],
) -> Result<Puzzle, DailyError> {
    let day = match choice {
        PuzzleChoice::Today => selector.day_index(&Local::now()),
        PuzzleChoice::Date(date) => selector.index_of_date(date),
        PuzzleChoice::Day(day) => day,
        PuzzleChoice::Random => {
            return Ok(Puzzle {
                day: None,
                target: random_target(targets)?,
            });
        }
    };

    let target = selector.word_for_day(targets, day)?.clone();
    tracing::debug!(day, "selected daily puzzle");
    Ok(Puzzle {
        day: Some(day),
        target,
    })
}

/// Pick a random target for practice games
///
/// # Errors
///
/// Returns `DailyError::EmptyTargetList` if `targets` is empty.
pub fn random_target(targets: &[Word]) -> Result<Word, DailyError> {
    targets
        .choose(&mut rand::rng())
        .cloned()
        .ok_or(DailyError::EmptyTargetList)
}

//! Today's puzzle lookup

use crate::core::Word;
use crate::daily::DaySelector;
use crate::error::DailyError;
use chrono::{DateTime, NaiveDate, TimeZone};

/// Puzzle details for a given instant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodayInfo {
    pub day: i64,
    pub date: NaiveDate,
    pub word: Word,
}

/// Look up the puzzle in effect at `now`
///
/// # Errors
///
/// Returns `DailyError::EmptyTargetList` if `targets` is empty.
pub fn today_info<Tz: TimeZone>(
    selector: &DaySelector,
    targets: &[Word],
    now: &DateTime<Tz>,
) -> Result<TodayInfo, DailyError> {
    let day = selector.day_index(now);
    let word = selector.word_for_day(targets, day)?.clone();
    Ok(TodayInfo {
        day,
        date: now.date_naive(),
        word,
    })
}

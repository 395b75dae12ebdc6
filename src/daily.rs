//! Daily target selection
//!
//! The day index counts whole calendar days elapsed since a fixed epoch date,
//! taken in the timezone of the instant being asked about. The same calendar
//! day always maps to the same target word, including across DST changes.

use crate::core::Word;
use crate::error::DailyError;
use chrono::{DateTime, Local, NaiveDate, TimeZone};

/// Default epoch: the first puzzle is played on 2 January 2022
#[must_use]
pub fn default_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2022, 1, 2).unwrap_or_default()
}

/// Maps dates to day indices and day indices to target words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySelector {
    epoch: NaiveDate,
}

impl Default for DaySelector {
    fn default() -> Self {
        Self::new(default_epoch())
    }
}

impl DaySelector {
    #[must_use]
    pub const fn new(epoch: NaiveDate) -> Self {
        Self { epoch }
    }

    #[must_use]
    pub const fn epoch(&self) -> NaiveDate {
        self.epoch
    }

    /// Whole days elapsed since the epoch at `now`
    ///
    /// Uses the calendar date of `now` in its own timezone, so every instant
    /// of one local day gets the same index. Instants before the epoch yield
    /// negative indices.
    ///
    /// # Examples
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use wordle_daily::daily::DaySelector;
    ///
    /// let selector = DaySelector::default();
    /// let now = Utc.with_ymd_and_hms(2022, 1, 4, 18, 30, 0).unwrap();
    /// assert_eq!(selector.day_index(&now), 2);
    /// ```
    #[must_use]
    pub fn day_index<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> i64 {
        self.index_of_date(now.date_naive())
    }

    /// Day index for the local calendar day
    #[must_use]
    pub fn today(&self) -> i64 {
        self.day_index(&Local::now())
    }

    /// Day index of a calendar date
    #[must_use]
    pub fn index_of_date(&self, date: NaiveDate) -> i64 {
        (date - self.epoch).num_days()
    }

    /// Calendar date for a day index
    #[must_use]
    pub fn date_of_index(&self, day: i64) -> Option<NaiveDate> {
        self.epoch
            .checked_add_signed(chrono::TimeDelta::try_days(day)?)
    }

    /// Target word for a day index
    ///
    /// Indices wrap around the list, so every day (including days before the
    /// epoch) has a word.
    ///
    /// # Errors
    ///
    /// Returns `DailyError::EmptyTargetList` if `targets` is empty.
    pub fn word_for_day<'w>(&self, targets: &'w [Word], day: i64) -> Result<&'w Word, DailyError> {
        if targets.is_empty() {
            return Err(DailyError::EmptyTargetList);
        }
        let index = day.rem_euclid(targets.len() as i64) as usize;
        Ok(&targets[index])
    }

    /// Target word at `now`
    ///
    /// # Errors
    ///
    /// Returns `DailyError::EmptyTargetList` if `targets` is empty.
    pub fn select<'w, Tz: TimeZone>(
        &self,
        targets: &'w [Word],
        now: &DateTime<Tz>,
    ) -> Result<&'w Word, DailyError> {
        self.word_for_day(targets, self.day_index(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use chrono::Datelike;
    use chrono::{FixedOffset, LocalResult, NaiveDateTime, Utc};

    /// UTC-5 in winter and UTC-4 from 13 March to 5 November, switching on
    /// the date alone
    #[derive(Debug, Clone, Copy)]
    struct Eastern;

    impl Eastern {
        fn offset_on(date: NaiveDate) -> FixedOffset {
            let summer = NaiveDate::from_ymd_opt(date.year(), 3, 13).unwrap()
                ..NaiveDate::from_ymd_opt(date.year(), 11, 6).unwrap();
            let hours = if summer.contains(&date) { -4 } else { -5 };
            FixedOffset::east_opt(hours * 3600).unwrap()
        }
    }

    impl TimeZone for Eastern {
        type Offset = FixedOffset;

        fn from_offset(_: &FixedOffset) -> Self {
            Self
        }

        fn offset_from_local_date(&self, local: &NaiveDate) -> LocalResult<FixedOffset> {
            LocalResult::Single(Self::offset_on(*local))
        }

        fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<FixedOffset> {
            LocalResult::Single(Self::offset_on(local.date()))
        }

        fn offset_from_utc_date(&self, utc: &NaiveDate) -> FixedOffset {
            Self::offset_on(*utc)
        }

        fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> FixedOffset {
            Self::offset_on(utc.date())
        }
    }

    fn targets() -> Vec<Word> {
        words_from_slice(&["cigar", "rebut", "sissy", "humph"])
    }

    #[test]
    fn epoch_day_is_zero() {
        let selector = DaySelector::default();
        let now = Utc.with_ymd_and_hms(2022, 1, 2, 0, 0, 0).unwrap();
        assert_eq!(selector.day_index(&now), 0);

        let late = Utc.with_ymd_and_hms(2022, 1, 2, 23, 59, 59).unwrap();
        assert_eq!(selector.day_index(&late), 0);
    }

    #[test]
    fn day_rolls_over_at_midnight() {
        let selector = DaySelector::default();
        let next = Utc.with_ymd_and_hms(2022, 1, 3, 0, 0, 0).unwrap();
        assert_eq!(selector.day_index(&next), 1);
    }

    #[test]
    fn epoch_is_local_midnight_of_the_given_zone() {
        let selector = DaySelector::default();
        let tz = FixedOffset::east_opt(9 * 3600).unwrap();

        // 08:00 on the epoch day in UTC+9 is still day zero there
        let now = tz.with_ymd_and_hms(2022, 1, 2, 8, 0, 0).unwrap();
        assert_eq!(selector.day_index(&now), 0);
    }

    #[test]
    fn before_epoch_is_negative() {
        let selector = DaySelector::default();
        let now = Utc.with_ymd_and_hms(2022, 1, 1, 12, 0, 0).unwrap();
        assert_eq!(selector.day_index(&now), -1);
    }

    #[test]
    fn same_day_selects_same_word() {
        let selector = DaySelector::default();
        let words = targets();
        let morning = Utc.with_ymd_and_hms(2022, 1, 4, 0, 0, 1).unwrap();
        let evening = Utc.with_ymd_and_hms(2022, 1, 4, 23, 59, 0).unwrap();

        let first = selector.select(&words, &morning).unwrap();
        let second = selector.select(&words, &evening).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.text(), "sissy");
    }

    #[test]
    fn summer_day_keeps_one_index_in_dst_zone() {
        let selector = DaySelector::default();
        let date = NaiveDate::from_ymd_opt(2022, 7, 1).unwrap();
        let early = Eastern.with_ymd_and_hms(2022, 7, 1, 0, 30, 0).unwrap();
        let late = Eastern.with_ymd_and_hms(2022, 7, 1, 23, 30, 0).unwrap();

        assert_eq!(selector.day_index(&early), 180);
        assert_eq!(selector.day_index(&late), 180);
        assert_eq!(selector.index_of_date(date), 180);
    }

    #[test]
    fn day_index_matches_calendar_date() {
        let selector = DaySelector::default();
        let tz = FixedOffset::west_opt(10 * 3600).unwrap();
        let now = tz.with_ymd_and_hms(2023, 3, 1, 23, 0, 0).unwrap();

        // Already 2 March in UTC, still 1 March locally
        assert_eq!(selector.day_index(&now), 423);
        assert_eq!(
            selector.day_index(&now),
            selector.index_of_date(now.date_naive())
        );
    }

    #[test]
    fn today_never_goes_backwards() {
        let selector = DaySelector::default();
        let before = selector.today();
        let after = selector.today();
        assert!((0..=1).contains(&(after - before)));
    }

    #[test]
    fn indices_wrap_around_the_list() {
        let selector = DaySelector::default();
        let words = targets();
        assert_eq!(selector.word_for_day(&words, 4).unwrap().text(), "cigar");
        assert_eq!(selector.word_for_day(&words, -1).unwrap().text(), "humph");
    }

    #[test]
    fn empty_list_is_an_error() {
        let selector = DaySelector::default();
        assert_eq!(
            selector.word_for_day(&[], 0),
            Err(DailyError::EmptyTargetList)
        );
    }

    #[test]
    fn dates_and_indices_agree() {
        let selector = DaySelector::default();
        let date = NaiveDate::from_ymd_opt(2023, 3, 1).unwrap();
        let index = selector.index_of_date(date);
        assert_eq!(index, 423);
        assert_eq!(selector.date_of_index(index), Some(date));
    }
}

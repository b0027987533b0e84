//! Month bucketing and due-date arithmetic.

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A calendar month bucket.
///
/// Orders chronologically and displays as `YYYY-MM`, the form used for
/// transaction month keys. Internally pinned to the first day of the month.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(into = "String", try_from = "String")]
pub struct MonthKey(NaiveDate);

impl MonthKey {
    /// Month bucket containing the given date.
    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        let to_first = Days::new(u64::from(date.day0()));
        Self(date.checked_sub_days(to_first).unwrap_or(date))
    }

    /// Builds a month key from a calendar year and 1-based month number.
    #[must_use]
    pub fn from_ym(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(Self)
    }

    /// Calendar year.
    #[must_use]
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// 1-based month number.
    #[must_use]
    pub fn month(self) -> u32 {
        self.0.month()
    }

    /// First calendar day of the month.
    #[must_use]
    pub const fn first_day(self) -> NaiveDate {
        self.0
    }

    /// Last calendar day of the month (28, 29, 30, or 31).
    #[must_use]
    pub fn last_day(self) -> NaiveDate {
        self.next()
            .0
            .pred_opt()
            .unwrap_or(NaiveDate::MAX)
    }

    /// The following month.
    #[must_use]
    pub fn next(self) -> Self {
        let first = self.0;
        Self(
            first
                .checked_add_months(Months::new(1))
                .unwrap_or(NaiveDate::MAX),
        )
    }
}

impl std::fmt::Display for MonthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

/// Error parsing a `YYYY-MM` month key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid month key: {0:?}")]
pub struct ParseMonthKeyError(pub String);

impl std::str::FromStr for MonthKey {
    type Err = ParseMonthKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseMonthKeyError(s.to_string());
        let (year, month) = s.split_once('-').ok_or_else(err)?;
        let year: i32 = year.parse().map_err(|_| err())?;
        let month: u32 = month.parse().map_err(|_| err())?;
        Self::from_ym(year, month).ok_or_else(err)
    }
}

impl From<MonthKey> for String {
    fn from(month: MonthKey) -> Self {
        month.to_string()
    }
}

impl TryFrom<String> for MonthKey {
    type Error = ParseMonthKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Due date for a payment day within a month.
///
/// Days past the end of the month (a 31st in April, a 29th-31st in most
/// Februaries) and the degenerate day 0 fall back to the last calendar day
/// of the month rather than failing.
#[must_use]
pub fn clamp_payment_day(month: MonthKey, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(month.year(), month.month(), day).unwrap_or_else(|| month.last_day())
}

/// Strict less-than comparison at day granularity.
#[must_use]
pub fn is_past(due_date: NaiveDate, reference: NaiveDate) -> bool {
    due_date < reference
}

/// Finite, restartable iterator over month buckets.
///
/// Yields every month from `start`'s month through `end`'s month inclusive.
/// Callers bound `end` (the billing generator caps open-ended contracts at
/// its forward horizon), so iteration always terminates.
#[derive(Debug, Clone)]
pub struct MonthIter {
    cursor: MonthKey,
    last: MonthKey,
}

impl MonthIter {
    /// Iterates the months between two dates, inclusive on both ends.
    /// Empty when `start` falls in a later month than `end`.
    #[must_use]
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            cursor: MonthKey::of(start),
            last: MonthKey::of(end),
        }
    }
}

impl Iterator for MonthIter {
    type Item = MonthKey;

    fn next(&mut self) -> Option<MonthKey> {
        if self.cursor > self.last {
            return None;
        }
        let current = self.cursor;
        self.cursor = current.next();
        Some(current)
    }
}

impl std::iter::FusedIterator for MonthIter {}

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{PickerError, PickerResult};

/// Earliest year accepted by [`MonthId`].
pub const MIN_YEAR: i32 = 1;
/// Latest year accepted by [`MonthId`].
pub const MAX_YEAR: i32 = 9999;

/// Calendar month identifier (year + month), ordered by calendar order.
///
/// Field order matters: the derived `Ord` compares year first, then month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMonthId", into = "RawMonthId")]
pub struct MonthId {
    year: i32,
    month: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawMonthId {
    year: i32,
    month: u32,
}

impl TryFrom<RawMonthId> for MonthId {
    type Error = PickerError;

    fn try_from(raw: RawMonthId) -> PickerResult<Self> {
        Self::new(raw.year, raw.month)
    }
}

impl From<MonthId> for RawMonthId {
    fn from(month: MonthId) -> Self {
        Self {
            year: month.year,
            month: month.month,
        }
    }
}

impl MonthId {
    /// January of [`MIN_YEAR`].
    pub const EARLIEST: Self = Self {
        year: MIN_YEAR,
        month: 1,
    };

    /// Creates a month identifier; `month` is 1-based.
    pub fn new(year: i32, month: u32) -> PickerResult<Self> {
        if !(1..=12).contains(&month) || !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(PickerError::InvalidMonth { year, month });
        }
        Ok(Self { year, month })
    }

    /// Month containing `date`.
    pub fn from_date(date: impl Datelike) -> PickerResult<Self> {
        Self::new(date.year(), date.month())
    }

    /// Month containing today's date in the local timezone.
    pub fn current() -> PickerResult<Self> {
        Self::from_date(Local::now().date_naive())
    }

    #[must_use]
    pub const fn year(self) -> i32 {
        self.year
    }

    #[must_use]
    pub const fn month(self) -> u32 {
        self.month
    }

    /// Zero-based month count since year 0, used for offset arithmetic.
    const fn ordinal(self) -> i64 {
        self.year as i64 * 12 + (self.month as i64 - 1)
    }

    fn from_ordinal(ordinal: i64) -> Option<Self> {
        let year = i32::try_from(ordinal.div_euclid(12)).ok()?;
        let month = u32::try_from(ordinal.rem_euclid(12) + 1).ok()?;
        Self::new(year, month).ok()
    }

    /// Moves `delta` months forward (or backward when negative).
    ///
    /// Returns `None` when the result leaves the supported year range.
    #[must_use]
    pub fn checked_offset(self, delta: i64) -> Option<Self> {
        Self::from_ordinal(self.ordinal().checked_add(delta)?)
    }

    #[must_use]
    pub fn checked_next(self) -> Option<Self> {
        self.checked_offset(1)
    }

    #[must_use]
    pub fn checked_prev(self) -> Option<Self> {
        self.checked_offset(-1)
    }

    /// Signed number of months from `self` to `other`.
    #[must_use]
    pub const fn months_until(self, other: Self) -> i64 {
        other.ordinal() - self.ordinal()
    }

    /// First day of this month.
    #[must_use]
    pub fn first_day(self) -> NaiveDate {
        // Year and month are range-checked on construction, so this always resolves.
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    #[must_use]
    pub fn days_in_month(self) -> u32 {
        match self.month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            _ if self.first_day().leap_year() => 29,
            _ => 28,
        }
    }

    #[must_use]
    pub fn contains(self, date: impl Datelike) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Formats the first day of the month with a chrono strftime pattern.
    ///
    /// The pattern should have been checked with [`validate_month_format`].
    /// Time-of-day specifiers have nothing to render; those fall back to `YYYY-MM`.
    #[must_use]
    pub fn format(self, pattern: &str) -> String {
        use std::fmt::Write as _;

        let mut caption = String::new();
        if write!(caption, "{}", self.first_day().format(pattern)).is_err() {
            return self.to_string();
        }
        caption
    }
}

/// Rejects strftime patterns chrono cannot render.
pub fn validate_month_format(pattern: &str) -> PickerResult<()> {
    use chrono::format::{Item, StrftimeItems};

    if pattern.trim().is_empty() {
        return Err(PickerError::InvalidConfig(
            "month format must not be empty".to_owned(),
        ));
    }
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(PickerError::InvalidConfig(format!(
            "month format `{pattern}` is not a valid strftime pattern"
        )));
    }
    Ok(())
}

impl fmt::Display for MonthId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthId {
    type Err = PickerError;

    /// Parses `YYYY-MM`.
    fn from_str(input: &str) -> PickerResult<Self> {
        let invalid = || PickerError::InvalidData(format!("expected YYYY-MM, got `{input}`"));
        let (year, month) = input.trim().split_once('-').ok_or_else(invalid)?;
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let month = month.parse::<u32>().map_err(|_| invalid())?;
        Self::new(year, month)
    }
}

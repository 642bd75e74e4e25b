use crate::consts::{
    CENTURY_CYCLE, CONSERVATIVE_DAYS_IN_MONTH, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP,
    GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
};
use crate::{DateError, DateField, RecordKind};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// Checks `value` against the absolute bounds of `field`.
fn check_range(field: DateField, label: RecordKind, value: i32) -> Result<i32, DateError> {
    if (field.min()..=field.max()).contains(&value) {
        Ok(value)
    } else {
        Err(DateError::OutOfRange {
            field,
            label,
            value,
        })
    }
}

/// A year value guaranteed to be in the range `MIN_YEAR..=MAX_YEAR` (1900..=3000)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating it against `MIN_YEAR..=MAX_YEAR`
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` naming `label` if the value is outside the range.
    pub fn new(value: i32, label: RecordKind) -> Result<Self, DateError> {
        let checked = check_range(DateField::Year, label, value)?;
        u16::try_from(checked)
            .ok()
            .and_then(NonZeroU16::new)
            .map(Self)
            .ok_or(DateError::OutOfRange {
                field: DateField::Year,
                label,
                value,
            })
    }

    /// Returns the year value
    #[inline]
    #[allow(clippy::cast_lossless)]
    pub const fn get(self) -> i32 {
        self.0.get() as i32
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// A month value guaranteed to be in the range `MIN_MONTH..=MAX_MONTH` (1..=12)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating it against `MIN_MONTH..=MAX_MONTH`
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` naming `label` if the value is outside the range.
    pub fn new(value: i32, label: RecordKind) -> Result<Self, DateError> {
        let checked = check_range(DateField::Month, label, value)?;
        non_zero_u8(checked)
            .map(Self)
            .ok_or(DateError::OutOfRange {
                field: DateField::Month,
                label,
                value,
            })
    }

    /// Returns the month value
    #[inline]
    #[allow(clippy::cast_lossless)]
    pub const fn get(self) -> i32 {
        self.0.get() as i32
    }

    /// Index into the 1-indexed month tables
    #[inline]
    #[allow(clippy::cast_lossless)]
    const fn index(self) -> usize {
        self.0.get() as usize
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// A day value in the range `MIN_DAY..=MAX_DAY` (1..=31).
///
/// Only the absolute bound is guaranteed; whether the day fits its month
/// is checked by [`max_day`] once the month is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating it against `MIN_DAY..=MAX_DAY`
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` naming `label` if the value is outside the range.
    pub fn new(value: i32, label: RecordKind) -> Result<Self, DateError> {
        let checked = check_range(DateField::Day, label, value)?;
        non_zero_u8(checked)
            .map(Self)
            .ok_or(DateError::OutOfRange {
                field: DateField::Day,
                label,
                value,
            })
    }

    /// Returns the day value
    #[inline]
    #[allow(clippy::cast_lossless)]
    pub const fn get(self) -> i32 {
        self.0.get() as i32
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

fn non_zero_u8(value: i32) -> Option<NonZeroU8> {
    u8::try_from(value).ok().and_then(NonZeroU8::new)
}

// Helper functions

pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Exact number of days in `month` of `year`.
pub const fn days_in_month(year: Year, month: Month) -> i32 {
    if month.get() == FEBRUARY && is_leap_year(year.get()) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month.index()]
    }
}

/// Largest day `month` can have in any year.
pub const fn conservative_days_in_month(month: Month) -> i32 {
    CONSERVATIVE_DAYS_IN_MONTH[month.index()]
}

/// Largest valid day for `month`, exact when the year is known.
pub const fn max_day(year: Option<Year>, month: Month) -> i32 {
    match year {
        Some(year) => days_in_month(year, month),
        None => conservative_days_in_month(month),
    }
}

mod consts;
mod error;
mod field;
mod label;
mod prelude;
mod types;
mod update;

pub use consts::*;
pub use error::{DateError, ErrorKind};
pub use field::{DateField, RawField, parse_field};
pub use label::RecordKind;
pub use types::{Day, Month, Year, conservative_days_in_month, days_in_month, is_leap_year, max_day};
pub use update::{
    ColumnWrite, DateStore, UpdateError, UpdateOutcome, insert_date, merge_for_update, plan_writes,
    update_date,
};

use crate::prelude::*;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A possibly incomplete calendar date, stored as three nullable columns.
///
/// Any subset of the fields may be known. A value with no fields at all means
/// "no date recorded" and is always valid. Construction does not validate;
/// run [`DateParts::validate`] or [`DateParts::validated`] before storing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct DateParts {
    pub year: Option<i32>,
    pub month: Option<i32>,
    pub day: Option<i32>,
}

/// How much of a [`DateParts`] is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    /// Nothing recorded
    #[display(fmt = "unknown")]
    Unknown,
    /// Year only
    #[display(fmt = "year")]
    Year,
    /// Year and month
    #[display(fmt = "month")]
    Month,
    /// Year, month and day
    #[display(fmt = "day")]
    Day,
    /// Any other combination, e.g. a day and month without a year
    #[display(fmt = "partial")]
    Partial,
}

impl DateParts {
    /// The fully empty value
    pub const EMPTY: Self = Self::new(None, None, None);

    /// Builds a value without validating it
    pub const fn new(year: Option<i32>, month: Option<i32>, day: Option<i32>) -> Self {
        Self { year, month, day }
    }

    /// Validates independently optional year, month and day.
    ///
    /// `label` only identifies the record in error messages. On success the
    /// input comes back unchanged; missing fields are never filled in.
    ///
    /// # Errors
    /// - `DateError::OutOfRange` if a present field is outside its own bounds
    /// - `DateError::DayOutOfRangeForMonth` if the day does not fit the month
    ///   (exactly when the year is known, conservatively otherwise)
    /// - `DateError::InvalidCalendarDate` if a complete date is not on the calendar
    pub fn validate(
        year: Option<i32>,
        month: Option<i32>,
        day: Option<i32>,
        label: RecordKind,
    ) -> Result<Self, DateError> {
        let parts = Self::new(year, month, day);
        if parts.is_empty() {
            return Ok(parts);
        }

        let year_typed = year.map(|y| Year::new(y, label)).transpose()?;
        let month_typed = month.map(|m| Month::new(m, label)).transpose()?;
        let day_typed = day.map(|d| Day::new(d, label)).transpose()?;

        if let (Some(m), Some(d)) = (month_typed, day_typed) {
            let max = max_day(year_typed, m);
            if d.get() > max {
                return Err(DateError::DayOutOfRangeForMonth {
                    label,
                    year,
                    month: m.get(),
                    day: d.get(),
                    max_day: max,
                });
            }
        }

        if let (Some(y), Some(m), Some(d)) = (year_typed, month_typed, day_typed) {
            check_calendar(y.get(), m.get(), d.get(), label)?;
        }

        Ok(parts)
    }

    /// Re-validates this value. Validating an already valid value returns it unchanged.
    ///
    /// # Errors
    /// Same as [`DateParts::validate`].
    pub fn validated(&self, label: RecordKind) -> Result<Self, DateError> {
        Self::validate(self.year, self.month, self.day, label)
    }

    /// Parses and validates raw form input, as done when a record is inserted.
    ///
    /// # Errors
    /// Returns `DateError::InvalidFormat` for non-numeric text (checked for all
    /// three fields before any range check), otherwise as [`DateParts::validate`].
    pub fn from_raw<'a>(
        year: impl Into<RawField<'a>>,
        month: impl Into<RawField<'a>>,
        day: impl Into<RawField<'a>>,
        label: RecordKind,
    ) -> Result<Self, DateError> {
        let year = parse_field(DateField::Year, year.into())?;
        let month = parse_field(DateField::Month, month.into())?;
        let day = parse_field(DateField::Day, day.into())?;
        Self::validate(year, month, day, label)
    }

    /// Field-wise merge: each field of `self` if present, else the one from `stored`.
    pub const fn merged_with(&self, stored: &Self) -> Self {
        Self {
            year: or(self.year, stored.year),
            month: or(self.month, stored.month),
            day: or(self.day, stored.day),
        }
    }

    /// Returns the value of `field`
    pub const fn get(&self, field: DateField) -> Option<i32> {
        match field {
            DateField::Year => self.year,
            DateField::Month => self.month,
            DateField::Day => self.day,
        }
    }

    /// True when no field is recorded
    pub const fn is_empty(&self) -> bool {
        self.year.is_none() && self.month.is_none() && self.day.is_none()
    }

    /// True when every field is recorded
    pub const fn is_complete(&self) -> bool {
        self.year.is_some() && self.month.is_some() && self.day.is_some()
    }

    /// Which combination of fields is recorded
    pub const fn precision(&self) -> Precision {
        match (self.year, self.month, self.day) {
            (None, None, None) => Precision::Unknown,
            (Some(_), None, None) => Precision::Year,
            (Some(_), Some(_), None) => Precision::Month,
            (Some(_), Some(_), Some(_)) => Precision::Day,
            _ => Precision::Partial,
        }
    }

    /// Converts to database columns: (year, month, day)
    pub const fn to_columns(&self) -> (Option<i32>, Option<i32>, Option<i32>) {
        (self.year, self.month, self.day)
    }

    /// The calendar date, if every field is recorded and forms a real date.
    pub fn as_naive_date(&self) -> Option<NaiveDate> {
        match (self.year, self.month, self.day) {
            (Some(y), Some(m), Some(d)) => naive_date(y, m, d),
            _ => None,
        }
    }
}

const fn or(preferred: Option<i32>, fallback: Option<i32>) -> Option<i32> {
    match preferred {
        Some(value) => Some(value),
        None => fallback,
    }
}

fn naive_date(year: i32, month: i32, day: i32) -> Option<NaiveDate> {
    let month = u32::try_from(month).ok()?;
    let day = u32::try_from(day).ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Builds the full calendar date, the last step of validating a complete date.
///
/// # Errors
/// Returns `DateError::InvalidCalendarDate` if the triple is not a real date.
pub fn check_calendar(
    year: i32,
    month: i32,
    day: i32,
    label: RecordKind,
) -> Result<NaiveDate, DateError> {
    naive_date(year, month, day).ok_or(DateError::InvalidCalendarDate {
        label,
        year,
        month,
        day,
    })
}

impl From<(Option<i32>, Option<i32>, Option<i32>)> for DateParts {
    fn from((year, month, day): (Option<i32>, Option<i32>, Option<i32>)) -> Self {
        Self::new(year, month, day)
    }
}

impl fmt::Display for DateParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Trailing unknown parts are dropped, inner ones shown as placeholders
        match (self.year, self.month, self.day) {
            (None, None, None) => write!(f, "unknown"),
            (year, None, None) => write_year(f, year),
            (year, Some(month), None) => {
                write_year(f, year)?;
                write!(f, "{DATE_SEPARATOR}{month:02}")
            }
            (year, month, Some(day)) => {
                write_year(f, year)?;
                match month {
                    Some(month) => write!(f, "{DATE_SEPARATOR}{month:02}")?,
                    None => write!(f, "{DATE_SEPARATOR}??")?,
                }
                write!(f, "{DATE_SEPARATOR}{day:02}")
            }
        }
    }
}

fn write_year(f: &mut fmt::Formatter<'_>, year: Option<i32>) -> fmt::Result {
    match year {
        Some(year) => write!(f, "{year:04}"),
        None => write!(f, "????"),
    }
}

/// Orders by year, then month, then day; an absent field sorts after every
/// present one, matching how record listings are sorted.
fn cmp_nulls_last(a: Option<i32>, b: Option<i32>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl PartialOrd for DateParts {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DateParts {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_nulls_last(self.year, other.year)
            .then_with(|| cmp_nulls_last(self.month, other.month))
            .then_with(|| cmp_nulls_last(self.day, other.day))
    }
}

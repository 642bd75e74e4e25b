use crate::{DateField, RecordKind};

/// Reasons a date can be rejected.
///
/// None of these are fatal; each is meant to be shown to whoever typed the
/// date, so every variant carries the record kind, field and value involved.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// A non-blank value that is not a base-10 integer.
    #[error("Invalid {field}: {value:?} is not a whole number")]
    InvalidFormat { field: DateField, value: String },

    /// A field outside its own absolute bounds.
    #[error("Invalid {label} {field}: {value} (must be {min}-{max})", min = .field.min(), max = .field.max())]
    OutOfRange {
        field: DateField,
        label: RecordKind,
        value: i32,
    },

    /// Day past the end of the month. `year` is `None` when the bound was the
    /// conservative one.
    #[error(
        "Invalid {label} day {day} for month {month}{}: month has at most {max_day} days",
        .year.map(|y| format!(" of {y}")).unwrap_or_default()
    )]
    DayOutOfRangeForMonth {
        label: RecordKind,
        year: Option<i32>,
        month: i32,
        day: i32,
        max_day: i32,
    },

    /// Full date rejected by the calendar after the per-field checks passed.
    #[error("Invalid {label} date {year:04}-{month:02}-{day:02}")]
    InvalidCalendarDate {
        label: RecordKind,
        year: i32,
        month: i32,
        day: i32,
    },

    /// No stored record to merge an update against.
    #[error("No {0} record found to update")]
    RecordNotFound(RecordKind),
}

/// Coarse category of a [`DateError`], for callers that only branch on
/// what went wrong rather than where.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Text that is not an integer
    Format,
    /// A value outside its field, month or calendar bounds
    Range,
    /// No stored record to update
    NotFound,
}

impl DateError {
    /// Category of this error
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidFormat { .. } => ErrorKind::Format,
            Self::OutOfRange { .. }
            | Self::DayOutOfRangeForMonth { .. }
            | Self::InvalidCalendarDate { .. } => ErrorKind::Range,
            Self::RecordNotFound(_) => ErrorKind::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_label_field_and_value() {
        let err = DateError::OutOfRange {
            field: DateField::Month,
            label: RecordKind::Appointment,
            value: 13,
        };
        assert_eq!(err.to_string(), "Invalid appointment month: 13 (must be 1-12)");

        let err = DateError::InvalidFormat {
            field: DateField::Year,
            value: "abc".to_owned(),
        };
        assert_eq!(err.to_string(), r#"Invalid year: "abc" is not a whole number"#);

        let err = DateError::RecordNotFound(RecordKind::Diagnosis);
        assert_eq!(err.to_string(), "No diagnosis record found to update");
    }

    #[test]
    fn test_day_message_mentions_year_only_when_known() {
        let err = DateError::DayOutOfRangeForMonth {
            label: RecordKind::Observation,
            year: None,
            month: 4,
            day: 31,
            max_day: 30,
        };
        assert_eq!(
            err.to_string(),
            "Invalid observation day 31 for month 4: month has at most 30 days"
        );

        let err = DateError::DayOutOfRangeForMonth {
            label: RecordKind::Observation,
            year: Some(2023),
            month: 2,
            day: 29,
            max_day: 28,
        };
        assert_eq!(
            err.to_string(),
            "Invalid observation day 29 for month 2 of 2023: month has at most 28 days"
        );
    }

    #[test]
    fn test_kind() {
        let format = DateError::InvalidFormat {
            field: DateField::Day,
            value: "x".to_owned(),
        };
        assert_eq!(format.kind(), ErrorKind::Format);

        let calendar = DateError::InvalidCalendarDate {
            label: RecordKind::Appointment,
            year: 2023,
            month: 2,
            day: 29,
        };
        assert_eq!(calendar.kind(), ErrorKind::Range);

        assert_eq!(
            DateError::RecordNotFound(RecordKind::Appointment).kind(),
            ErrorKind::NotFound
        );
    }
}

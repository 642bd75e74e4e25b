use std::num::IntErrorKind;

use serde::{Deserialize, Serialize};

use crate::{DateError, MAX_DAY, MAX_MONTH, MAX_YEAR, MIN_DAY, MIN_MONTH, MIN_YEAR, prelude::*};

/// One of the three independently optional date columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateField {
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "day")]
    Day,
}

impl DateField {
    /// All fields in column order
    pub const ALL: [Self; 3] = [Self::Year, Self::Month, Self::Day];

    /// Smallest value the field accepts on its own
    pub const fn min(self) -> i32 {
        match self {
            Self::Year => MIN_YEAR,
            Self::Month => MIN_MONTH,
            Self::Day => MIN_DAY,
        }
    }

    /// Largest value the field accepts on its own
    pub const fn max(self) -> i32 {
        match self {
            Self::Year => MAX_YEAR,
            Self::Month => MAX_MONTH,
            Self::Day => MAX_DAY,
        }
    }
}

/// A date field as it arrives from a form or a typed caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RawField<'a> {
    #[default]
    Absent,
    Int(i32),
    Text(&'a str),
}

impl From<i32> for RawField<'_> {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl<'a> From<&'a str> for RawField<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl From<Option<i32>> for RawField<'_> {
    fn from(value: Option<i32>) -> Self {
        value.map_or(Self::Absent, Self::Int)
    }
}

impl<'a> From<Option<&'a str>> for RawField<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or(Self::Absent, Self::Text)
    }
}

/// Normalizes one raw field.
///
/// Blank text counts as absent, so an empty form box means "not given".
/// Integers too large for `i32` saturate to `i32::MAX`/`i32::MIN`, which no
/// field accepts, so validation rejects them as out of range.
///
/// # Errors
/// Returns `DateError::InvalidFormat` if non-blank text is not a base-10 integer.
pub fn parse_field(field: DateField, raw: RawField<'_>) -> Result<Option<i32>, DateError> {
    match raw {
        RawField::Absent => Ok(None),
        RawField::Int(value) => Ok(Some(value)),
        RawField::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            match trimmed.parse::<i32>() {
                Ok(value) => Ok(Some(value)),
                Err(err) => match err.kind() {
                    IntErrorKind::PosOverflow => Ok(Some(i32::MAX)),
                    IntErrorKind::NegOverflow => Ok(Some(i32::MIN)),
                    _ => Err(DateError::InvalidFormat {
                        field,
                        value: text.to_owned(),
                    }),
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_text_is_absent() {
        assert_eq!(parse_field(DateField::Year, "".into()).unwrap(), None);
        assert_eq!(parse_field(DateField::Year, "  ".into()).unwrap(), None);
        assert_eq!(parse_field(DateField::Year, "\t\n".into()).unwrap(), None);
    }

    #[test]
    fn test_absent_stays_absent() {
        assert_eq!(parse_field(DateField::Month, RawField::Absent).unwrap(), None);
        assert_eq!(parse_field(DateField::Month, None::<&str>.into()).unwrap(), None);
        assert_eq!(parse_field(DateField::Month, None::<i32>.into()).unwrap(), None);
    }

    #[test]
    fn test_text_parses_as_integer() {
        assert_eq!(parse_field(DateField::Day, "12".into()).unwrap(), Some(12));
        assert_eq!(parse_field(DateField::Day, " 7 ".into()).unwrap(), Some(7));
        // Range is not this function's concern
        assert_eq!(parse_field(DateField::Day, "-4".into()).unwrap(), Some(-4));
    }

    #[test]
    fn test_integer_passes_through() {
        assert_eq!(parse_field(DateField::Year, 2024.into()).unwrap(), Some(2024));
        assert_eq!(parse_field(DateField::Year, Some(0).into()).unwrap(), Some(0));
    }

    #[test]
    fn test_bad_text_is_invalid_format() {
        let result = parse_field(DateField::Month, "abc".into());
        assert_eq!(
            result,
            Err(DateError::InvalidFormat {
                field: DateField::Month,
                value: "abc".to_owned()
            })
        );

        assert!(matches!(
            parse_field(DateField::Day, "1.5".into()),
            Err(DateError::InvalidFormat { field: DateField::Day, .. })
        ));
        assert!(matches!(
            parse_field(DateField::Year, "+".into()),
            Err(DateError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_oversized_integer_saturates() {
        assert_eq!(
            parse_field(DateField::Year, "99999999999".into()).unwrap(),
            Some(i32::MAX)
        );
        assert_eq!(
            parse_field(DateField::Day, " -99999999999999999999999 ".into()).unwrap(),
            Some(i32::MIN)
        );
    }

    #[test]
    fn test_field_bounds() {
        assert_eq!((DateField::Year.min(), DateField::Year.max()), (1900, 3000));
        assert_eq!((DateField::Month.min(), DateField::Month.max()), (1, 12));
        assert_eq!((DateField::Day.min(), DateField::Day.max()), (1, 31));
        assert_eq!(DateField::Day.to_string(), "day");
    }
}

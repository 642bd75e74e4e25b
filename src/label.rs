use serde::{Deserialize, Serialize};

use crate::{DateField, prelude::*};

/// The kind of record a date belongs to.
///
/// Doubles as the label in error messages and as the source of the
/// table and column names the date is stored under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    #[display(fmt = "appointment")]
    Appointment,
    #[display(fmt = "observation")]
    Observation,
    #[display(fmt = "diagnosis")]
    Diagnosis,
}

impl RecordKind {
    /// Table holding records of this kind
    pub const fn table(self) -> &'static str {
        match self {
            Self::Appointment => "appointment",
            Self::Observation => "observation",
            Self::Diagnosis => "diagnosis",
        }
    }

    /// Column storing `field` for records of this kind
    pub const fn column(self, field: DateField) -> &'static str {
        match (self, field) {
            (Self::Appointment, DateField::Year) => "appoint_year",
            (Self::Appointment, DateField::Month) => "appoint_month",
            (Self::Appointment, DateField::Day) => "appoint_day",
            (Self::Observation, DateField::Year) => "obs_year",
            (Self::Observation, DateField::Month) => "obs_month",
            (Self::Observation, DateField::Day) => "obs_day",
            (Self::Diagnosis, DateField::Year) => "diagn_year",
            (Self::Diagnosis, DateField::Month) => "diagn_month",
            (Self::Diagnosis, DateField::Day) => "diagn_day",
        }
    }
}

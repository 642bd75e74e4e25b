//! Merge-on-update for stored dates.
//!
//! An update may carry only some of the three fields. The supplied fields are
//! merged with the stored ones so the whole date can be validated, but only
//! the supplied fields are written back.

use std::fmt::Debug;

use tracing::{debug, warn};

use crate::{DateError, DateField, DateParts, RawField, RecordKind};

/// A single column assignment for the persistence layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColumnWrite {
    pub column: &'static str,
    pub value: i32,
}

/// Result of [`update_date`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The update carried no date fields; the store was not touched.
    Unchanged,
    /// The merged date validated and the supplied columns were written.
    Updated {
        merged: DateParts,
        written: Vec<ColumnWrite>,
    },
}

/// Error type for [`update_date`].
#[derive(Debug, thiserror::Error)]
pub enum UpdateError<E> {
    /// The merged date was rejected, or there was no record to merge with.
    #[error(transparent)]
    Date(#[from] DateError),

    /// The store failed to read or write.
    #[error("date store failed: {0}")]
    Store(#[source] E),
}

/// Persistence seam for records carrying a date.
///
/// The read and the write are separate calls; stores that must not race
/// other writers should run [`update_date`] inside one transaction.
pub trait DateStore {
    type Id: Debug + ?Sized;
    type Error: std::error::Error + 'static;

    /// Currently stored date of the record, or `None` if there is no such record.
    fn stored_date(&self, kind: RecordKind, id: &Self::Id)
    -> Result<Option<DateParts>, Self::Error>;

    /// Writes exactly `writes`, leaving every other column alone.
    fn write_columns(
        &mut self,
        kind: RecordKind,
        id: &Self::Id,
        writes: &[ColumnWrite],
    ) -> Result<(), Self::Error>;
}

/// Merges the caller's fields over the stored ones and validates the result.
///
/// The merged value is returned for inspection only; callers persist the
/// fields of `incoming`, see [`plan_writes`].
///
/// # Errors
/// Returns `DateError::RecordNotFound` if `stored` is `None`, otherwise any
/// error from [`DateParts::validate`] for the merged date.
pub fn merge_for_update(
    incoming: &DateParts,
    stored: Option<&DateParts>,
    label: RecordKind,
) -> Result<DateParts, DateError> {
    let stored = stored.ok_or(DateError::RecordNotFound(label))?;
    incoming.merged_with(stored).validated(label)
}

/// Column writes for the fields present in `incoming`, in year/month/day order.
pub fn plan_writes(incoming: &DateParts, kind: RecordKind) -> Vec<ColumnWrite> {
    DateField::ALL
        .into_iter()
        .filter_map(|field| {
            incoming.get(field).map(|value| ColumnWrite {
                column: kind.column(field),
                value,
            })
        })
        .collect()
}

/// Parses and validates the date of a new record.
///
/// Returns the validated date and the columns to set; absent fields get no
/// write and stay NULL.
///
/// # Errors
/// Same as [`DateParts::from_raw`].
pub fn insert_date<'a>(
    year: impl Into<RawField<'a>>,
    month: impl Into<RawField<'a>>,
    day: impl Into<RawField<'a>>,
    kind: RecordKind,
) -> Result<(DateParts, Vec<ColumnWrite>), DateError> {
    let date = DateParts::from_raw(year, month, day, kind)?;
    let writes = plan_writes(&date, kind);
    Ok((date, writes))
}

/// Applies a partial date update to one stored record.
///
/// Nothing is written unless the merged date validates.
///
/// # Errors
/// - `UpdateError::Date` with `DateError::RecordNotFound` if the record does not exist
/// - `UpdateError::Date` with a validation error if the merged date is invalid
/// - `UpdateError::Store` if the store fails
pub fn update_date<S: DateStore>(
    store: &mut S,
    kind: RecordKind,
    id: &S::Id,
    incoming: &DateParts,
) -> Result<UpdateOutcome, UpdateError<S::Error>> {
    if incoming.is_empty() {
        debug!(%kind, ?id, "no date fields supplied, skipping update");
        return Ok(UpdateOutcome::Unchanged);
    }

    let stored = store.stored_date(kind, id).map_err(UpdateError::Store)?;
    let merged = match merge_for_update(incoming, stored.as_ref(), kind) {
        Ok(merged) => merged,
        Err(err) => {
            warn!(%kind, ?id, %incoming, error = %err, "rejected date update");
            return Err(err.into());
        }
    };

    let written = plan_writes(incoming, kind);
    store
        .write_columns(kind, id, &written)
        .map_err(UpdateError::Store)?;
    debug!(%kind, ?id, %merged, columns = written.len(), "updated date");

    Ok(UpdateOutcome::Updated { merged, written })
}

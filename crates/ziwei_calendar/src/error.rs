//! Error types for calendar conversions.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors from date validation or lunisolar conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CalendarError {
    /// Malformed or out-of-range date, hour, or lunar field.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The lunar table has no coverage for the requested date.
    #[error("date {date} outside supported range {first}..={last}")]
    UnsupportedDateRange {
        date: NaiveDate,
        first: NaiveDate,
        last: NaiveDate,
    },
    /// The lunar year is outside the table.
    #[error("lunar year {year} outside supported range {first}..={last}")]
    UnsupportedLunarYear { year: i32, first: i32, last: i32 },
}

impl CalendarError {
    /// True for both date-range and lunar-year coverage failures.
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedDateRange { .. } | Self::UnsupportedLunarYear { .. }
        )
    }
}

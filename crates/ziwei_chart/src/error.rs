//! Error types for chart construction.

use thiserror::Error;
use ziwei_calendar::CalendarError;

/// Broad failure category, stable across variants. Used by transports that
/// report a kind tag next to the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidInput,
    UnsupportedDateRange,
    InternalTableLookupFailure,
}

impl ErrorKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidInput => "InvalidInput",
            Self::UnsupportedDateRange => "UnsupportedDateRange",
            Self::InternalTableLookupFailure => "InternalTableLookupFailure",
        }
    }
}

/// Errors from chart construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// Error from date validation or lunisolar conversion.
    #[error("calendar error: {0}")]
    Calendar(#[from] CalendarError),
    /// Malformed chart input (e.g. an unknown gender label).
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// A static table had no entry for a key that should always be covered.
    #[error("table lookup failed: {0}")]
    InternalTableLookupFailure(&'static str),
}

impl ChartError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Calendar(e) if e.is_out_of_range() => ErrorKind::UnsupportedDateRange,
            Self::Calendar(_) | Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::InternalTableLookupFailure(_) => ErrorKind::InternalTableLookupFailure,
        }
    }
}

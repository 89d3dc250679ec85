//! Request-level errors for the bridge.

use thiserror::Error;
use ziwei_chart::{ChartError, ErrorKind};

/// Why a single request line produced an error response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum BridgeError {
    /// The line is not JSON.
    #[error("unparseable request: {0}")]
    Parse(String),
    /// JSON, but missing fields or wrongly typed (e.g. a negative hour).
    #[error("malformed request: {0}")]
    Request(String),
    #[error(transparent)]
    Chart(#[from] ChartError),
}

impl BridgeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(_) | Self::Request(_) => ErrorKind::InvalidInput,
            Self::Chart(e) => e.kind(),
        }
    }
}

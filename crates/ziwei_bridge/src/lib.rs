//! Line-delimited JSON front end for the Zi Wei Dou Shu chart engine.
//!
//! Each input line is a chart request; each non-blank line gets exactly one
//! response line, in input order. Bad requests produce error lines and never
//! stop the loop.

pub mod error;
pub mod handler;
pub mod protocol;
pub mod server;

pub use error::BridgeError;
pub use handler::handle_line;
pub use protocol::{ChartRequest, ChartResponse, ChartResult, LunarDto, PalaceDto};
pub use server::{ServeStats, serve};

use ziwei_chart::ChartConfig;

/// Options for a bridge run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BridgeConfig {
    pub chart: ChartConfig,
    /// Add the 12-palace wheel to each result.
    pub emit_palaces: bool,
}

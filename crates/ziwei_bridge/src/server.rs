//! The request loop: read lines, answer each in order.

use std::io::{self, BufRead, Write};

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::BridgeConfig;
use crate::error::BridgeError;
use crate::handler::handle_line;
use crate::protocol::ChartResponse;

/// Counts from one `serve` run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServeStats {
    /// Non-blank lines answered.
    pub requests: u64,
    /// Of those, lines answered with an error.
    pub failures: u64,
}

/// Answer every non-blank line of `reader` with one JSON line on `writer`,
/// flushing after each. Returns at end of input; only I/O errors stop the
/// loop early. A line that is not UTF-8 gets an error response with a
/// `null` id.
pub fn serve<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
    config: &BridgeConfig,
) -> io::Result<ServeStats> {
    let mut stats = ServeStats::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let response = match std::str::from_utf8(&buf) {
            Ok(text) => {
                let line = text.trim();
                if line.is_empty() {
                    continue;
                }
                debug!(line, "received");
                handle_line(line, config)
            }
            Err(e) => {
                let err = BridgeError::Parse(format!("request is not UTF-8: {e}"));
                warn!(error = %err, "request rejected");
                ChartResponse::failure(Value::Null, &err)
            }
        };

        stats.requests += 1;
        if response.is_error() {
            stats.failures += 1;
        }

        let json = serde_json::to_string(&response).map_err(io::Error::other)?;
        writeln!(writer, "{json}")?;
        writer.flush()?;
    }

    info!(
        requests = stats.requests,
        failures = stats.failures,
        "input closed"
    );
    Ok(stats)
}

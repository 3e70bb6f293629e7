//! Line-oriented request loop: one JSON-RPC request per input line, one JSON
//! line per answer, flushed after every write.

use std::io::{BufRead, Write};

use serde_json::{Value, json};
use tracing::{debug, info, warn};

use crate::normalize::normalize_value;
use crate::options::Options;
use crate::transport::Transport;
use crate::{Error, Result};

/// JSON-RPC "Internal error" code used for every synthetic error reply.
pub const INTERNAL_ERROR: i64 = -32603;

/// Per-run counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RelayStats {
    /// Lines answered with a normalized upstream response
    pub forwarded: u64,
    /// Lines answered with a synthetic error
    pub failed: u64,
}

/// Output line produced for one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Normalized upstream response
    Response(String),
    /// Synthetic JSON-RPC error
    Error(String),
}

impl Reply {
    pub fn line(&self) -> &str {
        match self {
            Reply::Response(s) | Reply::Error(s) => s,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Reply::Error(_))
    }
}

pub struct Relay<T> {
    transport: T,
    options: Options,
}

impl<T: Transport> Relay<T> {
    pub fn new(transport: T, options: Options) -> Self {
        Self { transport, options }
    }

    /// Reads `input` until end of stream, answering every line on `output`.
    ///
    /// Per-request failures become error replies and the loop continues;
    /// only I/O errors on `input` or `output` end it early.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> Result<RelayStats> {
        let mut stats = RelayStats::default();
        let mut buf = Vec::new();
        info!(upstream = %self.transport.describe(), "relay ready");

        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            let reply = self.handle_line(&buf);
            if reply.is_error() {
                stats.failed += 1;
            } else {
                stats.forwarded += 1;
            }
            debug!("send: {}", reply.line());
            output.write_all(reply.line().as_bytes())?;
            output.write_all(b"\n")?;
            output.flush()?;
        }

        info!(
            forwarded = stats.forwarded,
            failed = stats.failed,
            "input closed, relay shutting down"
        );
        Ok(stats)
    }

    /// Produces the output line for one raw input line.
    pub fn handle_line(&self, raw: &[u8]) -> Reply {
        // Scoped to this line: a failure never reports an earlier request's id.
        let mut request_id = Value::Null;
        match self.exchange(raw, &mut request_id) {
            Ok(line) => Reply::Response(line),
            Err(e) => {
                warn!(id = %request_id, error = %e, "request failed");
                Reply::Error(error_response(request_id, &e).to_string())
            }
        }
    }

    fn exchange(&self, raw: &[u8], request_id: &mut Value) -> Result<String> {
        let text = String::from_utf8(raw.to_vec())?;
        let text = text.trim();
        debug!("recv: {}", text);

        let request: Value = serde_json::from_str(text)?;
        if let Some(id) = request.get("id") {
            *request_id = id.clone();
        }

        let response = self.transport.forward(&request)?;
        let fixed = normalize_value(&response, &self.options);
        Ok(serde_json::to_string(&fixed)?)
    }
}

/// Builds the JSON-RPC error object emitted when a request cannot be served.
pub fn error_response(id: Value, err: &Error) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": {
            "code": INTERNAL_ERROR,
            "message": format!("Internal error: {err}"),
        }
    })
}

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("input is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "http")]
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// Upstream answered with a non-2xx status.
    #[error("HTTP Error {code}: {reason}")]
    Status { code: u16, reason: String },
}

pub type Result<T> = core::result::Result<T, Error>;

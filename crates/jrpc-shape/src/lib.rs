//! Normalizing JSON-RPC relay.
//!
//! Reads JSON-RPC requests line by line, forwards each one to an HTTP
//! endpoint and rewrites the shape of the reply so that a consumer expecting
//! conventional JSON can read it: singleton arrays become scalars, and empty
//! objects/arrays take the form the field's role calls for.
//!
//! ```
//! use serde_json::json;
//!
//! let fixed = jrpc_shape::normalize(&json!({"id": ["7"], "result": {"tools": []}}));
//! assert_eq!(fixed, json!({"id": "7", "result": {"tools": {}}}));
//! ```

pub mod error;
pub mod normalize;
pub mod options;
pub mod relay;
pub mod transport;

pub use crate::error::{Error, Result};
pub use crate::options::{FieldRule, Options, OverrideTable};
pub use crate::relay::{Relay, RelayStats, Reply};
pub use crate::transport::{DEFAULT_ENDPOINT, Transport};

#[cfg(feature = "http")]
pub use crate::transport::HttpTransport;

use serde_json::Value;

/// Normalizes `value` with the default override table.
pub fn normalize(value: &Value) -> Value {
    normalize::normalize_value(value, &Options::default())
}

pub fn normalize_with(value: &Value, options: &Options) -> Value {
    normalize::normalize_value(value, options)
}

/// Parses `s` as JSON, normalizes it and serializes it back to compact JSON.
pub fn normalize_str(s: &str, options: &Options) -> Result<String> {
    let v: Value = serde_json::from_str(s)?;
    Ok(serde_json::to_string(&normalize_with(&v, options))?)
}

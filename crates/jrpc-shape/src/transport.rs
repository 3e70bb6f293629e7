use serde_json::Value;

use crate::Result;

/// Endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/mcp/messages";

/// Delivers one JSON-RPC request upstream and returns the decoded reply.
pub trait Transport {
    fn forward(&self, request: &Value) -> Result<Value>;

    /// Human-readable destination, used in log events.
    fn describe(&self) -> String {
        String::from("transport")
    }
}

impl<T: Transport + ?Sized> Transport for &T {
    fn forward(&self, request: &Value) -> Result<Value> {
        (**self).forward(request)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

#[cfg(feature = "http")]
pub use http::HttpTransport;

#[cfg(feature = "http")]
mod http {
    use reqwest::blocking::Client;
    use reqwest::header::CONTENT_TYPE;
    use serde_json::Value;

    use super::Transport;
    use crate::{Error, Result};

    /// Blocking HTTP POST transport. Each request gets a fresh connection and
    /// exactly one attempt.
    #[derive(Debug, Clone)]
    pub struct HttpTransport {
        client: Client,
        endpoint: String,
    }

    impl HttpTransport {
        pub fn new(endpoint: impl Into<String>) -> Result<Self> {
            let client = Client::builder().pool_max_idle_per_host(0).build()?;
            Ok(Self {
                client,
                endpoint: endpoint.into(),
            })
        }

        pub fn endpoint(&self) -> &str {
            &self.endpoint
        }
    }

    impl Transport for HttpTransport {
        fn forward(&self, request: &Value) -> Result<Value> {
            let body = serde_json::to_vec(request)?;
            let response = self
                .client
                .post(&self.endpoint)
                .header(CONTENT_TYPE, "application/json")
                .body(body)
                .send()?;

            let status = response.status();
            if !status.is_success() {
                return Err(Error::Status {
                    code: status.as_u16(),
                    reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
                });
            }

            let bytes = response.bytes()?;
            Ok(serde_json::from_slice(&bytes)?)
        }

        fn describe(&self) -> String {
            self.endpoint().to_string()
        }
    }
}

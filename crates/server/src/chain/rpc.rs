//! JSON-RPC transport abstraction.
//!
//! The transport is a trait so the contract client can be exercised against
//! an in-memory double; the production implementation posts JSON-RPC 2.0
//! envelopes over HTTP with `reqwest`.

use async_trait::async_trait;
use serde_json::{Value, json};
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum RpcError {
    #[error("Unsupported contract method: {0}")]
    UnsupportedMethod(String),

    #[error("Contract call timed out")]
    Timeout,

    #[error("RPC endpoint returned an error ({code}): {message}")]
    Remote { code: i64, message: String },

    #[error("RPC transport failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed RPC response: {0}")]
    InvalidResponse(String),
}

/// A single-request JSON-RPC transport.
#[async_trait]
pub trait RpcTransport: Send + Sync {
    async fn request(&self, method: &str, params: Value) -> Result<Value, RpcError>;
}

/// HTTP JSON-RPC transport. Owns its connection pool; constructed once at
/// startup and shared.
pub struct HttpTransport {
    client: reqwest::Client,
    url: Url,
}

impl HttpTransport {
    pub fn new(url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }
}

#[async_trait]
impl RpcTransport for HttpTransport {
    async fn request(&self, method: &str, params: Value) -> Result<Value, RpcError> {
        let body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        });

        let response = self
            .client
            .post(self.url.clone())
            .json(&body)
            .send()
            .await?
            .error_for_status()?;
        let payload: Value = response.json().await?;

        if let Some(err) = payload.get("error") {
            return Err(RpcError::Remote {
                code: err.get("code").and_then(Value::as_i64).unwrap_or(0),
                message: err
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown error")
                    .to_string(),
            });
        }

        payload
            .get("result")
            .cloned()
            .ok_or_else(|| RpcError::InvalidResponse("response carries no result".to_string()))
    }
}

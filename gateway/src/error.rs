// gateway/src/error.rs

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("backend returned {status} for {path}")]
    Status { status: u16, path: String },
    #[error("failed to decode response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("gateway configuration error: {0}")]
    Config(String),
}

impl GatewayError {
    /// Every gateway failure is recoverable: the caller surfaces a
    /// notification and the triggering action can be retried as-is.
    pub fn is_recoverable(&self) -> bool {
        true
    }
}

pub type GatewayResult<T> = Result<T, GatewayError>;

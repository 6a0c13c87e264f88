use async_trait::async_trait;
use thiserror::Error;

use crate::request::{GenerateRequest, GenerateResponse};

#[derive(Error, Debug)]
pub enum ClientError {
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Other(String),
}

/// Seam between the gateway and whatever actually talks to the model.
///
/// Constructed by the composition root and handed to [`crate::Gateway`], so
/// tests can substitute a scripted implementation.
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, ClientError>;
}

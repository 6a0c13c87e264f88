//! Analysis gateway: turns documents and settings into model requests and
//! model responses into validated results.

mod client;
mod gateway;
mod prompt;
mod request;

#[cfg(feature = "http")]
mod gemini;

pub use client::{ClientError, ModelClient};
pub use gateway::{
    AnalysisRequest, ComparisonRequest, ContractSource, Gateway, GatewayConfig, GatewayError,
    MAX_COMPARISON_DOCUMENTS, MIN_COMPARISON_DOCUMENTS,
};
pub use prompt::{ANALYSIS_FAILED, CHAT_FALLBACK, COMPARISON_FAILED, EMPTY_ANSWER};
pub use request::{Content, GenerateRequest, GenerateResponse, Part, Speaker};

#[cfg(feature = "http")]
pub use gemini::{DEFAULT_BASE_URL, GeminiClient};

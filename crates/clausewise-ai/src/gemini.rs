//! HTTP transport for the Gemini `generateContent` endpoint.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error};

use crate::client::{ClientError, ModelClient};
use crate::request::{Content, GenerateRequest, GenerateResponse, Part, Speaker};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Gemini REST client. One instance is built at startup and shared.
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GeminiClient {
    /// Create a client for `base_url` (no trailing slash needed).
    ///
    /// `timeout` bounds each whole request; an expired request surfaces as
    /// [`ClientError::Http`].
    pub fn new(api_key: String, base_url: String, timeout: Duration) -> Result<Self, ClientError> {
        if api_key.trim().is_empty() {
            return Err(ClientError::Other("Gemini API key is required".to_string()));
        }
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/{}:generateContent", self.base_url, model)
    }
}

#[async_trait]
impl ModelClient for GeminiClient {
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, ClientError> {
        let url = self.endpoint(&request.model);
        let body = WireRequest::from(request);

        debug!(url = %url, turns = body.contents.len(), "sending generateContent");
        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            error!(status = status.as_u16(), "Gemini API error");
            return Err(ClientError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let raw = resp.text().await?;
        let parsed: WireResponse = serde_json::from_str(&raw)?;
        Ok(parsed.into())
    }
}

// ── Wire format ──

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WireRequest {
    contents: Vec<WireContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<WireContent>,
    generation_config: WireGenerationConfig,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WireGenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<Value>,
}

#[derive(Serialize, Deserialize)]
struct WireContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<WirePart>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WirePart {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<WireBlob>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireBlob {
    mime_type: String,
    data: String,
}

#[derive(Deserialize)]
struct WireResponse {
    #[serde(default)]
    candidates: Vec<WireCandidate>,
}

#[derive(Deserialize)]
struct WireCandidate {
    content: Option<WireContent>,
}

impl From<&Part> for WirePart {
    fn from(part: &Part) -> Self {
        match part {
            Part::Document { data, media_type } => Self {
                text: None,
                inline_data: Some(WireBlob {
                    mime_type: media_type.clone(),
                    data: data.clone(),
                }),
            },
            text_like => Self {
                text: text_like.text().map(str::to_string),
                inline_data: None,
            },
        }
    }
}

impl From<&Content> for WireContent {
    fn from(content: &Content) -> Self {
        let role = match content.speaker {
            Speaker::User => "user",
            Speaker::Model => "model",
        };
        Self {
            role: Some(role.to_string()),
            parts: content.parts.iter().map(WirePart::from).collect(),
        }
    }
}

impl From<&GenerateRequest> for WireRequest {
    fn from(request: &GenerateRequest) -> Self {
        let system_instruction = request.system_instruction.as_ref().map(|text| WireContent {
            role: None,
            parts: vec![WirePart {
                text: Some(text.clone()),
                inline_data: None,
            }],
        });
        Self {
            contents: request.contents.iter().map(WireContent::from).collect(),
            system_instruction,
            generation_config: WireGenerationConfig {
                temperature: request.temperature,
                response_mime_type: request
                    .response_schema
                    .as_ref()
                    .map(|_| "application/json"),
                response_schema: request.response_schema.clone(),
            },
        }
    }
}

impl From<WireResponse> for GenerateResponse {
    /// Joins the text parts of the first candidate.
    fn from(response: WireResponse) -> Self {
        let text = response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<String>()
            })
            .filter(|t| !t.is_empty());
        GenerateResponse { text }
    }
}

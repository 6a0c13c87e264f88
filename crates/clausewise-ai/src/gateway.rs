//! The three operations the analysis service performs for us: single-document
//! audit, multi-document comparison, and follow-up questions.

use std::sync::Arc;

use clausewise_core::schema::response;
use clausewise_core::{
    ArbitrationSeat, ChatMessage, ComparisonResult, ContractAnalysis, EncodedDocument,
    Jurisdiction,
};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{info, warn};

use crate::client::{ClientError, ModelClient};
use crate::prompt;
use crate::request::{Content, GenerateRequest, Part};

pub const MIN_COMPARISON_DOCUMENTS: usize = 2;
pub const MAX_COMPARISON_DOCUMENTS: usize = 4;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("no contract content provided")]
    NoContent,
    #[error("comparison needs 2 to 4 documents, got {0}")]
    DocumentCount(usize),
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error("model returned no text")]
    EmptyResponse,
    #[error("response does not match the declared schema: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Model selection and sampling settings.
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayConfig {
    /// Model used for audits and comparisons.
    pub analysis_model: String,
    /// Model used for follow-up questions.
    pub chat_model: String,
    pub chat_temperature: f32,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            analysis_model: "gemini-3-pro-preview".to_string(),
            chat_model: "gemini-3-flash-preview".to_string(),
            chat_temperature: 0.7,
        }
    }
}

/// What the single-document audit reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractSource {
    Text(String),
    Document(EncodedDocument),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub jurisdiction: Jurisdiction,
    pub seat: ArbitrationSeat,
    pub source: ContractSource,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRequest {
    pub jurisdiction: Jurisdiction,
    /// Free-text audit focus; blank means a general audit.
    pub query: Option<String>,
    /// In slot order.
    pub documents: Vec<EncodedDocument>,
}

#[derive(Clone)]
pub struct Gateway {
    client: Arc<dyn ModelClient>,
    config: GatewayConfig,
}

impl Gateway {
    pub fn new(client: Arc<dyn ModelClient>, config: GatewayConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Build the outbound audit request without sending it.
    pub fn audit_request(&self, request: &AnalysisRequest) -> Result<GenerateRequest, GatewayError> {
        let content = match &request.source {
            ContractSource::Document(doc) => Part::document(doc),
            ContractSource::Text(text) if !text.trim().is_empty() => {
                Part::Text(prompt::contract_text(text))
            }
            ContractSource::Text(_) => return Err(GatewayError::NoContent),
        };
        let instruction = prompt::audit_instruction(request.jurisdiction, request.seat);

        Ok(GenerateRequest {
            model: self.config.analysis_model.clone(),
            contents: vec![Content::user(vec![Part::Instruction(instruction), content])],
            system_instruction: None,
            temperature: None,
            response_schema: Some(response::contract_analysis_schema()),
        })
    }

    /// Audit one contract. No retry: failures go back to the caller.
    pub async fn audit(&self, request: &AnalysisRequest) -> Result<ContractAnalysis, GatewayError> {
        let outbound = self.audit_request(request)?;
        info!(
            model = %outbound.model,
            jurisdiction = %request.jurisdiction,
            seat = %request.seat,
            "requesting contract audit"
        );
        let analysis: ContractAnalysis = self.structured(&outbound).await?;
        info!(
            title = %analysis.contract_title,
            risk = analysis.overall_risk_score,
            exposures = analysis.exposures.len(),
            "audit complete"
        );
        Ok(analysis)
    }

    /// Build the outbound comparison request without sending it.
    ///
    /// Callers gate on document count before getting here; the check is
    /// repeated so a bad request never reaches the service.
    pub fn comparison_request(
        &self,
        request: &ComparisonRequest,
    ) -> Result<GenerateRequest, GatewayError> {
        let count = request.documents.len();
        if !(MIN_COMPARISON_DOCUMENTS..=MAX_COMPARISON_DOCUMENTS).contains(&count) {
            return Err(GatewayError::DocumentCount(count));
        }
        let query = request
            .query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty());

        let mut parts = Vec::with_capacity(1 + 2 * count);
        parts.push(Part::Instruction(prompt::comparison_instruction(
            count,
            request.jurisdiction,
            query,
        )));
        for (index, doc) in request.documents.iter().enumerate() {
            parts.push(Part::Separator(prompt::document_separator(index, &doc.name)));
            parts.push(Part::document(doc));
        }

        Ok(GenerateRequest {
            model: self.config.analysis_model.clone(),
            contents: vec![Content::user(parts)],
            system_instruction: None,
            temperature: None,
            response_schema: Some(response::comparison_schema()),
        })
    }

    pub async fn compare(
        &self,
        request: &ComparisonRequest,
    ) -> Result<ComparisonResult, GatewayError> {
        let outbound = self.comparison_request(request)?;
        info!(
            model = %outbound.model,
            documents = request.documents.len(),
            jurisdiction = %request.jurisdiction,
            "requesting comparison"
        );
        let result: ComparisonResult = self.structured(&outbound).await?;
        info!(
            errors = result.spotted_errors.len(),
            alerts = result.conflict_alerts.len(),
            "comparison complete"
        );
        Ok(result)
    }

    /// Build the outbound request for a follow-up question. `history` is
    /// replayed in order before the new question.
    pub fn question_request(
        &self,
        question: &str,
        history: &[ChatMessage],
        context: Option<&ContractAnalysis>,
    ) -> GenerateRequest {
        let mut contents: Vec<Content> = history.iter().map(Content::from_message).collect();
        contents.push(Content::user(vec![Part::Text(question.to_string())]));

        GenerateRequest {
            model: self.config.chat_model.clone(),
            contents,
            system_instruction: Some(prompt::chat_system_prompt(context)),
            temperature: Some(self.config.chat_temperature),
            response_schema: None,
        }
    }

    /// Answer a follow-up question. Never fails: a transport error becomes an
    /// apology so the transcript always gains a reply.
    pub async fn ask(
        &self,
        question: &str,
        history: &[ChatMessage],
        context: Option<&ContractAnalysis>,
    ) -> String {
        let outbound = self.question_request(question, history, context);
        info!(
            model = %outbound.model,
            turns = outbound.contents.len(),
            grounded = context.is_some(),
            "asking follow-up question"
        );
        match self.client.generate(&outbound).await {
            Ok(response) => response
                .text
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| prompt::EMPTY_ANSWER.to_string()),
            Err(e) => {
                warn!(error = %e, "follow-up question failed");
                prompt::CHAT_FALLBACK.to_string()
            }
        }
    }

    async fn structured<T: DeserializeOwned>(
        &self,
        outbound: &GenerateRequest,
    ) -> Result<T, GatewayError> {
        let response = self.client.generate(outbound).await?;
        let text = response.text.ok_or(GatewayError::EmptyResponse)?;
        serde_json::from_str(text.trim()).map_err(|e| {
            let raw: String = text.chars().take(200).collect();
            warn!(error = %e, raw = %raw, "response failed schema validation");
            GatewayError::Malformed(e)
        })
    }
}

use clausewise_ai::{
    ANALYSIS_FAILED, AnalysisRequest, COMPARISON_FAILED, ComparisonRequest, Gateway,
};
use clausewise_core::{ChatMessage, ComparisonResult, ContractAnalysis, Jurisdiction};
use tracing::warn;

use crate::workflow::Ticket;

/// An outbound call produced by a submission, not yet sent.
#[derive(Debug, Clone)]
pub enum Effect {
    Audit {
        ticket: Ticket,
        request: AnalysisRequest,
    },
    Compare {
        ticket: Ticket,
        request: ComparisonRequest,
    },
    Ask {
        ticket: Ticket,
        question: String,
        /// Transcript before the question was appended.
        history: Vec<ChatMessage>,
        context: Option<ContractAnalysis>,
    },
}

/// A comparison result together with what it was run against, so later
/// edits to the slots or settings do not relabel it.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedComparison {
    pub document_count: usize,
    pub jurisdiction: Jurisdiction,
    pub result: ComparisonResult,
}

/// The settled result of an [`Effect`]. Errors are already reduced to the
/// message shown to the user.
#[derive(Debug, Clone)]
pub enum Outcome {
    Audit {
        ticket: Ticket,
        result: Result<ContractAnalysis, String>,
    },
    Compare {
        ticket: Ticket,
        result: Result<CompletedComparison, String>,
    },
    Answer {
        ticket: Ticket,
        text: String,
    },
}

impl Effect {
    pub fn ticket(&self) -> Ticket {
        match self {
            Self::Audit { ticket, .. } | Self::Compare { ticket, .. } | Self::Ask { ticket, .. } => {
                *ticket
            }
        }
    }

    pub async fn run(self, gateway: &Gateway) -> Outcome {
        match self {
            Self::Audit { ticket, request } => {
                let result = gateway.audit(&request).await.map_err(|e| {
                    warn!(error = %e, "audit failed");
                    ANALYSIS_FAILED.to_string()
                });
                Outcome::Audit { ticket, result }
            }
            Self::Compare { ticket, request } => {
                let result = gateway
                    .compare(&request)
                    .await
                    .map(|result| CompletedComparison {
                        document_count: request.documents.len(),
                        jurisdiction: request.jurisdiction,
                        result,
                    })
                    .map_err(|e| {
                        warn!(error = %e, "comparison failed");
                        COMPARISON_FAILED.to_string()
                    });
                Outcome::Compare { ticket, result }
            }
            Self::Ask {
                ticket,
                question,
                history,
                context,
            } => {
                let text = gateway.ask(&question, &history, context.as_ref()).await;
                Outcome::Answer { ticket, text }
            }
        }
    }
}

impl Outcome {
    pub fn ticket(&self) -> Ticket {
        match self {
            Self::Audit { ticket, .. } | Self::Compare { ticket, .. } | Self::Answer { ticket, .. } => {
                *ticket
            }
        }
    }
}

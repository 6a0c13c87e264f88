pub mod analysis;
pub mod chat;
pub mod clauses;
pub mod document;
pub mod options;
pub mod schema;

pub use analysis::{
    ComparisonResult, ContractAnalysis, CrossContractExposure, ExposurePoint, Finding,
    PartyExposure, RiskLevel, Severity, SpottedError, SuggestedImprovement,
};
pub use chat::{ChatMessage, Role};
pub use clauses::{ClauseCategory, ClauseDetail};
pub use document::{EncodeError, EncodedDocument};
pub use options::{ArbitrationSeat, Jurisdiction, ParseOptionError};

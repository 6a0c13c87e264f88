//! Structured results returned by the analysis service.
//!
//! Field names follow the camelCase wire names of the declared response
//! schemas (see [`crate::schema`]). Every field is required: a response that
//! omits one fails to deserialize and is treated as a failed request.

use serde::{Deserialize, Deserializer, Serialize};

/// Clause- or finding-level risk, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 4] = [Self::Low, Self::Medium, Self::High, Self::Critical];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

/// Severity of an error spotted during a cross-document audit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Minor,
    Major,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minor => "Minor",
            Self::Major => "Major",
            Self::Critical => "Critical",
        }
    }
}

/// Single-document audit result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractAnalysis {
    pub contract_title: String,
    pub jurisdiction: String,
    /// Risk, not safety: 0 is benign, 100 is maximally risky.
    #[serde(deserialize_with = "risk_score")]
    pub overall_risk_score: f64,
    pub summary: String,
    pub buyer_exposure_summary: String,
    pub seller_exposure_summary: String,
    /// Kept in the order the service ranked them.
    pub exposures: Vec<ExposurePoint>,
    pub missing_clauses: Vec<String>,
}

/// One clause-level finding inside a [`ContractAnalysis`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExposurePoint {
    pub clause_title: String,
    pub original_text: String,
    pub risk_level: RiskLevel,
    pub impact_on_buyer: String,
    pub impact_on_seller: String,
    pub suggested_revision: String,
    pub explanation: String,
}

/// Multi-document comparison and error audit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub summary: String,
    pub spotted_errors: Vec<SpottedError>,
    pub suggested_improvements: Vec<SuggestedImprovement>,
    pub cross_contract_exposures: Vec<CrossContractExposure>,
    pub holistic_exposure_for_parties: Vec<PartyExposure>,
    pub conflict_alerts: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpottedError {
    pub location: String,
    pub description: String,
    pub severity: Severity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedImprovement {
    pub original_clause: String,
    pub suggested_change: String,
    pub benefit: String,
}

/// How each compared document fares on one exposure category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossContractExposure {
    pub category: String,
    /// Document name or party label judged most favourable.
    pub winner: String,
    pub recommendation: String,
    pub findings: Vec<Finding>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    pub contract_name: String,
    pub risk_level: RiskLevel,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartyExposure {
    pub party: String,
    pub exposure_level: String,
    pub critical_warning: String,
}

fn risk_score<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let score = f64::deserialize(deserializer)?;
    if !score.is_finite() || !(0.0..=100.0).contains(&score) {
        return Err(serde::de::Error::custom(format!(
            "overallRiskScore {score} outside 0..=100"
        )));
    }
    Ok(score)
}

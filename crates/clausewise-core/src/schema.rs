/// Response schemas declared to the analysis service.
///
/// Expressed in the OpenAPI subset the Gemini `responseSchema` field accepts.
/// Field names must stay in sync with the serde names in [`crate::analysis`].
pub mod response {
    use serde_json::{Value, json};

    fn string() -> Value {
        json!({ "type": "STRING" })
    }

    fn string_enum(values: &[&str]) -> Value {
        json!({ "type": "STRING", "enum": values })
    }

    fn array_of(items: Value) -> Value {
        json!({ "type": "ARRAY", "items": items })
    }

    /// An object whose every listed property is required.
    fn object(properties: &[(&str, Value)]) -> Value {
        let required: Vec<&str> = properties.iter().map(|(name, _)| *name).collect();
        let properties: serde_json::Map<String, Value> = properties
            .iter()
            .map(|(name, schema)| (name.to_string(), schema.clone()))
            .collect();
        json!({ "type": "OBJECT", "properties": properties, "required": required })
    }

    fn risk_level() -> Value {
        string_enum(&["Low", "Medium", "High", "Critical"])
    }

    /// Schema for a single-document audit (`ContractAnalysis`).
    pub fn contract_analysis_schema() -> Value {
        let exposure = object(&[
            ("clauseTitle", string()),
            ("originalText", string()),
            ("riskLevel", risk_level()),
            ("impactOnBuyer", string()),
            ("impactOnSeller", string()),
            ("suggestedRevision", string()),
            ("explanation", string()),
        ]);
        object(&[
            ("contractTitle", string()),
            ("jurisdiction", string()),
            ("overallRiskScore", json!({ "type": "NUMBER" })),
            ("summary", string()),
            ("buyerExposureSummary", string()),
            ("sellerExposureSummary", string()),
            ("exposures", array_of(exposure)),
            ("missingClauses", array_of(string())),
        ])
    }

    /// Schema for a multi-document comparison (`ComparisonResult`).
    pub fn comparison_schema() -> Value {
        let spotted_error = object(&[
            ("location", string()),
            ("description", string()),
            ("severity", string_enum(&["Minor", "Major", "Critical"])),
        ]);
        let improvement = object(&[
            ("originalClause", string()),
            ("suggestedChange", string()),
            ("benefit", string()),
        ]);
        let finding = object(&[
            ("contractName", string()),
            ("riskLevel", risk_level()),
            ("summary", string()),
        ]);
        let exposure = object(&[
            ("category", string()),
            ("winner", string()),
            ("recommendation", string()),
            ("findings", array_of(finding)),
        ]);
        let party = object(&[
            ("party", string()),
            ("exposureLevel", string()),
            ("criticalWarning", string()),
        ]);
        object(&[
            ("summary", string()),
            ("spottedErrors", array_of(spotted_error)),
            ("suggestedImprovements", array_of(improvement)),
            ("crossContractExposures", array_of(exposure)),
            ("holisticExposureForParties", array_of(party)),
            ("conflictAlerts", array_of(string())),
        ])
    }
}

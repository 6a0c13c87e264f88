//! Read-only projections of [`SessionStore`] for rendering.
//!
//! Nothing here is stored: the safety score and risk histogram are derived
//! on every call.

use std::collections::BTreeMap;

use clausewise_core::{
    ChatMessage, ClauseDetail, ComparisonResult, ContractAnalysis, ExposurePoint, Jurisdiction,
    RiskLevel,
};

use crate::store::SessionStore;
use crate::workflow::{Phase, Workflow};

/// `100 - risk`, clamped to the score range.
pub fn safety_score(overall_risk_score: f64) -> f64 {
    (100.0 - overall_risk_score).clamp(0.0, 100.0)
}

/// Count of exposures per risk level. Levels with no exposures are absent.
pub fn risk_histogram(exposures: &[ExposurePoint]) -> BTreeMap<RiskLevel, usize> {
    let mut counts = BTreeMap::new();
    for exposure in exposures {
        *counts.entry(exposure.risk_level).or_insert(0) += 1;
    }
    counts
}

/// What a workflow panel shows.
#[derive(Debug, Clone, PartialEq)]
pub enum Panel<'a, V> {
    Empty,
    Loading,
    Error(&'a str),
    Ready(V),
}

impl<'a, V> Panel<'a, V> {
    fn project<T>(workflow: &'a Workflow<T>, ready: impl FnOnce(&'a T) -> V) -> Self {
        match workflow.phase() {
            Phase::Idle => Self::Empty,
            Phase::Submitting => Self::Loading,
            Phase::Failed(message) => Self::Error(message),
            Phase::Succeeded(value) => Self::Ready(ready(value)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView<'a> {
    pub title: &'a str,
    pub jurisdiction: &'a str,
    pub risk_score: f64,
    pub safety_score: f64,
    pub summary: &'a str,
    pub buyer_exposure: &'a str,
    pub seller_exposure: &'a str,
    pub histogram: BTreeMap<RiskLevel, usize>,
    pub exposures: &'a [ExposurePoint],
    pub missing_clauses: &'a [String],
}

impl<'a> DashboardView<'a> {
    pub fn new(analysis: &'a ContractAnalysis) -> Self {
        Self {
            title: &analysis.contract_title,
            jurisdiction: &analysis.jurisdiction,
            risk_score: analysis.overall_risk_score,
            safety_score: safety_score(analysis.overall_risk_score),
            summary: &analysis.summary,
            buyer_exposure: &analysis.buyer_exposure_summary,
            seller_exposure: &analysis.seller_exposure_summary,
            histogram: risk_histogram(&analysis.exposures),
            exposures: &analysis.exposures,
            missing_clauses: &analysis.missing_clauses,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonReportView<'a> {
    pub document_count: usize,
    pub jurisdiction: Jurisdiction,
    pub result: &'a ComparisonResult,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatView<'a> {
    pub context_label: String,
    pub messages: &'a [ChatMessage],
    pub awaiting_answer: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LibraryView {
    pub entries: Vec<&'static ClauseDetail>,
    pub selected: Option<&'static ClauseDetail>,
}

pub fn dashboard(store: &SessionStore) -> Panel<'_, DashboardView<'_>> {
    Panel::project(&store.audit, DashboardView::new)
}

/// Count and jurisdiction come from the request that produced the result,
/// not from the current inputs.
pub fn comparison_report(store: &SessionStore) -> Panel<'_, ComparisonReportView<'_>> {
    Panel::project(&store.comparison, |done| ComparisonReportView {
        document_count: done.document_count,
        jurisdiction: done.jurisdiction,
        result: &done.result,
    })
}

pub fn chat(store: &SessionStore) -> ChatView<'_> {
    let context_label = match store.audit.result() {
        Some(analysis) => format!("Context: {}", analysis.contract_title),
        None => "General Guidance Mode".to_string(),
    };
    ChatView {
        context_label,
        messages: &store.chat.messages,
        awaiting_answer: store.chat.workflow.is_submitting(),
    }
}

pub fn library(store: &SessionStore) -> LibraryView {
    LibraryView {
        entries: store.library.entries(),
        selected: store.library.selected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::{CompletedComparison, Outcome};
    use crate::intent::{Field, Intent};
    use crate::workflow::WorkflowKind;

    fn exposure(level: RiskLevel) -> ExposurePoint {
        serde_json::from_value(serde_json::json!({
            "clauseTitle": "t", "originalText": "o", "riskLevel": level.as_str(),
            "impactOnBuyer": "b", "impactOnSeller": "s", "suggestedRevision": "r",
            "explanation": "e"
        }))
        .unwrap()
    }

    fn analysis(score: f64, levels: &[RiskLevel]) -> ContractAnalysis {
        ContractAnalysis {
            contract_title: "Coal Supply Agreement".into(),
            jurisdiction: "Singapore".into(),
            overall_risk_score: score,
            summary: "s".into(),
            buyer_exposure_summary: "b".into(),
            seller_exposure_summary: "s".into(),
            exposures: levels.iter().copied().map(exposure).collect(),
            missing_clauses: vec!["Sanctions".into()],
        }
    }

    fn audited(result: Result<ContractAnalysis, String>) -> SessionStore {
        let mut store = SessionStore::default();
        store.handle(Intent::SetField(Field::ContractText("terms".into()))).unwrap();
        let ticket = store.handle(Intent::Submit(WorkflowKind::Audit)).unwrap().unwrap().ticket();
        store.apply(Outcome::Audit { ticket, result });
        store
    }

    #[test]
    fn safety_is_inverse_of_risk() {
        assert_eq!(safety_score(37.0), 63.0);
        assert_eq!(safety_score(0.0), 100.0);
        assert_eq!(safety_score(100.0), 0.0);
    }

    #[test]
    fn histogram_counts_present_levels_only() {
        use RiskLevel::*;
        let counts = risk_histogram(&[Critical, High, High, Low].map(exposure));
        assert_eq!(counts.get(&Critical), Some(&1));
        assert_eq!(counts.get(&High), Some(&2));
        assert_eq!(counts.get(&Low), Some(&1));
        assert_eq!(counts.get(&Medium), None);
        assert_eq!(counts.keys().copied().collect::<Vec<_>>(), vec![Low, High, Critical]);
    }

    #[test]
    fn dashboard_follows_audit_phase() {
        assert_eq!(dashboard(&SessionStore::default()), Panel::Empty);

        let failed = audited(Err("Analysis failed.".into()));
        assert_eq!(dashboard(&failed), Panel::Error("Analysis failed."));

        let done = audited(Ok(analysis(37.0, &[RiskLevel::Medium])));
        let Panel::Ready(view) = dashboard(&done) else {
            panic!("expected ready dashboard");
        };
        assert_eq!(view.title, "Coal Supply Agreement");
        assert_eq!(view.safety_score, 63.0);
        assert_eq!(view.histogram.get(&RiskLevel::Medium), Some(&1));
        assert_eq!(view.missing_clauses, ["Sanctions".to_string()]);
    }

    #[test]
    fn dashboard_loading_while_submitting() {
        let mut store = SessionStore::default();
        store.handle(Intent::SetField(Field::ContractText("terms".into()))).unwrap();
        store.handle(Intent::Submit(WorkflowKind::Audit)).unwrap();
        assert_eq!(dashboard(&store), Panel::Loading);
        assert_eq!(comparison_report(&store), Panel::Empty);
    }

    #[test]
    fn report_keeps_labels_of_its_request() {
        let mut store = SessionStore::default();
        let docs = ["a.pdf", "b.pdf", "c.pdf"]
            .map(|n| clausewise_core::EncodedDocument::from_bytes(n, "application/pdf", b"x"));
        store.handle(Intent::SetField(Field::Jurisdiction(Jurisdiction::Germany))).unwrap();
        store.handle(Intent::BulkUpload(docs.to_vec())).unwrap();
        let ticket = store
            .handle(Intent::Submit(WorkflowKind::Comparison))
            .unwrap()
            .unwrap()
            .ticket();
        let result: ComparisonResult = serde_json::from_value(serde_json::json!({
            "summary": "s", "spottedErrors": [], "suggestedImprovements": [],
            "crossContractExposures": [], "holisticExposureForParties": [],
            "conflictAlerts": []
        }))
        .unwrap();
        store.apply(Outcome::Compare {
            ticket,
            result: Ok(CompletedComparison {
                document_count: 3,
                jurisdiction: Jurisdiction::Germany,
                result,
            }),
        });

        store.handle(Intent::RemoveSlot(0)).unwrap();
        store.handle(Intent::SetField(Field::Jurisdiction(Jurisdiction::India))).unwrap();
        let Panel::Ready(report) = comparison_report(&store) else {
            panic!("expected ready report");
        };
        assert_eq!(report.document_count, 3);
        assert_eq!(report.jurisdiction, Jurisdiction::Germany);
    }

    #[test]
    fn chat_label_reflects_context() {
        assert_eq!(chat(&SessionStore::default()).context_label, "General Guidance Mode");
        let store = audited(Ok(analysis(10.0, &[])));
        assert_eq!(chat(&store).context_label, "Context: Coal Supply Agreement");
    }

    #[test]
    fn library_view_defaults() {
        let view = library(&SessionStore::default());
        assert_eq!(view.entries.len(), clausewise_core::clauses::all().len());
        assert_eq!(view.selected.map(|c| c.id), Some("rbct-1"));
    }
}

use clausewise_ai::{
    AnalysisRequest, ComparisonRequest, ContractSource, MIN_COMPARISON_DOCUMENTS,
};
use clausewise_core::{
    ArbitrationSeat, ChatMessage, ClauseCategory, ClauseDetail, ContractAnalysis,
    EncodedDocument, Jurisdiction, clauses,
};
use tracing::{debug, info, warn};

use crate::effect::{CompletedComparison, Effect, Outcome};
use crate::error::SessionError;
use crate::intent::{Field, Intent, UploadTarget};
use crate::workflow::{Workflow, WorkflowKind};

pub const SLOT_COUNT: usize = 4;

/// Selections shared by the audit and comparison workflows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    pub jurisdiction: Jurisdiction,
    pub seat: ArbitrationSeat,
}

/// Inputs of the single-document audit.
#[derive(Debug, Clone, Default)]
pub struct AuditInput {
    pub text: String,
    pub document: Option<EncodedDocument>,
}

impl AuditInput {
    /// The content that would be sent. A document wins over pasted text.
    fn source(&self) -> Option<ContractSource> {
        match &self.document {
            Some(doc) => Some(ContractSource::Document(doc.clone())),
            None if !self.text.trim().is_empty() => Some(ContractSource::Text(self.text.clone())),
            None => None,
        }
    }
}

/// Inputs of the multi-document comparison: four fixed, independently
/// nullable slots and an optional audit instruction.
#[derive(Debug, Clone, Default)]
pub struct ComparisonInput {
    slots: [Option<EncodedDocument>; SLOT_COUNT],
    pub query: String,
}

impl ComparisonInput {
    pub fn slots(&self) -> &[Option<EncodedDocument>; SLOT_COUNT] {
        &self.slots
    }

    pub fn set_slot(&mut self, index: usize, doc: EncodedDocument) -> Result<(), SessionError> {
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(SessionError::SlotOutOfRange(index))?;
        *slot = Some(doc);
        Ok(())
    }

    pub fn clear_slot(&mut self, index: usize) -> Result<(), SessionError> {
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(SessionError::SlotOutOfRange(index))?;
        *slot = None;
        Ok(())
    }

    /// Replace all slots with `docs` in order. Slots past the last document
    /// are emptied; documents past the fourth are dropped.
    pub fn bulk_set(&mut self, docs: Vec<EncodedDocument>) {
        if docs.len() > SLOT_COUNT {
            debug!(received = docs.len(), kept = SLOT_COUNT, "dropping extra documents");
        }
        let mut docs = docs.into_iter();
        for slot in &mut self.slots {
            *slot = docs.next();
        }
    }

    /// Occupied slots in slot order.
    pub fn documents(&self) -> impl Iterator<Item = &EncodedDocument> {
        self.slots.iter().flatten()
    }

    pub fn occupied(&self) -> usize {
        self.documents().count()
    }
}

#[derive(Debug, Clone)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub workflow: Workflow<()>,
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            messages: Vec::new(),
            workflow: Workflow::new(WorkflowKind::Chat),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LibraryState {
    pub search: String,
    pub category: Option<ClauseCategory>,
    pub selected: Option<&'static ClauseDetail>,
}

impl Default for LibraryState {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: None,
            selected: clauses::default_selection(),
        }
    }
}

impl LibraryState {
    pub fn entries(&self) -> Vec<&'static ClauseDetail> {
        clauses::filter(&self.search, self.category)
    }
}

/// In-memory state of one user session.
#[derive(Debug, Clone)]
pub struct SessionStore {
    pub settings: Settings,
    pub audit_input: AuditInput,
    pub audit: Workflow<ContractAnalysis>,
    pub comparison_input: ComparisonInput,
    pub comparison: Workflow<CompletedComparison>,
    pub chat: ChatState,
    pub library: LibraryState,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl SessionStore {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            audit_input: AuditInput::default(),
            audit: Workflow::new(WorkflowKind::Audit),
            comparison_input: ComparisonInput::default(),
            comparison: Workflow::new(WorkflowKind::Comparison),
            chat: ChatState::default(),
            library: LibraryState::default(),
        }
    }

    /// Apply an intent. Submissions that should reach the service come back
    /// as an [`Effect`]; `Ok(None)` means nothing needs to be sent.
    pub fn handle(&mut self, intent: Intent) -> Result<Option<Effect>, SessionError> {
        match intent {
            Intent::Upload { target, document } => {
                if !document.is_accepted_type() {
                    return Err(SessionError::UnsupportedFileType {
                        name: document.name,
                        media_type: document.media_type,
                    });
                }
                match target {
                    UploadTarget::Audit => {
                        self.audit_input.document = Some(document);
                        self.audit_input.text.clear();
                    }
                    UploadTarget::Slot(index) => self.comparison_input.set_slot(index, document)?,
                }
            }
            Intent::BulkUpload(documents) => {
                if let Some(bad) = documents.iter().take(SLOT_COUNT).find(|d| !d.is_accepted_type()) {
                    return Err(SessionError::UnsupportedFileType {
                        name: bad.name.clone(),
                        media_type: bad.media_type.clone(),
                    });
                }
                self.comparison_input.bulk_set(documents);
            }
            Intent::RemoveSlot(index) => self.comparison_input.clear_slot(index)?,
            Intent::SetField(field) => self.set_field(field),
            Intent::Submit(WorkflowKind::Audit) => return self.submit_audit(),
            Intent::Submit(WorkflowKind::Comparison) => return self.submit_comparison(),
            Intent::Submit(WorkflowKind::Chat) => return Err(SessionError::ChatNotSubmittable),
            Intent::Reset(kind) => self.reset(kind),
            Intent::SendMessage(text) => return Ok(self.send_message(text)),
            Intent::ClearChat => self.reset(WorkflowKind::Chat),
            Intent::SelectClause(id) => {
                let clause = clauses::find(&id).ok_or(SessionError::UnknownClause(id))?;
                self.library.selected = Some(clause);
            }
            Intent::FilterClauses { search, category } => {
                self.library.search = search;
                self.library.category = category;
            }
        }
        Ok(None)
    }

    /// Seed the audit with a previously saved result so chat can use it as
    /// context.
    pub fn restore_audit(&mut self, analysis: ContractAnalysis) {
        self.audit.restore(analysis);
    }

    /// Fold a finished request back in. Returns `false` when the outcome was
    /// stale and has been dropped.
    pub fn apply(&mut self, outcome: Outcome) -> bool {
        let ticket = outcome.ticket();
        let applied = match outcome {
            Outcome::Audit { ticket, result } => self.audit.settle(ticket, result),
            Outcome::Compare { ticket, result } => self.comparison.settle(ticket, result),
            Outcome::Answer { ticket, text } => {
                let applied = self.chat.workflow.settle(ticket, Ok(()));
                if applied {
                    self.chat.messages.push(ChatMessage::assistant(text));
                }
                applied
            }
        };
        if !applied {
            warn!(
                workflow = %ticket.kind,
                generation = ticket.generation,
                "dropping stale response"
            );
        }
        applied
    }

    fn set_field(&mut self, field: Field) {
        match field {
            Field::Jurisdiction(j) => self.settings.jurisdiction = j,
            Field::ArbitrationSeat(s) => self.settings.seat = s,
            Field::ContractText(text) => self.audit_input.text = text,
            Field::ComparisonQuery(query) => self.comparison_input.query = query,
        }
    }

    fn submit_audit(&mut self) -> Result<Option<Effect>, SessionError> {
        let source = self.audit_input.source().ok_or(SessionError::NoContent)?;
        let Some(ticket) = self.audit.begin() else {
            debug!("audit already in flight");
            return Ok(None);
        };
        info!(generation = ticket.generation, "audit submitted");
        Ok(Some(Effect::Audit {
            ticket,
            request: AnalysisRequest {
                jurisdiction: self.settings.jurisdiction,
                seat: self.settings.seat,
                source,
            },
        }))
    }

    fn submit_comparison(&mut self) -> Result<Option<Effect>, SessionError> {
        let occupied = self.comparison_input.occupied();
        if occupied < MIN_COMPARISON_DOCUMENTS {
            return Err(SessionError::TooFewDocuments(occupied));
        }
        let query = self.comparison_input.query.trim();
        let request = ComparisonRequest {
            jurisdiction: self.settings.jurisdiction,
            query: (!query.is_empty()).then(|| query.to_string()),
            documents: self.comparison_input.documents().cloned().collect(),
        };
        let Some(ticket) = self.comparison.begin() else {
            debug!("comparison already in flight");
            return Ok(None);
        };
        info!(generation = ticket.generation, documents = occupied, "comparison submitted");
        Ok(Some(Effect::Compare { ticket, request }))
    }

    fn send_message(&mut self, text: String) -> Option<Effect> {
        if text.trim().is_empty() {
            return None;
        }
        let ticket = self.chat.workflow.begin()?;
        let history = self.chat.messages.clone();
        self.chat.messages.push(ChatMessage::user(text.clone()));
        Some(Effect::Ask {
            ticket,
            question: text,
            history,
            context: self.audit.result().cloned(),
        })
    }

    fn reset(&mut self, kind: WorkflowKind) {
        match kind {
            WorkflowKind::Audit => {
                self.audit.reset();
                self.audit_input = AuditInput::default();
            }
            WorkflowKind::Comparison => {
                self.comparison.reset();
                self.comparison_input = ComparisonInput::default();
            }
            WorkflowKind::Chat => {
                self.chat.workflow.reset();
                self.chat.messages.clear();
            }
        }
        info!(workflow = %kind, "workflow reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::Phase;
    use clausewise_core::Role;

    fn pdf(name: &str) -> EncodedDocument {
        EncodedDocument::from_bytes(name, "application/pdf", name.as_bytes())
    }

    fn analysis() -> ContractAnalysis {
        serde_json::from_value(serde_json::json!({
            "contractTitle": "Offtake Agreement", "jurisdiction": "UK (English Common Law)",
            "overallRiskScore": 20, "summary": "", "buyerExposureSummary": "",
            "sellerExposureSummary": "", "exposures": [], "missingClauses": []
        }))
        .unwrap()
    }

    #[test]
    fn slots_always_four() {
        let mut input = ComparisonInput::default();
        assert_eq!(input.slots().len(), SLOT_COUNT);
        assert!(matches!(input.set_slot(4, pdf("x")), Err(SessionError::SlotOutOfRange(4))));
        input.bulk_set((0..6).map(|i| pdf(&format!("{i}.pdf"))).collect());
        assert_eq!(input.slots().len(), SLOT_COUNT);
        let names: Vec<_> = input.documents().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["0.pdf", "1.pdf", "2.pdf", "3.pdf"]);
    }

    #[test]
    fn bulk_set_never_leaves_more_than_k() {
        let mut input = ComparisonInput::default();
        input.bulk_set(vec![pdf("a"), pdf("b"), pdf("c"), pdf("d")]);
        input.bulk_set(vec![pdf("e")]);
        assert_eq!(input.occupied(), 1);
        assert_eq!(input.slots()[0].as_ref().map(|d| d.name.as_str()), Some("e"));
        assert!(input.slots()[1..].iter().all(Option::is_none));
    }

    #[test]
    fn slot_set_and_clear_are_independent() {
        let mut store = SessionStore::default();
        for (i, name) in ["a", "b", "c"].iter().enumerate() {
            store
                .handle(Intent::Upload { target: UploadTarget::Slot(i), document: pdf(name) })
                .unwrap();
        }
        store.handle(Intent::RemoveSlot(1)).unwrap();
        let slots = store.comparison_input.slots();
        assert!(slots[0].is_some() && slots[1].is_none() && slots[2].is_some() && slots[3].is_none());
        assert!(matches!(store.handle(Intent::RemoveSlot(9)), Err(SessionError::SlotOutOfRange(9))));
    }

    #[test]
    fn comparison_needs_two_documents() {
        let mut store = SessionStore::default();
        let err = store.handle(Intent::Submit(WorkflowKind::Comparison)).unwrap_err();
        assert!(matches!(err, SessionError::TooFewDocuments(0)));

        store
            .handle(Intent::Upload { target: UploadTarget::Slot(2), document: pdf("only") })
            .unwrap();
        let err = store.handle(Intent::Submit(WorkflowKind::Comparison)).unwrap_err();
        assert!(matches!(err, SessionError::TooFewDocuments(1)));
        assert_eq!(store.comparison.phase(), &Phase::Idle);
    }

    #[test]
    fn comparison_sends_occupied_slots_in_order() {
        let mut store = SessionStore::default();
        store.handle(Intent::Upload { target: UploadTarget::Slot(3), document: pdf("last") }).unwrap();
        store.handle(Intent::Upload { target: UploadTarget::Slot(1), document: pdf("first") }).unwrap();
        store.handle(Intent::SetField(Field::ComparisonQuery("  ".into()))).unwrap();

        match store.handle(Intent::Submit(WorkflowKind::Comparison)).unwrap() {
            Some(Effect::Compare { request, .. }) => {
                let names: Vec<_> = request.documents.iter().map(|d| d.name.as_str()).collect();
                assert_eq!(names, vec!["first", "last"]);
                assert_eq!(request.query, None);
            }
            other => panic!("expected comparison effect, got {other:?}"),
        }
    }

    #[test]
    fn audit_without_content_is_blocked() {
        let mut store = SessionStore::default();
        store.handle(Intent::SetField(Field::ContractText(" \n ".into()))).unwrap();
        let err = store.handle(Intent::Submit(WorkflowKind::Audit)).unwrap_err();
        assert!(matches!(err, SessionError::NoContent));
        assert_eq!(store.audit.phase(), &Phase::Idle);
    }

    #[test]
    fn uploading_document_clears_pasted_text() {
        let mut store = SessionStore::default();
        store.handle(Intent::SetField(Field::ContractText("clause 1".into()))).unwrap();
        store.handle(Intent::Upload { target: UploadTarget::Audit, document: pdf("msa.pdf") }).unwrap();
        assert!(store.audit_input.text.is_empty());
    }

    #[test]
    fn forced_text_loses_to_document() {
        let mut store = SessionStore::default();
        store.handle(Intent::Upload { target: UploadTarget::Audit, document: pdf("msa.pdf") }).unwrap();
        store.handle(Intent::SetField(Field::ContractText("typed later".into()))).unwrap();
        match store.handle(Intent::Submit(WorkflowKind::Audit)).unwrap() {
            Some(Effect::Audit { request, .. }) => {
                assert!(matches!(request.source, ContractSource::Document(ref d) if d.name == "msa.pdf"));
                assert_eq!(request.jurisdiction, Jurisdiction::India);
            }
            other => panic!("expected audit effect, got {other:?}"),
        }
    }

    #[test]
    fn unsupported_upload_rejected() {
        let mut store = SessionStore::default();
        let png = EncodedDocument::from_bytes("scan.png", "image/png", b"\x89PNG");
        let err = store
            .handle(Intent::Upload { target: UploadTarget::Audit, document: png.clone() })
            .unwrap_err();
        assert!(matches!(err, SessionError::UnsupportedFileType { .. }));
        assert!(store.audit_input.document.is_none());
        assert!(store.handle(Intent::BulkUpload(vec![pdf("a"), png])).is_err());
        assert_eq!(store.comparison_input.occupied(), 0);
    }

    #[test]
    fn second_submit_is_a_no_op() {
        let mut store = SessionStore::default();
        store.handle(Intent::SetField(Field::ContractText("terms".into()))).unwrap();
        let first = store.handle(Intent::Submit(WorkflowKind::Audit)).unwrap();
        assert!(first.is_some());
        assert!(store.handle(Intent::Submit(WorkflowKind::Audit)).unwrap().is_none());

        let ticket = first.unwrap().ticket();
        assert!(store.apply(Outcome::Audit { ticket, result: Ok(analysis()) }));
        assert_eq!(store.audit.result().map(|a| a.contract_title.as_str()), Some("Offtake Agreement"));
    }

    #[test]
    fn reset_discards_inputs_and_late_results() {
        let mut store = SessionStore::default();
        store.handle(Intent::BulkUpload(vec![pdf("a"), pdf("b")])).unwrap();
        store.handle(Intent::SetField(Field::ComparisonQuery("indemnity".into()))).unwrap();
        let effect = store.handle(Intent::Submit(WorkflowKind::Comparison)).unwrap().unwrap();

        store.handle(Intent::Reset(WorkflowKind::Comparison)).unwrap();
        assert_eq!(store.comparison.phase(), &Phase::Idle);
        assert_eq!(store.comparison_input.occupied(), 0);
        assert!(store.comparison_input.query.is_empty());

        let late = Outcome::Compare { ticket: effect.ticket(), result: Err("late".into()) };
        assert!(!store.apply(late));
        assert_eq!(store.comparison.phase(), &Phase::Idle);
    }

    /// Drive the audit into `phase`, returning the ticket of its last request.
    fn audit_in(phase: &str) -> (SessionStore, Option<crate::workflow::Ticket>) {
        let mut store = SessionStore::default();
        store.handle(Intent::Upload { target: UploadTarget::Audit, document: pdf("msa.pdf") }).unwrap();
        store.handle(Intent::SetField(Field::ContractText("typed after upload".into()))).unwrap();
        if phase == "idle" {
            return (store, None);
        }
        let ticket = store.handle(Intent::Submit(WorkflowKind::Audit)).unwrap().unwrap().ticket();
        match phase {
            "succeeded" => assert!(store.apply(Outcome::Audit { ticket, result: Ok(analysis()) })),
            "failed" => assert!(store.apply(Outcome::Audit { ticket, result: Err("Analysis failed.".into()) })),
            _ => {}
        }
        (store, Some(ticket))
    }

    #[test]
    fn audit_reset_from_every_phase_clears_inputs() {
        for phase in ["idle", "submitting", "succeeded", "failed"] {
            let (mut store, ticket) = audit_in(phase);
            store.handle(Intent::Reset(WorkflowKind::Audit)).unwrap();

            assert_eq!(store.audit.phase(), &Phase::Idle, "from {phase}");
            assert!(store.audit_input.document.is_none(), "from {phase}");
            assert!(store.audit_input.text.is_empty(), "from {phase}");
            if let Some(ticket) = ticket {
                let late = Outcome::Audit { ticket, result: Ok(analysis()) };
                assert!(!store.apply(late), "from {phase}");
                assert_eq!(store.audit.phase(), &Phase::Idle, "from {phase}");
            }
        }
    }

    #[test]
    fn second_comparison_submit_sends_nothing() {
        let mut store = SessionStore::default();
        store.handle(Intent::BulkUpload(vec![pdf("a"), pdf("b")])).unwrap();
        let first = store.handle(Intent::Submit(WorkflowKind::Comparison)).unwrap().unwrap();
        assert!(store.handle(Intent::Submit(WorkflowKind::Comparison)).unwrap().is_none());

        // The in-flight request keeps its claim.
        assert!(store.apply(Outcome::Compare { ticket: first.ticket(), result: Err("x".into()) }));
        assert_eq!(store.comparison.error(), Some("x"));
    }

    #[test]
    fn failure_scoped_to_one_workflow() {
        let mut store = SessionStore::default();
        store.handle(Intent::SetField(Field::ContractText("terms".into()))).unwrap();
        store.handle(Intent::BulkUpload(vec![pdf("a"), pdf("b")])).unwrap();
        let audit = store.handle(Intent::Submit(WorkflowKind::Audit)).unwrap().unwrap();
        let compare = store.handle(Intent::Submit(WorkflowKind::Comparison)).unwrap().unwrap();

        store.apply(Outcome::Audit { ticket: audit.ticket(), result: Err("Analysis failed.".into()) });
        assert_eq!(store.audit.error(), Some("Analysis failed."));
        assert!(store.comparison.is_submitting());
        assert!(store.apply(Outcome::Compare {
            ticket: compare.ticket(),
            result: Err("Comparison failed.".into()),
        }));
        assert_eq!(store.audit.error(), Some("Analysis failed."));
    }

    #[test]
    fn chat_appends_user_turn_then_answer() {
        let mut store = SessionStore::default();
        assert!(store.handle(Intent::SendMessage("   ".into())).unwrap().is_none());

        let effect = store.handle(Intent::SendMessage("What is WIBON?".into())).unwrap().unwrap();
        assert_eq!(store.chat.messages.len(), 1);
        assert!(store.handle(Intent::SendMessage("again".into())).unwrap().is_none());
        assert_eq!(store.chat.messages.len(), 1);

        match &effect {
            Effect::Ask { history, question, context, .. } => {
                assert!(history.is_empty());
                assert_eq!(question, "What is WIBON?");
                assert!(context.is_none());
            }
            other => panic!("expected ask effect, got {other:?}"),
        }
        assert!(store.apply(Outcome::Answer { ticket: effect.ticket(), text: "Whether in berth or not.".into() }));
        let roles: Vec<_> = store.chat.messages.iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::User, Role::Assistant]);
    }

    #[test]
    fn chat_uses_audit_result_as_context() {
        let mut store = SessionStore::default();
        store.handle(Intent::SetField(Field::ContractText("terms".into()))).unwrap();
        let audit = store.handle(Intent::Submit(WorkflowKind::Audit)).unwrap().unwrap();
        store.apply(Outcome::Audit { ticket: audit.ticket(), result: Ok(analysis()) });

        match store.handle(Intent::SendMessage("Summarise".into())).unwrap() {
            Some(Effect::Ask { context: Some(ctx), .. }) => {
                assert_eq!(ctx.contract_title, "Offtake Agreement")
            }
            other => panic!("expected grounded ask, got {other:?}"),
        }
    }

    #[test]
    fn restored_audit_grounds_chat() {
        let mut store = SessionStore::default();
        store.restore_audit(analysis());
        match store.handle(Intent::SendMessage("Any caps?".into())).unwrap() {
            Some(Effect::Ask { context: Some(ctx), .. }) => {
                assert_eq!(ctx.jurisdiction, "UK (English Common Law)")
            }
            other => panic!("expected grounded ask, got {other:?}"),
        }
    }

    #[test]
    fn clear_chat_drops_pending_answer_only() {
        let mut store = SessionStore::default();
        store.handle(Intent::SetField(Field::ContractText("terms".into()))).unwrap();
        let effect = store.handle(Intent::SendMessage("q".into())).unwrap().unwrap();
        store.handle(Intent::ClearChat).unwrap();
        assert!(store.chat.messages.is_empty());
        assert!(!store.apply(Outcome::Answer { ticket: effect.ticket(), text: "late".into() }));
        assert!(store.chat.messages.is_empty());
        assert_eq!(store.audit_input.text, "terms");
    }

    #[test]
    fn chat_cannot_be_submitted() {
        let mut store = SessionStore::default();
        assert!(matches!(
            store.handle(Intent::Submit(WorkflowKind::Chat)),
            Err(SessionError::ChatNotSubmittable)
        ));
    }

    #[test]
    fn library_selection_and_filter() {
        let mut store = SessionStore::default();
        assert_eq!(store.library.selected.map(|c| c.id), Some("rbct-1"));

        store.handle(Intent::SelectClause("arb-uk".into())).unwrap();
        assert_eq!(store.library.selected.map(|c| c.id), Some("arb-uk"));
        assert!(matches!(
            store.handle(Intent::SelectClause("nope".into())),
            Err(SessionError::UnknownClause(_))
        ));

        store
            .handle(Intent::FilterClauses {
                search: "arbitration".into(),
                category: Some(ClauseCategory::Sales),
            })
            .unwrap();
        assert!(store.library.entries().is_empty());
    }

    #[test]
    fn settings_shared_by_both_workflows() {
        let mut store = SessionStore::default();
        store.handle(Intent::SetField(Field::Jurisdiction(Jurisdiction::Germany))).unwrap();
        store.handle(Intent::SetField(Field::ArbitrationSeat(ArbitrationSeat::Hkiac))).unwrap();
        store.handle(Intent::SetField(Field::ContractText("terms".into()))).unwrap();
        store.handle(Intent::BulkUpload(vec![pdf("a"), pdf("b")])).unwrap();

        let Some(Effect::Audit { request, .. }) = store.handle(Intent::Submit(WorkflowKind::Audit)).unwrap() else {
            panic!("expected audit effect");
        };
        assert_eq!((request.jurisdiction, request.seat), (Jurisdiction::Germany, ArbitrationSeat::Hkiac));
        let Some(Effect::Compare { request, .. }) = store.handle(Intent::Submit(WorkflowKind::Comparison)).unwrap() else {
            panic!("expected comparison effect");
        };
        assert_eq!(request.jurisdiction, Jurisdiction::Germany);
    }
}

use clausewise_core::{ArbitrationSeat, ClauseCategory, EncodedDocument, Jurisdiction};

use crate::workflow::WorkflowKind;

/// Where an uploaded document goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadTarget {
    /// The single-document audit.
    Audit,
    /// One of the four comparison slots (zero-based).
    Slot(usize),
}

/// Editable inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    Jurisdiction(Jurisdiction),
    ArbitrationSeat(ArbitrationSeat),
    /// Pasted contract text for the audit.
    ContractText(String),
    /// Free-text audit instruction for the comparison.
    ComparisonQuery(String),
}

/// Everything the user can ask the session to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    Upload {
        target: UploadTarget,
        document: EncodedDocument,
    },
    /// Fill the comparison slots in order; extras beyond the fourth are dropped.
    BulkUpload(Vec<EncodedDocument>),
    RemoveSlot(usize),
    SetField(Field),
    Submit(WorkflowKind),
    Reset(WorkflowKind),
    SendMessage(String),
    ClearChat,
    SelectClause(String),
    FilterClauses {
        search: String,
        category: Option<ClauseCategory>,
    },
}

use clausewise_core::EncodeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("nothing to analyse: paste contract text or upload a document")]
    NoContent,

    #[error("upload at least 2 documents to run a comparison ({0} uploaded)")]
    TooFewDocuments(usize),

    #[error("comparison slot {0} does not exist (slots 0-3)")]
    SlotOutOfRange(usize),

    #[error("{name}: unsupported file type {media_type} (PDF, Word, or plain text only)")]
    UnsupportedFileType { name: String, media_type: String },

    #[error("unknown clause id {0:?}")]
    UnknownClause(String),

    #[error("chat turns are sent as messages, not submitted")]
    ChatNotSubmittable,

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

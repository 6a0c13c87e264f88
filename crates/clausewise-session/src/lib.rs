//! Session state: per-workflow state machines, the intents that drive them,
//! and the read-only views rendered from them.
//!
//! State changes are synchronous. A submission returns an [`Effect`]
//! describing the outbound call; running it yields an [`Outcome`] that is
//! folded back with [`SessionStore::apply`]. Effects for different workflows
//! may run concurrently.

mod controller;
mod effect;
mod error;
mod intent;
mod store;
pub mod view;
mod workflow;

pub use controller::Controller;
pub use effect::{CompletedComparison, Effect, Outcome};
pub use error::SessionError;
pub use intent::{Field, Intent, UploadTarget};
pub use store::{
    AuditInput, ChatState, ComparisonInput, LibraryState, SLOT_COUNT, SessionStore, Settings,
};
pub use workflow::{Phase, Ticket, Workflow, WorkflowKind};

//! `Idle → Submitting → {Succeeded | Failed}`, with `reset` back to `Idle`
//! from anywhere.
//!
//! Every `begin` and `reset` bumps a generation counter. A [`Ticket`] carries
//! the generation it was issued under, so a response that arrives after a
//! reset (or after a newer submission) no longer matches and is dropped.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkflowKind {
    Audit,
    Comparison,
    Chat,
}

impl fmt::Display for WorkflowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Audit => "audit",
            Self::Comparison => "comparison",
            Self::Chat => "chat",
        })
    }
}

/// Claim on the single in-flight request of one workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub kind: WorkflowKind,
    pub generation: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Phase<T> {
    Idle,
    Submitting,
    Succeeded(T),
    /// User-facing failure message.
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct Workflow<T> {
    kind: WorkflowKind,
    phase: Phase<T>,
    generation: u64,
}

impl<T> Workflow<T> {
    pub fn new(kind: WorkflowKind) -> Self {
        Self {
            kind,
            phase: Phase::Idle,
            generation: 0,
        }
    }

    pub fn kind(&self) -> WorkflowKind {
        self.kind
    }

    pub fn phase(&self) -> &Phase<T> {
        &self.phase
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, Phase::Submitting)
    }

    pub fn result(&self) -> Option<&T> {
        match &self.phase {
            Phase::Succeeded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            Phase::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Enter `Submitting`. Returns `None` when a request is already in flight.
    pub(crate) fn begin(&mut self) -> Option<Ticket> {
        if self.is_submitting() {
            return None;
        }
        self.generation += 1;
        self.phase = Phase::Submitting;
        Some(Ticket {
            kind: self.kind,
            generation: self.generation,
        })
    }

    /// Apply a finished request. Returns `false` (and changes nothing) when
    /// the ticket is stale.
    pub(crate) fn settle(&mut self, ticket: Ticket, outcome: Result<T, String>) -> bool {
        if ticket.kind != self.kind
            || ticket.generation != self.generation
            || !self.is_submitting()
        {
            return false;
        }
        self.phase = match outcome {
            Ok(value) => Phase::Succeeded(value),
            Err(message) => Phase::Failed(message),
        };
        true
    }

    /// Jump to `Succeeded` with a result obtained elsewhere. Any request in
    /// flight is invalidated.
    pub(crate) fn restore(&mut self, value: T) {
        self.generation += 1;
        self.phase = Phase::Succeeded(value);
    }

    pub(crate) fn reset(&mut self) {
        self.generation += 1;
        self.phase = Phase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_begin_while_submitting_is_refused() {
        let mut wf: Workflow<u32> = Workflow::new(WorkflowKind::Audit);
        let first = wf.begin().unwrap();
        assert!(wf.begin().is_none());
        assert!(wf.settle(first, Ok(7)));
        assert_eq!(wf.result(), Some(&7));
    }

    #[test]
    fn failure_is_retryable() {
        let mut wf: Workflow<u32> = Workflow::new(WorkflowKind::Comparison);
        let t = wf.begin().unwrap();
        assert!(wf.settle(t, Err("boom".into())));
        assert_eq!(wf.error(), Some("boom"));
        let retry = wf.begin().unwrap();
        assert!(retry.generation > t.generation);
        assert!(wf.is_submitting());
    }

    #[test]
    fn reset_from_every_phase_yields_idle() {
        let mut wf: Workflow<u32> = Workflow::new(WorkflowKind::Audit);
        wf.reset();
        assert_eq!(wf.phase(), &Phase::Idle);

        wf.begin().unwrap();
        wf.reset();
        assert_eq!(wf.phase(), &Phase::Idle);

        let t = wf.begin().unwrap();
        wf.settle(t, Ok(1));
        wf.reset();
        assert_eq!(wf.phase(), &Phase::Idle);

        let t = wf.begin().unwrap();
        wf.settle(t, Err("x".into()));
        wf.reset();
        assert_eq!(wf.phase(), &Phase::Idle);
    }

    #[test]
    fn late_result_after_reset_is_ignored() {
        let mut wf: Workflow<u32> = Workflow::new(WorkflowKind::Audit);
        let stale = wf.begin().unwrap();
        wf.reset();
        let fresh = wf.begin().unwrap();
        assert!(!wf.settle(stale, Ok(1)));
        assert!(wf.is_submitting());
        assert!(wf.settle(fresh, Ok(2)));
        assert!(!wf.settle(fresh, Ok(3)), "a ticket settles once");
        assert_eq!(wf.result(), Some(&2));
    }

    #[test]
    fn restore_supersedes_in_flight_request() {
        let mut wf: Workflow<u32> = Workflow::new(WorkflowKind::Audit);
        let t = wf.begin().unwrap();
        wf.restore(9);
        assert!(!wf.settle(t, Ok(1)));
        assert_eq!(wf.result(), Some(&9));
    }

    #[test]
    fn ticket_for_other_workflow_rejected() {
        let mut audit: Workflow<u32> = Workflow::new(WorkflowKind::Audit);
        let mut chat: Workflow<u32> = Workflow::new(WorkflowKind::Chat);
        audit.begin().unwrap();
        let chat_ticket = chat.begin().unwrap();
        assert!(!audit.settle(chat_ticket, Ok(1)));
    }
}

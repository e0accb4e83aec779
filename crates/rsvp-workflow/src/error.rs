//! Workflow error taxonomy.
//!
//! Everything here is recoverable: each error leaves the session exactly as
//! it was before the call, so the user can retry.

use thiserror::Error;

use crate::session::Step;
use crate::sink::SinkError;

/// A household member a validation error is complaining about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Offender {
    /// Position in the household's response sequence.
    pub index: usize,
    /// Full name, for user-facing messages.
    pub name: String,
}

fn name_list(offenders: &[Offender]) -> String {
    offenders
        .iter()
        .map(|o| o.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Error)]
pub enum WorkflowError {
    /// Lookup attempted before the roster finished loading.
    #[error("guest roster is not loaded yet")]
    RosterNotReady,

    /// No roster name was close enough to the query.
    #[error("no guest matched '{query}'")]
    GuestNotFound { query: String },

    /// One or more members have no attendance answer.
    #[error("attendance not answered for: {}", name_list(.offenders))]
    MissingAttendance { offenders: Vec<Offender> },

    /// One or more attending members have no meal choice.
    #[error("meal choice missing for: {}", name_list(.offenders))]
    MissingMeal { offenders: Vec<Offender> },

    /// An edit referenced a member index outside the household.
    #[error("no household member at index {index}")]
    UnknownMemberIndex { index: usize },

    /// The sink rejected the dispatch; the form state is preserved so the
    /// same payload can be resubmitted.
    #[error("submission failed: {0}")]
    SubmissionFailed(#[from] SinkError),

    /// The event is not accepted in the session's current step.
    #[error("event not valid in step {step:?}")]
    InvalidTransition { step: Step },
}

pub type Result<T> = std::result::Result<T, WorkflowError>;

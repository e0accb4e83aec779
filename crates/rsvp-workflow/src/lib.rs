pub mod engine;
pub mod error;
pub mod session;
pub mod sink;

pub use engine::{Event, MemberEdit, Outcome, RsvpWorkflow};
pub use error::{Offender, Result, WorkflowError};
pub use session::{RsvpSession, Step};
pub use sink::{JsonLinesSink, LoggingSink, SinkError, SubmissionSink};

//! The submission sink seam.
//!
//! The sink offers no delivery acknowledgment: `Ok` means the dispatch was
//! handed off, not that anyone received it. The workflow transitions on
//! dispatch, so a slow or dropped send is indistinguishable from success at
//! this layer. That mirrors the endpoint this feeds (a form POST that
//! returns nothing readable) and is an accepted limitation, not a bug.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use thiserror::Error;
use tracing::info;

use rsvp_model::SubmissionPayload;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Where a finished submission goes. One call, fire-and-forget.
pub trait SubmissionSink {
    fn submit(&self, payload: &SubmissionPayload) -> Result<(), SinkError>;
}

/// Development sink: logs the payload and succeeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingSink;

impl SubmissionSink for LoggingSink {
    fn submit(&self, payload: &SubmissionPayload) -> Result<(), SinkError> {
        let encoded = serde_json::to_string(payload)?;
        info!(
            household_id = %payload.household_id,
            household = %payload.household_name,
            responses = payload.responses.len(),
            payload = %encoded,
            "rsvp submission (dev sink)"
        );
        Ok(())
    }
}

/// Appends each payload as one JSON line to a file.
#[derive(Debug, Clone)]
pub struct JsonLinesSink {
    path: PathBuf,
}

impl JsonLinesSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl SubmissionSink for JsonLinesSink {
    fn submit(&self, payload: &SubmissionPayload) -> Result<(), SinkError> {
        let line = serde_json::to_string(payload)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")?;
        info!(path = %self.path.display(), "rsvp submission appended");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn payload() -> SubmissionPayload {
        SubmissionPayload {
            household_id: "H1".to_string(),
            household_name: "The Lees".to_string(),
            responses: vec![],
            note: String::new(),
            submitted_at: DateTime::from_timestamp(1_700_000_000, 0).expect("valid timestamp"),
        }
    }

    #[test]
    fn logging_sink_always_succeeds() {
        assert!(LoggingSink.submit(&payload()).is_ok());
    }

    #[test]
    fn json_lines_sink_appends_one_line_per_submission() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("submissions.jsonl");
        let sink = JsonLinesSink::new(&path);

        sink.submit(&payload()).expect("first submit");
        sink.submit(&payload()).expect("second submit");

        let contents = std::fs::read_to_string(&path).expect("read back");
        assert_eq!(contents.lines().count(), 2);
        let parsed: SubmissionPayload =
            serde_json::from_str(contents.lines().next().expect("line")).expect("valid json");
        assert_eq!(parsed.household_id, "H1");
    }

    #[test]
    fn json_lines_sink_surfaces_io_failure() {
        let sink = JsonLinesSink::new("/definitely/not/a/dir/submissions.jsonl");
        assert!(matches!(
            sink.submit(&payload()),
            Err(SinkError::Io(_))
        ));
    }
}

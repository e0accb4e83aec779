//! Structured roster input: a pre-parsed JSON array of guest objects.
//!
//! Bypasses the tokenizer entirely; serde enforces the same required keys
//! the text mode checks for. Unknown keys are ignored, missing optional
//! keys default to empty/false.

use tracing::debug;

use rsvp_model::GuestRecord;

use crate::error::{Result, RosterError};

/// Parse a JSON array of guest objects into records.
///
/// # Errors
///
/// `RosterError::MalformedRoster` when the input is not a JSON array of
/// objects or a record is missing `guest_id`, `first_name`, or `last_name`.
pub fn parse_json(raw: &str) -> Result<Vec<GuestRecord>> {
    let records: Vec<GuestRecord> = serde_json::from_str(raw)
        .map_err(|err| RosterError::MalformedRoster(err.to_string()))?;
    debug!(records = records.len(), "parsed structured roster");
    Ok(records)
}

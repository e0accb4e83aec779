//! Per-member responses and the final submission payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::guest::GuestRecord;

/// One household member's answer, mutable while the form is open.
///
/// `attending: None` means unanswered; `meal` is only meaningful for
/// attending members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberResponse {
    pub guest_id: String,
    pub first_name: String,
    pub last_name: String,
    pub attending: Option<bool>,
    pub meal: Option<String>,
}

impl MemberResponse {
    /// An unanswered response for a household member.
    pub fn for_guest(guest: &GuestRecord) -> Self {
        Self {
            guest_id: guest.guest_id.clone(),
            first_name: guest.first_name.clone(),
            last_name: guest.last_name.clone(),
            attending: None,
            meal: None,
        }
    }
}

/// The finished submission handed to the sink. Write-once: constructed at
/// the moment validation succeeds, never edited afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub household_id: String,
    pub household_name: String,
    pub responses: Vec<MemberResponse>,
    pub note: String,
    pub submitted_at: DateTime<Utc>,
}

/// A meal choice offered on the form.
///
/// The workflow only checks that a chosen value is non-empty; membership in
/// the configured set is the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealOption {
    pub value: String,
    pub label: String,
}

/// Which confirmation condition a completed submission falls into.
///
/// Derived purely from attending/declining counts; display text lives with
/// the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmationSummary {
    AllAttending { count: usize },
    AllDeclining { count: usize },
    /// Some attending, some not; carries attendee first names in response
    /// order.
    Mixed { attending_first_names: Vec<String> },
}

impl ConfirmationSummary {
    /// Summarize finalized responses. Callers only invoke this after
    /// validation, so `attending` is treated as answered; an unanswered
    /// member counts as declining.
    pub fn from_responses(responses: &[MemberResponse]) -> Self {
        let attending: Vec<&MemberResponse> = responses
            .iter()
            .filter(|r| r.attending == Some(true))
            .collect();

        if attending.len() == responses.len() && !attending.is_empty() {
            Self::AllAttending {
                count: attending.len(),
            }
        } else if attending.is_empty() {
            Self::AllDeclining {
                count: responses.len(),
            }
        } else {
            Self::Mixed {
                attending_first_names: attending
                    .iter()
                    .map(|r| r.first_name.clone())
                    .collect(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(first: &str, attending: bool) -> MemberResponse {
        MemberResponse {
            guest_id: first.to_lowercase(),
            first_name: first.to_string(),
            last_name: "Lee".to_string(),
            attending: Some(attending),
            meal: attending.then(|| "fish".to_string()),
        }
    }

    #[test]
    fn all_attending() {
        let summary =
            ConfirmationSummary::from_responses(&[response("Ann", true), response("Bo", true)]);
        assert_eq!(summary, ConfirmationSummary::AllAttending { count: 2 });
    }

    #[test]
    fn all_declining() {
        let summary =
            ConfirmationSummary::from_responses(&[response("Ann", false), response("Bo", false)]);
        assert_eq!(summary, ConfirmationSummary::AllDeclining { count: 2 });
    }

    #[test]
    fn mixed_names_attendees_in_order() {
        let summary = ConfirmationSummary::from_responses(&[
            response("Ann", true),
            response("Bo", false),
            response("Cy", true),
        ]);
        assert_eq!(
            summary,
            ConfirmationSummary::Mixed {
                attending_first_names: vec!["Ann".to_string(), "Cy".to_string()],
            }
        );
    }

    #[test]
    fn payload_serializes_snake_case() {
        let payload = SubmissionPayload {
            household_id: "H1".to_string(),
            household_name: "The Lees".to_string(),
            responses: vec![response("Ann", true)],
            note: "See you there".to_string(),
            submitted_at: DateTime::from_timestamp(1_700_000_000, 0).expect("valid timestamp"),
        };
        let json = serde_json::to_string(&payload).expect("serialize payload");
        assert!(json.contains("\"household_id\":\"H1\""));
        assert!(json.contains("\"submitted_at\""));
        let round: SubmissionPayload = serde_json::from_str(&json).expect("round-trip");
        assert_eq!(round, payload);
    }
}

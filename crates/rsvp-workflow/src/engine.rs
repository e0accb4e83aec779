//! The three-step RSVP workflow.
//!
//! `Lookup → HouseholdForm → Confirmation`, with an explicit `back`
//! transition from the form. Events are values and transitions return
//! outcomes; rendering is entirely the caller's concern. Every error path
//! leaves the session in its pre-call state.

use chrono::Utc;
use tracing::{info, warn};

use rsvp_match::resolve;
use rsvp_model::{ConfirmationSummary, Household, HouseholdIndex, MemberResponse, SubmissionPayload};

use crate::error::{Offender, Result, WorkflowError};
use crate::session::{RsvpSession, Step};
use crate::sink::SubmissionSink;

/// One member's answer as submitted from the form.
///
/// `attending: None` means the member was left unanswered, which fails
/// validation. The meal only counts when this very edit says attending;
/// a member switched to declining has their meal cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberEdit {
    /// Position in the household's response sequence.
    pub index: usize,
    pub attending: Option<bool>,
    pub meal: Option<String>,
}

/// External events driving the workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    SubmitQuery(String),
    Back,
    SubmitResponses { edits: Vec<MemberEdit>, note: String },
}

/// What a successful transition produced.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// Lookup matched; the form is now open for this household.
    HouseholdSelected(Household),
    ReturnedToLookup,
    /// The payload was dispatched and the session reached confirmation.
    Submitted {
        payload: SubmissionPayload,
        summary: ConfirmationSummary,
    },
}

/// Finite-state controller over one RSVP session.
///
/// Owns the session and the submission sink; the household index is
/// installed once roster loading finishes. Single-threaded by design: each
/// transition completes before the next event arrives.
pub struct RsvpWorkflow<S: SubmissionSink> {
    index: Option<HouseholdIndex>,
    session: RsvpSession,
    sink: S,
}

impl<S: SubmissionSink> RsvpWorkflow<S> {
    /// A workflow whose roster has not loaded yet. Lookups report
    /// `RosterNotReady` until `install_index` is called.
    pub fn new(sink: S) -> Self {
        Self {
            index: None,
            session: RsvpSession::new(),
            sink,
        }
    }

    pub fn with_index(index: HouseholdIndex, sink: S) -> Self {
        Self {
            index: Some(index),
            session: RsvpSession::new(),
            sink,
        }
    }

    /// Install the household index built from a finished roster load.
    pub fn install_index(&mut self, index: HouseholdIndex) {
        info!(households = index.len(), "roster installed");
        self.index = Some(index);
    }

    pub fn is_ready(&self) -> bool {
        self.index.is_some()
    }

    pub fn session(&self) -> &RsvpSession {
        &self.session
    }

    /// Dispatch an event to the transition it names.
    pub fn handle(&mut self, event: Event) -> Result<Outcome> {
        match event {
            Event::SubmitQuery(query) => self.submit_query(&query),
            Event::Back => self.back(),
            Event::SubmitResponses { edits, note } => self.submit_responses(&edits, &note),
        }
    }

    /// `Lookup → HouseholdForm` on a match; stays in `Lookup` on a miss.
    pub fn submit_query(&mut self, query: &str) -> Result<Outcome> {
        self.require_step(Step::Lookup)?;
        let index = self.index.as_ref().ok_or(WorkflowError::RosterNotReady)?;

        let Some(household) = resolve(query, index) else {
            warn!(%query, "guest not found");
            return Err(WorkflowError::GuestNotFound {
                query: query.to_string(),
            });
        };

        let household = household.clone();
        info!(household_id = %household.id, members = household.members.len(), "household selected");
        self.session.enter_form(household.clone());
        Ok(Outcome::HouseholdSelected(household))
    }

    /// `HouseholdForm → Lookup`, discarding the in-progress responses.
    pub fn back(&mut self) -> Result<Outcome> {
        self.require_step(Step::HouseholdForm)?;
        self.session.reset();
        Ok(Outcome::ReturnedToLookup)
    }

    /// Apply edits, validate, dispatch, and move to `Confirmation`.
    ///
    /// On a validation error nothing changes. On a sink error the edited
    /// responses stay in the form so the same payload can be resubmitted.
    pub fn submit_responses(&mut self, edits: &[MemberEdit], note: &str) -> Result<Outcome> {
        self.require_step(Step::HouseholdForm)?;
        let household = self
            .session
            .current_household
            .clone()
            .ok_or(WorkflowError::InvalidTransition {
                step: self.session.step,
            })?;

        let draft = apply_edits(&self.session.responses, edits)?;
        validate(&draft)?;

        let payload = SubmissionPayload {
            household_id: household.id.clone(),
            household_name: household.name.clone(),
            responses: draft.clone(),
            note: note.trim().to_string(),
            submitted_at: Utc::now(),
        };

        // Commit before dispatch: a sink failure must leave the answered
        // form intact for resubmission.
        self.session.responses = draft;

        self.sink.submit(&payload)?;

        let summary = ConfirmationSummary::from_responses(&payload.responses);
        info!(household_id = %payload.household_id, "rsvp submitted");
        self.session.step = Step::Confirmation;
        Ok(Outcome::Submitted { payload, summary })
    }

    fn require_step(&self, expected: Step) -> Result<()> {
        if self.session.step == expected {
            Ok(())
        } else {
            Err(WorkflowError::InvalidTransition {
                step: self.session.step,
            })
        }
    }
}

/// Apply form edits to a copy of the response sheet.
///
/// The meal is taken from the edit only when that edit marks the member
/// attending; declining or unanswered members get `None`, so a member
/// switched away from attending never carries a stale meal.
fn apply_edits(responses: &[MemberResponse], edits: &[MemberEdit]) -> Result<Vec<MemberResponse>> {
    let mut draft = responses.to_vec();
    for edit in edits {
        let response = draft
            .get_mut(edit.index)
            .ok_or(WorkflowError::UnknownMemberIndex { index: edit.index })?;
        response.attending = edit.attending;
        response.meal = if edit.attending == Some(true) {
            edit.meal.clone().filter(|meal| !meal.is_empty())
        } else {
            None
        };
    }
    Ok(draft)
}

fn validate(responses: &[MemberResponse]) -> Result<()> {
    let unanswered: Vec<Offender> = responses
        .iter()
        .enumerate()
        .filter(|(_, r)| r.attending.is_none())
        .map(|(index, r)| Offender {
            index,
            name: format!("{} {}", r.first_name, r.last_name),
        })
        .collect();
    if !unanswered.is_empty() {
        return Err(WorkflowError::MissingAttendance {
            offenders: unanswered,
        });
    }

    let missing_meal: Vec<Offender> = responses
        .iter()
        .enumerate()
        .filter(|(_, r)| r.attending == Some(true) && r.meal.is_none())
        .map(|(index, r)| Offender {
            index,
            name: format!("{} {}", r.first_name, r.last_name),
        })
        .collect();
    if !missing_meal.is_empty() {
        return Err(WorkflowError::MissingMeal {
            offenders: missing_meal,
        });
    }

    Ok(())
}

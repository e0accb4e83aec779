//! The single active RSVP session.
//!
//! Explicitly constructed and owned by the workflow; there is no ambient
//! state. Reset back to `Lookup` whenever the user navigates away from the
//! household form.

use rsvp_model::{Household, MemberResponse};

/// Which step of the three-step flow the session is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    #[default]
    Lookup,
    HouseholdForm,
    /// Terminal for the session.
    Confirmation,
}

/// Lookup state plus the in-progress per-member responses.
#[derive(Debug, Clone, Default)]
pub struct RsvpSession {
    pub current_household: Option<Household>,
    /// One entry per household member, in household (roster) order.
    pub responses: Vec<MemberResponse>,
    pub step: Step,
}

impl RsvpSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter the household form with a fresh, unanswered response sheet.
    pub fn enter_form(&mut self, household: Household) {
        self.responses = household.members.iter().map(MemberResponse::for_guest).collect();
        self.current_household = Some(household);
        self.step = Step::HouseholdForm;
    }

    /// Drop the household and responses and return to lookup.
    pub fn reset(&mut self) {
        self.current_household = None;
        self.responses.clear();
        self.step = Step::Lookup;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rsvp_model::GuestRecord;

    #[test]
    fn enter_form_seeds_unanswered_responses_in_member_order() {
        let household = Household {
            id: "H1".to_string(),
            name: "The Lees".to_string(),
            members: vec![
                GuestRecord {
                    guest_id: "1".to_string(),
                    household_id: "H1".to_string(),
                    first_name: "Ann".to_string(),
                    last_name: "Lee".to_string(),
                    household_name: None,
                    email: None,
                    has_plus_one: false,
                    plus_one_name: None,
                },
                GuestRecord {
                    guest_id: "2".to_string(),
                    household_id: "H1".to_string(),
                    first_name: "Bo".to_string(),
                    last_name: "Lee".to_string(),
                    household_name: None,
                    email: None,
                    has_plus_one: false,
                    plus_one_name: None,
                },
            ],
        };

        let mut session = RsvpSession::new();
        session.enter_form(household);

        assert_eq!(session.step, Step::HouseholdForm);
        assert_eq!(session.responses.len(), 2);
        assert_eq!(session.responses[0].guest_id, "1");
        assert!(session.responses.iter().all(|r| r.attending.is_none()));
        assert!(session.responses.iter().all(|r| r.meal.is_none()));

        session.reset();
        assert_eq!(session.step, Step::Lookup);
        assert!(session.current_household.is_none());
        assert!(session.responses.is_empty());
    }
}

pub mod guest;
pub mod household;
pub mod response;

pub use guest::GuestRecord;
pub use household::{Household, HouseholdIndex};
pub use response::{ConfirmationSummary, MealOption, MemberResponse, SubmissionPayload};

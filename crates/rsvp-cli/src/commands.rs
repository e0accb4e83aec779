//! Subcommand implementations.

use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::info;

use rsvp_ingest::{parse_csv, parse_json};
use rsvp_model::{Household, HouseholdIndex, MealOption};
use rsvp_workflow::{
    JsonLinesSink, LoggingSink, MemberEdit, Outcome, RsvpWorkflow, SubmissionSink, WorkflowError,
};

use crate::cli::{AttendanceArg, HouseholdsArgs, LookupArgs, RespondArgs};
use crate::summary::{print_confirmation, print_household, print_households, print_meals};

/// User-facing condition texts. The workflow reports which condition
/// occurred; the wording lives out here with the rest of the presentation.
const GUEST_NOT_FOUND_MESSAGE: &str =
    "We couldn't find that name on the guest list. Please check the spelling and try again.";
const SUBMIT_FAILED_MESSAGE: &str =
    "Something went wrong submitting the RSVP. The form answers were kept; please try again.";

/// The meal choices offered on the form. The workflow never checks
/// membership, only that attending members picked something non-empty.
pub fn default_meal_options() -> Vec<MealOption> {
    [
        ("beef", "Filet Mignon"),
        ("fish", "Pan-Seared Salmon"),
        ("vegetarian", "Garden Risotto (Vegetarian)"),
        ("vegan", "Roasted Vegetable Plate (Vegan)"),
    ]
    .into_iter()
    .map(|(value, label)| MealOption {
        value: value.to_string(),
        label: label.to_string(),
    })
    .collect()
}

/// Load and index a roster file, picking the parser by extension.
pub fn load_roster(path: &Path) -> Result<HouseholdIndex> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("read roster {}", path.display()))?;
    let records = if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json")) {
        parse_json(&raw)
    } else {
        parse_csv(&raw)
    }
    .with_context(|| format!("parse roster {}", path.display()))?;

    let index = HouseholdIndex::build(records);
    info!(
        households = index.len(),
        records = index.records().len(),
        "roster loaded"
    );
    Ok(index)
}

pub fn run_households(args: &HouseholdsArgs) -> Result<()> {
    let index = load_roster(&args.roster)?;
    print_households(&index);
    Ok(())
}

pub fn run_lookup(args: &LookupArgs) -> Result<()> {
    let index = load_roster(&args.roster)?;
    match rsvp_match::resolve(&args.name, &index) {
        Some(household) => {
            print_household(household);
            Ok(())
        }
        None => bail!("{GUEST_NOT_FOUND_MESSAGE}"),
    }
}

pub fn run_meals() -> Result<()> {
    print_meals(&default_meal_options());
    Ok(())
}

pub fn run_respond(args: &RespondArgs) -> Result<()> {
    let index = load_roster(&args.roster)?;
    match &args.out {
        Some(path) => run_flow(index, JsonLinesSink::new(path), args),
        None => run_flow(index, LoggingSink, args),
    }
}

fn run_flow<S: SubmissionSink>(index: HouseholdIndex, sink: S, args: &RespondArgs) -> Result<()> {
    let mut workflow = RsvpWorkflow::with_index(index, sink);

    match workflow.submit_query(&args.name) {
        Ok(_) => {}
        Err(WorkflowError::GuestNotFound { .. }) => bail!("{GUEST_NOT_FOUND_MESSAGE}"),
        Err(err) => return Err(err.into()),
    }
    let household = workflow
        .session()
        .current_household
        .clone()
        .context("lookup left no household selected")?;

    let edits = build_edits(&household, &args.attending, &args.meals)?;
    let outcome = match workflow.submit_responses(&edits, &args.note) {
        Ok(outcome) => outcome,
        Err(err @ WorkflowError::SubmissionFailed(_)) => {
            bail!("{SUBMIT_FAILED_MESSAGE} ({err})")
        }
        Err(err) => return Err(err.into()),
    };
    if let Outcome::Submitted { payload, summary } = outcome {
        println!(
            "RSVP recorded for {} ({} member(s)).",
            payload.household_name,
            payload.responses.len()
        );
        print_confirmation(&summary);
    }
    Ok(())
}

/// Turn the positional `--attending`/`--meal` lists into per-member edits.
fn build_edits(
    household: &Household,
    attending: &[AttendanceArg],
    meals: &[String],
) -> Result<Vec<MemberEdit>> {
    if attending.len() != household.members.len() {
        let names: Vec<String> = household.members.iter().map(|m| m.full_name()).collect();
        bail!(
            "--attending needs one yes/no per member; household '{}' has {}: {}",
            household.name,
            household.members.len(),
            names.join(", ")
        );
    }
    if meals.len() > household.members.len() {
        bail!(
            "--meal lists {} values but household '{}' only has {} member(s)",
            meals.len(),
            household.name,
            household.members.len()
        );
    }

    Ok(attending
        .iter()
        .enumerate()
        .map(|(index, answer)| MemberEdit {
            index,
            attending: Some(*answer == AttendanceArg::Yes),
            meal: meals
                .get(index)
                .map(|meal| meal.trim().to_string())
                .filter(|meal| !meal.is_empty()),
        })
        .collect())
}

//! Tiered name resolution against the household index.
//!
//! Exact match, then substring/first-or-last-name match, then Levenshtein
//! distance with an absolute cutoff. Every tier is a linear scan of the
//! records in roster order, so ties always resolve to the earliest entry
//! on the roster. Pure with respect to its inputs.

use rapidfuzz::distance::levenshtein;
use tracing::debug;

use rsvp_model::{Household, HouseholdIndex};

use crate::normalize::normalize;

/// Largest edit distance still accepted as a typo of a roster name.
pub const MAX_EDIT_DISTANCE: usize = 3;

/// Resolve a typed name to a household, or `None` when nothing on the
/// roster is close enough. An empty result is a normal outcome, never an
/// error.
pub fn resolve<'a>(query: &str, index: &'a HouseholdIndex) -> Option<&'a Household> {
    let needle = normalize(query);
    // A query with no letters left after normalization is a substring of
    // everything; treat it as no match rather than handing back the first
    // household.
    if needle.is_empty() {
        return None;
    }

    // Tier 1: exact full-name match.
    for record in index.records() {
        if normalize(&record.full_name()) == needle {
            debug!(guest_id = %record.guest_id, "exact name match");
            return index.household_of(record);
        }
    }

    // Tier 2: substring either way, or the query names just the first or
    // last name. Cheap matches win before any fuzzy scoring; short queries
    // can resolve ambiguously here, which mirrors the lookup this replaces.
    for record in index.records() {
        let full = normalize(&record.full_name());
        if full.contains(&needle)
            || needle.contains(&full)
            || normalize(&record.first_name) == needle
            || normalize(&record.last_name) == needle
        {
            debug!(guest_id = %record.guest_id, "partial name match");
            return index.household_of(record);
        }
    }

    // Tier 3: closest full name by edit distance, accepted only under the
    // cutoff. Strict less-than keeps the first roster entry on ties.
    let mut best: Option<&Household> = None;
    let mut best_distance = usize::MAX;
    for record in index.records() {
        let full = normalize(&record.full_name());
        let distance = levenshtein::distance(needle.chars(), full.chars());
        if distance < best_distance && distance <= MAX_EDIT_DISTANCE {
            best_distance = distance;
            best = index.household_of(record);
        }
    }
    if let Some(household) = best {
        debug!(household_id = %household.id, distance = best_distance, "fuzzy name match");
    }
    best
}

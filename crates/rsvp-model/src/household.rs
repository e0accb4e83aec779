//! Household grouping over the flat guest roster.
//!
//! Built once at load time and read-only afterwards; a roster reload
//! rebuilds the whole index rather than patching it in place.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::guest::GuestRecord;

/// One or more guests who respond together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Household {
    pub id: String,
    /// Roster-provided name, or `"{first} {last}"` of the first member seen.
    pub name: String,
    /// Members in roster order. Always non-empty.
    pub members: Vec<GuestRecord>,
}

/// The full roster grouped into households, plus the flat record sequence.
///
/// Name matching scans `records()` in roster order rather than iterating
/// households, so tie-breaking stays stable against the input file.
#[derive(Debug, Clone, Default)]
pub struct HouseholdIndex {
    records: Vec<GuestRecord>,
    households: Vec<Household>,
    by_id: BTreeMap<String, usize>,
}

impl HouseholdIndex {
    /// Group records into households.
    ///
    /// The first record seen for a key seeds the household and its display
    /// name; later records only append. Repeated guest ids are kept as-is
    /// (a roster data-entry error, not validated here).
    pub fn build(records: Vec<GuestRecord>) -> Self {
        let mut households: Vec<Household> = Vec::new();
        let mut by_id: BTreeMap<String, usize> = BTreeMap::new();

        for record in &records {
            let key = record.grouping_key().to_string();
            match by_id.get(&key) {
                Some(&idx) => households[idx].members.push(record.clone()),
                None => {
                    let name = record
                        .household_name
                        .clone()
                        .filter(|n| !n.is_empty())
                        .unwrap_or_else(|| record.full_name());
                    by_id.insert(key.clone(), households.len());
                    households.push(Household {
                        id: key,
                        name,
                        members: vec![record.clone()],
                    });
                }
            }
        }

        Self {
            records,
            households,
            by_id,
        }
    }

    /// All records in roster order.
    pub fn records(&self) -> &[GuestRecord] {
        &self.records
    }

    /// Households in order of first appearance on the roster.
    pub fn households(&self) -> &[Household] {
        &self.households
    }

    pub fn get(&self, household_id: &str) -> Option<&Household> {
        self.by_id.get(household_id).map(|&idx| &self.households[idx])
    }

    /// The household a record belongs to.
    pub fn household_of(&self, record: &GuestRecord) -> Option<&Household> {
        self.get(record.grouping_key())
    }

    pub fn len(&self) -> usize {
        self.households.len()
    }

    pub fn is_empty(&self) -> bool {
        self.households.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guest(id: &str, household: &str, first: &str, last: &str) -> GuestRecord {
        GuestRecord {
            guest_id: id.to_string(),
            household_id: household.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            household_name: None,
            email: None,
            has_plus_one: false,
            plus_one_name: None,
        }
    }

    #[test]
    fn groups_by_household_id() {
        let index = HouseholdIndex::build(vec![
            guest("1", "H1", "Ann", "Lee"),
            guest("2", "H1", "Bo", "Lee"),
            guest("3", "H2", "Cy", "Quinn"),
        ]);

        assert_eq!(index.len(), 2);
        let h1 = index.get("H1").expect("H1 present");
        assert_eq!(h1.members.len(), 2);
        assert_eq!(h1.members[0].guest_id, "1");
        assert_eq!(h1.members[1].guest_id, "2");
    }

    #[test]
    fn first_member_seeds_display_name() {
        let mut first = guest("1", "H1", "Ann", "Lee");
        first.household_name = Some("The Lees".to_string());
        let mut second = guest("2", "H1", "Bo", "Lee");
        second.household_name = Some("Overwritten?".to_string());

        let index = HouseholdIndex::build(vec![first, second]);
        assert_eq!(index.get("H1").expect("H1").name, "The Lees");
    }

    #[test]
    fn missing_household_name_uses_first_member_full_name() {
        let index = HouseholdIndex::build(vec![
            guest("1", "H1", "Ann", "Lee"),
            guest("2", "H1", "Bo", "Lee"),
        ]);
        assert_eq!(index.get("H1").expect("H1").name, "Ann Lee");
    }

    #[test]
    fn guest_without_household_becomes_singleton() {
        let index = HouseholdIndex::build(vec![guest("9", "", "Solo", "Guest")]);
        let household = index.get("9").expect("keyed by guest_id");
        assert_eq!(household.members.len(), 1);
        assert_eq!(household.name, "Solo Guest");
    }

    #[test]
    fn households_partition_the_roster() {
        let records = vec![
            guest("1", "H1", "Ann", "Lee"),
            guest("2", "", "Solo", "Guest"),
            guest("3", "H1", "Bo", "Lee"),
        ];
        let index = HouseholdIndex::build(records.clone());

        let total: usize = index.households().iter().map(|h| h.members.len()).sum();
        assert_eq!(total, records.len());
        for household in index.households() {
            for member in &household.members {
                assert_eq!(member.grouping_key(), household.id);
            }
        }
    }
}

//! Quote-aware parsing of the comma-separated roster export.
//!
//! The format is deliberately simpler than RFC 4180: a `"` flips an
//! "inside quotes" flag, a comma inside quotes is literal, and embedded
//! quotes are never unescaped. That matches the roster export exactly, so
//! a general CSV reader would be the wrong tool here.

use std::collections::BTreeMap;

use tracing::debug;

use rsvp_model::GuestRecord;

use crate::error::{Result, RosterError};

const REQUIRED_KEYS: [&str; 3] = ["guest_id", "first_name", "last_name"];

/// Parse the raw roster text into guest records, one per data row.
///
/// # Errors
///
/// `RosterError::MalformedRoster` when the header row is missing, a
/// required column is absent, or a data row is blank. Missing trailing
/// fields on a row are not an error; they map to empty strings.
pub fn parse_csv(raw: &str) -> Result<Vec<GuestRecord>> {
    let mut lines = raw.trim().lines();
    let header_line = lines
        .next()
        .filter(|line| !line.trim().is_empty())
        .ok_or_else(|| RosterError::MalformedRoster("header row is missing".to_string()))?;

    let keys: Vec<String> = tokenize_line(header_line)
        .iter()
        .map(|field| normalize_key(field))
        .collect();
    for required in REQUIRED_KEYS {
        if !keys.iter().any(|k| k == required) {
            return Err(RosterError::MalformedRoster(format!(
                "header is missing required column '{required}'"
            )));
        }
    }

    let mut records = Vec::new();
    for (row_number, line) in lines.enumerate() {
        if line.trim().is_empty() {
            return Err(RosterError::MalformedRoster(format!(
                "data row {} yields no fields",
                row_number + 2
            )));
        }
        let values = tokenize_line(line);
        let mut fields = BTreeMap::new();
        for (idx, key) in keys.iter().enumerate() {
            let value = values.get(idx).map(|v| v.trim()).unwrap_or_default();
            fields.insert(key.as_str(), value.to_string());
        }
        records.push(record_from_fields(&fields));
    }

    debug!(records = records.len(), "parsed roster text");
    Ok(records)
}

/// Split one line on commas outside quoted spans.
///
/// Single-level toggle only: the quote characters themselves never reach
/// the output value.
fn tokenize_line(line: &str) -> Vec<String> {
    let mut values = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                values.push(std::mem::take(&mut current));
            }
            _ => current.push(ch),
        }
    }
    values.push(current);
    values
}

/// Lower-case a header field and fold internal whitespace to underscores.
fn normalize_key(raw: &str) -> String {
    raw.trim()
        .trim_matches('\u{feff}')
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

fn record_from_fields(fields: &BTreeMap<&str, String>) -> GuestRecord {
    let take = |key: &str| fields.get(key).cloned().unwrap_or_default();
    let take_optional = |key: &str| Some(take(key)).filter(|v| !v.is_empty());

    GuestRecord {
        guest_id: take("guest_id"),
        household_id: take("household_id"),
        first_name: take("first_name"),
        last_name: take("last_name"),
        household_name: take_optional("household_name"),
        email: take_optional("email"),
        has_plus_one: parse_flag(&take("has_plus_one")),
        plus_one_name: take_optional("plus_one_name"),
    }
}

/// Roster exports write booleans as TRUE/yes/1 depending on the editor.
fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "true" | "yes" | "y" | "1"
    )
}

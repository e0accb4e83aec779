use serde::{Deserialize, Serialize};

/// A single guest as it appears on the roster.
///
/// Immutable once parsed; the workflow never writes back to the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestRecord {
    /// Unique per guest across the whole roster.
    pub guest_id: String,
    /// Shared by everyone responding together; empty for singleton guests.
    #[serde(default)]
    pub household_id: String,
    pub first_name: String,
    pub last_name: String,
    /// Display name for the household, when the roster provides one.
    #[serde(default)]
    pub household_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub has_plus_one: bool,
    #[serde(default)]
    pub plus_one_name: Option<String>,
}

impl GuestRecord {
    /// `"{first_name} {last_name}"`, the form every name comparison uses.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// The key this guest groups under: `household_id` when non-empty,
    /// otherwise the guest is a household of one keyed by `guest_id`.
    pub fn grouping_key(&self) -> &str {
        if self.household_id.is_empty() {
            &self.guest_id
        } else {
            &self.household_id
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouping_key_falls_back_to_guest_id() {
        let guest = GuestRecord {
            guest_id: "7".to_string(),
            household_id: String::new(),
            first_name: "Solo".to_string(),
            last_name: "Guest".to_string(),
            household_name: None,
            email: None,
            has_plus_one: false,
            plus_one_name: None,
        };
        assert_eq!(guest.grouping_key(), "7");
        assert_eq!(guest.full_name(), "Solo Guest");
    }

    #[test]
    fn deserializes_with_optional_fields_missing() {
        let guest: GuestRecord = serde_json::from_str(
            r#"{"guest_id":"1","first_name":"Ann","last_name":"Lee"}"#,
        )
        .expect("minimal record");
        assert_eq!(guest.household_id, "");
        assert!(guest.household_name.is_none());
        assert!(!guest.has_plus_one);
    }
}

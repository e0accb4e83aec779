/// Normalize a name for comparison.
///
/// - Lower-cases
/// - Drops every character outside `[a-z]` and whitespace
/// - Collapses whitespace runs to a single space and trims
///
/// Applied identically to the query and to every candidate name, so
/// punctuation and diacritics never influence a match.
pub fn normalize(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|ch| ch.is_ascii_lowercase() || ch.is_whitespace())
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

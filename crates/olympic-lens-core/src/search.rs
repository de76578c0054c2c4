//! Typeahead lookup over country display names.
//!
//! Feeds filter selection: [`suggest`] backs the suggestion dropdown with a
//! case-insensitive **prefix** match (substring matching would wrongly offer
//! "Tunisia" for the query "uni"), and [`resolve`] turns a submitted query
//! into a country id, falling back to the "all countries" sentinel so that
//! search is always a safe no-op on a miss.

use serde::Serialize;

/// Id of the sentinel option meaning "no country constraint".
pub const ALL_COUNTRIES_ID: &str = "all";

/// Default cap on returned suggestions.
pub const DEFAULT_SUGGEST_LIMIT: usize = 10;

/// A selectable country entry as the presentation layer consumes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryOption {
    pub id: String,
    pub name: String,
}

impl CountryOption {
    /// The "all countries" sentinel entry.
    pub fn all() -> Self {
        Self {
            id: ALL_COUNTRIES_ID.to_string(),
            name: "All Countries".to_string(),
        }
    }

    /// A concrete country; the display name doubles as the filter id.
    pub fn named(name: String) -> Self {
        Self {
            id: name.clone(),
            name,
        }
    }
}

/// Case-insensitive prefix match against country display names.
///
/// Returns at most `limit` matches in the input's original order (callers
/// keep the list alphabetically sorted). An empty query yields no
/// suggestions; that is distinct from "all countries".
pub fn suggest<'a>(
    query: &str,
    countries: &'a [CountryOption],
    limit: usize,
) -> Vec<&'a CountryOption> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    countries
        .iter()
        .filter(|c| c.name.to_lowercase().starts_with(&needle))
        .take(limit)
        .collect()
}

/// Exact case-insensitive name match; no match falls back to the sentinel
/// "all countries" id rather than failing.
pub fn resolve(query: &str, countries: &[CountryOption]) -> String {
    let needle = query.trim().to_lowercase();
    countries
        .iter()
        .find(|c| c.name.to_lowercase() == needle)
        .map(|c| c.id.clone())
        .unwrap_or_else(|| ALL_COUNTRIES_ID.to_string())
}

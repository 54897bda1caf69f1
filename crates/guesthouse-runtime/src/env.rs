//! Environment lookups shared by the provider configs
//!
//! Configs are built from a lookup function so tests can feed a map instead
//! of touching the process environment.

use guesthouse_core::{BookingError, Result};

/// Reads the process environment, treating blank values as unset
pub fn process(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Fetch a required variable or fail with a config error naming it
pub fn required(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<String> {
    lookup(key).ok_or_else(|| BookingError::Config(format!("{key} not set")))
}

#[cfg(test)]
pub(crate) fn from_pairs(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: std::collections::HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_names_missing_key() {
        let lookup = from_pairs(&[]);
        let err = required(&lookup, "FIREBASE_DATABASE_URL").unwrap_err();
        assert!(err.to_string().contains("FIREBASE_DATABASE_URL"));
    }
}

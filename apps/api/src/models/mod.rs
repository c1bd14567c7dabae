pub mod candidate;
pub mod posting;
pub mod profile;

use thiserror::Error;

/// Raised when an untyped record fails to become a domain value.
/// Carries the offending field so callers can surface it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("unknown work preference '{0}' (expected Remote, Hybrid or On-site)")]
    UnknownWorkPreference(String),
}

/// Trims every entry, drops blanks, and removes case-insensitive duplicates
/// while keeping the first spelling seen.
pub(crate) fn normalize_list(values: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    trim_list(values)
        .into_iter()
        .filter(|v| seen.insert(v.to_lowercase()))
        .collect()
}

/// Trims every entry and drops blanks. Duplicates and order are kept.
pub(crate) fn trim_list(values: impl IntoIterator<Item = String>) -> Vec<String> {
    values
        .into_iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}

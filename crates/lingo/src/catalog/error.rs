//! Error and warning types for catalog loading and auditing.

use std::io;
use std::path::PathBuf;

use strsim::levenshtein;
use thiserror::Error;

/// Errors that occur while loading a locale bundle.
///
/// Loading is the only fallible step; resolution itself never fails.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading a bundle file or catalog directory.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Bundle text is not valid JSON.
    #[error("{path}:{line}:{column}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// The JSON root of a bundle must be an object.
    #[error("{path}: bundle root must be a JSON object")]
    NotAnObject { path: PathBuf },
}

/// A non-fatal finding from auditing a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadWarning {
    /// A leaf that is not a string; lookups of this key always miss.
    #[error("'{key}' in '{locale}' is not a string message")]
    UnsupportedLeaf { locale: String, key: String },

    /// A leaf below a member name containing `.`, which no key can reach.
    #[error("'{key}' in '{locale}' cannot be looked up: a member name contains '.'")]
    UnreachableKey { locale: String, key: String },

    /// The source locale defines a message the target locale lacks.
    #[error("'{key}' is missing from '{locale}'")]
    MissingKey { locale: String, key: String },

    /// The target locale defines a message the source locale does not.
    #[error("'{key}' in '{locale}' does not exist in the source locale")]
    UnknownKey { locale: String, key: String },

    /// A translation uses different placeholders than its source message.
    #[error(
        "'{key}' in '{locale}' uses placeholders [{}], source uses [{}]",
        found.join(", "),
        expected.join(", ")
    )]
    PlaceholderMismatch {
        locale: String,
        key: String,
        expected: Vec<String>,
        found: Vec<String>,
    },
}

/// Compute "did you mean" suggestions for a key from the available keys.
///
/// Returns at most three candidates within a small edit distance, closest
/// first.
pub fn compute_suggestions(key: &str, available: &[String]) -> Vec<String> {
    let max_distance = if key.len() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, &String)> = available
        .iter()
        .filter_map(|candidate| {
            let dist = levenshtein(key, candidate);
            (dist > 0 && dist <= max_distance).then_some((dist, candidate))
        })
        .collect();

    suggestions.sort_by_key(|(dist, _)| *dist);
    suggestions
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.clone())
        .collect()
}

//! Committed search criteria.

use std::fmt;

use serde::Serialize;

/// A committed keyword/location pair.
///
/// Records are handed to the downstream consumer in commit order once the
/// session ends. They are never edited after being appended.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SearchRecord {
    /// Search keyword, e.g. a job title.
    pub keyword: String,
    /// Search location, e.g. a city and state.
    pub location: String,
}

impl SearchRecord {
    /// Create a record from its two parts.
    pub fn new(keyword: impl Into<String>, location: impl Into<String>) -> Self {
        Self { keyword: keyword.into(), location: location.into() }
    }
}

impl fmt::Display for SearchRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "keyword: {}, location: {}", self.keyword, self.location)
    }
}

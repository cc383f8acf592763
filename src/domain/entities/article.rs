//! Article domain entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for an article
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArticleId(pub i64);

impl From<i64> for ArticleId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ArticleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    /// Opaque concurrency token, compared verbatim on delete
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Article {
    /// Check the concurrency token against a caller-supplied value.
    /// An article without a token never matches.
    pub fn version_matches(&self, expected: &str) -> bool {
        self.version.as_deref() == Some(expected)
    }
}

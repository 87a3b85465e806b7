use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::status::ArticleStatus;

/// Opaque article identifier assigned by the remote service.
///
/// The service may encode ids as JSON numbers or strings; the original
/// representation is preserved so ids round-trip verbatim into URLs and
/// JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(IdRepr);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
enum IdRepr {
    Number(i64),
    Text(String),
}

impl ArticleId {
    pub fn new(id: impl Into<String>) -> Self {
        let raw = id.into();
        match raw.parse::<i64>() {
            Ok(n) => Self(IdRepr::Number(n)),
            Err(_) => Self(IdRepr::Text(raw)),
        }
    }

    pub fn as_number(&self) -> Option<i64> {
        match &self.0 {
            IdRepr::Number(n) => Some(*n),
            IdRepr::Text(_) => None,
        }
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            IdRepr::Number(n) => write!(f, "{}", n),
            IdRepr::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ArticleId {
    fn from(n: i64) -> Self {
        Self(IdRepr::Number(n))
    }
}

impl From<&str> for ArticleId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ArticleId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl FromStr for ArticleId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("article id must not be empty".to_string());
        }
        Ok(Self::new(trimmed))
    }
}

/// Article as returned by the listing endpoint.
///
/// `status` keeps the raw string from the wire so values outside the
/// canonical vocabulary survive and can be excluded by the derivations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<String>,
}

impl Article {
    /// Canonical status, compared case-insensitively. `None` for unknown values.
    pub fn canonical_status(&self) -> Option<ArticleStatus> {
        ArticleStatus::parse_canonical(&self.status)
    }

    /// Exact, case-sensitive match against the canonical string.
    pub fn has_status(&self, status: ArticleStatus) -> bool {
        self.status == status.as_str()
    }
}

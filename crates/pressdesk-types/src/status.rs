use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status in the service's canonical vocabulary (lowercase, singular).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    Publish,
    Draft,
    Trashed,
}

impl ArticleStatus {
    pub const ALL: [ArticleStatus; 3] = [Self::Publish, Self::Draft, Self::Trashed];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleStatus::Publish => "publish",
            ArticleStatus::Draft => "draft",
            ArticleStatus::Trashed => "trashed",
        }
    }

    /// Case-insensitive match against the canonical strings.
    ///
    /// `"Publish"` and `"PUBLISH"` resolve, `"published"` does not.
    pub fn parse_canonical(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(raw))
    }
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArticleStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_canonical(s).ok_or_else(|| format!("unknown article status: {}", s))
    }
}

/// Dashboard grouping shown to the user.
///
/// Each tab maps onto exactly one [`ArticleStatus`]; the table is fixed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tab {
    #[default]
    Published,
    Drafts,
    Trashed,
}

impl Tab {
    /// Display order.
    pub const ALL: [Tab; 3] = [Tab::Published, Tab::Drafts, Tab::Trashed];

    pub fn status(&self) -> ArticleStatus {
        match self {
            Tab::Published => ArticleStatus::Publish,
            Tab::Drafts => ArticleStatus::Draft,
            Tab::Trashed => ArticleStatus::Trashed,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Published => "Published",
            Tab::Drafts => "Drafts",
            Tab::Trashed => "Trashed",
        }
    }

    pub fn next(&self) -> Tab {
        match self {
            Tab::Published => Tab::Drafts,
            Tab::Drafts => Tab::Trashed,
            Tab::Trashed => Tab::Published,
        }
    }

    pub fn previous(&self) -> Tab {
        match self {
            Tab::Published => Tab::Trashed,
            Tab::Drafts => Tab::Published,
            Tab::Trashed => Tab::Drafts,
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<ArticleStatus> for Tab {
    fn from(status: ArticleStatus) -> Self {
        match status {
            ArticleStatus::Publish => Tab::Published,
            ArticleStatus::Draft => Tab::Drafts,
            ArticleStatus::Trashed => Tab::Trashed,
        }
    }
}

impl FromStr for Tab {
    type Err = String;

    /// Accepts the tab label or the canonical status, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|tab| tab.label().eq_ignore_ascii_case(s))
            .or_else(|| ArticleStatus::parse_canonical(s).map(Tab::from))
            .ok_or_else(|| format!("unknown tab: {} (expected published, drafts or trashed)", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_to_status_table() {
        assert_eq!(Tab::Published.status().as_str(), "publish");
        assert_eq!(Tab::Drafts.status().as_str(), "draft");
        assert_eq!(Tab::Trashed.status().as_str(), "trashed");
    }

    #[test]
    fn test_parse_canonical_ignores_case() {
        assert_eq!(
            ArticleStatus::parse_canonical("PUBLISH"),
            Some(ArticleStatus::Publish)
        );
        assert_eq!(
            ArticleStatus::parse_canonical("Draft"),
            Some(ArticleStatus::Draft)
        );
        assert_eq!(ArticleStatus::parse_canonical("Published"), None);
        assert_eq!(ArticleStatus::parse_canonical(""), None);
    }

    #[test]
    fn test_tab_from_str_accepts_label_and_status() {
        assert_eq!("published".parse::<Tab>().unwrap(), Tab::Published);
        assert_eq!("DRAFTS".parse::<Tab>().unwrap(), Tab::Drafts);
        assert_eq!("draft".parse::<Tab>().unwrap(), Tab::Drafts);
        assert_eq!("trashed".parse::<Tab>().unwrap(), Tab::Trashed);
        assert!("archive".parse::<Tab>().is_err());
    }

    #[test]
    fn test_tab_cycle_round_trips() {
        for tab in Tab::ALL {
            assert_eq!(tab.next().previous(), tab);
        }
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&ArticleStatus::Trashed).unwrap();
        assert_eq!(json, "\"trashed\"");
    }
}

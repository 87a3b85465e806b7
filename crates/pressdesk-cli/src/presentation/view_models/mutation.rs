use pressdesk_types::ArticleId;
use serde::Serialize;
use std::fmt;

use super::{CreateView, TabCountsViewModel, ViewMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MutationKind {
    Trash,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MutationStatus {
    Applied,
    Cancelled,
}

/// `pressdesk trash` / `pressdesk delete`
#[derive(Debug, Serialize)]
pub struct MutationResultViewModel {
    pub action: MutationKind,
    pub id: ArticleId,
    pub outcome: MutationStatus,
    pub confirmation: String,
    /// Counts after the follow-up re-fetch; absent when cancelled or when
    /// the re-fetch failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counts: Option<TabCountsViewModel>,
    /// Banner of a failed follow-up re-fetch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_error: Option<String>,
}

impl CreateView for MutationResultViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::mutation::MutationResultView;
        Box::new(MutationResultView::new(self, mode))
    }
}

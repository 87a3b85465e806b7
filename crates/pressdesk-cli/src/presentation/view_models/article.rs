use pressdesk_types::ArticleId;
use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewMode};

// --------------------------------------------------------
// Data Definitions (ViewModels)
// --------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TabCountsViewModel {
    pub published: usize,
    pub drafts: usize,
    pub trashed: usize,
}

/// `pressdesk list`: the dashboard screen for one tab.
#[derive(Debug, Serialize)]
pub struct ArticleListViewModel {
    pub user_label: String,
    pub tab: String,
    pub status: String,
    pub counts: TabCountsViewModel,
    pub rows: Vec<ArticleRowViewModel>,
}

#[derive(Debug, Serialize)]
pub struct ArticleRowViewModel {
    pub id: ArticleId,
    pub title: String,
    pub category: String,
    pub status: String,
    /// Already rendered for display (`d/m/yyyy, HH.MM.SS`, `N/A` or `Invalid Date`).
    pub created_date: String,
    pub content_chars: usize,
}

/// `pressdesk counts`
#[derive(Debug, Serialize)]
pub struct CountsViewModel {
    pub counts: TabCountsViewModel,
    pub total: usize,
    /// Articles whose status is outside the canonical vocabulary.
    pub unclassified: usize,
}

/// `pressdesk show`
#[derive(Debug, Serialize)]
pub struct ArticleDetailViewModel {
    pub id: ArticleId,
    pub title: String,
    pub category: String,
    pub status: String,
    pub created_date: Option<String>,
    pub created_display: String,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SaveAction {
    Created,
    Updated,
}

/// `pressdesk create` / `pressdesk edit`
#[derive(Debug, Serialize)]
pub struct SaveResultViewModel {
    pub action: SaveAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ArticleId>,
    pub title: String,
    pub status: String,
    /// Absent when the re-fetch after saving failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counts: Option<TabCountsViewModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_error: Option<String>,
}

// --------------------------------------------------------
// CreateView Trait Implementations (Bridge to Views)
// --------------------------------------------------------

impl CreateView for ArticleListViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::article::ArticleListView;
        Box::new(ArticleListView::new(self, mode))
    }
}

impl CreateView for CountsViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::article::CountsView;
        Box::new(CountsView::new(self, mode))
    }
}

impl CreateView for ArticleDetailViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::article::ArticleDetailView;
        Box::new(ArticleDetailView::new(self, mode))
    }
}

impl CreateView for SaveResultViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::article::SaveResultView;
        Box::new(SaveResultView::new(self, mode))
    }
}

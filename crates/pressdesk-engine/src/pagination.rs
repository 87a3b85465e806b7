use pressdesk_types::{Article, ArticleStatus, Tab};
use serde::{Deserialize, Serialize};

/// Articles shown per preview page.
pub const PAGE_SIZE: usize = 5;
/// `limit` used to approximate "every article" on the listing endpoint.
pub const LIST_LIMIT: usize = 1000;
/// Server offset step between coarse preview batches.
pub const OFFSET_STRIDE: usize = 1000;

/// Server offset for `page` under the coarse strategy: `(page - 1) * 1000`.
///
/// This skips whole server batches, not individual articles.
pub fn coarse_offset(page: usize) -> usize {
    page.saturating_sub(1).saturating_mul(OFFSET_STRIDE)
}

/// Which status string marks an article as published in the preview.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreviewStatusMatch {
    /// Exactly `publish`, the vocabulary the dashboard uses.
    #[default]
    Canonical,
    /// Exactly `Published`, the tab label. Kept for services that store labels.
    DisplayLabel,
}

impl PreviewStatusMatch {
    pub fn matches(&self, article: &Article) -> bool {
        match self {
            PreviewStatusMatch::Canonical => article.has_status(ArticleStatus::Publish),
            PreviewStatusMatch::DisplayLabel => article.status == Tab::Published.label(),
        }
    }
}

pub fn filter_published(articles: &[Article], rule: PreviewStatusMatch) -> Vec<Article> {
    articles
        .iter()
        .filter(|article| rule.matches(article))
        .cloned()
        .collect()
}

/// The `[(page - 1) * page_size, + page_size)` window, clamped to `items`.
///
/// Page 0 is treated as page 1.
pub fn page_window<T: Clone>(items: &[T], page: usize, page_size: usize) -> Vec<T> {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    items.iter().skip(start).take(page_size).cloned().collect()
}

/// Navigation heuristics for the page currently on screen.
///
/// These are approximations: a full page is assumed to have a successor,
/// a short page is assumed to be the last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageCursor {
    pub page: usize,
    pub len: usize,
    pub page_size: usize,
}

impl PageCursor {
    pub fn new(page: usize, len: usize) -> Self {
        Self {
            page,
            len,
            page_size: PAGE_SIZE,
        }
    }

    pub fn has_next(&self) -> bool {
        self.len == self.page_size
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}

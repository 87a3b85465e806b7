use pressdesk_types::ArticleId;
use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewMode};

/// `pressdesk preview`: one page of the public listing.
#[derive(Debug, Serialize)]
pub struct PreviewPageViewModel {
    pub page: usize,
    pub page_size: usize,
    pub has_next: bool,
    pub has_previous: bool,
    pub articles: Vec<PreviewEntryViewModel>,
}

#[derive(Debug, Serialize)]
pub struct PreviewEntryViewModel {
    pub id: ArticleId,
    pub title: String,
    pub category: String,
    pub content: String,
}

impl CreateView for PreviewPageViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::preview::PreviewPageView;
        Box::new(PreviewPageView::new(self, mode))
    }
}

use serde::Serialize;

use super::{ArticleRowViewModel, StatusLevel};

/// Snapshot of the interactive dashboard screen.
#[derive(Debug, Serialize)]
pub struct DashboardScreenViewModel {
    pub user_label: String,
    pub tabs: Vec<TabViewModel>,
    pub rows: Vec<ArticleRowViewModel>,
    pub loading: bool,
    pub banner: Option<BannerViewModel>,
}

#[derive(Debug, Serialize)]
pub struct TabViewModel {
    pub label: String,
    pub count: usize,
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct BannerViewModel {
    pub level: StatusLevel,
    pub message: String,
}

/// Snapshot of the preview screen.
#[derive(Debug, Serialize)]
pub struct PreviewScreenViewModel {
    pub page: usize,
    pub has_next: bool,
    pub has_previous: bool,
    pub articles: Vec<PreviewCardViewModel>,
    pub loading: bool,
    pub banner: Option<BannerViewModel>,
}

#[derive(Debug, Serialize)]
pub struct PreviewCardViewModel {
    pub title: String,
    pub category: String,
    pub content: String,
}

/// Pending confirmation shown as a modal.
#[derive(Debug, Serialize)]
pub struct ConfirmDialogViewModel {
    pub title: String,
    pub message: String,
    pub destructive: bool,
}

use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewMode};

/// Shown when `pressdesk` runs without a subcommand.
#[derive(Debug, Serialize)]
pub struct GuidanceViewModel {
    pub api_url: String,
    pub config_path: String,
    pub config_exists: bool,
}

impl CreateView for GuidanceViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::guidance::GuidanceView;
        Box::new(GuidanceView::new(self, mode))
    }
}

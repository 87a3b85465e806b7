use pressdesk_runtime::Config;
use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewMode};

/// `pressdesk config show`
#[derive(Debug, Serialize)]
pub struct ConfigViewModel {
    pub path: String,
    pub exists: bool,
    pub config: Config,
}

/// `pressdesk config path`
#[derive(Debug, Serialize)]
pub struct ConfigPathViewModel {
    pub path: String,
    pub exists: bool,
}

impl CreateView for ConfigViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::config::ConfigView;
        Box::new(ConfigView::new(self, mode))
    }
}

impl CreateView for ConfigPathViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::config::ConfigPathView;
        Box::new(ConfigPathView::new(self, mode))
    }
}

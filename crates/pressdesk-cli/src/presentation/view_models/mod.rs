pub mod article;
pub mod common;
pub mod config;
pub mod guidance;
pub mod mutation;
pub mod preview;
pub mod result;
pub mod tui;

use std::fmt;

pub use article::{
    ArticleDetailViewModel, ArticleListViewModel, ArticleRowViewModel, CountsViewModel,
    SaveAction, SaveResultViewModel, TabCountsViewModel,
};
pub use common::{Guidance, OutputFormat, StatusBadge, StatusLevel, ViewMode};
pub use config::{ConfigPathViewModel, ConfigViewModel};
pub use guidance::GuidanceViewModel;
pub use mutation::{MutationKind, MutationResultViewModel, MutationStatus};
pub use preview::{PreviewEntryViewModel, PreviewPageViewModel};
pub use result::CommandResultViewModel;
pub use tui::{
    BannerViewModel, ConfirmDialogViewModel, DashboardScreenViewModel, PreviewCardViewModel,
    PreviewScreenViewModel, TabViewModel,
};

/// Bridge from a view model to its text view for a given density.
pub trait CreateView {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a>;
}

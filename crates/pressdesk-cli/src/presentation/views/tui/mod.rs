//! Ratatui views and stateful components for `pressdesk dashboard`.
//!
//! Views are stateless widgets over a view model. Components own UI state
//! (selection, modal visibility), handle keys and emit actions; anything that
//! talks to the service is left to the renderer.

pub mod article_table;
pub mod banner;
pub mod components;
pub mod confirm_dialog;
pub mod header;
pub mod preview;
pub mod status_bar;

pub use article_table::ArticleTableView;
pub use banner::BannerView;
pub use components::{ArticleTableComponent, ConfirmDialogComponent, PreviewComponent};
pub use confirm_dialog::ConfirmDialogView;
pub use header::HeaderView;
pub use preview::PreviewView;
pub use status_bar::StatusBarView;

use crate::presentation::view_models::StatusLevel;
use ratatui::style::Color;

/// Convert StatusLevel to Ratatui Color
pub(crate) fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Warning => Color::Yellow,
        StatusLevel::Error => Color::Red,
    }
}

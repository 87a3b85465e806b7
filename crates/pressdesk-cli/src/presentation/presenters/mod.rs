pub mod article;
pub mod config;
pub mod mutation;
pub mod preview;
pub mod tui;

pub use article::{
    present_article_detail, present_article_list, present_counts, present_row,
    present_save_result, present_tab_counts,
};
pub use config::{present_config, present_config_path, present_config_written, present_guidance};
pub use mutation::{Refreshed, present_mutation_result};
pub use preview::present_preview_page;
pub use tui::{present_confirm_dialog, present_dashboard_screen, present_preview_screen};

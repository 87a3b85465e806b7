pub mod article_table;
pub mod confirm_dialog;
pub mod preview;

pub use article_table::{ArticleTableComponent, TableAction};
pub use confirm_dialog::ConfirmDialogComponent;
pub use preview::{PreviewAction, PreviewComponent};

pub mod article;
pub mod error;
pub mod fields;
pub mod status;

pub use article::{Article, ArticleId};
pub use error::ValidationError;
pub use fields::{
    ArticleFields, ArticlePatch, MIN_CATEGORY_CHARS, MIN_CONTENT_CHARS, MIN_TITLE_CHARS,
};
pub use status::{ArticleStatus, Tab};

use async_trait::async_trait;
use pressdesk_types::{Article, ArticleFields, ArticleId, ArticlePatch};
use std::sync::Arc;

use crate::error::FetchError;

/// The four operations of the remote article store.
///
/// Each call is a single request/response exchange. Nothing retries; the
/// caller decides how to recover from a [`FetchError`].
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Up to `limit` articles starting at `offset`. No status filter exists server-side.
    async fn list(&self, limit: usize, offset: usize) -> Result<Vec<Article>, FetchError>;

    async fn create(&self, fields: &ArticleFields) -> Result<(), FetchError>;

    /// Partial update: used for full form edits and for the trash transition.
    async fn update(&self, id: &ArticleId, patch: &ArticlePatch) -> Result<(), FetchError>;

    async fn delete_permanently(&self, id: &ArticleId) -> Result<(), FetchError>;
}

#[async_trait]
impl<T: ArticleRepository + ?Sized> ArticleRepository for Arc<T> {
    async fn list(&self, limit: usize, offset: usize) -> Result<Vec<Article>, FetchError> {
        (**self).list(limit, offset).await
    }

    async fn create(&self, fields: &ArticleFields) -> Result<(), FetchError> {
        (**self).create(fields).await
    }

    async fn update(&self, id: &ArticleId, patch: &ArticlePatch) -> Result<(), FetchError> {
        (**self).update(id, patch).await
    }

    async fn delete_permanently(&self, id: &ArticleId) -> Result<(), FetchError> {
        (**self).delete_permanently(id).await
    }
}

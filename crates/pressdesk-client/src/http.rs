use async_trait::async_trait;
use pressdesk_types::{Article, ArticleFields, ArticleId, ArticlePatch};
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use std::time::Duration;

use crate::error::{BuildError, FetchError, Operation};
use crate::repository::ArticleRepository;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/article";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    /// `None` leaves requests unbounded.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// [`ArticleRepository`] over the service's JSON REST endpoints.
///
/// ```text
/// GET    {base}/limit/{limit}/{offset}
/// POST   {base}/
/// PUT    {base}/{id}
/// DELETE {base}/{id}
/// ```
#[derive(Debug, Clone)]
pub struct HttpArticleClient {
    base: Url,
    client: Client,
}

impl HttpArticleClient {
    pub fn new(config: ClientConfig) -> Result<Self, BuildError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Self::with_client(&config.base_url, builder.build()?)
    }

    fn with_client(base_url: &str, client: Client) -> Result<Self, BuildError> {
        let base = Url::parse(base_url)
            .map_err(|e| BuildError::InvalidBaseUrl(format!("{}: {}", base_url, e)))?;
        if base.cannot_be_a_base() {
            return Err(BuildError::InvalidBaseUrl(format!(
                "{}: not a hierarchical URL",
                base_url
            )));
        }
        Ok(Self { base, client })
    }

    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        tracing::debug!(%method, %url, "article service request");
        self.client.request(method, url)
    }

    async fn send(operation: Operation, request: RequestBuilder) -> Result<Response, FetchError> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!(%operation, error = %e, "article service unreachable");
            FetchError::transport(operation, e)
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.bytes().await.unwrap_or_default();
        let err = FetchError::from_response(operation, status.as_u16(), &body);
        tracing::warn!(%operation, status = status.as_u16(), message = err.message(), "article service rejected request");
        Err(err)
    }
}

#[async_trait]
impl ArticleRepository for HttpArticleClient {
    async fn list(&self, limit: usize, offset: usize) -> Result<Vec<Article>, FetchError> {
        let url = self.url(&["limit", &limit.to_string(), &offset.to_string()]);
        let response = Self::send(Operation::List, self.request(Method::GET, url)).await?;

        let articles: Vec<Article> = response
            .json()
            .await
            .map_err(|e| FetchError::transport(Operation::List, e))?;
        tracing::debug!(count = articles.len(), limit, offset, "listed articles");
        Ok(articles)
    }

    async fn create(&self, fields: &ArticleFields) -> Result<(), FetchError> {
        let url = self.url(&[""]);
        // `.json()` also sets `Content-Type: application/json`
        let request = self.request(Method::POST, url).json(fields);
        Self::send(Operation::Create, request).await?;
        Ok(())
    }

    async fn update(&self, id: &ArticleId, patch: &ArticlePatch) -> Result<(), FetchError> {
        let url = self.url(&[&id.to_string()]);
        let request = self.request(Method::PUT, url).json(patch);
        Self::send(Operation::Update, request).await?;
        Ok(())
    }

    async fn delete_permanently(&self, id: &ArticleId) -> Result<(), FetchError> {
        let url = self.url(&[&id.to_string()]);
        Self::send(Operation::Delete, self.request(Method::DELETE, url)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> HttpArticleClient {
        HttpArticleClient::new(ClientConfig::new(base)).unwrap()
    }

    #[test]
    fn test_list_url() {
        let c = client("http://localhost:8080/article");
        assert_eq!(
            c.url(&["limit", "1000", "0"]).as_str(),
            "http://localhost:8080/article/limit/1000/0"
        );
    }

    #[test]
    fn test_create_url_keeps_trailing_slash() {
        let c = client("http://localhost:8080/article");
        assert_eq!(c.url(&[""]).as_str(), "http://localhost:8080/article/");

        let c = client("http://localhost:8080/article/");
        assert_eq!(c.url(&[""]).as_str(), "http://localhost:8080/article/");
    }

    #[test]
    fn test_item_url_tolerates_trailing_slash_in_base() {
        let c = client("http://localhost:8080/article/");
        assert_eq!(c.url(&["12"]).as_str(), "http://localhost:8080/article/12");
    }

    #[test]
    fn test_item_url_escapes_opaque_ids() {
        let c = client("http://localhost:8080/article");
        let id = ArticleId::new("a b/c");
        assert_eq!(
            c.url(&[&id.to_string()]).as_str(),
            "http://localhost:8080/article/a%20b%2Fc"
        );
    }

    #[test]
    fn test_rejects_non_hierarchical_base() {
        assert!(HttpArticleClient::new(ClientConfig::new("mailto:someone@example.com")).is_err());
        assert!(HttpArticleClient::new(ClientConfig::new("not a url")).is_err());
    }
}

//! Recording in-memory [`ArticleRepository`].

use async_trait::async_trait;
use pressdesk_client::{ArticleRepository, FetchError, Operation};
use pressdesk_types::{Article, ArticleFields, ArticleId, ArticlePatch};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

/// A repository call as observed by [`FakeRepository`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List { limit: usize, offset: usize },
    Create(ArticleFields),
    Update(ArticleId, ArticlePatch),
    Delete(ArticleId),
}

#[derive(Default)]
struct State {
    articles: Vec<Article>,
    calls: Vec<Call>,
    failures: HashMap<Operation, VecDeque<FetchError>>,
    next_id: i64,
}

/// In-memory article store that records every call.
///
/// Behaves like the real service: `list` slices by offset/limit, unknown ids
/// fail with 404 on update and delete. Failures can be queued per operation
/// with [`FakeRepository::fail_next`].
pub struct FakeRepository {
    state: Mutex<State>,
}

impl Default for FakeRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeRepository {
    pub fn new() -> Self {
        Self::with_articles(Vec::new())
    }

    pub fn with_articles(articles: Vec<Article>) -> Self {
        let next_id = articles
            .iter()
            .filter_map(|a| a.id.as_number())
            .max()
            .unwrap_or(0)
            + 1;

        Self {
            state: Mutex::new(State {
                articles,
                next_id,
                ..State::default()
            }),
        }
    }

    /// Queue a failure for the next call of `operation`.
    ///
    /// The message becomes the server-provided reason.
    pub fn fail_next(&self, operation: Operation, status: u16, message: &str) {
        let body = serde_json::json!({ "error": message }).to_string();
        let error = FetchError::from_response(operation, status, body.as_bytes());
        self.lock()
            .failures
            .entry(operation)
            .or_default()
            .push_back(error);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.lock().calls.clone()
    }

    pub fn list_calls(&self) -> usize {
        self.lock()
            .calls
            .iter()
            .filter(|c| matches!(c, Call::List { .. }))
            .count()
    }

    pub fn articles(&self) -> Vec<Article> {
        self.lock().articles.clone()
    }

    pub fn clear_calls(&self) {
        self.lock().calls.clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().expect("fake repository lock poisoned")
    }

    fn record(&self, call: Call, operation: Operation) -> Result<(), FetchError> {
        let mut state = self.lock();
        state.calls.push(call);
        match state.failures.get_mut(&operation).and_then(|q| q.pop_front()) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

fn not_found(operation: Operation) -> FetchError {
    FetchError::from_response(operation, 404, br#"{"error": "record not found"}"#)
}

#[async_trait]
impl ArticleRepository for FakeRepository {
    async fn list(&self, limit: usize, offset: usize) -> Result<Vec<Article>, FetchError> {
        self.record(Call::List { limit, offset }, Operation::List)?;
        let state = self.lock();
        Ok(state
            .articles
            .iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn create(&self, fields: &ArticleFields) -> Result<(), FetchError> {
        self.record(Call::Create(fields.clone()), Operation::Create)?;
        let mut state = self.lock();
        let id = state.next_id;
        state.next_id += 1;
        state.articles.push(Article {
            id: ArticleId::from(id),
            title: fields.title.clone(),
            content: fields.content.clone(),
            category: fields.category.clone(),
            status: fields.status.as_str().to_string(),
            created_date: Some("2024-01-01T00:00:00Z".to_string()),
        });
        Ok(())
    }

    async fn update(&self, id: &ArticleId, patch: &ArticlePatch) -> Result<(), FetchError> {
        self.record(Call::Update(id.clone(), patch.clone()), Operation::Update)?;
        let mut state = self.lock();
        let article = state
            .articles
            .iter_mut()
            .find(|a| &a.id == id)
            .ok_or_else(|| not_found(Operation::Update))?;

        if let Some(title) = &patch.title {
            article.title = title.clone();
        }
        if let Some(content) = &patch.content {
            article.content = content.clone();
        }
        if let Some(category) = &patch.category {
            article.category = category.clone();
        }
        if let Some(status) = patch.status {
            article.status = status.as_str().to_string();
        }
        Ok(())
    }

    async fn delete_permanently(&self, id: &ArticleId) -> Result<(), FetchError> {
        self.record(Call::Delete(id.clone()), Operation::Delete)?;
        let mut state = self.lock();
        let before = state.articles.len();
        state.articles.retain(|a| &a.id != id);
        if state.articles.len() == before {
            return Err(not_found(Operation::Delete));
        }
        Ok(())
    }
}

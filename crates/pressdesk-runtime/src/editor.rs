use crate::dashboard::Dashboard;
use pressdesk_client::{ArticleRepository, FetchError};
use pressdesk_types::{Article, ArticleFields, ArticleId, ArticlePatch, ArticleStatus, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit(ArticleId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Saved and the dashboard re-fetched.
    Saved,
    /// A form rule failed; nothing was sent.
    Rejected(ValidationError),
    /// The service refused the save; the form keeps its values.
    Failed(FetchError),
}

/// Create/edit form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleEditor {
    mode: EditorMode,
    pub title: String,
    pub content: String,
    pub category: String,
    status: ArticleStatus,
    error: Option<String>,
}

impl ArticleEditor {
    pub fn create() -> Self {
        Self {
            mode: EditorMode::Create,
            title: String::new(),
            content: String::new(),
            category: String::new(),
            status: ArticleStatus::Draft,
            error: None,
        }
    }

    /// Pre-filled from `article`. Its status becomes the default submit status.
    pub fn edit(article: &Article) -> Self {
        Self {
            mode: EditorMode::Edit(article.id.clone()),
            title: article.title.clone(),
            content: article.content.clone(),
            category: article.category.clone(),
            status: article.canonical_status().unwrap_or(ArticleStatus::Draft),
            error: None,
        }
    }

    /// Status the article had when the form opened (`draft` for a new one).
    pub fn initial_status(&self) -> ArticleStatus {
        self.status
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn fields(&self, status: ArticleStatus) -> ArticleFields {
        ArticleFields::new(
            self.title.clone(),
            self.content.clone(),
            self.category.clone(),
            status,
        )
    }

    /// Validate, then create or fully update, then re-fetch `dashboard` once.
    pub async fn submit<R: ArticleRepository>(
        &mut self,
        dashboard: &mut Dashboard<R>,
        status: ArticleStatus,
    ) -> SubmitOutcome {
        let fields = self.fields(status);
        if let Err(err) = fields.validate() {
            self.error = Some(err.to_string());
            return SubmitOutcome::Rejected(err);
        }

        self.error = None;
        let result = match &self.mode {
            EditorMode::Create => dashboard.repository().create(&fields).await,
            EditorMode::Edit(id) => {
                dashboard
                    .repository()
                    .update(id, &ArticlePatch::from(fields))
                    .await
            }
        };

        match result {
            Ok(()) => {
                tracing::info!(mode = ?self.mode, %status, "article saved");
                let _ = dashboard.refresh().await;
                SubmitOutcome::Saved
            }
            Err(err) => {
                tracing::warn!(mode = ?self.mode, error = %err, "article save failed");
                self.error = Some(format!("[API Error] {}", err));
                SubmitOutcome::Failed(err)
            }
        }
    }
}

//! Trash and permanent delete, behind an explicit confirmation step.

use crate::dashboard::Dashboard;
use pressdesk_client::{ArticleRepository, FetchError};
use pressdesk_types::{ArticleId, ArticlePatch};

pub const TRASH_CONFIRMATION: &str = "Are you sure you want to move this article to the trash?";
pub const DELETE_CONFIRMATION: &str = "WARNING: deleting this article is permanent. Continue?";

/// A destructive action waiting for the user's answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    Trash(ArticleId),
    Delete(ArticleId),
}

impl PendingAction {
    pub fn id(&self) -> &ArticleId {
        match self {
            PendingAction::Trash(id) | PendingAction::Delete(id) => id,
        }
    }

    pub fn confirmation_message(&self) -> &'static str {
        match self {
            PendingAction::Trash(_) => TRASH_CONFIRMATION,
            PendingAction::Delete(_) => DELETE_CONFIRMATION,
        }
    }

    fn failure_banner(&self, err: &FetchError) -> String {
        let what = match self {
            PendingAction::Trash(_) => "Failed to move article to trash",
            PendingAction::Delete(_) => "Failed to delete article permanently",
        };
        format!("[API Error] {}: {}", what, err)
    }
}

/// Question to put to the user before a destructive action runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationRequest {
    pub action: PendingAction,
    pub message: String,
}

impl ConfirmationRequest {
    fn new(action: PendingAction) -> Self {
        let message = action.confirmation_message().to_string();
        Self { action, message }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Confirm,
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    /// The user declined; nothing was sent.
    Cancelled,
    /// The service accepted the change and the collection was re-fetched.
    Applied,
    /// The service rejected the change; the collection is untouched.
    Failed(FetchError),
}

impl<R: ArticleRepository> Dashboard<R> {
    /// Ask before moving `id` to the trash. No I/O.
    pub fn request_trash(&self, id: ArticleId) -> ConfirmationRequest {
        ConfirmationRequest::new(PendingAction::Trash(id))
    }

    /// Ask before deleting `id` for good. No I/O.
    pub fn request_delete(&self, id: ArticleId) -> ConfirmationRequest {
        ConfirmationRequest::new(PendingAction::Delete(id))
    }

    /// Carry out (or drop) a confirmed action.
    ///
    /// A confirmed action that succeeds is followed by exactly one re-fetch;
    /// a failed one by none.
    pub async fn resolve(
        &mut self,
        request: ConfirmationRequest,
        decision: Decision,
    ) -> MutationOutcome {
        if decision == Decision::Cancel {
            tracing::debug!(id = %request.action.id(), "action cancelled");
            return MutationOutcome::Cancelled;
        }

        let result = match &request.action {
            PendingAction::Trash(id) => self.repository().update(id, &ArticlePatch::trash()).await,
            PendingAction::Delete(id) => self.repository().delete_permanently(id).await,
        };

        match result {
            Ok(()) => {
                tracing::info!(id = %request.action.id(), "article mutation applied");
                // A failed re-fetch is reported through the banner.
                let _ = self.refresh().await;
                MutationOutcome::Applied
            }
            Err(err) => {
                tracing::warn!(id = %request.action.id(), error = %err, "article mutation failed");
                self.set_error(request.action.failure_banner(&err));
                MutationOutcome::Failed(err)
            }
        }
    }
}

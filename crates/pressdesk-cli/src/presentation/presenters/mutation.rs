use crate::args::hints::cmd;
use crate::presentation::presenters::present_tab_counts;
use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, MutationKind, MutationResultViewModel, MutationStatus,
    StatusBadge, TabCountsViewModel,
};
use pressdesk_client::ArticleRepository;
use pressdesk_engine::TabCounts;
use pressdesk_runtime::{ConfirmationRequest, Dashboard, PendingAction};

/// Dashboard state left by the re-fetch that follows an applied change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refreshed<'a> {
    Counts(TabCounts),
    /// The change went through but the listing failed; holds the banner.
    Failed(&'a str),
}

impl<'a> Refreshed<'a> {
    pub fn from_dashboard<R: ArticleRepository>(dashboard: &'a Dashboard<R>) -> Self {
        match dashboard.error() {
            Some(banner) => Refreshed::Failed(banner),
            None => Refreshed::Counts(dashboard.counts()),
        }
    }

    pub(crate) fn counts(&self) -> Option<TabCountsViewModel> {
        match self {
            Refreshed::Counts(counts) => Some(present_tab_counts(*counts)),
            Refreshed::Failed(_) => None,
        }
    }

    pub(crate) fn error(&self) -> Option<String> {
        match self {
            Refreshed::Counts(_) => None,
            Refreshed::Failed(banner) => Some(banner.to_string()),
        }
    }
}

/// `after` is `None` for a cancelled request.
pub fn present_mutation_result(
    request: &ConfirmationRequest,
    after: Option<Refreshed<'_>>,
) -> CommandResultViewModel<MutationResultViewModel> {
    let action = match request.action {
        PendingAction::Trash(_) => MutationKind::Trash,
        PendingAction::Delete(_) => MutationKind::Delete,
    };
    let outcome = if after.is_some() {
        MutationStatus::Applied
    } else {
        MutationStatus::Cancelled
    };

    let content = MutationResultViewModel {
        action,
        id: request.action.id().clone(),
        outcome,
        confirmation: request.message.clone(),
        counts: after.and_then(|a| a.counts()),
        refresh_error: after.and_then(|a| a.error()),
    };

    let label = match action {
        MutationKind::Trash => "Moved to trash",
        MutationKind::Delete => "Deleted permanently",
    };

    match (after, action) {
        (None, _) => CommandResultViewModel::new(content).with_badge(StatusBadge::info("Cancelled")),
        (Some(Refreshed::Failed(_)), _) => CommandResultViewModel::new(content)
            .with_badge(StatusBadge::warning(format!("{label}; list not reloaded")))
            .with_suggestion(Guidance::new("Retry the listing").with_command(cmd::LIST)),
        (Some(Refreshed::Counts(_)), MutationKind::Trash) => CommandResultViewModel::new(content)
            .with_badge(StatusBadge::success(label))
            .with_suggestion(Guidance::new("See the trash").with_command(cmd::LIST_TRASHED)),
        (Some(Refreshed::Counts(_)), MutationKind::Delete) => {
            CommandResultViewModel::new(content).with_badge(StatusBadge::success(label))
        }
    }
}

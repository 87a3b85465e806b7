//! Screen snapshots for the interactive dashboard.

use crate::presentation::presenters::present_row;
use crate::presentation::view_models::{
    BannerViewModel, ConfirmDialogViewModel, DashboardScreenViewModel, PreviewCardViewModel,
    PreviewScreenViewModel, StatusLevel, TabViewModel,
};
use pressdesk_client::ArticleRepository;
use pressdesk_runtime::{ConfirmationRequest, Dashboard, PendingAction, Preview};
use pressdesk_types::Tab;

fn error_banner(message: Option<&str>) -> Option<BannerViewModel> {
    message.map(|message| BannerViewModel {
        level: StatusLevel::Error,
        message: message.to_string(),
    })
}

pub fn present_dashboard_screen<R: ArticleRepository>(
    dashboard: &Dashboard<R>,
    user_label: &str,
) -> DashboardScreenViewModel {
    let counts = dashboard.counts();
    let tabs = Tab::ALL
        .iter()
        .map(|tab| TabViewModel {
            label: tab.label().to_string(),
            count: counts.get(*tab),
            selected: *tab == dashboard.tab(),
        })
        .collect();

    DashboardScreenViewModel {
        user_label: user_label.to_string(),
        tabs,
        rows: dashboard.visible().iter().map(present_row).collect(),
        loading: dashboard.is_loading(),
        banner: error_banner(dashboard.error()),
    }
}

pub fn present_preview_screen<R: ArticleRepository>(preview: &Preview<R>) -> PreviewScreenViewModel {
    let cursor = preview.cursor();
    PreviewScreenViewModel {
        page: cursor.page,
        has_next: cursor.has_next(),
        has_previous: cursor.has_previous(),
        articles: preview
            .articles()
            .iter()
            .map(|a| PreviewCardViewModel {
                title: a.title.clone(),
                category: a.category.clone(),
                content: a.content.clone(),
            })
            .collect(),
        loading: preview.is_loading(),
        banner: error_banner(preview.error()),
    }
}

pub fn present_confirm_dialog(request: &ConfirmationRequest) -> ConfirmDialogViewModel {
    let (title, destructive) = match request.action {
        PendingAction::Trash(_) => ("Move to trash", false),
        PendingAction::Delete(_) => ("Delete permanently", true),
    };
    ConfirmDialogViewModel {
        title: format!("{} #{}", title, request.action.id()),
        message: request.message.clone(),
        destructive,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pressdesk_client::FetchError;
    use pressdesk_testing::FakeRepository;
    use pressdesk_testing::fixtures::mixed_collection;

    #[test]
    fn test_dashboard_screen_marks_selected_tab() {
        let mut dashboard = Dashboard::new(FakeRepository::new());
        let ticket = dashboard.begin_fetch();
        dashboard.apply_fetch(ticket, Ok::<_, FetchError>(mixed_collection()));
        dashboard.select_tab(Tab::Drafts);

        let screen = present_dashboard_screen(&dashboard, "user_001_simulated");
        let selected: Vec<_> = screen.tabs.iter().filter(|t| t.selected).collect();

        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].label, "Drafts");
        assert_eq!(screen.rows.len(), selected[0].count);
        assert!(screen.banner.is_none());
        assert!(!screen.loading);
    }

    #[test]
    fn test_delete_dialog_is_destructive() {
        let dashboard = Dashboard::new(FakeRepository::new());
        let request = dashboard.request_delete("9".parse().unwrap());
        let dialog = present_confirm_dialog(&request);

        assert!(dialog.destructive);
        assert_eq!(dialog.title, "Delete permanently #9");
    }
}

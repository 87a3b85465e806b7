use crate::args::hints::{cmd, fmt};
use crate::presentation::view_models::{
    ArticleDetailViewModel, ArticleListViewModel, ArticleRowViewModel, CommandResultViewModel,
    CountsViewModel, Guidance, SaveAction, SaveResultViewModel, StatusBadge, TabCountsViewModel,
};
use crate::presentation::presenters::Refreshed;
use pressdesk_client::ArticleRepository;
use pressdesk_engine::{ArticleRow, DateDisplay, TabCounts};
use pressdesk_runtime::Dashboard;
use pressdesk_types::{Article, ArticleFields, ArticleId, Tab};

pub fn present_tab_counts(counts: TabCounts) -> TabCountsViewModel {
    TabCountsViewModel {
        published: counts.published,
        drafts: counts.drafts,
        trashed: counts.trashed,
    }
}

pub fn present_row(row: &ArticleRow) -> ArticleRowViewModel {
    ArticleRowViewModel {
        id: row.id.clone(),
        title: row.title.clone(),
        category: row.category.clone(),
        status: row.status.clone(),
        created_date: row.created_date.clone(),
        content_chars: row.content.chars().count(),
    }
}

/// The dashboard for the currently selected tab of `dashboard`.
pub fn present_article_list<R: ArticleRepository>(
    dashboard: &Dashboard<R>,
    user_label: &str,
) -> CommandResultViewModel<ArticleListViewModel> {
    let tab = dashboard.tab();
    let rows: Vec<ArticleRowViewModel> = dashboard.visible().iter().map(present_row).collect();

    let content = ArticleListViewModel {
        user_label: user_label.to_string(),
        tab: tab.label().to_string(),
        status: tab.status().as_str().to_string(),
        counts: present_tab_counts(dashboard.counts()),
        rows,
    };

    let count = content.rows.len();
    let mut result = CommandResultViewModel::new(content);

    if count == 0 {
        result = result.with_badge(StatusBadge::info(format!("No articles in {}", tab.label())));
        if tab == Tab::Published {
            result = result.with_suggestion(
                Guidance::new("Write your first article").with_command(cmd::CREATE),
            );
        }
    } else {
        result = result.with_badge(StatusBadge::success(format!(
            "{} article(s) in {}",
            count,
            tab.label()
        )));
    }

    if tab == Tab::Trashed && count > 0 {
        result = result.with_suggestion(
            Guidance::new("Remove a trashed article for good").with_command(fmt::delete("<ID>")),
        );
    }

    result
}

pub fn present_counts(
    counts: TabCounts,
    total: usize,
) -> CommandResultViewModel<CountsViewModel> {
    let content = CountsViewModel {
        counts: present_tab_counts(counts),
        total,
        unclassified: total.saturating_sub(counts.total()),
    };

    let unclassified = content.unclassified;
    let mut result = CommandResultViewModel::new(content)
        .with_badge(StatusBadge::success(format!("{} article(s)", total)));

    if unclassified > 0 {
        result = result.with_badge(StatusBadge::warning(format!(
            "{} article(s), {} with an unrecognised status",
            total, unclassified
        )));
    }

    if counts.drafts > 0 {
        result = result.with_suggestion(
            Guidance::new("Review drafts").with_command(cmd::LIST_DRAFTS),
        );
    }

    result
}

pub fn present_article_detail(
    article: &Article,
    dates: &DateDisplay,
) -> CommandResultViewModel<ArticleDetailViewModel> {
    let content = ArticleDetailViewModel {
        id: article.id.clone(),
        title: article.title.clone(),
        category: article.category.clone(),
        status: article.status.clone(),
        created_date: article.created_date.clone(),
        created_display: dates.format(article.created_date.as_deref()),
        content: article.content.clone(),
    };

    CommandResultViewModel::new(content)
}

pub fn present_save_result(
    action: SaveAction,
    id: Option<ArticleId>,
    fields: &ArticleFields,
    after: Refreshed<'_>,
) -> CommandResultViewModel<SaveResultViewModel> {
    let label = match action {
        SaveAction::Created => "Article created",
        SaveAction::Updated => "Article updated",
    };
    let badge = match after {
        Refreshed::Counts(_) => StatusBadge::success(label),
        Refreshed::Failed(_) => StatusBadge::warning(format!("{label}; list not reloaded")),
    };

    let mut result = CommandResultViewModel::new(SaveResultViewModel {
        action,
        id: id.clone(),
        title: fields.title.clone(),
        status: fields.status.as_str().to_string(),
        counts: after.counts(),
        refresh_error: after.error(),
    })
    .with_badge(badge);

    result = match id {
        Some(id) => result.with_suggestion(Guidance::new("View it").with_command(fmt::show(id))),
        None => result.with_suggestion(Guidance::new("See it listed").with_command(cmd::LIST)),
    };

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::StatusLevel;

    #[test]
    fn test_counts_flags_unrecognised_statuses() {
        let counts = TabCounts {
            published: 2,
            drafts: 0,
            trashed: 1,
        };
        let result = present_counts(counts, 4);

        assert_eq!(result.content.unclassified, 1);
        let badge = result.badge.as_ref().unwrap();
        assert_eq!(badge.level, StatusLevel::Warning);
        assert_eq!(badge.label, "4 article(s), 1 with an unrecognised status");
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn test_row_counts_content_chars() {
        let row = ArticleRow {
            id: ArticleId::from(1),
            title: "Title".to_string(),
            content: "héllo".to_string(),
            category: "news".to_string(),
            status: "publish".to_string(),
            created_date: "N/A".to_string(),
        };
        assert_eq!(present_row(&row).content_chars, 5);
    }
}

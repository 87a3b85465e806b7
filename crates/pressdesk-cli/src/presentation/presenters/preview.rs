use crate::args::hints::fmt;
use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, PreviewEntryViewModel, PreviewPageViewModel, StatusBadge,
};
use pressdesk_client::ArticleRepository;
use pressdesk_runtime::Preview;

pub fn present_preview_page<R: ArticleRepository>(
    preview: &Preview<R>,
) -> CommandResultViewModel<PreviewPageViewModel> {
    let cursor = preview.cursor();
    let content = PreviewPageViewModel {
        page: cursor.page,
        page_size: cursor.page_size,
        has_next: cursor.has_next(),
        has_previous: cursor.has_previous(),
        articles: preview
            .articles()
            .iter()
            .map(|a| PreviewEntryViewModel {
                id: a.id.clone(),
                title: a.title.clone(),
                category: a.category.clone(),
                content: a.content.clone(),
            })
            .collect(),
    };

    let mut result = CommandResultViewModel::new(content);
    if result.content.articles.is_empty() {
        result = result.with_badge(StatusBadge::info(format!(
            "No published articles on page {}",
            cursor.page
        )));
        if cursor.has_previous() {
            result = result.with_suggestion(
                Guidance::new("Go back to the first page").with_command(fmt::preview_page(1)),
            );
        }
    }
    result
}

use std::fmt;

use crate::presentation::formatters::{excerpt, truncate};
use crate::presentation::view_models::{PreviewPageViewModel, ViewMode};

const EXCERPT_CHARS: usize = 160;

pub struct PreviewPageView<'a> {
    data: &'a PreviewPageViewModel,
    mode: ViewMode,
}

impl<'a> PreviewPageView<'a> {
    pub fn new(data: &'a PreviewPageViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for article in &self.data.articles {
            writeln!(f, "{}", article.id)?;
        }
        Ok(())
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for article in &self.data.articles {
            writeln!(f, "{:<6} {}", article.id.to_string(), truncate(&article.title, 70))?;
        }
        Ok(())
    }

    fn render_standard(&self, f: &mut fmt::Formatter, excerpt_chars: Option<usize>) -> fmt::Result {
        writeln!(f, "Page {}", self.data.page)?;
        writeln!(f)?;

        if self.data.articles.is_empty() {
            writeln!(f, "No published articles on this page.")?;
        }

        for article in &self.data.articles {
            writeln!(f, "{}", article.title)?;
            writeln!(f, "  {}", article.category)?;
            match excerpt_chars {
                Some(max) => writeln!(f, "  {}", excerpt(&article.content, max))?,
                None => writeln!(f, "  {}", article.content)?,
            }
            writeln!(f)?;
        }

        let mut nav = Vec::new();
        if self.data.has_previous {
            nav.push(format!("previous: --page {}", self.data.page - 1));
        }
        if self.data.has_next {
            nav.push(format!("next: --page {}", self.data.page + 1));
        }
        if !nav.is_empty() {
            writeln!(f, "{}", nav.join("  |  "))?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for PreviewPageView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => self.render_compact(f),
            ViewMode::Standard => self.render_standard(f, Some(EXCERPT_CHARS)),
            ViewMode::Verbose => self.render_standard(f, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::PreviewEntryViewModel;
    use pressdesk_types::ArticleId;

    #[test]
    fn test_navigation_hints_follow_cursor() {
        let data = PreviewPageViewModel {
            page: 2,
            page_size: 5,
            has_next: false,
            has_previous: true,
            articles: vec![PreviewEntryViewModel {
                id: ArticleId::from(6),
                title: "Sixth".to_string(),
                category: "news".to_string(),
                content: "Body".to_string(),
            }],
        };

        let text = PreviewPageView::new(&data, ViewMode::Standard).to_string();
        assert!(text.starts_with("Page 2\n"));
        assert!(text.contains("previous: --page 1"));
        assert!(!text.contains("next:"));
    }
}

use pressdesk_types::{Article, ArticleId, ArticleStatus, Tab};
use serde::Serialize;

use crate::dates::DateDisplay;

/// Per-tab article counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TabCounts {
    pub published: usize,
    pub drafts: usize,
    pub trashed: usize,
}

impl TabCounts {
    pub fn get(&self, tab: Tab) -> usize {
        match tab {
            Tab::Published => self.published,
            Tab::Drafts => self.drafts,
            Tab::Trashed => self.trashed,
        }
    }

    pub fn total(&self) -> usize {
        self.published + self.drafts + self.trashed
    }
}

/// Display copy of an [`Article`] with `created_date` already formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleRow {
    pub id: ArticleId,
    pub title: String,
    pub content: String,
    pub category: String,
    pub status: String,
    pub created_date: String,
}

impl ArticleRow {
    fn from_article(article: &Article, dates: &DateDisplay) -> Self {
        Self {
            id: article.id.clone(),
            title: article.title.clone(),
            content: article.content.clone(),
            category: article.category.clone(),
            status: article.status.clone(),
            created_date: dates.format(article.created_date.as_deref()),
        }
    }
}

/// Single pass over the collection; statuses are compared case-insensitively
/// and anything outside the canonical vocabulary is left out of every bucket.
pub fn counts(articles: &[Article]) -> TabCounts {
    articles
        .iter()
        .fold(TabCounts::default(), |mut acc, article| {
            match article.canonical_status() {
                Some(ArticleStatus::Publish) => acc.published += 1,
                Some(ArticleStatus::Draft) => acc.drafts += 1,
                Some(ArticleStatus::Trashed) => acc.trashed += 1,
                None => {}
            }
            acc
        })
}

/// Articles of `tab`, in collection order.
///
/// Matching is exact and case-sensitive against the tab's canonical status,
/// so `"Publish"` counts towards Published in [`counts`] but is not listed here.
pub fn visible_articles(articles: &[Article], tab: Tab, dates: &DateDisplay) -> Vec<ArticleRow> {
    let status = tab.status();
    articles
        .iter()
        .filter(|article| article.has_status(status))
        .map(|article| ArticleRow::from_article(article, dates))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pressdesk_testing::ArticleFactory;

    #[test]
    fn test_mixed_collection_scenario() {
        let articles = vec![
            ArticleFactory::new(1).status("publish").build(),
            ArticleFactory::new(2).status("draft").build(),
        ];

        let c = counts(&articles);
        assert_eq!(
            c,
            TabCounts {
                published: 1,
                drafts: 1,
                trashed: 0
            }
        );

        let rows = visible_articles(&articles, Tab::Published, &DateDisplay::utc());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, ArticleId::from(1));
    }

    #[test]
    fn test_counts_ignore_case_and_unknown_statuses() {
        let articles = vec![
            ArticleFactory::new(1).status("PUBLISH").build(),
            ArticleFactory::new(2).status("Trashed").build(),
            ArticleFactory::new(3).status("archived").build(),
            ArticleFactory::new(4).status("").build(),
        ];

        let c = counts(&articles);
        assert_eq!(c.published, 1);
        assert_eq!(c.trashed, 1);
        assert_eq!(c.total(), 2);
        assert!(c.total() < articles.len());
    }

    #[test]
    fn test_visible_is_case_sensitive() {
        let articles = vec![
            ArticleFactory::new(1).status("Publish").build(),
            ArticleFactory::new(2).status("publish").build(),
        ];

        let rows = visible_articles(&articles, Tab::Published, &DateDisplay::utc());
        let ids: Vec<_> = rows.iter().map(|r| r.id.clone()).collect();
        assert_eq!(ids, vec![ArticleId::from(2)]);
    }

    #[test]
    fn test_visible_keeps_order_and_formats_dates() {
        let articles = vec![
            ArticleFactory::new(5)
                .status("draft")
                .created("2024-01-02T03:04:05Z")
                .build(),
            ArticleFactory::new(3).status("publish").build(),
            ArticleFactory::new(1).status("draft").build(),
        ];

        let rows = visible_articles(&articles, Tab::Drafts, &DateDisplay::utc());
        let ids: Vec<_> = rows.iter().map(|r| r.id.to_string()).collect();
        assert_eq!(ids, vec!["5", "1"]);
        assert_eq!(rows[0].created_date, "2/1/2024, 03.04.05");
        assert_eq!(rows[1].created_date, "N/A");

        // The source collection keeps the raw value.
        assert_eq!(
            articles[0].created_date.as_deref(),
            Some("2024-01-02T03:04:05Z")
        );
    }

    #[test]
    fn test_empty_collection() {
        assert_eq!(counts(&[]), TabCounts::default());
        for tab in Tab::ALL {
            assert!(visible_articles(&[], tab, &DateDisplay::utc()).is_empty());
        }
    }
}

//! Article builders and canned collections.

use pressdesk_types::{Article, ArticleFields, ArticleId, ArticleStatus};

/// Builder for [`Article`] values with form-valid defaults.
///
/// # Example
/// ```
/// use pressdesk_testing::ArticleFactory;
///
/// let article = ArticleFactory::new(3).status("draft").build();
/// assert_eq!(article.status, "draft");
/// ```
#[derive(Debug, Clone)]
pub struct ArticleFactory {
    article: Article,
}

impl ArticleFactory {
    pub fn new(id: i64) -> Self {
        Self {
            article: Article {
                id: ArticleId::from(id),
                title: format!("Sample article number {} headline", id),
                content: sample_content(id),
                category: "news".to_string(),
                status: "publish".to_string(),
                created_date: None,
            },
        }
    }

    pub fn status(mut self, status: &str) -> Self {
        self.article.status = status.to_string();
        self
    }

    pub fn title(mut self, title: &str) -> Self {
        self.article.title = title.to_string();
        self
    }

    pub fn content(mut self, content: &str) -> Self {
        self.article.content = content.to_string();
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.article.category = category.to_string();
        self
    }

    pub fn created(mut self, created_date: &str) -> Self {
        self.article.created_date = Some(created_date.to_string());
        self
    }

    pub fn build(self) -> Article {
        self.article
    }
}

/// `count` published articles with ids starting at `first_id`.
pub fn published(first_id: i64, count: usize) -> Vec<Article> {
    (0..count as i64)
        .map(|i| ArticleFactory::new(first_id + i).status("publish").build())
        .collect()
}

/// Two published, one draft, one trashed and one with an unknown status.
pub fn mixed_collection() -> Vec<Article> {
    vec![
        ArticleFactory::new(1)
            .status("publish")
            .created("2024-03-01T10:00:00Z")
            .build(),
        ArticleFactory::new(2)
            .status("draft")
            .created("2024-03-02T11:30:00Z")
            .build(),
        ArticleFactory::new(3)
            .status("trashed")
            .created("2024-03-03T08:15:00Z")
            .build(),
        ArticleFactory::new(4).status("publish").build(),
        ArticleFactory::new(5).status("archived").build(),
    ]
}

/// Fields that pass every form rule.
pub fn valid_fields(status: ArticleStatus) -> ArticleFields {
    ArticleFields::new(
        "A headline that is comfortably long",
        sample_content(0),
        "technology",
        status,
    )
}

fn sample_content(seed: i64) -> String {
    let sentence = format!(
        "Paragraph {} of a sample article body used by the pressdesk test suite. ",
        seed
    );
    sentence.repeat(4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_defaults_pass_validation() {
        let article = ArticleFactory::new(1).build();
        let fields = article.to_fields(ArticleStatus::Draft);
        assert_eq!(fields.validate(), Ok(()));
        assert_eq!(valid_fields(ArticleStatus::Publish).validate(), Ok(()));
    }
}

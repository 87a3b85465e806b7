use serde::{Deserialize, Serialize};

use crate::article::Article;
use crate::error::ValidationError;
use crate::status::ArticleStatus;

pub const MIN_TITLE_CHARS: usize = 20;
pub const MIN_CONTENT_CHARS: usize = 200;
pub const MIN_CATEGORY_CHARS: usize = 3;

/// Full article body sent on create and on a form edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleFields {
    pub title: String,
    pub content: String,
    pub category: String,
    pub status: ArticleStatus,
}

impl ArticleFields {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        category: impl Into<String>,
        status: ArticleStatus,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            category: category.into(),
            status,
        }
    }

    /// Check the minimum lengths, title first, then content, then category.
    ///
    /// Lengths are counted in characters, not bytes.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let title = self.title.chars().count();
        if title < MIN_TITLE_CHARS {
            return Err(ValidationError::TitleTooShort {
                min: MIN_TITLE_CHARS,
                actual: title,
            });
        }

        let content = self.content.chars().count();
        if content < MIN_CONTENT_CHARS {
            return Err(ValidationError::ContentTooShort {
                min: MIN_CONTENT_CHARS,
                actual: content,
            });
        }

        let category = self.category.chars().count();
        if category < MIN_CATEGORY_CHARS {
            return Err(ValidationError::CategoryTooShort {
                min: MIN_CATEGORY_CHARS,
                actual: category,
            });
        }

        Ok(())
    }
}

/// Partial update body. Absent fields are left out of the JSON entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticlePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ArticleStatus>,
}

impl ArticlePatch {
    /// Soft delete: the single-field transition to `trashed`.
    pub fn trash() -> Self {
        Self::status(ArticleStatus::Trashed)
    }

    pub fn status(status: ArticleStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.category.is_none()
            && self.status.is_none()
    }
}

impl From<ArticleFields> for ArticlePatch {
    fn from(fields: ArticleFields) -> Self {
        Self {
            title: Some(fields.title),
            content: Some(fields.content),
            category: Some(fields.category),
            status: Some(fields.status),
        }
    }
}

impl Article {
    /// Form pre-fill. Falls back to `fallback` when the stored status is not canonical.
    pub fn to_fields(&self, fallback: ArticleStatus) -> ArticleFields {
        ArticleFields {
            title: self.title.clone(),
            content: self.content.clone(),
            category: self.category.clone(),
            status: self.canonical_status().unwrap_or(fallback),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(title_len: usize, content_len: usize, category_len: usize) -> ArticleFields {
        ArticleFields::new(
            "t".repeat(title_len),
            "c".repeat(content_len),
            "k".repeat(category_len),
            ArticleStatus::Draft,
        )
    }

    #[test]
    fn test_title_boundary() {
        assert_eq!(
            fields(19, 200, 3).validate(),
            Err(ValidationError::TitleTooShort {
                min: 20,
                actual: 19
            })
        );
        assert_eq!(fields(20, 200, 3).validate(), Ok(()));
    }

    #[test]
    fn test_content_boundary() {
        assert_eq!(
            fields(20, 199, 3).validate(),
            Err(ValidationError::ContentTooShort {
                min: 200,
                actual: 199
            })
        );
        assert_eq!(fields(20, 200, 3).validate(), Ok(()));
    }

    #[test]
    fn test_category_boundary() {
        assert_eq!(
            fields(20, 200, 2).validate(),
            Err(ValidationError::CategoryTooShort { min: 3, actual: 2 })
        );
        assert_eq!(fields(20, 200, 3).validate(), Ok(()));
    }

    #[test]
    fn test_first_failing_rule_wins() {
        let err = fields(0, 0, 0).validate().unwrap_err();
        assert_eq!(err.field(), "title");
        assert_eq!(err.to_string(), "Title must be at least 20 characters.");

        let err = fields(20, 0, 0).validate().unwrap_err();
        assert_eq!(err.field(), "content");
    }

    #[test]
    fn test_lengths_count_characters() {
        // 20 two-byte characters
        let title = "é".repeat(20);
        let f = ArticleFields::new(title, "c".repeat(200), "abc", ArticleStatus::Publish);
        assert_eq!(f.validate(), Ok(()));
    }

    #[test]
    fn test_trash_patch_serializes_status_only() {
        let json = serde_json::to_string(&ArticlePatch::trash()).unwrap();
        assert_eq!(json, r#"{"status":"trashed"}"#);
    }

    #[test]
    fn test_full_patch_from_fields() {
        let patch = ArticlePatch::from(fields(20, 200, 3));
        let value = serde_json::to_value(&patch).unwrap();
        assert_eq!(value["status"], "draft");
        assert_eq!(value.as_object().unwrap().len(), 4);
        assert!(!patch.is_empty());
        assert!(ArticlePatch::default().is_empty());
    }

    #[test]
    fn test_create_body_shape() {
        let value = serde_json::to_value(fields(20, 200, 3)).unwrap();
        let mut keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, vec!["category", "content", "status", "title"]);
    }
}

use std::fmt;

/// Client-side form validation failure.
///
/// Only the first failing rule is reported; rules are checked in the order
/// title, content, category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    TitleTooShort { min: usize, actual: usize },
    ContentTooShort { min: usize, actual: usize },
    CategoryTooShort { min: usize, actual: usize },
}

impl ValidationError {
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::TitleTooShort { .. } => "title",
            ValidationError::ContentTooShort { .. } => "content",
            ValidationError::CategoryTooShort { .. } => "category",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::TitleTooShort { min, .. } => {
                write!(f, "Title must be at least {} characters.", min)
            }
            ValidationError::ContentTooShort { min, .. } => {
                write!(f, "Content must be at least {} characters.", min)
            }
            ValidationError::CategoryTooShort { min, .. } => {
                write!(f, "Category must be at least {} characters.", min)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

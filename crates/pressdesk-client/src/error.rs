use std::fmt;

/// Remote operation a [`FetchError`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
}

impl Operation {
    /// Fallback message used when the response body carries no `error` field.
    pub fn generic_message(&self, status: u16) -> String {
        let action = match self {
            Operation::List => "fetch articles",
            Operation::Create => "create article",
            Operation::Update => "update article",
            Operation::Delete => "delete article",
        };
        format!("Failed to {}. Status: {}", action, status)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::List => write!(f, "list"),
            Operation::Create => write!(f, "create"),
            Operation::Update => write!(f, "update"),
            Operation::Delete => write!(f, "delete"),
        }
    }
}

/// The single error kind surfaced by the repository client.
///
/// `status` is `None` when no HTTP response was received (connection
/// failure, timeout) or the success body could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    operation: Operation,
    status: Option<u16>,
    message: String,
}

impl FetchError {
    pub fn new(operation: Operation, status: Option<u16>, message: impl Into<String>) -> Self {
        Self {
            operation,
            status,
            message: message.into(),
        }
    }

    /// Build from a non-success response.
    ///
    /// Uses the body's `error` string when the body is JSON and carries a
    /// non-empty one, otherwise the operation's status-coded message.
    pub fn from_response(operation: Operation, status: u16, body: &[u8]) -> Self {
        let message = serde_json::from_slice::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                value
                    .get("error")
                    .and_then(|e| e.as_str())
                    .filter(|e| !e.is_empty())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| operation.generic_message(status));

        Self::new(operation, Some(status), message)
    }

    pub fn transport(operation: Operation, err: impl fmt::Display) -> Self {
        Self::new(operation, None, err.to_string())
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn status(&self) -> Option<u16> {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_not_found(&self) -> bool {
        self.status == Some(404)
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for FetchError {}

/// Invalid client configuration.
#[derive(Debug)]
pub enum BuildError {
    InvalidBaseUrl(String),
    Http(reqwest::Error),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::InvalidBaseUrl(msg) => write!(f, "Invalid base URL: {}", msg),
            BuildError::Http(err) => write!(f, "HTTP client error: {}", err),
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BuildError::InvalidBaseUrl(_) => None,
            BuildError::Http(err) => Some(err),
        }
    }
}

impl From<reqwest::Error> for BuildError {
    fn from(err: reqwest::Error) -> Self {
        BuildError::Http(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_from_error_field() {
        let err = FetchError::from_response(
            Operation::Delete,
            404,
            br#"{"error": "article not found"}"#,
        );
        assert_eq!(err.message(), "article not found");
        assert_eq!(err.status(), Some(404));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_generic_message_when_body_is_not_json() {
        let err = FetchError::from_response(Operation::List, 502, b"<html>Bad Gateway</html>");
        assert_eq!(err.message(), "Failed to fetch articles. Status: 502");
    }

    #[test]
    fn test_generic_message_when_error_field_missing_or_empty() {
        let err = FetchError::from_response(Operation::Create, 400, br#"{"detail": "x"}"#);
        assert_eq!(err.message(), "Failed to create article. Status: 400");

        let err = FetchError::from_response(Operation::Update, 500, br#"{"error": ""}"#);
        assert_eq!(err.message(), "Failed to update article. Status: 500");

        let err = FetchError::from_response(Operation::Update, 500, br#"{"error": {"code": 1}}"#);
        assert_eq!(err.message(), "Failed to update article. Status: 500");
    }

    #[test]
    fn test_display_is_the_message() {
        let err = FetchError::transport(Operation::List, "connection refused");
        assert_eq!(err.to_string(), "connection refused");
        assert_eq!(err.status(), None);
    }
}

//! Typed access to the remote article service.
//!
//! [`ArticleRepository`] is the seam the runtime depends on;
//! [`HttpArticleClient`] is its HTTP implementation.

pub mod error;
pub mod http;
pub mod repository;

pub use error::{BuildError, FetchError, Operation};
pub use http::{ClientConfig, DEFAULT_BASE_URL, HttpArticleClient};
pub use repository::ArticleRepository;

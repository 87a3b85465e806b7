//! Testing infrastructure for pressdesk.
//!
//! - `fixtures`: article builders and canned collections
//! - `repository`: `FakeRepository`, a recording in-memory article store
//! - `world`: `TestWorld`, a mock article service plus an isolated config for CLI runs
//! - `assertions`: checks over the CLI's JSON output

pub mod assertions;
pub mod fixtures;
pub mod repository;
pub mod world;

pub use fixtures::{ArticleFactory, valid_fields};
pub use repository::{Call, FakeRepository};
pub use world::{CliResult, TestWorld};

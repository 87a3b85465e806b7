//! State containers and orchestration for pressdesk.
//!
//! `Dashboard` and `Preview` own a fetched article collection and delegate every
//! derivation to `pressdesk-engine`. Mutations go through a two-step
//! confirmation (`request_*` then `resolve`) and are always followed by a full
//! re-fetch. `ArticleEditor` drives the create/edit form.

pub mod config;
pub mod dashboard;
pub mod editor;
pub mod error;
pub mod fetch;
pub mod mutation;
pub mod preview;

pub use config::{ApiConfig, Config, DEFAULT_USER_LABEL, DisplayConfig, PreviewConfig};
pub use dashboard::Dashboard;
pub use editor::{ArticleEditor, EditorMode, SubmitOutcome};
pub use error::{Error, Result};
pub use fetch::FetchTicket;
pub use mutation::{ConfirmationRequest, Decision, MutationOutcome, PendingAction};
pub use preview::{PageLoad, PageRequest, PaginationStrategy, Preview};

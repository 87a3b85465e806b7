//! # Presentation Layer
//!
//! MVVM for the console commands, components for the interactive dashboard.
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ ConsoleRenderer ] ==(JSON)==> serde_json
//!                                                                          ==(Text)==> [ View ]
//!
//! [ DashboardApp ] --> [ Component ] --> [ View (ratatui Widget) ]
//!    (router)          (state + keys)
//! ```
//!
//! ## Rules
//!
//! * View models are raw data and implement `Serialize`. `--format json`
//!   prints the whole `CommandResultViewModel` and ignores `ViewMode`.
//! * `ViewMode` is information density: minimal (ids only, for pipes),
//!   compact (one line per item), standard, verbose (raw values too).
//! * Presenters decide badges and tips. Views decide layout and truncation.
//! * TUI components own selection and modal state, clamp indexes before
//!   rendering, and emit actions. Only the renderer talks to the service.
//!
//! | To change...                        | Go to               |
//! |-------------------------------------|---------------------|
//! | a JSON field                        | `view_models/`      |
//! | when a tip or badge shows           | `presenters/`       |
//! | text layout per mode                | `views/`            |
//! | key handling or selection           | `views/tui/components/` |
//! | screen routing, service calls (TUI) | `renderers/tui.rs`  |

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, DashboardApp, Renderer};
pub use view_models::{
    CommandResultViewModel, CreateView, Guidance, StatusBadge, StatusLevel,
    common::{OutputFormat, ViewMode},
};

// pressdesk CLI
//
// Every command is a thin handler over pressdesk-runtime state containers:
// build the Dashboard/Preview from config, drive one action, hand the result to
// a presenter, render it as text or JSON. The interactive `dashboard` command
// drives the same containers from a ratatui event loop.
//
// The service offers nothing but a flat limit/offset listing, so every command
// that shows articles fetches the whole collection (limit 1000) and derives
// counts, tab rows and preview pages locally.

mod args;
mod commands;
pub mod context;
mod handlers;
mod logging;
pub mod presentation;
mod prompt;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand};
pub use commands::run;

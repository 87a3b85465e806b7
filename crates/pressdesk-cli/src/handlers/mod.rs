pub mod article;
pub mod config;
pub mod counts;
pub mod dashboard;
pub mod guidance;
pub mod list;
pub mod mutation;
pub mod preview;
pub mod show;

use crate::context::ExecutionContext;
use anyhow::Result;
use pressdesk_client::HttpArticleClient;
use pressdesk_runtime::Dashboard;
use std::fmt;

/// Prefer the banner text the state container recorded over the raw error.
fn failure(banner: Option<&str>, err: impl fmt::Display) -> anyhow::Error {
    match banner {
        Some(message) => anyhow::anyhow!("{}", message),
        None => anyhow::anyhow!("{}", err),
    }
}

/// Dashboard with the collection fetched; a failed listing becomes the
/// command error, worded like the dashboard banner.
async fn fetched_dashboard(ctx: &ExecutionContext) -> Result<Dashboard<HttpArticleClient>> {
    let mut dashboard = ctx.dashboard()?;
    if let Err(err) = dashboard.refresh().await {
        return Err(failure(dashboard.error(), err));
    }
    Ok(dashboard)
}

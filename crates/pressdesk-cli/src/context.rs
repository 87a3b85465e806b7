use anyhow::Result;
use pressdesk_client::HttpArticleClient;
use pressdesk_runtime::config::resolve_config_path;
use pressdesk_runtime::{Config, Dashboard, Preview};
use serde::Serialize;
use std::path::PathBuf;

use crate::presentation::{
    CommandResultViewModel, ConsoleRenderer, CreateView, OutputFormat, Renderer, ViewMode,
};

/// Everything a handler needs: resolved config plus output preferences.
pub struct ExecutionContext {
    pub config: Config,
    pub config_path: PathBuf,
    pub format: OutputFormat,
    pub mode: ViewMode,
}

impl ExecutionContext {
    /// Load the config file (defaults when absent) and apply `--api-url`.
    pub fn new(
        config_path: Option<&str>,
        api_url: Option<String>,
        format: OutputFormat,
        mode: ViewMode,
    ) -> Result<Self> {
        let config_path = resolve_config_path(config_path)?;
        let mut config = Config::load_from(&config_path)?;
        if let Some(url) = api_url {
            config.api.base_url = url;
        }
        tracing::debug!(path = %config_path.display(), base_url = %config.api.base_url, "configuration loaded");

        Ok(Self {
            config,
            config_path,
            format,
            mode,
        })
    }

    pub fn client(&self) -> Result<HttpArticleClient> {
        Ok(self.config.build_client()?)
    }

    pub fn dashboard(&self) -> Result<Dashboard<HttpArticleClient>> {
        Ok(Dashboard::new(self.client()?).with_dates(self.config.date_display()?))
    }

    pub fn preview(&self) -> Result<Preview<HttpArticleClient>> {
        Ok(Preview::new(self.client()?)
            .with_strategy(self.config.preview.pagination)
            .with_status_match(self.config.preview.status_match))
    }

    pub fn user_label(&self) -> &str {
        &self.config.display.user_label
    }

    pub fn renderer(&self) -> ConsoleRenderer {
        ConsoleRenderer::new(self.format, self.mode)
    }

    /// Render a view model with the configured format and view mode.
    pub fn render<T>(&self, view_model: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView + Send + Sync,
    {
        self.renderer().render(view_model)
    }
}

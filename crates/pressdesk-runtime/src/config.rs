use crate::preview::PaginationStrategy;
use crate::{Error, Result};
use pressdesk_client::{ClientConfig, DEFAULT_BASE_URL, HttpArticleClient};
use pressdesk_engine::{DateDisplay, PreviewStatusMatch};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Display name shown for the signed-in user. Never sent to the service.
pub const DEFAULT_USER_LABEL: &str = "user_001_simulated";

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. PRESSDESK_CONFIG environment variable (with tilde expansion)
/// 3. XDG config directory
/// 4. ~/.pressdesk/config.toml
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("PRESSDESK_CONFIG") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("pressdesk").join("config.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".pressdesk").join("config.toml"));
    }

    Err(Error::Config(
        "Could not determine config path: no HOME directory or XDG config directory found"
            .to_string(),
    ))
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    pub pagination: PaginationStrategy,
    pub status_match: PreviewStatusMatch,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Fixed offset for rendered dates; the local timezone when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utc_offset_minutes: Option<i32>,
    pub user_label: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            utc_offset_minutes: None,
            user_label: DEFAULT_USER_LABEL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub preview: PreviewConfig,
    pub display: DisplayConfig,
}

impl Config {
    /// A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn client_config(&self) -> ClientConfig {
        let config = ClientConfig::new(self.api.base_url.clone());
        match self.api.timeout_secs {
            Some(secs) if secs > 0 => config.with_timeout(Duration::from_secs(secs)),
            _ => config,
        }
    }

    pub fn build_client(&self) -> Result<HttpArticleClient> {
        Ok(HttpArticleClient::new(self.client_config())?)
    }

    pub fn date_display(&self) -> Result<DateDisplay> {
        match self.display.utc_offset_minutes {
            None => Ok(DateDisplay::local()),
            Some(minutes) => DateDisplay::from_offset_minutes(minutes).ok_or_else(|| {
                Error::Config(format!(
                    "display.utc_offset_minutes out of range: {}",
                    minutes
                ))
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://localhost:8080/article");
        assert_eq!(config.api.timeout_secs, None);
        assert_eq!(config.preview.pagination, PaginationStrategy::ClientSide);
        assert_eq!(config.preview.status_match, PreviewStatusMatch::Canonical);
        assert_eq!(config.display.user_label, "user_001_simulated");
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.api.base_url = "http://cms.internal:9000/article".to_string();
        config.api.timeout_secs = Some(15);
        config.preview.pagination = PaginationStrategy::CoarseOffset;
        config.display.utc_offset_minutes = Some(420);

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);

        Ok(())
    }

    #[test]
    fn test_partial_file_fills_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_path,
            "[preview]\nstatus_match = \"display_label\"\n",
        )?;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded.preview.status_match, PreviewStatusMatch::DisplayLabel);
        assert_eq!(loaded.preview.pagination, PaginationStrategy::ClientSide);
        assert_eq!(loaded.api, ApiConfig::default());

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path)?;
        assert_eq!(config, Config::default());

        Ok(())
    }

    #[test]
    fn test_malformed_file_is_config_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[api\nbase_url = 3")?;

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        Ok(())
    }

    #[test]
    fn test_client_config_timeout() {
        let mut config = Config::default();
        assert_eq!(config.client_config().timeout, None);

        config.api.timeout_secs = Some(5);
        assert_eq!(
            config.client_config().timeout,
            Some(Duration::from_secs(5))
        );

        config.api.timeout_secs = Some(0);
        assert_eq!(config.client_config().timeout, None);
    }

    #[test]
    fn test_date_display_offset() {
        let mut config = Config::default();
        config.display.utc_offset_minutes = Some(60);
        let dates = config.date_display().unwrap();
        assert_eq!(
            dates.format(Some("2024-01-01T00:00:00Z")),
            "1/1/2024, 01.00.00"
        );

        config.display.utc_offset_minutes = Some(24 * 60);
        assert!(matches!(config.date_display(), Err(Error::Config(_))));
    }

    #[test]
    fn test_explicit_path_wins() -> Result<()> {
        let path = resolve_config_path(Some("/tmp/pressdesk-test/config.toml"))?;
        assert_eq!(path, PathBuf::from("/tmp/pressdesk-test/config.toml"));
        Ok(())
    }
}

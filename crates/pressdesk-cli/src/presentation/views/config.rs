use std::fmt;

use crate::presentation::view_models::{ConfigPathViewModel, ConfigViewModel, ViewMode};

pub struct ConfigView<'a> {
    data: &'a ConfigViewModel,
    mode: ViewMode,
}

impl<'a> ConfigView<'a> {
    pub fn new(data: &'a ConfigViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for ConfigView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let config = &self.data.config;
        if self.mode == ViewMode::Minimal {
            return writeln!(f, "{}", config.api.base_url);
        }

        let source = if self.data.exists {
            self.data.path.clone()
        } else {
            format!("{} (not found, using defaults)", self.data.path)
        };
        writeln!(f, "# {}", source)?;

        match config.to_toml() {
            Ok(text) => write!(f, "{}", text),
            Err(_) => Err(fmt::Error),
        }
    }
}

pub struct ConfigPathView<'a> {
    data: &'a ConfigPathViewModel,
    mode: ViewMode,
}

impl<'a> ConfigPathView<'a> {
    pub fn new(data: &'a ConfigPathViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for ConfigPathView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.exists || self.mode == ViewMode::Minimal {
            writeln!(f, "{}", self.data.path)
        } else {
            writeln!(f, "{} (not created yet)", self.data.path)
        }
    }
}

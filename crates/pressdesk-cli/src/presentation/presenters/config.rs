use crate::args::hints::cmd;
use crate::presentation::view_models::{
    CommandResultViewModel, ConfigPathViewModel, ConfigViewModel, Guidance, GuidanceViewModel,
    StatusBadge,
};
use pressdesk_runtime::Config;
use std::path::Path;

pub fn present_config(path: &Path, config: &Config) -> CommandResultViewModel<ConfigViewModel> {
    let exists = path.exists();
    let mut result = CommandResultViewModel::new(ConfigViewModel {
        path: path.display().to_string(),
        exists,
        config: config.clone(),
    });
    if !exists {
        result = result
            .with_badge(StatusBadge::info("No config file; showing defaults"))
            .with_suggestion(Guidance::new("Save these settings").with_command(cmd::CONFIG_INIT));
    }
    result
}

/// After `config init` wrote `config` to `path`.
pub fn present_config_written(
    path: &Path,
    config: &Config,
) -> CommandResultViewModel<ConfigViewModel> {
    CommandResultViewModel::new(ConfigViewModel {
        path: path.display().to_string(),
        exists: true,
        config: config.clone(),
    })
    .with_badge(StatusBadge::success(format!("Wrote {}", path.display())))
    .with_suggestion(Guidance::new("Check the effective settings").with_command(cmd::CONFIG_SHOW))
}

pub fn present_config_path(path: &Path) -> CommandResultViewModel<ConfigPathViewModel> {
    CommandResultViewModel::new(ConfigPathViewModel {
        path: path.display().to_string(),
        exists: path.exists(),
    })
}

pub fn present_guidance(path: &Path, config: &Config) -> CommandResultViewModel<GuidanceViewModel> {
    let config_exists = path.exists();
    let mut result = CommandResultViewModel::new(GuidanceViewModel {
        api_url: config.api.base_url.clone(),
        config_path: path.display().to_string(),
        config_exists,
    })
    .with_suggestion(Guidance::new("Browse published articles").with_command(cmd::LIST))
    .with_suggestion(Guidance::new("Open the interactive dashboard").with_command(cmd::DASHBOARD))
    .with_suggestion(Guidance::new("Read it like a visitor").with_command(cmd::PREVIEW));

    if !config_exists {
        result = result.with_suggestion(
            Guidance::new("Check the effective settings").with_command(cmd::CONFIG_SHOW),
        );
    }
    result
}

use crate::context::ExecutionContext;
use crate::presentation::presenters::{present_config, present_config_path, present_config_written};
use anyhow::Result;

pub fn handle_show(ctx: &ExecutionContext) -> Result<()> {
    ctx.render(present_config(&ctx.config_path, &ctx.config))
}

pub fn handle_path(ctx: &ExecutionContext) -> Result<()> {
    ctx.render(present_config_path(&ctx.config_path))
}

pub fn handle_init(ctx: &ExecutionContext, force: bool) -> Result<()> {
    if ctx.config_path.exists() && !force {
        anyhow::bail!(
            "Config file already exists: {} (use --force to overwrite)",
            ctx.config_path.display()
        );
    }
    ctx.config.save_to(&ctx.config_path)?;
    tracing::info!(path = %ctx.config_path.display(), "config file written");
    ctx.render(present_config_written(&ctx.config_path, &ctx.config))
}

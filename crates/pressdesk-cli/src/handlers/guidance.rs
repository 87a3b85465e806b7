use crate::context::ExecutionContext;
use crate::presentation::presenters::present_guidance;
use anyhow::Result;

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    ctx.render(present_guidance(&ctx.config_path, &ctx.config))
}

use crate::context::ExecutionContext;
use crate::presentation::presenters::present_counts;
use anyhow::Result;

pub async fn handle(ctx: &ExecutionContext) -> Result<()> {
    let dashboard = super::fetched_dashboard(ctx).await?;
    ctx.render(present_counts(dashboard.counts(), dashboard.articles().len()))
}

use crate::context::ExecutionContext;
use crate::presentation::presenters::present_article_detail;
use anyhow::Result;
use pressdesk_types::ArticleId;

pub async fn handle(ctx: &ExecutionContext, id: &ArticleId) -> Result<()> {
    let dashboard = super::fetched_dashboard(ctx).await?;
    let article = dashboard.require(id)?;
    ctx.render(present_article_detail(article, dashboard.dates()))
}

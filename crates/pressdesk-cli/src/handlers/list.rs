use crate::context::ExecutionContext;
use crate::presentation::presenters::present_article_list;
use anyhow::Result;
use pressdesk_types::Tab;

pub async fn handle(ctx: &ExecutionContext, tab: Tab) -> Result<()> {
    let mut dashboard = super::fetched_dashboard(ctx).await?;
    dashboard.select_tab(tab);
    ctx.render(present_article_list(&dashboard, ctx.user_label()))
}

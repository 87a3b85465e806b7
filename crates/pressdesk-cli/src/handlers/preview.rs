use crate::context::ExecutionContext;
use crate::presentation::presenters::present_preview_page;
use anyhow::Result;

pub async fn handle(ctx: &ExecutionContext, page: usize) -> Result<()> {
    let mut preview = ctx.preview()?;
    if let Err(err) = preview.load_page(page).await {
        return Err(super::failure(preview.error(), err));
    }
    ctx.render(present_preview_page(&preview))
}

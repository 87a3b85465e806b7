use crate::context::ExecutionContext;
use crate::presentation::presenters::{Refreshed, present_mutation_result};
use crate::prompt;
use anyhow::Result;
use pressdesk_client::HttpArticleClient;
use pressdesk_runtime::{ConfirmationRequest, Dashboard, Decision, MutationOutcome};
use pressdesk_types::ArticleId;

pub async fn handle_trash(ctx: &ExecutionContext, id: ArticleId, yes: bool) -> Result<()> {
    let mut dashboard = ctx.dashboard()?;
    let request = dashboard.request_trash(id);
    resolve(ctx, &mut dashboard, request, yes).await
}

pub async fn handle_delete(ctx: &ExecutionContext, id: ArticleId, yes: bool) -> Result<()> {
    let mut dashboard = ctx.dashboard()?;
    let request = dashboard.request_delete(id);
    resolve(ctx, &mut dashboard, request, yes).await
}

async fn resolve(
    ctx: &ExecutionContext,
    dashboard: &mut Dashboard<HttpArticleClient>,
    request: ConfirmationRequest,
    yes: bool,
) -> Result<()> {
    let decision = if yes {
        Decision::Confirm
    } else {
        prompt::confirm(&request.message)?
    };

    match dashboard.resolve(request.clone(), decision).await {
        MutationOutcome::Cancelled => ctx.render(present_mutation_result(&request, None)),
        MutationOutcome::Applied => ctx.render(present_mutation_result(
            &request,
            Some(Refreshed::from_dashboard(dashboard)),
        )),
        MutationOutcome::Failed(err) => Err(super::failure(dashboard.error(), err)),
    }
}

//! `create` and `edit`: both go through the article form.

use crate::context::ExecutionContext;
use crate::presentation::presenters::{Refreshed, present_save_result};
use crate::presentation::view_models::SaveAction;
use anyhow::{Context, Result};
use pressdesk_client::HttpArticleClient;
use pressdesk_runtime::{ArticleEditor, Dashboard, SubmitOutcome};
use pressdesk_types::{ArticleId, ArticleStatus};
use std::path::PathBuf;

/// Body text from `--content` or `--content-file`.
#[derive(Debug, Clone)]
pub enum ContentSource {
    Inline(String),
    File(PathBuf),
}

impl ContentSource {
    pub fn from_args(content: Option<String>, content_file: Option<PathBuf>) -> Option<Self> {
        match (content, content_file) {
            (Some(text), _) => Some(Self::Inline(text)),
            (None, Some(path)) => Some(Self::File(path)),
            (None, None) => None,
        }
    }

    fn read(self) -> Result<String> {
        match self {
            Self::Inline(text) => Ok(text),
            Self::File(path) => std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display())),
        }
    }
}

pub struct CreateArgs {
    pub title: String,
    pub category: String,
    pub content: ContentSource,
    pub draft: bool,
}

pub struct EditArgs {
    pub id: ArticleId,
    pub title: Option<String>,
    pub category: Option<String>,
    pub content: Option<ContentSource>,
    pub status: Option<ArticleStatus>,
}

pub async fn handle_create(ctx: &ExecutionContext, args: CreateArgs) -> Result<()> {
    let mut dashboard = ctx.dashboard()?;
    let mut editor = ArticleEditor::create();
    editor.title = args.title;
    editor.category = args.category;
    editor.content = args.content.read()?;

    let status = if args.draft {
        ArticleStatus::Draft
    } else {
        ArticleStatus::Publish
    };

    submit(ctx, &mut dashboard, &mut editor, status, SaveAction::Created, None).await
}

pub async fn handle_edit(ctx: &ExecutionContext, args: EditArgs) -> Result<()> {
    let mut dashboard = super::fetched_dashboard(ctx).await?;
    let mut editor = ArticleEditor::edit(dashboard.require(&args.id)?);

    if let Some(title) = args.title {
        editor.title = title;
    }
    if let Some(category) = args.category {
        editor.category = category;
    }
    if let Some(content) = args.content {
        editor.content = content.read()?;
    }
    let status = args.status.unwrap_or(editor.initial_status());

    submit(
        ctx,
        &mut dashboard,
        &mut editor,
        status,
        SaveAction::Updated,
        Some(args.id),
    )
    .await
}

async fn submit(
    ctx: &ExecutionContext,
    dashboard: &mut Dashboard<HttpArticleClient>,
    editor: &mut ArticleEditor,
    status: ArticleStatus,
    action: SaveAction,
    id: Option<ArticleId>,
) -> Result<()> {
    match editor.submit(dashboard, status).await {
        SubmitOutcome::Saved => ctx.render(present_save_result(
            action,
            id,
            &editor.fields(status),
            Refreshed::from_dashboard(dashboard),
        )),
        SubmitOutcome::Rejected(err) => anyhow::bail!("{}", err),
        SubmitOutcome::Failed(err) => Err(super::failure(editor.error(), err)),
    }
}

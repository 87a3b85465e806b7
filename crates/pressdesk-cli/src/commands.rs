use crate::args::{Cli, Commands, ConfigCommand};
use crate::context::ExecutionContext;
use crate::handlers;
use crate::handlers::article::{ContentSource, CreateArgs, EditArgs};
use crate::logging;
use anyhow::{Context, Result};
use pressdesk_types::ArticleStatus;

pub fn run(cli: Cli) -> Result<()> {
    // Log lines would tear the dashboard's alternate screen.
    let interactive = matches!(cli.command, Some(Commands::Dashboard));
    if !interactive || std::env::var_os("RUST_LOG").is_some() {
        logging::init(cli.log_level);
    }

    let ctx = ExecutionContext::new(
        cli.config.as_deref(),
        cli.api_url,
        cli.format.into(),
        cli.mode.into(),
    )?;

    let Some(command) = cli.command else {
        return handlers::guidance::handle(&ctx);
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start the async runtime")?;

    match command {
        Commands::List { tab } => runtime.block_on(handlers::list::handle(&ctx, tab.into())),

        Commands::Counts => runtime.block_on(handlers::counts::handle(&ctx)),

        Commands::Show { id } => runtime.block_on(handlers::show::handle(&ctx, &id)),

        Commands::Create {
            title,
            category,
            content,
            content_file,
            draft,
        } => {
            let content = ContentSource::from_args(content, content_file)
                .context("Either --content or --content-file is required")?;
            runtime.block_on(handlers::article::handle_create(
                &ctx,
                CreateArgs {
                    title,
                    category,
                    content,
                    draft,
                },
            ))
        }

        Commands::Edit {
            id,
            title,
            category,
            content,
            content_file,
            draft,
            publish,
        } => {
            let status = match (draft, publish) {
                (true, _) => Some(ArticleStatus::Draft),
                (_, true) => Some(ArticleStatus::Publish),
                _ => None,
            };
            runtime.block_on(handlers::article::handle_edit(
                &ctx,
                EditArgs {
                    id,
                    title,
                    category,
                    content: ContentSource::from_args(content, content_file),
                    status,
                },
            ))
        }

        Commands::Trash { id, yes } => {
            runtime.block_on(handlers::mutation::handle_trash(&ctx, id, yes))
        }

        Commands::Delete { id, yes } => {
            runtime.block_on(handlers::mutation::handle_delete(&ctx, id, yes))
        }

        Commands::Preview { page } => runtime.block_on(handlers::preview::handle(&ctx, page)),

        Commands::Dashboard => handlers::dashboard::handle(&ctx, &runtime),

        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config::handle_show(&ctx),
            ConfigCommand::Path => handlers::config::handle_path(&ctx),
            ConfigCommand::Init { force } => handlers::config::handle_init(&ctx, force),
        },
    }
}

pub mod hints;

use crate::types::{LogLevel, OutputFormat, TabArg, ViewModeArg};
use clap::{Parser, Subcommand};
use pressdesk_types::ArticleId;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pressdesk")]
#[command(about = "Manage articles on a REST content service", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: $PRESSDESK_CONFIG, then the user config directory)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Article service base URL, e.g. http://localhost:8080/article
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[arg(long, default_value = "standard", global = true)]
    pub mode: ViewModeArg,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Tab counts and the articles of one tab
    List {
        #[arg(long, default_value = "published")]
        tab: TabArg,
    },

    /// Article count per tab
    Counts,

    /// One article in full
    Show { id: ArticleId },

    /// Create an article (published unless --draft)
    Create {
        #[arg(long)]
        title: String,

        #[arg(long)]
        category: String,

        #[arg(long, conflicts_with = "content_file", required_unless_present = "content_file")]
        content: Option<String>,

        #[arg(long)]
        content_file: Option<PathBuf>,

        #[arg(long)]
        draft: bool,
    },

    /// Edit an article; unspecified fields keep their current values
    Edit {
        id: ArticleId,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long, conflicts_with = "content_file")]
        content: Option<String>,

        #[arg(long)]
        content_file: Option<PathBuf>,

        #[arg(long, conflicts_with = "publish")]
        draft: bool,

        #[arg(long)]
        publish: bool,
    },

    /// Move an article to the trash
    Trash {
        id: ArticleId,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Delete an article permanently
    Delete {
        id: ArticleId,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Public preview of published articles, five per page
    Preview {
        #[arg(long, default_value = "1")]
        page: usize,
    },

    /// Interactive terminal dashboard
    Dashboard,

    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,

    /// Print the config file path
    Path,

    /// Write the effective configuration to the config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

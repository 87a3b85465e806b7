use clap::ValueEnum;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ViewModeArg {
    Minimal,
    Compact,
    Standard,
    Verbose,
}

impl fmt::Display for ViewModeArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewModeArg::Minimal => write!(f, "minimal"),
            ViewModeArg::Compact => write!(f, "compact"),
            ViewModeArg::Standard => write!(f, "standard"),
            ViewModeArg::Verbose => write!(f, "verbose"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum TabArg {
    Published,
    Drafts,
    Trashed,
}

impl From<TabArg> for pressdesk_types::Tab {
    fn from(tab: TabArg) -> Self {
        match tab {
            TabArg::Published => pressdesk_types::Tab::Published,
            TabArg::Drafts => pressdesk_types::Tab::Drafts,
            TabArg::Trashed => pressdesk_types::Tab::Trashed,
        }
    }
}

impl fmt::Display for TabArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TabArg::Published => write!(f, "published"),
            TabArg::Drafts => write!(f, "drafts"),
            TabArg::Trashed => write!(f, "trashed"),
        }
    }
}

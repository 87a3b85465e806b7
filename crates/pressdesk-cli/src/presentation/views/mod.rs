pub mod article;
pub mod config;
pub mod guidance;
pub mod mutation;
pub mod preview;
pub mod tui;

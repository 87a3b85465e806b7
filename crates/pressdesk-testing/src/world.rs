//! TestWorld pattern for CLI integration tests.
//!
//! Provides:
//! - A mock article service (mockito) the CLI is pointed at
//! - An isolated config path inside a temp directory
//! - Execution of the `pressdesk` binary with that context

use anyhow::Result;
use assert_cmd::Command;
use mockito::{Mock, ServerGuard};
use pressdesk_types::Article;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Declarative CLI test environment.
///
/// # Example
/// ```no_run
/// use pressdesk_testing::{ArticleFactory, TestWorld};
///
/// let mut world = TestWorld::new();
/// world.serve_articles(&[ArticleFactory::new(1).build()]);
///
/// let result = world.run(&["list"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    server: ServerGuard,
    temp_dir: TempDir,
    config_path: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");

        Self {
            server: mockito::Server::new(),
            temp_dir,
            config_path,
            env_vars: HashMap::new(),
        }
    }

    /// Base URL of the mock article service, including the `/article` prefix.
    pub fn api_url(&self) -> String {
        format!("{}/article", self.server.url())
    }

    pub fn server(&mut self) -> &mut ServerGuard {
        &mut self.server
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    pub fn write_config(&self, toml: &str) -> Result<()> {
        std::fs::write(&self.config_path, toml)?;
        Ok(())
    }

    /// Answer the dashboard listing (`GET /article/limit/1000/0`) with `articles`.
    pub fn serve_articles(&mut self, articles: &[Article]) -> Mock {
        self.serve_listing(0, articles)
    }

    pub fn serve_listing(&mut self, offset: usize, articles: &[Article]) -> Mock {
        let body = serde_json::to_string(articles).expect("articles serialize");
        self.server
            .mock("GET", format!("/article/limit/1000/{}", offset).as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create()
    }

    /// Respond to `method path` with `status` and `{"error": message}`.
    pub fn serve_error(&mut self, method: &str, path: &str, status: usize, message: &str) -> Mock {
        self.server
            .mock(method, path)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(serde_json::json!({ "error": message }).to_string())
            .create()
    }

    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--config")
            .arg(&self.config_path)
            .arg("--api-url")
            .arg(self.api_url())
            .env_remove("PRESSDESK_CONFIG")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Run `pressdesk` with `args`, no stdin.
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        self.run_with_stdin(args, "")
    }

    /// Run `pressdesk` with `args`, feeding `stdin` (for confirmation prompts).
    pub fn run_with_stdin(&self, args: &[&str], stdin: &str) -> Result<CliResult> {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("pressdesk")
            .map_err(|e| anyhow::anyhow!("Failed to find pressdesk binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args).write_stdin(stdin.to_string());

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}

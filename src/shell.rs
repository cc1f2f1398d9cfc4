//! Shell command runner
//!
//! `tx` and `git` are driven through [`CommandRunner`] so the workflow can be
//! exercised against a fake in tests.

use crate::error::{Error, Result};
use async_trait::async_trait;
use std::borrow::Cow;
use std::fmt;
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::{error, info};

/// A command line and the directory to run it in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellCommand {
    /// Command line handed to the shell
    pub line: String,
    /// Working directory; `None` inherits the process's
    pub dir: Option<PathBuf>,
}

impl ShellCommand {
    /// Command run in the current directory
    pub fn new(line: impl Into<String>) -> Self {
        Self {
            line: line.into(),
            dir: None,
        }
    }

    /// Run in `dir` instead of the current directory
    #[must_use]
    pub fn in_dir(mut self, dir: Option<&Path>) -> Self {
        self.dir = dir.map(Path::to_path_buf);
        self
    }
}

impl fmt::Display for ShellCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.dir {
            Some(dir) => write!(f, "(cd {}) {}", dir.display(), self.line),
            None => f.write_str(&self.line),
        }
    }
}

/// Capability for running shell commands
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run a command and return its combined stdout/stderr
    ///
    /// Fails with [`Error::Command`] if the command cannot be spawned or exits
    /// non-zero.
    async fn run(&self, command: &ShellCommand) -> Result<String>;
}

/// Runs commands through `sh -c`
///
/// Command lines are built with POSIX quoting (see [`quote`]), so a POSIX
/// shell is required.
#[derive(Debug, Default)]
pub struct ShellRunner {
    secrets: Vec<String>,
}

impl ShellRunner {
    /// Create a runner with nothing to redact
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace `secret` with `***` wherever a command or its output is logged
    ///
    /// The percent-encoded form is redacted too, since secrets end up inside
    /// URLs.
    #[must_use]
    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        let secret = secret.into();
        if secret.is_empty() {
            return self;
        }
        let encoded = urlencoding::encode(&secret).into_owned();
        if encoded != secret {
            self.secrets.push(encoded);
        }
        self.secrets.push(secret);
        self
    }

    fn redact(&self, text: &str) -> String {
        self.secrets
            .iter()
            .fold(text.to_string(), |acc, secret| acc.replace(secret.as_str(), "***"))
    }
}

#[async_trait]
impl CommandRunner for ShellRunner {
    async fn run(&self, command: &ShellCommand) -> Result<String> {
        let shown = self.redact(&command.to_string());
        info!("$ {shown}");

        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(&command.line);
        if let Some(dir) = &command.dir {
            cmd.current_dir(dir);
        }

        let output = cmd.output().await.map_err(|e| {
            error!(command = %shown, error = %e, "failed to spawn command");
            Error::Command {
                command: shown.clone(),
                detail: e.to_string(),
            }
        })?;

        let combined = join_output(&output.stdout, &output.stderr);
        let logged = self.redact(&combined);
        if !logged.is_empty() {
            info!("{logged}");
        }

        if !output.status.success() {
            let status = output
                .status
                .code()
                .map_or_else(|| "terminated by signal".to_string(), |c| format!("exit code {c}"));
            error!(command = %shown, %status, output = %logged, "command failed");
            return Err(Error::Command {
                command: shown,
                detail: if logged.is_empty() {
                    status
                } else {
                    format!("{status}: {logged}")
                },
            });
        }

        Ok(combined)
    }
}

/// Join stdout and stderr, skipping empty streams
fn join_output(stdout: &[u8], stderr: &[u8]) -> String {
    [stdout, stderr]
        .iter()
        .map(|bytes| String::from_utf8_lossy(bytes).trim_end().to_string())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Quote a value for interpolation into a `sh` command line
///
/// Values made only of `[A-Za-z0-9_.,/:@=+-]` are returned unchanged.
pub fn quote(value: &str) -> Cow<'_, str> {
    let safe = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "_.,/:@=+-".contains(c));
    if safe {
        Cow::Borrowed(value)
    } else {
        Cow::Owned(format!("'{}'", value.replace('\'', r"'\''")))
    }
}

//! Error types for tx-puller

use thiserror::Error;

/// Errors raised while resolving parameters or running the workflow
#[derive(Debug, Error)]
pub enum Error {
    /// A required row is missing from the issue body table
    #[error("missing field `{0}` in issue body")]
    MissingField(String),

    /// A required action input is blank or absent
    #[error("input required and not supplied: {0}")]
    MissingRequiredInput(String),

    /// An action input has a value that cannot be interpreted
    #[error("invalid input `{name}`: {reason}")]
    InvalidInput {
        /// Input name
        name: String,
        /// Why the value was rejected
        reason: String,
    },

    /// Mode outside the accepted vocabulary
    #[error("unknown translation mode `{0}` (expected untranslated, translated, reviewed or proofread)")]
    UnknownMode(String),

    /// Shell command failed to spawn or exited non-zero
    #[error("command `{command}` failed: {detail}")]
    Command {
        /// Command line, with secrets redacted
        command: String,
        /// Exit status and captured output, or the spawn error
        detail: String,
    },

    /// GitHub API error
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// Authentication error
    #[error("authentication error: {0}")]
    Auth(String),

    /// Required environment variable is not set
    #[error("environment variable {0} is not set")]
    MissingEnv(String),

    /// Repository slug is not `owner/repo`
    #[error("invalid repository `{0}` (expected owner/repo)")]
    InvalidRepository(String),

    /// Triggering event payload could not be used
    #[error("event payload error: {0}")]
    Event(String),

    /// Pull request template could not be parsed
    #[error("template error: {0}")]
    Template(String),

    /// I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<octocrab::Error> for Error {
    fn from(err: octocrab::Error) -> Self {
        Self::GitHubApi(err.to_string())
    }
}

/// Result alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

//! Progress callback trait for interface-agnostic updates
//!
//! This trait allows different interfaces (CLI, tests) to receive progress
//! updates while a run executes.

use crate::error::Error;
use crate::types::PullRequest;
use async_trait::async_trait;
use std::fmt;

/// Run phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Downloading translations
    Pulling,
    /// Committing and pushing the feature branch
    Publishing,
    /// Opening the pull request
    CreatingPr,
    /// Attaching assignee and reviewer
    PostCreation,
    /// Run complete
    Complete,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pulling => "Pulling translations",
            Self::Publishing => "Pushing changes",
            Self::CreatingPr => "Creating pull request",
            Self::PostCreation => "Updating pull request",
            Self::Complete => "Done",
        })
    }
}

/// Progress callback trait
///
/// Implement this trait to receive progress updates during a run.
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// Called when entering a new phase
    async fn on_phase(&self, phase: Phase);

    /// Called when the pull request is created
    async fn on_pr_created(&self, pr: &PullRequest);

    /// Called when an error occurs (non-fatal)
    async fn on_error(&self, error: &Error);

    /// Called with a general status message
    async fn on_message(&self, message: &str);
}

/// No-op progress callback for testing or when progress isn't needed
pub struct NoopProgress;

#[async_trait]
impl ProgressCallback for NoopProgress {
    async fn on_phase(&self, _phase: Phase) {}
    async fn on_pr_created(&self, _pr: &PullRequest) {}
    async fn on_error(&self, _error: &Error) {}
    async fn on_message(&self, _message: &str) {}
}

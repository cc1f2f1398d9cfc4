//! Hosted review API
//!
//! Pull request operations sit behind [`ReviewService`] so the workflow can
//! be driven against a test double.

mod detection;
mod factory;
mod github;

pub use detection::{api_base_url, parse_repository};
pub use factory::create_review_service;
pub use github::GitHubService;

use crate::error::Result;
use crate::types::PullRequest;
use async_trait::async_trait;

/// Pull request operations used by the workflow
#[async_trait]
pub trait ReviewService: Send + Sync {
    /// Open a pull request from `head` into `base`
    async fn create_pr(&self, head: &str, base: &str, title: &str, body: &str)
    -> Result<PullRequest>;

    /// Add assignees to a pull request
    async fn add_assignees(&self, pr_number: u64, assignees: &[String]) -> Result<()>;

    /// Request reviews on a pull request
    async fn request_reviewers(&self, pr_number: u64, reviewers: &[String]) -> Result<()>;
}

//! Stages 3 and 4: open the pull request, then assign and request review
//!
//! Nothing here aborts a run. Failures are logged, reported through the
//! progress callback and swallowed.

use crate::error::Error;
use crate::platform::ReviewService;
use crate::template::Template;
use crate::types::{PullRequest, RunParameters};
use crate::workflow::ProgressCallback;
use serde_json::{json, Value};
use tracing::{info, warn};

/// Built-in pull request description template
pub const DEFAULT_TEMPLATE: &str = include_str!("../../templates/pull_request.md");

/// A pull request ready to be opened
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRequest {
    /// Feature branch
    pub head: String,
    /// Branch to merge into
    pub base: String,
    /// PR title
    pub title: String,
    /// Rendered PR description
    pub body: String,
}

/// `[TRANSLATIONS] Pull translations for <resource>`
pub fn review_title(resource: &str) -> String {
    format!("[TRANSLATIONS] Pull translations for {resource}")
}

/// Values available to the description template
pub fn template_context(params: &RunParameters, issue_number: Option<u64>) -> Value {
    json!({
        "project": params.project,
        "resource": params.resource,
        "fullResource": params.full_resource(),
        "languages": params.languages,
        "mode": params.mode.as_str(),
        "tier": params.mode.tx_tier(),
        "branch": params.base_branch(),
        "featureBranch": params.feature_branch(),
        "issueNo": issue_number,
    })
}

/// Assemble the pull request for a run
pub fn build_review_request(
    params: &RunParameters,
    template: &Template,
    issue_number: Option<u64>,
) -> ReviewRequest {
    ReviewRequest {
        head: params.feature_branch(),
        base: params.base_branch().to_string(),
        title: review_title(&params.resource),
        body: template.render(&template_context(params, issue_number)),
    }
}

/// Open the pull request
///
/// Returns `None` when creation fails; the failure is only reported.
pub async fn create_review_request(
    platform: &dyn ReviewService,
    request: &ReviewRequest,
    progress: &dyn ProgressCallback,
) -> Option<PullRequest> {
    info!(head = %request.head, base = %request.base, "Creating pull request");

    match platform
        .create_pr(&request.head, &request.base, &request.title, &request.body)
        .await
    {
        Ok(pr) => {
            info!(number = pr.number, url = %pr.html_url, "Created pull request");
            progress.on_pr_created(&pr).await;
            Some(pr)
        }
        Err(e) => {
            warn!("Failed to create PR: {e}");
            progress
                .on_error(&Error::GitHubApi(format!("Failed to create PR: {e}")))
                .await;
            None
        }
    }
}

/// Assign `actor` to the pull request; returns whether it worked
pub async fn add_puller_as_assignee(
    platform: &dyn ReviewService,
    pr_number: u64,
    actor: &str,
    progress: &dyn ProgressCallback,
) -> bool {
    match platform
        .add_assignees(pr_number, &[actor.to_string()])
        .await
    {
        Ok(()) => {
            info!(pr_number, %actor, "Added assignee");
            progress
                .on_message(&format!("Assigned {actor} to #{pr_number}"))
                .await;
            true
        }
        Err(e) => {
            warn!("Failed to add {actor} as assignee on #{pr_number}: {e}");
            progress
                .on_error(&Error::GitHubApi(format!("Failed to add assignee: {e}")))
                .await;
            false
        }
    }
}

/// Request a review from `actor`; returns whether it worked
pub async fn request_puller_review(
    platform: &dyn ReviewService,
    pr_number: u64,
    actor: &str,
    progress: &dyn ProgressCallback,
) -> bool {
    match platform
        .request_reviewers(pr_number, &[actor.to_string()])
        .await
    {
        Ok(()) => {
            info!(pr_number, %actor, "Requested reviewer");
            progress
                .on_message(&format!("Requested review from {actor} on #{pr_number}"))
                .await;
            true
        }
        Err(e) => {
            warn!("Failed to request review from {actor} on #{pr_number}: {e}");
            progress
                .on_error(&Error::GitHubApi(format!("Failed to request reviewer: {e}")))
                .await;
            false
        }
    }
}

//! Run execution

use crate::error::Result;
use crate::platform::ReviewService;
use crate::shell::CommandRunner;
use crate::types::PullRequest;
use crate::workflow::{
    add_puller_as_assignee, create_review_request, publish_changes, pull_translations,
    request_puller_review, Phase, ProgressCallback, RunPlan,
};
use tracing::info;

/// Result of a run that got past the fatal stages
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// Feature branch that was pushed
    pub feature_branch: String,
    /// Pull request, if it could be created
    pub pull_request: Option<PullRequest>,
    /// Whether the actor was assigned
    pub assigned: bool,
    /// Whether a review was requested from the actor
    pub reviewer_requested: bool,
}

/// Execute a run plan
///
/// Pull and publish failures are returned as errors, leaving the working
/// tree and remote as far as they got. Pull request failures are reported
/// to `progress` and the run still succeeds.
pub async fn execute_run(
    plan: &RunPlan,
    runner: &dyn CommandRunner,
    platform: &dyn ReviewService,
    progress: &dyn ProgressCallback,
) -> Result<RunOutcome> {
    progress.on_phase(Phase::Pulling).await;
    pull_translations(runner, &plan.params, plan.work_dir.as_deref()).await?;

    progress.on_phase(Phase::Publishing).await;
    let feature_branch = publish_changes(runner, &plan.params, &plan.push_target).await?;

    progress.on_phase(Phase::CreatingPr).await;
    let pull_request = create_review_request(platform, &plan.review, progress).await;

    let mut outcome = RunOutcome {
        feature_branch,
        pull_request,
        assigned: false,
        reviewer_requested: false,
    };

    // Without a PR number there is nothing to attach to.
    if let Some(pr) = &outcome.pull_request {
        let post = &plan.post_creation;
        if post.assignee.is_some() || post.reviewer.is_some() {
            progress.on_phase(Phase::PostCreation).await;
        }
        if let Some(assignee) = &post.assignee {
            outcome.assigned = add_puller_as_assignee(platform, pr.number, assignee, progress).await;
        }
        if let Some(reviewer) = &post.reviewer {
            outcome.reviewer_requested =
                request_puller_review(platform, pr.number, reviewer, progress).await;
        }
    }

    info!(
        "Done processing new translations for {}",
        plan.params.resource
    );
    progress.on_phase(Phase::Complete).await;

    Ok(outcome)
}

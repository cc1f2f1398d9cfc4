//! Run planning
//!
//! Everything a run will do is decided up front, so a dry run can report it
//! and execution only has to carry it out.

use crate::shell::ShellCommand;
use crate::template::Template;
use crate::types::RunParameters;
use crate::workflow::{
    build_review_request, publish_commands, pull_commands, ProgressCallback, PushTarget,
    ReviewRequest,
};
use std::path::PathBuf;
use tracing::warn;

/// Run settings beyond the run parameters
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Directory to run `tx pull` in
    pub work_dir: Option<PathBuf>,
    /// Issue that triggered the run, passed to the template
    pub issue_number: Option<u64>,
    /// Assign the actor to the created PR
    pub add_puller_as_assignee: bool,
    /// Request a review from the actor
    pub add_puller_as_reviewer: bool,
    /// Login of the user that triggered the run
    pub actor: Option<String>,
}

/// Who to attach to the pull request once it exists
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostCreation {
    /// Login to add as assignee
    pub assignee: Option<String>,
    /// Login to request a review from
    pub reviewer: Option<String>,
}

/// A fully decided run
#[derive(Debug, Clone)]
pub struct RunPlan {
    /// Run parameters
    pub params: RunParameters,
    /// Directory to run `tx pull` in
    pub work_dir: Option<PathBuf>,
    /// Where the feature branch goes
    pub push_target: PushTarget,
    /// Pull request to open
    pub review: ReviewRequest,
    /// Actions taken on the pull request after creation
    pub post_creation: PostCreation,
}

impl RunPlan {
    /// Every shell command the run executes, in order
    pub fn commands(&self) -> Vec<ShellCommand> {
        let mut commands = pull_commands(&self.params, self.work_dir.as_deref());
        commands.extend(publish_commands(&self.params, &self.push_target));
        commands
    }
}

/// Decide what a run will do
///
/// Post-creation toggles without a known actor are dropped with a warning.
pub fn create_run_plan(
    params: RunParameters,
    options: &RunOptions,
    template: &Template,
    push_target: PushTarget,
) -> RunPlan {
    let actor_for = |enabled: bool, action: &str| -> Option<String> {
        if !enabled {
            return None;
        }
        if options.actor.is_none() {
            warn!("Cannot {action}: GITHUB_ACTOR is not set");
        }
        options.actor.clone()
    };

    let post_creation = PostCreation {
        assignee: actor_for(options.add_puller_as_assignee, "add the puller as assignee"),
        reviewer: actor_for(options.add_puller_as_reviewer, "request the puller's review"),
    };

    let review = build_review_request(&params, template, options.issue_number);

    RunPlan {
        params,
        work_dir: options.work_dir.clone(),
        push_target,
        review,
        post_creation,
    }
}

/// Report what a run would do without doing it
pub async fn report_plan(plan: &RunPlan, progress: &dyn ProgressCallback) {
    progress.on_message("Dry run - no changes will be made").await;

    progress.on_message("Would run:").await;
    for command in plan.commands() {
        progress.on_message(&format!("  $ {command}")).await;
    }

    progress
        .on_message(&format!(
            "Would create PR: {} → {} ({})",
            plan.review.head, plan.review.base, plan.review.title
        ))
        .await;

    if let Some(assignee) = &plan.post_creation.assignee {
        progress
            .on_message(&format!("Would assign {assignee}"))
            .await;
    }
    if let Some(reviewer) = &plan.post_creation.reviewer {
        progress
            .on_message(&format!("Would request review from {reviewer}"))
            .await;
    }
}

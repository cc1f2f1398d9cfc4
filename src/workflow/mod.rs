//! Translation pull workflow
//!
//! A run moves through four stages, each depending on the side effects of
//! the one before:
//! 1. Pull - download translations with `tx`
//! 2. Publish - commit and force-push the feature branch
//! 3. Review - open the pull request
//! 4. Post-creation - assign the actor and request their review
//!
//! Failures in the first two stages abort the run. Failures in the last two
//! are reported and absorbed.

mod execute;
mod plan;
mod progress;
mod publish;
mod pull;
mod review;

pub use execute::{execute_run, RunOutcome};
pub use plan::{create_run_plan, report_plan, PostCreation, RunOptions, RunPlan};
pub use progress::{NoopProgress, Phase, ProgressCallback};
pub use publish::{
    commit_message, publish_changes, publish_commands, PushTarget, COMMIT_USER_EMAIL,
    COMMIT_USER_NAME,
};
pub use pull::{pull_commands, pull_translations};
pub use review::{
    add_puller_as_assignee, build_review_request, create_review_request, request_puller_review,
    review_title, template_context, ReviewRequest, DEFAULT_TEMPLATE,
};

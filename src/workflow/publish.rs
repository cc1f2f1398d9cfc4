//! Stage 2: commit the pulled files and force-push the feature branch

use crate::error::Result;
use crate::shell::{quote, CommandRunner, ShellCommand};
use crate::types::{PlatformConfig, RunParameters};
use tracing::info;

/// Committer name configured before committing
pub const COMMIT_USER_NAME: &str = "GitHub Action";

/// Committer email configured before committing
pub const COMMIT_USER_EMAIL: &str = "action@github.com";

/// Remote the feature branch is pushed to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushTarget {
    /// Git host, e.g. `github.com`
    pub host: String,
    /// Repository owner
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Token embedded in the push URL; `None` renders it as `***`
    pub token: Option<String>,
}

impl PushTarget {
    /// Target for the repository in `config`, pushed to over `host`
    pub fn new(config: &PlatformConfig, host: &str, token: Option<String>) -> Self {
        Self {
            host: host.to_string(),
            owner: config.owner.clone(),
            repo: config.repo.clone(),
            token,
        }
    }

    /// Token-authenticated HTTPS URL
    pub fn url(&self) -> String {
        let token = self
            .token
            .as_deref()
            .map_or_else(|| "***".into(), urlencoding::encode);
        format!(
            "https://x-access-token:{token}@{}/{}/{}.git",
            self.host, self.owner, self.repo
        )
    }
}

/// Commit message for a full resource identifier
pub fn commit_message(full_resource: &str) -> String {
    format!("Auto-committed translation changes for {full_resource}")
}

/// Commands that commit everything and push it as the feature branch
///
/// The committer identity is set with `--global`. `git commit` fails when
/// the pull changed nothing, which stops the run there.
pub fn publish_commands(params: &RunParameters, target: &PushTarget) -> Vec<ShellCommand> {
    let full_resource = params.full_resource();
    let branch = params.feature_branch();

    vec![
        ShellCommand::new(format!(
            "git config --global user.name {}",
            quote(COMMIT_USER_NAME)
        )),
        ShellCommand::new(format!(
            "git config --global user.email {}",
            quote(COMMIT_USER_EMAIL)
        )),
        ShellCommand::new("git add ."),
        ShellCommand::new(format!(
            "git commit -m {}",
            quote(&commit_message(&full_resource))
        )),
        ShellCommand::new(format!("git checkout -b {}", quote(&branch))),
        ShellCommand::new(format!(
            "git push -f {} {}",
            quote(&target.url()),
            quote(&format!("HEAD:refs/heads/{branch}"))
        )),
    ]
}

/// Commit and push the pulled translations
///
/// Returns the feature branch name. Any failing command aborts the publish.
pub async fn publish_changes(
    runner: &dyn CommandRunner,
    params: &RunParameters,
    target: &PushTarget,
) -> Result<String> {
    let branch = params.feature_branch();
    info!(%branch, "Pushing changes to remote");

    for command in publish_commands(params, target) {
        runner.run(&command).await?;
    }
    Ok(branch)
}

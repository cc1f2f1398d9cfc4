//! Stage 1: pull translations from Transifex

use crate::error::Result;
use crate::shell::{quote, CommandRunner, ShellCommand};
use crate::types::RunParameters;
use std::path::Path;
use tracing::info;

/// Commands that check out the working branch and pull translations
///
/// When `params.branch` is set, `git fetch` and `git checkout <branch>` come
/// first. `tx pull` always forces overwriting local files and runs in
/// `work_dir` when given.
pub fn pull_commands(params: &RunParameters, work_dir: Option<&Path>) -> Vec<ShellCommand> {
    let mut commands = Vec::new();

    if let Some(branch) = &params.branch {
        commands.push(ShellCommand::new("git fetch"));
        commands.push(ShellCommand::new(format!("git checkout {}", quote(branch))));
    }

    let languages = params.languages.join(",");
    commands.push(
        ShellCommand::new(format!(
            "tx pull --mode {} -f -l {} -r {}",
            params.mode.tx_tier(),
            quote(&languages),
            quote(&params.full_resource())
        ))
        .in_dir(work_dir),
    );

    commands
}

/// Pull translations for the requested languages
///
/// Any failing command aborts the pull.
pub async fn pull_translations(
    runner: &dyn CommandRunner,
    params: &RunParameters,
    work_dir: Option<&Path>,
) -> Result<()> {
    info!(
        resource = %params.full_resource(),
        mode = %params.mode,
        "Pulling translations from Transifex"
    );

    for command in pull_commands(params, work_dir) {
        runner.run(&command).await?;
    }
    Ok(())
}

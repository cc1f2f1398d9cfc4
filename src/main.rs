//! tx-puller - Transifex translations as GitHub pull requests
//!
//! CLI binary, normally run as a GitHub Actions step.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use tx_puller::params::DirectInputs;

mod cli;

#[derive(Parser)]
#[command(name = "tx-puller")]
#[command(about = "Pull Transifex translations into a GitHub pull request")]
#[command(version)]
struct Cli {
    /// Path to the repository checkout (defaults to current directory)
    #[arg(short, long, global = true)]
    path: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Take parameters from the table in the triggering issue
    Issue {
        /// Event payload file (defaults to `GITHUB_EVENT_PATH`)
        #[arg(long)]
        event_path: Option<PathBuf>,

        #[command(flatten)]
        run: RunArgs,
    },

    /// Take parameters from the action inputs (`INPUT_*` variables)
    Inputs {
        #[command(flatten)]
        inputs: InputArgs,

        #[command(flatten)]
        run: RunArgs,
    },
}

#[derive(Args)]
struct RunArgs {
    /// Pull request description template (defaults to the built-in one)
    #[arg(long)]
    template: Option<PathBuf>,

    /// Dry run - show what would be done without making changes
    #[arg(long)]
    dry_run: bool,
}

#[derive(Args)]
struct InputArgs {
    /// Transifex project slug
    #[arg(long)]
    project: Option<String>,

    /// Transifex resource slug
    #[arg(long)]
    resource: Option<String>,

    /// Comma-separated language codes
    #[arg(long)]
    languages: Option<String>,

    /// untranslated, translated, reviewed or proofread
    #[arg(long)]
    mode: Option<String>,

    /// Branch to pull on and target with the pull request
    #[arg(long)]
    branch: Option<String>,

    /// Directory to run `tx pull` in
    #[arg(long)]
    tx_work_dir: Option<String>,

    /// Assign the triggering user to the pull request
    #[arg(long)]
    add_puller_as_assignee: bool,

    /// Request a review from the triggering user
    #[arg(long)]
    add_puller_as_reviewer: bool,
}

impl From<InputArgs> for DirectInputs {
    fn from(args: InputArgs) -> Self {
        let flag = |set: bool| set.then(|| "true".to_string());
        Self {
            project: args.project,
            resource: args.resource,
            languages: args.languages,
            mode: args.mode,
            branch: args.branch,
            tx_work_dir: args.tx_work_dir,
            add_puller_as_assignee: flag(args.add_puller_as_assignee),
            add_puller_as_reviewer: flag(args.add_puller_as_reviewer),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            cli::report_failure(&err);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    if let Some(path) = &cli.path {
        std::env::set_current_dir(path)
            .with_context(|| format!("cannot enter {}", path.display()))?;
    }

    match cli.command {
        Commands::Issue { event_path, run } => {
            cli::run_issue(event_path.as_deref(), run.template.as_deref(), run.dry_run).await?;
        }
        Commands::Inputs { inputs, run } => {
            cli::run_inputs(inputs.into(), run.template.as_deref(), run.dry_run).await?;
        }
    }

    Ok(())
}

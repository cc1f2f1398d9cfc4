//! Run commands - resolve parameters, then plan and execute a run

use crate::cli::progress::CliProgress;
use crate::cli::style::{check, cross, Stream, Stylize};
use anstream::{eprintln, println};
use std::env;
use std::path::Path;
use tracing::{error, info};
use tx_puller::auth::get_github_auth;
use tx_puller::context::ActionContext;
use tx_puller::error::{Error, Result};
use tx_puller::event::load_issue_event;
use tx_puller::params::{params_from_issue_body, DirectInputs};
use tx_puller::platform::create_review_service;
use tx_puller::shell::ShellRunner;
use tx_puller::template::Template;
use tx_puller::types::RunParameters;
use tx_puller::workflow::{
    create_run_plan, execute_run, report_plan, PushTarget, RunOptions, DEFAULT_TEMPLATE,
};

/// Run from the table in the triggering issue
pub async fn run_issue(
    event_path: Option<&Path>,
    template: Option<&Path>,
    dry_run: bool,
) -> Result<()> {
    let context = ActionContext::from_env()?;
    let event_path = event_path
        .or(context.event_path.as_deref())
        .ok_or_else(|| Error::MissingEnv("GITHUB_EVENT_PATH".to_string()))?;

    let issue = load_issue_event(event_path)?;
    if !issue.is_translation_request() {
        info!("Ignoring issue with title {}", issue.title);
        println!("Ignoring issue with title {}", issue.title.muted());
        return Ok(());
    }

    let params = params_from_issue_body(issue.body.as_deref().unwrap_or_default())?;
    let options = RunOptions {
        issue_number: Some(issue.number),
        ..RunOptions::default()
    };

    run_workflow(&context, params, options, template, dry_run).await
}

/// Run from the action's inputs, with `overrides` taking precedence
pub async fn run_inputs(
    overrides: DirectInputs,
    template: Option<&Path>,
    dry_run: bool,
) -> Result<()> {
    let resolved = DirectInputs::from_env().with_overrides(overrides).resolve()?;
    let options = RunOptions {
        work_dir: resolved.tx_work_dir,
        add_puller_as_assignee: resolved.add_puller_as_assignee,
        add_puller_as_reviewer: resolved.add_puller_as_reviewer,
        ..RunOptions::default()
    };

    let context = ActionContext::from_env()?;
    run_workflow(&context, resolved.params, options, template, dry_run).await
}

/// Report a fatal error the way the job runner expects
pub fn report_failure(err: &anyhow::Error) {
    error!("{err:#}");
    if env::var("GITHUB_ACTIONS").is_ok_and(|v| v == "true") {
        println!("::error::{err:#}");
    }
    eprintln!("{}: {err:#}", "error".error());
}

async fn run_workflow(
    context: &ActionContext,
    params: RunParameters,
    mut options: RunOptions,
    template_path: Option<&Path>,
    dry_run: bool,
) -> Result<()> {
    let template = load_template(template_path)?;
    options.actor.clone_from(&context.actor);

    println!(
        "Pulling {} ({}) for {} into {}",
        params.full_resource().accent(),
        params.mode.to_string().accent(),
        params.languages.join(", ").accent(),
        params.base_branch().accent()
    );
    println!();

    let progress = CliProgress;

    if dry_run {
        let target = PushTarget::new(&context.repository, context.push_host(), None);
        let plan = create_run_plan(params, &options, &template, target);
        report_plan(&plan, &progress).await;
        return Ok(());
    }

    let auth = get_github_auth().await?;
    let platform = create_review_service(context, &auth)?;
    let target = PushTarget::new(
        &context.repository,
        context.push_host(),
        Some(auth.token.clone()),
    );
    let plan = create_run_plan(params, &options, &template, target);
    let runner = ShellRunner::new().with_secret(auth.token);

    let outcome = execute_run(&plan, &runner, platform.as_ref(), &progress).await?;

    // Summary
    println!();
    println!("{} Pushed {}", check(), outcome.feature_branch.accent());
    match &outcome.pull_request {
        Some(pr) => println!("{} Pull request #{}", check(), pr.number.accent()),
        None => println!(
            "{} {}",
            cross().on(Stream::Stdout),
            "Pull request was not created".warn().on(Stream::Stdout)
        ),
    }
    if plan.post_creation.assignee.is_some() && !outcome.assigned {
        println!("{}", "Assignee was not added".warn().on(Stream::Stdout));
    }
    if plan.post_creation.reviewer.is_some() && !outcome.reviewer_requested {
        println!("{}", "Reviewer was not requested".warn().on(Stream::Stdout));
    }

    Ok(())
}

fn load_template(path: Option<&Path>) -> Result<Template> {
    match path {
        Some(path) => {
            let source = std::fs::read_to_string(path)?;
            Template::parse(&source)
        }
        None => Template::parse(DEFAULT_TEMPLATE),
    }
}

//! CLI progress callback with styled output

use crate::cli::style::{arrow, check, cross, link, Stylize};
use anstream::{eprintln, println};
use async_trait::async_trait;
use tx_puller::error::Error;
use tx_puller::types::PullRequest;
use tx_puller::workflow::{Phase, ProgressCallback};

/// CLI progress callback that prints to stdout with styled output
pub struct CliProgress;

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_phase(&self, phase: Phase) {
        match phase {
            Phase::Complete => println!("{} {}", check(), phase.to_string().success()),
            _ => println!("{} {}...", arrow(), phase.to_string().emphasis()),
        }
    }

    async fn on_pr_created(&self, pr: &PullRequest) {
        let pr_num = format!("#{}", pr.number);
        println!(
            "  {} Created PR {} ({} → {})",
            check(),
            pr_num.accent(),
            pr.head_ref.emphasis(),
            pr.base_ref.emphasis()
        );
        if !pr.html_url.is_empty() {
            println!("    {}", link(&pr.html_url));
        }
    }

    async fn on_error(&self, err: &Error) {
        eprintln!("  {} {}", cross(), err.to_string().error());
    }

    async fn on_message(&self, message: &str) {
        println!("  {}", message.muted());
    }
}

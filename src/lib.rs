//! tx-puller - Transifex translations as GitHub pull requests
//!
//! Pulls translations for a Transifex resource with the `tx` CLI, commits
//! them to a `feature/translations/<project>.<resource>` branch, force-pushes
//! it and opens a pull request against the base branch.

pub mod auth;
pub mod context;
pub mod error;
pub mod event;
pub mod params;
pub mod platform;
pub mod shell;
pub mod template;
pub mod types;
pub mod workflow;

//! GitHub authentication
//!
//! Supports the runner's environment variables and the gh CLI.

mod github;

pub use github::{get_github_auth, GitHubAuthConfig};

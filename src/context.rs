//! Execution context provided by the job runner

use crate::error::{Error, Result};
use crate::platform::parse_repository;
use crate::types::PlatformConfig;
use std::env;
use std::path::PathBuf;

/// Server URL used when `GITHUB_SERVER_URL` is absent
pub const DEFAULT_SERVER_URL: &str = "https://github.com";

/// Where and on whose behalf the workflow is running
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionContext {
    /// Repository (and host, for GitHub Enterprise) to push to and open PRs on
    pub repository: PlatformConfig,
    /// Login of the user that triggered the run
    pub actor: Option<String>,
    /// REST API base URL, when set by the runner
    pub api_url: Option<String>,
    /// Path of the JSON payload of the triggering event
    pub event_path: Option<PathBuf>,
}

impl ActionContext {
    /// Read the context through an arbitrary environment lookup
    ///
    /// `GITHUB_REPOSITORY` is required; everything else is optional.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let slug = get("GITHUB_REPOSITORY")
            .ok_or_else(|| Error::MissingEnv("GITHUB_REPOSITORY".to_string()))?;
        let server_url = get("GITHUB_SERVER_URL").unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());

        Ok(Self {
            repository: parse_repository(&slug, &server_url)?,
            actor: get("GITHUB_ACTOR"),
            api_url: get("GITHUB_API_URL"),
            event_path: get("GITHUB_EVENT_PATH").map(PathBuf::from),
        })
    }

    /// Read the context from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Host to push to, e.g. `github.com`
    pub fn push_host(&self) -> &str {
        self.repository.host.as_deref().unwrap_or("github.com")
    }
}

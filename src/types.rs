//! Core types for tx-puller

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Branch that review requests target when no branch is given
pub const DEFAULT_BASE_BRANCH: &str = "master";

/// Prefix shared by every translation feature branch
pub const FEATURE_BRANCH_PREFIX: &str = "feature/translations/";

/// Completeness tier a translation must reach before it is downloaded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Everything, including untranslated strings
    Untranslated,
    /// Translated strings
    Translated,
    /// Strings that passed the first review
    Reviewed,
    /// Strings that passed proofreading
    Proofread,
}

impl Mode {
    /// Every accepted mode, in increasing order of strictness
    pub const ALL: [Self; 4] = [
        Self::Untranslated,
        Self::Translated,
        Self::Reviewed,
        Self::Proofread,
    ];

    /// Name accepted in issue bodies and action inputs
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Untranslated => "untranslated",
            Self::Translated => "translated",
            Self::Reviewed => "reviewed",
            Self::Proofread => "proofread",
        }
    }

    /// Value passed to `tx pull --mode`
    pub const fn tx_tier(self) -> &'static str {
        match self {
            Self::Untranslated => "developer",
            Self::Translated => "translated",
            Self::Reviewed => "reviewed",
            Self::Proofread => "reviewed2",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let value = s.trim();
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == value)
            .ok_or_else(|| Error::UnknownMode(value.to_string()))
    }
}

/// Fully resolved parameters for one run
///
/// Built once by a parameter source and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunParameters {
    /// Transifex project slug, e.g. `retail-pos-web`
    pub project: String,
    /// Resource slug within the project, e.g. `retail-reports`
    pub resource: String,
    /// Language codes to pull, in the order given
    pub languages: Vec<String>,
    /// Completeness tier
    pub mode: Mode,
    /// Working/base branch; `None` keeps the current checkout and targets `master`
    pub branch: Option<String>,
}

impl RunParameters {
    /// `project.resource`
    pub fn full_resource(&self) -> String {
        full_resource(&self.project, &self.resource)
    }

    /// `feature/translations/project.resource`
    pub fn feature_branch(&self) -> String {
        feature_branch_name(&self.full_resource())
    }

    /// Branch the review request merges into
    pub fn base_branch(&self) -> &str {
        self.branch.as_deref().unwrap_or(DEFAULT_BASE_BRANCH)
    }
}

/// Canonical resource identifier used by `tx` and for branch naming
pub fn full_resource(project: &str, resource: &str) -> String {
    format!("{project}.{resource}")
}

/// Feature branch for a full resource identifier
pub fn feature_branch_name(full_resource: &str) -> String {
    format!("{FEATURE_BRANCH_PREFIX}{full_resource}")
}

/// Split a comma-separated language list, dropping blanks
pub fn split_languages(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|lang| !lang.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// A pull request
#[derive(Debug, Clone)]
pub struct PullRequest {
    /// PR number
    pub number: u64,
    /// Web URL for the PR
    pub html_url: String,
    /// Base branch name
    pub base_ref: String,
    /// Head branch name
    pub head_ref: String,
    /// PR title
    pub title: String,
}

/// Repository the workflow runs against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformConfig {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Custom host (None for github.com)
    pub host: Option<String>,
}

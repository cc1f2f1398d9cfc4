//! Triggering issue event

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Title prefix marking an issue as a translation request
pub const TRANSLATIONS_PREFIX: &str = "[TRANSLATIONS]";

/// Issue carried by an `issues` event
#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
    /// Issue number
    pub number: u64,
    /// Issue title
    pub title: String,
    /// Issue body (absent when the issue was opened without one)
    #[serde(default)]
    pub body: Option<String>,
}

impl Issue {
    /// Whether the issue asks for a translation pull
    pub fn is_translation_request(&self) -> bool {
        self.title.starts_with(TRANSLATIONS_PREFIX)
    }
}

#[derive(Debug, Deserialize)]
struct IssueEvent {
    issue: Option<Issue>,
}

/// Parse the issue out of an event payload
pub fn parse_issue_event(payload: &str) -> Result<Issue> {
    let event: IssueEvent = serde_json::from_str(payload)?;
    event
        .issue
        .ok_or_else(|| Error::Event("payload has no `issue` object".to_string()))
}

/// Read the issue from the event payload file
pub fn load_issue_event(path: &Path) -> Result<Issue> {
    let payload = std::fs::read_to_string(path)
        .map_err(|e| Error::Event(format!("cannot read {}: {e}", path.display())))?;
    parse_issue_event(&payload)
}

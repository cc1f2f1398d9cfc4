//! Issue body table strategy
//!
//! Issues opened from the translation template carry a two-column markdown
//! table:
//!
//! ```text
//! | Parameter | Value          |
//! |-----------|----------------|
//! | Project   | retail-pos-web |
//! | Resource  | retail-reports |
//! | Languages | fr,de          |
//! | Mode      | reviewed       |
//! | Branch    | master         |
//! ```

use crate::error::{Error, Result};
use crate::types::{split_languages, Mode, RunParameters};
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;
use tracing::info;

fn row_pattern() -> &'static Regex {
    static ROW: OnceLock<Regex> = OnceLock::new();
    ROW.get_or_init(|| {
        Regex::new(r"^\|\s*(.*?)\s*\|\s*(.*?)\s*\|").expect("hardcoded row pattern is valid")
    })
}

/// Extract `(key, value)` pairs from the table rows of an issue body
///
/// The first two matching rows are taken to be the header and the separator
/// and are dropped without being checked. A table whose first row is already
/// data therefore loses that row.
pub fn parse_table_rows(body: &str) -> Vec<(String, String)> {
    body.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter_map(|line| row_pattern().captures(line))
        .skip(2)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}

/// Build run parameters from an issue body
///
/// Requires `Project`, `Resource`, `Languages`, `Mode` and `Branch` rows.
/// `Branch` may be left empty; every other value must be non-blank. When a
/// key repeats, the last row wins.
pub fn params_from_issue_body(body: &str) -> Result<RunParameters> {
    info!("Extracting parameters from issue body");

    let rows: HashMap<String, String> = parse_table_rows(body).into_iter().collect();

    let project = required(&rows, "Project")?.to_string();
    let resource = required(&rows, "Resource")?.to_string();

    let languages = split_languages(required(&rows, "Languages")?);
    if languages.is_empty() {
        return Err(Error::MissingField("Languages".to_string()));
    }

    let mode: Mode = required(&rows, "Mode")?.parse()?;

    let branch = rows
        .get("Branch")
        .ok_or_else(|| Error::MissingField("Branch".to_string()))?
        .trim();
    let branch = (!branch.is_empty()).then(|| branch.to_string());

    Ok(RunParameters {
        project,
        resource,
        languages,
        mode,
        branch,
    })
}

fn required<'a>(rows: &'a HashMap<String, String>, key: &str) -> Result<&'a str> {
    rows.get(key)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| Error::MissingField(key.to_string()))
}

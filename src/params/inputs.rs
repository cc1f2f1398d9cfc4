//! Direct-input strategy
//!
//! Reads the action's named inputs the way the Actions runner exposes them:
//! as `INPUT_<NAME>` environment variables.

use crate::error::{Error, Result};
use crate::types::{split_languages, Mode, RunParameters};
use std::env;
use std::path::PathBuf;

const PROJECT: &str = "project";
const RESOURCE: &str = "resource";
const LANGUAGES: &str = "languages";
const MODE: &str = "mode";
const BRANCH: &str = "branch";
const TX_WORK_DIR: &str = "txWorkDir";
const ADD_ASSIGNEE: &str = "addPullerAsAssignee";
const ADD_REVIEWER: &str = "addPullerAsReviewer";

/// Raw, unvalidated action inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectInputs {
    /// `project`
    pub project: Option<String>,
    /// `resource`
    pub resource: Option<String>,
    /// `languages`, comma-separated
    pub languages: Option<String>,
    /// `mode`
    pub mode: Option<String>,
    /// `branch`
    pub branch: Option<String>,
    /// `txWorkDir`
    pub tx_work_dir: Option<String>,
    /// `addPullerAsAssignee`
    pub add_puller_as_assignee: Option<String>,
    /// `addPullerAsReviewer`
    pub add_puller_as_reviewer: Option<String>,
}

/// Validated direct inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInputs {
    /// Run parameters
    pub params: RunParameters,
    /// Directory to run `tx pull` in
    pub tx_work_dir: Option<PathBuf>,
    /// Assign the triggering actor to the created PR
    pub add_puller_as_assignee: bool,
    /// Request a review from the triggering actor
    pub add_puller_as_reviewer: bool,
}

/// Environment variable carrying an action input
fn input_env_name(name: &str) -> String {
    format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
}

impl DirectInputs {
    /// Read inputs through an arbitrary lookup keyed by environment variable
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(&input_env_name(name));
        Self {
            project: get(PROJECT),
            resource: get(RESOURCE),
            languages: get(LANGUAGES),
            mode: get(MODE),
            branch: get(BRANCH),
            tx_work_dir: get(TX_WORK_DIR),
            add_puller_as_assignee: get(ADD_ASSIGNEE),
            add_puller_as_reviewer: get(ADD_REVIEWER),
        }
    }

    /// Read inputs from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Replace every input that `overrides` sets
    #[must_use]
    pub fn with_overrides(self, overrides: Self) -> Self {
        Self {
            project: overrides.project.or(self.project),
            resource: overrides.resource.or(self.resource),
            languages: overrides.languages.or(self.languages),
            mode: overrides.mode.or(self.mode),
            branch: overrides.branch.or(self.branch),
            tx_work_dir: overrides.tx_work_dir.or(self.tx_work_dir),
            add_puller_as_assignee: overrides
                .add_puller_as_assignee
                .or(self.add_puller_as_assignee),
            add_puller_as_reviewer: overrides
                .add_puller_as_reviewer
                .or(self.add_puller_as_reviewer),
        }
    }

    /// Validate the inputs
    ///
    /// `project`, `resource`, `languages` and `mode` must be non-blank.
    /// A blank `branch` or `txWorkDir` counts as unset.
    pub fn resolve(&self) -> Result<ResolvedInputs> {
        let project = required(PROJECT, self.project.as_deref())?;
        let resource = required(RESOURCE, self.resource.as_deref())?;

        let languages = split_languages(required(LANGUAGES, self.languages.as_deref())?);
        if languages.is_empty() {
            return Err(Error::MissingRequiredInput(LANGUAGES.to_string()));
        }

        let mode: Mode = required(MODE, self.mode.as_deref())?.parse()?;

        Ok(ResolvedInputs {
            params: RunParameters {
                project: project.to_string(),
                resource: resource.to_string(),
                languages,
                mode,
                branch: optional(self.branch.as_deref()).map(ToString::to_string),
            },
            tx_work_dir: optional(self.tx_work_dir.as_deref()).map(PathBuf::from),
            add_puller_as_assignee: parse_bool_input(
                ADD_ASSIGNEE,
                self.add_puller_as_assignee.as_deref(),
            )?,
            add_puller_as_reviewer: parse_bool_input(
                ADD_REVIEWER,
                self.add_puller_as_reviewer.as_deref(),
            )?,
        })
    }
}

fn optional(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn required<'a>(name: &str, value: Option<&'a str>) -> Result<&'a str> {
    optional(value).ok_or_else(|| Error::MissingRequiredInput(name.to_string()))
}

/// Interpret a boolean action input; absent or blank is `false`
pub fn parse_bool_input(name: &str, value: Option<&str>) -> Result<bool> {
    match optional(value) {
        None | Some("false" | "False" | "FALSE") => Ok(false),
        Some("true" | "True" | "TRUE") => Ok(true),
        Some(other) => Err(Error::InvalidInput {
            name: name.to_string(),
            reason: format!("`{other}` is not one of true, True, TRUE, false, False, FALSE"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn complete() -> Vec<(&'static str, &'static str)> {
        vec![
            ("INPUT_PROJECT", "retail-pos-web"),
            ("INPUT_RESOURCE", "retail-reports"),
            ("INPUT_LANGUAGES", "fr,de"),
            ("INPUT_MODE", "proofread"),
        ]
    }

    #[test]
    fn test_reads_action_inputs() {
        let mut pairs = complete();
        pairs.push(("INPUT_BRANCH", "release-1"));
        pairs.push(("INPUT_TXWORKDIR", "frontend"));
        pairs.push(("INPUT_ADDPULLERASREVIEWER", "true"));

        let resolved = DirectInputs::from_lookup(lookup(&pairs)).resolve().unwrap();
        assert_eq!(resolved.params.project, "retail-pos-web");
        assert_eq!(resolved.params.languages, ["fr", "de"]);
        assert_eq!(resolved.params.mode, Mode::Proofread);
        assert_eq!(resolved.params.branch.as_deref(), Some("release-1"));
        assert_eq!(resolved.tx_work_dir, Some(PathBuf::from("frontend")));
        assert!(!resolved.add_puller_as_assignee);
        assert!(resolved.add_puller_as_reviewer);
    }

    #[test]
    fn test_toggles_default_to_false() {
        let resolved = DirectInputs::from_lookup(lookup(&complete()))
            .resolve()
            .unwrap();
        assert!(!resolved.add_puller_as_assignee);
        assert!(!resolved.add_puller_as_reviewer);
        assert!(resolved.params.branch.is_none());
        assert!(resolved.tx_work_dir.is_none());
    }

    #[test]
    fn test_blank_required_input_fails() {
        let pairs: Vec<_> = complete()
            .into_iter()
            .map(|(k, v)| if k == "INPUT_RESOURCE" { (k, "  ") } else { (k, v) })
            .collect();

        let err = DirectInputs::from_lookup(lookup(&pairs)).resolve().unwrap_err();
        assert!(matches!(err, Error::MissingRequiredInput(ref n) if n == "resource"));
    }

    #[test]
    fn test_overrides_take_precedence() {
        let inputs = DirectInputs::from_lookup(lookup(&complete())).with_overrides(DirectInputs {
            mode: Some("translated".to_string()),
            ..DirectInputs::default()
        });

        let resolved = inputs.resolve().unwrap();
        assert_eq!(resolved.params.mode, Mode::Translated);
        assert_eq!(resolved.params.project, "retail-pos-web");
    }

    #[test]
    fn test_bool_input_values() {
        assert!(parse_bool_input("x", Some("TRUE")).unwrap());
        assert!(!parse_bool_input("x", Some("False")).unwrap());
        assert!(!parse_bool_input("x", Some("")).unwrap());
        assert!(!parse_bool_input("x", None).unwrap());
        assert!(matches!(
            parse_bool_input("x", Some("yes")),
            Err(Error::InvalidInput { .. })
        ));
    }
}

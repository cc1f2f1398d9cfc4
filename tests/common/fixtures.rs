//! Test data factories for tx-puller types
//!
//! These are test utilities - not every test binary uses all of them.

#![allow(dead_code)]

use tx_puller::template::Template;
use tx_puller::types::{Mode, PlatformConfig, RunParameters};
use tx_puller::workflow::{create_run_plan, PushTarget, RunOptions, RunPlan, DEFAULT_TEMPLATE};

/// Token used in push URLs
pub const TEST_TOKEN: &str = "ghs_testtoken";

/// Parameters from the retail reports example
pub fn retail_params(branch: Option<&str>) -> RunParameters {
    RunParameters {
        project: "retail-pos-web".to_string(),
        resource: "retail-reports".to_string(),
        languages: vec!["fr".to_string(), "de".to_string()],
        mode: Mode::Reviewed,
        branch: branch.map(ToString::to_string),
    }
}

/// Repository config on github.com
pub fn github_config() -> PlatformConfig {
    PlatformConfig {
        owner: "testowner".to_string(),
        repo: "testrepo".to_string(),
        host: None,
    }
}

/// Push target for [`github_config`]
pub fn push_target() -> PushTarget {
    PushTarget::new(&github_config(), "github.com", Some(TEST_TOKEN.to_string()))
}

/// Options with both post-creation toggles set for `octocat`
pub fn options_with_toggles(assignee: bool, reviewer: bool) -> RunOptions {
    RunOptions {
        add_puller_as_assignee: assignee,
        add_puller_as_reviewer: reviewer,
        actor: Some("octocat".to_string()),
        ..RunOptions::default()
    }
}

/// Plan a run with the built-in template
pub fn make_plan(params: RunParameters, options: &RunOptions) -> RunPlan {
    let template = Template::parse(DEFAULT_TEMPLATE).unwrap();
    create_run_plan(params, options, &template, push_target())
}

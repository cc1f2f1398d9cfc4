//! CLI tests for paths that never reach git, tx or the network

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

const ISSUE_BODY: &str = "Please pull.\r\n\r\n| Parameter | Value |\r\n|---|---|\r\n\
| Project | retail-pos-web |\r\n| Resource | retail-reports |\r\n| Languages | fr,de |\r\n\
| Mode | reviewed |\r\n| Branch | release-1 |\r\n";

/// Binary with a clean environment, run from `dir`
fn tx_puller(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("tx-puller").unwrap();
    cmd.env_clear().env("NO_COLOR", "1").current_dir(dir);
    cmd
}

fn write_event(dir: &TempDir, title: &str, body: &str) -> std::path::PathBuf {
    let path = dir.path().join("event.json");
    let payload = serde_json::json!({
        "action": "opened",
        "issue": { "number": 7, "title": title, "body": body }
    });
    std::fs::write(&path, payload.to_string()).unwrap();
    path
}

#[test]
fn test_issue_without_prefix_is_ignored() {
    let dir = TempDir::new().unwrap();
    let event = write_event(&dir, "Button is misaligned", ISSUE_BODY);

    tx_puller(dir.path())
        .env("GITHUB_REPOSITORY", "acme/storefront")
        .args(["issue", "--event-path"])
        .arg(&event)
        .assert()
        .success()
        .stdout(predicate::str::contains("Ignoring issue with title"));
}

#[test]
fn test_issue_without_table_fails() {
    let dir = TempDir::new().unwrap();
    let event = write_event(&dir, "[TRANSLATIONS] retail-reports", "no table here");

    tx_puller(dir.path())
        .env("GITHUB_REPOSITORY", "acme/storefront")
        .env("GITHUB_EVENT_PATH", &event)
        .arg("issue")
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing field `Project` in issue body"));
}

#[test]
fn test_issue_dry_run_reports_plan() {
    let dir = TempDir::new().unwrap();
    let event = write_event(&dir, "[TRANSLATIONS] retail-reports", ISSUE_BODY);

    tx_puller(dir.path())
        .env("GITHUB_EVENT_PATH", &event)
        .env("GITHUB_REPOSITORY", "acme/storefront")
        .args(["issue", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("git checkout release-1"))
        .stdout(predicate::str::contains(
            "tx pull --mode reviewed -f -l fr,de -r retail-pos-web.retail-reports",
        ))
        .stdout(predicate::str::contains(
            "feature/translations/retail-pos-web.retail-reports → release-1",
        ))
        .stdout(predicate::str::contains("x-access-token:***@github.com/acme/storefront.git"));
}

#[test]
fn test_issue_without_event_path_fails() {
    let dir = TempDir::new().unwrap();

    tx_puller(dir.path())
        .env("GITHUB_REPOSITORY", "acme/storefront")
        .arg("issue")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "environment variable GITHUB_EVENT_PATH is not set",
        ));
}

#[test]
fn test_inputs_missing_project_fails() {
    let dir = TempDir::new().unwrap();

    tx_puller(dir.path())
        .env("INPUT_RESOURCE", "retail-reports")
        .env("INPUT_LANGUAGES", "fr")
        .env("INPUT_MODE", "reviewed")
        .env("INPUT_PROJECT", "")
        .arg("inputs")
        .assert()
        .failure()
        .stderr(predicate::str::contains("input required and not supplied: project"));
}

#[test]
fn test_inputs_unknown_mode_fails() {
    let dir = TempDir::new().unwrap();

    tx_puller(dir.path())
        .env("INPUT_PROJECT", "retail-pos-web")
        .env("INPUT_RESOURCE", "retail-reports")
        .env("INPUT_LANGUAGES", "fr")
        .env("INPUT_MODE", "machine")
        .arg("inputs")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown translation mode `machine`"));
}

#[test]
fn test_failure_emits_workflow_annotation() {
    let dir = TempDir::new().unwrap();

    tx_puller(dir.path())
        .env("GITHUB_ACTIONS", "true")
        .arg("inputs")
        .assert()
        .failure()
        .stdout(predicate::str::contains("::error::input required and not supplied: project"));
}

#[test]
fn test_inputs_flags_override_environment_in_dry_run() {
    let dir = TempDir::new().unwrap();

    tx_puller(dir.path())
        .env("GITHUB_REPOSITORY", "acme/storefront")
        .env("GITHUB_ACTOR", "octocat")
        .env("INPUT_PROJECT", "retail-pos-web")
        .env("INPUT_RESOURCE", "retail-reports")
        .env("INPUT_LANGUAGES", "fr")
        .env("INPUT_MODE", "reviewed")
        .env("INPUT_TXWORKDIR", "web")
        .args(["inputs", "--mode", "proofread", "--add-puller-as-reviewer", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(cd web) tx pull --mode reviewed2 -f -l fr"))
        .stdout(predicate::str::contains("→ master"))
        .stdout(predicate::str::contains("Would request review from octocat"))
        .stdout(predicate::str::contains("Would assign").not());
}

//! Mock review service for testing
//!
//! These are test utilities - not every test binary uses all of them.

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use tx_puller::error::{Error, Result};
use tx_puller::platform::ReviewService;
use tx_puller::types::{PlatformConfig, PullRequest};

/// Call record for `create_pr`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePrCall {
    pub head: String,
    pub base: String,
    pub title: String,
    pub body: String,
}

/// Call record for `add_assignees` and `request_reviewers`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsersCall {
    pub pr_number: u64,
    pub logins: Vec<String>,
}

/// Simple mock review service for testing
///
/// Features:
/// - Auto-incrementing PR numbers
/// - Call tracking for verification
/// - Error injection for failure path testing
pub struct MockReviewService {
    config: PlatformConfig,
    next_pr_number: AtomicU64,
    // Call tracking
    create_pr_calls: Mutex<Vec<CreatePrCall>>,
    assignee_calls: Mutex<Vec<UsersCall>>,
    reviewer_calls: Mutex<Vec<UsersCall>>,
    // Error injection
    error_on_create_pr: Mutex<Option<String>>,
    error_on_assignees: Mutex<Option<String>>,
    error_on_reviewers: Mutex<Option<String>>,
}

impl MockReviewService {
    /// Create a new mock with the given config
    pub fn with_config(config: PlatformConfig) -> Self {
        Self {
            config,
            next_pr_number: AtomicU64::new(1),
            create_pr_calls: Mutex::new(Vec::new()),
            assignee_calls: Mutex::new(Vec::new()),
            reviewer_calls: Mutex::new(Vec::new()),
            error_on_create_pr: Mutex::new(None),
            error_on_assignees: Mutex::new(None),
            error_on_reviewers: Mutex::new(None),
        }
    }

    // === Error injection methods ===

    /// Make `create_pr` return an error
    pub fn fail_create_pr(&self, msg: &str) {
        *self.error_on_create_pr.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `add_assignees` return an error
    pub fn fail_assignees(&self, msg: &str) {
        *self.error_on_assignees.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `request_reviewers` return an error
    pub fn fail_reviewers(&self, msg: &str) {
        *self.error_on_reviewers.lock().unwrap() = Some(msg.to_string());
    }

    // === Call verification methods ===

    /// Get all `create_pr` calls
    pub fn get_create_pr_calls(&self) -> Vec<CreatePrCall> {
        self.create_pr_calls.lock().unwrap().clone()
    }

    /// Get all `add_assignees` calls
    pub fn get_assignee_calls(&self) -> Vec<UsersCall> {
        self.assignee_calls.lock().unwrap().clone()
    }

    /// Get all `request_reviewers` calls
    pub fn get_reviewer_calls(&self) -> Vec<UsersCall> {
        self.reviewer_calls.lock().unwrap().clone()
    }

    /// Assert that `create_pr` was called with specific head and base
    pub fn assert_create_pr_called(&self, head: &str, base: &str) {
        let calls = self.get_create_pr_calls();
        assert!(
            calls.iter().any(|c| c.head == head && c.base == base),
            "Expected create_pr({head}, {base}) but got: {calls:?}"
        );
    }
}

#[async_trait]
impl ReviewService for MockReviewService {
    async fn create_pr(
        &self,
        head: &str,
        base: &str,
        title: &str,
        body: &str,
    ) -> Result<PullRequest> {
        self.create_pr_calls.lock().unwrap().push(CreatePrCall {
            head: head.to_string(),
            base: base.to_string(),
            title: title.to_string(),
            body: body.to_string(),
        });

        // Check for injected error
        if let Some(msg) = self.error_on_create_pr.lock().unwrap().as_ref() {
            return Err(Error::GitHubApi(msg.clone()));
        }

        let number = self.next_pr_number.fetch_add(1, Ordering::SeqCst);
        Ok(PullRequest {
            number,
            html_url: format!(
                "https://github.com/{}/{}/pull/{number}",
                self.config.owner, self.config.repo
            ),
            base_ref: base.to_string(),
            head_ref: head.to_string(),
            title: title.to_string(),
        })
    }

    async fn add_assignees(&self, pr_number: u64, assignees: &[String]) -> Result<()> {
        self.assignee_calls.lock().unwrap().push(UsersCall {
            pr_number,
            logins: assignees.to_vec(),
        });

        if let Some(msg) = self.error_on_assignees.lock().unwrap().as_ref() {
            return Err(Error::GitHubApi(msg.clone()));
        }
        Ok(())
    }

    async fn request_reviewers(&self, pr_number: u64, reviewers: &[String]) -> Result<()> {
        self.reviewer_calls.lock().unwrap().push(UsersCall {
            pr_number,
            logins: reviewers.to_vec(),
        });

        if let Some(msg) = self.error_on_reviewers.lock().unwrap().as_ref() {
            return Err(Error::GitHubApi(msg.clone()));
        }
        Ok(())
    }
}

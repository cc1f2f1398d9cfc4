//! GitHub review service implementation

use crate::error::{Error, Result};
use crate::platform::ReviewService;
use crate::types::{PlatformConfig, PullRequest};
use async_trait::async_trait;
use octocrab::Octocrab;

/// GitHub service using octocrab
pub struct GitHubService {
    client: Octocrab,
    config: PlatformConfig,
}

impl GitHubService {
    /// Create a new GitHub service
    ///
    /// `api_base` overrides the public API, e.g. for GitHub Enterprise.
    pub fn new(token: &str, config: PlatformConfig, api_base: Option<&str>) -> Result<Self> {
        let mut builder = Octocrab::builder().personal_token(token.to_string());

        if let Some(base_url) = api_base {
            builder = builder
                .base_uri(base_url)
                .map_err(|e| Error::GitHubApi(e.to_string()))?;
        }

        let client = builder.build().map_err(|e| Error::GitHubApi(e.to_string()))?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl ReviewService for GitHubService {
    async fn create_pr(
        &self,
        head: &str,
        base: &str,
        title: &str,
        body: &str,
    ) -> Result<PullRequest> {
        let pr = self
            .client
            .pulls(&self.config.owner, &self.config.repo)
            .create(title, head, base)
            .body(body)
            .send()
            .await?;

        Ok(PullRequest {
            number: pr.number,
            html_url: pr
                .html_url
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
            base_ref: pr.base.ref_field.clone(),
            head_ref: pr.head.ref_field.clone(),
            title: pr.title.as_deref().unwrap_or_default().to_string(),
        })
    }

    async fn add_assignees(&self, pr_number: u64, assignees: &[String]) -> Result<()> {
        let assignees: Vec<&str> = assignees.iter().map(String::as_str).collect();
        self.client
            .issues(&self.config.owner, &self.config.repo)
            .add_assignees(pr_number, &assignees)
            .await?;
        Ok(())
    }

    async fn request_reviewers(&self, pr_number: u64, reviewers: &[String]) -> Result<()> {
        self.client
            .pulls(&self.config.owner, &self.config.repo)
            .request_reviews(pr_number, reviewers.to_vec(), Vec::<String>::new())
            .await?;
        Ok(())
    }
}

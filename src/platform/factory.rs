//! Review service factory

use crate::auth::GitHubAuthConfig;
use crate::context::ActionContext;
use crate::error::Result;
use crate::platform::{api_base_url, GitHubService, ReviewService};

/// Create the review service for the repository in `context`
pub fn create_review_service(
    context: &ActionContext,
    auth: &GitHubAuthConfig,
) -> Result<Box<dyn ReviewService>> {
    let api_base = api_base_url(&context.repository, context.api_url.as_deref());
    Ok(Box::new(GitHubService::new(
        &auth.token,
        context.repository.clone(),
        api_base.as_deref(),
    )?))
}

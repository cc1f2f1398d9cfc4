//! Repository and host detection from runner-provided values

use crate::error::{Error, Result};
use crate::types::PlatformConfig;

const PUBLIC_API_URL: &str = "https://api.github.com";

/// Parse an `owner/repo` slug served from `server_url`
///
/// The host is recorded only when it is not github.com.
pub fn parse_repository(slug: &str, server_url: &str) -> Result<PlatformConfig> {
    let (owner, repo) = slug
        .trim()
        .trim_end_matches(".git")
        .split_once('/')
        .filter(|(owner, repo)| !owner.is_empty() && !repo.is_empty() && !repo.contains('/'))
        .ok_or_else(|| Error::InvalidRepository(slug.to_string()))?;

    let host = extract_hostname(server_url).filter(|h| h != "github.com");

    Ok(PlatformConfig {
        owner: owner.to_string(),
        repo: repo.to_string(),
        host,
    })
}

/// API base URL to hand to the client, `None` for the public API
///
/// Prefers the runner's `GITHUB_API_URL`; otherwise GitHub Enterprise hosts
/// serve the API under `/api/v3`.
pub fn api_base_url(config: &PlatformConfig, api_url: Option<&str>) -> Option<String> {
    match api_url.map(|u| u.trim_end_matches('/')) {
        Some(url) if url != PUBLIC_API_URL => Some(url.to_string()),
        Some(_) => None,
        None => config.host.as_ref().map(|h| format!("https://{h}/api/v3")),
    }
}

fn extract_hostname(url: &str) -> Option<String> {
    url::Url::parse(url).ok().and_then(|u| {
        u.host_str().map(|host| match u.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        })
    })
}

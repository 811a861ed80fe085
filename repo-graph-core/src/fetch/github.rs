//! GitHub REST API client

use super::{RepoMetadata, RepoSlug, RepositorySource};
use crate::config::GithubConfig;
use crate::error::{GraphError, GraphResult};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client, RequestBuilder, Response};
use std::time::Duration;
use tracing::debug;

const JSON_MEDIA_TYPE: &str = "application/vnd.github+json";
const RAW_MEDIA_TYPE: &str = "application/vnd.github.raw";

/// Client for the repository and README endpoints
pub struct GithubClient {
    client: Client,
    api_base: String,
    token: Option<String>,
}

impl GithubClient {
    /// Build a client; `token` is sent as `Authorization: token <pat>` when present
    pub fn new(config: &GithubConfig, token: Option<String>) -> GraphResult<Self> {
        let mut headers = HeaderMap::new();
        let user_agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|e| GraphError::config(format!("Invalid user agent: {}", e)))?;
        headers.insert(USER_AGENT, user_agent);

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()?;

        Ok(Self { client, api_base: config.api_base.trim_end_matches('/').to_string(), token })
    }

    fn repo_url(&self, slug: &RepoSlug) -> String {
        format!("{}/repos/{}/{}", self.api_base, slug.owner, slug.repo)
    }

    fn get(&self, url: &str, accept: &'static str) -> RequestBuilder {
        let request = self.client.get(url).header(ACCEPT, accept);
        match &self.token {
            Some(token) => request.header(AUTHORIZATION, format!("token {}", token)),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> GraphResult<Response> {
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GraphError::api(status.as_u16(), api_message(&body)));
        }

        Ok(response)
    }
}

#[async_trait]
impl RepositorySource for GithubClient {
    async fn metadata(&self, slug: &RepoSlug) -> GraphResult<RepoMetadata> {
        let url = self.repo_url(slug);
        debug!("GET {}", url);

        let response = self.send(self.get(&url, JSON_MEDIA_TYPE)).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn readme(&self, slug: &RepoSlug) -> GraphResult<String> {
        let url = format!("{}/readme", self.repo_url(slug));
        debug!("GET {}", url);

        let response = self.send(self.get(&url, RAW_MEDIA_TYPE)).await?;
        Ok(response.text().await?)
    }
}

/// Pull the `message` field out of a GitHub error body, falling back to the raw body
fn api_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_url_trims_trailing_slash() {
        let config = GithubConfig {
            api_base: "https://ghe.example.com/api/v3/".to_string(),
            ..GithubConfig::default()
        };
        let client = GithubClient::new(&config, None).unwrap();
        let slug: RepoSlug = "owner/repo".parse().unwrap();

        assert_eq!(client.repo_url(&slug), "https://ghe.example.com/api/v3/repos/owner/repo");
    }

    #[test]
    fn test_api_message() {
        assert_eq!(
            api_message(r#"{"message": "Not Found", "documentation_url": "https://docs.github.com"}"#),
            "Not Found"
        );
        assert_eq!(api_message("  Bad gateway \n"), "Bad gateway");
    }

    #[test]
    fn test_invalid_user_agent_rejected() {
        let config = GithubConfig { user_agent: "bad\nagent".to_string(), ..GithubConfig::default() };
        assert!(matches!(GithubClient::new(&config, None), Err(GraphError::Config { .. })));
    }
}

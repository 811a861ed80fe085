//! Canned repository source for tests

use super::{RepoLicense, RepoMetadata, RepoSlug, RepositorySource};
use crate::error::{GraphError, GraphResult};
use async_trait::async_trait;

/// Serves fixed metadata and README text, or a fixed API failure
pub struct StaticSource {
    metadata: RepoMetadata,
    readme: String,
    failure: Option<(u16, String)>,
}

impl StaticSource {
    pub fn new(metadata: RepoMetadata, readme: impl Into<String>) -> Self {
        Self { metadata, readme: readme.into(), failure: None }
    }

    /// Every call fails with the given API status
    pub fn failing(status: u16, message: impl Into<String>) -> Self {
        Self {
            metadata: Self::metadata("unreachable"),
            readme: String::new(),
            failure: Some((status, message.into())),
        }
    }

    /// Minimal MIT-licensed Python repository metadata
    pub fn metadata(name: &str) -> RepoMetadata {
        RepoMetadata {
            name: name.to_string(),
            full_name: Some(format!("owner/{}", name)),
            html_url: format!("https://github.com/owner/{}", name),
            description: Some(format!("{} description", name)),
            topics: vec!["energy".to_string(), "sdk".to_string()],
            license: Some(RepoLicense {
                key: Some("mit".to_string()),
                name: Some("MIT License".to_string()),
                spdx_id: Some("MIT".to_string()),
            }),
            language: Some("Python".to_string()),
        }
    }

    fn check(&self) -> GraphResult<()> {
        match &self.failure {
            Some((status, message)) => Err(GraphError::api(*status, message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl RepositorySource for StaticSource {
    async fn metadata(&self, _slug: &RepoSlug) -> GraphResult<RepoMetadata> {
        self.check()?;
        Ok(self.metadata.clone())
    }

    async fn readme(&self, _slug: &RepoSlug) -> GraphResult<String> {
        self.check()?;
        Ok(self.readme.clone())
    }
}

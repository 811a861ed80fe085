//! Repository metadata and README retrieval
//!
//! The hosting API is reached through the [`RepositorySource`] trait so the
//! extraction pipeline can run against GitHub or against canned data.

mod github;
#[cfg(test)]
pub(crate) mod mock;

pub use github::GithubClient;

use crate::error::{GraphError, GraphResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::info;

/// `owner/repo` pair identifying a repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSlug {
    pub owner: String,
    pub repo: String,
}

impl FromStr for RepoSlug {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (owner, repo) = s.trim().split_once('/').ok_or_else(|| GraphError::invalid_repo(s))?;
        let repo = repo.trim_end_matches('/').trim_end_matches(".git");

        if owner.is_empty() || repo.is_empty() || repo.contains('/') {
            return Err(GraphError::invalid_repo(s));
        }

        Ok(Self { owner: owner.to_string(), repo: repo.to_string() })
    }
}

impl fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Repository metadata as returned by the hosting API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoMetadata {
    pub name: String,
    #[serde(default)]
    pub full_name: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub license: Option<RepoLicense>,
    #[serde(default)]
    pub language: Option<String>,
}

/// License block of the repository metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoLicense {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub spdx_id: Option<String>,
}

/// Everything one extraction run needs from the hosting service
#[derive(Debug, Clone)]
pub struct RepositorySnapshot {
    pub metadata: RepoMetadata,
    pub readme: String,
}

/// A place repository metadata and README text can be read from
#[async_trait]
pub trait RepositorySource: Send + Sync {
    /// Fetch the repository metadata
    async fn metadata(&self, slug: &RepoSlug) -> GraphResult<RepoMetadata>;

    /// Fetch the raw README markdown
    async fn readme(&self, slug: &RepoSlug) -> GraphResult<String>;
}

/// Fetch metadata then README, one after the other
///
/// Either failure aborts the run; nothing partial is returned.
pub async fn fetch_snapshot(
    source: &dyn RepositorySource,
    slug: &RepoSlug,
) -> GraphResult<RepositorySnapshot> {
    info!("Fetching repository metadata for {}", slug);
    let metadata = source.metadata(slug).await?;

    info!("Fetching README for {}", slug);
    let readme = source.readme(slug).await?;

    Ok(RepositorySnapshot { metadata, readme })
}

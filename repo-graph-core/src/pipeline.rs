//! Fetch, extract and assemble in one call

use crate::error::GraphResult;
use crate::fetch::{RepoSlug, RepositorySource, fetch_snapshot};
use crate::graph::ProjectDocument;
use crate::parser::ReadmeExtractor;
use tracing::info;

/// Build the project document for one repository
pub async fn extract_project(
    source: &dyn RepositorySource,
    slug: &RepoSlug,
) -> GraphResult<ProjectDocument> {
    let snapshot = fetch_snapshot(source, slug).await?;
    let sections = ReadmeExtractor::new().extract(&snapshot.readme);

    info!(
        "Extracted {} install commands, {} examples from {}",
        sections.install_commands.len(),
        sections.examples.len(),
        slug
    );

    Ok(ProjectDocument::assemble(&snapshot.metadata, sections))
}

//! Fetch command - build and save a repository's knowledge graph

use crate::cli::app::FetchArgs;
use anyhow::{Context, Result};
use chrono::Utc;
use repo_graph_core::{Config, GithubClient, RepoSlug, extract_project};
use tracing::info;

/// Execute the fetch command
pub async fn execute(args: FetchArgs, config: &Config) -> Result<()> {
    let slug: RepoSlug = args.repo.parse()?;
    let token = args.token.or_else(|| config.github.token_from_env());
    if token.is_none() {
        info!("No GitHub token configured, using unauthenticated requests");
    }

    let client = GithubClient::new(&config.github, token).context("Failed to create GitHub client")?;
    let document = extract_project(&client, &slug)
        .await
        .with_context(|| format!("Failed to extract knowledge graph for {}", slug))?;

    let out = args.out.unwrap_or_else(|| config.output.path.clone());
    let modified = (config.output.stamp_modified && !args.no_timestamp).then(Utc::now);
    document
        .write_to(&out, modified)
        .with_context(|| format!("Failed to write {}", out.display()))?;

    println!("Knowledge graph for {} saved to {}", slug, out.display());
    println!("  Install commands: {}", document.install_commands.len());
    println!(
        "  Features: {}",
        document.features.as_ref().map_or("none".to_string(), |f| f.len().to_string())
    );
    if let Some(platforms) = &document.platforms {
        println!("  Python versions: {}", platforms.python_versions.join(", "));
    }
    println!("  Examples: {}", document.examples.len());

    Ok(())
}

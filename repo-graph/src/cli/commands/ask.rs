//! Ask command - answer a question from a saved knowledge graph

use crate::cli::app::AskArgs;
use anyhow::{Context, Result, bail};
use repo_graph_core::{Config, KnowledgeGraph, QueryEngine};

/// Execute the ask command
pub async fn execute(args: AskArgs, config: &Config) -> Result<()> {
    let path = args.file.unwrap_or_else(|| config.output.path.clone());
    if !path.exists() {
        bail!("Knowledge graph {} not found; run `repo-graph fetch <owner/repo>` first", path.display());
    }

    let graph = KnowledgeGraph::load(&path)
        .with_context(|| format!("Failed to load knowledge graph from {}", path.display()))?;
    let answer = QueryEngine::from_config(&config.query).answer(&graph, &args.question);

    println!("{}", answer.render());
    Ok(())
}

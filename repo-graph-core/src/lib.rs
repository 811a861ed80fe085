//! Core functionality for repo-graph
//!
//! This crate turns a hosted repository's metadata and README into a JSON-LD
//! knowledge graph, and answers keyword questions against that graph.

pub mod config;
pub mod error;
pub mod fetch;
pub mod graph;
pub mod parser;
pub mod pipeline;
pub mod query;

pub use config::Config;
pub use error::{GraphError, GraphResult};
pub use fetch::{GithubClient, RepoSlug, RepositorySource};
pub use graph::ProjectDocument;
pub use parser::ReadmeExtractor;
pub use pipeline::extract_project;
pub use query::{Answer, KnowledgeGraph, QueryEngine};

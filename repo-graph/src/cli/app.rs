use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "repo-graph",
    version,
    about = "Repo Graph - Turn a repository README into a queryable knowledge graph",
    long_about = "Repo Graph fetches repository metadata and README text from GitHub, extracts install steps, features, supported platforms and examples into a JSON-LD document, and answers keyword questions against it."
)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the knowledge graph for a repository
    #[command(about = "Fetch a GitHub repository and write its JSON-LD knowledge graph")]
    Fetch(FetchArgs),

    /// Ask a question
    #[command(about = "Answer a question from a saved knowledge graph")]
    Ask(AskArgs),

    /// Inspect a local README
    #[command(about = "Show what would be extracted from a local README file")]
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
pub struct FetchArgs {
    /// Repository as owner/name
    #[arg(help = "Repository to fetch, e.g. frequenz-floss/frequenz-sdk-python")]
    pub repo: String,

    /// Personal access token
    #[arg(long, help = "GitHub token (defaults to the configured environment variable)")]
    pub token: Option<String>,

    /// Output path
    #[arg(short, long, help = "Where to write the JSON-LD document")]
    pub out: Option<PathBuf>,

    /// Skip the modification stamp
    #[arg(long, help = "Do not stamp dcterms:modified, for reproducible output")]
    pub no_timestamp: bool,
}

#[derive(Parser, Debug)]
pub struct AskArgs {
    /// Free-text question
    #[arg(help = "Question to answer, e.g. \"How do I install the SDK?\"")]
    pub question: String,

    /// Knowledge graph to query
    #[arg(short, long, help = "JSON-LD document to read (defaults to the configured output path)")]
    pub file: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// Path to a README file
    #[arg(help = "Markdown file to extract sections from")]
    pub path: PathBuf,
}

use anyhow::Result;
use clap::Parser;
use repo_graph_core::Config;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Parse CLI arguments first to get verbosity level
    let cli = Cli::parse();

    // Initialize tracing with appropriate verbosity
    let filter = match cli.verbose {
        0 => "info",
        1 => "debug",
        2.. => "trace",
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    let config = Config::load(cli.config.as_deref())?;

    // Process commands
    match cli.command {
        Commands::Fetch(args) => {
            info!("Fetch command: {:?}", args.repo);
            // Create async runtime for the command
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(cli::commands::fetch::execute(args, &config))?;
        }
        Commands::Ask(args) => {
            info!("Ask command: {:?}", args);
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(cli::commands::ask::execute(args, &config))?;
        }
        Commands::Inspect(args) => {
            info!("Inspect command: {:?}", args);
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(cli::commands::inspect::execute(args))?;
        }
    }

    Ok(())
}

//! Inspect command - show what a local README yields without fetching anything

use crate::cli::app::InspectArgs;
use anyhow::{Context, Result};
use repo_graph_core::ReadmeExtractor;
use repo_graph_core::parser::ReadmeSections;
use tokio::fs;

/// Execute the inspect command
pub async fn execute(args: InspectArgs) -> Result<()> {
    let content = fs::read_to_string(&args.path)
        .await
        .with_context(|| format!("Failed to read {}", args.path.display()))?;
    let sections = ReadmeExtractor::new().extract(&content);

    println!("README: {}", args.path.display());
    print_sections(&sections);
    Ok(())
}

fn print_sections(sections: &ReadmeSections) {
    if let Some(title) = &sections.title_paragraph {
        println!("\n Summary: {}", title.chars().take(80).collect::<String>());
    }

    println!("\n Install commands: {}", sections.install_commands.len());
    for command in &sections.install_commands {
        println!("  - {}", command);
    }

    match &sections.features {
        Some(section) => {
            println!("\n Features ({}): {}", section.heading, section.items.len());
            for item in section.items.iter().take(10) {
                println!("  - {}", item);
            }
            if section.items.len() > 10 {
                println!("  ... and {} more", section.items.len() - 10);
            }
        }
        None => println!("\n Features: no section found"),
    }

    match &sections.platforms {
        Some(platforms) => {
            println!("\n Supported platforms:");
            println!("  Python: {}", platforms.python_versions.join(", "));
            println!("  OS: {}", platforms.operating_systems.join(", "));
            println!("  Architectures: {}", platforms.architectures.join(", "));
        }
        None => println!("\n Supported platforms: no section found"),
    }

    println!("\n Examples: {}", sections.examples.len());
    for example in &sections.examples {
        println!(
            "  - {} [{}] {} lines",
            example.heading,
            example.language.as_deref().unwrap_or("text"),
            example.code.lines().count()
        );
    }
}

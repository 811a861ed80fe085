//! README section extraction
//!
//! Parses README markdown into a block tree and pulls out install commands,
//! the features list, supported platforms, usage examples and the title
//! paragraph. Each section is looked up independently; one missing section
//! never blocks the others.

pub mod markdown;
pub mod model;
pub mod platforms;
pub mod sections;

pub use markdown::{Block, CodeBlock, MarkdownDocument};
pub use model::*;
pub use sections::{HEADING_RULES, HeadingRule};

use tracing::debug;

/// Orchestrates section extraction over a parsed README
#[derive(Debug)]
pub struct ReadmeExtractor {
    rules: &'static [HeadingRule],
}

impl ReadmeExtractor {
    /// Create an extractor using the built-in heading rules
    pub fn new() -> Self {
        Self { rules: HEADING_RULES }
    }

    /// Extract every known section from README markdown
    pub fn extract(&self, markdown: &str) -> ReadmeSections {
        let doc = MarkdownDocument::parse(markdown);
        debug!(
            "Parsed README: {} blocks, {} code blocks",
            doc.blocks().len(),
            doc.code_blocks().len()
        );

        let mut found = ReadmeSections {
            title_paragraph: doc.title_paragraph().map(str::to_string),
            install_commands: sections::find_install_commands(&doc),
            ..ReadmeSections::default()
        };

        for rule in self.rules {
            match rule.kind {
                SectionKind::Features => {
                    found.features = sections::find_list_section(&doc, rule);
                }
                SectionKind::Platforms => {
                    found.platforms = sections::find_list_section(&doc, rule)
                        .map(|section| platforms::partition(&section.items))
                        .filter(|platforms| !platforms.is_empty());
                }
                SectionKind::Examples => {
                    found.examples = sections::find_code_examples(&doc, rule);
                }
            }
        }

        if found.features.is_none() {
            debug!("No features section found");
        }
        if found.platforms.is_none() {
            debug!("No supported platforms section found");
        }
        debug!(
            "Extracted {} install commands, {} examples",
            found.install_commands.len(),
            found.examples.len()
        );

        found
    }
}

impl Default for ReadmeExtractor {
    fn default() -> Self {
        Self::new()
    }
}

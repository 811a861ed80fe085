//! Heading-keyword section detection
//!
//! Sections are found by walking an ordered rule list. Each rule names the
//! keywords a heading must contain (case-insensitive substring) and the section
//! kind it produces. Within a rule, the first qualifying heading that has
//! content below it wins.

use crate::parser::markdown::{Block, MarkdownDocument};
use crate::parser::model::{CodeExample, Section, SectionKind};

/// Marker a code line must contain to count as an install command
pub const INSTALL_MARKER: &str = "pip install";

/// A `(keywords, kind)` pair used to classify headings
#[derive(Debug, Clone, Copy)]
pub struct HeadingRule {
    pub kind: SectionKind,
    pub keywords: &'static [&'static str],
}

impl HeadingRule {
    /// Whether the heading text contains any of this rule's keywords
    pub fn matches(&self, heading: &str) -> bool {
        let lower = heading.to_lowercase();
        self.keywords.iter().any(|kw| lower.contains(kw))
    }
}

/// Section rules in evaluation order
pub const HEADING_RULES: &[HeadingRule] = &[
    HeadingRule { kind: SectionKind::Features, keywords: &["feature"] },
    HeadingRule { kind: SectionKind::Platforms, keywords: &["platform", "compatibility"] },
    HeadingRule { kind: SectionKind::Examples, keywords: &["example", "usage"] },
];

/// Look up the rule for a section kind
pub fn rule_for(kind: SectionKind) -> Option<&'static HeadingRule> {
    HEADING_RULES.iter().find(|rule| rule.kind == kind)
}

/// Items of the first non-empty bullet list under the first qualifying heading
///
/// A qualifying heading without a bullet list before the next heading of equal
/// or higher level is skipped in favor of the next qualifying heading.
pub fn find_list_section(doc: &MarkdownDocument, rule: &HeadingRule) -> Option<Section> {
    doc.headings().filter(|(_, _, text)| rule.matches(text)).find_map(|(idx, level, text)| {
        let items = doc.section_body(idx).iter().find_map(|block| match block {
            Block::List { ordered: false, items } if !items.is_empty() => Some(items.clone()),
            _ => None,
        })?;

        Some(Section { kind: rule.kind, heading: text.to_string(), level, items })
    })
}

/// Fenced code blocks under every qualifying heading, in document order
pub fn find_code_examples(doc: &MarkdownDocument, rule: &HeadingRule) -> Vec<CodeExample> {
    let mut examples = Vec::new();

    for (idx, _, heading) in doc.headings().filter(|(_, _, text)| rule.matches(text)) {
        for block in doc.section_body(idx) {
            if let Block::Code(code) = block {
                if code.fenced && !code.content.trim().is_empty() {
                    let example = CodeExample {
                        heading: heading.to_string(),
                        language: code.language.clone(),
                        code: code.content.trim_end().to_string(),
                    };
                    // Nested headings can put the same block under two matches
                    if !examples.contains(&example) {
                        examples.push(example);
                    }
                }
            }
        }
    }

    examples
}

/// Every `pip install` line across all fenced code blocks, first occurrence kept
pub fn find_install_commands(doc: &MarkdownDocument) -> Vec<String> {
    let mut commands: Vec<String> = Vec::new();

    for block in doc.fenced_code_blocks().filter(|b| b.content.contains(INSTALL_MARKER)) {
        for line in block.content.lines().filter(|line| line.contains(INSTALL_MARKER)) {
            let command = line.trim().to_string();
            if !commands.contains(&command) {
                commands.push(command);
            }
        }
    }

    commands
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features_rule() -> &'static HeadingRule {
        rule_for(SectionKind::Features).unwrap()
    }

    #[test]
    fn test_rule_matching() {
        let features = features_rule();
        assert!(features.matches("Features"));
        assert!(features.matches("KEY FEATURES"));
        assert!(!features.matches("Installation"));

        let platforms = rule_for(SectionKind::Platforms).unwrap();
        assert!(platforms.matches("Supported Platforms"));
        assert!(platforms.matches("Compatibility"));
        assert!(!platforms.matches("Features"));
    }

    #[test]
    fn test_features_in_order() {
        let doc = MarkdownDocument::parse("# X\n\n## Key Features\n\n- one\n- two\n- three\n");
        let section = find_list_section(&doc, features_rule()).unwrap();

        assert_eq!(section.heading, "Key Features");
        assert_eq!(section.level, 2);
        assert_eq!(section.items, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_no_features_heading_is_absent() {
        let doc = MarkdownDocument::parse("# X\n\n## Overview\n\n- one\n");
        assert!(find_list_section(&doc, features_rule()).is_none());
    }

    #[test]
    fn test_list_must_be_within_section() {
        let doc = MarkdownDocument::parse("## Features\n\nComing soon.\n\n## Other\n\n- not a feature\n");
        assert!(find_list_section(&doc, features_rule()).is_none());
    }

    #[test]
    fn test_list_under_subheading_counts() {
        let doc = MarkdownDocument::parse("## Features\n\n### Core\n\n- fast\n\n## Other\n");
        let section = find_list_section(&doc, features_rule()).unwrap();
        assert_eq!(section.items, vec!["fast"]);
    }

    #[test]
    fn test_falls_through_to_next_qualifying_heading() {
        let doc = MarkdownDocument::parse(
            "## Features\n\nTBD\n\n## Planned features\n\n- streaming\n",
        );
        let section = find_list_section(&doc, features_rule()).unwrap();
        assert_eq!(section.heading, "Planned features");
        assert_eq!(section.items, vec!["streaming"]);
    }

    #[test]
    fn test_ordered_list_is_not_a_bullet_list() {
        let doc = MarkdownDocument::parse("## Features\n\n1. one\n2. two\n");
        assert!(find_list_section(&doc, features_rule()).is_none());
    }

    #[test]
    fn test_install_commands() {
        let doc = MarkdownDocument::parse(
            "```bash\npython -m venv .venv\npip install frequenz-sdk\n```\n\n\
             ```\n  pip install frequenz-sdk\npip install 'frequenz-sdk[dev]'\n```\n\n\
             ```\nPIP INSTALL shouting\n```\n",
        );

        assert_eq!(
            find_install_commands(&doc),
            vec!["pip install frequenz-sdk", "pip install 'frequenz-sdk[dev]'"]
        );
    }

    #[test]
    fn test_install_ignores_indented_code_and_prose() {
        let doc = MarkdownDocument::parse("Run pip install demo.\n\n    pip install demo\n");
        assert!(find_install_commands(&doc).is_empty());
    }

    #[test]
    fn test_code_examples() {
        let doc = MarkdownDocument::parse(
            "## Usage\n\n```python\nimport demo\ndemo.run()\n```\n\n## License\n\n```\nMIT\n```\n",
        );
        let examples = find_code_examples(&doc, rule_for(SectionKind::Examples).unwrap());

        assert_eq!(examples.len(), 1);
        assert_eq!(examples[0].heading, "Usage");
        assert_eq!(examples[0].language.as_deref(), Some("python"));
        assert_eq!(examples[0].code, "import demo\ndemo.run()");
    }
}

//! Answerable document fields
//!
//! Registration order matters: it breaks scoring ties, so within an intent the
//! field listed first is the default answer.

use super::graph::{KnowledgeGraph, license_text, list_item_names, string_list};
use super::intent::Intent;
use crate::graph::jsonld::{CREATIVE_WORK_TYPE, HOWTO_TYPE};
use serde_json::Value;

/// How a list-valued field is rendered as text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Join {
    /// Single value, returned as is
    Text,
    /// `a, b, c`
    Comma,
    /// One entry per line
    Lines,
    /// Entries separated by a blank line
    Blocks,
}

impl Join {
    fn render(self, values: Vec<String>) -> String {
        match self {
            Join::Text | Join::Lines => values.join("\n"),
            Join::Comma => values.join(", "),
            Join::Blocks => values.join("\n\n"),
        }
    }
}

/// A document field the query engine can answer with
pub struct FieldSpec {
    /// `section:field` label, also matched against question tokens
    pub label: &'static str,
    pub intent: Intent,
    /// Extra words the field answers to besides its label
    pub terms: &'static [&'static str],
    pub join: Join,
    extract: fn(&KnowledgeGraph) -> Vec<String>,
}

impl FieldSpec {
    /// Raw values of this field in the graph
    pub fn values(&self, graph: &KnowledgeGraph) -> Vec<String> {
        (self.extract)(graph).into_iter().filter(|v| !v.trim().is_empty()).collect()
    }

    /// Field content joined for display; `None` when the field is empty
    pub fn content(&self, graph: &KnowledgeGraph) -> Option<String> {
        let values = self.values(graph);
        (!values.is_empty()).then(|| self.join.render(values))
    }
}

impl std::fmt::Debug for FieldSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldSpec")
            .field("label", &self.label)
            .field("intent", &self.intent)
            .field("join", &self.join)
            .finish()
    }
}

fn project_description(g: &KnowledgeGraph) -> Vec<String> {
    g.project_text("description").into_iter().collect()
}

fn project_name(g: &KnowledgeGraph) -> Vec<String> {
    g.project_text("name").into_iter().collect()
}

fn install_commands(g: &KnowledgeGraph) -> Vec<String> {
    g.parts_of_type(HOWTO_TYPE).first().map(|node| string_list(node.get("tool"))).unwrap_or_default()
}

fn example_code(g: &KnowledgeGraph) -> Vec<String> {
    g.parts_of_type(CREATIVE_WORK_TYPE)
        .iter()
        .filter_map(|node| node.get("text").and_then(Value::as_str))
        .map(str::to_string)
        .collect()
}

fn feature_items(g: &KnowledgeGraph) -> Vec<String> {
    list_item_names(g.item_list("feature"))
}

fn platform_property(g: &KnowledgeGraph, key: &str) -> Vec<String> {
    string_list(g.item_list("platform").and_then(|node| node.get(key)))
}

fn python_versions(g: &KnowledgeGraph) -> Vec<String> {
    platform_property(g, "pythonVersions")
}

fn operating_systems(g: &KnowledgeGraph) -> Vec<String> {
    platform_property(g, "operatingSystem")
}

fn architectures(g: &KnowledgeGraph) -> Vec<String> {
    platform_property(g, "processorRequirements")
}

fn platform_items(g: &KnowledgeGraph) -> Vec<String> {
    list_item_names(g.item_list("platform"))
}

fn project_license(g: &KnowledgeGraph) -> Vec<String> {
    license_text(g.project().and_then(|p| p.get("license"))).into_iter().collect()
}

fn project_topics(g: &KnowledgeGraph) -> Vec<String> {
    string_list(g.project().and_then(|p| p.get("applicationCategory")))
}

/// All answerable fields in registration order
pub static FIELDS: &[FieldSpec] = &[
    FieldSpec {
        label: "project:description",
        intent: Intent::About,
        terms: &["purpose", "overview", "summary"],
        join: Join::Text,
        extract: project_description,
    },
    FieldSpec {
        label: "project:name",
        intent: Intent::About,
        terms: &["called"],
        join: Join::Text,
        extract: project_name,
    },
    FieldSpec {
        label: "install:commands",
        intent: Intent::Install,
        terms: &["pip", "setup"],
        join: Join::Lines,
        extract: install_commands,
    },
    FieldSpec {
        label: "examples:code",
        intent: Intent::Example,
        terms: &["example", "usage", "snippet"],
        join: Join::Blocks,
        extract: example_code,
    },
    FieldSpec {
        label: "features:list",
        intent: Intent::Features,
        terms: &["feature", "capabilities"],
        join: Join::Comma,
        extract: feature_items,
    },
    FieldSpec {
        label: "platforms:python",
        intent: Intent::Platforms,
        terms: &["version", "versions", "interpreter"],
        join: Join::Comma,
        extract: python_versions,
    },
    FieldSpec {
        label: "platforms:os",
        intent: Intent::Platforms,
        terms: &["operating", "system", "systems"],
        join: Join::Comma,
        extract: operating_systems,
    },
    FieldSpec {
        label: "platforms:arch",
        intent: Intent::Platforms,
        terms: &["architecture", "architectures", "cpu", "processor"],
        join: Join::Comma,
        extract: architectures,
    },
    FieldSpec {
        label: "platforms:list",
        intent: Intent::Platforms,
        terms: &["platform", "compatibility"],
        join: Join::Comma,
        extract: platform_items,
    },
    FieldSpec {
        label: "project:license",
        intent: Intent::License,
        terms: &["licence", "spdx"],
        join: Join::Text,
        extract: project_license,
    },
    FieldSpec {
        label: "project:topics",
        intent: Intent::Topics,
        terms: &["topic", "tags", "category", "categories"],
        join: Join::Comma,
        extract: project_topics,
    },
];

/// Fields owned by an intent, in registration order
pub fn fields_for(intent: Intent) -> impl Iterator<Item = &'static FieldSpec> {
    FIELDS.iter().filter(move |field| field.intent == intent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn field(label: &str) -> &'static FieldSpec {
        FIELDS.iter().find(|f| f.label == label).unwrap()
    }

    #[test]
    fn test_every_intent_has_fields() {
        for intent in [
            Intent::Install,
            Intent::License,
            Intent::Features,
            Intent::Platforms,
            Intent::Example,
            Intent::Topics,
            Intent::About,
        ] {
            assert!(fields_for(intent).next().is_some(), "no fields for {}", intent);
        }
    }

    #[test]
    fn test_join_styles() {
        let graph = KnowledgeGraph::from_value(json!({
            "@graph": [
                {
                    "@id": "r",
                    "@type": ["SoftwareApplication"],
                    "applicationCategory": ["energy", "sdk", ""],
                    "hasPart": ["r#howto-install"]
                },
                {"@id": "r#howto-install", "@type": "HowTo", "tool": ["pip install a", "pip install b"]}
            ]
        }));

        assert_eq!(field("project:topics").content(&graph).as_deref(), Some("energy, sdk"));
        assert_eq!(
            field("install:commands").content(&graph).as_deref(),
            Some("pip install a\npip install b")
        );
        assert_eq!(field("project:license").content(&graph), None);
    }
}

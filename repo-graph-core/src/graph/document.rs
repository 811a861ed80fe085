//! Project document assembly

use super::jsonld::*;
use super::license::License;
use crate::error::GraphResult;
use crate::fetch::RepoMetadata;
use crate::parser::{CodeExample, ReadmeSections, SupportedPlatforms};
use chrono::{DateTime, SecondsFormat, Utc};
use std::path::Path;
use tracing::info;

/// Language assumed when the hosting API reports none
pub const DEFAULT_LANGUAGE: &str = "Python";

/// One software project, assembled from repository metadata and README sections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDocument {
    /// Repository URL, used as the root `@id`
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub topics: Vec<String>,
    pub license: Option<License>,
    pub language: String,
    pub install_commands: Vec<String>,
    /// `None` means the README has no features section, which differs from an empty one
    pub features: Option<Vec<String>>,
    pub platforms: Option<SupportedPlatforms>,
    pub examples: Vec<CodeExample>,
}

impl ProjectDocument {
    /// Combine metadata and extracted sections
    pub fn assemble(metadata: &RepoMetadata, sections: ReadmeSections) -> Self {
        let description = metadata
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string)
            .or(sections.title_paragraph);

        Self {
            id: metadata.html_url.clone(),
            name: metadata.name.clone(),
            description,
            topics: metadata.topics.clone(),
            license: metadata.license.as_ref().and_then(License::from_repo),
            language: metadata.language.clone().unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            install_commands: sections.install_commands,
            features: sections.features.map(|section| section.items),
            platforms: sections.platforms,
            examples: sections.examples,
        }
    }

    /// Build the JSON-LD structure, optionally stamped with a modification time
    pub fn to_jsonld(&self, modified: Option<DateTime<Utc>>) -> JsonLdDocument {
        let mut parts = Vec::new();
        let mut nodes = Vec::new();

        if !self.install_commands.is_empty() {
            let id = format!("{}#howto-install", self.id);
            parts.push(id.clone());
            nodes.push(Node::HowTo(HowToNode {
                id,
                kind: HOWTO_TYPE,
                name: format!("Install {}", self.name),
                tool: self.install_commands.clone(),
            }));
        }

        if let Some(features) = &self.features {
            let id = format!("{}#features", self.id);
            parts.push(id.clone());
            nodes.push(Node::ItemList(ItemListNode::new(id, FEATURES_LIST_NAME, features)));
        }

        if let Some(platforms) = &self.platforms {
            let id = format!("{}#supported-platforms", self.id);
            parts.push(id.clone());
            let mut node = ItemListNode::new(id, PLATFORMS_LIST_NAME, &platforms.items);
            node.python_versions = platforms.python_versions.clone();
            node.operating_system = platforms.operating_systems.clone();
            node.processor_requirements = platforms.architectures.clone();
            nodes.push(Node::ItemList(node));
        }

        for (idx, example) in self.examples.iter().enumerate() {
            let id = format!("{}#example-{}", self.id, idx + 1);
            parts.push(id.clone());
            nodes.push(Node::CreativeWork(CreativeWorkNode {
                id,
                kind: CREATIVE_WORK_TYPE,
                name: example.heading.clone(),
                programming_language: example.language.clone(),
                text: example.code.clone(),
            }));
        }

        let license = self.license.as_ref().map(|license| match license.url() {
            Some(url) => LicenseTerm::Reference { id: url },
            None => LicenseTerm::Raw(license.to_string()),
        });

        let root = ProjectNode {
            id: self.id.clone(),
            types: PROJECT_TYPES,
            name: self.name.clone(),
            description: self.description.clone(),
            code_repository: self.id.clone(),
            programming_language: self.language.clone(),
            application_category: self.topics.clone(),
            license,
            has_part: parts,
        };

        let mut graph = vec![Node::Project(root)];
        graph.extend(nodes);

        JsonLdDocument {
            context: Context::default(),
            graph,
            modified: modified.map(|ts| ts.to_rfc3339_opts(SecondsFormat::Secs, true)),
        }
    }

    /// Pretty-printed JSON-LD text
    pub fn to_json_string(&self, modified: Option<DateTime<Utc>>) -> GraphResult<String> {
        Ok(serde_json::to_string_pretty(&self.to_jsonld(modified))?)
    }

    /// Write the document to `path`
    pub fn write_to(&self, path: &Path, modified: Option<DateTime<Utc>>) -> GraphResult<()> {
        let json = self.to_json_string(modified)?;
        std::fs::write(path, json)?;
        info!("Knowledge graph saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::RepoLicense;
    use crate::parser::ReadmeExtractor;
    use chrono::TimeZone;
    use serde_json::{Value, json};

    fn metadata() -> RepoMetadata {
        RepoMetadata {
            name: "frequenz-sdk-python".to_string(),
            full_name: Some("frequenz-floss/frequenz-sdk-python".to_string()),
            html_url: "https://github.com/frequenz-floss/frequenz-sdk-python".to_string(),
            description: Some("Frequenz Python SDK".to_string()),
            topics: vec!["energy".to_string(), "microgrid".to_string()],
            license: Some(RepoLicense {
                key: Some("mit".to_string()),
                name: Some("MIT License".to_string()),
                spdx_id: Some("MIT".to_string()),
            }),
            language: Some("Python".to_string()),
        }
    }

    fn to_value(doc: &ProjectDocument) -> Value {
        serde_json::to_value(doc.to_jsonld(None)).unwrap()
    }

    const README: &str = "# SDK\n\nIntro text.\n\n## Features\n\n- Streaming\n- Actors\n\n\
                          ## Supported Platforms\n\n- Python 3.9\n- Python 3.10\n\n\
                          ## Install\n\n```\npip install frequenz-sdk\n```\n";

    #[test]
    fn test_full_graph() {
        let sections = ReadmeExtractor::new().extract(README);
        let value = to_value(&ProjectDocument::assemble(&metadata(), sections));
        let repo = "https://github.com/frequenz-floss/frequenz-sdk-python";

        let root = &value["@graph"][0];
        assert_eq!(root["@id"], repo);
        assert_eq!(root["@type"], json!(["SoftwareApplication", "doap:Project"]));
        assert_eq!(root["license"], json!({"@id": "https://spdx.org/licenses/MIT.html"}));
        assert_eq!(root["applicationCategory"], json!(["energy", "microgrid"]));
        assert_eq!(
            root["hasPart"],
            json!([
                format!("{}#howto-install", repo),
                format!("{}#features", repo),
                format!("{}#supported-platforms", repo),
            ])
        );

        let howto = &value["@graph"][1];
        assert_eq!(howto["@type"], "HowTo");
        assert_eq!(howto["name"], "Install frequenz-sdk-python");
        assert_eq!(howto["tool"], json!(["pip install frequenz-sdk"]));

        let features = &value["@graph"][2];
        assert_eq!(features["name"], FEATURES_LIST_NAME);
        assert_eq!(
            features["itemListElement"],
            json!([
                {"@type": "ListItem", "position": 1, "name": "Streaming"},
                {"@type": "ListItem", "position": 2, "name": "Actors"},
            ])
        );

        let platforms = &value["@graph"][3];
        assert_eq!(platforms["pythonVersions"], json!(["3.9", "3.10"]));
        assert!(platforms.get("operatingSystem").is_none());

        assert!(value.get("dcterms:modified").is_none());
    }

    #[test]
    fn test_no_features_heading_omits_node() {
        let sections = ReadmeExtractor::new().extract("# SDK\n\n## Overview\n\n- Streaming\n");
        let value = to_value(&ProjectDocument::assemble(&metadata(), sections));

        let graph = value["@graph"].as_array().unwrap();
        assert_eq!(graph.len(), 1);
        assert_eq!(graph[0]["hasPart"], json!([]));
    }

    #[test]
    fn test_description_falls_back_to_title_paragraph() {
        let mut meta = metadata();
        meta.description = Some("   ".to_string());
        meta.language = None;
        let doc = ProjectDocument::assemble(&meta, ReadmeExtractor::new().extract(README));

        assert_eq!(doc.description.as_deref(), Some("Intro text."));
        assert_eq!(doc.language, DEFAULT_LANGUAGE);
    }

    #[test]
    fn test_raw_license_is_plain_string() {
        let mut meta = metadata();
        meta.license = Some(RepoLicense {
            key: Some("other".to_string()),
            name: Some("Other".to_string()),
            spdx_id: Some("NOASSERTION".to_string()),
        });
        let value = to_value(&ProjectDocument::assemble(&meta, ReadmeSections::default()));

        assert_eq!(value["@graph"][0]["license"], "Other");
    }

    #[test]
    fn test_serialization_is_byte_identical() {
        let first = ProjectDocument::assemble(&metadata(), ReadmeExtractor::new().extract(README));
        let second = ProjectDocument::assemble(&metadata(), ReadmeExtractor::new().extract(README));

        assert_eq!(first.to_json_string(None).unwrap(), second.to_json_string(None).unwrap());
    }

    #[test]
    fn test_key_order_is_stable() {
        let doc = ProjectDocument::assemble(&metadata(), ReadmeSections::default());
        let json = doc.to_json_string(None).unwrap();

        let context = json.find("\"@context\"").unwrap();
        let graph = json.find("\"@graph\"").unwrap();
        let name = json.find("\"name\"").unwrap();
        let has_part = json.find("\"hasPart\"").unwrap();
        assert!(context < graph && graph < name && name < has_part);
    }

    #[test]
    fn test_modified_stamp() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let doc = ProjectDocument::assemble(&metadata(), ReadmeSections::default());
        let value = serde_json::to_value(doc.to_jsonld(Some(ts))).unwrap();

        assert_eq!(value["dcterms:modified"], "2024-05-01T12:00:00Z");
    }
}

//! JSON-LD schema for the persisted knowledge graph
//!
//! Field order in the output follows struct declaration order, so the same
//! document always serializes to the same bytes.

use serde::Serialize;

pub const PROJECT_TYPES: [&str; 2] = ["SoftwareApplication", "doap:Project"];
pub const HOWTO_TYPE: &str = "HowTo";
pub const ITEM_LIST_TYPE: &str = "ItemList";
pub const LIST_ITEM_TYPE: &str = "ListItem";
pub const CREATIVE_WORK_TYPE: &str = "CreativeWork";

pub const FEATURES_LIST_NAME: &str = "Key Features";
pub const PLATFORMS_LIST_NAME: &str = "Supported Platforms";

/// The `@context` block
#[derive(Debug, Clone, Serialize)]
pub struct Context {
    #[serde(rename = "@vocab")]
    pub vocab: &'static str,
    pub schema: &'static str,
    pub doap: &'static str,
    pub dcterms: &'static str,
    pub spdx: &'static str,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            vocab: "http://schema.org/",
            schema: "http://schema.org/",
            doap: "http://usefulinc.com/ns/doap#",
            dcterms: "http://purl.org/dc/terms/",
            spdx: "https://spdx.org/licenses/",
        }
    }
}

/// Root of the serialized document
#[derive(Debug, Clone, Serialize)]
pub struct JsonLdDocument {
    #[serde(rename = "@context")]
    pub context: Context,
    #[serde(rename = "@graph")]
    pub graph: Vec<Node>,
    #[serde(rename = "dcterms:modified", skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Node {
    Project(ProjectNode),
    HowTo(HowToNode),
    ItemList(ItemListNode),
    CreativeWork(CreativeWorkNode),
}

/// License as a linked reference or a plain string
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum LicenseTerm {
    Reference {
        #[serde(rename = "@id")]
        id: String,
    },
    Raw(String),
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectNode {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@type")]
    pub types: [&'static str; 2],
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub code_repository: String,
    pub programming_language: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub application_category: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<LicenseTerm>,
    pub has_part: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HowToNode {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub tool: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemListNode {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: &'static str,
    pub item_list_element: Vec<ListItem>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub python_versions: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub operating_system: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub processor_requirements: Vec<String>,
}

impl ItemListNode {
    /// Plain item list with 1-based positions
    pub fn new(id: String, name: &'static str, items: &[String]) -> Self {
        Self {
            id,
            kind: ITEM_LIST_TYPE,
            name,
            item_list_element: items
                .iter()
                .enumerate()
                .map(|(idx, item)| ListItem {
                    kind: LIST_ITEM_TYPE,
                    position: idx + 1,
                    name: item.clone(),
                })
                .collect(),
            python_versions: Vec::new(),
            operating_system: Vec::new(),
            processor_requirements: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ListItem {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub position: usize,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreativeWorkNode {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub programming_language: Option<String>,
    pub text: String,
}

//! Read-only navigation over a persisted JSON-LD knowledge graph

use crate::error::GraphResult;
use crate::graph::jsonld::ITEM_LIST_TYPE;
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// A loaded knowledge graph document
#[derive(Debug, Clone)]
pub struct KnowledgeGraph {
    doc: Value,
}

impl KnowledgeGraph {
    pub fn from_value(doc: Value) -> Self {
        Self { doc }
    }

    /// Parse JSON-LD text
    pub fn from_json(text: &str) -> GraphResult<Self> {
        Ok(Self::from_value(serde_json::from_str(text)?))
    }

    /// Read and parse a JSON-LD file
    pub fn load(path: &Path) -> GraphResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let graph = Self::from_json(&text)?;
        debug!("Loaded {} graph nodes from {}", graph.nodes().len(), path.display());
        Ok(graph)
    }

    /// Every node of `@graph`
    pub fn nodes(&self) -> &[Value] {
        self.doc.get("@graph").and_then(Value::as_array).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The root `SoftwareApplication` node
    pub fn project(&self) -> Option<&Value> {
        self.nodes().iter().find(|node| has_type(node, "SoftwareApplication"))
    }

    /// Node with the given `@id`
    pub fn node(&self, id: &str) -> Option<&Value> {
        self.nodes().iter().find(|node| node.get("@id").and_then(Value::as_str) == Some(id))
    }

    /// Parts of the project of the given `@type`, in `hasPart` order
    pub fn parts_of_type(&self, kind: &str) -> Vec<&Value> {
        let Some(parts) = self.project().and_then(|p| p.get("hasPart")).and_then(Value::as_array) else {
            return Vec::new();
        };

        parts
            .iter()
            .filter_map(Value::as_str)
            .filter_map(|id| self.node(id))
            .filter(|node| has_type(node, kind))
            .collect()
    }

    /// First item list whose name contains `keyword` (case-insensitive)
    pub fn item_list(&self, keyword: &str) -> Option<&Value> {
        let keyword = keyword.to_lowercase();
        self.nodes().iter().find(|node| {
            has_type(node, ITEM_LIST_TYPE)
                && node
                    .get("name")
                    .and_then(Value::as_str)
                    .is_some_and(|name| name.to_lowercase().contains(&keyword))
        })
    }

    /// String property of the project node
    pub fn project_text(&self, key: &str) -> Option<String> {
        self.project().and_then(|p| p.get(key)).and_then(Value::as_str).map(str::to_string)
    }
}

/// Whether `@type` is, or contains, `kind`
pub fn has_type(node: &Value, kind: &str) -> bool {
    match node.get("@type") {
        Some(Value::String(t)) => t == kind,
        Some(Value::Array(types)) => types.iter().any(|t| t.as_str() == Some(kind)),
        _ => false,
    }
}

/// Strings of a JSON array, skipping non-strings
pub fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_str).map(str::to_string).collect())
        .unwrap_or_default()
}

/// `name` of every entry of an `itemListElement`
pub fn list_item_names(list: Option<&Value>) -> Vec<String> {
    list.and_then(|l| l.get("itemListElement"))
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.get("name").and_then(Value::as_str))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// License as text: the `@id` of a reference, or the raw string
pub fn license_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(text) => Some(text.clone()),
        Value::Object(obj) => obj.get("@id").and_then(Value::as_str).map(str::to_string),
        _ => None,
    }
}

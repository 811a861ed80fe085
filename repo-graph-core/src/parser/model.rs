//! Extraction-time model of README sections

use serde::{Deserialize, Serialize};
use std::fmt;

/// What a heading-anchored section holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionKind {
    Features,
    Platforms,
    Examples,
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Features => write!(f, "Features"),
            Self::Platforms => write!(f, "Platforms"),
            Self::Examples => write!(f, "Examples"),
        }
    }
}

/// A heading plus the items of the first bullet list below it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub kind: SectionKind,
    pub heading: String,
    pub level: u8,
    pub items: Vec<String>,
}

/// Supported platforms partitioned by what each item names
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportedPlatforms {
    /// List items that matched at least one pattern, in document order
    pub items: Vec<String>,
    pub python_versions: Vec<String>,
    pub operating_systems: Vec<String>,
    pub architectures: Vec<String>,
}

impl SupportedPlatforms {
    pub fn is_empty(&self) -> bool {
        self.python_versions.is_empty()
            && self.operating_systems.is_empty()
            && self.architectures.is_empty()
    }
}

/// A usage example taken from a fenced code block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeExample {
    pub heading: String,
    pub language: Option<String>,
    pub code: String,
}

/// Everything the extractor found in one README
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadmeSections {
    /// First paragraph after the H1 title
    pub title_paragraph: Option<String>,
    pub install_commands: Vec<String>,
    /// `None` when no features heading with a bullet list exists
    pub features: Option<Section>,
    pub platforms: Option<SupportedPlatforms>,
    pub examples: Vec<CodeExample>,
}

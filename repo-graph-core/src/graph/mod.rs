//! Linked-data assembly of project knowledge
//!
//! Maps repository metadata and README sections onto a fixed JSON-LD schema:
//! a `SoftwareApplication`/`doap:Project` root, a `HowTo` for installation,
//! `ItemList`s for features and supported platforms, and `CreativeWork`
//! usage examples.

pub mod document;
pub mod jsonld;
pub mod license;

pub use document::{DEFAULT_LANGUAGE, ProjectDocument};
pub use jsonld::JsonLdDocument;
pub use license::License;

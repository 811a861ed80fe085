//! Partition supported-platform list items into Python versions, OS and architecture
//!
//! Items that match none of the patterns are dropped. An item may land in
//! several sub-lists ("Linux (x86_64)" is both an OS and an architecture).

use crate::parser::model::SupportedPlatforms;
use regex_utils::{arch, os, python};

/// Classify bullet items from a platforms/compatibility section
pub fn partition(items: &[String]) -> SupportedPlatforms {
    let mut platforms = SupportedPlatforms::default();

    for item in items {
        let versions = python::versions(item);
        let systems = os::detect_all(item);
        let archs = arch::detect_all(item);

        if versions.is_empty() && systems.is_empty() && archs.is_empty() {
            continue;
        }

        platforms.items.push(item.clone());
        push_unique(&mut platforms.python_versions, versions);
        push_unique(&mut platforms.operating_systems, systems.into_iter().map(str::to_string));
        push_unique(&mut platforms.architectures, archs.into_iter().map(str::to_string));
    }

    platforms
}

fn push_unique(target: &mut Vec<String>, values: impl IntoIterator<Item = String>) {
    for value in values {
        if !target.contains(&value) {
            target.push(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_partition() {
        let platforms = partition(&items(&[
            "Python 3.9",
            "Python 3.10",
            "Linux (x86_64, arm64)",
            "macOS",
        ]));

        assert_eq!(platforms.python_versions, vec!["3.9", "3.10"]);
        assert_eq!(platforms.operating_systems, vec!["Linux", "macOS"]);
        assert_eq!(platforms.architectures, vec!["x86_64", "aarch64"]);
        assert_eq!(platforms.items.len(), 4);
    }

    #[test]
    fn test_unmatched_items_dropped() {
        let platforms = partition(&items(&["Any modern browser", "Python 3.11", "Raspberry Pi"]));

        assert_eq!(platforms.items, vec!["Python 3.11"]);
        assert_eq!(platforms.python_versions, vec!["3.11"]);
        assert!(platforms.operating_systems.is_empty());
    }

    #[test]
    fn test_os_version_is_not_a_python_version() {
        let platforms = partition(&items(&["Ubuntu 22.04"]));

        assert!(platforms.python_versions.is_empty());
        assert_eq!(platforms.operating_systems, vec!["Ubuntu"]);
    }

    #[test]
    fn test_duplicates_collapse() {
        let platforms = partition(&items(&["Python 3.9+", "CPython 3.9 on Linux", "Linux"]));

        assert_eq!(platforms.python_versions, vec!["3.9"]);
        assert_eq!(platforms.operating_systems, vec!["Linux"]);
    }

    #[test]
    fn test_nothing_recognized_is_empty() {
        assert!(partition(&items(&["Anything goes"])).is_empty());
    }
}

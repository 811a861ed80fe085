//! Regex utilities for repo-graph
//! Extracted to a separate crate for compilation optimization

use once_cell::sync::Lazy;
use regex::Regex;

/// Python interpreter mentions and version numbers
pub mod python {
    use super::*;

    pub static MENTION_PATTERN: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(?i)\b(?:c?python|pypy)").expect("Invalid regex pattern")
    });

    pub static LEADING_VERSION_PATTERN: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^\s*[vV]?\d+\.\d+").expect("Invalid regex pattern")
    });

    // The leading group stands in for a lookbehind so "v3.9" and "3.9,3.10" both split cleanly.
    pub static VERSION_PATTERN: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(?:^|[^0-9.])(\d+\.\d+(?:\.\d+)?)").expect("Invalid regex pattern")
    });

    /// Whether the text talks about a Python version at all
    pub fn is_version_item(text: &str) -> bool {
        MENTION_PATTERN.is_match(text) || LEADING_VERSION_PATTERN.is_match(text)
    }

    /// Extract every `N.N[.N]` version from text that is about Python
    pub fn versions(text: &str) -> Vec<String> {
        if !is_version_item(text) {
            return Vec::new();
        }

        VERSION_PATTERN
            .captures_iter(text)
            .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }
}

/// Operating system detection patterns
pub mod os {
    use super::*;

    static PATTERNS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
        [
            (r"\blinux\b", "Linux"),
            (r"\bubuntu\b", "Ubuntu"),
            (r"\bdebian\b", "Debian"),
            (r"\bfedora\b", "Fedora"),
            (r"\b(?:macos|mac os|os x|osx|darwin)\b", "macOS"),
            (r"\bwindows\b", "Windows"),
            (r"\bfreebsd\b", "FreeBSD"),
        ]
        .into_iter()
        .map(|(pattern, name)| (Regex::new(pattern).expect("Invalid regex pattern"), name))
        .collect()
    });

    /// Canonical names of every operating system mentioned, in pattern order
    pub fn detect_all(text: &str) -> Vec<&'static str> {
        let text_lower = text.to_lowercase();
        PATTERNS
            .iter()
            .filter(|(re, _)| re.is_match(&text_lower))
            .map(|(_, name)| *name)
            .collect()
    }
}

/// CPU architecture detection patterns
pub mod arch {
    use super::*;

    static PATTERNS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
        [
            (r"\b(?:x86_64|x86-64|amd64|x64)\b", "x86_64"),
            (r"\b(?:aarch64|arm64)\b", "aarch64"),
            (r"\barmv7\w*\b", "armv7"),
            // "x86" followed by -64/_64 is the x86_64 alias above
            (r"\b(?:i686|i386)\b|\bx86(?:$|[^-_\w])", "x86"),
            (r"\bppc64le\b", "ppc64le"),
            (r"\bs390x\b", "s390x"),
        ]
        .into_iter()
        .map(|(pattern, name)| (Regex::new(pattern).expect("Invalid regex pattern"), name))
        .collect()
    });

    /// Canonical names of every architecture mentioned, in pattern order
    pub fn detect_all(text: &str) -> Vec<&'static str> {
        let text_lower = text.to_lowercase();
        PATTERNS
            .iter()
            .filter(|(re, _)| re.is_match(&text_lower))
            .map(|(_, name)| *name)
            .collect()
    }
}

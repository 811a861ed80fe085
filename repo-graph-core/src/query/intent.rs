//! Question intents and keyword-based intent detection

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse category of a question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    Install,
    License,
    Features,
    Platforms,
    Example,
    Topics,
    About,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Install => write!(f, "install"),
            Self::License => write!(f, "license"),
            Self::Features => write!(f, "features"),
            Self::Platforms => write!(f, "platforms"),
            Self::Example => write!(f, "example"),
            Self::Topics => write!(f, "topics"),
            Self::About => write!(f, "about"),
        }
    }
}

/// An intent and the phrases that trigger it
#[derive(Debug, Clone, Copy)]
pub struct IntentRule {
    pub intent: Intent,
    pub keywords: &'static [&'static str],
}

/// Intent rules in priority order; the first rule with a matching keyword wins
pub const INTENT_RULES: &[IntentRule] = &[
    IntentRule {
        intent: Intent::Install,
        keywords: &[
            "install", "installation", "installing", "installed", "setup", "set up", "set it up",
            "setting up", "pip",
            "get started", "getting started",
        ],
    },
    IntentRule {
        intent: Intent::License,
        keywords: &["license", "licence", "licensed", "licensing", "spdx"],
    },
    IntentRule {
        intent: Intent::Features,
        keywords: &["feature", "features", "capability", "capabilities", "highlights"],
    },
    IntentRule {
        intent: Intent::Platforms,
        keywords: &[
            "platform", "platforms", "supported", "compatibility", "compatible", "python version",
            "python versions", "os", "operating system", "operating systems", "architecture",
            "architectures", "linux", "macos", "windows",
        ],
    },
    IntentRule {
        intent: Intent::Example,
        keywords: &["example", "examples", "usage", "code", "snippet", "use"],
    },
    IntentRule {
        intent: Intent::Topics,
        keywords: &["topic", "topics", "category", "categories", "tag", "tags", "keyword", "keywords"],
    },
    IntentRule {
        intent: Intent::About,
        keywords: &[
            "what is", "what does", "purpose", "about", "overview", "description", "describe",
            "summary", "name", "called",
        ],
    },
];

impl IntentRule {
    /// Whether any keyword appears as a contiguous run of question tokens
    pub fn matches(&self, tokens: &[String]) -> bool {
        self.keywords.iter().any(|keyword| contains_phrase(tokens, keyword))
    }
}

/// First intent in priority order triggered by the question tokens
pub fn detect(tokens: &[String]) -> Option<Intent> {
    INTENT_RULES.iter().find(|rule| rule.matches(tokens)).map(|rule| rule.intent)
}

/// Lowercase word tokens; keeps dots and dashes inside words so `3.10` and `frequenz-sdk` survive
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || matches!(c, '.' | '-' | '_' | '+')))
        .map(|token| token.trim_matches(|c: char| matches!(c, '.' | '-' | '+')))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

fn contains_phrase(tokens: &[String], phrase: &str) -> bool {
    let words: Vec<&str> = phrase.split_whitespace().collect();
    if words.is_empty() || words.len() > tokens.len() {
        return false;
    }

    tokens.windows(words.len()).any(|window| window.iter().zip(&words).all(|(t, w)| t == w))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intent_of(question: &str) -> Option<Intent> {
        detect(&tokenize(question))
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize("How do I install the SDK?"), vec!["how", "do", "i", "install", "the", "sdk"]);
        assert_eq!(tokenize("Python 3.10+, frequenz-sdk."), vec!["python", "3.10", "frequenz-sdk"]);
        assert_eq!(tokenize("platforms:python"), vec!["platforms", "python"]);
    }

    #[test]
    fn test_detect_intents() {
        assert_eq!(intent_of("How do I install the SDK"), Some(Intent::Install));
        assert_eq!(intent_of("What platforms are supported"), Some(Intent::Platforms));
        assert_eq!(intent_of("Which license does it use?"), Some(Intent::License));
        assert_eq!(intent_of("What are the key features?"), Some(Intent::Features));
        assert_eq!(intent_of("Show me an example"), Some(Intent::Example));
        assert_eq!(intent_of("What topics is it tagged with"), Some(Intent::Topics));
        assert_eq!(intent_of("What is this project?"), Some(Intent::About));
    }

    #[test]
    fn test_set_up_phrasings() {
        // Phrases match contiguous words only, so split forms are listed separately
        assert_eq!(intent_of("How do I set it up?"), Some(Intent::Install));
        assert_eq!(intent_of("Setting up the SDK"), Some(Intent::Install));
        assert_eq!(intent_of("How do I set up a dev environment"), Some(Intent::Install));
    }

    #[test]
    fn test_no_intent() {
        assert_eq!(intent_of("What color is the logo"), None);
        assert_eq!(intent_of(""), None);
    }

    #[test]
    fn test_keywords_match_whole_words() {
        // "os" must not fire inside "those" or "purpose"
        assert_eq!(intent_of("those colors"), None);
        assert_eq!(intent_of("Does it run on any OS?"), Some(Intent::Platforms));
    }

    #[test]
    fn test_priority_order() {
        // install outranks platforms and features
        assert_eq!(intent_of("How do I install the supported features"), Some(Intent::Install));
        assert_eq!(intent_of("Which features are supported"), Some(Intent::Features));
    }
}

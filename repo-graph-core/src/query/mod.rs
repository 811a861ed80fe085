//! Keyword question answering over a knowledge graph
//!
//! A question is first classified into an [`Intent`] by the ordered
//! [`INTENT_RULES`](intent::INTENT_RULES). The fields owned by that intent are
//! then scored by token overlap with the question and the best one answers.
//! Failing to answer is a normal outcome ([`Answer::NotFound`]), not an error.

pub mod fields;
pub mod graph;
pub mod intent;

pub use fields::{FIELDS, FieldSpec, Join};
pub use graph::KnowledgeGraph;
pub use intent::{INTENT_RULES, Intent, IntentRule, tokenize};

use crate::config::QueryConfig;
use std::fmt;
use tracing::debug;

/// Fixed response for questions the graph cannot answer
pub const NO_ANSWER: &str = "No relevant information found.";

/// Question words that carry no signal for field scoring
const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "can", "do", "does", "for", "how", "i", "in", "is", "it", "me",
    "of", "on", "the", "this", "to", "what", "which", "with",
];

/// Result of answering a question
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Found { intent: Intent, label: &'static str, content: String },
    NotFound,
}

impl Answer {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    /// The answer text alone
    pub fn text(&self) -> &str {
        match self {
            Self::Found { content, .. } => content,
            Self::NotFound => NO_ANSWER,
        }
    }

    /// Titled rendering: a header from the field label, an underline, then the content
    pub fn render(&self) -> String {
        match self {
            Self::Found { label, content, .. } => {
                let title = pretty_label(label);
                format!("{}\n{}\n{}", title, "-".repeat(title.chars().count()), content.trim())
            }
            Self::NotFound => NO_ANSWER.to_string(),
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}

/// A candidate field and its relevance score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredField {
    pub label: &'static str,
    pub score: usize,
    pub content: String,
}

/// Intent detection plus field scoring
#[derive(Debug, Clone, Default)]
pub struct QueryEngine {
    fallback: Option<Intent>,
}

impl QueryEngine {
    /// Engine without a fallback intent: unrecognized questions go unanswered
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &QueryConfig) -> Self {
        let engine = Self::new();
        if config.fallback_to_about { engine.with_fallback(Intent::About) } else { engine }
    }

    /// Use `intent` when no rule matches the question
    pub fn with_fallback(mut self, intent: Intent) -> Self {
        self.fallback = Some(intent);
        self
    }

    /// Intent for a question, falling back when configured
    pub fn detect_intent(&self, question: &str) -> Option<Intent> {
        intent::detect(&tokenize(question)).or(self.fallback)
    }

    /// Score every non-empty field of `intent`, in registration order
    pub fn rank(&self, graph: &KnowledgeGraph, intent: Intent, question: &str) -> Vec<ScoredField> {
        let query_tokens: Vec<String> = tokenize(question)
            .into_iter()
            .filter(|token| !STOP_WORDS.contains(&token.as_str()))
            .collect();

        fields::fields_for(intent)
            .filter_map(|field| {
                let content = field.content(graph)?;
                let score = score_field(&query_tokens, field, &content);
                Some(ScoredField { label: field.label, score, content })
            })
            .collect()
    }

    /// Best answer for the question
    pub fn answer(&self, graph: &KnowledgeGraph, question: &str) -> Answer {
        let Some(intent) = self.detect_intent(question) else {
            debug!("No intent matched question: {}", question);
            return Answer::NotFound;
        };
        debug!("Detected intent: {}", intent);

        let mut best: Option<ScoredField> = None;
        for candidate in self.rank(graph, intent, question) {
            debug!("Field {} scored {}", candidate.label, candidate.score);
            // Strictly greater keeps the first-registered field on ties
            if best.as_ref().is_none_or(|b| candidate.score > b.score) {
                best = Some(candidate);
            }
        }

        match best {
            Some(field) => Answer::Found { intent, label: field.label, content: field.content },
            None => {
                debug!("No {} field has content", intent);
                Answer::NotFound
            }
        }
    }
}

/// Occurrences of query tokens among the field's label/term tokens and its content tokens
fn score_field(query_tokens: &[String], field: &FieldSpec, content: &str) -> usize {
    let mut field_tokens = tokenize(field.label);
    field_tokens.extend(field.terms.iter().map(|term| term.to_string()));
    field_tokens.extend(tokenize(content));

    query_tokens.iter().map(|q| field_tokens.iter().filter(|t| *t == q).count()).sum()
}

fn pretty_label(label: &str) -> String {
    label
        .split([':', '_'])
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

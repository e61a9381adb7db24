//! Per-document lexical features.
//!
//! Where [`AggregateRecord`](crate::stats::AggregateRecord) keeps only counts,
//! [`DocumentFeatures`] keeps the actual tokens so a caller can see *which*
//! words were counted as nouns, adjectives and verbs.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::analysis::{analyze, AnalyzedText};
use crate::tagger::PosBucket;

/// Unique words and categorized token lists for one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentFeatures {
    /// The original text, echoed back.
    pub content: String,
    /// Distinct tokens (case-sensitive). Serialized in sorted order.
    pub unique_words: BTreeSet<String>,
    /// Noun-like tokens in order of occurrence, duplicates kept.
    pub nouns: Vec<String>,
    pub adjectives: Vec<String>,
    pub verbs: Vec<String>,
}

impl DocumentFeatures {
    /// Builds features from an analysis of `content`.
    pub fn from_analysis(content: &str, analyzed: &AnalyzedText<'_>) -> Self {
        let list = |bucket: PosBucket| -> Vec<String> {
            analyzed.tokens_in(bucket).map(str::to_string).collect()
        };

        Self {
            content: content.to_string(),
            unique_words: analyzed.tokens.iter().map(|t| t.text.to_string()).collect(),
            nouns: list(PosBucket::Noun),
            adjectives: list(PosBucket::Adjective),
            verbs: list(PosBucket::Verb),
        }
    }
}

/// Extracts [`DocumentFeatures`] from `text`.
pub fn extract_features(text: &str) -> DocumentFeatures {
    DocumentFeatures::from_analysis(text, &analyze(text))
}

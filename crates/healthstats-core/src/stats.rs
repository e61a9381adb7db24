//! Aggregate text statistics.
//!
//! An [`AggregateRecord`] is one fixed-shape row of counts and averages for a
//! body of text. The persisted baseline and every user submission are
//! summarized with the same record type so they can be compared row by row.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::analysis::{analyze, AnalyzedText};
use crate::tagger::PosBucket;

/// One row of statistics for a document or corpus.
///
/// Field order is also the column order of the persisted baseline file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateRecord {
    pub sentence_count: usize,
    pub word_count: usize,
    /// Mean token length; `0.0` when there are no tokens.
    pub average_word_length: f64,
    /// Distinct tokens, compared case-sensitively.
    pub unique_word_count: usize,
    /// Sum of token lengths. Whitespace is never a token.
    pub character_count: usize,
    pub noun_count: usize,
    pub adjective_count: usize,
    pub verb_count: usize,
}

impl AggregateRecord {
    /// Summarizes an already analyzed text.
    pub fn from_analysis(analyzed: &AnalyzedText<'_>) -> Self {
        let word_count = analyzed.tokens.len();
        let character_count: usize = analyzed.tokens.iter().map(|t| t.char_len()).sum();
        let unique: HashSet<&str> = analyzed.tokens.iter().map(|t| t.text).collect();

        let average_word_length = if word_count == 0 {
            0.0
        } else {
            character_count as f64 / word_count as f64
        };

        let count = |bucket: PosBucket| {
            analyzed
                .tokens
                .iter()
                .filter(|t| t.bucket() == Some(bucket))
                .count()
        };

        Self {
            sentence_count: analyzed.sentences.len(),
            word_count,
            average_word_length,
            unique_word_count: unique.len(),
            character_count,
            noun_count: count(PosBucket::Noun),
            adjective_count: count(PosBucket::Adjective),
            verb_count: count(PosBucket::Verb),
        }
    }

    /// Number of tokens that fell into one of the three counted buckets.
    pub fn tagged_word_count(&self) -> usize {
        self.noun_count + self.adjective_count + self.verb_count
    }
}

/// Computes the [`AggregateRecord`] of `text`.
///
/// Pure function of its input. Empty text produces an all-zero record.
pub fn compute_aggregate(text: &str) -> AggregateRecord {
    AggregateRecord::from_analysis(&analyze(text))
}

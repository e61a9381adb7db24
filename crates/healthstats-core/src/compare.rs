//! Comparison table and response payload.
//!
//! A comparison always has exactly two rows, baseline first and user input
//! second. The response flattens the user document's
//! [`DocumentFeatures`] next to the `statistics` table:
//!
//! ```json
//! {
//!   "content": "…",
//!   "unique_words": ["…"],
//!   "nouns": ["…"], "adjectives": ["…"], "verbs": ["…"],
//!   "statistics": [
//!     { "label": "Default Statistics", "sentence_count": 412, … },
//!     { "label": "User Input Statistics", "sentence_count": 2, … }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::analysis::analyze;
use crate::features::DocumentFeatures;
use crate::stats::AggregateRecord;

/// Label of the baseline row.
pub const DEFAULT_STATISTICS_LABEL: &str = "Default Statistics";
/// Label of the user-input row.
pub const USER_INPUT_STATISTICS_LABEL: &str = "User Input Statistics";

/// An [`AggregateRecord`] tagged with the name of its row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledRecord {
    pub label: String,
    #[serde(flatten)]
    pub record: AggregateRecord,
}

/// Two-row table: `[baseline, user input]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComparisonTable {
    rows: [LabeledRecord; 2],
}

impl ComparisonTable {
    pub fn new(baseline: AggregateRecord, user_input: AggregateRecord) -> Self {
        Self {
            rows: [
                LabeledRecord {
                    label: DEFAULT_STATISTICS_LABEL.to_string(),
                    record: baseline,
                },
                LabeledRecord {
                    label: USER_INPUT_STATISTICS_LABEL.to_string(),
                    record: user_input,
                },
            ],
        }
    }

    pub fn baseline(&self) -> &LabeledRecord {
        &self.rows[0]
    }

    pub fn user_input(&self) -> &LabeledRecord {
        &self.rows[1]
    }

    pub fn rows(&self) -> &[LabeledRecord] {
        &self.rows
    }
}

/// Full payload returned for one comparison request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResponse {
    #[serde(flatten)]
    pub features: DocumentFeatures,
    pub statistics: ComparisonTable,
}

impl ComparisonResponse {
    /// Analyzes `text` once and derives both the user-input row and the
    /// document features from that single pass.
    pub fn build(text: &str, baseline: AggregateRecord) -> Self {
        let analyzed = analyze(text);
        let user_input = AggregateRecord::from_analysis(&analyzed);
        Self {
            features: DocumentFeatures::from_analysis(text, &analyzed),
            statistics: ComparisonTable::new(baseline, user_input),
        }
    }
}

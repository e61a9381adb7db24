//! Sentence splitting, word tokenization and tagging in a single pass.
//!
//! Every statistic in this crate is derived from one [`AnalyzedText`], so
//! aggregate counts and per-document token lists can never disagree.
//!
//! # Segmentation rules
//!
//! - Sentences follow Unicode UAX #29 sentence boundaries. A segment counts
//!   as a sentence only if it contains at least one alphanumeric character.
//! - Tokens follow UAX #29 word boundaries within each sentence segment;
//!   every segment that is not pure whitespace is a token. Punctuation is
//!   therefore tokenized separately (`common.` → `common`, `.`), hyphens
//!   split words, apostrophes inside words and decimal points inside
//!   numbers do not.
//!
//! # Example
//!
//! ```rust
//! use healthstats_core::analysis::analyze;
//!
//! let analyzed = analyze("Heart disease is common. It affects many people.");
//! assert_eq!(analyzed.sentences.len(), 2);
//! assert_eq!(analyzed.tokens.len(), 10);
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::tagger::{tag_sentence, PosBucket, PosTag};

/// A word token with its part-of-speech tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaggedToken<'a> {
    pub text: &'a str,
    pub tag: PosTag,
}

impl TaggedToken<'_> {
    /// Token length in Unicode scalar values.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn bucket(&self) -> Option<PosBucket> {
        self.tag.bucket()
    }
}

/// Output of [`analyze`]: sentences and tagged tokens, both in text order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalyzedText<'a> {
    pub sentences: Vec<&'a str>,
    pub tokens: Vec<TaggedToken<'a>>,
}

impl<'a> AnalyzedText<'a> {
    /// Tokens whose tag falls in `bucket`, in order of occurrence.
    pub fn tokens_in(&self, bucket: PosBucket) -> impl Iterator<Item = &'a str> + '_ {
        self.tokens
            .iter()
            .filter(move |t| t.bucket() == Some(bucket))
            .map(|t| t.text)
    }
}

/// Splits `text` into sentences and tagged word tokens.
///
/// Empty or whitespace-only input yields an empty [`AnalyzedText`].
pub fn analyze(text: &str) -> AnalyzedText<'_> {
    let mut analyzed = AnalyzedText::default();

    for segment in text.split_sentence_bounds() {
        let words: Vec<&str> = segment
            .split_word_bounds()
            .filter(|w| !w.chars().all(char::is_whitespace))
            .collect();
        if words.is_empty() {
            continue;
        }

        let trimmed = segment.trim();
        if trimmed.chars().any(char::is_alphanumeric) {
            analyzed.sentences.push(trimmed);
        }

        let tags = tag_sentence(&words);
        analyzed.tokens.extend(
            words
                .into_iter()
                .zip(tags)
                .map(|(text, tag)| TaggedToken { text, tag }),
        );
    }

    analyzed
}

//! # HealthStats Core
//!
//! Pure logic for HealthStats: tokenization, part-of-speech tagging, text
//! statistics, per-document features, the comparison payload, and the
//! traits behind which the baseline storage and the reference corpus live.
//!
//! This crate performs no network or filesystem I/O and pulls in no async
//! runtime; the `healthstats` crate provides the production backends.
//!
//! ```rust
//! use healthstats_core::stats::compute_aggregate;
//!
//! let record = compute_aggregate("Heart disease is common. It affects many people.");
//! assert_eq!(record.sentence_count, 2);
//! assert_eq!(record.word_count, 10);
//! ```

pub mod analysis;
pub mod compare;
pub mod corpus;
pub mod error;
pub mod features;
pub mod stats;
pub mod store;
pub mod tagger;

//! Reference corpus source abstraction.
//!
//! The baseline is computed from a reference corpus fetched from somewhere
//! outside this crate (PubMed in production, fixed strings in tests). The
//! [`CorpusSource`] trait is the seam between the two.

use async_trait::async_trait;
use thiserror::Error;

/// Why a reference corpus could not be produced.
#[derive(Debug, Error)]
pub enum FetchFailure {
    /// The search returned no article identifiers.
    #[error("search returned no article identifiers")]
    NoIdentifiers,
    /// Identifiers were found but no article yielded usable text.
    #[error("no abstract text could be retrieved from {attempted} articles")]
    NoContent { attempted: usize },
    /// The remote service could not be reached or answered with an error.
    #[error("corpus request failed: {0}")]
    Transport(String),
}

/// Produces the concatenated text of the reference corpus.
#[async_trait]
pub trait CorpusSource: Send + Sync {
    /// Short identifier used in logs (e.g. `"pubmed"`).
    fn name(&self) -> &str;

    /// Fetches the full reference corpus as one string.
    ///
    /// Must fail rather than return an empty corpus.
    async fn fetch_reference_corpus(&self) -> Result<String, FetchFailure>;
}

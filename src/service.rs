//! Comparison service: user text in, two-row comparison out.

use std::sync::Arc;

use anyhow::Result;
use healthstats_core::compare::ComparisonResponse;
use healthstats_core::error::CompareError;

use crate::baseline::BaselineStore;
use crate::config::Config;
use crate::csv_store::CsvFileBackend;
use crate::pubmed::PubMedSource;

pub struct ComparisonService {
    baseline: Arc<BaselineStore>,
}

impl ComparisonService {
    pub fn new(baseline: Arc<BaselineStore>) -> Self {
        Self { baseline }
    }

    /// Production wiring: CSV baseline at `[baseline].path`, PubMed corpus.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(Arc::new(baseline_store(config)?)))
    }

    pub fn baseline(&self) -> &BaselineStore {
        &self.baseline
    }

    /// Compares `text` against the baseline, building the baseline first if
    /// it has never been persisted.
    ///
    /// Fails as a whole: either both rows and the features are returned, or
    /// an error.
    pub async fn compare(&self, text: &str) -> Result<ComparisonResponse, CompareError> {
        let baseline = self.baseline.load_or_build().await?;
        let response = ComparisonResponse::build(text, baseline);
        tracing::debug!(
            words = response.statistics.user_input().record.word_count,
            "comparison computed"
        );
        Ok(response)
    }
}

/// Builds the production [`BaselineStore`] for `config`.
pub fn baseline_store(config: &Config) -> Result<BaselineStore> {
    let backend = Arc::new(CsvFileBackend::new(config.baseline.path.clone()));
    let source = Arc::new(PubMedSource::new(&config.corpus)?);
    Ok(BaselineStore::new(backend, source))
}

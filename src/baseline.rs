//! Baseline store: load the persisted baseline, or build it once.
//!
//! [`BaselineStore`] sits on top of a [`BaselineBackend`] and a
//! [`CorpusSource`]. The first request that finds no baseline fetches the
//! reference corpus, computes its [`AggregateRecord`], and persists it; every
//! later request reads the persisted record unchanged.
//!
//! Builds are serialized in-process by an async mutex, so concurrent first
//! requests trigger a single fetch. Across processes the backend's exclusive
//! [`create`](BaselineBackend::create) decides the winner and losers adopt
//! the persisted record.

use std::sync::Arc;

use healthstats_core::corpus::{CorpusSource, FetchFailure};
use healthstats_core::error::CompareError;
use healthstats_core::stats::{compute_aggregate, AggregateRecord};
use healthstats_core::store::BaselineBackend;
use tokio::sync::Mutex;

pub struct BaselineStore {
    backend: Arc<dyn BaselineBackend>,
    source: Arc<dyn CorpusSource>,
    build_lock: Mutex<()>,
}

impl BaselineStore {
    pub fn new(backend: Arc<dyn BaselineBackend>, source: Arc<dyn CorpusSource>) -> Self {
        Self {
            backend,
            source,
            build_lock: Mutex::new(()),
        }
    }

    pub fn backend(&self) -> &dyn BaselineBackend {
        self.backend.as_ref()
    }

    /// The persisted baseline, without building it when absent.
    pub async fn load(&self) -> Result<Option<AggregateRecord>, CompareError> {
        Ok(self.backend.read().await?)
    }

    /// Returns the persisted baseline, building and persisting it first if
    /// none exists.
    ///
    /// On [`CompareError::BaselineUnavailable`] nothing is persisted and the
    /// next call retries the build.
    pub async fn load_or_build(&self) -> Result<AggregateRecord, CompareError> {
        if let Some(record) = self.backend.read().await? {
            return Ok(record);
        }

        let _guard = self.build_lock.lock().await;

        // Another task may have finished the build while we waited.
        if let Some(record) = self.backend.read().await? {
            tracing::debug!("baseline built by a concurrent request");
            return Ok(record);
        }

        tracing::info!(
            source = self.source.name(),
            location = %self.backend.describe(),
            "baseline absent, building from reference corpus"
        );
        let record = self.compute_from_source().await?;

        if self.backend.create(&record).await? {
            tracing::info!(location = %self.backend.describe(), "baseline persisted");
            return Ok(record);
        }

        tracing::warn!(
            location = %self.backend.describe(),
            "baseline was created by another writer, using the persisted record"
        );
        self.backend.read().await?.ok_or_else(|| {
            CompareError::Processing(anyhow::anyhow!(
                "baseline at {} disappeared after a concurrent create",
                self.backend.describe()
            ))
        })
    }

    /// Recomputes the baseline from a fresh corpus fetch and overwrites the
    /// persisted record.
    ///
    /// On failure the previously persisted record is left in place.
    pub async fn rebuild(&self) -> Result<AggregateRecord, CompareError> {
        let _guard = self.build_lock.lock().await;

        tracing::info!(source = self.source.name(), "rebuilding baseline");
        let record = self.compute_from_source().await?;
        self.backend.replace(&record).await?;
        tracing::info!(location = %self.backend.describe(), "baseline replaced");

        Ok(record)
    }

    async fn compute_from_source(&self) -> Result<AggregateRecord, FetchFailure> {
        let corpus = self.source.fetch_reference_corpus().await?;
        Ok(compute_aggregate(&corpus))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use healthstats_core::store::memory::InMemoryBackend;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedSource {
        text: &'static str,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl CorpusSource for FixedSource {
        fn name(&self) -> &str {
            "fixed"
        }

        async fn fetch_reference_corpus(&self) -> Result<String, FetchFailure> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.text.to_string())
        }
    }

    struct EmptySearch;

    #[async_trait]
    impl CorpusSource for EmptySearch {
        fn name(&self) -> &str {
            "empty"
        }

        async fn fetch_reference_corpus(&self) -> Result<String, FetchFailure> {
            Err(FetchFailure::NoIdentifiers)
        }
    }

    fn fixed(text: &'static str) -> Arc<FixedSource> {
        Arc::new(FixedSource {
            text,
            calls: AtomicUsize::new(0),
        })
    }

    #[tokio::test]
    async fn test_builds_once_then_reads() {
        let source = fixed("Heart disease is common. It affects many people.");
        let backend = Arc::new(InMemoryBackend::new());
        let store = BaselineStore::new(backend.clone(), source.clone());

        assert_eq!(store.load().await.unwrap(), None);

        let first = store.load_or_build().await.unwrap();
        let second = store.load_or_build().await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first.word_count, 10);
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        assert_eq!(backend.read().await.unwrap(), Some(first));
    }

    #[tokio::test]
    async fn test_existing_baseline_is_returned_verbatim() {
        let persisted = AggregateRecord {
            sentence_count: 1,
            word_count: 2,
            average_word_length: 3.25,
            unique_word_count: 2,
            character_count: 7,
            noun_count: 1,
            adjective_count: 0,
            verb_count: 1,
        };
        let source = fixed("unused");
        let store = BaselineStore::new(
            Arc::new(InMemoryBackend::with_record(persisted)),
            source.clone(),
        );

        assert_eq!(store.load_or_build().await.unwrap(), persisted);
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_failed_build_persists_nothing() {
        let backend = Arc::new(InMemoryBackend::new());
        let store = BaselineStore::new(backend.clone(), Arc::new(EmptySearch));

        let err = store.load_or_build().await.unwrap_err();
        assert!(matches!(
            err,
            CompareError::BaselineUnavailable(FetchFailure::NoIdentifiers)
        ));
        assert!(!backend.exists().await.unwrap());
    }

    #[tokio::test]
    async fn test_rebuild_replaces() {
        let backend = Arc::new(InMemoryBackend::new());
        let store = BaselineStore::new(backend.clone(), fixed("Cells grow."));
        store.load_or_build().await.unwrap();

        let rebuilt = BaselineStore::new(backend.clone(), fixed("Cells die. Cells grow."))
            .rebuild()
            .await
            .unwrap();
        assert_eq!(rebuilt.sentence_count, 2);
        assert_eq!(backend.read().await.unwrap(), Some(rebuilt));
    }

    #[tokio::test]
    async fn test_failed_rebuild_keeps_previous() {
        let backend = Arc::new(InMemoryBackend::new());
        let previous = BaselineStore::new(backend.clone(), fixed("Cells grow."))
            .load_or_build()
            .await
            .unwrap();

        let store = BaselineStore::new(backend.clone(), Arc::new(EmptySearch));
        assert!(store.rebuild().await.is_err());
        assert_eq!(backend.read().await.unwrap(), Some(previous));
    }
}

//! In-memory [`BaselineBackend`] for tests and embedding.

use std::sync::RwLock;

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use crate::stats::AggregateRecord;

use super::BaselineBackend;

/// Holds the baseline in a lock-guarded `Option`.
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    record: RwLock<Option<AggregateRecord>>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend that already holds `record`.
    pub fn with_record(record: AggregateRecord) -> Self {
        Self {
            record: RwLock::new(Some(record)),
        }
    }
}

#[async_trait]
impl BaselineBackend for InMemoryBackend {
    fn describe(&self) -> String {
        "memory".to_string()
    }

    async fn exists(&self) -> Result<bool> {
        Ok(self.read().await?.is_some())
    }

    async fn read(&self) -> Result<Option<AggregateRecord>> {
        let guard = self
            .record
            .read()
            .map_err(|_| anyhow!("baseline lock poisoned"))?;
        Ok(*guard)
    }

    async fn create(&self, record: &AggregateRecord) -> Result<bool> {
        let mut guard = self
            .record
            .write()
            .map_err(|_| anyhow!("baseline lock poisoned"))?;
        if guard.is_some() {
            return Ok(false);
        }
        *guard = Some(*record);
        Ok(true)
    }

    async fn replace(&self, record: &AggregateRecord) -> Result<()> {
        let mut guard = self
            .record
            .write()
            .map_err(|_| anyhow!("baseline lock poisoned"))?;
        *guard = Some(*record);
        Ok(())
    }
}

//! Persistence abstraction for the baseline record.
//!
//! The [`BaselineBackend`] trait holds at most one [`AggregateRecord`].
//! Implementations decide where it lives (a CSV file in production, memory
//! in tests); callers only rely on the contract below.
//!
//! # Contract
//!
//! | Method | Purpose |
//! |--------|---------|
//! | [`exists`](BaselineBackend::exists) | Whether a record is persisted |
//! | [`read`](BaselineBackend::read) | The persisted record, if any |
//! | [`create`](BaselineBackend::create) | Persist only if nothing exists yet |
//! | [`replace`](BaselineBackend::replace) | Overwrite unconditionally |
//!
//! `create` is the only write on the request path and must be exclusive:
//! when two writers race, exactly one returns `true` and the persisted
//! record is the winner's, never an interleaving of both.

pub mod memory;

use anyhow::Result;
use async_trait::async_trait;

use crate::stats::AggregateRecord;

#[async_trait]
pub trait BaselineBackend: Send + Sync {
    /// Human-readable location for logs (file path, `"memory"`, …).
    fn describe(&self) -> String;

    async fn exists(&self) -> Result<bool>;

    /// Returns the persisted record verbatim, or `None` when absent.
    async fn read(&self) -> Result<Option<AggregateRecord>>;

    /// Persists `record` if no record exists.
    ///
    /// Returns `false`, leaving the existing record untouched, when one is
    /// already present.
    async fn create(&self, record: &AggregateRecord) -> Result<bool>;

    /// Persists `record`, overwriting any existing one.
    async fn replace(&self, record: &AggregateRecord) -> Result<()>;
}

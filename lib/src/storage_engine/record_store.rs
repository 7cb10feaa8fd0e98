// lib/src/storage_engine/record_store.rs
//! The record store contract.
//!
//! Persistence is keyed: one document per patient id, written through a
//! versioned compare-and-swap upsert. Two sessions racing on the same
//! record cannot silently clobber each other; the second writer observes
//! `PortalError::VersionConflict` and must re-read.
use std::fmt::Debug;

use async_trait::async_trait;
use models::{PatientRecord, PortalResult};

#[async_trait]
pub trait RecordStore: Send + Sync + Debug {
    /// The full record collection, ordered by id.
    async fn load_all(&self) -> PortalResult<Vec<PatientRecord>>;

    /// Point read by exact id.
    async fn get(&self, id: &str) -> PortalResult<Option<PatientRecord>>;

    /// Inserts a new record. Ids are unique case-insensitively; a
    /// duplicate in any letter case fails with `AlreadyExists`.
    async fn insert(&self, record: PatientRecord) -> PortalResult<()>;

    /// Compare-and-swap write: succeeds only while the stored version still
    /// equals `expected_version`, then stores with `expected_version + 1`.
    /// Returns the stored copy. Fails `NotFound` for an unknown id and
    /// `VersionConflict` for a stale writer.
    async fn upsert(
        &self,
        record: PatientRecord,
        expected_version: u64,
    ) -> PortalResult<PatientRecord>;

    /// Replaces the whole collection. Seeding and migration tooling only;
    /// no authentication path writes through this.
    async fn replace_all(&self, records: Vec<PatientRecord>) -> PortalResult<()>;

    async fn flush(&self) -> PortalResult<()>;
}

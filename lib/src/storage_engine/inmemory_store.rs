// lib/src/storage_engine/inmemory_store.rs
use std::collections::BTreeMap;

use async_trait::async_trait;
use models::{PatientRecord, PortalError, PortalResult};
use tokio::sync::Mutex as TokioMutex;

use crate::storage_engine::RecordStore;

/// Map-backed store for tests and ephemeral runs. BTreeMap keeps
/// `load_all` ordered by id.
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    records: TokioMutex<BTreeMap<String, PatientRecord>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn load_all(&self) -> PortalResult<Vec<PatientRecord>> {
        let records = self.records.lock().await;
        Ok(records.values().cloned().collect())
    }

    async fn get(&self, id: &str) -> PortalResult<Option<PatientRecord>> {
        let records = self.records.lock().await;
        Ok(records.get(id).cloned())
    }

    async fn insert(&self, record: PatientRecord) -> PortalResult<()> {
        let mut records = self.records.lock().await;
        if records
            .keys()
            .any(|existing| existing.eq_ignore_ascii_case(&record.id))
        {
            return Err(PortalError::AlreadyExists(record.id));
        }
        records.insert(record.id.clone(), record);
        Ok(())
    }

    async fn upsert(
        &self,
        mut record: PatientRecord,
        expected_version: u64,
    ) -> PortalResult<PatientRecord> {
        let mut records = self.records.lock().await;
        let stored = records
            .get(&record.id)
            .ok_or_else(|| PortalError::NotFound(record.id.clone()))?;
        if stored.version != expected_version {
            return Err(PortalError::VersionConflict {
                id: record.id,
                expected: expected_version,
                actual: stored.version,
            });
        }
        record.version = expected_version + 1;
        records.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    async fn replace_all(&self, new_records: Vec<PatientRecord>) -> PortalResult<()> {
        let mut records = self.records.lock().await;
        records.clear();
        for record in new_records {
            records.insert(record.id.clone(), record);
        }
        Ok(())
    }

    async fn flush(&self) -> PortalResult<()> {
        Ok(())
    }
}

// lib/src/storage_engine/sled_store.rs
use std::path::Path;

use async_trait::async_trait;
use log::{debug, info};
use models::{PatientRecord, PortalError, PortalResult};

use crate::storage_engine::RecordStore;

const PATIENTS_TREE: &str = "patients";

/// Durable record store: one sled tree, one JSON document per patient,
/// keyed by the exact id. Key order gives `load_all` its id ordering.
#[derive(Debug)]
pub struct SledRecordStore {
    tree: sled::Tree,
    // Held so the environment outlives the tree handle.
    _db: sled::Db,
}

impl SledRecordStore {
    pub fn open(data_directory: &Path) -> PortalResult<Self> {
        let db = sled::Config::new()
            .path(data_directory.join("portal.sled"))
            .open()
            .map_err(|e| PortalError::StorageError(format!("sled open failed: {}", e)))?;
        let tree = db
            .open_tree(PATIENTS_TREE)
            .map_err(|e| PortalError::StorageError(format!("sled tree open failed: {}", e)))?;
        info!(
            "[STORE] Sled record store ready ({} records)",
            tree.len()
        );
        Ok(Self { tree, _db: db })
    }

    fn decode(bytes: &[u8]) -> PortalResult<PatientRecord> {
        serde_json::from_slice(bytes).map_err(|e| {
            PortalError::DeserializationError(format!("corrupt patient document: {}", e))
        })
    }

    fn encode(record: &PatientRecord) -> PortalResult<Vec<u8>> {
        serde_json::to_vec(record)
            .map_err(|e| PortalError::SerializationError(format!("patient document: {}", e)))
    }

    fn id_exists_case_insensitive(&self, id: &str) -> PortalResult<bool> {
        for key in self.tree.iter().keys() {
            let key =
                key.map_err(|e| PortalError::StorageError(format!("sled scan failed: {}", e)))?;
            let existing = String::from_utf8_lossy(&key);
            if existing.eq_ignore_ascii_case(id) {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

#[async_trait]
impl RecordStore for SledRecordStore {
    async fn load_all(&self) -> PortalResult<Vec<PatientRecord>> {
        let mut records = Vec::with_capacity(self.tree.len());
        for entry in self.tree.iter() {
            let (_, value) = entry
                .map_err(|e| PortalError::StorageError(format!("sled scan failed: {}", e)))?;
            records.push(Self::decode(&value)?);
        }
        Ok(records)
    }

    async fn get(&self, id: &str) -> PortalResult<Option<PatientRecord>> {
        match self
            .tree
            .get(id.as_bytes())
            .map_err(|e| PortalError::StorageError(format!("sled read failed: {}", e)))?
        {
            Some(value) => Ok(Some(Self::decode(&value)?)),
            None => Ok(None),
        }
    }

    async fn insert(&self, record: PatientRecord) -> PortalResult<()> {
        if self.id_exists_case_insensitive(&record.id)? {
            return Err(PortalError::AlreadyExists(record.id));
        }
        let encoded = Self::encode(&record)?;
        self.tree
            .insert(record.id.as_bytes(), encoded)
            .map_err(|e| PortalError::StorageError(format!("sled write failed: {}", e)))?;
        debug!("[STORE] Inserted patient document {}", record.id);
        Ok(())
    }

    async fn upsert(
        &self,
        mut record: PatientRecord,
        expected_version: u64,
    ) -> PortalResult<PatientRecord> {
        let stored = self
            .tree
            .get(record.id.as_bytes())
            .map_err(|e| PortalError::StorageError(format!("sled read failed: {}", e)))?
            .ok_or_else(|| PortalError::NotFound(record.id.clone()))?;
        let stored = Self::decode(&stored)?;
        if stored.version != expected_version {
            return Err(PortalError::VersionConflict {
                id: record.id,
                expected: expected_version,
                actual: stored.version,
            });
        }
        record.version = expected_version + 1;
        let encoded = Self::encode(&record)?;
        self.tree
            .insert(record.id.as_bytes(), encoded)
            .map_err(|e| PortalError::StorageError(format!("sled write failed: {}", e)))?;
        Ok(record)
    }

    async fn replace_all(&self, records: Vec<PatientRecord>) -> PortalResult<()> {
        self.tree
            .clear()
            .map_err(|e| PortalError::StorageError(format!("sled clear failed: {}", e)))?;
        for record in records {
            let encoded = Self::encode(&record)?;
            self.tree
                .insert(record.id.as_bytes(), encoded)
                .map_err(|e| PortalError::StorageError(format!("sled write failed: {}", e)))?;
        }
        Ok(())
    }

    async fn flush(&self) -> PortalResult<()> {
        self.tree
            .flush_async()
            .await
            .map_err(|e| PortalError::StorageError(format!("sled flush failed: {}", e)))?;
        Ok(())
    }
}

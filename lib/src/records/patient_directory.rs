// lib/src/records/patient_directory.rs
//! Patient directory: record creation and profile maintenance.
use std::sync::Arc;

use chrono::Utc;
use log::{info, warn};
use models::{
    ContactInfoUpdate, EmergencyContactUpdate, NewPatient, PatientRecord, PortalError,
    PortalResult,
};
use rand::Rng;

use crate::records::normalize::{normalize, normalize_record};
use crate::storage_engine::RecordStore;

const CREDENTIAL_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generates a fresh `PAT`-prefixed patient id.
pub fn generate_patient_id() -> String {
    format!("PAT{}", random_credential_string(5))
}

/// Generates the initial password handed to a new patient.
pub fn generate_password() -> String {
    random_credential_string(8)
}

fn random_credential_string(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| CREDENTIAL_CHARSET[rng.gen_range(0..CREDENTIAL_CHARSET.len())] as char)
        .collect()
}

#[derive(Clone, Debug)]
pub struct PatientDirectory {
    store: Arc<dyn RecordStore>,
}

impl PatientDirectory {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Enrolls a new patient: validates the mandatory face image, hashes
    /// the password, seeds demo fields, and inserts. Id uniqueness is
    /// case-insensitive and enforced by the store.
    pub async fn create_patient(&self, new: NewPatient) -> PortalResult<PatientRecord> {
        let now = Utc::now();
        let record = PatientRecord::from_new(new, now)?;
        let record = normalize_record(record, now);
        self.store.insert(record.clone()).await?;
        info!("[DIRECTORY] Patient enrolled: {}", record.id);
        Ok(record)
    }

    /// Point read by exact id.
    pub async fn get_by_id(&self, id: &str) -> PortalResult<Option<PatientRecord>> {
        self.store.get(id).await
    }

    /// The full record set. Pure read: no defaulting happens here.
    pub async fn list_all(&self) -> PortalResult<Vec<PatientRecord>> {
        self.store.load_all().await
    }

    /// Profile edit: contact details. Unlike the last-visit refresh this is
    /// not best-effort; a stale write surfaces as `VersionConflict`.
    pub async fn update_contact_info(
        &self,
        id: &str,
        update: ContactInfoUpdate,
    ) -> PortalResult<PatientRecord> {
        let mut record = self
            .store
            .get(id)
            .await?
            .ok_or_else(|| PortalError::NotFound(id.to_string()))?;
        let expected = record.version;
        record.apply_contact_info(update, Utc::now());
        let stored = self.store.upsert(record, expected).await?;
        info!("[DIRECTORY] Contact info updated for {}", stored.id);
        Ok(stored)
    }

    /// Profile edit: emergency contact.
    pub async fn update_emergency_contact(
        &self,
        id: &str,
        update: EmergencyContactUpdate,
    ) -> PortalResult<PatientRecord> {
        let mut record = self
            .store
            .get(id)
            .await?
            .ok_or_else(|| PortalError::NotFound(id.to_string()))?;
        let expected = record.version;
        record.apply_emergency_contact(update, Utc::now());
        let stored = self.store.upsert(record, expected).await?;
        info!("[DIRECTORY] Emergency contact updated for {}", stored.id);
        Ok(stored)
    }

    /// Explicit seeding tool: runs the defaulting normalizer over every
    /// stored record and writes the result back. This is the only path
    /// that rewrites the collection wholesale.
    pub async fn seed_demo_records(&self) -> PortalResult<usize> {
        let records = self.store.load_all().await?;
        let count = records.len();
        if count == 0 {
            warn!("[SEED] Record store is empty, nothing to seed");
            return Ok(0);
        }
        let seeded = normalize(records, Utc::now());
        self.store.replace_all(seeded).await?;
        self.store.flush().await?;
        info!("[SEED] Seeded demo fields across {} records", count);
        Ok(count)
    }
}

// lib/src/auth_engine/mod.rs
//! Authentication services: credential login, face login, and the shared
//! last-visit refresh contract.

pub mod credential;
pub mod face;

use chrono::Utc;
use log::warn;
use models::PatientRecord;

use crate::storage_engine::RecordStore;

pub use credential::CredentialAuthenticator;
pub use face::{FaceAuthenticator, FaceLogin};

/// The shared post-login record update: `last_visit` moves to now and the
/// write is best-effort. A failed persist is logged and swallowed; a
/// legitimate login is never blocked on this non-critical write, so the
/// caller always receives the refreshed record even when the stored copy
/// stays stale.
pub(crate) async fn refresh_last_visit(
    store: &dyn RecordStore,
    record: PatientRecord,
) -> PatientRecord {
    let expected_version = record.version;
    let refreshed = record.with_visit_at(Utc::now());
    match store.upsert(refreshed.clone(), expected_version).await {
        Ok(stored) => stored,
        Err(e) => {
            warn!(
                "[AUTH] Could not persist last-visit refresh for {}: {}",
                refreshed.id, e
            );
            refreshed
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use async_trait::async_trait;
    use chrono::Utc;
    use models::medical::EncodedImage;
    use models::{NewPatient, PatientRecord, PortalError, PortalResult};

    use crate::face_oracle::{FaceOracle, FaceVerdict};
    use crate::storage_engine::{InMemoryRecordStore, RecordStore};

    pub fn enrolled_record(id: &str, password: &str) -> PatientRecord {
        PatientRecord::from_new(
            NewPatient {
                id: id.to_string(),
                password: password.to_string(),
                first_name: "Asha".to_string(),
                last_name: "Rao".to_string(),
                face_image: Some(EncodedImage::from_bytes("image/png", b"reference")),
                ..Default::default()
            },
            Utc::now() - chrono::Duration::days(1),
        )
        .unwrap()
    }

    pub fn live_frame() -> EncodedImage {
        EncodedImage::from_bytes("image/jpeg", b"live-frame")
    }

    /// Store whose reads work but whose writes always fail, for exercising
    /// the best-effort last-visit contract.
    #[derive(Debug, Default)]
    pub struct FailingWriteStore {
        pub inner: InMemoryRecordStore,
    }

    #[async_trait]
    impl RecordStore for FailingWriteStore {
        async fn load_all(&self) -> PortalResult<Vec<PatientRecord>> {
            self.inner.load_all().await
        }

        async fn get(&self, id: &str) -> PortalResult<Option<PatientRecord>> {
            self.inner.get(id).await
        }

        async fn insert(&self, record: PatientRecord) -> PortalResult<()> {
            self.inner.insert(record).await
        }

        async fn upsert(
            &self,
            _record: PatientRecord,
            _expected_version: u64,
        ) -> PortalResult<PatientRecord> {
            Err(PortalError::StorageError("write refused".to_string()))
        }

        async fn replace_all(&self, records: Vec<PatientRecord>) -> PortalResult<()> {
            self.inner.replace_all(records).await
        }

        async fn flush(&self) -> PortalResult<()> {
            Ok(())
        }
    }

    /// Store that fails every operation, for the store-outage paths.
    #[derive(Debug, Default)]
    pub struct UnavailableStore;

    #[async_trait]
    impl RecordStore for UnavailableStore {
        async fn load_all(&self) -> PortalResult<Vec<PatientRecord>> {
            Err(PortalError::ConnectionError("store offline".to_string()))
        }

        async fn get(&self, _id: &str) -> PortalResult<Option<PatientRecord>> {
            Err(PortalError::ConnectionError("store offline".to_string()))
        }

        async fn insert(&self, _record: PatientRecord) -> PortalResult<()> {
            Err(PortalError::ConnectionError("store offline".to_string()))
        }

        async fn upsert(
            &self,
            _record: PatientRecord,
            _expected_version: u64,
        ) -> PortalResult<PatientRecord> {
            Err(PortalError::ConnectionError("store offline".to_string()))
        }

        async fn replace_all(&self, _records: Vec<PatientRecord>) -> PortalResult<()> {
            Err(PortalError::ConnectionError("store offline".to_string()))
        }

        async fn flush(&self) -> PortalResult<()> {
            Err(PortalError::ConnectionError("store offline".to_string()))
        }
    }

    /// Oracle returning a canned verdict, or a transport failure when
    /// constructed with `unavailable()`.
    pub struct StubOracle {
        verdict: Option<FaceVerdict>,
    }

    impl StubOracle {
        pub fn verdict(is_same_person: bool, confidence: f64, reason: &str) -> Self {
            Self {
                verdict: Some(FaceVerdict {
                    is_same_person,
                    confidence,
                    reason: reason.to_string(),
                }),
            }
        }

        pub fn unavailable() -> Self {
            Self { verdict: None }
        }
    }

    #[async_trait]
    impl FaceOracle for StubOracle {
        async fn compare(
            &self,
            _reference: &EncodedImage,
            _live: &EncodedImage,
        ) -> PortalResult<FaceVerdict> {
            self.verdict
                .clone()
                .ok_or_else(|| PortalError::NetworkError("oracle offline".to_string()))
        }
    }
}

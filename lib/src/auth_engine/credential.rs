// lib/src/auth_engine/credential.rs
//! Patient ID + password authentication.
use std::sync::Arc;

use log::{debug, error, info, warn};
use models::{AuthError, AuthResult, PatientRecord};

use crate::auth_engine::refresh_last_visit;
use crate::config::IdMatch;
use crate::storage_engine::RecordStore;

pub struct CredentialAuthenticator {
    store: Arc<dyn RecordStore>,
    id_match: IdMatch,
}

impl CredentialAuthenticator {
    pub fn new(store: Arc<dyn RecordStore>, id_match: IdMatch) -> Self {
        Self { store, id_match }
    }

    /// Validates a patient id and password against the record set.
    ///
    /// Ids match per the configured mode (case-insensitive by default);
    /// passwords verify against the stored salted digest in constant time.
    /// Unknown id and wrong password collapse into the same
    /// `InvalidCredentials` so the caller cannot probe for accounts. On
    /// success the returned record carries a refreshed `last_visit`; the
    /// persist of that refresh is best-effort.
    pub async fn authenticate(
        &self,
        patient_id: &str,
        password: &str,
    ) -> AuthResult<PatientRecord> {
        debug!("[AUTH] Password login attempt for {}", patient_id);
        let records = self.store.load_all().await.map_err(|e| {
            error!("[AUTH] Record store load failed: {}", e);
            AuthError::StoreUnavailable(e.to_string())
        })?;
        if records.is_empty() {
            warn!("[AUTH] Record store is empty");
            return Err(AuthError::EmptyStore);
        }

        let record = records
            .into_iter()
            .find(|r| self.id_match.matches(&r.id, patient_id) && r.password.verify(password))
            .ok_or(AuthError::InvalidCredentials)?;

        info!("[AUTH] Patient authenticated: {}", record.id);
        Ok(refresh_last_visit(self.store.as_ref(), record).await)
    }

    /// Credential check with no side effects: no last-visit refresh, no
    /// write. Any store failure reads as "not valid."
    pub async fn validate_credentials(&self, patient_id: &str, password: &str) -> bool {
        match self.store.load_all().await {
            Ok(records) => records
                .iter()
                .any(|r| self.id_match.matches(&r.id, patient_id) && r.password.verify(password)),
            Err(e) => {
                error!("[AUTH] Credential validation load failed: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use models::AuthError;

    use super::CredentialAuthenticator;
    use crate::auth_engine::testing::{enrolled_record, FailingWriteStore, UnavailableStore};
    use crate::config::IdMatch;
    use crate::storage_engine::{InMemoryRecordStore, RecordStore};

    async fn store_with(ids: &[(&str, &str)]) -> Arc<InMemoryRecordStore> {
        let store = Arc::new(InMemoryRecordStore::new());
        for (id, password) in ids {
            store.insert(enrolled_record(id, password)).await.unwrap();
        }
        store
    }

    #[tokio::test]
    async fn should_authenticate_regardless_of_id_case() {
        let store = store_with(&[("PAT001", "abc123")]).await;
        let auth = CredentialAuthenticator::new(store, IdMatch::CaseInsensitive);

        for supplied in ["PAT001", "pat001", "Pat001"] {
            let record = auth.authenticate(supplied, "abc123").await.unwrap();
            assert_eq!(record.id, "PAT001");
        }
    }

    #[tokio::test]
    async fn should_not_reveal_which_credential_failed() {
        let store = store_with(&[("PAT001", "abc123")]).await;
        let auth = CredentialAuthenticator::new(store, IdMatch::CaseInsensitive);

        let wrong_password = auth.authenticate("PAT001", "nope").await.unwrap_err();
        let unknown_id = auth.authenticate("PAT999", "abc123").await.unwrap_err();
        assert_eq!(wrong_password, AuthError::InvalidCredentials);
        assert_eq!(unknown_id, AuthError::InvalidCredentials);
        assert_eq!(wrong_password.user_message(), unknown_id.user_message());
    }

    #[tokio::test]
    async fn should_fail_on_empty_store() {
        let store = Arc::new(InMemoryRecordStore::new());
        let auth = CredentialAuthenticator::new(store, IdMatch::CaseInsensitive);
        let err = auth.authenticate("PAT001", "abc123").await.unwrap_err();
        assert_eq!(err, AuthError::EmptyStore);
        // Same user-facing message as bad credentials.
        assert_eq!(
            err.user_message(),
            AuthError::InvalidCredentials.user_message()
        );
    }

    #[tokio::test]
    async fn should_surface_store_outage_as_retry_later() {
        let auth =
            CredentialAuthenticator::new(Arc::new(UnavailableStore), IdMatch::CaseInsensitive);
        let err = auth.authenticate("PAT001", "abc123").await.unwrap_err();
        assert!(matches!(err, AuthError::StoreUnavailable(_)));
    }

    #[tokio::test]
    async fn should_advance_last_visit_and_persist() {
        let store = store_with(&[("PAT001", "abc123")]).await;
        let before = store.get("PAT001").await.unwrap().unwrap();
        assert!(before.last_visit.is_none());

        let auth = CredentialAuthenticator::new(store.clone(), IdMatch::CaseInsensitive);
        let record = auth.authenticate("PAT001", "abc123").await.unwrap();
        assert!(record.last_visit.is_some());

        let persisted = store.get("PAT001").await.unwrap().unwrap();
        assert_eq!(persisted.last_visit, record.last_visit);
        assert_eq!(persisted.version, before.version + 1);
    }

    #[tokio::test]
    async fn should_strictly_advance_an_existing_last_visit() {
        let store = Arc::new(InMemoryRecordStore::new());
        let mut record = enrolled_record("PAT001", "abc123");
        let earlier = chrono::Utc::now() - chrono::Duration::hours(6);
        record.last_visit = Some(earlier);
        store.insert(record).await.unwrap();

        let auth = CredentialAuthenticator::new(store, IdMatch::CaseInsensitive);
        let updated = auth.authenticate("PAT001", "abc123").await.unwrap();
        assert!(updated.last_visit.unwrap() > earlier);
    }

    #[tokio::test]
    async fn should_succeed_even_when_refresh_cannot_persist() {
        let store = Arc::new(FailingWriteStore::default());
        store.insert(enrolled_record("PAT001", "abc123")).await.unwrap();

        let auth = CredentialAuthenticator::new(store.clone(), IdMatch::CaseInsensitive);
        let record = auth.authenticate("PAT001", "abc123").await.unwrap();
        // The caller sees the refreshed timestamp; only the stored copy is stale.
        assert!(record.last_visit.is_some());
        let stored = store.get("PAT001").await.unwrap().unwrap();
        assert!(stored.last_visit.is_none());
    }

    #[tokio::test]
    async fn should_require_exact_id_when_configured() {
        let store = store_with(&[("PAT001", "abc123")]).await;
        let auth = CredentialAuthenticator::new(store, IdMatch::Exact);
        assert!(auth.authenticate("pat001", "abc123").await.is_err());
        assert!(auth.authenticate("PAT001", "abc123").await.is_ok());
    }

    #[tokio::test]
    async fn should_validate_without_touching_last_visit() {
        let store = store_with(&[("PAT001", "abc123")]).await;
        let auth = CredentialAuthenticator::new(store.clone(), IdMatch::CaseInsensitive);

        assert!(auth.validate_credentials("pat001", "abc123").await);
        assert!(!auth.validate_credentials("pat001", "wrong").await);

        let stored = store.get("PAT001").await.unwrap().unwrap();
        assert!(stored.last_visit.is_none());
    }
}

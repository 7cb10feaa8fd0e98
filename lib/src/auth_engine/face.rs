// lib/src/auth_engine/face.rs
//! Face-photo authentication.
//!
//! Resolves the claimed identity, hands the stored reference image and the
//! live capture to the face oracle, and applies the confidence policy at
//! this boundary. The oracle reports; the authenticator decides.
use std::sync::Arc;

use log::{debug, error, info};
use models::medical::EncodedImage;
use models::{AuthError, AuthResult, PatientRecord};

use crate::auth_engine::refresh_last_visit;
use crate::config::IdMatch;
use crate::face_oracle::{FaceOracle, FaceVerdict};
use crate::storage_engine::RecordStore;

const MISMATCH_FALLBACK_REASON: &str = "Face verification failed. The faces do not match.";

/// A successful face login: the refreshed record plus the oracle's
/// confidence in the match.
#[derive(Clone, Debug)]
pub struct FaceLogin {
    pub record: PatientRecord,
    pub confidence: f64,
}

pub struct FaceAuthenticator {
    store: Arc<dyn RecordStore>,
    oracle: Arc<dyn FaceOracle>,
    id_match: IdMatch,
    min_confidence: f64,
}

impl FaceAuthenticator {
    pub fn new(
        store: Arc<dyn RecordStore>,
        oracle: Arc<dyn FaceOracle>,
        id_match: IdMatch,
        min_confidence: f64,
    ) -> Self {
        Self {
            store,
            oracle,
            id_match,
            min_confidence,
        }
    }

    /// Face login for a claimed id and a single live frame.
    ///
    /// Id resolution is exact by default (the password path is looser; the
    /// asymmetry is deliberate configuration). The verdict is accepted only
    /// when the oracle says same-person AND its confidence clears the
    /// configured floor. `min_confidence` is inclusive: 0.60 passes a 0.6
    /// floor, 0.599 does not. On success the same best-effort last-visit
    /// refresh as the password path applies.
    pub async fn authenticate_by_face(
        &self,
        claimed_id: &str,
        live_image: &EncodedImage,
    ) -> AuthResult<FaceLogin> {
        debug!("[AUTH] Face login attempt for {}", claimed_id);
        let record = self.resolve_identity(claimed_id).await?;

        let verdict = self
            .oracle
            .compare(&record.face_image, live_image)
            .await
            .map_err(|e| {
                error!("[AUTH] Face oracle call failed: {}", e);
                AuthError::OracleUnavailable(e.to_string())
            })?;

        if !verdict.is_same_person {
            info!(
                "[AUTH] Face mismatch for {} (confidence {:.2})",
                record.id, verdict.confidence
            );
            return Err(AuthError::FaceMismatch {
                reason: mismatch_reason(&verdict),
                confidence: verdict.confidence,
            });
        }
        if verdict.confidence < self.min_confidence {
            info!(
                "[AUTH] Face match below confidence floor for {} ({:.3} < {:.3})",
                record.id, verdict.confidence, self.min_confidence
            );
            return Err(AuthError::FaceMismatch {
                reason: format!(
                    "Face verification confidence {:.2} is below the acceptance threshold.",
                    verdict.confidence
                ),
                confidence: verdict.confidence,
            });
        }

        info!(
            "[AUTH] Patient authenticated by face: {} (confidence {:.2})",
            record.id, verdict.confidence
        );
        let record = refresh_last_visit(self.store.as_ref(), record).await;
        Ok(FaceLogin {
            record,
            confidence: verdict.confidence,
        })
    }

    async fn resolve_identity(&self, claimed_id: &str) -> AuthResult<PatientRecord> {
        let found = match self.id_match {
            IdMatch::Exact => self.store.get(claimed_id).await.map_err(|e| {
                error!("[AUTH] Record store read failed: {}", e);
                AuthError::StoreUnavailable(e.to_string())
            })?,
            IdMatch::CaseInsensitive => self
                .store
                .load_all()
                .await
                .map_err(|e| {
                    error!("[AUTH] Record store load failed: {}", e);
                    AuthError::StoreUnavailable(e.to_string())
                })?
                .into_iter()
                .find(|r| self.id_match.matches(&r.id, claimed_id)),
        };
        found.ok_or(AuthError::UnknownIdentity)
    }
}

/// The oracle's explanation travels to the user verbatim; an empty reason
/// falls back to a fixed line.
fn mismatch_reason(verdict: &FaceVerdict) -> String {
    if verdict.reason.is_empty() {
        MISMATCH_FALLBACK_REASON.to_string()
    } else {
        verdict.reason.clone()
    }
}

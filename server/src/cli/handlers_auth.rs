// server/src/cli/handlers_auth.rs
use std::sync::Arc;

use lib::auth_engine::{CredentialAuthenticator, FaceAuthenticator};
use lib::commands::AuthCommand;
use lib::config::PortalConfig;
use lib::face_oracle::HttpFaceOracle;
use lib::storage_engine::RecordStore;
use logging_service::{AuditLog, AuthMethod};

use crate::cli::handlers_utils::load_image;

pub async fn handle_auth_command(
    action: AuthCommand,
    store: Arc<dyn RecordStore>,
    config: &PortalConfig,
    audit: &AuditLog,
) -> String {
    match action {
        AuthCommand::Login { id, password } => {
            let auth = CredentialAuthenticator::new(store, config.auth.credential_id_match);
            match auth.authenticate(&id, &password).await {
                Ok(record) => {
                    audit.auth_succeeded(&record.id, AuthMethod::Password, None);
                    format!(
                        "Welcome back, {}. Visit recorded at {}.",
                        record.full_name(),
                        record
                            .last_visit
                            .map(|t| t.to_rfc3339())
                            .unwrap_or_default()
                    )
                }
                Err(e) => {
                    audit.auth_failed(&id, AuthMethod::Password, &e);
                    e.user_message()
                }
            }
        }
        AuthCommand::FaceLogin { id, image } => {
            let oracle = match HttpFaceOracle::new(&config.oracle) {
                Ok(oracle) => Arc::new(oracle),
                Err(e) => return format!("Error: {}", e),
            };
            let live_image = match load_image(&image).await {
                Ok(image) => image,
                Err(e) => return format!("Error: {}", e),
            };
            let auth = FaceAuthenticator::new(
                store,
                oracle,
                config.auth.face_id_match,
                config.oracle.min_confidence,
            );
            match auth.authenticate_by_face(&id, &live_image).await {
                Ok(login) => {
                    audit.auth_succeeded(&login.record.id, AuthMethod::Face, Some(login.confidence));
                    format!(
                        "Face verified for {} (confidence {:.2}). Welcome back.",
                        login.record.full_name(),
                        login.confidence
                    )
                }
                Err(e) => {
                    audit.auth_failed(&id, AuthMethod::Face, &e);
                    e.user_message()
                }
            }
        }
        AuthCommand::Validate { id, password } => {
            let auth = CredentialAuthenticator::new(store, config.auth.credential_id_match);
            if auth.validate_credentials(&id, &password).await {
                "Credentials valid".to_string()
            } else {
                "Credentials invalid".to_string()
            }
        }
    }
}

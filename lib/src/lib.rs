// lib/src/lib.rs

pub mod auth_engine;
pub mod commands;
pub mod config;
pub mod face_oracle;
pub mod records;
pub mod storage_engine;


// Now, import directly from the 'models' crate.
pub use models::{AuthError, AuthResult, PatientRecord, PortalError, PortalResult};

// Explicit re-exports
pub use crate::auth_engine::{CredentialAuthenticator, FaceAuthenticator, FaceLogin};
pub use crate::commands::{AuthCommand, PatientCommand};
pub use crate::config::{
    load_portal_config_from_yaml, AuthConfig, IdMatch, OracleConfig, PortalConfig,
    StorageConfig, StorageEngineType,
};
pub use crate::face_oracle::{FaceOracle, FaceVerdict, HttpFaceOracle};
pub use crate::records::PatientDirectory;
pub use crate::storage_engine::{open_record_store, RecordStore};

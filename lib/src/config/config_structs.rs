// lib/src/config/config_structs.rs
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::{
    DEFAULT_DATA_DIRECTORY, DEFAULT_MIN_CONFIDENCE, DEFAULT_ORACLE_ENDPOINT,
};

/// Top-level portal configuration, loaded from YAML with full defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    pub storage: StorageConfig,
    pub oracle: OracleConfig,
    pub auth: AuthConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub engine: StorageEngineType,
    pub data_directory: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            engine: StorageEngineType::InMemory,
            data_directory: PathBuf::from(DEFAULT_DATA_DIRECTORY),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageEngineType {
    #[default]
    InMemory,
    Sled,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OracleConfig {
    /// POST endpoint of the remote face-similarity model.
    pub endpoint: String,
    /// Optional request timeout. None reproduces the documented behavior:
    /// a hung remote call hangs the login attempt.
    pub timeout_secs: Option<u64>,
    /// Confidence floor applied by the face authenticator at the call
    /// boundary, not inside the oracle.
    pub min_confidence: f64,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ORACLE_ENDPOINT.to_string(),
            timeout_secs: None,
            min_confidence: DEFAULT_MIN_CONFIDENCE,
        }
    }
}

/// Identity lookup modes for the two login paths.
///
/// The password path has always matched ids case-insensitively while the
/// face path matches exactly. Whether that asymmetry is intentional is an
/// open question upstream, so both sides are explicit configuration rather
/// than hard-coded behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdMatch {
    Exact,
    CaseInsensitive,
}

impl IdMatch {
    pub fn matches(&self, stored: &str, candidate: &str) -> bool {
        match self {
            IdMatch::Exact => stored == candidate,
            IdMatch::CaseInsensitive => stored.eq_ignore_ascii_case(candidate),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub credential_id_match: IdMatch,
    pub face_id_match: IdMatch,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            credential_id_match: IdMatch::CaseInsensitive,
            face_id_match: IdMatch::Exact,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AuthConfig, IdMatch, PortalConfig};

    #[test]
    fn should_default_to_asymmetric_id_matching() {
        // Flagged asymmetry: case-insensitive ids for password login,
        // exact ids for face login.
        let auth = AuthConfig::default();
        assert_eq!(auth.credential_id_match, IdMatch::CaseInsensitive);
        assert_eq!(auth.face_id_match, IdMatch::Exact);
    }

    #[test]
    fn should_match_ids_per_mode() {
        assert!(IdMatch::CaseInsensitive.matches("PAT001", "pat001"));
        assert!(!IdMatch::Exact.matches("PAT001", "pat001"));
        assert!(IdMatch::Exact.matches("PAT001", "PAT001"));
    }

    #[test]
    fn should_default_confidence_floor_to_point_six() {
        let config = PortalConfig::default();
        assert_eq!(config.oracle.min_confidence, 0.6);
    }
}

// lib/src/config/mod.rs

pub mod config_helpers;
pub mod config_structs;

pub use config_helpers::load_portal_config_from_yaml;
pub use config_structs::{
    AuthConfig, IdMatch, OracleConfig, PortalConfig, StorageConfig, StorageEngineType,
};

/// Default on-disk location for the sled-backed record store.
pub const DEFAULT_DATA_DIRECTORY: &str = "/opt/medicloud/data";
/// Default location probed for a portal config file.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/medicloud/portal.yaml";
/// Default endpoint of the hosted face-similarity model.
pub const DEFAULT_ORACLE_ENDPOINT: &str = "http://127.0.0.1:9400/v1/verify-face";
/// Verdicts below this confidence are rejected regardless of the raw
/// same-person boolean. 0.60 passes, 0.599 does not.
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.6;

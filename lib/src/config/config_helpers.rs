// lib/src/config/config_helpers.rs
use std::path::Path;

use log::{debug, info, warn};
use models::{PortalError, PortalResult};
use serde_yaml;

use crate::config::config_structs::PortalConfig;
use crate::config::DEFAULT_CONFIG_PATH;

/// Loads portal configuration from YAML.
///
/// With an explicit path the file must exist and parse. Without one, the
/// default location is probed and built-in defaults are used when it is
/// absent.
pub fn load_portal_config_from_yaml(path: Option<&Path>) -> PortalResult<PortalConfig> {
    match path {
        Some(path) => {
            info!("[CONFIG] Loading portal config from {:?}", path);
            let raw = std::fs::read_to_string(path).map_err(|e| {
                PortalError::ConfigurationError(format!(
                    "could not read config file {:?}: {}",
                    path, e
                ))
            })?;
            parse_config(&raw)
        }
        None => {
            let default = Path::new(DEFAULT_CONFIG_PATH);
            if default.exists() {
                debug!("[CONFIG] Using default config file {:?}", default);
                let raw = std::fs::read_to_string(default).map_err(|e| {
                    PortalError::ConfigurationError(format!(
                        "could not read config file {:?}: {}",
                        default, e
                    ))
                })?;
                parse_config(&raw)
            } else {
                warn!("[CONFIG] No config file found, using built-in defaults");
                Ok(PortalConfig::default())
            }
        }
    }
}

fn parse_config(raw: &str) -> PortalResult<PortalConfig> {
    serde_yaml::from_str(raw)
        .map_err(|e| PortalError::ConfigurationError(format!("invalid portal config: {}", e)))
}

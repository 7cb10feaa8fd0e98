// lib/src/storage_engine/mod.rs

pub mod inmemory_store;
pub mod record_store;
pub mod sled_store;

use std::sync::Arc;

use log::info;
use models::PortalResult;

use crate::config::{StorageConfig, StorageEngineType};

pub use inmemory_store::InMemoryRecordStore;
pub use record_store::RecordStore;
pub use sled_store::SledRecordStore;

/// Opens the record store backend selected by configuration.
pub fn open_record_store(config: &StorageConfig) -> PortalResult<Arc<dyn RecordStore>> {
    match config.engine {
        StorageEngineType::InMemory => {
            info!("[STORE] Using in-memory record store");
            Ok(Arc::new(InMemoryRecordStore::new()))
        }
        StorageEngineType::Sled => {
            info!(
                "[STORE] Opening sled record store at {:?}",
                config.data_directory
            );
            Ok(Arc::new(SledRecordStore::open(&config.data_directory)?))
        }
    }
}

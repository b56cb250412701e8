//! Cart Storage
//!
//! Persists the whole record list as one JSON blob under a single key.

use std::sync::Arc;

use crate::domain::{DomainError, DomainResult, RentalRecord};
use super::traits::KeyValueStore;

/// Storage slot holding the serialized record list
pub const CARTS_KEY: &str = "carts";

pub struct CartStorage {
    kv: Arc<dyn KeyValueStore>,
}

impl CartStorage {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// Load all records.
    ///
    /// An empty slot or a blob that does not deserialize yields an empty
    /// list; only a failed read is an error.
    pub async fn load(&self) -> DomainResult<Vec<RentalRecord>> {
        let Some(blob) = self.kv.get_item(CARTS_KEY).await? else {
            return Ok(Vec::new());
        };
        if blob.trim().is_empty() {
            return Ok(Vec::new());
        }
        match serde_json::from_str::<Vec<RentalRecord>>(&blob) {
            Ok(records) => Ok(records),
            Err(e) => {
                log::warn!("Discarding unreadable '{}' blob: {}", CARTS_KEY, e);
                Ok(Vec::new())
            }
        }
    }

    /// Replace the stored list
    pub async fn save(&self, records: &[RentalRecord]) -> DomainResult<()> {
        let blob = serde_json::to_string(records)
            .map_err(|e| DomainError::Internal(format!("Failed to serialize records: {}", e)))?;
        self.kv.set_item(CARTS_KEY, &blob).await
    }
}

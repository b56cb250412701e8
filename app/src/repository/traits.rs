//! Repository Layer - Core Traits
//!
//! Defines the abstract interface for device key-value storage.
//! Implementations can use SQLite, in-memory, etc.

use async_trait::async_trait;
use crate::domain::DomainResult;

/// Durable string-keyed storage for serialized blobs
///
/// All operations are async to support various backends.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`
    async fn get_item(&self, key: &str) -> DomainResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    async fn set_item(&self, key: &str, value: &str) -> DomainResult<()>;

    /// Delete `key`; missing keys are not an error
    async fn remove_item(&self, key: &str) -> DomainResult<()>;
}

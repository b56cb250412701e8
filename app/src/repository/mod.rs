//! Repository Layer
//!
//! Key-value storage abstractions and the record store built on them.

mod traits;
mod db;
mod memory_store;
mod cart_storage;
mod record_store;


pub use traits::KeyValueStore;
pub use db::SqliteKvStore;
pub use memory_store::MemoryKvStore;
pub use cart_storage::{CartStorage, CARTS_KEY};
pub use record_store::RecordStore;

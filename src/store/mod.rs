//! Snapshot Store
//!
//! Durable key-value storage for serialized file system snapshots. The file
//! system writes one value under a fixed key after every mutation and reads it
//! back when a session starts.

pub mod memory;
pub mod persistence;

pub use memory::MemorySnapshotStore;
pub use persistence::SledSnapshotStore;

use crate::error::StorageError;

/// Key the snapshot is stored under unless configured otherwise
pub const SNAPSHOT_KEY: &str = "deskfs.snapshot";

/// Snapshot store interface
pub trait SnapshotStore: Send + Sync {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;
    /// Replace any prior value under `key`.
    fn save(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

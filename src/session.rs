//! Session composition
//!
//! A `Session` owns the one `FileSystem` of a run and hands the same shared
//! handle to every consumer: the shell, the file manager and editor buffers.
//! There is no change notification; consumers re-query after operations they
//! did not perform themselves.

use crate::editor::EditorBuffer;
use crate::error::VfsError;
use crate::explorer::FileManager;
use crate::shell::Shell;
use crate::store::{MemorySnapshotStore, SnapshotStore};
use crate::vfs::FileSystem;
use parking_lot::RwLock;
use std::sync::Arc;

/// Shared handle to the session's file system
pub type SharedFileSystem = Arc<RwLock<FileSystem>>;

pub struct Session {
    fs: SharedFileSystem,
}

impl Session {
    pub fn new(fs: FileSystem) -> Self {
        Self {
            fs: Arc::new(RwLock::new(fs)),
        }
    }

    /// Restore the session saved under `key` in `store`, or start empty.
    pub fn open(store: Arc<dyn SnapshotStore>, key: &str) -> Self {
        Self::new(FileSystem::open_with_key(store, key))
    }

    /// Session that never outlives the process.
    pub fn ephemeral() -> Self {
        Self::new(FileSystem::open(Arc::new(MemorySnapshotStore::new())))
    }

    /// Another handle to the same file system
    pub fn handle(&self) -> SharedFileSystem {
        Arc::clone(&self.fs)
    }

    pub fn shell(&self) -> Shell {
        Shell::new(self.handle())
    }

    pub fn file_manager(&self) -> FileManager {
        FileManager::new(self.handle())
    }

    pub fn open_editor(&self, path: &str) -> Result<EditorBuffer, VfsError> {
        EditorBuffer::open(self.handle(), path)
    }
}

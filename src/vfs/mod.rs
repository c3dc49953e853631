//! Virtual File System
//!
//! `FileSystem` owns the node arena, tracks the working directory, and exposes
//! the path-based operations consumed by the shell, the file manager and the
//! editor. Every mutation (and every `cd`) is followed by a best-effort
//! snapshot into the configured `SnapshotStore`.

mod entry;
mod ops;
mod resolve;

pub use entry::{DirEntry, EntryKind, FileInfo, TreeEntry};

use crate::error::{StorageError, VfsError};
use crate::snapshot::{self, Snapshot};
use crate::store::{MemorySnapshotStore, SnapshotStore, SNAPSHOT_KEY};
use crate::tree::{Node, NodeArena};
use crate::types::NodeId;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// In-memory hierarchical namespace with snapshot persistence.
pub struct FileSystem {
    arena: NodeArena,
    root: NodeId,
    cwd: NodeId,
    store: Arc<dyn SnapshotStore>,
    snapshot_key: String,
}

impl Default for FileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FileSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSystem")
            .field("nodes", &self.arena.len())
            .field("cwd", &self.pwd())
            .field("snapshot_key", &self.snapshot_key)
            .finish()
    }
}

impl FileSystem {
    /// Empty file system backed by a throwaway in-memory store.
    pub fn new() -> Self {
        Self::empty(Arc::new(MemorySnapshotStore::new()), SNAPSHOT_KEY.to_string())
    }

    /// Open the snapshot saved under the default key, or start empty.
    pub fn open(store: Arc<dyn SnapshotStore>) -> Self {
        Self::open_with_key(store, SNAPSHOT_KEY)
    }

    /// Open the snapshot saved under `key`, or start empty.
    ///
    /// A missing snapshot yields an empty root. An unreadable or corrupt one is
    /// logged and also yields an empty root; it is overwritten on the next
    /// mutation.
    pub fn open_with_key(store: Arc<dyn SnapshotStore>, key: impl Into<String>) -> Self {
        let key = key.into();
        let loaded = store
            .load(&key)
            .and_then(|bytes| bytes.map(|b| Snapshot::from_json_slice(&b)).transpose());
        match loaded {
            Ok(Some(snapshot)) => {
                match Self::from_snapshot(&snapshot, Arc::clone(&store), key.clone()) {
                    Ok(fs) => {
                        info!(nodes = fs.node_count(), key = %key, "restored file system snapshot");
                        fs
                    }
                    Err(e) => {
                        warn!("Failed to decode snapshot '{}': {}, starting empty", key, e);
                        Self::empty(store, key)
                    }
                }
            }
            Ok(None) => {
                debug!(key = %key, "no snapshot found, starting empty");
                Self::empty(store, key)
            }
            Err(e) => {
                warn!("Failed to load snapshot '{}': {}, starting empty", key, e);
                Self::empty(store, key)
            }
        }
    }

    /// Build a file system from a decoded snapshot without persisting it.
    pub fn from_snapshot(
        snapshot: &Snapshot,
        store: Arc<dyn SnapshotStore>,
        key: impl Into<String>,
    ) -> Result<Self, StorageError> {
        let (arena, root) = snapshot::decode(snapshot)?;
        let mut fs = Self {
            arena,
            root,
            cwd: root,
            store,
            snapshot_key: key.into(),
        };
        fs.cwd = fs.directory_or_root(&snapshot.cwd);
        Ok(fs)
    }

    fn empty(store: Arc<dyn SnapshotStore>, snapshot_key: String) -> Self {
        let mut arena = NodeArena::new();
        let root = arena.insert(Node::directory("/"));
        Self {
            arena,
            root,
            cwd: root,
            store,
            snapshot_key,
        }
    }

    fn directory_or_root(&self, path: &str) -> NodeId {
        match self.resolve(path) {
            Ok(id) if self.arena[id].is_directory() => id,
            _ => {
                warn!("Saved working directory {} no longer exists, using /", path);
                self.root
            }
        }
    }

    pub fn root_id(&self) -> NodeId {
        self.root
    }

    pub fn current_dir_id(&self) -> NodeId {
        self.cwd
    }

    /// Live node count, root included
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    pub fn snapshot_key(&self) -> &str {
        &self.snapshot_key
    }

    // --- persistence ---

    /// Encode the whole tree and working directory.
    pub fn snapshot(&self) -> Snapshot {
        snapshot::encode(&self.arena, self.root, &self.pwd())
    }

    /// Write the snapshot to the store, replacing any prior value.
    pub fn save(&self) -> Result<(), StorageError> {
        let bytes = self.snapshot().to_json_bytes()?;
        self.store.save(&self.snapshot_key, &bytes)?;
        debug!(bytes = bytes.len(), nodes = self.arena.len(), "saved snapshot");
        Ok(())
    }

    /// Save after a successful mutation. The in-memory change stands even if
    /// the store rejects the write.
    fn persist(&self) {
        if let Err(e) = self.save() {
            warn!("Failed to persist snapshot '{}': {}", self.snapshot_key, e);
        }
    }

    /// Replace the whole tree with a snapshot and persist it.
    pub fn restore(&mut self, snapshot: &Snapshot) -> Result<(), StorageError> {
        let (arena, root) = snapshot::decode(snapshot)?;
        self.arena = arena;
        self.root = root;
        self.cwd = root;
        self.cwd = self.directory_or_root(&snapshot.cwd);
        info!(nodes = self.arena.len(), "restored snapshot");
        self.save()
    }

    /// Drop every node except an empty root and persist.
    pub fn reset(&mut self) -> Result<(), StorageError> {
        let mut arena = NodeArena::new();
        self.root = arena.insert(Node::directory("/"));
        self.cwd = self.root;
        self.arena = arena;
        info!("reset file system");
        self.save()
    }

    // --- read operations ---

    /// List a directory in insertion order.
    pub fn ls(&self, path: &str) -> Result<Vec<DirEntry>, VfsError> {
        let id = self.resolve(path)?;
        let node = &self.arena[id];
        let children = node
            .children()
            .ok_or_else(|| VfsError::NotADirectory(path.to_string()))?;
        Ok(children
            .iter()
            .map(|(_, child)| DirEntry::of(&self.arena[*child]))
            .collect())
    }

    /// Content of a file.
    pub fn cat(&self, path: &str) -> Result<String, VfsError> {
        let id = self.resolve(path)?;
        self.arena[id]
            .content()
            .map(str::to_string)
            .ok_or_else(|| VfsError::IsADirectory(path.to_string()))
    }

    /// Change the working directory and persist it.
    pub fn cd(&mut self, path: &str) -> Result<String, VfsError> {
        let id = self.resolve(path)?;
        if !self.arena[id].is_directory() {
            return Err(VfsError::NotADirectory(path.to_string()));
        }
        self.cwd = id;
        debug!(path, cwd = %self.pwd(), "cd");
        self.persist();
        Ok(format!("Changed directory to: {}", path))
    }

    /// Absolute path of the working directory.
    pub fn pwd(&self) -> String {
        self.arena.path_of(self.cwd)
    }

    pub fn get_file_info(&self, path: &str) -> Result<FileInfo, VfsError> {
        let id = self.resolve(path)?;
        Ok(FileInfo::of(&self.arena[id]))
    }

    /// Normalized absolute form of `path` (no `.`, `..` or empty segments).
    pub fn absolute_path(&self, path: &str) -> Result<String, VfsError> {
        let id = self.resolve(path)?;
        Ok(self.arena.path_of(id))
    }

    pub fn exists(&self, path: &str) -> bool {
        self.resolve(path).is_ok()
    }

    /// Nested view of the subtree at `path`.
    /// Number of entries below `path` at any depth; zero for a file.
    pub fn subtree_len(&self, path: &str) -> Result<usize, VfsError> {
        let id = self.resolve(path)?;
        Ok(self.arena.descendants(id).len() - 1)
    }

    pub fn tree(&self, path: &str) -> Result<TreeEntry, VfsError> {
        let id = self.resolve(path)?;
        Ok(self.tree_entry(id))
    }

    fn tree_entry(&self, id: NodeId) -> TreeEntry {
        let node = &self.arena[id];
        TreeEntry {
            name: node.name().to_string(),
            kind: EntryKind::of(node),
            children: node
                .children()
                .map(|children| {
                    children
                        .iter()
                        .map(|(_, child)| self.tree_entry(*child))
                        .collect()
                })
                .unwrap_or_default(),
        }
    }
}

//! Snapshots
//!
//! Flat representation of the whole tree, used to save a session into a
//! `SnapshotStore` and restore it later. Nodes are written as a pre-order list
//! of records that name their parent by record id, so the encoded depth stays
//! constant however deep the tree grows. Decoding rebuilds a fresh arena,
//! re-deriving parent links and file sizes along the way.

use crate::error::StorageError;
use crate::tree::{FileType, Node, NodeArena, NodeKind, NodeMetadata};
use crate::types::{NodeId, Timestamp};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Current snapshot format version
pub const SNAPSHOT_VERSION: u32 = 1;

/// Whole-session snapshot: the tree plus the working directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    /// Absolute path of the working directory when the snapshot was taken
    #[serde(default = "default_cwd")]
    pub cwd: String,
    /// Pre-order node records, root first
    pub nodes: Vec<SnapshotRecord>,
}

fn default_cwd() -> String {
    "/".to_string()
}

/// Serialized metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotMetadata {
    pub created_at: Timestamp,
    pub modified_at: Timestamp,
    #[serde(default)]
    pub size: u64,
}

/// One serialized node, tagged by kind. `parent` is None only for the root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SnapshotRecord {
    Directory {
        id: u64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        parent: Option<u64>,
        name: String,
        metadata: SnapshotMetadata,
    },
    File {
        id: u64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        parent: Option<u64>,
        name: String,
        #[serde(default)]
        file_type: FileType,
        #[serde(default)]
        content: String,
        metadata: SnapshotMetadata,
    },
}

impl SnapshotRecord {
    pub fn id(&self) -> u64 {
        match self {
            SnapshotRecord::Directory { id, .. } | SnapshotRecord::File { id, .. } => *id,
        }
    }

    pub fn parent(&self) -> Option<u64> {
        match self {
            SnapshotRecord::Directory { parent, .. } | SnapshotRecord::File { parent, .. } => {
                *parent
            }
        }
    }

    pub fn name(&self) -> &str {
        match self {
            SnapshotRecord::Directory { name, .. } | SnapshotRecord::File { name, .. } => name,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, SnapshotRecord::Directory { .. })
    }
}

impl Snapshot {
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, StorageError> {
        Ok(serde_json::to_vec(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, StorageError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, StorageError> {
        let snapshot: Snapshot = serde_json::from_slice(bytes)?;
        if snapshot.version > SNAPSHOT_VERSION {
            return Err(StorageError::Corrupt(format!(
                "unsupported snapshot version {} (newest known: {})",
                snapshot.version, SNAPSHOT_VERSION
            )));
        }
        Ok(snapshot)
    }

    /// Records whose parent is the record `id`, in stored order
    pub fn children_of(&self, id: u64) -> impl Iterator<Item = &SnapshotRecord> {
        self.nodes.iter().filter(move |r| r.parent() == Some(id))
    }
}

/// Encode the subtree at `root` together with the working directory path.
pub fn encode(arena: &NodeArena, root: NodeId, cwd: &str) -> Snapshot {
    let order = arena.descendants(root);
    let record_ids: HashMap<NodeId, u64> = order
        .iter()
        .enumerate()
        .map(|(i, id)| (*id, i as u64))
        .collect();

    let nodes = order
        .iter()
        .enumerate()
        .map(|(i, &id)| {
            let node = &arena[id];
            let parent = if id == root {
                None
            } else {
                node.parent.and_then(|p| record_ids.get(&p).copied())
            };
            encode_node(i as u64, parent, node)
        })
        .collect();

    Snapshot {
        version: SNAPSHOT_VERSION,
        cwd: cwd.to_string(),
        nodes,
    }
}

fn encode_metadata(metadata: &NodeMetadata) -> SnapshotMetadata {
    SnapshotMetadata {
        created_at: metadata.created_at,
        modified_at: metadata.modified_at,
        size: metadata.size,
    }
}

fn encode_node(id: u64, parent: Option<u64>, node: &Node) -> SnapshotRecord {
    let metadata = encode_metadata(&node.metadata);
    match &node.kind {
        NodeKind::Directory { .. } => SnapshotRecord::Directory {
            id,
            parent,
            name: node.name.clone(),
            metadata,
        },
        NodeKind::File { content, file_type } => SnapshotRecord::File {
            id,
            parent,
            name: node.name.clone(),
            file_type: file_type.clone(),
            content: content.clone(),
            metadata,
        },
    }
}

/// Rebuild a live tree from a snapshot.
///
/// Returns the new arena and the root id. Fails with `StorageError::Corrupt`
/// when the first record is not a parentless directory, a record names a
/// parent that is missing, later in the list, or a file, or a directory would
/// hold an invalid or duplicate name.
pub fn decode(snapshot: &Snapshot) -> Result<(NodeArena, NodeId), StorageError> {
    let mut records = snapshot.nodes.iter();
    let root_record = records
        .next()
        .ok_or_else(|| StorageError::Corrupt("snapshot holds no root".to_string()))?;
    if !root_record.is_directory() || root_record.parent().is_some() {
        return Err(StorageError::Corrupt(format!(
            "snapshot root '{}' must be a directory without a parent",
            root_record.name()
        )));
    }

    let mut arena = NodeArena::new();
    // Root is always named "/" regardless of what was stored.
    let root = arena.insert(decode_node("/", root_record));
    let mut ids = HashMap::from([(root_record.id(), root)]);

    for record in records {
        let name = record.name();
        let parent_id = record.parent().ok_or_else(|| {
            StorageError::Corrupt(format!("entry '{}' has no parent", name))
        })?;
        let parent = *ids.get(&parent_id).ok_or_else(|| {
            StorageError::Corrupt(format!(
                "entry '{}' refers to unknown parent {}",
                name, parent_id
            ))
        })?;
        if !arena[parent].is_directory() {
            return Err(StorageError::Corrupt(format!(
                "entry '{}' is placed under file {}",
                name,
                arena.path_of(parent)
            )));
        }
        if name.is_empty() || name.contains('/') || name == "." || name == ".." {
            return Err(StorageError::Corrupt(format!(
                "invalid entry name {:?} in {}",
                name,
                arena.path_of(parent)
            )));
        }
        if arena[parent].child(name).is_some() {
            return Err(StorageError::Corrupt(format!(
                "duplicate entry '{}' in {}",
                name,
                arena.path_of(parent)
            )));
        }
        if ids.contains_key(&record.id()) {
            return Err(StorageError::Corrupt(format!(
                "duplicate record id {}",
                record.id()
            )));
        }

        let id = arena.insert(decode_node(name, record));
        arena.attach(parent, id);
        ids.insert(record.id(), id);
    }
    Ok((arena, root))
}

fn decode_node(name: &str, record: &SnapshotRecord) -> Node {
    match record {
        SnapshotRecord::File {
            file_type,
            content,
            metadata,
            ..
        } => Node {
            name: name.to_string(),
            kind: NodeKind::File {
                content: content.clone(),
                file_type: file_type.clone(),
            },
            metadata: NodeMetadata {
                created_at: metadata.created_at,
                modified_at: metadata.modified_at,
                size: content.len() as u64,
            },
            parent: None,
        },
        SnapshotRecord::Directory { metadata, .. } => {
            let mut node = Node::directory(name);
            node.metadata = NodeMetadata {
                created_at: metadata.created_at,
                modified_at: metadata.modified_at,
                size: 0,
            };
            node
        }
    }
}

//! Listing and info records returned to consumers.

use crate::tree::{FileType, Node, NodeKind};
use crate::types::Timestamp;
use serde::Serialize;
use std::fmt;

/// Entry kind as shown to consumers: directories, or the concrete file type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum EntryKind {
    Directory,
    File(FileType),
}

impl EntryKind {
    pub fn of(node: &Node) -> Self {
        match &node.kind {
            NodeKind::Directory { .. } => EntryKind::Directory,
            NodeKind::File { file_type, .. } => EntryKind::File(file_type.clone()),
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, EntryKind::Directory)
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Directory => f.write_str("directory"),
            EntryKind::File(file_type) => f.write_str(file_type.as_str()),
        }
    }
}

impl From<EntryKind> for String {
    fn from(kind: EntryKind) -> Self {
        kind.to_string()
    }
}

/// One row of `ls`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub size: u64,
    pub modified_at: Timestamp,
}

impl DirEntry {
    pub(crate) fn of(node: &Node) -> Self {
        Self {
            name: node.name.clone(),
            kind: EntryKind::of(node),
            size: node.metadata.size,
            modified_at: node.metadata.modified_at,
        }
    }
}

/// Result of `get_file_info`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub size: u64,
    pub created_at: Timestamp,
    pub modified_at: Timestamp,
}

impl FileInfo {
    pub(crate) fn of(node: &Node) -> Self {
        Self {
            name: node.name.clone(),
            kind: EntryKind::of(node),
            size: node.metadata.size,
            created_at: node.metadata.created_at,
            modified_at: node.metadata.modified_at,
        }
    }
}

/// Nested view of a subtree, for explorer tree panes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeEntry>,
}

//! Filesystem node types

use crate::types::{now, NodeId, Timestamp};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Descriptive file tag used for display only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FileType {
    #[default]
    Text,
    Image,
    Audio,
    Video,
    Pdf,
    Spreadsheet,
    Presentation,
    Archive,
    Code,
    Other(String),
}

impl FileType {
    pub fn as_str(&self) -> &str {
        match self {
            FileType::Text => "text",
            FileType::Image => "image",
            FileType::Audio => "audio",
            FileType::Video => "video",
            FileType::Pdf => "pdf",
            FileType::Spreadsheet => "spreadsheet",
            FileType::Presentation => "presentation",
            FileType::Archive => "archive",
            FileType::Code => "code",
            FileType::Other(tag) => tag,
        }
    }

    /// Guess a tag from the file name extension, falling back to text.
    pub fn from_file_name(name: &str) -> Self {
        let ext = match name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => ext.to_ascii_lowercase(),
            _ => return FileType::Text,
        };
        match ext.as_str() {
            "png" | "jpg" | "jpeg" | "gif" | "bmp" | "svg" | "webp" => FileType::Image,
            "mp3" | "wav" | "ogg" | "flac" | "m4a" => FileType::Audio,
            "mp4" | "mov" | "mkv" | "webm" | "avi" => FileType::Video,
            "pdf" => FileType::Pdf,
            "xls" | "xlsx" | "csv" | "ods" => FileType::Spreadsheet,
            "ppt" | "pptx" | "key" | "odp" => FileType::Presentation,
            "zip" | "tar" | "gz" | "tgz" | "7z" | "rar" => FileType::Archive,
            "rs" | "js" | "jsx" | "ts" | "tsx" | "py" | "go" | "c" | "h" | "cpp" | "java"
            | "html" | "css" | "json" | "toml" | "yaml" | "yml" | "sh" => FileType::Code,
            _ => FileType::Text,
        }
    }
}

impl From<String> for FileType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "text" => FileType::Text,
            "image" => FileType::Image,
            "audio" => FileType::Audio,
            "video" => FileType::Video,
            "pdf" => FileType::Pdf,
            "spreadsheet" => FileType::Spreadsheet,
            "presentation" => FileType::Presentation,
            "archive" => FileType::Archive,
            "code" => FileType::Code,
            _ => FileType::Other(tag),
        }
    }
}

impl From<&str> for FileType {
    fn from(tag: &str) -> Self {
        FileType::from(tag.to_string())
    }
}

impl From<FileType> for String {
    fn from(file_type: FileType) -> Self {
        file_type.as_str().to_string()
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Node metadata; `size` is always 0 for directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeMetadata {
    pub created_at: Timestamp,
    pub modified_at: Timestamp,
    pub size: u64,
}

impl NodeMetadata {
    pub fn fresh() -> Self {
        let stamp = now();
        Self {
            created_at: stamp,
            modified_at: stamp,
            size: 0,
        }
    }
}

/// Node payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Children in insertion order; names are unique.
    Directory { children: Vec<(String, NodeId)> },
    File { content: String, file_type: FileType },
}

/// A single entry of the tree, stored in a `NodeArena`.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) name: String,
    pub(crate) kind: NodeKind,
    pub(crate) metadata: NodeMetadata,
    pub(crate) parent: Option<NodeId>,
}

impl Node {
    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Directory {
                children: Vec::new(),
            },
            metadata: NodeMetadata::fresh(),
            parent: None,
        }
    }

    pub fn file(name: impl Into<String>, file_type: FileType) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::File {
                content: String::new(),
                file_type,
            },
            metadata: NodeMetadata::fresh(),
            parent: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn metadata(&self) -> &NodeMetadata {
        &self.metadata
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn is_directory(&self) -> bool {
        matches!(self.kind, NodeKind::Directory { .. })
    }

    pub fn is_file(&self) -> bool {
        matches!(self.kind, NodeKind::File { .. })
    }

    /// Children of a directory, `None` for files
    pub fn children(&self) -> Option<&[(String, NodeId)]> {
        match &self.kind {
            NodeKind::Directory { children } => Some(children),
            NodeKind::File { .. } => None,
        }
    }

    /// Look up a direct child by name
    pub fn child(&self, name: &str) -> Option<NodeId> {
        self.children()?
            .iter()
            .find(|(child_name, _)| child_name == name)
            .map(|(_, id)| *id)
    }

    pub fn content(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::File { content, .. } => Some(content),
            NodeKind::Directory { .. } => None,
        }
    }

    pub fn file_type(&self) -> Option<&FileType> {
        match &self.kind {
            NodeKind::File { file_type, .. } => Some(file_type),
            NodeKind::Directory { .. } => None,
        }
    }

    /// Replace file content, recompute size and refresh `modified_at`.
    ///
    /// Returns false (and changes nothing) on directories.
    pub(crate) fn write_content(&mut self, new_content: String) -> bool {
        match &mut self.kind {
            NodeKind::File { content, .. } => {
                self.metadata.size = new_content.len() as u64;
                *content = new_content;
                self.metadata.modified_at = now();
                true
            }
            NodeKind::Directory { .. } => false,
        }
    }
}

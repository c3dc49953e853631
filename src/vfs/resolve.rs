//! Path resolution against the tree.

use super::FileSystem;
use crate::error::VfsError;
use crate::tree::{Segment, VfsPath};
use crate::types::NodeId;

impl FileSystem {
    /// Resolve `path` to a node id without creating anything.
    ///
    /// Absolute paths start at the root, relative ones at the working
    /// directory. `..` at the root stays at the root.
    pub fn resolve(&self, path: &str) -> Result<NodeId, VfsError> {
        self.resolve_parsed(&VfsPath::parse(path))
    }

    pub(crate) fn start_of(&self, path: &VfsPath<'_>) -> NodeId {
        if path.is_absolute() {
            self.root
        } else {
            self.cwd
        }
    }

    pub(crate) fn resolve_parsed(&self, path: &VfsPath<'_>) -> Result<NodeId, VfsError> {
        let mut current = self.start_of(path);
        for segment in path.segments() {
            match segment {
                Segment::Current => {}
                Segment::Parent => {
                    current = self.arena[current].parent().unwrap_or(current);
                }
                Segment::Name(name) => {
                    let node = &self.arena[current];
                    if !node.is_directory() {
                        return Err(VfsError::NotADirectory(path.raw().to_string()));
                    }
                    current = node
                        .child(name)
                        .ok_or_else(|| VfsError::PathNotFound(path.raw().to_string()))?;
                }
            }
        }
        Ok(current)
    }

    /// Resolve a path that must name a directory.
    pub(crate) fn resolve_dir(&self, path: &VfsPath<'_>) -> Result<NodeId, VfsError> {
        let id = self.resolve_parsed(path)?;
        if self.arena[id].is_directory() {
            Ok(id)
        } else {
            Err(VfsError::NotADirectory(path.raw().to_string()))
        }
    }

    /// Split `raw` into its containing directory and final entry name.
    ///
    /// The directory must already exist. The final segment must be a real
    /// name: `.`, `..` and segment-less paths such as `/` are rejected.
    pub(crate) fn resolve_target<'p>(&self, raw: &'p str) -> Result<(NodeId, &'p str), VfsError> {
        let parsed = VfsPath::parse(raw);
        let (parent, last) = match parsed.split_last() {
            Some(split) => split,
            None if parsed.is_absolute() => {
                return Err(VfsError::invalid_target(
                    raw,
                    "the root directory cannot be used here",
                ))
            }
            None => return Err(VfsError::invalid_target(raw, "path names no entry")),
        };
        let name = match last {
            Segment::Name(name) => name,
            Segment::Current | Segment::Parent => {
                return Err(VfsError::invalid_target(
                    raw,
                    "'.' and '..' cannot be used as entry names",
                ))
            }
        };
        let dir = self.resolve_dir(&parent)?;
        Ok((dir, name))
    }
}

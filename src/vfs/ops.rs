//! Mutating operations: mkdir, touch, update, rm, mv.
//!
//! Each operation runs all of its checks before touching the arena, so a
//! failure never leaves a half-applied change behind.

use super::FileSystem;
use crate::error::VfsError;
use crate::tree::{FileType, Node, Segment, VfsPath};
use tracing::debug;

impl FileSystem {
    /// Create every missing directory along `path`.
    ///
    /// Existing directories are reused, so repeating the call is a no-op.
    /// `.` and `..` navigate instead of creating entries.
    pub fn mkdir(&mut self, path: &str) -> Result<String, VfsError> {
        let parsed = VfsPath::parse(path);
        let mut current = self.start_of(&parsed);
        let mut missing: Vec<&str> = Vec::new();

        for &segment in parsed.segments() {
            if !missing.is_empty() {
                match segment {
                    Segment::Current => {}
                    Segment::Parent => {
                        missing.pop();
                    }
                    Segment::Name(name) => missing.push(name),
                }
                continue;
            }
            match segment {
                Segment::Current => {}
                Segment::Parent => {
                    current = self.arena[current].parent().unwrap_or(current);
                }
                Segment::Name(name) => match self.arena[current].child(name) {
                    Some(child) if self.arena[child].is_directory() => current = child,
                    Some(child) => {
                        return Err(VfsError::NotADirectory(self.arena.path_of(child)));
                    }
                    None => missing.push(name),
                },
            }
        }

        if !missing.is_empty() {
            for name in &missing {
                let dir = self.arena.insert(Node::directory(*name));
                self.arena.attach(current, dir);
                current = dir;
            }
            debug!(path, created = missing.len(), "mkdir");
            self.persist();
        }
        Ok(format!("Directory created: {}", path))
    }

    /// Create an empty text file.
    pub fn touch(&mut self, path: &str) -> Result<String, VfsError> {
        self.touch_with_type(path, FileType::Text)
    }

    /// Create an empty file with the given type tag.
    ///
    /// An existing entry with the same name is left alone and reported in the
    /// returned message rather than as an error.
    pub fn touch_with_type(&mut self, path: &str, file_type: FileType) -> Result<String, VfsError> {
        let (dir, name) = self.resolve_target(path)?;
        if self.arena[dir].child(name).is_some() {
            return Ok(format!("File already exists: {}", path));
        }
        let file = self.arena.insert(Node::file(name, file_type));
        self.arena.attach(dir, file);
        debug!(path, "touch");
        self.persist();
        Ok(format!("File created: {}", path))
    }

    /// Replace a file's content.
    pub fn update_file(&mut self, path: &str, content: impl Into<String>) -> Result<String, VfsError> {
        let id = self.resolve(path)?;
        if !self.arena[id].write_content(content.into()) {
            return Err(VfsError::CannotModifyDirectory(path.to_string()));
        }
        debug!(path, size = self.arena[id].metadata().size, "update_file");
        self.persist();
        Ok(format!("File updated: {}", path))
    }

    /// Remove an entry together with its whole subtree.
    ///
    /// If the working directory sits inside the removed subtree it moves to
    /// the removed entry's parent.
    pub fn rm(&mut self, path: &str) -> Result<String, VfsError> {
        let (dir, name) = self.resolve_target(path)?;
        let target = self.arena[dir]
            .child(name)
            .ok_or_else(|| VfsError::NoSuchEntry(path.to_string()))?;

        if self.arena.is_ancestor_or_self(target, self.cwd) {
            self.cwd = dir;
        }
        self.arena.detach(dir, name);
        let released = self.arena.discard(target);
        debug!(path, released, "rm");
        self.persist();
        Ok(format!("Removed: {}", path))
    }

    /// Move (and possibly rename) an entry.
    ///
    /// The destination's directory must exist and must not already hold an
    /// entry with the destination name. A directory cannot be moved into
    /// itself or one of its descendants.
    pub fn mv(&mut self, source: &str, dest: &str) -> Result<String, VfsError> {
        let (source_dir, source_name) = self.resolve_target(source)?;
        let node = self.arena[source_dir]
            .child(source_name)
            .ok_or_else(|| VfsError::NoSuchEntry(source.to_string()))?;

        let (dest_dir, dest_name) = self.resolve_target(dest)?;
        if self.arena[dest_dir].child(dest_name).is_some() {
            return Err(VfsError::DestinationExists(dest.to_string()));
        }
        if self.arena.is_ancestor_or_self(node, dest_dir) {
            return Err(VfsError::invalid_target(
                dest,
                "cannot move a directory into itself",
            ));
        }

        self.arena.detach(source_dir, source_name);
        self.arena[node].name = dest_name.to_string();
        self.arena.attach(dest_dir, node);
        debug!(source, dest, "mv");
        self.persist();
        Ok(format!("Moved {} to {}", source, dest))
    }
}

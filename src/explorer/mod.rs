//! File manager
//!
//! Directory browser over the shared file system: a current location with
//! back/forward history, a selection, and create/delete actions. It holds
//! paths, not node ids, so it re-queries on every refresh and notices changes
//! made by other consumers.

pub mod format;

use crate::error::VfsError;
use crate::session::SharedFileSystem;
use crate::tree::path::{join, parent_of};
use crate::tree::FileType;
use crate::vfs::{DirEntry, TreeEntry};
use tracing::debug;

/// What `open` did with an entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Opened {
    Directory(String),
    /// The file became the selection; payload is its absolute path
    File(String),
}

pub struct FileManager {
    fs: SharedFileSystem,
    current: String,
    history: Vec<String>,
    history_index: usize,
    selected: Option<String>,
}

impl FileManager {
    pub fn new(fs: SharedFileSystem) -> Self {
        Self {
            fs,
            current: "/".to_string(),
            history: vec!["/".to_string()],
            history_index: 0,
            selected: None,
        }
    }

    pub fn current_path(&self) -> &str {
        &self.current
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Entries of the current directory
    pub fn entries(&self) -> Result<Vec<DirEntry>, VfsError> {
        self.fs.read().ls(&self.current)
    }

    /// Re-list, stepping up to the nearest surviving ancestor if the current
    /// directory was removed or moved elsewhere.
    pub fn refresh(&mut self) -> Result<Vec<DirEntry>, VfsError> {
        let fs = self.fs.read();
        while !self.current_is_directory(&fs) {
            self.current = parent_of(&self.current);
        }
        if let Some(name) = &self.selected {
            if !fs.exists(&join(&self.current, name)) {
                self.selected = None;
            }
        }
        fs.ls(&self.current)
    }

    fn current_is_directory(&self, fs: &crate::vfs::FileSystem) -> bool {
        self.current == "/" || fs.ls(&self.current).is_ok()
    }

    /// Go to a directory, dropping any forward history.
    pub fn navigate_to(&mut self, path: &str) -> Result<(), VfsError> {
        let absolute = {
            let fs = self.fs.read();
            let target = if path.starts_with('/') {
                path.to_string()
            } else {
                join(&self.current, path)
            };
            fs.ls(&target)?;
            fs.absolute_path(&target)?
        };
        self.history.truncate(self.history_index + 1);
        self.history.push(absolute.clone());
        self.history_index = self.history.len() - 1;
        self.current = absolute;
        self.selected = None;
        debug!(path = %self.current, "file manager navigate");
        Ok(())
    }

    /// Enter a directory or select a file in the current directory.
    pub fn open(&mut self, name: &str) -> Result<Opened, VfsError> {
        let path = join(&self.current, name);
        let info = self.fs.read().get_file_info(&path)?;
        if info.kind.is_directory() {
            self.navigate_to(&path)?;
            Ok(Opened::Directory(self.current.clone()))
        } else {
            self.selected = Some(name.to_string());
            Ok(Opened::File(path))
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.history_index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.history_index + 1 < self.history.len()
    }

    pub fn can_go_up(&self) -> bool {
        self.current != "/"
    }

    pub fn back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.history_index -= 1;
        self.current = self.history[self.history_index].clone();
        self.selected = None;
        true
    }

    pub fn forward(&mut self) -> bool {
        if !self.can_go_forward() {
            return false;
        }
        self.history_index += 1;
        self.current = self.history[self.history_index].clone();
        self.selected = None;
        true
    }

    /// Go to the parent directory, recorded as a new history entry.
    pub fn up(&mut self) -> Result<bool, VfsError> {
        if !self.can_go_up() {
            return Ok(false);
        }
        let parent = parent_of(&self.current);
        self.navigate_to(&parent)?;
        Ok(true)
    }

    /// Create an empty file here, typed from its extension.
    pub fn new_file(&mut self, name: &str) -> Result<String, VfsError> {
        let path = self.child_path(name)?;
        self.fs
            .write()
            .touch_with_type(&path, FileType::from_file_name(name))
    }

    pub fn new_folder(&mut self, name: &str) -> Result<String, VfsError> {
        let path = self.child_path(name)?;
        self.fs.write().mkdir(&path)
    }

    /// Delete the selection once the caller has confirmed it.
    ///
    /// Returns `Ok(None)` when nothing is selected or `confirmed` is false.
    pub fn delete_selected(&mut self, confirmed: bool) -> Result<Option<String>, VfsError> {
        let Some(name) = self.selected.clone() else {
            return Ok(None);
        };
        if !confirmed {
            return Ok(None);
        }
        let message = self.fs.write().rm(&join(&self.current, &name))?;
        self.selected = None;
        Ok(Some(message))
    }

    /// Whole tree from the root, for the sidebar
    pub fn tree(&self) -> Result<TreeEntry, VfsError> {
        self.fs.read().tree("/")
    }

    fn child_path(&self, name: &str) -> Result<String, VfsError> {
        let name = name.trim();
        if name.is_empty() || name.contains('/') || name == "." || name == ".." {
            return Err(VfsError::InvalidTarget {
                path: name.to_string(),
                reason: "entry names must be non-empty and contain no '/'".to_string(),
            });
        }
        Ok(join(&self.current, name))
    }
}

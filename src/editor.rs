//! Editor buffer
//!
//! Holds an open file's text while it is being edited. Opening reads through
//! `cat`; saving writes through `update_file`.

use crate::error::VfsError;
use crate::session::SharedFileSystem;
use crate::tree::FileType;
use crate::vfs::EntryKind;

pub struct EditorBuffer {
    fs: SharedFileSystem,
    path: String,
    file_type: FileType,
    text: String,
    dirty: bool,
}

impl EditorBuffer {
    pub fn open(fs: SharedFileSystem, path: &str) -> Result<Self, VfsError> {
        let (path, text, file_type) = {
            let guard = fs.read();
            let text = guard.cat(path)?;
            let file_type = match guard.get_file_info(path)?.kind {
                EntryKind::File(file_type) => file_type,
                EntryKind::Directory => return Err(VfsError::IsADirectory(path.to_string())),
            };
            (guard.absolute_path(path)?, text, file_type)
        };
        Ok(Self {
            fs,
            path,
            file_type,
            text,
            dirty: false,
        })
    }

    /// Absolute path of the open file
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn file_type(&self) -> &FileType {
        &self.file_type
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.dirty = true;
    }

    /// Write the buffer back to the file.
    pub fn save(&mut self) -> Result<String, VfsError> {
        let message = self.fs.write().update_file(&self.path, self.text.clone())?;
        self.dirty = false;
        Ok(message)
    }

    /// Discard local edits and re-read the file.
    pub fn reload(&mut self) -> Result<(), VfsError> {
        self.text = self.fs.read().cat(&self.path)?;
        self.dirty = false;
        Ok(())
    }
}

//! deskfs: Virtual Desktop File System
//!
//! An in-memory hierarchical file system shared by a terminal shell, a file
//! manager and an editor, snapshotted to a durable key-value store after every
//! change so a session survives restarts.

pub mod config;
pub mod editor;
pub mod error;
pub mod explorer;
pub mod logging;
pub mod session;
pub mod shell;
pub mod snapshot;
pub mod store;
pub mod tooling;
pub mod tree;
pub mod types;
pub mod vfs;

pub use error::{ApiError, StorageError, VfsError};
pub use session::{Session, SharedFileSystem};
pub use vfs::FileSystem;

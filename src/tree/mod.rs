//! Node tree
//!
//! Arena-backed storage for the virtual file system: node types, the arena
//! that owns them, and path parsing.

pub mod arena;
pub mod node;
pub mod path;

pub use arena::NodeArena;
pub use node::{FileType, Node, NodeKind, NodeMetadata};
pub use path::{Segment, VfsPath};

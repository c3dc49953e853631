//! Core types for the deskfs virtual file system.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Timestamp attached to node metadata.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// NodeId: stable handle of a node inside a `NodeArena`.
///
/// Ids are only meaningful for the arena that issued them. Slots of discarded
/// nodes are recycled, so an id held across an `rm` may point at a new node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Raw slot index
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Current time for metadata stamps.
pub fn now() -> Timestamp {
    chrono::Utc::now()
}

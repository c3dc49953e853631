//! Arena allocation for tree nodes
//!
//! Nodes live in a slot vector and reference each other by `NodeId`. A
//! directory stores its children's ids, a child stores its parent's id, so the
//! back-reference never owns anything. Removing a subtree frees its slots for
//! reuse.

use crate::tree::node::{Node, NodeKind};
use crate::types::NodeId;
use std::ops::{Index, IndexMut};

#[derive(Debug, Clone, Default)]
pub struct NodeArena {
    slots: Vec<Option<Node>>,
    free: Vec<usize>,
    live: usize,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a detached node and return its id
    pub fn insert(&mut self, node: Node) -> NodeId {
        self.live += 1;
        match self.free.pop() {
            Some(index) => {
                self.slots[index] = Some(node);
                NodeId(index)
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.slots.get_mut(id.0).and_then(Option::as_mut)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Number of live nodes
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Attach `child` under directory `parent`.
    ///
    /// Returns false without touching either node when `parent` is not a
    /// directory or already holds a child with the same name.
    pub fn attach(&mut self, parent: NodeId, child: NodeId) -> bool {
        let name = match self.get(child) {
            Some(node) => node.name.clone(),
            None => return false,
        };
        match self.get_mut(parent).map(|p| &mut p.kind) {
            Some(NodeKind::Directory { children }) => {
                if children.iter().any(|(n, _)| *n == name) {
                    return false;
                }
                children.push((name, child));
            }
            _ => return false,
        }
        self[child].parent = Some(parent);
        true
    }

    /// Unlink the child called `name` from `parent`, keeping it in the arena.
    pub fn detach(&mut self, parent: NodeId, name: &str) -> Option<NodeId> {
        let children = match self.get_mut(parent).map(|p| &mut p.kind) {
            Some(NodeKind::Directory { children }) => children,
            _ => return None,
        };
        let position = children.iter().position(|(n, _)| n == name)?;
        let (_, id) = children.remove(position);
        if let Some(node) = self.get_mut(id) {
            node.parent = None;
        }
        Some(id)
    }

    /// Drop a detached node and every descendant, freeing their slots.
    ///
    /// Returns the number of nodes released.
    pub fn discard(&mut self, id: NodeId) -> usize {
        let mut pending = vec![id];
        let mut released = 0;
        while let Some(current) = pending.pop() {
            let Some(node) = self.slots.get_mut(current.0).and_then(Option::take) else {
                continue;
            };
            if let NodeKind::Directory { children } = node.kind {
                pending.extend(children.into_iter().map(|(_, child)| child));
            }
            self.free.push(current.0);
            self.live -= 1;
            released += 1;
        }
        released
    }

    /// True when `ancestor` is `node` or lies on its parent chain
    pub fn is_ancestor_or_self(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.get(id).and_then(Node::parent);
        }
        false
    }

    /// Absolute path of a node, computed from parent links.
    pub fn path_of(&self, id: NodeId) -> String {
        let mut names = Vec::new();
        let mut current = self.get(id);
        while let Some(node) = current {
            match node.parent {
                Some(parent) => {
                    names.push(node.name.as_str());
                    current = self.get(parent);
                }
                None => break,
            }
        }
        names.reverse();
        format!("/{}", names.join("/"))
    }

    /// Ids of `id` and all its descendants in pre-order
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut pending = vec![id];
        while let Some(current) = pending.pop() {
            let Some(node) = self.get(current) else {
                continue;
            };
            out.push(current);
            if let Some(children) = node.children() {
                pending.extend(children.iter().rev().map(|(_, child)| *child));
            }
        }
        out
    }
}

impl Index<NodeId> for NodeArena {
    type Output = Node;

    /// Panics on a stale id; holding one is a bug in the caller.
    fn index(&self, id: NodeId) -> &Node {
        match self.get(id) {
            Some(node) => node,
            None => panic!("stale node id {}", id),
        }
    }
}

impl IndexMut<NodeId> for NodeArena {
    fn index_mut(&mut self, id: NodeId) -> &mut Node {
        match self.get_mut(id) {
            Some(node) => node,
            None => panic!("stale node id {}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::node::FileType;

    fn sample() -> (NodeArena, NodeId, NodeId, NodeId) {
        let mut arena = NodeArena::new();
        let root = arena.insert(Node::directory("/"));
        let docs = arena.insert(Node::directory("docs"));
        let note = arena.insert(Node::file("note.txt", FileType::Text));
        assert!(arena.attach(root, docs));
        assert!(arena.attach(docs, note));
        (arena, root, docs, note)
    }

    #[test]
    fn test_attach_sets_parent_and_rejects_duplicates() {
        let (mut arena, root, docs, _) = sample();
        assert_eq!(arena[docs].parent(), Some(root));
        let dup = arena.insert(Node::directory("docs"));
        assert!(!arena.attach(root, dup));
        assert_eq!(arena[dup].parent(), None);
        assert_eq!(arena[root].children().map(|c| c.len()), Some(1));
    }

    #[test]
    fn test_attach_under_file_fails() {
        let (mut arena, _, _, note) = sample();
        let orphan = arena.insert(Node::directory("x"));
        assert!(!arena.attach(note, orphan));
    }

    #[test]
    fn test_path_of() {
        let (arena, root, docs, note) = sample();
        assert_eq!(arena.path_of(root), "/");
        assert_eq!(arena.path_of(docs), "/docs");
        assert_eq!(arena.path_of(note), "/docs/note.txt");
    }

    #[test]
    fn test_detach_and_discard_frees_subtree() {
        let (mut arena, root, docs, note) = sample();
        assert_eq!(arena.len(), 3);
        let removed = arena.detach(root, "docs").unwrap();
        assert_eq!(removed, docs);
        assert_eq!(arena.discard(removed), 2);
        assert_eq!(arena.len(), 1);
        assert!(!arena.contains(note));

        let reused = arena.insert(Node::directory("again"));
        assert!(reused == docs || reused == note);
    }

    #[test]
    fn test_is_ancestor_or_self() {
        let (arena, root, docs, note) = sample();
        assert!(arena.is_ancestor_or_self(root, note));
        assert!(arena.is_ancestor_or_self(docs, docs));
        assert!(!arena.is_ancestor_or_self(note, docs));
    }

    #[test]
    fn test_descendants_preorder() {
        let (mut arena, root, docs, note) = sample();
        let pics = arena.insert(Node::directory("pics"));
        arena.attach(root, pics);
        assert_eq!(arena.descendants(root), vec![root, docs, note, pics]);
    }
}

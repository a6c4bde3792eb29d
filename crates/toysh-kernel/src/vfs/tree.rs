//! In-memory filesystem tree.
//!
//! Nodes live in an arena and refer to each other by [`NodeId`]. The tree
//! owns every node; callers resolve a working path to a directory id and
//! then read or mutate through the tree. Removed slots are vacated and
//! never reused, so an old id can't alias a newer node.

use super::error::VfsError;
use super::node::{Node, NodeId, NodeKind};
use super::working_path::{ROOT_MARKER, WorkingPath};

/// How [`Tree::resolve`] treats a path segment with no matching directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolveMode {
    /// Skip the segment and stay at the last level that did resolve.
    #[default]
    Lenient,
    /// Fail with [`VfsError::PathNotFound`].
    Strict,
}

/// The filesystem: an arena of nodes under a hidden root directory.
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<Option<Node>>,
    root: NodeId,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Tree {
    /// Create an empty tree containing only the root directory.
    pub fn new() -> Self {
        Self {
            nodes: vec![Some(Node::directory(ROOT_MARKER))],
            root: NodeId(0),
        }
    }

    /// Create a tree with the demo layout:
    ///
    /// ```text
    /// /
    /// ├── tmp/
    /// │   ├── file.txt
    /// │   └── file2.txt
    /// ├── sys/
    /// ├── usr/
    /// │   └── bin/
    /// └── log.txt
    /// ```
    pub fn populate_demo() -> Self {
        let mut tree = Self::new();
        let root = tree.root;

        let tmp = tree.attach(root, Node::directory("tmp"));
        tree.attach(tmp, Node::file("file.txt"));
        tree.attach(tmp, Node::file("file2.txt"));

        tree.attach(root, Node::directory("sys"));

        let usr = tree.attach(root, Node::directory("usr"));
        tree.attach(usr, Node::directory("bin"));

        tree.attach(root, Node::file("log.txt"));
        tree
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0).and_then(Option::as_mut)
    }

    /// Number of live nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|slot| slot.is_some()).count()
    }

    /// True when only the root is left.
    pub fn is_empty(&self) -> bool {
        self.len() == 1
    }

    /// Append `node` to the children of `parent`.
    ///
    /// Fails if `parent` is not a directory, or if it already has a child
    /// with the same name.
    pub fn add_child(&mut self, parent: NodeId, node: Node) -> Result<NodeId, VfsError> {
        let parent_node = self.get(parent).ok_or(VfsError::NotFound)?;
        if !parent_node.is_dir() {
            return Err(VfsError::InvalidOperation(parent_node.name().to_string()));
        }
        if self.find_child(parent, node.name(), None).is_some() {
            return Err(VfsError::AlreadyExists(node.name().to_string()));
        }
        Ok(self.attach(parent, node))
    }

    /// Push `node` into the arena and link it under `parent`, unchecked.
    /// Callers guarantee `parent` is a live directory with no sibling of
    /// the same name.
    fn attach(&mut self, parent: NodeId, mut node: Node) -> NodeId {
        // A node cloned out of a tree still carries its old child ids.
        node.children.clear();

        let id = NodeId(self.nodes.len());
        tracing::debug!(parent = ?parent, name = node.name(), kind = ?node.kind(), "add node");
        self.nodes.push(Some(node));
        if let Some(parent_node) = self.get_mut(parent) {
            parent_node.children.push(id);
        }
        id
    }

    pub fn add_at_root(&mut self, node: Node) -> Result<NodeId, VfsError> {
        self.add_child(self.root, node)
    }

    /// Unlink `child` from `parent` and drop it along with its subtree.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<Node, VfsError> {
        let parent_node = self.get_mut(parent).ok_or(VfsError::NotFound)?;
        let pos = parent_node
            .children
            .iter()
            .position(|&id| id == child)
            .ok_or(VfsError::NotFound)?;
        parent_node.children.remove(pos);

        let removed = self.vacate(child).ok_or(VfsError::NotFound)?;
        tracing::debug!(parent = ?parent, name = removed.name(), "remove node");
        Ok(removed)
    }

    fn vacate(&mut self, id: NodeId) -> Option<Node> {
        let node = self.nodes.get_mut(id.0)?.take()?;
        for &child in &node.children {
            self.vacate(child);
        }
        Some(node)
    }

    /// First child of `dir` named `name`, optionally restricted to one kind.
    pub fn find_child(&self, dir: NodeId, name: &str, kind: Option<NodeKind>) -> Option<NodeId> {
        self.get(dir)?.children.iter().copied().find(|&id| {
            self.get(id)
                .is_some_and(|n| n.name() == name && kind.is_none_or(|k| n.kind() == k))
        })
    }

    /// Ordered children of `dir` (empty for files and dead ids).
    pub fn entries(&self, dir: NodeId) -> Vec<&Node> {
        self.get(dir)
            .map(|n| n.children.iter().filter_map(|&id| self.get(id)).collect())
            .unwrap_or_default()
    }

    /// Resolve a working path to the directory it names.
    ///
    /// Walks from the root, descending into the first child directory that
    /// matches each segment. What happens on a miss depends on `mode`.
    pub fn resolve(&self, path: &WorkingPath, mode: ResolveMode) -> Result<NodeId, VfsError> {
        let mut current = self.root;
        for name in path.names() {
            match self.find_child(current, name, Some(NodeKind::Directory)) {
                Some(next) => current = next,
                None => match mode {
                    ResolveMode::Lenient => {
                        tracing::debug!(segment = %name, path = %path, "unresolved segment skipped");
                    }
                    ResolveMode::Strict => return Err(VfsError::PathNotFound(path.to_string())),
                },
            }
        }
        Ok(current)
    }
}

//! Filesystem nodes and permission bits.

use std::fmt;

use bitflags::bitflags;

use super::error::VfsError;

bitflags! {
    /// Three-bit permission mask, `chmod` style.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Permission: u8 {
        const READ = 4;
        const WRITE = 2;
        const EXECUTE = 1;
    }
}

impl Permission {
    /// Parse a numeric mode, rejecting anything outside `0..=7`.
    pub fn from_mode(mode: i64) -> Result<Self, VfsError> {
        match u8::try_from(mode) {
            Ok(bits) if bits <= Self::all().bits() => Ok(Self::from_bits_truncate(bits)),
            _ => Err(VfsError::InvalidMode(mode)),
        }
    }

    /// Accept any mode and keep only the low three bits.
    pub fn from_mode_lenient(mode: i64) -> Self {
        Self::from_bits_truncate(mode as u8)
    }

    pub fn readable(self) -> bool {
        self.contains(Self::READ)
    }

    pub fn writable(self) -> bool {
        self.contains(Self::WRITE)
    }

    pub fn executable(self) -> bool {
        self.contains(Self::EXECUTE)
    }
}

impl fmt::Display for Permission {
    /// Renders as `rwx`, with `-` for each cleared bit.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flag = |set: bool, c: char| if set { c } else { '-' };
        write!(
            f,
            "{}{}{}",
            flag(self.readable(), 'r'),
            flag(self.writable(), 'w'),
            flag(self.executable(), 'x'),
        )
    }
}

/// Kind of node. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    File,
    Directory,
}

impl NodeKind {
    /// The leading character of an `ls -l` line.
    pub fn type_char(self) -> char {
        match self {
            NodeKind::Directory => 'd',
            NodeKind::File => '-',
        }
    }
}

/// Stable handle to a node in a [`Tree`](super::Tree) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

/// A file or directory entry.
///
/// Children are stored as ids into the owning tree's arena; a node built
/// with [`Node::file`] or [`Node::directory`] starts out detached and
/// childless, and only becomes part of a tree through
/// [`Tree::add_child`](super::Tree::add_child).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    name: String,
    kind: NodeKind,
    permission: Permission,
    pub(crate) children: Vec<NodeId>,
}

impl Node {
    /// Create a new, empty directory with no permission bits set.
    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Directory,
            permission: Permission::empty(),
            children: Vec::new(),
        }
    }

    /// Create a new file, readable and writable.
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::File,
            permission: Permission::READ | Permission::WRITE,
            children: Vec::new(),
        }
    }

    /// Builder-style permission override, handy for fixtures.
    pub fn with_permission(mut self, permission: Permission) -> Self {
        self.permission = permission;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn is_dir(&self) -> bool {
        self.kind == NodeKind::Directory
    }

    pub fn is_file(&self) -> bool {
        self.kind == NodeKind::File
    }

    pub fn permission(&self) -> Permission {
        self.permission
    }

    /// Replace the permission mask. Bits are not merged.
    pub fn set_permission(&mut self, permission: Permission) {
        self.permission = permission;
    }

    /// Ids of this node's children, in insertion order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// One `ls -l` line: type flag, rwx flags, a space, the name.
    pub fn long_listing(&self) -> String {
        format!("{}{} {}", self.kind.type_char(), self.permission, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[test]
    fn new_file_is_read_write() {
        let file = Node::file("file.txt");
        assert!(file.is_file());
        assert!(file.permission().readable());
        assert!(file.permission().writable());
        assert!(!file.permission().executable());
    }

    #[test]
    fn new_directory_has_no_bits() {
        let dir = Node::directory("tmp");
        assert!(dir.is_dir());
        assert_eq!(dir.permission(), Permission::empty());
        assert!(dir.children().is_empty());
    }

    #[test]
    fn set_permission_replaces_mask() {
        let mut file = Node::file("a");
        file.set_permission(Permission::EXECUTE);
        assert_eq!(file.permission(), Permission::EXECUTE);
        assert!(!file.permission().readable());
    }

    #[rstest]
    #[case(0, "---")]
    #[case(1, "--x")]
    #[case(4, "r--")]
    #[case(5, "r-x")]
    #[case(6, "rw-")]
    #[case(7, "rwx")]
    fn permission_display(#[case] mode: i64, #[case] expected: &str) {
        let perm = Permission::from_mode(mode).unwrap();
        assert_eq!(perm.to_string(), expected);
    }

    #[rstest]
    #[case(8)]
    #[case(9)]
    #[case(-1)]
    #[case(777)]
    fn from_mode_rejects_out_of_range(#[case] mode: i64) {
        assert_eq!(Permission::from_mode(mode), Err(VfsError::InvalidMode(mode)));
    }

    #[test]
    fn lenient_mode_keeps_low_bits() {
        assert_eq!(Permission::from_mode_lenient(9), Permission::EXECUTE);
        assert_eq!(Permission::from_mode_lenient(15), Permission::all());
        assert_eq!(Permission::from_mode_lenient(5), Permission::READ | Permission::EXECUTE);
    }

    #[test]
    fn long_listing_format() {
        assert_eq!(Node::file("file.txt").long_listing(), "-rw- file.txt");
        assert_eq!(Node::directory("tmp").long_listing(), "d--- tmp");
    }

    proptest! {
        #[test]
        fn permission_bits_are_independent(mode in 0i64..=7) {
            let perm = Permission::from_mode(mode).unwrap();
            prop_assert_eq!(perm.readable(), mode & 4 != 0);
            prop_assert_eq!(perm.writable(), mode & 2 != 0);
            prop_assert_eq!(perm.executable(), mode & 1 != 0);
        }
    }
}

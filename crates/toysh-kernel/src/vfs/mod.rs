//! Virtual filesystem for toysh.
//!
//! A single in-memory [`Tree`] of files and directories, created when the
//! kernel starts and dropped when it exits:
//!
//! ```text
//! Tree
//! ├── arena: Vec<Option<Node>>   # indexed by NodeId
//! └── root: NodeId               # hidden directory named "/"
//! ```
//!
//! The shell's location is a [`WorkingPath`]; commands call
//! [`Tree::resolve`] to turn it into the id of the current directory and
//! then read or mutate children through the tree.

mod error;
mod node;
mod tree;
mod working_path;

pub use error::VfsError;
pub use node::{Node, NodeId, NodeKind, Permission};
pub use tree::{ResolveMode, Tree};
pub use working_path::{ROOT_MARKER, WorkingPath};

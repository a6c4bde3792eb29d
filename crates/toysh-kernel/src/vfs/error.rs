//! VFS error type.

use thiserror::Error;

/// Errors raised by tree operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VfsError {
    /// Tried to add a child to something that is not a directory.
    #[error("not a directory: {0}")]
    InvalidOperation(String),

    /// A sibling with the same name already exists.
    #[error("already exists: {0}")]
    AlreadyExists(String),

    /// A node id that no longer refers to a live node.
    #[error("no such node")]
    NotFound,

    /// A working path segment with no matching directory (strict resolution only).
    #[error("no such file or directory: {0}")]
    PathNotFound(String),

    /// A permission mode outside `0..=7`.
    #[error("invalid mode: {0}")]
    InvalidMode(i64),
}

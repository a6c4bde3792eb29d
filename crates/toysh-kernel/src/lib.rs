//! toysh-kernel: the core of the toysh toy operating system shell.
//!
//! This crate provides:
//!
//! - **VFS**: An arena-backed in-memory tree of directories and files
//! - **Parser**: Splits a command line into program, options and params
//! - **Tools**: The builtin commands and the registry that dispatches them
//! - **Clock**: A simulated wall clock that `date` can move
//! - **Users**: The login table
//! - **Kernel**: Ties the above together into one session
//!
//! The interactive front end (boot screen, login prompt, line editing)
//! lives in `toysh-repl`.

pub mod clock;
pub mod kernel;
pub mod parser;
pub mod result;
pub mod tools;
pub mod users;
pub mod vfs;

pub use clock::SimClock;
pub use kernel::{Kernel, KernelConfig, ShellState};
pub use result::ExecResult;
pub use tools::{ExecContext, ModeCheck, Tool, ToolArgs, ToolRegistry};
pub use users::{AuthError, User, UserSpec};
pub use vfs::{NodeKind, Permission, ResolveMode, Tree, VfsError, WorkingPath};

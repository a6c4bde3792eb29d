//! Tool system for toysh.
//!
//! Every shell command is a tool: a type implementing [`Tool`] that reads
//! its parsed [`ToolArgs`] and works on the shared [`ExecContext`].
//!
//! # Architecture
//!
//! ```text
//! ToolRegistry
//! └── Builtins (ls, mkdir, rm, cd, chmod, date, clear, shutdown, help)
//! ```

mod builtin;
mod context;
mod registry;
mod traits;

pub use builtin::{CLEAR_SCREEN, register_builtins};
pub use context::{ExecContext, ExecOptions, ModeCheck};
pub use registry::ToolRegistry;
pub use traits::{Tool, ToolArgs, ToolSchema};

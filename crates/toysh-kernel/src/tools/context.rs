//! Execution context for tools.

use crate::clock::SimClock;
use crate::vfs::{NodeId, Permission, ResolveMode, Tree, VfsError, WorkingPath};

use super::traits::ToolSchema;

/// How `chmod` treats a mode outside `0..=7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModeCheck {
    /// Reject it.
    #[default]
    Strict,
    /// Keep the low three bits.
    Lenient,
}

impl ModeCheck {
    pub fn permission(self, mode: i64) -> Result<Permission, VfsError> {
        match self {
            ModeCheck::Strict => Permission::from_mode(mode),
            ModeCheck::Lenient => Ok(Permission::from_mode_lenient(mode)),
        }
    }
}

/// Behavior switches shared by every tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExecOptions {
    pub resolve_mode: ResolveMode,
    pub mode_check: ModeCheck,
}

/// Execution context passed to tools.
///
/// This is all of the shell's mutable state: the filesystem, where we are
/// in it, the simulated clock and the shutdown flag. The kernel owns one
/// and lends it out for each command.
#[derive(Debug)]
pub struct ExecContext {
    /// The filesystem.
    pub tree: Tree,
    /// Current working directory.
    pub cwd: WorkingPath,
    /// Simulated clock shown and set by `date`.
    pub clock: SimClock,
    /// Behavior switches.
    pub options: ExecOptions,
    /// Schemas of every registered tool, for `help`.
    tool_schemas: Vec<ToolSchema>,
    shutdown: bool,
}

impl ExecContext {
    /// Create a context at the root of `tree`.
    pub fn new(tree: Tree) -> Self {
        Self {
            tree,
            cwd: WorkingPath::root(),
            clock: SimClock::new(),
            options: ExecOptions::default(),
            tool_schemas: Vec::new(),
            shutdown: false,
        }
    }

    /// Create a context with specific options.
    pub fn with_options(tree: Tree, options: ExecOptions) -> Self {
        Self {
            options,
            ..Self::new(tree)
        }
    }

    /// Resolve the working directory to a node.
    pub fn current_dir(&self) -> Result<NodeId, VfsError> {
        self.tree.resolve(&self.cwd, self.options.resolve_mode)
    }

    /// Enter a child directory by name. Existence is the caller's check.
    pub fn go_into(&mut self, name: impl Into<String>) {
        self.cwd.push(name);
    }

    /// Leave the current directory. No-op at the root.
    pub fn go_back(&mut self) -> bool {
        self.cwd.pop()
    }

    /// Ask the kernel to stop after the current command.
    pub fn request_shutdown(&mut self) {
        self.shutdown = true;
    }

    pub fn shutdown_requested(&self) -> bool {
        self.shutdown
    }

    pub fn set_tool_schemas(&mut self, schemas: Vec<ToolSchema>) {
        self.tool_schemas = schemas;
    }

    pub fn tool_schemas(&self) -> &[ToolSchema] {
        &self.tool_schemas
    }
}

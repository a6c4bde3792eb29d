//! Tool registry: looks tools up by name and dispatches to them.

use std::collections::HashMap;
use std::sync::Arc;

use crate::result::{EXIT_NOT_FOUND, ExecResult};

use super::context::ExecContext;
use super::traits::{Tool, ToolArgs, ToolSchema};

/// Registry of available tools.
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool. A tool already registered under the same name is replaced.
    pub fn register(&mut self, tool: impl Tool + 'static) {
        self.register_arc(Arc::new(tool));
    }

    /// Register a tool that's already in an Arc.
    pub fn register_arc(&mut self, tool: Arc<dyn Tool>) {
        let name = tool.name().to_string();
        if self.tools.insert(name.clone(), tool).is_some() {
            tracing::debug!(%name, "tool replaced");
        }
    }

    /// Look up a tool by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// Check if a tool exists.
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// List all tool names.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.tools.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// List all tool schemas.
    pub fn schemas(&self) -> Vec<ToolSchema> {
        let mut schemas: Vec<_> = self.tools.values().map(|t| t.schema()).collect();
        schemas.sort_by(|a, b| a.name.cmp(&b.name));
        schemas
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Run the tool named by `args.program`.
    ///
    /// An unknown name yields exit code 127 and `command not found: <name>`.
    /// Nothing else is touched in that case.
    pub async fn dispatch(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        match self.get(&args.program) {
            Some(tool) => {
                tracing::debug!(program = %args.program, options = ?args.options, params = ?args.params, "dispatch");
                tool.execute(args, ctx).await
            }
            None => {
                tracing::debug!(program = %args.program, "command not found");
                ExecResult::failure(EXIT_NOT_FOUND, format!("command not found: {}\n", args.program))
            }
        }
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.names())
            .finish()
    }
}

//! Core tool traits and types.

use async_trait::async_trait;

use crate::result::ExecResult;

use super::context::ExecContext;

/// Schema describing a tool's interface, shown by `help`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolSchema {
    /// Tool name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Usage line, e.g. `chmod <mode 0-7> <name>`.
    pub usage: String,
}

impl ToolSchema {
    /// Create a new tool schema. Usage defaults to the bare name.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            usage: name.clone(),
            name,
            description: description.into(),
        }
    }

    /// Set the usage line.
    pub fn usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = usage.into();
        self
    }
}

/// One parsed command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolArgs {
    /// The first token, used for lookup.
    pub program: String,
    /// Tokens starting with `-`, in order.
    pub options: Vec<String>,
    /// All other tokens, in order.
    pub params: Vec<String>,
}

impl ToolArgs {
    /// Create args for `program` with no options or parameters.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            ..Self::default()
        }
    }

    /// Builder: append a parameter.
    pub fn param(mut self, param: impl Into<String>) -> Self {
        self.params.push(param.into());
        self
    }

    /// Builder: append an option.
    pub fn option(mut self, option: impl Into<String>) -> Self {
        self.options.push(option.into());
        self
    }

    pub fn has_params(&self) -> bool {
        !self.params.is_empty()
    }

    pub fn has_options(&self) -> bool {
        !self.options.is_empty()
    }

    /// Check for an exact option token, e.g. `"-l"`.
    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }

    /// Get a parameter by index.
    pub fn get_param(&self, index: usize) -> Option<&str> {
        self.params.get(index).map(String::as_str)
    }

    /// `<program>: <message>\n`, the standard diagnostic shape.
    pub fn diagnostic(&self, message: impl std::fmt::Display) -> String {
        format!("{}: {}\n", self.program, message)
    }
}

/// A command the shell can run.
#[async_trait]
pub trait Tool: Send + Sync {
    /// The tool's name (used for lookup).
    fn name(&self) -> &str;

    /// Get the tool's schema.
    fn schema(&self) -> ToolSchema;

    /// Execute the tool with the given arguments and context.
    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult;
}

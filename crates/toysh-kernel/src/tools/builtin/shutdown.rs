//! shutdown — Stop the shell.

use async_trait::async_trait;

use crate::result::ExecResult;
use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Shutdown tool: flags the context; the kernel stops after this command.
pub struct Shutdown;

#[async_trait]
impl Tool for Shutdown {
    fn name(&self) -> &str {
        "shutdown"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("shutdown", "Power off the machine")
    }

    async fn execute(&self, _args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        ctx.request_shutdown();
        ExecResult::success("")
    }
}

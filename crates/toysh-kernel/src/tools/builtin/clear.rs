//! clear — Clear the terminal.

use async_trait::async_trait;

use crate::result::ExecResult;
use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// ANSI: erase the whole screen, then home the cursor.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Clear tool: emits the clear-screen escape sequence.
pub struct Clear;

#[async_trait]
impl Tool for Clear {
    fn name(&self) -> &str {
        "clear"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("clear", "Clear the terminal screen")
    }

    async fn execute(&self, _args: ToolArgs, _ctx: &mut ExecContext) -> ExecResult {
        ExecResult::success(CLEAR_SCREEN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vfs::Tree;

    #[tokio::test]
    async fn test_clear_emits_escape() {
        let mut ctx = ExecContext::new(Tree::populate_demo());
        ctx.go_into("tmp");
        let result = Clear.execute(ToolArgs::new("clear"), &mut ctx).await;
        assert!(result.ok());
        assert_eq!(result.out, "\x1b[2J\x1b[H");
        // Only the screen is cleared, not the session.
        assert_eq!(ctx.cwd.to_string(), "/tmp");
    }
}

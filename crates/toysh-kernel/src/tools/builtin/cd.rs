//! cd — Change working directory.

use async_trait::async_trait;

use crate::result::{EXIT_FAILURE, ExecResult};
use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};
use crate::vfs::NodeKind;

/// Cd tool: move into a child directory, or up with `..`.
pub struct Cd;

#[async_trait]
impl Tool for Cd {
    fn name(&self) -> &str {
        "cd"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("cd", "Change current working directory").usage("cd <name|..>")
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let Some(target) = args.get_param(0) else {
            return ExecResult::failure(EXIT_FAILURE, args.diagnostic("missing operand"));
        };

        if target == ".." {
            ctx.go_back();
            return ExecResult::success("");
        }

        let exists = ctx
            .current_dir()
            .ok()
            .and_then(|dir| ctx.tree.find_child(dir, target, Some(NodeKind::Directory)))
            .is_some();
        if !exists {
            return ExecResult::failure(EXIT_FAILURE, args.diagnostic("no such file or directory"));
        }

        ctx.go_into(target);
        ExecResult::success("")
    }
}

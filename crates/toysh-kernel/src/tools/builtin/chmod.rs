//! chmod — Change permission bits.

use async_trait::async_trait;

use crate::result::{EXIT_FAILURE, ExecResult};
use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Chmod tool: replace the permission mask of a file or directory.
pub struct Chmod;

#[async_trait]
impl Tool for Chmod {
    fn name(&self) -> &str {
        "chmod"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("chmod", "Set permission bits (4=r, 2=w, 1=x)")
            .usage("chmod <mode 0-7> <name>")
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let (Some(mode), Some(target)) = (args.get_param(0), args.get_param(1)) else {
            return ExecResult::failure(EXIT_FAILURE, args.diagnostic("not enough parameter"));
        };

        let permission = match mode
            .parse::<i64>()
            .ok()
            .and_then(|m| ctx.options.mode_check.permission(m).ok())
        {
            Some(permission) => permission,
            None => {
                return ExecResult::failure(
                    EXIT_FAILURE,
                    args.diagnostic(format!("invalid mode: '{mode}'")),
                );
            }
        };

        let dir = match ctx.current_dir() {
            Ok(dir) => dir,
            Err(e) => return ExecResult::failure(EXIT_FAILURE, args.diagnostic(e)),
        };

        let node = ctx
            .tree
            .find_child(dir, target, None)
            .and_then(|id| ctx.tree.get_mut(id));
        match node {
            Some(node) => {
                node.set_permission(permission);
                tracing::debug!(name = %target, %permission, "chmod");
                ExecResult::success("")
            }
            None => ExecResult::failure(EXIT_FAILURE, args.diagnostic("target not found")),
        }
    }
}

//! rm — Remove files.

use async_trait::async_trait;

use crate::result::{EXIT_FAILURE, ExecResult};
use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};
use crate::vfs::NodeKind;

/// Rm tool: remove files from the working directory.
///
/// Only files are removed. Directory names and names that match nothing
/// are ignored without a message.
pub struct Rm;

#[async_trait]
impl Tool for Rm {
    fn name(&self) -> &str {
        "rm"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("rm", "Remove files").usage("rm <name>...")
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        if !args.has_params() {
            return ExecResult::failure(EXIT_FAILURE, args.diagnostic("missing operand"));
        }

        let dir = match ctx.current_dir() {
            Ok(dir) => dir,
            Err(e) => return ExecResult::failure(EXIT_FAILURE, args.diagnostic(e)),
        };

        for name in &args.params {
            let Some(target) = ctx.tree.find_child(dir, name, Some(NodeKind::File)) else {
                continue;
            };
            if let Err(e) = ctx.tree.remove_child(dir, target) {
                return ExecResult::failure(EXIT_FAILURE, args.diagnostic(e));
            }
        }

        ExecResult::success("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vfs::Tree;

    fn make_ctx() -> ExecContext {
        let mut ctx = ExecContext::new(Tree::populate_demo());
        ctx.go_into("tmp");
        ctx
    }

    fn cwd_names(ctx: &ExecContext) -> Vec<String> {
        let dir = ctx.current_dir().unwrap();
        ctx.tree.entries(dir).iter().map(|n| n.name().to_string()).collect()
    }

    #[tokio::test]
    async fn test_rm_file() {
        let mut ctx = make_ctx();
        let result = Rm.execute(ToolArgs::new("rm").param("file.txt"), &mut ctx).await;
        assert!(result.ok());
        assert!(result.is_silent());
        assert_eq!(cwd_names(&ctx), ["file2.txt"]);
    }

    #[tokio::test]
    async fn test_rm_several() {
        let mut ctx = make_ctx();
        let args = ToolArgs::new("rm").param("file2.txt").param("file.txt");
        Rm.execute(args, &mut ctx).await;
        assert!(cwd_names(&ctx).is_empty());
    }

    #[tokio::test]
    async fn test_rm_directory_is_ignored() {
        let mut ctx = ExecContext::new(Tree::populate_demo());
        let before = ctx.tree.len();
        let result = Rm.execute(ToolArgs::new("rm").param("tmp"), &mut ctx).await;
        assert!(result.ok());
        assert!(result.is_silent());
        assert_eq!(ctx.tree.len(), before);
        assert!(ctx.tree.find_child(ctx.tree.root(), "tmp", None).is_some());
    }

    #[tokio::test]
    async fn test_rm_nonexistent_is_silent() {
        let mut ctx = make_ctx();
        let result = Rm.execute(ToolArgs::new("rm").param("nope.txt"), &mut ctx).await;
        assert!(result.ok());
        assert!(result.is_silent());
        assert_eq!(cwd_names(&ctx), ["file.txt", "file2.txt"]);
    }

    #[tokio::test]
    async fn test_rm_same_name_twice() {
        let mut ctx = make_ctx();
        let args = ToolArgs::new("rm").param("file.txt").param("file.txt");
        let result = Rm.execute(args, &mut ctx).await;
        assert!(result.ok());
        assert_eq!(cwd_names(&ctx), ["file2.txt"]);
    }

    #[tokio::test]
    async fn test_rm_no_arg() {
        let mut ctx = make_ctx();
        let result = Rm.execute(ToolArgs::new("rm"), &mut ctx).await;
        assert!(!result.ok());
        assert_eq!(result.err, "rm: missing operand\n");
    }
}

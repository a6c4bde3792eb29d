//! mkdir — Create directories.

use async_trait::async_trait;

use crate::result::{EXIT_FAILURE, ExecResult};
use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};
use crate::vfs::{Node, VfsError};

/// Mkdir tool: create directories in the working directory.
pub struct Mkdir;

#[async_trait]
impl Tool for Mkdir {
    fn name(&self) -> &str {
        "mkdir"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("mkdir", "Create directories").usage("mkdir <name>...")
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        if !args.has_params() {
            return ExecResult::failure(EXIT_FAILURE, args.diagnostic("missing operand"));
        }

        let dir = match ctx.current_dir() {
            Ok(dir) => dir,
            Err(e) => return ExecResult::failure(EXIT_FAILURE, args.diagnostic(e)),
        };

        // A conflict skips that name only; the rest are still created.
        let mut err = String::new();
        for name in &args.params {
            match ctx.tree.add_child(dir, Node::directory(name.as_str())) {
                Ok(_) => {}
                Err(VfsError::AlreadyExists(_)) => {
                    let existing = ctx
                        .tree
                        .find_child(dir, name, None)
                        .and_then(|id| ctx.tree.get(id));
                    let message = match existing {
                        Some(node) if node.is_file() => "file exists",
                        _ => "directory exists",
                    };
                    err.push_str(&args.diagnostic(message));
                }
                Err(e) => err.push_str(&args.diagnostic(e)),
            }
        }

        if err.is_empty() {
            ExecResult::success("")
        } else {
            ExecResult::failure(EXIT_FAILURE, err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vfs::Tree;

    fn make_ctx() -> ExecContext {
        ExecContext::new(Tree::populate_demo())
    }

    fn root_names(ctx: &ExecContext) -> Vec<String> {
        ctx.tree
            .entries(ctx.tree.root())
            .iter()
            .map(|n| n.name().to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_mkdir_simple() {
        let mut ctx = make_ctx();
        let result = Mkdir.execute(ToolArgs::new("mkdir").param("home"), &mut ctx).await;
        assert!(result.ok());
        assert!(result.is_silent());

        let id = ctx.tree.find_child(ctx.tree.root(), "home", None).unwrap();
        let node = ctx.tree.get(id).unwrap();
        assert!(node.is_dir());
        assert_eq!(root_names(&ctx).last().map(String::as_str), Some("home"));
    }

    #[tokio::test]
    async fn test_mkdir_several() {
        let mut ctx = make_ctx();
        let args = ToolArgs::new("mkdir").param("a").param("b");
        let result = Mkdir.execute(args, &mut ctx).await;
        assert!(result.ok());
        assert_eq!(root_names(&ctx), ["tmp", "sys", "usr", "log.txt", "a", "b"]);
    }

    #[tokio::test]
    async fn test_mkdir_in_subdir() {
        let mut ctx = make_ctx();
        ctx.go_into("usr");
        Mkdir.execute(ToolArgs::new("mkdir").param("lib"), &mut ctx).await;
        let usr = ctx.current_dir().unwrap();
        let names: Vec<_> = ctx.tree.entries(usr).iter().map(|n| n.name()).collect();
        assert_eq!(names, ["bin", "lib"]);
    }

    #[tokio::test]
    async fn test_mkdir_existing_directory() {
        let mut ctx = make_ctx();
        let before = root_names(&ctx).len();
        let result = Mkdir.execute(ToolArgs::new("mkdir").param("tmp"), &mut ctx).await;
        assert!(!result.ok());
        assert_eq!(result.err, "mkdir: directory exists\n");
        assert_eq!(root_names(&ctx).len(), before);
    }

    #[tokio::test]
    async fn test_mkdir_conflict_does_not_stop_others() {
        let mut ctx = make_ctx();
        let args = ToolArgs::new("mkdir").param("tmp").param("new").param("new");
        let result = Mkdir.execute(args, &mut ctx).await;
        assert_eq!(result.err, "mkdir: directory exists\nmkdir: directory exists\n");
        assert_eq!(root_names(&ctx), ["tmp", "sys", "usr", "log.txt", "new"]);
    }

    #[tokio::test]
    async fn test_mkdir_over_file_keeps_names_unique() {
        let mut ctx = make_ctx();
        let result = Mkdir.execute(ToolArgs::new("mkdir").param("log.txt"), &mut ctx).await;
        assert_eq!(result.err, "mkdir: file exists\n");
        let count = root_names(&ctx).iter().filter(|n| *n == "log.txt").count();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_mkdir_no_arg() {
        let mut ctx = make_ctx();
        let result = Mkdir.execute(ToolArgs::new("mkdir"), &mut ctx).await;
        assert!(!result.ok());
        assert_eq!(result.err, "mkdir: missing operand\n");
    }

    #[tokio::test]
    async fn test_mkdir_options_are_not_names() {
        let mut ctx = make_ctx();
        let result = Mkdir.execute(ToolArgs::new("mkdir").option("-p"), &mut ctx).await;
        assert_eq!(result.err, "mkdir: missing operand\n");
    }
}

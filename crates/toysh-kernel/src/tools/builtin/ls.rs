//! ls — List directory contents.

use async_trait::async_trait;

use crate::result::{EXIT_FAILURE, ExecResult};
use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Ls tool: list the working directory.
pub struct Ls;

#[async_trait]
impl Tool for Ls {
    fn name(&self) -> &str {
        "ls"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("ls", "List directory contents (-l for type and permissions)")
            .usage("ls [-l]")
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let dir = match ctx.current_dir() {
            Ok(dir) => dir,
            Err(e) => return ExecResult::failure(EXIT_FAILURE, args.diagnostic(e)),
        };
        let entries = ctx.tree.entries(dir);
        let long_format = args.has_option("-l");

        let mut out = String::new();
        if long_format {
            out.push_str(&format!("total {}\n", entries.len()));
            for entry in &entries {
                out.push_str(&entry.long_listing());
                out.push('\n');
            }
        } else {
            for entry in &entries {
                out.push_str(entry.name());
                out.push(' ');
            }
            out.push('\n');
        }

        ExecResult::success(out)
    }
}

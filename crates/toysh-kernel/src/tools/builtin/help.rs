//! help — List available commands.

use async_trait::async_trait;

use crate::result::{EXIT_FAILURE, ExecResult};
use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Help tool: one line per registered command, or details for one.
pub struct Help;

#[async_trait]
impl Tool for Help {
    fn name(&self) -> &str {
        "help"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("help", "List commands, or describe one").usage("help [<command>]")
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let schemas = ctx.tool_schemas();

        if let Some(name) = args.get_param(0) {
            return match schemas.iter().find(|s| s.name == name) {
                Some(schema) => {
                    ExecResult::success(format!("{}\n    {}\n", schema.usage, schema.description))
                }
                None => ExecResult::failure(EXIT_FAILURE, args.diagnostic(format!("no help for '{name}'"))),
            };
        }

        let width = schemas.iter().map(|s| s.usage.len()).max().unwrap_or(0);
        let mut out = String::new();
        for schema in schemas {
            out.push_str(&format!("  {:width$}  {}\n", schema.usage, schema.description));
        }
        ExecResult::success(out)
    }
}

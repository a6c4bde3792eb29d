//! date — Show or set the simulated date and time.

use async_trait::async_trait;

use crate::result::{EXIT_FAILURE, ExecResult};
use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Date tool: print the shell clock, or set it from a formatted string.
///
/// ```text
/// date                                   # Tue Jan  2 03:04:05 2024
/// date %Y-%m-%dT%H:%M 2024-01-02T03:04   # set the clock
/// ```
pub struct Date;

#[async_trait]
impl Tool for Date {
    fn name(&self) -> &str {
        "date"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("date", "Show the date, or set it using a strftime format")
            .usage("date [<format> <datetime>]")
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        if !args.has_params() {
            return ExecResult::success(format!("{}\n", ctx.clock.display()));
        }

        let (Some(format), Some(datetime)) = (args.get_param(0), args.get_param(1)) else {
            return ExecResult::failure(EXIT_FAILURE, args.diagnostic("not enough parameter"));
        };

        match ctx.clock.parse(format, datetime) {
            Ok(at) => {
                ctx.clock.set(at);
                ExecResult::success("")
            }
            Err(e) => {
                tracing::debug!(%format, %datetime, error = %e, "date parse failed");
                ExecResult::failure(EXIT_FAILURE, args.diagnostic("failed to change date"))
            }
        }
    }
}

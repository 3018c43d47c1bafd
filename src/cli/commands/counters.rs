//! Counters command: status totals over every issue.

use anyhow::Result;

use super::{CommandContext, print_json};
use crate::format::format_counters;

/// Execute the counters command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let counters = ctx.session.counters();
    if ctx.json {
        print_json(&counters)
    } else {
        println!("{}", format_counters(&counters));
        Ok(())
    }
}

//! Status command: advance one step along the status cycle.

use anyhow::Result;
use civic_lib::{ActionOutcome, CardAction, IssueId};

use super::{CommandContext, emit_outcome, report_ignored};
use crate::format::format_status_badge;

/// Execute the status command.
///
/// # Errors
///
/// Returns an error if the store cannot be written.
pub fn execute(id: IssueId, ctx: &mut CommandContext) -> Result<()> {
    let outcome = ctx.session.apply(CardAction::CycleStatus { id })?;
    emit_outcome(ctx, &outcome, |outcome| match outcome {
        ActionOutcome::StatusChanged { id, status } => {
            println!("{id} {}", format_status_badge(*status, ctx.color));
        }
        _ => report_ignored(ctx, id, "Status unchanged."),
    })
}

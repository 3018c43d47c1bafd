//! Delete command implementation.

use anyhow::Result;
use civic_lib::{ActionOutcome, CardAction, IssueId};

use super::{CommandContext, emit_outcome, report_ignored};

/// Execute the delete command.
///
/// # Errors
///
/// Returns an error if the store cannot be written.
pub fn execute(id: IssueId, ctx: &mut CommandContext) -> Result<()> {
    let outcome = ctx.session.apply(CardAction::Delete { id })?;
    emit_outcome(ctx, &outcome, |outcome| match outcome {
        ActionOutcome::Deleted { id } => println!("Deleted {id}"),
        _ => report_ignored(ctx, id, "Nothing deleted."),
    })
}

//! Map and image commands: print the outbound target for a card.
//!
//! Opening a browser or image viewer is left to the caller.

use anyhow::Result;
use civic_lib::{ActionOutcome, CardAction, IssueId};

use super::{CommandContext, emit_outcome, report_ignored};

/// Execute the map command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn execute_map(id: IssueId, ctx: &mut CommandContext) -> Result<()> {
    let outcome = ctx.session.apply(CardAction::OpenMap { id })?;
    emit_outcome(ctx, &outcome, |outcome| match outcome {
        ActionOutcome::OpenMap { url, .. } => println!("{url}"),
        _ => report_ignored(ctx, id, "No map link."),
    })
}

/// Execute the image command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn execute_image(id: IssueId, ctx: &mut CommandContext) -> Result<()> {
    let outcome = ctx.session.apply(CardAction::OpenImage { id })?;
    emit_outcome(ctx, &outcome, |outcome| match outcome {
        ActionOutcome::OpenImage { image, .. } => println!("{image}"),
        _ => report_ignored(ctx, id, &format!("Issue {id} has no image.")),
    })
}

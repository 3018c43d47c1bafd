//! Comment command implementation.

use anyhow::Result;
use civic_lib::{ActionOutcome, CardAction};

use super::{CommandContext, emit_outcome, report_ignored};
use crate::cli::CommentArgs;

/// Execute the comment command.
///
/// # Errors
///
/// Returns an error if the store cannot be written.
pub fn execute(args: &CommentArgs, ctx: &mut CommandContext) -> Result<()> {
    let text = args.text.join(" ");
    let outcome = ctx.session.apply(CardAction::AddComment { id: args.id, text })?;
    emit_outcome(ctx, &outcome, |outcome| match outcome {
        ActionOutcome::Commented { id, comment } => {
            println!("Comment added to {id}: {}", comment.text);
        }
        _ => report_ignored(ctx, args.id, "Comment is empty; nothing added."),
    })
}

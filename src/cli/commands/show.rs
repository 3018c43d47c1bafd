//! Show command implementation.

use anyhow::Result;
use civic_lib::IssueId;

use super::{CommandContext, print_json};
use crate::format::format_card;

/// Execute the show command.
///
/// # Errors
///
/// Returns `IssueNotFound` if no issue has this ID.
pub fn execute(id: IssueId, ctx: &CommandContext) -> Result<()> {
    let issue = ctx.session.require(id)?;
    let card = ctx.session.renderer().card(issue);

    if ctx.json {
        print_json(&card)
    } else {
        print!("{}", format_card(&card, ctx.color));
        Ok(())
    }
}

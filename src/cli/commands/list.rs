//! List command implementation.
//!
//! Primary discovery interface: counters over everything, then the cards
//! that pass the category filter and search.

use anyhow::Result;
use civic_lib::{ListView, ViewFilter};

use super::{CommandContext, print_json};
use crate::cli::ListArgs;
use crate::format::{ListOutput, format_card, format_card_line, format_counters};

/// Execute the list command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn execute(args: &ListArgs, ctx: &mut CommandContext) -> Result<()> {
    ctx.session.set_filter(build_filter(args));
    let screen = ctx.session.screen();

    if ctx.json {
        return print_json(&ListOutput {
            counters: screen.counters,
            filter: ctx.session.filter().into(),
            list: screen.list,
        });
    }

    println!("{}", format_counters(&screen.counters));
    println!();
    match &screen.list {
        ListView::Empty { message } => println!("{message}"),
        ListView::Cards { cards } => {
            for card in cards {
                if args.long {
                    println!("{}", format_card(card, ctx.color));
                } else {
                    println!("{}", format_card_line(card));
                }
            }
            println!("\n{} of {} issue(s)", cards.len(), screen.counters.total());
        }
    }
    Ok(())
}

/// Convert CLI args to a view filter.
fn build_filter(args: &ListArgs) -> ViewFilter {
    ViewFilter {
        category: args.category,
        query: args.search.trim().to_string(),
    }
}

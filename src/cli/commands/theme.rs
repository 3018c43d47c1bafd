//! Theme command: read or change the persisted dark-mode flag.

use anyhow::Result;

use super::{CommandContext, print_json};
use crate::cli::{ThemeArgs, ThemeMode};
use crate::format::ThemeOutput;

/// Execute the theme command.
///
/// # Errors
///
/// Returns an error if the flag cannot be written.
pub fn execute(args: &ThemeArgs, ctx: &mut CommandContext) -> Result<()> {
    match args.mode {
        Some(ThemeMode::On) => ctx.session.set_dark(true)?,
        Some(ThemeMode::Off) => ctx.session.set_dark(false)?,
        Some(ThemeMode::Toggle) => {
            ctx.session.toggle_dark()?;
        }
        None => {}
    }

    let dark = ctx.session.is_dark();
    if ctx.json {
        print_json(&ThemeOutput { dark })
    } else {
        println!("Dark mode: {}", if dark { "on" } else { "off" });
        Ok(())
    }
}

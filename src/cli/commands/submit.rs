//! Submit command: form intake from flags.

use std::path::Path;

use anyhow::Result;
use civic_lib::IssueForm;

use super::{CommandContext, print_json};
use crate::cli::SubmitArgs;

/// Execute the submit command.
///
/// # Errors
///
/// Returns field-level validation errors, or an error if the store cannot be written.
pub fn execute(args: &SubmitArgs, ctx: &mut CommandContext) -> Result<()> {
    let mut form = IssueForm {
        title: args.title.clone(),
        description: args.description.clone(),
        location: args.location.clone(),
        category: args.category.clone(),
        image: args.image.as_deref().map(image_reference),
    };

    let issue = ctx.session.submit(&mut form)?;

    if ctx.json {
        return print_json(&issue);
    }

    println!("Created {}: {}", issue.id, issue.title);
    if let Some(notice) = ctx.session.screen().notice {
        println!("{notice}");
    }
    Ok(())
}

/// Turn the `--image` value into a stored reference.
///
/// An existing file becomes an absolute `file://` reference; anything else
/// is kept verbatim as an opaque reference.
fn image_reference(input: &str) -> String {
    let path = Path::new(input.trim());
    if !path.is_file() {
        return input.to_string();
    }
    dunce::canonicalize(path).map_or_else(
        |_| input.to_string(),
        |abs| format!("file://{}", abs.display()),
    )
}

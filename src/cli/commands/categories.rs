//! Categories command: the fixed category set.

use anyhow::Result;
use civic_lib::Category;

use super::print_json;
use crate::format::CategoryOutput;

/// Execute the categories command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn execute(json: bool) -> Result<()> {
    if json {
        return print_json(&CategoryOutput {
            categories: Category::ALL.to_vec(),
        });
    }
    for category in Category::ALL {
        println!("{category}");
    }
    Ok(())
}

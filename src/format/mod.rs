//! Output formatting for `civic_tracker`.
//!
//! Supports both human-readable text output and machine-parseable JSON.
//!
//! # JSON Output Types
//!
//! - [`ListOutput`] - counters, active filter, and rendered cards (list)
//! - [`ThemeOutput`] - theme flag (theme)
//! - [`CategoryOutput`] - the fixed category set (categories)

mod output;
mod text;

pub use output::{CategoryOutput, FilterOutput, ListOutput, ThemeOutput};
pub use text::{
    format_card, format_card_line, format_counters, format_status_badge, format_status_icon,
};

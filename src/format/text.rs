//! Text formatting functions for `civic_tracker`.
//!
//! Provides terminal formatting for rendered cards:
//! - Status icons (○ ◐ ✓)
//! - Status badges, optionally colored
//! - One-line card summaries and full card blocks
//! - Counter summary line

use civic_lib::{CardView, Status, StatusCounters};
use crossterm::style::Stylize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Status icon characters.
pub mod icons {
    /// New issue, nobody has picked it up (hollow circle).
    pub const NEW: &str = "○";
    /// Work under way (half-filled).
    pub const IN_PROGRESS: &str = "◐";
    /// Resolved (checkmark).
    pub const RESOLVED: &str = "✓";
}

/// Longest title shown in a one-line summary, in terminal columns.
pub const MAX_TITLE_WIDTH: usize = 48;

/// Return the icon character for a status.
#[must_use]
pub const fn format_status_icon(status: Status) -> &'static str {
    match status {
        Status::New => icons::NEW,
        Status::InProgress => icons::IN_PROGRESS,
        Status::Resolved => icons::RESOLVED,
    }
}

/// Format a status as a bracketed badge, colored when `color` is set.
#[must_use]
pub fn format_status_badge(status: Status, color: bool) -> String {
    let badge = format!("({})", status.as_str());
    if !color {
        return badge;
    }
    match status {
        Status::New => badge.blue().to_string(),
        Status::InProgress => badge.yellow().to_string(),
        Status::Resolved => badge.green().to_string(),
    }
}

/// Format a single-line card summary.
///
/// Format: `{icon} {id} [{category}] {title} @ {location}`
#[must_use]
pub fn format_card_line(card: &CardView) -> String {
    format!(
        "{} {} [{}] {} @ {}",
        format_status_icon(card.status),
        card.id,
        card.category_badge,
        truncate_to_width(&card.title, MAX_TITLE_WIDTH),
        card.location,
    )
}

/// Format the full card block.
#[must_use]
pub fn format_card(card: &CardView, color: bool) -> String {
    let mut out = format!(
        "[{}] {} {}\n{}\n  @ {}\n  {}\n",
        card.category_badge,
        format_status_badge(card.status, color),
        card.id,
        card.title,
        card.location,
        card.description,
    );
    if let Some(image) = &card.image {
        out.push_str(&format!("  Image: {image}\n"));
    }
    out.push_str(&format!("  Reported on: {}\n", card.created_at));
    out.push_str(&format!("  Map: {}\n", card.map_url));
    if !card.comments.is_empty() {
        out.push_str("  Comments:\n");
        for comment in &card.comments {
            out.push_str(&format!("    - {} ({})\n", comment.text, comment.posted_at));
        }
    }
    out
}

/// Format the status counters as one line.
#[must_use]
pub fn format_counters(counters: &StatusCounters) -> String {
    Status::ALL
        .iter()
        .map(|&status| format!("{status}: {}", counters.get(status)))
        .collect::<Vec<_>>()
        .join(" | ")
}

fn truncate_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use civic_lib::render::CommentView;
    use civic_lib::{Category, Issue, render_card};
    use chrono::Utc;

    fn make_test_card() -> CardView {
        render_card(&Issue {
            id: 1_700_000_000_000,
            title: "Test title".to_string(),
            description: "Something broke".to_string(),
            location: "Main St".to_string(),
            category: Category::Pothole,
            status: Status::New,
            created_at: Utc::now(),
            image: None,
            comments: Vec::new(),
        })
    }

    #[test]
    fn test_status_icons() {
        assert_eq!(format_status_icon(Status::New), "○");
        assert_eq!(format_status_icon(Status::InProgress), "◐");
        assert_eq!(format_status_icon(Status::Resolved), "✓");
    }

    #[test]
    fn test_plain_status_badge() {
        assert_eq!(format_status_badge(Status::InProgress, false), "(In Progress)");
    }

    #[test]
    fn test_colored_status_badge_keeps_label() {
        let badge = format_status_badge(Status::Resolved, true);
        assert!(badge.contains("(Resolved)"));
    }

    #[test]
    fn test_format_card_line() {
        let line = format_card_line(&make_test_card());
        assert_eq!(line, "○ 1700000000000 [Pothole] Test title @ Main St");
    }

    #[test]
    fn test_long_title_truncated() {
        let mut card = make_test_card();
        card.title = "x".repeat(80);
        let line = format_card_line(&card);
        assert!(line.contains(&format!("{}…", "x".repeat(MAX_TITLE_WIDTH - 1))));
    }

    #[test]
    fn test_wide_chars_truncated_by_columns() {
        let truncated = truncate_to_width(&"道".repeat(10), 7);
        assert_eq!(truncated, "道道道…");
    }

    #[test]
    fn test_format_card_block() {
        let mut card = make_test_card();
        card.image = Some("file:///tmp/hole.jpg".to_string());
        card.comments = vec![CommentView {
            text: "Fixed now".to_string(),
            posted_at: "9:00:00 AM".to_string(),
        }];

        let block = format_card(&card, false);
        assert!(block.starts_with("[Pothole] (New) 1700000000000\nTest title\n"));
        assert!(block.contains("  Image: file:///tmp/hole.jpg\n"));
        assert!(block.contains("  Map: https://www.google.com/maps/search/?api=1&query=Main%20St\n"));
        assert!(block.ends_with("  Comments:\n    - Fixed now (9:00:00 AM)\n"));
    }

    #[test]
    fn test_format_counters() {
        let counters = StatusCounters {
            new: 1,
            in_progress: 0,
            resolved: 2,
        };
        assert_eq!(
            format_counters(&counters),
            "New: 1 | In Progress: 0 | Resolved: 2"
        );
    }
}

//! ID allocation and timestamp formatting utilities.

use chrono::{DateTime, Local, TimeZone, Utc};

use crate::model::IssueId;

// ============================================================================
// ID Generation
// ============================================================================

/// Allocate an issue ID from the creation time.
///
/// The ID is the timestamp in milliseconds, bumped past `last` so IDs stay
/// strictly increasing when several issues land in the same millisecond
/// (or the clock steps backwards).
#[must_use]
pub fn next_id(created_at: DateTime<Utc>, last: Option<IssueId>) -> IssueId {
    let millis = u64::try_from(created_at.timestamp_millis()).unwrap_or(0);
    match last {
        Some(last) if millis <= last => last.saturating_add(1),
        _ => millis,
    }
}

// ============================================================================
// Timestamps
// ============================================================================

/// Human-readable date and time, e.g. `3/14/2025, 9:26:53 AM`.
#[must_use]
pub fn format_timestamp_in<Tz: TimeZone>(ts: DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    ts.with_timezone(tz)
        .format("%-m/%-d/%Y, %-I:%M:%S %p")
        .to_string()
}

/// Human-readable time of day, e.g. `9:26:53 AM`.
#[must_use]
pub fn format_time_in<Tz: TimeZone>(ts: DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    ts.with_timezone(tz).format("%-I:%M:%S %p").to_string()
}

/// [`format_timestamp_in`] using the local time zone.
#[must_use]
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    format_timestamp_in(ts, &Local)
}

/// [`format_time_in`] using the local time zone.
#[must_use]
pub fn format_time(ts: DateTime<Utc>) -> String {
    format_time_in(ts, &Local)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(secs: i64, millis: u32) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, millis * 1_000_000).unwrap()
    }

    #[test]
    fn id_is_millisecond_timestamp() {
        assert_eq!(next_id(at(1_700_000_000, 123), None), 1_700_000_000_123);
    }

    #[test]
    fn id_bumps_within_same_millisecond() {
        let now = at(1_700_000_000, 0);
        let first = next_id(now, None);
        let second = next_id(now, Some(first));
        let third = next_id(now, Some(second));
        assert!(first < second && second < third);
    }

    #[test]
    fn id_survives_clock_going_backwards() {
        let last = 1_700_000_000_500;
        assert_eq!(next_id(at(1_700_000_000, 0), Some(last)), last + 1);
    }

    #[test]
    fn timestamp_formats_are_human_readable() {
        let ts = Utc.with_ymd_and_hms(2025, 3, 14, 21, 26, 53).unwrap();
        assert_eq!(format_timestamp_in(ts, &Utc), "3/14/2025, 9:26:53 PM");
        assert_eq!(format_time_in(ts, &Utc), "9:26:53 PM");
    }
}

//! Time remaining until the next daily puzzle.
use chrono::{NaiveTime, Timelike};

const MILLIS_PER_DAY: u32 = 24 * 60 * 60 * 1000;

/// Whole seconds from `now` until the next local midnight, rounded down.
#[must_use]
pub fn seconds_until_midnight(now: NaiveTime) -> u32 {
    // leap-second nanos past 1e9 are clamped into the last millisecond
    let millis = (now.nanosecond() / 1_000_000).min(999);
    let elapsed = now.num_seconds_from_midnight() * 1000 + millis;
    (MILLIS_PER_DAY - elapsed) / 1000
}

/// `HH:MM:SS` rendering of a countdown.
#[must_use]
pub fn format_countdown(total_seconds: u32) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// Convenience wrapper combining the two.
#[must_use]
pub fn countdown_label(now: NaiveTime) -> String {
    format_countdown(seconds_until_midnight(now))
}

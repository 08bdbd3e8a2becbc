//! Display formatting shared by the page sections.

use chrono::{DateTime, Utc};

pub const MICRO_UNITS_PER_ALGO: u64 = 1_000_000;
pub const PLACEHOLDER: &str = "--";
/// Four decimal places.
const DISPLAY_SCALE: u64 = 10_000;

/// Human-readable elapsed time between `then` and `now`.
///
/// Sub-minute and future timestamps read "just now"; anything older than
/// thirty days falls back to an absolute date.
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - then).num_seconds();
    match secs {
        s if s < 60 => "just now".to_string(),
        s if s < 3_600 => format!("{}m ago", s / 60),
        s if s < 86_400 => format!("{}h ago", s / 3_600),
        s if s < 30 * 86_400 => format!("{}d ago", s / 86_400),
        _ => then.format("%b %-d, %Y").to_string(),
    }
}

/// Same as [`relative_time`] for a Unix timestamp in seconds.
pub fn relative_time_from_unix(secs: i64, now: DateTime<Utc>) -> String {
    match DateTime::<Utc>::from_timestamp(secs, 0) {
        Some(then) => relative_time(then, now),
        None => PLACEHOLDER.to_string(),
    }
}

/// Micro-units to whole units with exactly four decimals, rounding half up.
/// Integer arithmetic keeps large balances exact.
pub fn format_micro_algos(micro: u64) -> String {
    let step = (MICRO_UNITS_PER_ALGO / DISPLAY_SCALE) as u128;
    let scaled = (micro as u128 + step / 2) / step;
    let scale = DISPLAY_SCALE as u128;
    format!("{}.{:04}", scaled / scale, scaled % scale)
}

/// Keeps the first `head` and last `tail` characters joined by "...".
/// Strings no longer than `head + tail` are returned unchanged.
pub fn truncate_middle(value: &str, head: usize, tail: usize) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= head + tail {
        return value.to_string();
    }
    let start: String = chars[..head].iter().collect();
    let end: String = chars[chars.len() - tail..].iter().collect();
    format!("{start}...{end}")
}

/// Transaction peer form: first 8 and last 4 characters.
pub fn truncate_address(address: &str) -> String {
    truncate_middle(address, 8, 4)
}

pub fn plural(count: u64, singular: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {singular}s")
    }
}

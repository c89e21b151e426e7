//! Duration parsing for cache expiry windows
//!
//! Supports relative formats: 30m, 24h, 30d, 1w (plus long unit names).

use std::time::Duration;

use chrono::TimeDelta;

use crate::error::{JamiraError, Result};

/// Parse a TTL string such as `24h` or `30d` into a std duration
pub fn parse_ttl(s: &str) -> Result<Duration> {
    let s = s.trim().to_lowercase();

    parse_relative_duration(&s)
        .and_then(|delta| delta.to_std().ok())
        .ok_or_else(|| {
            JamiraError::InvalidArgument(format!(
                "Invalid TTL format: '{}'. Use formats like: 30m, 24h, 30d, 1w",
                s
            ))
        })
}

/// Render a duration back into the shortest unit that represents it exactly
pub fn format_ttl(ttl: Duration) -> String {
    let secs = ttl.as_secs();
    const MINUTE: u64 = 60;
    const HOUR: u64 = 60 * MINUTE;
    const DAY: u64 = 24 * HOUR;
    const WEEK: u64 = 7 * DAY;

    if secs == 0 {
        return "0m".to_string();
    }
    if secs % WEEK == 0 {
        return format!("{}w", secs / WEEK);
    }
    // 24h reads better than 1d
    if secs % DAY == 0 && secs >= 2 * DAY {
        return format!("{}d", secs / DAY);
    }
    if secs % HOUR == 0 {
        return format!("{}h", secs / HOUR);
    }
    format!("{}m", secs / MINUTE)
}

/// Parse relative duration (e.g., 1h, 30m, 2d, 1w)
fn parse_relative_duration(s: &str) -> Option<TimeDelta> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    // Find where the number ends and the unit begins
    let (num_str, unit) = if s.ends_with(char::is_alphabetic) {
        let split_idx = s.rfind(|c: char| c.is_ascii_digit())?;
        (&s[..=split_idx], &s[split_idx + 1..])
    } else {
        return None;
    };

    let num: i64 = num_str.trim_end().parse().ok()?;
    if num <= 0 {
        return None;
    }

    match unit {
        "m" | "min" | "mins" | "minute" | "minutes" => TimeDelta::try_minutes(num),
        "h" | "hr" | "hrs" | "hour" | "hours" => TimeDelta::try_hours(num),
        "d" | "day" | "days" => TimeDelta::try_days(num),
        "w" | "week" | "weeks" => TimeDelta::try_weeks(num),
        _ => None,
    }
}

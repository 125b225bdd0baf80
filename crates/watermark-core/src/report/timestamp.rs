//! "Last updated" value rendering.

use std::fmt::Write as _;

use chrono::{DateTime, FixedOffset, SecondsFormat, Timelike};

use crate::options::WatermarkOptions;
use crate::ports::CoreError;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATENAME_FORMAT: &str = "%a %b %d %Y";
const TIME_FORMAT: &str = "%H:%M:%S";
const ZONE_FORMAT: &str = "%Z";

/// ISO-8601 local date-time with UTC offset.
///
/// Microseconds are printed only when non-zero.
pub fn iso_timestamp(now: &DateTime<FixedOffset>) -> String {
    let precision = if now.nanosecond() / 1_000 == 0 {
        SecondsFormat::Secs
    } else {
        SecondsFormat::Micros
    };
    now.to_rfc3339_opts(precision, false)
}

/// Render `now` with a user-supplied strftime pattern.
///
/// Fails for patterns chrono can parse but not print (e.g. `%#z`).
pub fn format_custom(now: &DateTime<FixedOffset>, pattern: &str) -> Result<String, CoreError> {
    let mut rendered = String::new();
    write!(rendered, "{}", now.format(pattern))
        .map_err(|_| CoreError::Validation(format!("invalid strftime pattern: {pattern:?}")))?;
    Ok(rendered)
}

/// Render the timestamp value selected by `options`.
///
/// Precedence: custom pattern, then ISO-8601, then date/time parts. A bare
/// `updated` with no date/time part falls back to ISO-8601.
pub fn last_updated(
    options: &WatermarkOptions,
    now: &DateTime<FixedOffset>,
) -> Result<String, CoreError> {
    if let Some(pattern) = options.custom_time.as_deref().filter(|p| !p.is_empty()) {
        return format_custom(now, pattern);
    }
    if options.iso8601 {
        return Ok(iso_timestamp(now));
    }

    let mut parts = Vec::new();
    if options.current_date {
        parts.push(now.format(DATE_FORMAT).to_string());
    } else if options.datename {
        parts.push(now.format(DATENAME_FORMAT).to_string());
    }
    if options.current_time {
        let mut time = now.format(TIME_FORMAT).to_string();
        if options.timezone {
            time.push_str(&now.format(ZONE_FORMAT).to_string());
        }
        parts.push(time);
    }

    if parts.is_empty() && options.updated {
        return Ok(iso_timestamp(now));
    }
    Ok(parts.join(" "))
}

//! Decoder — turns raw header captures into typed values.
//!
//! Decoding is total: once the matcher has accepted a line, every field
//! produces a value. Odd inputs degrade per field (an unmapped name, an
//! invalid timestamp) instead of failing the whole record.

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Timelike, Utc};

use crate::types::Pid;

/// Timestamp layouts that carry their own UTC offset.
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%dT%H:%M%z",
];

/// Timestamp layouts without an offset; `Z` is stripped before these run.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// Decode the all-digit priority capture.
///
/// Values too large for `u32` saturate at `u32::MAX`; the resulting codes
/// then fall outside both tables and decode to unmapped names.
pub fn decode_priority(digits: &str) -> u32 {
    digits.parse().unwrap_or(u32::MAX)
}

/// Split a priority into `(facility_code, severity_code)`.
pub fn split_priority(priority: u32) -> (u32, u32) {
    (priority >> 3, priority & 7)
}

// ---------------------------------------------------------------------------
// Time
// ---------------------------------------------------------------------------

/// Decode an ISO 8601 header timestamp to an instant in UTC.
///
/// `default_offset` applies only to timestamps that carry no zone at all.
/// `24:00[:00[.000]]` is the end of the day, i.e. midnight of the next one.
/// Leap seconds (`:60`) are rejected. Returns `None` for text that is not a
/// valid calendar time.
pub fn decode_time(text: &str, default_offset: FixedOffset) -> Option<DateTime<Utc>> {
    let decoded = match end_of_day_as_midnight(text) {
        Some(midnight) => parse_time(&midnight, default_offset)
            .and_then(|dt| dt.checked_add_signed(chrono::Duration::days(1))),
        None => parse_time(text, default_offset),
    }
    .filter(|dt| dt.nanosecond() < 1_000_000_000);

    if decoded.is_none() {
        tracing::debug!(time = text, "header timestamp is not a valid calendar time");
    }
    decoded
}

/// Rewrite `…T24:00…` to `…T00:00…` when every digit after the hour is
/// zero. Any other hour-24 time is left alone and fails to parse.
fn end_of_day_as_midnight(text: &str) -> Option<String> {
    let t = text.find('T')?;
    let rest = text[t + 1..].strip_prefix("24:")?;
    let clock = rest
        .find(['Z', 'z', '+', '-'])
        .map_or(rest, |zone| &rest[..zone]);
    if !clock.bytes().all(|b| matches!(b, b'0' | b':' | b'.')) {
        return None;
    }
    Some(format!("{}T00:{}", &text[..t], rest))
}

fn parse_time(text: &str, default_offset: FixedOffset) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(text, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    let (naive_text, offset) = match text.strip_suffix(['Z', 'z']) {
        Some(rest) => (rest, FixedOffset::east_opt(0)?),
        None => (text, default_offset),
    };
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(naive_text, fmt).ok())
        .and_then(|naive| offset.from_local_datetime(&naive).single())
        .map(|dt| dt.with_timezone(&Utc))
}

// ---------------------------------------------------------------------------
// Pid
// ---------------------------------------------------------------------------

/// Decode bracket contents: digits become a number, anything else is kept.
pub fn decode_pid(text: &str) -> Pid {
    if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(n) = text.parse::<u64>() {
            return Pid::Number(n);
        }
    }
    Pid::Text(text.to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

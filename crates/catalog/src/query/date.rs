//! Date normalisation for sorting date-valued fields.
//!
//! Records carry dates in two encodings: ISO-8601 timestamps from the remote
//! API (`2024-03-05T14:15:00.000Z`) and the localized form used by the
//! bundled datasets (`05/03/2024, 02:15 p.m.`). Both are normalised to a
//! naive wall-clock [`NaiveDateTime`] so they compare directly.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use regex::Regex;

/// Fields whose values are compared as dates when sorting.
pub const DATE_FIELDS: &[&str] = &["endDate", "hireDate", "createdAt"];

static LOCALIZED_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{1,2})/(\d{1,2})/(\d{4}),\s*(\d{1,2}):(\d{2})\s*(a\.m\.|p\.m\.)")
        .expect("localized date pattern is valid")
});

const ISO_NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// True if `field` is on the date allow-list.
pub fn is_date_field(field: &str) -> bool {
    DATE_FIELDS.contains(&field)
}

/// The sentinel for unparseable dates: 1970-01-01T00:00:00.
pub fn epoch() -> NaiveDateTime {
    DateTime::<Utc>::UNIX_EPOCH.naive_utc()
}

/// Normalises a date string, falling back to [`epoch`] when it matches
/// neither encoding.
pub fn normalize(value: &str) -> NaiveDateTime {
    parse(value).unwrap_or_else(epoch)
}

/// Parses either encoding, returning `None` when neither applies.
///
/// Timestamps with an offset are converted to UTC wall-clock time. Localized
/// values are taken as-is, without any timezone conversion.
pub fn parse(value: &str) -> Option<NaiveDateTime> {
    if value.contains('T') {
        parse_iso(value)
    } else {
        parse_localized(value)
    }
}

fn parse_iso(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }
    ISO_NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

fn parse_localized(value: &str) -> Option<NaiveDateTime> {
    let caps = LOCALIZED_DATE.captures(value)?;
    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let year: i32 = caps[3].parse().ok()?;
    let hour: u32 = caps[4].parse().ok()?;
    let minute: u32 = caps[5].parse().ok()?;

    let hour = match (&caps[6], hour) {
        ("a.m.", 12) => 0,
        ("p.m.", h) if h != 12 => h + 12,
        (_, h) => h,
    };

    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, 0)
}

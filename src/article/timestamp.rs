use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

// Offset-less forms are read as UTC.
const ISO_NAIVE_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
const ISO_DATE_FORMAT: &str = "%Y-%m-%d";
const DISPLAY_DATE_FORMATS: &[&str] = &["%B %d, %Y", "%b %d, %Y", "%d %B %Y"];

/// ISO 8601 as written by the content store: RFC 3339, or a date-time or
/// bare date without an offset.
pub fn parse_iso(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ISO_NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }
    parse_date(raw, ISO_DATE_FORMAT)
}

/// Best-effort parse of a human-readable date string.
pub fn parse_loose(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Some(dt) = parse_iso(raw) {
        return Some(dt);
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    DISPLAY_DATE_FORMATS
        .iter()
        .find_map(|fmt| parse_date(raw, fmt))
}

fn parse_date(raw: &str, fmt: &str) -> Option<DateTime<Utc>> {
    NaiveDate::parse_from_str(raw, fmt)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Source of "now" for relative time labels.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock used outside of tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

const NAIVE_DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Parses the timestamp shapes the backend emits. Offset-less values are read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
}

/// Renders an ISO-8601 timestamp as `dd/mm/yyyy`, or hands the input back untouched.
pub fn format_date(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(timestamp) => timestamp.format("%d/%m/%Y").to_string(),
        None => raw.to_string(),
    }
}

pub fn format_date_range(start: &str, end: &str) -> String {
    format!("{} - {}", format_date(start), format_date(end))
}

/// `HH:MM` in UTC.
pub fn format_time(raw: &str) -> Option<String> {
    parse_timestamp(raw).map(|timestamp| timestamp.format("%H:%M").to_string())
}

/// Coarse "posted N ago" label.
///
/// Anything under an hour (including timestamps in the future) is "Just now", then whole
/// hours up to a day, then whole days with no upper bucket. Missing or unparsable input
/// yields an empty label.
pub fn format_posted_time(raw: Option<&str>, clock: &dyn Clock) -> String {
    let Some(posted) = raw.and_then(parse_timestamp) else {
        return String::new();
    };

    let hours = (clock.now() - posted).num_hours();
    if hours < 1 {
        "Just now".to_string()
    } else if hours < 24 {
        format!("{hours}h ago")
    } else {
        format!("{}d ago", hours / 24)
    }
}

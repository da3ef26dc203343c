use chrono::{DateTime, Utc};
use serde::Serialize;

use super::format::parse_timestamp;

/// Where "now" falls relative to an activity's running window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityTimeStatus {
    NotStarted,
    Ongoing,
    Ended,
}

impl ActivityTimeStatus {
    /// Activities missing either bound are treated as not started.
    pub fn at(start: Option<&str>, end: Option<&str>, now: DateTime<Utc>) -> Self {
        let (Some(start), Some(end)) = (
            start.and_then(parse_timestamp),
            end.and_then(parse_timestamp),
        ) else {
            return Self::NotStarted;
        };

        if now < start {
            Self::NotStarted
        } else if now > end {
            Self::Ended
        } else {
            Self::Ongoing
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::Ongoing => "ongoing",
            Self::Ended => "ended",
        }
    }
}

/// True when today's UTC calendar day lies within the activity's first and last day.
/// Organizers can only open check-in inside this window.
pub fn is_within_date_range(start: Option<&str>, end: Option<&str>, now: DateTime<Utc>) -> bool {
    match (
        start.and_then(parse_timestamp),
        end.and_then(parse_timestamp),
    ) {
        (Some(start), Some(end)) => {
            let today = now.date_naive();
            today >= start.date_naive() && today <= end.date_naive()
        }
        _ => false,
    }
}

pub fn is_multi_day(start: Option<&str>, end: Option<&str>) -> bool {
    match (
        start.and_then(parse_timestamp),
        end.and_then(parse_timestamp),
    ) {
        (Some(start), Some(end)) => start.date_naive() != end.date_naive(),
        _ => false,
    }
}

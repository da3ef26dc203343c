use chrono::NaiveDate;
use serde::Deserialize;

use super::format::parse_timestamp;
use super::transform::Event;

const ALL_CATEGORIES: &str = "All Categories";
const SOCIAL_IMPACT_ALIAS: &str = "Social Impact";
const SOCIAL_ENGAGEMENT: &str = "Social Engagement Activities";

/// Criteria from the search panel. An empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchFilter {
    pub query: String,
    pub categories: Vec<String>,
    pub start_on: Option<NaiveDate>,
    pub end_on: Option<NaiveDate>,
    /// Flips `end_on` from "ends on or before" to "ends on or after".
    pub end_after: bool,
}

impl SearchFilter {
    pub fn matches(&self, event: &Event) -> bool {
        self.matches_query(event)
            && self.matches_category(event)
            && self.matches_start(event)
            && self.matches_end(event)
    }

    fn matches_query(&self, event: &Event) -> bool {
        let query = self.query.trim().to_lowercase();
        query.is_empty()
            || event.title.to_lowercase().contains(&query)
            || event.location.to_lowercase().contains(&query)
    }

    fn matches_category(&self, event: &Event) -> bool {
        if self.categories.is_empty() || self.categories.iter().any(|c| c == ALL_CATEGORIES) {
            return true;
        }

        let social_alias = self.categories.iter().any(|c| c == SOCIAL_IMPACT_ALIAS);
        event.category.iter().any(|category| {
            if social_alias {
                category.contains(SOCIAL_ENGAGEMENT)
            } else {
                self.categories
                    .iter()
                    .any(|selected| category.contains(selected.as_str()))
            }
        })
    }

    fn matches_start(&self, event: &Event) -> bool {
        match (self.start_on, calendar_day(&event.date_start)) {
            (Some(start_on), Some(starts)) => starts >= start_on,
            _ => true,
        }
    }

    fn matches_end(&self, event: &Event) -> bool {
        match (self.end_on, calendar_day(&event.date_end)) {
            (Some(end_on), Some(ends)) if self.end_after => ends >= end_on,
            (Some(end_on), Some(ends)) => ends <= end_on,
            _ => true,
        }
    }
}

fn calendar_day(raw: &str) -> Option<NaiveDate> {
    parse_timestamp(raw).map(|timestamp| timestamp.date_naive())
}

pub fn search_events(events: &[Event], filter: &SearchFilter) -> Vec<Event> {
    events
        .iter()
        .filter(|event| filter.matches(event))
        .cloned()
        .collect()
}

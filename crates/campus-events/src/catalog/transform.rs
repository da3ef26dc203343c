use serde::Serialize;
use tracing::debug;

use super::domain::{Activity, ActivityId, ActivityStatus};
use super::format::{format_date, format_date_range, format_time};
use super::media::MediaBase;

pub const DEFAULT_TITLE: &str = "Untitled Activity";
pub const DEFAULT_IMAGE: &str = "/default-event.jpg";
pub const DEFAULT_ORGANIZER: &str = "Organizer";

/// Display-ready projection of an [`Activity`] used by every event card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    pub id: ActivityId,
    pub title: String,
    pub description: String,
    pub organizer: String,
    pub participants_count: u32,
    pub max_participants: u32,
    pub date_start: String,
    pub date_end: String,
    pub date_range: String,
    pub location: String,
    pub category: Vec<String>,
    pub img_src: String,
    pub status: ActivityStatus,
    pub status_color: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posted_at: Option<String>,
}

impl Default for Event {
    fn default() -> Self {
        Self {
            id: ActivityId::default(),
            title: DEFAULT_TITLE.to_string(),
            description: String::new(),
            organizer: DEFAULT_ORGANIZER.to_string(),
            participants_count: 0,
            max_participants: 0,
            date_start: String::new(),
            date_end: String::new(),
            date_range: String::new(),
            location: String::new(),
            category: Vec::new(),
            img_src: DEFAULT_IMAGE.to_string(),
            status: ActivityStatus::Unknown,
            status_color: ActivityStatus::Unknown.badge_color(),
            posted_at: None,
        }
    }
}

pub type TextAccessor = for<'a> fn(&'a Activity) -> Option<&'a str>;

fn cover_image_url(activity: &Activity) -> Option<&str> {
    activity.cover_image_url.as_deref()
}

fn cover_image(activity: &Activity) -> Option<&str> {
    activity.cover_image.as_deref()
}

fn first_poster(activity: &Activity) -> Option<&str> {
    activity
        .poster_images
        .as_deref()?
        .iter()
        .find_map(|poster| poster.image.as_deref().filter(|image| !image.is_empty()))
}

fn title(activity: &Activity) -> Option<&str> {
    activity.title.as_deref()
}

fn organizer_name(activity: &Activity) -> Option<&str> {
    activity.organizer_name.as_deref()
}

/// Candidate sources for the card image, most specific first.
pub const CARD_IMAGE_CHAIN: [TextAccessor; 2] = [cover_image_url, cover_image];

/// Detail pages also fall back to the first uploaded poster.
pub const DETAIL_IMAGE_CHAIN: [TextAccessor; 3] = [cover_image_url, cover_image, first_poster];

pub const TITLE_CHAIN: [TextAccessor; 1] = [title];

pub const ORGANIZER_CHAIN: [TextAccessor; 1] = [organizer_name];

/// Evaluates `chain` in order and returns the first non-blank value.
pub fn resolve_text<'a>(activity: &'a Activity, chain: &[TextAccessor]) -> Option<&'a str> {
    chain
        .iter()
        .find_map(|accessor| accessor(activity).filter(|value| !value.trim().is_empty()))
}

fn resolve_or(activity: &Activity, chain: &[TextAccessor], fallback: &str) -> String {
    resolve_text(activity, chain).unwrap_or(fallback).to_string()
}

/// Builds the card view model. An absent activity yields [`Event::default`].
pub fn transform(activity: Option<&Activity>) -> Event {
    let Some(activity) = activity else {
        debug!("transforming absent activity into placeholder event");
        return Event::default();
    };

    let date_start = activity.start_at.clone().unwrap_or_default();
    let date_end = activity.end_at.clone().unwrap_or_default();
    let date_range = if date_start.is_empty() && date_end.is_empty() {
        String::new()
    } else {
        format_date_range(&date_start, &date_end)
    };
    let status = activity.status.unwrap_or_default();

    Event {
        id: activity.id.unwrap_or_default(),
        title: resolve_or(activity, &TITLE_CHAIN, DEFAULT_TITLE),
        description: activity.description.clone().unwrap_or_default(),
        organizer: resolve_or(activity, &ORGANIZER_CHAIN, DEFAULT_ORGANIZER),
        participants_count: activity.current_participants.unwrap_or(0),
        max_participants: activity.max_participants.unwrap_or(0),
        date_start,
        date_end,
        date_range,
        location: activity.location.clone().unwrap_or_default(),
        category: activity.categories.clone().unwrap_or_default(),
        img_src: resolve_or(activity, &CARD_IMAGE_CHAIN, DEFAULT_IMAGE),
        status,
        status_color: status.badge_color(),
        posted_at: activity.created_at.clone(),
    }
}

impl From<&Activity> for Event {
    fn from(activity: &Activity) -> Self {
        transform(Some(activity))
    }
}

pub fn transform_all(activities: &[Activity]) -> Vec<Event> {
    activities.iter().map(Event::from).collect()
}

/// Richer projection for the activity detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventDetail {
    #[serde(flatten)]
    pub event: Event,
    pub date_start_label: String,
    pub date_end_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_end: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    pub cover_image: String,
    pub gallery: Vec<String>,
}

pub fn transform_detail(activity: &Activity, media: &MediaBase) -> EventDetail {
    let event = transform(Some(activity));

    let cover_image = resolve_text(activity, &DETAIL_IMAGE_CHAIN)
        .map(|raw| media.resolve(raw))
        .unwrap_or_else(|| DEFAULT_IMAGE.to_string());

    let gallery = activity
        .poster_images
        .as_deref()
        .unwrap_or_default()
        .iter()
        .filter_map(|poster| poster.image.as_deref())
        .filter(|image| !image.is_empty())
        .map(|image| media.resolve(image))
        .collect();

    EventDetail {
        date_start_label: format_date(&event.date_start),
        date_end_label: format_date(&event.date_end),
        time_start: format_time(&event.date_start),
        time_end: format_time(&event.date_end),
        rejection_reason: activity
            .rejection_reason
            .clone()
            .filter(|reason| !reason.trim().is_empty()),
        cover_image,
        gallery,
        event,
    }
}

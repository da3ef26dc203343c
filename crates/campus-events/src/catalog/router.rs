use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::json;

use super::category::{category_background, events_by_type, CategoryBackground, EventType};
use super::classify::{all_events, my_events, opening_events, EventFilter};
use super::domain::{Activity, Application, OrganizerProfileId, UserRole};
use super::media::MediaBase;
use super::search::{search_events, SearchFilter};
use super::transform::{transform, transform_all, transform_detail, Event, EventDetail};

/// Viewer context and activity snapshot posted by the caller.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListingRequest {
    pub activities: Vec<Activity>,
    #[serde(deserialize_with = "role_from_label")]
    pub role: Option<UserRole>,
    pub is_authenticated: bool,
    pub applications: Option<Vec<Application>>,
    pub organizer_profile_id: Option<OrganizerProfileId>,
}

impl ListingRequest {
    pub fn filter(&self) -> EventFilter<'_> {
        EventFilter {
            activities: &self.activities,
            role: self.role,
            is_authenticated: self.is_authenticated,
            applications: self.applications.as_deref(),
            organizer_profile_id: self.organizer_profile_id,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchRequest {
    pub activities: Vec<Activity>,
    #[serde(flatten)]
    pub filter: SearchFilter,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ActivitiesRequest {
    pub activities: Vec<Activity>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EventListing {
    pub count: usize,
    pub events: Vec<Event>,
}

impl From<Vec<Event>> for EventListing {
    fn from(events: Vec<Event>) -> Self {
        Self {
            count: events.len(),
            events,
        }
    }
}

/// Unrecognised role labels are treated as "no role" rather than rejected.
fn role_from_label<'de, D>(deserializer: D) -> Result<Option<UserRole>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(UserRole::parse))
}

/// Router exposing the stateless listing operations over HTTP.
pub fn catalog_router(media: MediaBase) -> Router {
    Router::new()
        .route("/api/v1/events", post(all_events_handler))
        .route("/api/v1/events/mine", post(my_events_handler))
        .route("/api/v1/events/opening", post(opening_events_handler))
        .route("/api/v1/events/search", post(search_handler))
        .route("/api/v1/events/transform", post(transform_handler))
        .route("/api/v1/events/detail", post(detail_handler))
        .route("/api/v1/event-types/:slug", post(event_type_handler))
        .route(
            "/api/v1/categories/:label/background",
            get(category_background_handler),
        )
        .with_state(Arc::new(media))
}

pub(crate) async fn all_events_handler(Json(request): Json<ListingRequest>) -> Json<EventListing> {
    Json(all_events(&request.filter()).into())
}

pub(crate) async fn my_events_handler(Json(request): Json<ListingRequest>) -> Json<EventListing> {
    Json(my_events(&request.filter()).into())
}

pub(crate) async fn opening_events_handler(
    Json(request): Json<ActivitiesRequest>,
) -> Json<EventListing> {
    Json(opening_events(&request.activities).into())
}

pub(crate) async fn search_handler(Json(request): Json<SearchRequest>) -> Json<EventListing> {
    let events = transform_all(&request.activities);
    Json(search_events(&events, &request.filter).into())
}

pub(crate) async fn transform_handler(Json(activity): Json<Option<Activity>>) -> Json<Event> {
    Json(transform(activity.as_ref()))
}

pub(crate) async fn detail_handler(
    State(media): State<Arc<MediaBase>>,
    Json(activity): Json<Activity>,
) -> Json<EventDetail> {
    Json(transform_detail(&activity, &media))
}

pub(crate) async fn event_type_handler(
    Path(slug): Path<String>,
    Json(request): Json<ActivitiesRequest>,
) -> Response {
    match EventType::from_slug(&slug) {
        Some(event_type) => {
            let section = events_by_type(&request.activities, event_type);
            (StatusCode::OK, Json(section)).into_response()
        }
        None => {
            let payload = json!({
                "error": format!("unknown event type '{slug}'"),
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn category_background_handler(
    Path(label): Path<String>,
) -> Json<CategoryBackground> {
    Json(category_background(&label))
}

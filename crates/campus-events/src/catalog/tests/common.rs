use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::catalog::domain::{
    Activity, ActivityId, ActivityStatus, Application, ApplicationStatus, OrganizerProfileId,
};
use crate::catalog::format::FixedClock;

pub(super) fn activity(id: u64, status: ActivityStatus) -> Activity {
    Activity {
        id: Some(ActivityId(id)),
        status: Some(status),
        ..Activity::default()
    }
}

pub(super) fn scheduled(id: u64, status: ActivityStatus, start_at: &str, created_at: &str) -> Activity {
    Activity {
        start_at: Some(start_at.to_string()),
        created_at: Some(created_at.to_string()),
        ..activity(id, status)
    }
}

pub(super) fn owned(id: u64, profile: u64, created_at: &str) -> Activity {
    Activity {
        id: Some(ActivityId(id)),
        organizer_profile_id: Some(OrganizerProfileId(profile)),
        created_at: Some(created_at.to_string()),
        ..Activity::default()
    }
}

/// Open, complete, and upcoming activities with ids 1, 2, 3.
pub(super) fn mixed_activities() -> Vec<Activity> {
    vec![
        scheduled(1, ActivityStatus::Open, "2025-01-02T00:00:00Z", "2025-01-01T00:00:00Z"),
        scheduled(2, ActivityStatus::Complete, "2024-12-01T00:00:00Z", "2024-12-01T00:00:00Z"),
        scheduled(3, ActivityStatus::Upcoming, "2025-02-01T00:00:00Z", "2025-01-15T00:00:00Z"),
    ]
}

pub(super) fn application(activity: u64, status: ApplicationStatus) -> Application {
    Application {
        activity: Some(ActivityId(activity)),
        status: Some(status),
        submitted_at: Some("2025-01-01T08:00:00Z".to_string()),
    }
}

pub(super) fn full_activity() -> Activity {
    Activity {
        id: Some(ActivityId(7)),
        title: Some("Campus Cleanup".to_string()),
        description: Some("Help tidy the quad".to_string()),
        organizer_name: Some("Green Club".to_string()),
        current_participants: Some(2),
        max_participants: Some(10),
        start_at: Some("2025-01-01T09:00:00Z".to_string()),
        end_at: Some("2025-01-02T17:30:00Z".to_string()),
        created_at: Some("2024-12-20T10:00:00Z".to_string()),
        location: Some("Main Quad".to_string()),
        categories: Some(vec!["Social Engagement Activities".to_string()]),
        cover_image: Some("/c.jpg".to_string()),
        status: Some(ActivityStatus::Open),
        ..Activity::default()
    }
}

pub(super) fn ids<'a>(events: impl IntoIterator<Item = &'a crate::catalog::Event>) -> Vec<u64> {
    events.into_iter().map(|event| event.id.0).collect()
}

pub(super) fn instant(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw)
        .expect("valid rfc3339 instant")
        .with_timezone(&Utc)
}

pub(super) fn clock_at_noon() -> FixedClock {
    FixedClock(
        Utc.with_ymd_and_hms(2025, 11, 10, 12, 0, 0)
            .single()
            .expect("valid instant"),
    )
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

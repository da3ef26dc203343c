//! End-to-end listings built from backend-shaped JSON through the public catalog facade.

use campus_events::catalog::{
    all_events, format_date, format_posted_time, my_events, opening_events, parse_activities,
    parse_applications, transform, EventFilter, FixedClock, OrganizerProfileId, UserRole,
};
use chrono::{TimeZone, Utc};

const ACTIVITIES: &str = r#"{
  "success": true,
  "data": {
    "count": 5,
    "next": null,
    "previous": null,
    "results": [
      {
        "id": 101,
        "organizer_profile_id": 5,
        "organizer_name": "Student Union",
        "title": "Welcome Week",
        "categories": ["University Activities"],
        "start_at": "2025-08-18T09:00:00Z",
        "end_at": "2025-08-22T17:00:00Z",
        "created_at": "2025-07-01T10:00:00Z",
        "status": "open",
        "current_participants": 120,
        "max_participants": 300,
        "cover_image_url": "https://cdn.example.org/welcome.png"
      },
      {
        "id": 102,
        "organizer_profile_id": 5,
        "title": "Leadership Camp",
        "start_at": "2025-06-01T09:00:00Z",
        "created_at": "2025-05-01T10:00:00Z",
        "status": "complete"
      },
      {
        "id": 103,
        "organizer_profile_id": 6,
        "title": "River Cleanup",
        "start_at": "2025-08-10T06:00:00Z",
        "created_at": "2025-07-20T10:00:00Z",
        "status": "upcoming"
      },
      {
        "id": 104,
        "organizer_profile_id": 5,
        "title": "Hackathon",
        "start_at": "2025-09-01T09:00:00Z",
        "created_at": "2025-07-25T10:00:00Z",
        "status": "pending"
      },
      {
        "id": 105,
        "organizer_profile_id": 6,
        "title": null,
        "status": "rejected",
        "rejection_reason": "Duplicate submission"
      }
    ]
  }
}"#;

const APPLICATIONS: &str = r#"[
  { "activity": 102, "status": "approved", "submitted_at": "2025-05-02T10:00:00Z" },
  { "activity": 101, "status": "approved", "submitted_at": "2025-07-02T10:00:00Z" },
  { "activity": 103, "status": "pending", "submitted_at": "2025-07-21T10:00:00Z" },
  { "activity": null, "status": "approved", "submitted_at": "2025-01-01T10:00:00Z" }
]"#;

fn ids(events: &[campus_events::catalog::Event]) -> Vec<u64> {
    events.iter().map(|event| event.id.0).collect()
}

#[test]
fn student_dashboard_and_public_listings() {
    let activities = parse_activities(ACTIVITIES).expect("activities parse");
    let applications = parse_applications(APPLICATIONS).expect("applications parse");

    let student = EventFilter::new(&activities)
        .authenticated_as(UserRole::Student)
        .with_applications(&applications);

    assert_eq!(ids(&my_events(&student)), vec![101, 102]);
    assert_eq!(ids(&all_events(&student)), vec![101, 103]);
    assert_eq!(ids(&opening_events(&activities)), vec![103, 101]);
}

#[test]
fn organizer_and_admin_views() {
    let activities = parse_activities(ACTIVITIES).expect("activities parse");

    let organizer = EventFilter::new(&activities)
        .authenticated_as(UserRole::Organizer)
        .with_organizer_profile(OrganizerProfileId(5));
    assert_eq!(ids(&my_events(&organizer)), vec![104, 101, 102]);

    let admin = EventFilter::new(&activities).authenticated_as(UserRole::Admin);
    assert_eq!(ids(&all_events(&admin)), vec![101, 102, 103, 104, 105]);
    assert!(my_events(&admin).is_empty());
}

#[test]
fn card_rendering_helpers() {
    let activities = parse_activities(ACTIVITIES).expect("activities parse");

    let welcome = transform(activities.first());
    assert_eq!(welcome.img_src, "https://cdn.example.org/welcome.png");
    assert_eq!(welcome.date_range, "18/08/2025 - 22/08/2025");
    assert_eq!(welcome.organizer, "Student Union");

    let rejected = transform(activities.last());
    assert_eq!(rejected.title, "Untitled Activity");
    assert_eq!(rejected.organizer, "Organizer");

    let clock = FixedClock(
        Utc.with_ymd_and_hms(2025, 7, 3, 10, 0, 0)
            .single()
            .expect("valid instant"),
    );
    assert_eq!(format_posted_time(welcome.posted_at.as_deref(), &clock), "2d ago");
    assert_eq!(format_date("TBA"), "TBA");
}

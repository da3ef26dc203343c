use super::common::*;
use crate::catalog::domain::{Activity, ActivityId, ActivityStatus, PosterImage};
use crate::catalog::media::MediaBase;
use crate::catalog::transform::{
    resolve_text, transform, transform_detail, Event, CARD_IMAGE_CHAIN, DEFAULT_IMAGE,
    DEFAULT_ORGANIZER, DEFAULT_TITLE,
};

#[test]
fn absent_activity_becomes_placeholder_event() {
    let event = transform(None);

    assert_eq!(event.title, DEFAULT_TITLE);
    assert_eq!(event.img_src, DEFAULT_IMAGE);
    assert_eq!(event.participants_count, 0);
    assert_eq!(event.max_participants, 0);
    assert_eq!(event, Event::default());
}

#[test]
fn maps_fields_from_activity() {
    let event = transform(Some(&full_activity()));

    assert_eq!(event.id, ActivityId(7));
    assert_eq!(event.title, "Campus Cleanup");
    assert_eq!(event.organizer, "Green Club");
    assert_eq!(event.participants_count, 2);
    assert_eq!(event.max_participants, 10);
    assert_eq!(event.date_range, "01/01/2025 - 02/01/2025");
    assert_eq!(event.location, "Main Quad");
    assert_eq!(event.img_src, "/c.jpg");
    assert_eq!(event.status, ActivityStatus::Open);
    assert_eq!(event.status_color, "bg-yellow-500");
    assert_eq!(event.posted_at.as_deref(), Some("2024-12-20T10:00:00Z"));
}

#[test]
fn cover_url_takes_precedence_over_raw_cover() {
    let activity = Activity {
        cover_image_url: Some("https://cdn.example.org/c.png".to_string()),
        ..full_activity()
    };

    assert_eq!(transform(Some(&activity)).img_src, "https://cdn.example.org/c.png");
}

#[test]
fn blank_candidates_fall_through_the_chain() {
    let activity = Activity {
        cover_image_url: Some(String::new()),
        cover_image: Some("   ".to_string()),
        organizer_name: None,
        ..full_activity()
    };

    assert!(resolve_text(&activity, &CARD_IMAGE_CHAIN).is_none());
    let event = transform(Some(&activity));
    assert_eq!(event.img_src, DEFAULT_IMAGE);
    assert_eq!(event.organizer, DEFAULT_ORGANIZER);
}

#[test]
fn sparse_activity_uses_defaults() {
    let event = transform(Some(&Activity::default()));

    assert_eq!(event.id, ActivityId(0));
    assert_eq!(event.title, DEFAULT_TITLE);
    assert!(event.date_range.is_empty());
    assert!(event.category.is_empty());
    assert_eq!(event.status, ActivityStatus::Unknown);
}

#[test]
fn transform_is_repeatable() {
    let activity = full_activity();
    assert_eq!(transform(Some(&activity)), transform(Some(&activity)));
    assert_eq!(transform(None), transform(None));
}

#[test]
fn detail_view_resolves_media_and_times() {
    let media = MediaBase::new("http://localhost:8000");
    let activity = Activity {
        cover_image: None,
        poster_images: Some(vec![
            PosterImage { image: None },
            PosterImage {
                image: Some("posters/one.png".to_string()),
            },
            PosterImage {
                image: Some("https://cdn.example.org/two.png".to_string()),
            },
        ]),
        rejection_reason: Some("  ".to_string()),
        ..full_activity()
    };

    let detail = transform_detail(&activity, &media);

    assert_eq!(detail.cover_image, "http://localhost:8000/media/posters/one.png");
    assert_eq!(
        detail.gallery,
        vec![
            "http://localhost:8000/media/posters/one.png".to_string(),
            "https://cdn.example.org/two.png".to_string(),
        ]
    );
    assert_eq!(detail.time_start.as_deref(), Some("09:00"));
    assert_eq!(detail.time_end.as_deref(), Some("17:30"));
    assert_eq!(detail.date_start_label, "01/01/2025");
    assert!(detail.rejection_reason.is_none());
    // Card image keeps the plain chain without posters.
    assert_eq!(detail.event.img_src, DEFAULT_IMAGE);
}

#[test]
fn detail_view_without_images_uses_placeholder() {
    let media = MediaBase::new("http://localhost:8000");
    let activity = Activity {
        cover_image: None,
        rejection_reason: Some("Missing venue booking".to_string()),
        ..full_activity()
    };

    let detail = transform_detail(&activity, &media);

    assert_eq!(detail.cover_image, DEFAULT_IMAGE);
    assert!(detail.gallery.is_empty());
    assert_eq!(detail.rejection_reason.as_deref(), Some("Missing venue booking"));
}

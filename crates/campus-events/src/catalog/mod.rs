//! Activity view models and the role-aware listings built from them.
//!
//! Everything here is a pure function of its inputs. Records come from the activities
//! backend already fetched; nothing in this module performs I/O or keeps state between
//! calls, so listings can be computed concurrently from any number of request handlers.

pub mod category;
pub mod classify;
pub mod domain;
pub mod envelope;
pub mod format;
pub mod media;
pub mod router;
pub mod schedule;
pub mod search;
pub mod transform;

#[cfg(test)]
mod tests;

pub use category::{
    category_background, category_chip_color, events_by_type, events_in_category,
    CategoryBackground, EventType, EventTypeSection,
};
pub use classify::{all_events, my_events, opening_events, EventFilter};
pub use domain::{
    Activity, ActivityId, ActivityStatus, Application, ApplicationStatus, OrganizerProfileId,
    PosterImage, UserRole,
};
pub use envelope::{
    parse_activities, parse_applications, ActivitiesPayload, ApiResponse, CatalogError,
};
pub use format::{format_date, format_posted_time, Clock, FixedClock, SystemClock};
pub use media::MediaBase;
pub use router::catalog_router;
pub use schedule::{is_multi_day, is_within_date_range, ActivityTimeStatus};
pub use search::{search_events, SearchFilter};
pub use transform::{transform, transform_all, transform_detail, Event, EventDetail};

use std::cmp::Reverse;
use std::collections::HashSet;

use chrono::{DateTime, Utc};
use tracing::debug;

use super::domain::{
    Activity, ActivityId, ActivityStatus, Application, ApplicationStatus, OrganizerProfileId,
    UserRole,
};
use super::format::parse_timestamp;
use super::transform::{transform, Event};

/// Everything a listing needs to know about the viewer, passed explicitly on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventFilter<'a> {
    pub activities: &'a [Activity],
    pub role: Option<UserRole>,
    pub is_authenticated: bool,
    pub applications: Option<&'a [Application]>,
    pub organizer_profile_id: Option<OrganizerProfileId>,
}

impl<'a> EventFilter<'a> {
    pub fn new(activities: &'a [Activity]) -> Self {
        Self {
            activities,
            ..Self::default()
        }
    }

    pub fn authenticated_as(mut self, role: UserRole) -> Self {
        self.role = Some(role);
        self.is_authenticated = true;
        self
    }

    pub fn with_applications(mut self, applications: &'a [Application]) -> Self {
        self.applications = Some(applications);
        self
    }

    pub fn with_organizer_profile(mut self, organizer_profile_id: OrganizerProfileId) -> Self {
        self.organizer_profile_id = Some(organizer_profile_id);
        self
    }
}

/// The viewer's personal dashboard.
///
/// Students see activities they were approved for, completed ones last. Organizers see
/// their own activities, newest first. Everyone else, and any viewer missing the context
/// their role needs, gets nothing.
pub fn my_events(filter: &EventFilter<'_>) -> Vec<Event> {
    if !filter.is_authenticated {
        return Vec::new();
    }

    let selected = match filter.role {
        Some(UserRole::Student) => match filter.applications {
            Some(applications) => approved_activities(filter.activities, applications),
            None => Vec::new(),
        },
        Some(UserRole::Organizer) => match filter.organizer_profile_id {
            Some(profile_id) => organizer_activities(filter.activities, profile_id),
            None => Vec::new(),
        },
        Some(UserRole::Admin) | None => Vec::new(),
    };

    debug!(
        role = filter.role.map(UserRole::label),
        candidates = filter.activities.len(),
        selected = selected.len(),
        "computed personal events"
    );

    selected.into_iter().map(|activity| transform(Some(activity))).collect()
}

/// Browsable listing. Organizers and admins see every activity; the public and students
/// only see open or upcoming ones.
pub fn all_events(filter: &EventFilter<'_>) -> Vec<Event> {
    let operator = filter.is_authenticated
        && matches!(filter.role, Some(UserRole::Organizer | UserRole::Admin));

    let events: Vec<Event> = filter
        .activities
        .iter()
        .filter(|activity| operator || is_publicly_visible(activity))
        .map(|activity| transform(Some(activity)))
        .collect();

    debug!(
        operator,
        candidates = filter.activities.len(),
        selected = events.len(),
        "computed browsable events"
    );

    events
}

/// Open or upcoming activities, soonest start first. Activities without a readable start
/// time trail the list in their original order.
pub fn opening_events(activities: &[Activity]) -> Vec<Event> {
    let mut keyed: Vec<(Option<DateTime<Utc>>, &Activity)> = activities
        .iter()
        .filter(|activity| is_publicly_visible(activity))
        .map(|activity| (start_time(activity), activity))
        .collect();

    keyed.sort_by_key(|(start, _)| (start.is_none(), *start));

    debug!(
        candidates = activities.len(),
        selected = keyed.len(),
        "computed opening events"
    );

    keyed
        .into_iter()
        .map(|(_, activity)| transform(Some(activity)))
        .collect()
}

fn is_publicly_visible(activity: &Activity) -> bool {
    activity
        .status
        .is_some_and(ActivityStatus::is_publicly_visible)
}

fn start_time(activity: &Activity) -> Option<DateTime<Utc>> {
    activity.start_at.as_deref().and_then(parse_timestamp)
}

fn created_time(activity: &Activity) -> Option<DateTime<Utc>> {
    activity.created_at.as_deref().and_then(parse_timestamp)
}

fn approved_activities<'a>(
    activities: &'a [Activity],
    applications: &[Application],
) -> Vec<&'a Activity> {
    let approved: HashSet<ActivityId> = applications
        .iter()
        .filter(|application| application.status == Some(ApplicationStatus::Approved))
        .filter_map(|application| application.activity)
        .collect();

    let mut selected: Vec<&Activity> = unique_by_id(
        activities
            .iter()
            .filter(|activity| activity.id.is_some_and(|id| approved.contains(&id))),
    );

    // Stable sort: relative order inside each bucket is preserved.
    selected.sort_by_key(|activity| activity.status == Some(ActivityStatus::Complete));
    selected
}

fn organizer_activities(
    activities: &[Activity],
    profile_id: OrganizerProfileId,
) -> Vec<&Activity> {
    let owned = unique_by_id(
        activities
            .iter()
            .filter(|activity| activity.organizer_profile_id == Some(profile_id)),
    );

    let mut keyed: Vec<(Option<DateTime<Utc>>, &Activity)> = owned
        .into_iter()
        .map(|activity| (created_time(activity), activity))
        .collect();

    // `None` orders below every timestamp, so reversing also sends undated activities last.
    keyed.sort_by_key(|(created, _)| Reverse(*created));
    keyed.into_iter().map(|(_, activity)| activity).collect()
}

/// Keeps the first occurrence of each activity id. Records without an id are kept as-is.
fn unique_by_id<'a>(activities: impl Iterator<Item = &'a Activity>) -> Vec<&'a Activity> {
    let mut seen = HashSet::new();
    activities
        .filter(|activity| match activity.id {
            Some(id) => seen.insert(id),
            None => true,
        })
        .collect()
}

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Backend identifier of an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityId(pub u64);

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of the organizer profile that owns an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrganizerProfileId(pub u64);

/// Activity record as returned by the backend.
///
/// Every field is optional and tolerant of `null` or mistyped values so a single
/// malformed record never poisons a whole listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<ActivityId>,
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub organizer_profile_id: Option<OrganizerProfileId>,
    #[serde(default, deserialize_with = "lenient")]
    pub organizer_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub organizer_email: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub current_participants: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub max_participants: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub start_at: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub end_at: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub categories: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub cover_image_url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub cover_image: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub poster_images: Option<Vec<PosterImage>>,
    #[serde(default, deserialize_with = "lenient")]
    pub status: Option<ActivityStatus>,
    #[serde(default, deserialize_with = "lenient")]
    pub rejection_reason: Option<String>,
}

/// Additional poster uploaded alongside an activity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PosterImage {
    #[serde(default, deserialize_with = "lenient")]
    pub image: Option<String>,
}

/// A student's application to attend an activity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Application {
    /// `None` once the activity has been deleted on the backend.
    #[serde(default, deserialize_with = "lenient")]
    pub activity: Option<ActivityId>,
    #[serde(default, deserialize_with = "lenient")]
    pub status: Option<ApplicationStatus>,
    #[serde(default, deserialize_with = "lenient")]
    pub submitted_at: Option<String>,
}

/// Lifecycle state of an activity. Owned by the backend, only read here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActivityStatus {
    Draft,
    Pending,
    Open,
    Upcoming,
    During,
    Full,
    Closed,
    Complete,
    Cancelled,
    Rejected,
    PendingDeletion,
    #[default]
    Unknown,
}

impl ActivityStatus {
    pub fn from_label(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "draft" => Self::Draft,
            "pending" => Self::Pending,
            "open" => Self::Open,
            "upcoming" => Self::Upcoming,
            "during" => Self::During,
            "full" => Self::Full,
            "closed" => Self::Closed,
            "complete" | "completed" => Self::Complete,
            "cancelled" | "canceled" => Self::Cancelled,
            "rejected" => Self::Rejected,
            "pending_deletion" | "pending-deletion" => Self::PendingDeletion,
            _ => Self::Unknown,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Pending => "pending",
            Self::Open => "open",
            Self::Upcoming => "upcoming",
            Self::During => "during",
            Self::Full => "full",
            Self::Closed => "closed",
            Self::Complete => "complete",
            Self::Cancelled => "cancelled",
            Self::Rejected => "rejected",
            Self::PendingDeletion => "pending_deletion",
            Self::Unknown => "unknown",
        }
    }

    /// Open and upcoming activities are the only ones shown to the public and to students.
    pub const fn is_publicly_visible(self) -> bool {
        matches!(self, Self::Open | Self::Upcoming)
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Complete | Self::Rejected)
    }

    /// Colour token for the status badge drawn on event cards.
    pub const fn badge_color(self) -> &'static str {
        match self {
            Self::Closed => "bg-yellow-400",
            Self::Draft
            | Self::Pending
            | Self::Open
            | Self::Full
            | Self::Cancelled
            | Self::Rejected
            | Self::PendingDeletion => "bg-yellow-500",
            Self::Upcoming => "bg-red-700",
            Self::During => "bg-indigo-600",
            Self::Complete => "bg-green-600",
            Self::Unknown => "bg-gray-400",
        }
    }
}

impl Serialize for ActivityStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for ActivityStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_label(&raw))
    }
}

/// Review state of a student's application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
    Cancelled,
    CheckedIn,
    #[default]
    Unknown,
}

impl ApplicationStatus {
    pub fn from_label(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "pending" => Self::Pending,
            "approved" => Self::Approved,
            "rejected" => Self::Rejected,
            "cancelled" | "canceled" => Self::Cancelled,
            "checked_in" | "checked-in" => Self::CheckedIn,
            _ => Self::Unknown,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Cancelled => "cancelled",
            Self::CheckedIn => "checked_in",
            Self::Unknown => "unknown",
        }
    }
}

impl Serialize for ApplicationStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for ApplicationStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_label(&raw))
    }
}

/// Account role of the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Student,
    Organizer,
    Admin,
}

impl UserRole {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "student" => Some(Self::Student),
            "organizer" => Some(Self::Organizer),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Organizer => "organizer",
            Self::Admin => "admin",
        }
    }
}

/// Accepts any JSON value and keeps it only when it has the expected shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

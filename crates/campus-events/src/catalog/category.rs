use serde::Serialize;

use super::domain::Activity;
use super::transform::{transform, Event};

/// Decorative header treatment for a category section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryBackground {
    pub color: &'static str,
    pub background_image: &'static str,
}

const UNIVERSITY_BACKGROUND: CategoryBackground = CategoryBackground {
    color: "bg-gradient-to-r from-[#A1E59E]/26 to-[#5992FF]/26",
    background_image: "/brain-read.svg",
};

const COMPETENCIES_BACKGROUND: CategoryBackground = CategoryBackground {
    color: "bg-gradient-to-r from-[#A1E59E]/26 to-[#FFEA47]/26",
    background_image: "/brain-think.svg",
};

const SOCIAL_BACKGROUND: CategoryBackground = CategoryBackground {
    color: "bg-gradient-to-r from-[#A1E59E]/26 to-[#FF999B]/26",
    background_image: "/brain-smart.svg",
};

const NEUTRAL_BACKGROUND: CategoryBackground = CategoryBackground {
    color: "bg-gray-100",
    background_image: "",
};

const CATEGORY_BACKGROUNDS: [(&str, CategoryBackground); 7] = [
    ("University Activities", UNIVERSITY_BACKGROUND),
    ("Enhance Competencies", COMPETENCIES_BACKGROUND),
    ("Social Engagement Activities", SOCIAL_BACKGROUND),
    ("Development of Morality and Ethics", COMPETENCIES_BACKGROUND),
    ("Development of Thinking and Learning Skills", COMPETENCIES_BACKGROUND),
    (
        "Development of Interpersonal Skills and Relationship Building",
        COMPETENCIES_BACKGROUND,
    ),
    ("Development of Health and Well-being", COMPETENCIES_BACKGROUND),
];

const CATEGORY_CHIP_COLORS: [(&str, &str); 7] = [
    ("University Activities", "bg-[#B3E6FF]"),
    ("Social Engagement Activities", "bg-[#FFEA47]"),
    ("Enhance Competencies", "bg-[#FFBDBE]"),
    ("Development of Morality and Ethics", "bg-[#FFBDBE]"),
    ("Development of Thinking and Learning Skills", "bg-[#FFBDBE]"),
    (
        "Development of Interpersonal Skills and Relationship Building",
        "bg-[#FFBDBE]",
    ),
    ("Development of Health and Well-being", "bg-[#FFBDBE]"),
];

/// Background for a category label; unknown labels get the neutral grey with no image.
pub fn category_background(label: &str) -> CategoryBackground {
    CATEGORY_BACKGROUNDS
        .iter()
        .find(|(known, _)| *known == label)
        .map(|(_, background)| *background)
        .unwrap_or(NEUTRAL_BACKGROUND)
}

pub fn category_chip_color(label: &str) -> &'static str {
    CATEGORY_CHIP_COLORS
        .iter()
        .find(|(known, _)| *known == label)
        .map(|(_, color)| *color)
        .unwrap_or("bg-gray-200")
}

const COMPETENCY_KEYWORDS: [&str; 4] = [
    "Development of Morality",
    "Development of Thinking",
    "Development of Interpersonal",
    "Development of Health",
];

/// Top-level browsing sections on the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    UniversityActivities,
    EnhanceCompetencies,
    SocialEngagementActivities,
}

impl EventType {
    pub const fn ordered() -> [Self; 3] {
        [
            Self::UniversityActivities,
            Self::EnhanceCompetencies,
            Self::SocialEngagementActivities,
        ]
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|event_type| event_type.slug() == slug)
    }

    pub const fn slug(self) -> &'static str {
        match self {
            Self::UniversityActivities => "university-activities",
            Self::EnhanceCompetencies => "enhance-competencies",
            Self::SocialEngagementActivities => "social-engagement-activities",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::UniversityActivities => "University Activities",
            Self::EnhanceCompetencies => "Enhance Competencies",
            Self::SocialEngagementActivities => "Social Engagement Activities",
        }
    }

    pub fn background(self) -> CategoryBackground {
        category_background(self.title())
    }

    /// Backend categories are free text, so membership is a substring test.
    pub fn matches(self, category: &str) -> bool {
        match self {
            Self::UniversityActivities => category.contains("University Activities"),
            Self::EnhanceCompetencies => COMPETENCY_KEYWORDS
                .iter()
                .any(|keyword| category.contains(keyword)),
            Self::SocialEngagementActivities => category.contains("Social Engagement Activities"),
        }
    }

    pub fn matches_any(self, categories: &[String]) -> bool {
        categories.iter().any(|category| self.matches(category))
    }
}

/// Section payload for an event-type landing page.
#[derive(Debug, Clone, Serialize)]
pub struct EventTypeSection {
    pub event_type: EventType,
    pub slug: &'static str,
    pub title: &'static str,
    pub background: CategoryBackground,
    pub events: Vec<Event>,
}

pub fn events_by_type(activities: &[Activity], event_type: EventType) -> EventTypeSection {
    let events = activities
        .iter()
        .filter(|activity| {
            activity
                .categories
                .as_deref()
                .is_some_and(|categories| event_type.matches_any(categories))
        })
        .map(|activity| transform(Some(activity)))
        .collect();

    EventTypeSection {
        event_type,
        slug: event_type.slug(),
        title: event_type.title(),
        background: event_type.background(),
        events,
    }
}

/// Activities tagged with exactly `label`.
pub fn events_in_category(activities: &[Activity], label: &str) -> Vec<Event> {
    activities
        .iter()
        .filter(|activity| {
            activity
                .categories
                .as_deref()
                .is_some_and(|categories| categories.iter().any(|category| category == label))
        })
        .map(|activity| transform(Some(activity)))
        .collect()
}

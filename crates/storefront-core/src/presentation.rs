//! # Presentation Helpers
//!
//! Pure lookups the template uses for icons and availability styling.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Icon used for subjects missing from the table.
pub const DEFAULT_LESSON_ICON: &str = "fas fa-graduation-cap";

const LESSON_ICONS: [(&str, &str); 10] = [
    ("Math", "fas fa-calculator"),
    ("English", "fas fa-book"),
    ("Science", "fas fa-flask"),
    ("History", "fas fa-landmark"),
    ("Art", "fas fa-palette"),
    ("Music", "fas fa-music"),
    ("Sports", "fas fa-futbol"),
    ("Drama", "fas fa-theater-masks"),
    ("Computing", "fas fa-laptop-code"),
    ("French", "fas fa-language"),
];

/// Icon classes for a subject. Matching is exact, as the catalog spells them.
pub fn lesson_icon(subject: &str) -> &'static str {
    LESSON_ICONS
        .iter()
        .find(|(name, _)| *name == subject)
        .map(|(_, icon)| *icon)
        .unwrap_or(DEFAULT_LESSON_ICON)
}

/// Availability bucket for a lesson's remaining spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum SpacesClass {
    /// Fully booked.
    None,
    /// 1 to 5 spaces left.
    Low,
    /// More than 5 spaces left.
    Available,
}

impl SpacesClass {
    /// Upper bound (inclusive) of the "low" bucket.
    pub const LOW_THRESHOLD: u32 = 5;

    pub fn from_spaces(spaces: u32) -> Self {
        match spaces {
            0 => SpacesClass::None,
            n if n <= Self::LOW_THRESHOLD => SpacesClass::Low,
            _ => SpacesClass::Available,
        }
    }

    /// CSS classes the stylesheet keys on.
    pub fn css_class(&self) -> &'static str {
        match self {
            SpacesClass::None => "spaces-available",
            SpacesClass::Low => "spaces-available low",
            SpacesClass::Available => "spaces-available available",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_subjects_have_icons() {
        assert_eq!(lesson_icon("Math"), "fas fa-calculator");
        assert_eq!(lesson_icon("Drama"), "fas fa-theater-masks");
        assert_eq!(lesson_icon("French"), "fas fa-language");
    }

    #[test]
    fn test_unknown_subject_falls_back() {
        assert_eq!(lesson_icon("Astrophysics"), DEFAULT_LESSON_ICON);
        assert_eq!(lesson_icon("math"), DEFAULT_LESSON_ICON);
        assert_eq!(lesson_icon(""), DEFAULT_LESSON_ICON);
    }

    #[test]
    fn test_spaces_thresholds() {
        assert_eq!(SpacesClass::from_spaces(0), SpacesClass::None);
        assert_eq!(SpacesClass::from_spaces(1), SpacesClass::Low);
        assert_eq!(SpacesClass::from_spaces(3), SpacesClass::Low);
        assert_eq!(SpacesClass::from_spaces(5), SpacesClass::Low);
        assert_eq!(SpacesClass::from_spaces(6), SpacesClass::Available);
    }

    #[test]
    fn test_css_classes() {
        assert_eq!(SpacesClass::None.css_class(), "spaces-available");
        assert_eq!(SpacesClass::Low.css_class(), "spaces-available low");
        assert_eq!(SpacesClass::Available.css_class(), "spaces-available available");
    }
}

//! Club request model.
//!
//! A club request describes one after-school club's weekly meeting demand:
//! how many meetings it needs, which advisor (if any) runs them, and the
//! category that drives room selection. Clubs may carry their own preferred
//! meeting windows; when empty, the generator's default after-school
//! windows apply.

use serde::{Deserialize, Serialize};

use super::ClubWindow;

/// Default weekly meeting count when none is specified.
pub const DEFAULT_MEETINGS_PER_WEEK: u32 = 1;

/// Club classification, used as the room-pool lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClubCategory {
    Sports,
    Arts,
    Music,
    Technology,
    Academic,
    Cultural,
    /// Domain-specific category; falls back to the default room pool
    /// unless the room table carries a pool under this exact key.
    Other(String),
}

impl ClubCategory {
    /// Room-pool lookup key for this category.
    pub fn as_key(&self) -> &str {
        match self {
            ClubCategory::Sports => "SPORTS",
            ClubCategory::Arts => "ARTS",
            ClubCategory::Music => "MUSIC",
            ClubCategory::Technology => "TECHNOLOGY",
            ClubCategory::Academic => "ACADEMIC",
            ClubCategory::Cultural => "CULTURAL",
            ClubCategory::Other(key) => key,
        }
    }
}

/// An after-school club to be scheduled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClubRequest {
    /// Unique club identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Category (room-pool lookup).
    pub category: ClubCategory,
    /// Designated advisor, if the club has one.
    pub advisor_id: Option<String>,
    /// Required weekly meetings (default 1, must be ≥ 1).
    pub meetings_per_week: u32,
    /// Preferred meeting windows; empty = generator defaults.
    pub preferred_windows: Vec<ClubWindow>,
}

impl ClubRequest {
    /// Creates a club request with the default meeting count and no advisor.
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: ClubCategory) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            advisor_id: None,
            meetings_per_week: DEFAULT_MEETINGS_PER_WEEK,
            preferred_windows: Vec::new(),
        }
    }

    /// Sets the advisor.
    pub fn with_advisor(mut self, advisor_id: impl Into<String>) -> Self {
        self.advisor_id = Some(advisor_id.into());
        self
    }

    /// Sets the required weekly meeting count.
    pub fn with_meetings_per_week(mut self, meetings: u32) -> Self {
        self.meetings_per_week = meetings;
        self
    }

    /// Adds a preferred meeting window.
    pub fn with_preferred_window(mut self, window: ClubWindow) -> Self {
        self.preferred_windows.push(window);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Weekday;

    #[test]
    fn test_club_defaults() {
        let c = ClubRequest::new("C1", "Chess Club", ClubCategory::Academic);
        assert_eq!(c.meetings_per_week, DEFAULT_MEETINGS_PER_WEEK);
        assert!(c.advisor_id.is_none());
        assert!(c.preferred_windows.is_empty());
    }

    #[test]
    fn test_club_builder() {
        let c = ClubRequest::new("C2", "Robotics", ClubCategory::Technology)
            .with_advisor("T9")
            .with_meetings_per_week(2)
            .with_preferred_window(ClubWindow::new(Weekday::Tuesday, "16:00", "17:30"));

        assert_eq!(c.advisor_id.as_deref(), Some("T9"));
        assert_eq!(c.meetings_per_week, 2);
        assert_eq!(c.preferred_windows.len(), 1);
    }

    #[test]
    fn test_category_keys() {
        assert_eq!(ClubCategory::Sports.as_key(), "SPORTS");
        assert_eq!(ClubCategory::Cultural.as_key(), "CULTURAL");
        assert_eq!(ClubCategory::Other("DEBATE".into()).as_key(), "DEBATE");
    }
}

//! Subject request model.
//!
//! A subject request describes one subject's weekly demand for a class:
//! how many distinct slot assignments the timetable must contain for it.
//! Input only; immutable during a generation run.

use serde::{Deserialize, Serialize};

/// Default weekly session count when none is specified.
pub const DEFAULT_SESSIONS_PER_WEEK: u32 = 2;

/// A subject to be placed on a class timetable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectRequest {
    /// Unique subject identifier.
    pub id: String,
    /// Display name (used in error messages).
    pub name: String,
    /// Subject code (room-pool lookup key, e.g. `MATH`).
    pub code: String,
    /// Required distinct weekly sessions (default 2, must be ≥ 1).
    pub sessions_per_week: u32,
}

impl SubjectRequest {
    /// Creates a subject request with the default session count.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            code: code.into(),
            sessions_per_week: DEFAULT_SESSIONS_PER_WEEK,
        }
    }

    /// Sets the required weekly session count.
    pub fn with_sessions_per_week(mut self, sessions: u32) -> Self {
        self.sessions_per_week = sessions;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_defaults() {
        let s = SubjectRequest::new("S1", "Mathematics", "MATH");
        assert_eq!(s.id, "S1");
        assert_eq!(s.name, "Mathematics");
        assert_eq!(s.code, "MATH");
        assert_eq!(s.sessions_per_week, DEFAULT_SESSIONS_PER_WEEK);
    }

    #[test]
    fn test_subject_builder() {
        let s = SubjectRequest::new("S2", "English", "ENG").with_sessions_per_week(4);
        assert_eq!(s.sessions_per_week, 4);
    }
}

//! Schedule assignment models (generation output).
//!
//! One assignment is created per required weekly session or meeting.
//! Assignments are built in memory during a single generation call and
//! returned to the caller, who is responsible for atomically replacing
//! the previously persisted set for the same (scope, semester, year) —
//! generation is idempotent by replacement, not additive.

use serde::{Deserialize, Serialize};

use super::{ClassSlot, Weekday};

/// One class timetable entry: a subject session bound to a teacher,
/// slot, and advisory room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleAssignment {
    /// Class this session belongs to.
    pub class_id: String,
    /// Scheduled subject.
    pub subject_id: String,
    /// Assigned teacher.
    pub teacher_id: String,
    /// Day of week.
    pub day: Weekday,
    /// Teaching period (1-based).
    pub period: u8,
    /// Advisory room label. Not part of conflict detection.
    pub room: String,
    /// Semester this timetable covers.
    pub semester: u8,
    /// Academic year, e.g. `"2026-2027"`.
    pub academic_year: String,
}

impl ScheduleAssignment {
    /// The slot this assignment occupies.
    #[inline]
    pub fn slot(&self) -> ClassSlot {
        ClassSlot::new(self.day, self.period)
    }
}

/// One club schedule entry: a meeting bound to a window, advisor
/// (when the club has one), and advisory room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubScheduleAssignment {
    /// Club this meeting belongs to.
    pub club_id: String,
    /// Advisor running the meeting; `None` for advisor-less clubs.
    pub teacher_id: Option<String>,
    /// Day of week.
    pub day: Weekday,
    /// Meeting start, `HH:MM`.
    pub start_time: String,
    /// Meeting end, `HH:MM`.
    pub end_time: String,
    /// Advisory room label.
    pub room: String,
    /// Semester this schedule covers.
    pub semester: u8,
    /// Academic year.
    pub academic_year: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignment_slot_identity() {
        let a = ScheduleAssignment {
            class_id: "10A".into(),
            subject_id: "MATH".into(),
            teacher_id: "T1".into(),
            day: Weekday::Monday,
            period: 3,
            room: "P.101".into(),
            semester: 1,
            academic_year: "2026-2027".into(),
        };
        assert_eq!(a.slot(), ClassSlot::new(Weekday::Monday, 3));
    }

    #[test]
    fn test_assignment_serde_round_trip() {
        let a = ScheduleAssignment {
            class_id: "10A".into(),
            subject_id: "ENG".into(),
            teacher_id: "T2".into(),
            day: Weekday::Friday,
            period: 8,
            room: "P.801".into(),
            semester: 2,
            academic_year: "2026-2027".into(),
        };
        let json = serde_json::to_string(&a).unwrap();
        let back: ScheduleAssignment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, a);
    }
}

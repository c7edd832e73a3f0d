//! Slot conflict detection.
//!
//! Detects class timetable slots claimed by more than one assignment.
//! Pure and side-effect free: the input is only read, and the absence
//! of conflicts is an empty result, never an error.
//!
//! # Algorithm
//!
//! Single linear pass over the assignments with a slot-keyed map. The
//! first assignment seen for a slot becomes its occupant; a later
//! assignment on the same slot produces one [`Conflict`] pairing the
//! occupant with it. Further collisions at an already-conflicted slot
//! are not reported separately.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::models::{ClassSlot, ScheduleAssignment, Weekday};

/// Classification of schedule conflicts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConflictKind {
    /// Two assignments claim the same (day, period) slot.
    SlotConflict,
}

/// A detected schedule conflict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    /// Type of conflict.
    pub kind: ConflictKind,
    /// Day of the contested slot.
    pub day: Weekday,
    /// Period of the contested slot.
    pub period: u8,
    /// The first colliding pair at this slot, in input order.
    pub schedules: [ScheduleAssignment; 2],
}

/// Checks a class timetable for slots claimed by more than one assignment.
///
/// Returns one [`Conflict`] per contested slot (the first colliding pair
/// only); an empty list means no collisions.
pub fn check_assignments(assignments: &[ScheduleAssignment]) -> Vec<Conflict> {
    let mut slot_map: HashMap<ClassSlot, &ScheduleAssignment> = HashMap::new();
    let mut reported: HashSet<ClassSlot> = HashSet::new();
    let mut conflicts = Vec::new();

    for assignment in assignments {
        let slot = assignment.slot();
        match slot_map.get(&slot) {
            Some(&existing) => {
                if reported.insert(slot) {
                    conflicts.push(Conflict {
                        kind: ConflictKind::SlotConflict,
                        day: slot.day,
                        period: slot.period,
                        schedules: [existing.clone(), assignment.clone()],
                    });
                }
            }
            None => {
                slot_map.insert(slot, assignment);
            }
        }
    }

    conflicts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_assignment(subject: &str, day: Weekday, period: u8) -> ScheduleAssignment {
        ScheduleAssignment {
            class_id: "10A".into(),
            subject_id: subject.into(),
            teacher_id: "T1".into(),
            day,
            period,
            room: "P.101".into(),
            semester: 1,
            academic_year: "2026-2027".into(),
        }
    }

    #[test]
    fn test_no_conflicts() {
        let assignments = vec![
            make_assignment("MATH", Weekday::Monday, 1),
            make_assignment("MATH", Weekday::Monday, 2),
            make_assignment("ENG", Weekday::Tuesday, 1),
        ];
        assert!(check_assignments(&assignments).is_empty());
    }

    #[test]
    fn test_single_conflict_pair() {
        let a = make_assignment("MATH", Weekday::Monday, 1);
        let b = make_assignment("ENG", Weekday::Monday, 1);
        let assignments = vec![a.clone(), make_assignment("BIO", Weekday::Friday, 8), b.clone()];

        let conflicts = check_assignments(&assignments);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].kind, ConflictKind::SlotConflict);
        assert_eq!(conflicts[0].day, Weekday::Monday);
        assert_eq!(conflicts[0].period, 1);
        assert_eq!(conflicts[0].schedules[0], a);
        assert_eq!(conflicts[0].schedules[1], b);
    }

    #[test]
    fn test_triple_collision_reported_once() {
        let assignments = vec![
            make_assignment("MATH", Weekday::Monday, 1),
            make_assignment("ENG", Weekday::Monday, 1),
            make_assignment("BIO", Weekday::Monday, 1),
        ];
        let conflicts = check_assignments(&assignments);
        assert_eq!(conflicts.len(), 1);
        // Only the first colliding pair is recorded.
        assert_eq!(conflicts[0].schedules[1].subject_id, "ENG");
    }

    #[test]
    fn test_conflicts_on_distinct_slots() {
        let assignments = vec![
            make_assignment("MATH", Weekday::Monday, 1),
            make_assignment("ENG", Weekday::Monday, 1),
            make_assignment("BIO", Weekday::Tuesday, 2),
            make_assignment("CHEM", Weekday::Tuesday, 2),
        ];
        let conflicts = check_assignments(&assignments);
        assert_eq!(conflicts.len(), 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(check_assignments(&[]).is_empty());
    }

    #[test]
    fn test_input_untouched() {
        let assignments = vec![
            make_assignment("MATH", Weekday::Monday, 1),
            make_assignment("ENG", Weekday::Monday, 1),
        ];
        let before = assignments.clone();
        let _ = check_assignments(&assignments);
        assert_eq!(assignments, before);
    }
}

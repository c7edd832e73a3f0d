//! Timetable quality metrics.
//!
//! Computes diagnostic indicators from a generated class timetable:
//! session coverage per subject, load distribution across teachers, and
//! how much of the weekly slot grid is filled. Display-only; nothing
//! here influences scheduling.

use std::collections::HashMap;

use crate::models::{ScheduleAssignment, CLASS_SLOT_COUNT};

/// Diagnostic metrics for one generated timetable.
#[derive(Debug, Clone)]
pub struct TimetableStats {
    /// Total assignments (one per scheduled session).
    pub total_assignments: usize,
    /// Sessions placed per subject.
    pub sessions_by_subject: HashMap<String, usize>,
    /// Slots held per teacher.
    pub load_by_teacher: HashMap<String, usize>,
    /// Heaviest single-teacher load.
    pub max_teacher_load: usize,
    /// Lightest single-teacher load (among teachers with assignments).
    pub min_teacher_load: usize,
    /// Fraction of the 40-slot weekly grid in use (0.0..1.0).
    pub slot_fill_rate: f64,
}

impl TimetableStats {
    /// Computes stats from a generated assignment list.
    pub fn calculate(assignments: &[ScheduleAssignment]) -> Self {
        let mut sessions_by_subject: HashMap<String, usize> = HashMap::new();
        let mut load_by_teacher: HashMap<String, usize> = HashMap::new();

        for a in assignments {
            *sessions_by_subject.entry(a.subject_id.clone()).or_insert(0) += 1;
            *load_by_teacher.entry(a.teacher_id.clone()).or_insert(0) += 1;
        }

        let max_teacher_load = load_by_teacher.values().copied().max().unwrap_or(0);
        let min_teacher_load = load_by_teacher.values().copied().min().unwrap_or(0);
        let slot_fill_rate = assignments.len() as f64 / CLASS_SLOT_COUNT as f64;

        Self {
            total_assignments: assignments.len(),
            sessions_by_subject,
            load_by_teacher,
            max_teacher_load,
            min_teacher_load,
            slot_fill_rate,
        }
    }

    /// Spread between the heaviest and lightest teacher load.
    ///
    /// Zero for perfectly balanced (or empty) timetables.
    pub fn load_spread(&self) -> usize {
        self.max_teacher_load - self.min_teacher_load
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Weekday;

    fn make_assignment(subject: &str, teacher: &str, day: Weekday, period: u8) -> ScheduleAssignment {
        ScheduleAssignment {
            class_id: "10A".into(),
            subject_id: subject.into(),
            teacher_id: teacher.into(),
            day,
            period,
            room: "P.101".into(),
            semester: 1,
            academic_year: "2026-2027".into(),
        }
    }

    #[test]
    fn test_stats_basic() {
        let assignments = vec![
            make_assignment("MATH", "T1", Weekday::Monday, 1),
            make_assignment("MATH", "T1", Weekday::Tuesday, 2),
            make_assignment("ENG", "T2", Weekday::Monday, 2),
            make_assignment("BIO", "T1", Weekday::Friday, 3),
        ];

        let stats = TimetableStats::calculate(&assignments);
        assert_eq!(stats.total_assignments, 4);
        assert_eq!(stats.sessions_by_subject["MATH"], 2);
        assert_eq!(stats.sessions_by_subject["ENG"], 1);
        assert_eq!(stats.load_by_teacher["T1"], 3);
        assert_eq!(stats.load_by_teacher["T2"], 1);
        assert_eq!(stats.max_teacher_load, 3);
        assert_eq!(stats.min_teacher_load, 1);
        assert_eq!(stats.load_spread(), 2);
        assert!((stats.slot_fill_rate - 0.1).abs() < 1e-10);
    }

    #[test]
    fn test_stats_empty() {
        let stats = TimetableStats::calculate(&[]);
        assert_eq!(stats.total_assignments, 0);
        assert_eq!(stats.max_teacher_load, 0);
        assert_eq!(stats.load_spread(), 0);
        assert!((stats.slot_fill_rate - 0.0).abs() < 1e-10);
    }
}

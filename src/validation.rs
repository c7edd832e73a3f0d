//! Pre-flight input validation.
//!
//! Checks structural integrity of timetable and club requests before
//! generation. Detects:
//! - Duplicate IDs
//! - Session/meeting counts that can never be satisfied
//! - Subjects no roster teacher is qualified for
//!
//! Validation is an opt-in boundary for callers: the generators themselves
//! schedule whatever they are given and fail only on slot exhaustion, so
//! running these checks first turns a doomed run into an up-front report.
//! All detected issues are collected and returned together.

use std::collections::{HashMap, HashSet};

use crate::models::{ClubRequest, SubjectRequest, TeacherCandidate, CLASS_SLOT_COUNT};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// `sessions_per_week` is zero or exceeds the weekly slot grid.
    InvalidSessionCount,
    /// `meetings_per_week` is zero.
    InvalidMeetingCount,
    /// No roster teacher is qualified for a requested subject.
    NoQualifiedTeacher,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates inputs for a class timetable generation run.
///
/// Checks:
/// 1. No duplicate subject IDs
/// 2. No duplicate teacher IDs
/// 3. Every `sessions_per_week` is between 1 and the 40-slot grid size
/// 4. Every subject has at least one qualified roster teacher
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_timetable_input(
    subjects: &[SubjectRequest],
    teachers: &[TeacherCandidate],
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut subject_ids = HashSet::new();
    for s in subjects {
        if !subject_ids.insert(s.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate subject ID: {}", s.id),
            ));
        }

        if s.sessions_per_week == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidSessionCount,
                format!("Subject '{}' requires at least one weekly session", s.name),
            ));
        } else if s.sessions_per_week as usize > CLASS_SLOT_COUNT {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidSessionCount,
                format!(
                    "Subject '{}' requires {} sessions but the week has only {} slots",
                    s.name, s.sessions_per_week, CLASS_SLOT_COUNT
                ),
            ));
        }
    }

    let mut teacher_ids = HashSet::new();
    for t in teachers {
        if !teacher_ids.insert(t.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate teacher ID: {}", t.id),
            ));
        }
    }

    // Subjects nobody can teach fail generation deterministically;
    // cheaper to surface here than mid-run.
    for s in subjects {
        if !teachers.iter().any(|t| t.can_teach(&s.id)) {
            errors.push(ValidationError::new(
                ValidationErrorKind::NoQualifiedTeacher,
                format!("No teacher on the roster is qualified for '{}'", s.name),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates inputs for a club scheduling run.
///
/// Checks:
/// 1. No duplicate club IDs
/// 2. Every `meetings_per_week` is at least 1
pub fn validate_club_input(clubs: &[ClubRequest]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for c in clubs {
        *counts.entry(c.id.as_str()).or_insert(0) += 1;

        if c.meetings_per_week == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidMeetingCount,
                format!("Club '{}' requires at least one weekly meeting", c.name),
            ));
        }
    }
    for (id, count) in counts {
        if count > 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate club ID: {id}"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ClubCategory;

    fn sample_subjects() -> Vec<SubjectRequest> {
        vec![
            SubjectRequest::new("MATH", "Mathematics", "MATH"),
            SubjectRequest::new("ENG", "English", "ENGLISH").with_sessions_per_week(3),
        ]
    }

    fn sample_teachers() -> Vec<TeacherCandidate> {
        vec![
            TeacherCandidate::new("T1").with_subject("MATH"),
            TeacherCandidate::new("T2").with_subject("ENG"),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_timetable_input(&sample_subjects(), &sample_teachers()).is_ok());
    }

    #[test]
    fn test_duplicate_subject_id() {
        let subjects = vec![
            SubjectRequest::new("MATH", "Mathematics", "MATH"),
            SubjectRequest::new("MATH", "Math again", "MATH"),
        ];
        let errors = validate_timetable_input(&subjects, &sample_teachers()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_duplicate_teacher_id() {
        let teachers = vec![
            TeacherCandidate::new("T1").with_subject("MATH"),
            TeacherCandidate::new("T1").with_subject("ENG"),
        ];
        let errors = validate_timetable_input(&sample_subjects(), &teachers).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("teacher")));
    }

    #[test]
    fn test_zero_sessions() {
        let subjects =
            vec![SubjectRequest::new("MATH", "Mathematics", "MATH").with_sessions_per_week(0)];
        let teachers = vec![TeacherCandidate::new("T1").with_subject("MATH")];
        let errors = validate_timetable_input(&subjects, &teachers).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidSessionCount));
    }

    #[test]
    fn test_sessions_exceed_grid() {
        let subjects =
            vec![SubjectRequest::new("MATH", "Mathematics", "MATH").with_sessions_per_week(41)];
        let teachers = vec![TeacherCandidate::new("T1").with_subject("MATH")];
        let errors = validate_timetable_input(&subjects, &teachers).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidSessionCount
                && e.message.contains("40")));
    }

    #[test]
    fn test_no_qualified_teacher() {
        let subjects = vec![SubjectRequest::new("ART", "Fine Art", "ART")];
        let errors = validate_timetable_input(&subjects, &sample_teachers()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NoQualifiedTeacher));
    }

    #[test]
    fn test_multiple_errors_collected() {
        let subjects = vec![
            SubjectRequest::new("ART", "Fine Art", "ART").with_sessions_per_week(0),
            SubjectRequest::new("ART", "Art again", "ART"),
        ];
        let errors = validate_timetable_input(&subjects, &[]).unwrap_err();
        assert!(errors.len() >= 3);
    }

    #[test]
    fn test_valid_clubs() {
        let clubs = vec![
            ClubRequest::new("C1", "Football", ClubCategory::Sports),
            ClubRequest::new("C2", "Chess", ClubCategory::Academic).with_meetings_per_week(2),
        ];
        assert!(validate_club_input(&clubs).is_ok());
    }

    #[test]
    fn test_duplicate_club_id() {
        let clubs = vec![
            ClubRequest::new("C1", "Football", ClubCategory::Sports),
            ClubRequest::new("C1", "Futsal", ClubCategory::Sports),
        ];
        let errors = validate_club_input(&clubs).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_zero_meetings() {
        let clubs = vec![
            ClubRequest::new("C1", "Football", ClubCategory::Sports).with_meetings_per_week(0),
        ];
        let errors = validate_club_input(&clubs).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidMeetingCount));
    }
}

//! Teacher candidate model.
//!
//! A teacher candidate is input-only roster data: an identifier plus the
//! set of subjects the teacher is qualified for. Per-run load tracking
//! (which slots a teacher already holds) lives inside the generator and
//! is never part of this type.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A teacher eligible for timetable assignments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeacherCandidate {
    /// Unique teacher identifier.
    pub id: String,
    /// Subject IDs this teacher is qualified to teach.
    pub subject_ids: HashSet<String>,
}

impl TeacherCandidate {
    /// Creates a teacher candidate with no qualifications.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            subject_ids: HashSet::new(),
        }
    }

    /// Adds a subject qualification.
    pub fn with_subject(mut self, subject_id: impl Into<String>) -> Self {
        self.subject_ids.insert(subject_id.into());
        self
    }

    /// Whether this teacher is qualified for the given subject.
    #[inline]
    pub fn can_teach(&self, subject_id: &str) -> bool {
        self.subject_ids.contains(subject_id)
    }
}

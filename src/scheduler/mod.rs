//! Timetable and club schedule generators.
//!
//! Provides the two slot-assignment generators and their shared error type.
//!
//! # Algorithm
//!
//! [`ClassTimetableGenerator`] uses a shuffle-and-scan greedy heuristic:
//! one random permutation of the weekly slot grid per run, scanned in order
//! for every session, picking the least-loaded qualified teacher at the
//! first workable slot. It is fast but not globally optimal — it never
//! backtracks, so a feasible timetable can still be missed (the run then
//! fails rather than returning a partial schedule).
//!
//! [`ClubScheduleGenerator`] is deliberately simpler: a deterministic
//! round-robin over a small pool of after-school windows, with no
//! cross-club collision search.

mod class;
mod club;
mod stats;

use std::error::Error;
use std::fmt;

pub use class::{ClassTimetableGenerator, TimetablePreview, TimetableRequest};
pub use club::{ClubScheduleGenerator, ClubScheduleRequest};
pub use stats::TimetableStats;

/// Fatal generation failure: a subject's required weekly sessions could
/// not all be placed within the slot universe.
///
/// The whole run is aborted; no partial schedule is ever returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchedulingError {
    /// Display name of the unsatisfiable subject.
    pub subject: String,
}

impl SchedulingError {
    pub(crate) fn unsatisfiable(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
        }
    }
}

impl fmt::Display for SchedulingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Could not schedule subject {} - no available slots",
            self.subject
        )
    }
}

impl Error for SchedulingError {}

//! Class timetable generator.
//!
//! Assigns each subject's required weekly sessions to (day, period) slots
//! for one class, choosing a qualified, least-loaded teacher for every
//! assignment and an advisory room by subject code.
//!
//! # Algorithm
//!
//! 1. Shuffle the 40-slot weekly grid once per run; the shuffled order is
//!    the scan order for every session in the run (avoids systematic bias
//!    toward early slots).
//! 2. For each subject in list order, for each required session: scan the
//!    shuffled grid, skipping slots the class already uses; at the first
//!    free slot with at least one qualified teacher not yet booked there,
//!    assign the least-loaded such teacher (ties: roster order).
//! 3. A session that exhausts the grid aborts the whole run — no partial
//!    timetable is returned.
//!
//! # Complexity
//! O(slots × sessions × teachers) scan steps; terminates deterministically
//! in the failure case too.

use log::{debug, warn};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::{HashMap, HashSet};

use crate::conflict::{self, Conflict};
use crate::models::{ClassSlot, ScheduleAssignment, SubjectRequest, TeacherCandidate};
use crate::rooms::RoomTable;

use super::SchedulingError;

/// Input container for one class timetable generation run.
#[derive(Debug, Clone)]
pub struct TimetableRequest {
    /// Class to schedule.
    pub class_id: String,
    /// Semester the timetable covers.
    pub semester: u8,
    /// Academic year, e.g. `"2026-2027"`.
    pub academic_year: String,
    /// Subjects with their weekly session demand, in priority order.
    pub subjects: Vec<SubjectRequest>,
    /// Teacher roster with qualifications.
    pub teachers: Vec<TeacherCandidate>,
}

impl TimetableRequest {
    /// Creates a new request.
    pub fn new(
        class_id: impl Into<String>,
        semester: u8,
        academic_year: impl Into<String>,
        subjects: Vec<SubjectRequest>,
        teachers: Vec<TeacherCandidate>,
    ) -> Self {
        Self {
            class_id: class_id.into(),
            semester,
            academic_year: academic_year.into(),
            subjects,
            teachers,
        }
    }
}

/// A generation run plus conflict diagnostics over its own output.
///
/// Construction already prevents same-slot collisions, so a non-empty
/// conflict list signals a generator bug rather than an expected outcome.
#[derive(Debug, Clone)]
pub struct TimetablePreview {
    /// The generated assignments (not yet persisted).
    pub assignments: Vec<ScheduleAssignment>,
    /// Conflicts detected in `assignments`; expected empty.
    pub conflicts: Vec<Conflict>,
}

/// Greedy shuffle-and-scan class timetable generator.
///
/// # Example
///
/// ```
/// use timetabler::models::{SubjectRequest, TeacherCandidate};
/// use timetabler::scheduler::{ClassTimetableGenerator, TimetableRequest};
///
/// let subjects = vec![SubjectRequest::new("MATH", "Mathematics", "MATH")];
/// let teachers = vec![TeacherCandidate::new("T1").with_subject("MATH")];
/// let request = TimetableRequest::new("10A", 1, "2026-2027", subjects, teachers);
///
/// let generator = ClassTimetableGenerator::new();
/// let assignments = generator.generate(&request).unwrap();
/// assert_eq!(assignments.len(), 2); // default sessions_per_week
/// ```
#[derive(Debug, Clone)]
pub struct ClassTimetableGenerator {
    rooms: RoomTable,
}

impl ClassTimetableGenerator {
    /// Creates a generator with the standard subject room pools.
    pub fn new() -> Self {
        Self {
            rooms: RoomTable::class_defaults(),
        }
    }

    /// Replaces the room table.
    pub fn with_rooms(mut self, rooms: RoomTable) -> Self {
        self.rooms = rooms;
        self
    }

    /// Generates a full timetable for the request.
    ///
    /// Either every subject's `sessions_per_week` is fully satisfied, or
    /// the run fails with [`SchedulingError`] naming the first subject
    /// that could not be placed — never a partial schedule.
    pub fn generate(
        &self,
        request: &TimetableRequest,
    ) -> Result<Vec<ScheduleAssignment>, SchedulingError> {
        self.generate_with_rng(request, &mut rand::rng())
    }

    /// Generates with a caller-supplied RNG (seed for deterministic tests).
    pub fn generate_with_rng<R: Rng>(
        &self,
        request: &TimetableRequest,
        rng: &mut R,
    ) -> Result<Vec<ScheduleAssignment>, SchedulingError> {
        // One permutation per run, reused as the scan order for every session.
        let mut scan_order = ClassSlot::universe();
        scan_order.shuffle(rng);

        let mut used_slots: HashSet<ClassSlot> = HashSet::new();
        let mut teacher_load: HashMap<&str, HashSet<ClassSlot>> = request
            .teachers
            .iter()
            .map(|t| (t.id.as_str(), HashSet::new()))
            .collect();

        let mut assignments = Vec::new();

        for subject in &request.subjects {
            for _session in 0..subject.sessions_per_week {
                let placed = self.place_session(
                    request,
                    subject,
                    &scan_order,
                    &mut used_slots,
                    &mut teacher_load,
                    rng,
                )?;
                debug!(
                    "class {}: {} -> {} with teacher {}",
                    request.class_id, subject.code, placed.slot(), placed.teacher_id
                );
                assignments.push(placed);
            }
        }

        debug!(
            "class {}: generated {} assignments for {} subjects",
            request.class_id,
            assignments.len(),
            request.subjects.len()
        );
        Ok(assignments)
    }

    /// Generates and then conflict-checks the output, for diagnostic display.
    ///
    /// Skipping persistence is the caller's concern; this method only
    /// bundles the extra self-check.
    pub fn preview(&self, request: &TimetableRequest) -> Result<TimetablePreview, SchedulingError> {
        self.preview_with_rng(request, &mut rand::rng())
    }

    /// Preview with a caller-supplied RNG.
    pub fn preview_with_rng<R: Rng>(
        &self,
        request: &TimetableRequest,
        rng: &mut R,
    ) -> Result<TimetablePreview, SchedulingError> {
        let assignments = self.generate_with_rng(request, rng)?;
        let conflicts = conflict::check_assignments(&assignments);
        if !conflicts.is_empty() {
            warn!(
                "class {}: preview found {} conflicts in freshly generated timetable",
                request.class_id,
                conflicts.len()
            );
        }
        Ok(TimetablePreview {
            assignments,
            conflicts,
        })
    }

    /// Places one session of `subject` at the first workable slot in scan
    /// order, or fails when the scan order is exhausted.
    fn place_session<R: Rng>(
        &self,
        request: &TimetableRequest,
        subject: &SubjectRequest,
        scan_order: &[ClassSlot],
        used_slots: &mut HashSet<ClassSlot>,
        teacher_load: &mut HashMap<&str, HashSet<ClassSlot>>,
        rng: &mut R,
    ) -> Result<ScheduleAssignment, SchedulingError> {
        for &slot in scan_order {
            if used_slots.contains(&slot) {
                continue;
            }

            // Least-loaded qualified teacher free at this slot;
            // ties go to the earlier roster entry.
            let mut chosen: Option<&TeacherCandidate> = None;
            let mut chosen_load = usize::MAX;
            for teacher in &request.teachers {
                if !teacher.can_teach(&subject.id) {
                    continue;
                }
                let load = &teacher_load[teacher.id.as_str()];
                if load.contains(&slot) {
                    continue;
                }
                if load.len() < chosen_load {
                    chosen_load = load.len();
                    chosen = Some(teacher);
                }
            }

            // No qualified teacher free here: keep scanning, don't fail yet.
            let Some(teacher) = chosen else {
                continue;
            };

            used_slots.insert(slot);
            if let Some(load) = teacher_load.get_mut(teacher.id.as_str()) {
                load.insert(slot);
            }

            return Ok(ScheduleAssignment {
                class_id: request.class_id.clone(),
                subject_id: subject.id.clone(),
                teacher_id: teacher.id.clone(),
                day: slot.day,
                period: slot.period,
                room: self.rooms.pick(&subject.code, rng),
                semester: request.semester,
                academic_year: request.academic_year.clone(),
            });
        }

        Err(SchedulingError::unsatisfiable(&subject.name))
    }
}

impl Default for ClassTimetableGenerator {
    fn default() -> Self {
        Self::new()
    }
}

//! Club schedule generator.
//!
//! Assigns each club's required weekly meetings to after-school windows
//! by deterministic round-robin: meeting `i` lands on window `i mod n`
//! over the club's preferred windows (or the default five). There is no
//! slot search and no cross-club collision check — clubs routinely share
//! windows (different rooms, different advisors), which is an intentional
//! asymmetry versus the class scheduler.

use log::debug;
use rand::Rng;

use crate::models::{ClubRequest, ClubScheduleAssignment, ClubWindow};
use crate::rooms::RoomTable;

/// Input container for one club scheduling run.
#[derive(Debug, Clone)]
pub struct ClubScheduleRequest {
    /// School the clubs belong to.
    pub school_id: String,
    /// Semester the schedule covers.
    pub semester: u8,
    /// Academic year.
    pub academic_year: String,
    /// Clubs with their weekly meeting demand.
    pub clubs: Vec<ClubRequest>,
}

impl ClubScheduleRequest {
    /// Creates a new request.
    pub fn new(
        school_id: impl Into<String>,
        semester: u8,
        academic_year: impl Into<String>,
        clubs: Vec<ClubRequest>,
    ) -> Self {
        Self {
            school_id: school_id.into(),
            semester,
            academic_year: academic_year.into(),
            clubs,
        }
    }
}

/// Round-robin after-school club scheduler.
///
/// Infallible: every meeting deterministically maps to a window, the
/// advisor is taken as-is (or `None`), and room lookup always produces
/// a value.
#[derive(Debug, Clone)]
pub struct ClubScheduleGenerator {
    windows: Vec<ClubWindow>,
    rooms: RoomTable,
}

impl ClubScheduleGenerator {
    /// Creates a generator with the default after-school windows
    /// (Monday–Friday, 16:00–17:30) and standard club room pools.
    pub fn new() -> Self {
        Self {
            windows: ClubWindow::default_windows(),
            rooms: RoomTable::club_defaults(),
        }
    }

    /// Replaces the default meeting windows.
    pub fn with_windows(mut self, windows: Vec<ClubWindow>) -> Self {
        self.windows = windows;
        self
    }

    /// Replaces the room table.
    pub fn with_rooms(mut self, rooms: RoomTable) -> Self {
        self.rooms = rooms;
        self
    }

    /// Generates the weekly club schedule for the request.
    pub fn generate(&self, request: &ClubScheduleRequest) -> Vec<ClubScheduleAssignment> {
        self.generate_with_rng(request, &mut rand::rng())
    }

    /// Generates with a caller-supplied RNG (seed for deterministic tests).
    ///
    /// Randomness only affects room picks; window and advisor selection
    /// are deterministic.
    pub fn generate_with_rng<R: Rng>(
        &self,
        request: &ClubScheduleRequest,
        rng: &mut R,
    ) -> Vec<ClubScheduleAssignment> {
        let mut assignments = Vec::new();

        for club in &request.clubs {
            let windows = if club.preferred_windows.is_empty() {
                &self.windows
            } else {
                &club.preferred_windows
            };
            if windows.is_empty() {
                continue;
            }

            for meeting in 0..club.meetings_per_week {
                let window = &windows[meeting as usize % windows.len()];
                assignments.push(ClubScheduleAssignment {
                    club_id: club.id.clone(),
                    teacher_id: club.advisor_id.clone(),
                    day: window.day,
                    start_time: window.start_time.clone(),
                    end_time: window.end_time.clone(),
                    room: self.rooms.pick(club.category.as_key(), rng),
                    semester: request.semester,
                    academic_year: request.academic_year.clone(),
                });
            }
        }

        debug!(
            "school {}: generated {} club meetings for {} clubs",
            request.school_id,
            assignments.len(),
            request.clubs.len()
        );
        assignments
    }
}

impl Default for ClubScheduleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

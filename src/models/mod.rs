//! Timetabling domain models.
//!
//! Core data types for describing timetable demand (subjects, teachers,
//! clubs) and generation output (slot assignments). Input types are
//! builder-constructed and immutable during a generation run; output
//! types are plain records the caller persists.
//!
//! # Domain Mapping
//!
//! | timetabler | Class timetable | Club schedule |
//! |------------|-----------------|---------------|
//! | Demand | `SubjectRequest` | `ClubRequest` |
//! | Staff | `TeacherCandidate` | advisor id on the club |
//! | Slot | `ClassSlot` | `ClubWindow` |
//! | Output | `ScheduleAssignment` | `ClubScheduleAssignment` |

mod assignment;
mod club;
mod slot;
mod subject;
mod teacher;

pub use assignment::{ClubScheduleAssignment, ScheduleAssignment};
pub use club::{ClubCategory, ClubRequest, DEFAULT_MEETINGS_PER_WEEK};
pub use slot::{ClassSlot, ClubWindow, Weekday, CLASS_SLOT_COUNT, PERIODS_PER_DAY};
pub use subject::{SubjectRequest, DEFAULT_SESSIONS_PER_WEEK};
pub use teacher::TeacherCandidate;

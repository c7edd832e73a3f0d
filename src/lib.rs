//! Constraint-based school timetable generation.
//!
//! Assigns subjects' weekly sessions to (day, period) slots for a class
//! and clubs' weekly meetings to after-school windows, under teacher
//! qualification and availability constraints, with slot conflict
//! detection over the result.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `SubjectRequest`, `TeacherCandidate`,
//!   `ClubRequest`, `ClassSlot`, `ClubWindow`, `ScheduleAssignment`
//! - **`scheduler`**: `ClassTimetableGenerator` (shuffle-and-scan greedy),
//!   `ClubScheduleGenerator` (deterministic round-robin), load stats
//! - **`conflict`**: Slot double-booking detection
//! - **`rooms`**: Advisory category → room-pool lookup
//! - **`validation`**: Opt-in pre-flight input checks
//!
//! # Design
//!
//! Generation is synchronous, in-memory, and atomic from the caller's
//! perspective: a run returns either a fully satisfied assignment list or
//! an error, never a partial schedule. All mutable state (used slots,
//! per-teacher load) is local to one invocation, so runs for different
//! classes are naturally independent. Persistence is the caller's job —
//! replace the previous assignment set for the same (class, semester,
//! year) in one transaction.

pub mod conflict;
pub mod models;
pub mod rooms;
pub mod scheduler;
pub mod validation;

//! Time slot models.
//!
//! Two slot shapes share the crate:
//! - [`ClassSlot`]: a (weekday, period) cell in the weekly class grid.
//! - [`ClubWindow`]: an after-school (weekday, start/end time) window.
//!
//! # Slot Identity
//!
//! Two assignments conflict iff they share slot identity: the full
//! (day, period) pair for class slots, or (day, start_time) for club
//! windows. `ClassSlot` derives `Hash`/`Eq` so the pair itself is the key.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of teaching periods per school day.
pub const PERIODS_PER_DAY: u8 = 8;

/// Size of the weekly class slot universe (5 days × 8 periods).
pub const CLASS_SLOT_COUNT: usize = Weekday::ALL.len() * PERIODS_PER_DAY as usize;

/// A school weekday.
///
/// Numbered 1 (Monday) through 5 (Friday) for persistence compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    /// All school weekdays, Monday first.
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Day number, 1 (Monday) through 5 (Friday).
    #[inline]
    pub fn number(self) -> u8 {
        match self {
            Weekday::Monday => 1,
            Weekday::Tuesday => 2,
            Weekday::Wednesday => 3,
            Weekday::Thursday => 4,
            Weekday::Friday => 5,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        };
        f.write_str(name)
    }
}

/// A (weekday, period) cell in the weekly class grid.
///
/// The pair is the slot identity: two assignments sharing it collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassSlot {
    /// Day of week.
    pub day: Weekday,
    /// Teaching period within the day (1-based).
    pub period: u8,
}

impl ClassSlot {
    /// Creates a new class slot.
    pub fn new(day: Weekday, period: u8) -> Self {
        Self { day, period }
    }

    /// The full candidate slot universe: every (weekday, period) pair,
    /// in day-major order. 40 slots for a standard five-day week.
    pub fn universe() -> Vec<ClassSlot> {
        let mut slots = Vec::with_capacity(CLASS_SLOT_COUNT);
        for day in Weekday::ALL {
            for period in 1..=PERIODS_PER_DAY {
                slots.push(ClassSlot::new(day, period));
            }
        }
        slots
    }
}

impl fmt::Display for ClassSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} period {}", self.day, self.period)
    }
}

/// An after-school meeting window for club schedules.
///
/// Times are wall-clock `HH:MM` strings; identity is (day, start_time).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClubWindow {
    /// Day of week.
    pub day: Weekday,
    /// Meeting start, `HH:MM`.
    pub start_time: String,
    /// Meeting end, `HH:MM`.
    pub end_time: String,
}

impl ClubWindow {
    /// Creates a new club window.
    pub fn new(day: Weekday, start_time: impl Into<String>, end_time: impl Into<String>) -> Self {
        Self {
            day,
            start_time: start_time.into(),
            end_time: end_time.into(),
        }
    }

    /// The default after-school windows: one per weekday, 16:00–17:30.
    pub fn default_windows() -> Vec<ClubWindow> {
        Weekday::ALL
            .into_iter()
            .map(|day| ClubWindow::new(day, "16:00", "17:30"))
            .collect()
    }
}

//! Simulated day index.

use serde::{Deserialize, Serialize};

/// Days elapsed since the start of the simulation.
///
/// Day 0 is the start date. There is no notion of partial days.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Day(u32);

impl Day {
    pub const START: Day = Day(0);

    /// Latest representable day; a batch expiring here never expires in practice.
    pub const LAST: Day = Day(u32::MAX);

    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    pub const fn index(self) -> u32 {
        self.0
    }

    /// The day `days` after this one, saturating at [`Day::LAST`].
    pub const fn plus(self, days: u32) -> Self {
        Self(self.0.saturating_add(days))
    }

    /// The following day.
    pub const fn next(self) -> Self {
        self.plus(1)
    }
}

impl From<u32> for Day {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl core::fmt::Display for Day {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "day {}", self.0)
    }
}

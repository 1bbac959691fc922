//! `ScheduleOptions` — matching policy for a schedule.

use serde::{Deserialize, Serialize};

/// How a schedule selects rules for a date.
///
/// Both flags default to `false`. Missing keys in a serialised document take
/// their defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleOptions {
    /// Return every matching rule instead of only the first.
    pub multiple_match: bool,
    /// Keep the most recent year-scoped rules in force for later years.
    /// Only a [`YearSchedule`](crate::YearSchedule) honours this flag.
    pub year_extend: bool,
}

impl ScheduleOptions {
    /// Options with both flags off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set [`multiple_match`](Self::multiple_match).
    pub fn with_multiple_match(mut self, flag: bool) -> Self {
        self.multiple_match = flag;
        self
    }

    /// Set [`year_extend`](Self::year_extend).
    pub fn with_year_extend(mut self, flag: bool) -> Self {
        self.year_extend = flag;
        self
    }
}

//! # tou-time
//!
//! Calendar types for tou: month and weekday enums, the field domains a
//! tariff rule can constrain, and the extraction of calendar fields from a
//! date in UTC or local time.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `CalendarFields` and the `CalendarDate` extraction trait.
pub mod calendar;

/// `TemporalField` — constrainable fields and their domains.
pub mod field;

/// `Month` — month of the year.
pub mod month;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{CalendarDate, CalendarFields};
pub use field::TemporalField;
pub use month::Month;
pub use weekday::Weekday;

//! # tou-tariffs
//!
//! Time-of-use tariff rules and the schedules that resolve them.
//!
//! A [`TemporalRule`] attaches a set of [`TariffRate`]s to a window of
//! months, days of the month, days of the week and minutes of the day. A
//! [`YearTemporalRule`] adds a year constraint. A [`Schedule`] (or
//! [`YearSchedule`]) holds rules in match order and answers "which rates
//! apply at this instant".
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use tou_core::IntegerRange;
//! use tou_tariffs::{Schedule, ScheduleOptions, TariffRate, TemporalRule};
//!
//! let off_peak = TemporalRule::builder()
//!     .minutes_of_day(IntegerRange::bounded(0, 7 * 60))
//!     .rate(TariffRate::new("energy", "0.12", None)?)
//!     .build();
//! let peak = TemporalRule::builder()
//!     .rate(TariffRate::new("energy", "0.31", None)?)
//!     .build();
//! let schedule = Schedule::new([off_peak, peak], ScheduleOptions::default());
//!
//! let night = Utc.with_ymd_and_hms(2024, 3, 1, 2, 0, 0).unwrap();
//! assert_eq!(schedule.resolve(&night, true)["energy"].amount(), "0.12");
//! # Ok::<(), tou_core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `ScheduleOptions` — matching policy.
pub mod options;

/// `FieldParser`, `BasicFieldParser` and `RuleDefinition` — rules from text.
pub mod parser;

/// `TariffRate` and `RateMap`.
pub mod rate;

/// `TemporalRule` and the `TariffRule` trait.
pub mod rule;

/// `Schedule` — first-match / all-matches resolution.
pub mod schedule;

/// `YearTemporalRule` — rules scoped to years.
pub mod year_rule;

/// `YearSchedule` — year-extend resolution.
pub mod year_schedule;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use options::ScheduleOptions;
pub use parser::{BasicFieldParser, FieldParser, RuleDefinition};
pub use rate::{RateMap, TariffRate};
pub use rule::{TariffRule, TemporalRule, TemporalRuleBuilder};
pub use schedule::Schedule;
pub use year_rule::YearTemporalRule;
pub use year_schedule::YearSchedule;

//! # tou
//!
//! Time-of-use tariff rules: integer ranges, calendar-field matching, and
//! ordered rate schedules with optional year-extend resolution.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than the individual
//! `tou-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! tou = "0.1"
//! ```
//!
//! ```rust
//! use chrono::NaiveDate;
//! use tou::core::IntegerRange;
//! use tou::tariffs::{Schedule, ScheduleOptions, TariffRate, TemporalRule};
//!
//! let peak = TemporalRule::builder()
//!     .days_of_week(IntegerRange::bounded(1, 5))
//!     .minutes_of_day(IntegerRange::bounded(7 * 60, 21 * 60))
//!     .rate(TariffRate::new("energy", "0.42", None)?)
//!     .build();
//! let off_peak = TemporalRule::builder()
//!     .rate(TariffRate::new("energy", "0.18", None)?)
//!     .build();
//! let schedule = Schedule::new([peak, off_peak], ScheduleOptions::default());
//!
//! // 2024-01-02 is a Tuesday
//! let morning = NaiveDate::from_ymd_opt(2024, 1, 2)
//!     .and_then(|d| d.and_hms_opt(9, 30, 0))
//!     .ok_or("bad date")?;
//! assert_eq!(schedule.resolve(&morning, false)["energy"].amount(), "0.42");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Integer ranges, errors, and text helpers.
pub use tou_core as core;

/// Calendar fields, field domains, months and weekdays.
pub use tou_time as time;

/// Rates, rules, and schedules.
pub use tou_tariffs as tariffs;

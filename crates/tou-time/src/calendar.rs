//! Calendar field extraction.
//!
//! Rules never look at a date directly. A date is first broken down into
//! [`CalendarFields`] using either UTC or the date's local calendar, and
//! anything that can be broken down this way implements [`CalendarDate`].
//!
//! Extraction returns `None` for a date that is absent or cannot be
//! represented; such a date matches no rule.

use chrono::{DateTime, Datelike, Local, NaiveDateTime, TimeZone, Timelike};
use tou_core::ensure;
use tou_core::errors::Result;

use crate::field::TemporalField;
use crate::month::Month;
use crate::weekday::Weekday;

/// The five calendar values a rule is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarFields {
    year: i32,
    month: i32,
    day_of_month: i32,
    day_of_week: i32,
    minute_of_day: i32,
}

impl CalendarFields {
    /// Build from raw values.
    ///
    /// `day_of_week` uses 1 = Monday … 7 = Sunday and `minute_of_day` runs
    /// from 0 to 1439. Values are checked against their domain but not
    /// against each other.
    pub fn new(
        year: i32,
        month: i32,
        day_of_month: i32,
        day_of_week: i32,
        minute_of_day: i32,
    ) -> Result<Self> {
        ensure!((1..=12).contains(&month), "month {month} out of range [1, 12]");
        ensure!(
            (1..=31).contains(&day_of_month),
            "day of month {day_of_month} out of range [1, 31]"
        );
        ensure!(
            (1..=7).contains(&day_of_week),
            "day of week {day_of_week} out of range [1, 7]"
        );
        ensure!(
            (0..1440).contains(&minute_of_day),
            "minute of day {minute_of_day} out of range [0, 1440)"
        );
        Ok(Self {
            year,
            month,
            day_of_month,
            day_of_week,
            minute_of_day,
        })
    }

    /// Break down a wall-clock date-time.
    pub fn from_naive(dt: &NaiveDateTime) -> Self {
        Self {
            year: dt.year(),
            month: dt.month() as i32,
            day_of_month: dt.day() as i32,
            day_of_week: i32::from(Weekday::from(dt.weekday()).ordinal()),
            minute_of_day: (dt.hour() * 60 + dt.minute()) as i32,
        }
    }

    /// Break down a Unix timestamp in milliseconds, using UTC or the
    /// process-local time zone.
    ///
    /// Returns `None` when the timestamp is outside chrono's range.
    pub fn from_timestamp_millis(millis: i64, use_utc: bool) -> Option<Self> {
        let utc = DateTime::from_timestamp_millis(millis)?;
        if use_utc {
            utc.calendar_fields(true)
        } else {
            utc.with_timezone(&Local).calendar_fields(false)
        }
    }

    /// Calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month, 1–12.
    pub fn month(&self) -> i32 {
        self.month
    }

    /// Day of the month, 1–31.
    pub fn day_of_month(&self) -> i32 {
        self.day_of_month
    }

    /// Day of the week, 1 = Monday … 7 = Sunday.
    pub fn day_of_week(&self) -> i32 {
        self.day_of_week
    }

    /// Minutes since midnight, 0–1439.
    pub fn minute_of_day(&self) -> i32 {
        self.minute_of_day
    }

    /// The value of a single field.
    pub fn get(&self, field: TemporalField) -> i32 {
        match field {
            TemporalField::Year => self.year,
            TemporalField::Month => self.month,
            TemporalField::DayOfMonth => self.day_of_month,
            TemporalField::DayOfWeek => self.day_of_week,
            TemporalField::MinuteOfDay => self.minute_of_day,
        }
    }

    /// The month as a [`Month`].
    pub fn month_of_year(&self) -> Month {
        // month is 1..=12 for every constructor, so the fallback is unreachable
        Month::from_number(self.month as u8).unwrap_or(Month::January)
    }

    /// The day of week as a [`Weekday`].
    pub fn weekday(&self) -> Weekday {
        // day_of_week is 1..=7 for every constructor, so the fallback is unreachable
        Weekday::from_ordinal(self.day_of_week as u8).unwrap_or(Weekday::Monday)
    }
}

impl std::fmt::Display for CalendarFields {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} ({}) {:02}:{:02}",
            self.year,
            self.month,
            self.day_of_month,
            self.weekday(),
            self.minute_of_day / 60,
            self.minute_of_day % 60
        )
    }
}

// ── CalendarDate ──────────────────────────────────────────────────────────────

/// A value that can be broken down into [`CalendarFields`].
pub trait CalendarDate {
    /// Extract the calendar fields, in UTC when `use_utc` is set and in the
    /// value's own (local) calendar otherwise.
    ///
    /// Returns `None` for a date that cannot be matched.
    fn calendar_fields(&self, use_utc: bool) -> Option<CalendarFields>;
}

impl<Tz: TimeZone> CalendarDate for DateTime<Tz> {
    fn calendar_fields(&self, use_utc: bool) -> Option<CalendarFields> {
        let naive = if use_utc {
            self.naive_utc()
        } else {
            self.naive_local()
        };
        Some(CalendarFields::from_naive(&naive))
    }
}

/// Wall-clock times carry no zone, so the flag is ignored.
impl CalendarDate for NaiveDateTime {
    fn calendar_fields(&self, _use_utc: bool) -> Option<CalendarFields> {
        Some(CalendarFields::from_naive(self))
    }
}

impl CalendarDate for CalendarFields {
    fn calendar_fields(&self, _use_utc: bool) -> Option<CalendarFields> {
        Some(*self)
    }
}

impl<D: CalendarDate> CalendarDate for Option<D> {
    fn calendar_fields(&self, use_utc: bool) -> Option<CalendarFields> {
        self.as_ref().and_then(|d| d.calendar_fields(use_utc))
    }
}

impl<D: CalendarDate + ?Sized> CalendarDate for &D {
    fn calendar_fields(&self, use_utc: bool) -> Option<CalendarFields> {
        (**self).calendar_fields(use_utc)
    }
}

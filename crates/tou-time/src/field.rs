//! `TemporalField` — the calendar fields a tariff rule can constrain, and
//! their legal domains.

use tou_core::IntegerRange;

/// A calendar field that a rule may restrict with an [`IntegerRange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemporalField {
    /// Calendar year. Has no fixed domain.
    Year,
    /// Month of the year, 1–12.
    Month,
    /// Day of the month, 1–31.
    DayOfMonth,
    /// Day of the week, 1 = Monday … 7 = Sunday.
    DayOfWeek,
    /// Minute of the day, 0–1440. The upper end is matched exclusively.
    MinuteOfDay,
}

impl TemporalField {
    /// The four fields every rule carries, in description order.
    pub const TIME_OF_USE: [TemporalField; 4] = [
        TemporalField::Month,
        TemporalField::DayOfMonth,
        TemporalField::DayOfWeek,
        TemporalField::MinuteOfDay,
    ];

    /// The full legal span of the field, or `None` for an open domain.
    pub fn bounds(&self) -> Option<IntegerRange> {
        match self {
            TemporalField::Year => None,
            TemporalField::Month => Some(IntegerRange::bounded(1, 12)),
            TemporalField::DayOfMonth => Some(IntegerRange::bounded(1, 31)),
            TemporalField::DayOfWeek => Some(IntegerRange::bounded(1, 7)),
            TemporalField::MinuteOfDay => Some(IntegerRange::bounded(0, 1440)),
        }
    }

    /// Return `true` if the range's upper end is exclusive for this field.
    pub fn has_exclusive_max(&self) -> bool {
        matches!(self, TemporalField::MinuteOfDay)
    }
}

impl std::fmt::Display for TemporalField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TemporalField::Year => "year",
            TemporalField::Month => "month",
            TemporalField::DayOfMonth => "day of month",
            TemporalField::DayOfWeek => "day of week",
            TemporalField::MinuteOfDay => "minute of day",
        };
        f.write_str(name)
    }
}

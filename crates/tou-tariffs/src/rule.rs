//! `TemporalRule` — a set of rates that applies on matching dates.
//!
//! A rule constrains up to four calendar fields with [`IntegerRange`]s. A
//! missing range places no constraint on its field. Every range is inclusive
//! at both ends except the minute-of-day range, whose maximum is exclusive:
//! `[0..1440]` runs from 00:00 up to, but not including, 24:00.

use std::fmt;

use tou_core::IntegerRange;
use tou_time::{CalendarDate, CalendarFields, TemporalField};
use tracing::debug;

use crate::parser::{FieldParser, RuleDefinition};
use crate::rate::{RateMap, TariffRate};

/// Anything a [`Schedule`](crate::Schedule) can match against a date.
pub trait TariffRule {
    /// Return `true` if the rule applies to the given calendar fields.
    fn applies_to(&self, fields: &CalendarFields) -> bool;

    /// The rates the rule contributes when it applies.
    fn rates(&self) -> &RateMap;
}

/// Rates that apply within a month / day-of-month / day-of-week /
/// minute-of-day window.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TemporalRule {
    month_range: Option<IntegerRange>,
    day_of_month_range: Option<IntegerRange>,
    day_of_week_range: Option<IntegerRange>,
    minute_of_day_range: Option<IntegerRange>,
    rates: RateMap,
}

impl TemporalRule {
    /// Create a rule.
    ///
    /// Rates are keyed by id; when two rates share an id the later one wins.
    pub fn new(
        month_range: Option<IntegerRange>,
        day_of_month_range: Option<IntegerRange>,
        day_of_week_range: Option<IntegerRange>,
        minute_of_day_range: Option<IntegerRange>,
        rates: impl IntoIterator<Item = TariffRate>,
    ) -> Self {
        Self {
            month_range,
            day_of_month_range,
            day_of_week_range,
            minute_of_day_range,
            rates: collect_rates(rates),
        }
    }

    /// Start building a rule with no constraints and no rates.
    pub fn builder() -> TemporalRuleBuilder {
        TemporalRuleBuilder::default()
    }

    /// Create a rule from text, using `parser` for each present field.
    /// The `years` entry of `definition` is ignored.
    ///
    /// # Errors
    /// Propagates the first field the parser rejects.
    pub fn parse<P: FieldParser + ?Sized>(
        parser: &P,
        definition: &RuleDefinition,
        rates: impl IntoIterator<Item = TariffRate>,
    ) -> tou_core::Result<Self> {
        let field = |f, text: &Option<String>| RuleDefinition::parse(parser, f, text.as_deref());
        Ok(Self::new(
            field(TemporalField::Month, &definition.months)?,
            field(TemporalField::DayOfMonth, &definition.days_of_month)?,
            field(TemporalField::DayOfWeek, &definition.days_of_week)?,
            field(TemporalField::MinuteOfDay, &definition.minutes_of_day)?,
            rates,
        ))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Month constraint (1–12).
    pub fn month_range(&self) -> Option<&IntegerRange> {
        self.month_range.as_ref()
    }

    /// Day-of-month constraint (1–31).
    pub fn day_of_month_range(&self) -> Option<&IntegerRange> {
        self.day_of_month_range.as_ref()
    }

    /// Day-of-week constraint (1 = Monday … 7 = Sunday).
    pub fn day_of_week_range(&self) -> Option<&IntegerRange> {
        self.day_of_week_range.as_ref()
    }

    /// Minute-of-day constraint (0–1440, maximum exclusive).
    pub fn minute_of_day_range(&self) -> Option<&IntegerRange> {
        self.minute_of_day_range.as_ref()
    }

    /// The constraint on `field`; always `None` for [`TemporalField::Year`].
    pub fn range(&self, field: TemporalField) -> Option<&IntegerRange> {
        match field {
            TemporalField::Year => None,
            TemporalField::Month => self.month_range(),
            TemporalField::DayOfMonth => self.day_of_month_range(),
            TemporalField::DayOfWeek => self.day_of_week_range(),
            TemporalField::MinuteOfDay => self.minute_of_day_range(),
        }
    }

    // ── Matching ──────────────────────────────────────────────────────────────

    /// Return `true` if the rule applies at `date`.
    ///
    /// Fields are read in UTC when `use_utc` is set, otherwise from the
    /// date's local calendar. A date without calendar fields never matches.
    pub fn applies_at<D: CalendarDate + ?Sized>(&self, date: &D, use_utc: bool) -> bool {
        date.calendar_fields(use_utc)
            .is_some_and(|fields| self.applies_to(&fields))
    }

    /// Describe each constraint relative to its field's domain, in the order
    /// month, day of month, day of week, minute of day.
    pub fn description_components(&self, unbounded_token: Option<&str>) -> [String; 4] {
        TemporalField::TIME_OF_USE.map(|field| {
            IntegerRange::description(
                field.bounds().as_ref(),
                self.range(field),
                unbounded_token,
            )
        })
    }
}

impl TariffRule for TemporalRule {
    fn applies_to(&self, fields: &CalendarFields) -> bool {
        TemporalField::TIME_OF_USE
            .iter()
            .all(|&field| within(field, self.range(field), fields.get(field)))
    }

    fn rates(&self) -> &RateMap {
        &self.rates
    }
}

impl fmt::Display for TemporalRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description_components(None).join(" "))?;
        write_rate_ids(f, &self.rates)
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Builder for [`TemporalRule`].
#[derive(Debug, Clone, Default)]
pub struct TemporalRuleBuilder {
    month_range: Option<IntegerRange>,
    day_of_month_range: Option<IntegerRange>,
    day_of_week_range: Option<IntegerRange>,
    minute_of_day_range: Option<IntegerRange>,
    rates: Vec<TariffRate>,
}

impl TemporalRuleBuilder {
    /// Constrain the month.
    pub fn months(mut self, range: IntegerRange) -> Self {
        self.month_range = Some(range);
        self
    }

    /// Constrain the day of the month.
    pub fn days_of_month(mut self, range: IntegerRange) -> Self {
        self.day_of_month_range = Some(range);
        self
    }

    /// Constrain the day of the week.
    pub fn days_of_week(mut self, range: IntegerRange) -> Self {
        self.day_of_week_range = Some(range);
        self
    }

    /// Constrain the minute of the day (maximum exclusive).
    pub fn minutes_of_day(mut self, range: IntegerRange) -> Self {
        self.minute_of_day_range = Some(range);
        self
    }

    /// Add a rate.
    pub fn rate(mut self, rate: TariffRate) -> Self {
        self.rates.push(rate);
        self
    }

    /// Add several rates.
    pub fn rates(mut self, rates: impl IntoIterator<Item = TariffRate>) -> Self {
        self.rates.extend(rates);
        self
    }

    /// Build the rule.
    pub fn build(self) -> TemporalRule {
        TemporalRule::new(
            self.month_range,
            self.day_of_month_range,
            self.day_of_week_range,
            self.minute_of_day_range,
            self.rates,
        )
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// An absent range matches anything. Fields with an exclusive maximum also
/// require `value` to lie below it.
fn within(field: TemporalField, range: Option<&IntegerRange>, value: i32) -> bool {
    range.map_or(true, |r| {
        r.contains(value)
            && !(field.has_exclusive_max() && r.upper() == Some(value))
    })
}

pub(crate) fn collect_rates(rates: impl IntoIterator<Item = TariffRate>) -> RateMap {
    let mut map = RateMap::new();
    for rate in rates {
        if let Some(previous) = map.insert(rate.id().to_string(), rate) {
            debug!(rate = previous.id(), "duplicate rate id, keeping the later rate");
        }
    }
    map
}

pub(crate) fn write_rate_ids(f: &mut fmt::Formatter<'_>, rates: &RateMap) -> fmt::Result {
    f.write_str(" {")?;
    for (i, id) in rates.keys().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        f.write_str(id)?;
    }
    f.write_str("}")
}

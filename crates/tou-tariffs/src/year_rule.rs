//! `YearTemporalRule` — a [`TemporalRule`] scoped to a range of years.

use std::cmp::Ordering;
use std::fmt;

use tou_core::{Endpoint, IntegerRange};
use tou_time::{CalendarDate, CalendarFields, TemporalField};

use crate::parser::{FieldParser, RuleDefinition};
use crate::rate::{RateMap, TariffRate};
use crate::rule::{write_rate_ids, TariffRule, TemporalRule};

/// A [`TemporalRule`] with an additional, optional year constraint.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct YearTemporalRule {
    year_range: Option<IntegerRange>,
    rule: TemporalRule,
}

impl YearTemporalRule {
    /// Scope `rule` to `year_range`. `None` applies in every year.
    pub fn new(year_range: Option<IntegerRange>, rule: TemporalRule) -> Self {
        Self { year_range, rule }
    }

    /// Create a rule from text, including the `years` entry.
    ///
    /// # Errors
    /// Propagates the first field the parser rejects.
    pub fn parse_years<P: FieldParser + ?Sized>(
        parser: &P,
        definition: &RuleDefinition,
        rates: impl IntoIterator<Item = TariffRate>,
    ) -> tou_core::Result<Self> {
        let year_range =
            RuleDefinition::parse(parser, TemporalField::Year, definition.years.as_deref())?;
        let rule = TemporalRule::parse(parser, definition, rates)?;
        Ok(Self::new(year_range, rule))
    }

    /// Year constraint.
    pub fn year_range(&self) -> Option<&IntegerRange> {
        self.year_range.as_ref()
    }

    /// First year the rule is defined for, if any.
    pub fn year_min(&self) -> Option<i32> {
        self.year_range.and_then(|r| r.lower())
    }

    /// The wrapped four-field rule.
    pub fn rule(&self) -> &TemporalRule {
        &self.rule
    }

    /// The constraint on `field`.
    pub fn range(&self, field: TemporalField) -> Option<&IntegerRange> {
        match field {
            TemporalField::Year => self.year_range(),
            _ => self.rule.range(field),
        }
    }

    /// Return `true` if the year and all four time-of-use fields match.
    pub fn applies_at<D: CalendarDate + ?Sized>(&self, date: &D, use_utc: bool) -> bool {
        date.calendar_fields(use_utc)
            .is_some_and(|fields| self.applies_to(&fields))
    }

    /// Like [`applies_at`](Self::applies_at), but treating the year range as
    /// open-ended: any year from its minimum onwards matches and the
    /// maximum is ignored.
    pub fn applies_at_year_extended<D: CalendarDate + ?Sized>(
        &self,
        date: &D,
        use_utc: bool,
    ) -> bool {
        date.calendar_fields(use_utc)
            .is_some_and(|fields| self.applies_to_year_extended(&fields))
    }

    /// Field-level form of [`applies_at_year_extended`](Self::applies_at_year_extended).
    pub fn applies_to_year_extended(&self, fields: &CalendarFields) -> bool {
        self.year_min().map_or(true, |min| fields.year() >= min) && self.rule.applies_to(fields)
    }

    /// Minimum endpoints compared by [`natural_cmp`](Self::natural_cmp):
    /// year, month, day of month, day of week, minute of day. `None` marks
    /// an absent range.
    pub fn sort_key(&self) -> [Option<Endpoint>; 5] {
        [
            TemporalField::Year,
            TemporalField::Month,
            TemporalField::DayOfMonth,
            TemporalField::DayOfWeek,
            TemporalField::MinuteOfDay,
        ]
        .map(|field| self.range(field).map(IntegerRange::min_endpoint))
    }

    /// Order rules by the minimum of each range, year first.
    ///
    /// An unbounded minimum sorts before any bounded one; an absent range
    /// sorts after any present one.
    pub fn natural_cmp(&self, other: &Self) -> Ordering {
        cmp_keys(&self.sort_key(), &other.sort_key())
    }

    /// The order a [`YearSchedule`](crate::YearSchedule) expects for
    /// year-extend matching: most recent year first, then the remaining
    /// fields in [`natural_cmp`](Self::natural_cmp) order.
    ///
    /// Within a year, constrained rules therefore precede catch-all rules of
    /// the same year. Rules without a year constraint go last.
    ///
    /// ```
    /// use tou_core::IntegerRange;
    /// use tou_tariffs::{TemporalRule, YearTemporalRule};
    ///
    /// let year = |y| YearTemporalRule::new(Some(IntegerRange::single(y)), TemporalRule::default());
    /// let mut rules = vec![year(2023), year(2024)];
    /// rules.sort_by(YearTemporalRule::recency_cmp);
    /// assert_eq!(rules[0].year_min(), Some(2024));
    /// ```
    pub fn recency_cmp(&self, other: &Self) -> Ordering {
        let [year_a, rest_a @ ..] = self.sort_key();
        let [year_b, rest_b @ ..] = other.sort_key();
        let by_year = match (year_a, year_b) {
            (Some(a), Some(b)) => b.cmp(&a),
            _ => cmp_min(year_a, year_b),
        };
        by_year.then_with(|| cmp_keys(&rest_a, &rest_b))
    }

    /// Describe each constraint, year first. The year has no domain, so
    /// only an absent or fully unbounded year range reads as "all".
    pub fn description_components(&self, unbounded_token: Option<&str>) -> [String; 5] {
        let year = IntegerRange::description(
            Some(&IntegerRange::UNBOUNDED),
            self.year_range(),
            unbounded_token,
        );
        let [month, day, weekday, minute] = self.rule.description_components(unbounded_token);
        [year, month, day, weekday, minute]
    }
}

fn cmp_keys(a: &[Option<Endpoint>], b: &[Option<Endpoint>]) -> Ordering {
    a.iter()
        .zip(b)
        .map(|(a, b)| cmp_min(*a, *b))
        .find(|o| o.is_ne())
        .unwrap_or(Ordering::Equal)
}

fn cmp_min(a: Option<Endpoint>, b: Option<Endpoint>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl TariffRule for YearTemporalRule {
    fn applies_to(&self, fields: &CalendarFields) -> bool {
        self.year_range.map_or(true, |r| r.contains(fields.year())) && self.rule.applies_to(fields)
    }

    fn rates(&self) -> &RateMap {
        self.rule.rates()
    }
}

impl From<TemporalRule> for YearTemporalRule {
    fn from(rule: TemporalRule) -> Self {
        Self::new(None, rule)
    }
}

impl fmt::Display for YearTemporalRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description_components(None).join(" "))?;
        write_rate_ids(f, self.rates())
    }
}

//! `Schedule` — an ordered list of rules resolved against dates.
//!
//! Rule order is match order. With `multiple_match` off a schedule returns at
//! most the first matching rule; with it on, every matching rule in list
//! order. Resolving merges the rates of the matched rules, later matches
//! overriding earlier ones on the same rate id.

use std::borrow::Cow;

use tou_time::{CalendarDate, CalendarFields};
use tracing::{debug, trace};

use crate::options::ScheduleOptions;
use crate::rate::RateMap;
use crate::rule::{TariffRule, TemporalRule};

/// An immutable, ordered set of rules.
#[derive(Debug, Clone)]
pub struct Schedule<R = TemporalRule> {
    rules: Box<[R]>,
    options: ScheduleOptions,
}

impl<R: TariffRule> Schedule<R> {
    /// Create a schedule. `options.year_extend` is ignored here; see
    /// [`YearSchedule`](crate::YearSchedule).
    pub fn new(rules: impl IntoIterator<Item = R>, options: ScheduleOptions) -> Self {
        let rules: Box<[R]> = rules.into_iter().collect();
        debug!(
            rules = rules.len(),
            multiple_match = options.multiple_match,
            "built tariff schedule"
        );
        Self { rules, options }
    }

    /// The rules, in match order.
    pub fn rules(&self) -> &[R] {
        &self.rules
    }

    /// Matching options.
    pub fn options(&self) -> ScheduleOptions {
        self.options
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Return `true` if the schedule has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The first rule that applies at `date`, regardless of `multiple_match`.
    pub fn first_match<D: CalendarDate + ?Sized>(&self, date: &D, use_utc: bool) -> Option<&R> {
        let fields = date.calendar_fields(use_utc)?;
        self.rules.iter().find(|r| r.applies_to(&fields))
    }

    /// The rules that apply at `date`, in list order.
    ///
    /// Holds at most one rule unless `multiple_match` is set.
    pub fn matches<D: CalendarDate + ?Sized>(&self, date: &D, use_utc: bool) -> Vec<&R> {
        match date.calendar_fields(use_utc) {
            Some(fields) => self.matches_fields(&fields),
            None => Vec::new(),
        }
    }

    /// The rates in force at `date`.
    ///
    /// A single match lends out its own rate map; no match yields an empty
    /// map and several matches a merged copy.
    pub fn resolve<D: CalendarDate + ?Sized>(&self, date: &D, use_utc: bool) -> Cow<'_, RateMap> {
        merge_rates(&self.matches(date, use_utc))
    }

    fn matches_fields(&self, fields: &CalendarFields) -> Vec<&R> {
        let candidates = self.rules.iter().filter(|r| r.applies_to(fields));
        let matched: Vec<&R> = if self.options.multiple_match {
            candidates.collect()
        } else {
            candidates.take(1).collect()
        };
        trace!(query = %fields, matched = matched.len(), "schedule matched rules");
        matched
    }
}

/// Combine the rates of `matched`, later rules overriding earlier ones.
pub(crate) fn merge_rates<'a, R: TariffRule>(matched: &[&'a R]) -> Cow<'a, RateMap> {
    match matched {
        [] => Cow::Owned(RateMap::new()),
        &[only] => Cow::Borrowed(only.rates()),
        many => {
            let mut merged = RateMap::new();
            for rule in many {
                for (id, rate) in rule.rates() {
                    if merged.insert(id.clone(), rate.clone()).is_some() {
                        debug!(rate = %id, "rate overridden by a later matching rule");
                    }
                }
            }
            Cow::Owned(merged)
        }
    }
}

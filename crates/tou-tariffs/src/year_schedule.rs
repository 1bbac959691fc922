//! `YearSchedule` — a schedule of year-scoped rules with optional
//! year-extend matching.
//!
//! # Year-extend matching
//!
//! With `year_extend` set, the most recently defined group of year-scoped
//! rules stays in force for every later year until a newer group is
//! defined. Each query recomputes the group in a single scan:
//!
//! 1. Year-scoped rules whose first year lies after the query year are
//!    skipped.
//! 2. The first remaining year-scoped rule in list order fixes the group's
//!    first year. Year-scoped rules with a different first year are skipped.
//! 3. Rules in the group are matched ignoring their last year; rules without
//!    a first year are matched normally.
//!
//! The group is whichever comes first in list order, so rules must be listed
//! newest year first for "most recent" to hold. The schedule never reorders
//! its rules; sort them beforehand with [`YearTemporalRule::recency_cmp`],
//! which also keeps constrained rules ahead of catch-all rules within a year.

use std::borrow::Cow;

use tou_time::{CalendarDate, CalendarFields};
use tracing::trace;

use crate::options::ScheduleOptions;
use crate::rate::RateMap;
use crate::rule::TariffRule;
use crate::schedule::{merge_rates, Schedule};
use crate::year_rule::YearTemporalRule;

/// A [`Schedule`] of [`YearTemporalRule`]s that honours
/// [`ScheduleOptions::year_extend`].
#[derive(Debug, Clone)]
pub struct YearSchedule {
    inner: Schedule<YearTemporalRule>,
}

impl YearSchedule {
    /// Create a schedule. Rule order is kept as given.
    pub fn new(
        rules: impl IntoIterator<Item = YearTemporalRule>,
        options: ScheduleOptions,
    ) -> Self {
        Self {
            inner: Schedule::new(rules, options),
        }
    }

    /// The rules, in match order.
    pub fn rules(&self) -> &[YearTemporalRule] {
        self.inner.rules()
    }

    /// Matching options.
    pub fn options(&self) -> ScheduleOptions {
        self.inner.options()
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Return `true` if the schedule has no rules.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// The first rule that applies at `date`.
    pub fn first_match<D: CalendarDate + ?Sized>(
        &self,
        date: &D,
        use_utc: bool,
    ) -> Option<&YearTemporalRule> {
        let fields = date.calendar_fields(use_utc)?;
        self.extended_matches(&fields, true).into_iter().next()
    }

    /// The rules that apply at `date`, in list order.
    ///
    /// Holds at most one rule unless `multiple_match` is set.
    pub fn matches<D: CalendarDate + ?Sized>(
        &self,
        date: &D,
        use_utc: bool,
    ) -> Vec<&YearTemporalRule> {
        match date.calendar_fields(use_utc) {
            Some(fields) => self.extended_matches(&fields, !self.options().multiple_match),
            None => Vec::new(),
        }
    }

    /// The rates in force at `date`; see [`Schedule::resolve`].
    pub fn resolve<D: CalendarDate + ?Sized>(&self, date: &D, use_utc: bool) -> Cow<'_, RateMap> {
        merge_rates(&self.matches(date, use_utc))
    }

    fn extended_matches(&self, fields: &CalendarFields, first_only: bool) -> Vec<&YearTemporalRule> {
        let year_extend = self.options().year_extend;
        let year = fields.year();
        let mut group: Option<i32> = None;
        let mut matched = Vec::new();

        for rule in self.rules() {
            let applies = match rule.year_min() {
                Some(min) if year_extend => {
                    if min > year || *group.get_or_insert(min) != min {
                        continue;
                    }
                    rule.applies_to_year_extended(fields)
                }
                _ => rule.applies_to(fields),
            };
            if applies {
                matched.push(rule);
                if first_only {
                    break;
                }
            }
        }

        trace!(
            query = %fields,
            year_group = ?group,
            matched = matched.len(),
            "year schedule matched rules"
        );
        matched
    }
}

impl From<Schedule<YearTemporalRule>> for YearSchedule {
    fn from(inner: Schedule<YearTemporalRule>) -> Self {
        Self { inner }
    }
}

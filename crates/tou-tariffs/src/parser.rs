//! Text input for rules.
//!
//! Turning human text such as `"Jan-Mar"` or `"08:00-17:30"` into ranges is
//! delegated to a [`FieldParser`], so locale-specific parsing can live
//! outside this crate. [`BasicFieldParser`] covers numbers, English month and
//! weekday names, and 24-hour clock times.

use serde::{Deserialize, Serialize};
use tou_core::errors::{Error, Result};
use tou_core::utilities::data_parsers::{parse_clock_minutes, split_range_tokens};
use tou_core::{IntegerRange, DEFAULT_UNBOUNDED_TOKEN};
use tou_time::{Month, TemporalField, Weekday};

/// Converts the text of one rule field into a range.
pub trait FieldParser {
    /// Parse `text` as a constraint on `field`.
    ///
    /// An "all values" input yields the field's full domain.
    ///
    /// # Errors
    /// Returns [`Error::Parse`] when the text cannot be understood or
    /// falls outside the field's domain.
    fn parse_field(&self, field: TemporalField, text: &str) -> Result<IntegerRange>;
}

/// Text form of a rule's constraints. `None` leaves a field unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleDefinition {
    /// Years, e.g. `"2024"` or `"2020-2023"`.
    pub years: Option<String>,
    /// Months, e.g. `"Jun-Aug"` or `"6-8"`.
    pub months: Option<String>,
    /// Days of the month, e.g. `"1-15"`.
    pub days_of_month: Option<String>,
    /// Days of the week, e.g. `"Mon-Fri"`.
    pub days_of_week: Option<String>,
    /// Minutes of the day as clock times or minute counts, e.g. `"07:00-21:00"`.
    pub minutes_of_day: Option<String>,
}

impl RuleDefinition {
    /// Parse one optional field.
    pub(crate) fn parse<P: FieldParser + ?Sized>(
        parser: &P,
        field: TemporalField,
        text: Option<&str>,
    ) -> Result<Option<IntegerRange>> {
        text.map(|t| parser.parse_field(field, t)).transpose()
    }
}

/// Locale-neutral [`FieldParser`].
///
/// Accepts one value or two values joined by the delimiter (default `-`).
/// Values are integers, English month names for months, English weekday
/// names for days of the week, or `HH:MM` for minutes of the day. The
/// unbounded token (default `*`) stands for the start or end of the field's
/// domain. Negative numbers are not supported with the default delimiter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicFieldParser {
    unbounded_token: String,
    delimiter: char,
}

impl Default for BasicFieldParser {
    fn default() -> Self {
        Self {
            unbounded_token: DEFAULT_UNBOUNDED_TOKEN.to_string(),
            delimiter: '-',
        }
    }
}

impl BasicFieldParser {
    /// Parser with `*` and `-`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different unbounded token.
    pub fn with_unbounded_token(mut self, token: impl Into<String>) -> Self {
        self.unbounded_token = token.into();
        self
    }

    /// Use a different range delimiter.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// The unbounded token.
    pub fn unbounded_token(&self) -> &str {
        &self.unbounded_token
    }

    /// Map a name or clock token to its number; pass anything else through.
    fn normalize_token(&self, field: TemporalField, token: &str) -> Option<String> {
        if token == self.unbounded_token {
            return Some(token.to_string());
        }
        let named = match field {
            TemporalField::Month => Month::from_name(token).map(|m| i32::from(m.number())),
            TemporalField::DayOfWeek => Weekday::from_name(token).map(|w| i32::from(w.ordinal())),
            TemporalField::MinuteOfDay if token.contains(':') => {
                return parse_clock_minutes(token).map(|m| m.to_string())
            }
            _ => None,
        };
        Some(named.map_or_else(|| token.to_string(), |n| n.to_string()))
    }
}

impl FieldParser for BasicFieldParser {
    fn parse_field(&self, field: TemporalField, text: &str) -> Result<IntegerRange> {
        let error = || Error::Parse {
            field: field.to_string(),
            input: text.to_string(),
        };
        let tokens = split_range_tokens(text, self.delimiter)
            .into_iter()
            .map(|t| self.normalize_token(field, t))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(error)?;
        let tokens: Vec<&str> = tokens.iter().map(String::as_str).collect();
        IntegerRange::parse_range(
            &tokens,
            field.bounds().as_ref(),
            Some(&self.unbounded_token),
        )
        .ok_or_else(error)
    }
}

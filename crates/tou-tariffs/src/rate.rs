//! `TariffRate` — an identified charge amount attached to a rule.

use std::collections::BTreeMap;
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tou_core::ensure;
use tou_core::errors::{Error, Result};

/// Rates keyed by their id.
pub type RateMap = BTreeMap<String, TariffRate>;

/// An identified amount with an optional description.
///
/// The amount keeps the exact text it was built from, so no precision is
/// lost, and is also available as a [`Decimal`]. Currency and rounding are
/// the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RateRepr", into = "RateRepr")]
pub struct TariffRate {
    id: String,
    amount: String,
    value: Decimal,
    description: Option<String>,
}

#[derive(Serialize, Deserialize)]
struct RateRepr {
    id: String,
    amount: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl TryFrom<RateRepr> for TariffRate {
    type Error = Error;

    fn try_from(r: RateRepr) -> Result<Self> {
        TariffRate::new(r.id, r.amount, r.description)
    }
}

impl From<TariffRate> for RateRepr {
    fn from(r: TariffRate) -> Self {
        RateRepr {
            id: r.id,
            amount: r.amount,
            description: r.description,
        }
    }
}

impl TariffRate {
    /// Create a rate.
    ///
    /// # Errors
    /// Returns [`Error::Precondition`] for an empty id and
    /// [`Error::InvalidAmount`] when `amount` is not a decimal number
    /// (plain or scientific notation).
    pub fn new(
        id: impl Into<String>,
        amount: impl Into<String>,
        description: Option<String>,
    ) -> Result<Self> {
        let id = id.into();
        let amount = amount.into();
        ensure!(!id.trim().is_empty(), "rate id must not be empty");
        let value = parse_amount(&amount).ok_or_else(|| Error::InvalidAmount {
            id: id.clone(),
            amount: amount.clone(),
        })?;
        Ok(Self {
            id,
            amount,
            value,
            description,
        })
    }

    /// Identifier, unique within a rule.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The amount exactly as given.
    pub fn amount(&self) -> &str {
        &self.amount
    }

    /// The amount as a decimal number.
    pub fn value(&self) -> Decimal {
        self.value
    }

    /// The amount as a float, for display or approximate arithmetic.
    pub fn amount_f64(&self) -> f64 {
        self.value.to_f64().unwrap_or(f64::NAN)
    }

    /// Optional human-readable description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl std::fmt::Display for TariffRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.id, self.amount)?;
        if let Some(d) = &self.description {
            write!(f, " ({d})")?;
        }
        Ok(())
    }
}

fn parse_amount(s: &str) -> Option<Decimal> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_text_is_preserved() {
        let r = TariffRate::new("peak", "0.123456789012345678", None).unwrap();
        assert_eq!(r.amount(), "0.123456789012345678");
        assert_eq!(
            r.value(),
            Decimal::from_str("0.123456789012345678").unwrap()
        );
    }

    #[test]
    fn test_scientific_amount() {
        let r = TariffRate::new("fee", "1.5e2", None).unwrap();
        assert_eq!(r.value(), Decimal::from(150));
        assert_eq!(r.amount(), "1.5e2");
    }

    #[test]
    fn test_invalid_amount() {
        let err = TariffRate::new("peak", "12,5", None).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidAmount {
                id: "peak".into(),
                amount: "12,5".into()
            }
        );
        assert!(TariffRate::new("peak", "", None).is_err());
    }

    #[test]
    fn test_empty_id() {
        assert!(matches!(
            TariffRate::new(" ", "1", None),
            Err(Error::Precondition(_))
        ));
    }

    #[test]
    fn test_display() {
        let r = TariffRate::new("offpeak", "0.10", Some("Night".into())).unwrap();
        assert_eq!(r.to_string(), "offpeak = 0.10 (Night)");
        assert_eq!(r.description(), Some("Night"));
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: TariffRate =
            serde_json::from_str(r#"{"id": "a", "amount": "2.50"}"#).unwrap();
        assert_eq!(ok.amount(), "2.50");
        assert!(serde_json::from_str::<TariffRate>(r#"{"id": "a", "amount": "x"}"#).is_err());
        assert_eq!(
            serde_json::to_string(&ok).unwrap(),
            r#"{"id":"a","amount":"2.50"}"#
        );
    }
}

//! `IntegerRange` — an immutable closed interval over `i32` whose endpoints
//! may be unbounded.
//!
//! Ranges are normalised on construction: if both endpoints are bounded and
//! given in reverse order they are swapped, so `min <= max` always holds.
//! Every operation returns a new value; `IntegerRange` is `Copy`.
//!
//! # Ordering
//! Ranges order by `min`, then by `max`. At each step an unbounded endpoint
//! sorts **before** any bounded one, regardless of which side it is on. The
//! ordering exists for sorting rules; matching never relies on it.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::utilities::data_parsers::parse_integer_token;

/// Token that stands for "unbounded" (or "the whole domain") in text input.
pub const DEFAULT_UNBOUNDED_TOKEN: &str = "*";

// ── Endpoint ──────────────────────────────────────────────────────────────────

/// One end of an [`IntegerRange`].
///
/// The derived ordering places `Unbounded` before every `Bounded` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Endpoint {
    /// No limit in this direction (−∞ for a minimum, +∞ for a maximum).
    Unbounded,
    /// A finite, inclusive limit.
    Bounded(i32),
}

impl Endpoint {
    /// The finite value, or `None` when unbounded.
    pub fn value(self) -> Option<i32> {
        match self {
            Endpoint::Bounded(v) => Some(v),
            Endpoint::Unbounded => None,
        }
    }

    /// Return `true` for [`Endpoint::Unbounded`].
    pub fn is_unbounded(self) -> bool {
        matches!(self, Endpoint::Unbounded)
    }
}

impl From<i32> for Endpoint {
    fn from(v: i32) -> Self {
        Endpoint::Bounded(v)
    }
}

impl From<Option<i32>> for Endpoint {
    fn from(v: Option<i32>) -> Self {
        v.map_or(Endpoint::Unbounded, Endpoint::Bounded)
    }
}

// ── IntegerRange ──────────────────────────────────────────────────────────────

/// An inclusive `[min, max]` interval of integers.
///
/// Serialises as `{"min": <int|null>, "max": <int|null>}`; `null` means
/// unbounded. Deserialisation goes through the same normalising constructor.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RangeRepr", into = "RangeRepr")]
pub struct IntegerRange {
    min: Endpoint,
    max: Endpoint,
}

#[derive(Serialize, Deserialize)]
struct RangeRepr {
    #[serde(default)]
    min: Option<i32>,
    #[serde(default)]
    max: Option<i32>,
}

impl From<RangeRepr> for IntegerRange {
    fn from(r: RangeRepr) -> Self {
        IntegerRange::new(r.min, r.max)
    }
}

impl From<IntegerRange> for RangeRepr {
    fn from(r: IntegerRange) -> Self {
        RangeRepr {
            min: r.lower(),
            max: r.upper(),
        }
    }
}

impl IntegerRange {
    /// The range unbounded at both ends.
    pub const UNBOUNDED: IntegerRange = IntegerRange {
        min: Endpoint::Unbounded,
        max: Endpoint::Unbounded,
    };

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a range, swapping bounded endpoints given in reverse order.
    ///
    /// ```
    /// use tou_core::IntegerRange;
    /// assert_eq!(IntegerRange::new(9, 3), IntegerRange::new(3, 9));
    /// assert_eq!(IntegerRange::new(None, 3).lower(), None);
    /// ```
    pub fn new(min: impl Into<Endpoint>, max: impl Into<Endpoint>) -> Self {
        let (min, max) = (min.into(), max.into());
        match (min, max) {
            (Endpoint::Bounded(a), Endpoint::Bounded(b)) if a > b => IntegerRange {
                min: Endpoint::Bounded(b),
                max: Endpoint::Bounded(a),
            },
            _ => IntegerRange { min, max },
        }
    }

    /// Create a fully bounded range.
    pub fn bounded(a: i32, b: i32) -> Self {
        Self::new(a, b)
    }

    /// The range containing exactly `value`.
    pub fn single(value: i32) -> Self {
        Self::new(value, value)
    }

    /// The range unbounded at both ends.
    pub fn unbounded() -> Self {
        Self::UNBOUNDED
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Lower endpoint.
    pub fn min_endpoint(&self) -> Endpoint {
        self.min
    }

    /// Upper endpoint.
    pub fn max_endpoint(&self) -> Endpoint {
        self.max
    }

    /// Finite minimum, or `None` when unbounded below.
    pub fn lower(&self) -> Option<i32> {
        self.min.value()
    }

    /// Finite maximum, or `None` when unbounded above.
    pub fn upper(&self) -> Option<i32> {
        self.max.value()
    }

    /// Return `true` when neither end is bounded.
    pub fn is_unbounded(&self) -> bool {
        self.min.is_unbounded() && self.max.is_unbounded()
    }

    // ── Set algebra ───────────────────────────────────────────────────────────

    /// Return `true` if `value` lies within the range (both ends inclusive).
    pub fn contains(&self, value: i32) -> bool {
        let above_min = match self.min {
            Endpoint::Unbounded => true,
            Endpoint::Bounded(min) => value >= min,
        };
        let below_max = match self.max {
            Endpoint::Unbounded => true,
            Endpoint::Bounded(max) => value <= max,
        };
        above_min && below_max
    }

    /// Return `true` if `endpoint` lies within the range.
    ///
    /// An unbounded endpoint stands for a missing value, which only a range
    /// unbounded at both ends contains.
    pub fn contains_endpoint(&self, endpoint: Endpoint) -> bool {
        match endpoint {
            Endpoint::Bounded(v) => self.contains(v),
            Endpoint::Unbounded => self.is_unbounded(),
        }
    }

    /// Return `true` if both endpoints of `other` lie within this range.
    ///
    /// `[..10]` does not contain `[..5]`: the unbounded end of the argument
    /// fails the bounded end here.
    pub fn contains_range(&self, other: &IntegerRange) -> bool {
        self.contains_endpoint(other.min) && self.contains_endpoint(other.max)
    }

    /// Return `true` if the two ranges share at least one value.
    pub fn intersects(&self, other: &IntegerRange) -> bool {
        starts_no_later_than_end(self.min, other.max)
            && starts_no_later_than_end(other.min, self.max)
    }

    /// Return `true` if one range ends exactly one below where the other
    /// starts, e.g. `[..10]` and `[11..]`.
    ///
    /// An unbounded end has no neighbour on that side.
    pub fn adjacent_to(&self, other: &IntegerRange) -> bool {
        ends_right_before(self.max, other.min) || ends_right_before(other.max, self.min)
    }

    /// Return `true` if [`merge_with`](Self::merge_with) would succeed.
    pub fn can_merge_with(&self, other: &IntegerRange) -> bool {
        self.intersects(other) || self.adjacent_to(other)
    }

    /// Merge two intersecting or adjacent ranges into their union.
    ///
    /// The result spans the smaller minimum and the larger maximum; an
    /// unbounded end on either side stays unbounded.
    ///
    /// # Errors
    /// Returns [`Error::NotMergeable`] when the ranges leave a gap between
    /// them. That is a caller bug; check [`can_merge_with`](Self::can_merge_with)
    /// or use [`try_merge`](Self::try_merge) first.
    pub fn merge_with(&self, other: &IntegerRange) -> Result<IntegerRange> {
        self.try_merge(other).ok_or_else(|| Error::NotMergeable {
            left: self.to_string(),
            right: other.to_string(),
        })
    }

    /// Like [`merge_with`](Self::merge_with) but returns `None` on a gap.
    pub fn try_merge(&self, other: &IntegerRange) -> Option<IntegerRange> {
        if !self.can_merge_with(other) {
            return None;
        }
        let min = match (self.min, other.min) {
            (Endpoint::Bounded(a), Endpoint::Bounded(b)) => Endpoint::Bounded(a.min(b)),
            _ => Endpoint::Unbounded,
        };
        let max = match (self.max, other.max) {
            (Endpoint::Bounded(a), Endpoint::Bounded(b)) => Endpoint::Bounded(a.max(b)),
            _ => Endpoint::Unbounded,
        };
        Some(IntegerRange { min, max })
    }

    // ── Text ──────────────────────────────────────────────────────────────────

    /// Parse a range from one or two tokens.
    ///
    /// A single token is a one-value range. A token equal to
    /// `unbounded_token` (default `"*"`) leaves that end unbounded, or takes
    /// the matching end of `bounds` when a domain is given. Reversed tokens
    /// are swapped.
    ///
    /// Returns `None` if a token is not an integer, if the token count is
    /// not one or two, or if the result does not fit inside `bounds`; values
    /// are never clamped.
    ///
    /// ```
    /// use tou_core::IntegerRange;
    /// let months = IntegerRange::bounded(1, 12);
    /// assert_eq!(
    ///     IntegerRange::parse_range(&["4", "*"], Some(&months), None),
    ///     Some(IntegerRange::bounded(4, 12))
    /// );
    /// assert_eq!(IntegerRange::parse_range(&["4", "13"], Some(&months), None), None);
    /// ```
    pub fn parse_range(
        tokens: &[&str],
        bounds: Option<&IntegerRange>,
        unbounded_token: Option<&str>,
    ) -> Option<IntegerRange> {
        let unbounded_token = unbounded_token.unwrap_or(DEFAULT_UNBOUNDED_TOKEN);
        let (first, second) = match tokens {
            [one] => (*one, *one),
            [a, b] => (*a, *b),
            _ => return None,
        };
        let parse = |token: &str| -> Option<Endpoint> {
            if token.trim() == unbounded_token {
                Some(Endpoint::Unbounded)
            } else {
                parse_integer_token(token).map(Endpoint::Bounded)
            }
        };
        let (mut min, mut max) = (parse(first)?, parse(second)?);
        if let Some(bounds) = bounds {
            if min.is_unbounded() {
                min = bounds.min;
            }
            if max.is_unbounded() {
                max = bounds.max;
            }
        }
        let range = IntegerRange::new(min, max);
        match bounds {
            Some(bounds) if !bounds.contains_range(&range) => None,
            Some(bounds) if *bounds == range => Some(*bounds),
            _ => Some(range),
        }
    }

    /// Describe `range` relative to a domain.
    ///
    /// Returns the unbounded token when `range` is absent or covers exactly
    /// `bounds`, otherwise the canonical `[min..max]` form.
    pub fn description(
        bounds: Option<&IntegerRange>,
        range: Option<&IntegerRange>,
        unbounded_token: Option<&str>,
    ) -> String {
        let unbounded_token = unbounded_token.unwrap_or(DEFAULT_UNBOUNDED_TOKEN);
        match range {
            None => unbounded_token.to_string(),
            Some(r) if bounds == Some(r) => unbounded_token.to_string(),
            Some(r) => r.to_string(),
        }
    }

    /// Tokens that [`parse_range`](Self::parse_range) turns back into this
    /// range.
    pub fn tokens(&self, unbounded_token: Option<&str>) -> [String; 2] {
        let unbounded_token = unbounded_token.unwrap_or(DEFAULT_UNBOUNDED_TOKEN);
        let text = |e: Endpoint| match e {
            Endpoint::Bounded(v) => v.to_string(),
            Endpoint::Unbounded => unbounded_token.to_string(),
        };
        [text(self.min), text(self.max)]
    }
}

/// `a_min <= b_max`, treating either unbounded end as satisfied.
fn starts_no_later_than_end(min: Endpoint, max: Endpoint) -> bool {
    match (min, max) {
        (Endpoint::Bounded(lo), Endpoint::Bounded(hi)) => lo <= hi,
        _ => true,
    }
}

/// `max + 1 == min` with both ends finite.
fn ends_right_before(max: Endpoint, min: Endpoint) -> bool {
    match (max, min) {
        (Endpoint::Bounded(hi), Endpoint::Bounded(lo)) => hi.checked_add(1) == Some(lo),
        _ => false,
    }
}

/// Compare two optional ranges; an absent range sorts after any present one.
pub fn cmp_optional(a: Option<&IntegerRange>, b: Option<&IntegerRange>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

// ── Ordering ──────────────────────────────────────────────────────────────────

impl Ord for IntegerRange {
    fn cmp(&self, other: &Self) -> Ordering {
        self.min.cmp(&other.min).then(self.max.cmp(&other.max))
    }
}

impl PartialOrd for IntegerRange {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl fmt::Display for IntegerRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        if let Some(min) = self.lower() {
            write!(f, "{min}")?;
        }
        f.write_str("..")?;
        if let Some(max) = self.upper() {
            write!(f, "{max}")?;
        }
        f.write_str("]")
    }
}

impl fmt::Debug for IntegerRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IntegerRange{self}")
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

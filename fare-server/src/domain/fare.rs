//! Fare and cost types.

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

/// The price of a fare, in pounds.
///
/// A cost of positive infinity means "no valid fare". Callers must treat
/// it as unavailable, never as free. It serialises as JSON `null`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Cost(f64);

impl Cost {
    /// Sentinel for a segment with no qualifying fare.
    pub const UNAVAILABLE: Cost = Cost(f64::INFINITY);

    pub fn new(pounds: f64) -> Self {
        Self(pounds)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// False only for the no-fare sentinel (or any non-finite value).
    pub fn is_available(&self) -> bool {
        self.0.is_finite()
    }

    /// Total ordering, for picking minima.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_available() {
            write!(f, "£{:.2}", self.0)
        } else {
            f.write_str("unavailable")
        }
    }
}

/// One priced option returned by the urban fare authority.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FareCandidate {
    pub cost: Cost,
    /// Whether the fare applies at peak times.
    pub is_peak: bool,
    /// Non-standard or promotional fare (e.g. a route avoiding zone 1).
    pub is_alternative: bool,
}

impl FareCandidate {
    pub fn new(cost: f64, is_peak: bool, is_alternative: bool) -> Self {
        Self {
            cost: Cost::new(cost),
            is_peak,
            is_alternative,
        }
    }
}

/// The single definitive fare returned by the national-rail authority.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fare {
    pub cost: Cost,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_is_not_free() {
        assert!(!Cost::UNAVAILABLE.is_available());
        assert!(Cost::new(0.0).is_available());
        assert_ne!(Cost::UNAVAILABLE, Cost::new(0.0));
        assert_eq!(Cost::UNAVAILABLE.value(), f64::INFINITY);
    }

    #[test]
    fn total_cmp_orders_sentinel_last() {
        let mut costs = [Cost::UNAVAILABLE, Cost::new(3.4), Cost::new(2.8)];
        costs.sort_by(Cost::total_cmp);
        assert_eq!(costs[0], Cost::new(2.8));
        assert_eq!(costs[2], Cost::UNAVAILABLE);
    }

    #[test]
    fn display() {
        assert_eq!(Cost::new(2.8).to_string(), "£2.80");
        assert_eq!(Cost::UNAVAILABLE.to_string(), "unavailable");
    }

    #[test]
    fn serialises_sentinel_as_null() {
        assert_eq!(serde_json::to_string(&Cost::new(5.25)).unwrap(), "5.25");
        assert_eq!(serde_json::to_string(&Cost::UNAVAILABLE).unwrap(), "null");
    }
}

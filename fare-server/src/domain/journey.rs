//! Journey types.
//!
//! A `RawJourney` is what the journey planner hands us: pairs of stop
//! identifiers that have not been checked against any fare network.
//! A `Journey` is the validated form, with every code network-tagged.

use serde::Serialize;

use super::{DomainError, Leg, StationCode};

/// An unvalidated hop as extracted from a planner itinerary.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawLeg {
    pub origin: String,
    pub destination: String,
}

impl RawLeg {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
        }
    }
}

impl From<&Leg> for RawLeg {
    fn from(leg: &Leg) -> Self {
        Self::new(leg.origin().as_str(), leg.destination().as_str())
    }
}

/// An itinerary's legs before validation.
pub type RawJourney = Vec<RawLeg>;

/// A validated, non-empty sequence of legs.
///
/// # Invariants
///
/// - At least one leg
/// - Every station code carries a recognised network prefix
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Journey {
    legs: Vec<Leg>,
}

impl Journey {
    /// Construct a journey from legs.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyJourney` if `legs` is empty.
    pub fn new(legs: Vec<Leg>) -> Result<Self, DomainError> {
        if legs.is_empty() {
            return Err(DomainError::EmptyJourney);
        }
        Ok(Self { legs })
    }

    /// Validate a raw journey. Fails on the first unrecognised station code.
    pub fn parse(raw: &[RawLeg]) -> Result<Self, DomainError> {
        let legs = raw
            .iter()
            .map(|leg| Leg::parse(&leg.origin, &leg.destination))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(legs)
    }

    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    pub fn into_legs(self) -> Vec<Leg> {
        self.legs
    }

    /// Number of legs (always at least one).
    pub fn len(&self) -> usize {
        self.legs.len()
    }

    /// Always false; journeys are non-empty by construction.
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    /// The first leg's origin.
    pub fn origin(&self) -> &StationCode {
        // Safe: non-empty by construction
        self.legs[0].origin()
    }

    /// The last leg's destination.
    pub fn destination(&self) -> &StationCode {
        // Safe: non-empty by construction
        self.legs[self.legs.len() - 1].destination()
    }

    /// Convert back to unvalidated legs.
    pub fn to_raw(&self) -> RawJourney {
        self.legs.iter().map(RawLeg::from).collect()
    }

    /// Every contiguous window of legs, as `(start, end)` inclusive indices.
    ///
    /// For a journey of `n` legs this yields exactly `n * (n + 1) / 2`
    /// windows, ordered by start then end. Fare tables are not additive,
    /// so each window is priced on its own.
    pub fn sub_journeys(&self) -> impl Iterator<Item = SubJourney<'_>> + '_ {
        let n = self.legs.len();
        (0..n).flat_map(move |start| {
            (start..n).map(move |end| SubJourney {
                start,
                end,
                origin: self.legs[start].origin(),
                destination: self.legs[end].destination(),
            })
        })
    }
}

/// A contiguous window of a journey's legs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubJourney<'a> {
    /// Index of the first leg in the window.
    pub start: usize,
    /// Index of the last leg in the window (inclusive).
    pub end: usize,
    /// Origin of the first leg.
    pub origin: &'a StationCode,
    /// Destination of the last leg.
    pub destination: &'a StationCode,
}

impl SubJourney<'_> {
    /// True when both window endpoints are on the urban network.
    pub fn is_urban(&self) -> bool {
        self.origin.is_urban() && self.destination.is_urban()
    }

    /// True when the window covers the whole journey.
    pub fn is_whole(&self, journey: &Journey) -> bool {
        self.start == 0 && self.end + 1 == journey.len()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn journey_strategy() -> impl Strategy<Value = Journey> {
        let code = prop_oneof!["940[A-Z]{1,3}", "910[A-Z]{1,3}"];
        prop::collection::vec((code.clone(), code), 1..10).prop_map(|legs| {
            let raw: RawJourney = legs.iter().map(|(o, d)| RawLeg::new(o, d)).collect();
            Journey::parse(&raw).unwrap()
        })
    }

    proptest! {
        #[test]
        fn window_count_is_triangular(journey in journey_strategy()) {
            let n = journey.len();
            prop_assert_eq!(journey.sub_journeys().count(), n * (n + 1) / 2);
        }

        #[test]
        fn windows_are_ordered_and_in_bounds(journey in journey_strategy()) {
            for window in journey.sub_journeys() {
                prop_assert!(window.start <= window.end);
                prop_assert!(window.end < journey.len());
                prop_assert_eq!(window.origin, journey.legs()[window.start].origin());
                prop_assert_eq!(window.destination, journey.legs()[window.end].destination());
            }
        }
    }
}

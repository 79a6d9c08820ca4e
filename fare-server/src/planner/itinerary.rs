//! Itinerary types returned by the journey planner.

use crate::domain::{RawJourney, RawLeg};

/// One leg of a planned itinerary.
///
/// Stop identifiers are empty when the planner gave none (e.g. a street
/// address at either end of a walk).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedLeg {
    pub departure: String,
    pub arrival: String,
}

impl PlannedLeg {
    pub fn new(departure: impl Into<String>, arrival: impl Into<String>) -> Self {
        Self {
            departure: departure.into(),
            arrival: arrival.into(),
        }
    }
}

/// One itinerary option from the planner.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Itinerary {
    pub legs: Vec<PlannedLeg>,
}

impl Itinerary {
    /// The ordered stop-to-stop hops of this itinerary.
    ///
    /// A leg missing either stop identifier is skipped; the rest of the
    /// itinerary is kept.
    pub fn raw_legs(&self) -> RawJourney {
        self.legs
            .iter()
            .filter(|leg| !leg.departure.is_empty() && !leg.arrival.is_empty())
            .map(|leg| RawLeg::new(leg.departure.as_str(), leg.arrival.as_str()))
            .collect()
    }
}

/// Extract leg sequences from itineraries, dropping duplicates and empties.
///
/// Keeps the first occurrence of each distinct leg sequence, in planner
/// order.
pub fn distinct_journeys(itineraries: &[Itinerary]) -> Vec<RawJourney> {
    let mut journeys: Vec<RawJourney> = Vec::new();

    for itinerary in itineraries {
        let legs = itinerary.raw_legs();
        if legs.is_empty() || journeys.contains(&legs) {
            continue;
        }
        journeys.push(legs);
    }

    journeys
}

#[cfg(test)]
mod tests {
    use super::*;

    fn itinerary(legs: &[(&str, &str)]) -> Itinerary {
        Itinerary {
            legs: legs.iter().map(|(f, t)| PlannedLeg::new(*f, *t)).collect(),
        }
    }

    #[test]
    fn raw_legs_pairs_departure_and_arrival() {
        let it = itinerary(&[("940A", "940B"), ("910B", "910C")]);
        assert_eq!(
            it.raw_legs(),
            vec![RawLeg::new("940A", "940B"), RawLeg::new("910B", "910C")]
        );
    }

    #[test]
    fn raw_legs_skips_legs_missing_an_id() {
        // Walk from the street, then a tube leg, then a walk to the street
        let it = itinerary(&[("", "940A"), ("940A", "940B"), ("940B", "")]);
        assert_eq!(it.raw_legs(), vec![RawLeg::new("940A", "940B")]);
    }

    #[test]
    fn raw_legs_keeps_unrecognised_codes() {
        // Network validation happens later, in the combiner
        let it = itinerary(&[("490BUS", "940A")]);
        assert_eq!(it.raw_legs(), vec![RawLeg::new("490BUS", "940A")]);
    }

    #[test]
    fn duplicates_removed_keeping_first() {
        let journeys = distinct_journeys(&[
            itinerary(&[("940A", "940B")]),
            itinerary(&[("940A", "940C")]),
            itinerary(&[("940A", "940B")]),
        ]);
        assert_eq!(
            journeys,
            vec![
                vec![RawLeg::new("940A", "940B")],
                vec![RawLeg::new("940A", "940C")],
            ]
        );
    }

    #[test]
    fn duplicates_compared_after_extraction() {
        // Differ only in a leg that extraction drops
        let journeys = distinct_journeys(&[
            itinerary(&[("", "940A"), ("940A", "940B")]),
            itinerary(&[("940A", "940B"), ("940B", "")]),
        ]);
        assert_eq!(journeys.len(), 1);
    }

    #[test]
    fn empty_itineraries_dropped() {
        let journeys = distinct_journeys(&[
            itinerary(&[]),
            itinerary(&[("", "")]),
            itinerary(&[("910A", "910B")]),
        ]);
        assert_eq!(journeys, vec![vec![RawLeg::new("910A", "910B")]]);
    }
}

//! Leg combination.
//!
//! The urban fare authority prices an unbroken urban trip as one fare, no
//! matter how many interchanges it involves. Before pricing, each run of
//! consecutive purely-urban legs is therefore collapsed into a single leg
//! from the run's first origin to its last destination. Legs that touch
//! the national-rail network pass through unchanged.

use tracing::debug;

use crate::domain::{DomainError, Journey, Leg, RawJourney};

/// Validate and combine a batch of planner journeys.
///
/// A journey is discarded entirely if any of its station codes lacks a
/// recognised network prefix, or if it has no legs. Surviving journeys keep
/// their relative order.
///
/// # Examples
///
/// ```
/// use fare_server::combine::combine;
/// use fare_server::domain::RawLeg;
///
/// let raw = vec![vec![
///     RawLeg::new("940A", "940B"),
///     RawLeg::new("940B", "940C"),
///     RawLeg::new("910X", "910Y"),
/// ]];
///
/// let combined = combine(&raw);
/// let legs: Vec<_> = combined[0]
///     .legs()
///     .iter()
///     .map(|l| (l.origin().as_str(), l.destination().as_str()))
///     .collect();
/// assert_eq!(legs, vec![("940A", "940C"), ("910X", "910Y")]);
/// ```
pub fn combine(journeys: &[RawJourney]) -> Vec<Journey> {
    let combined: Vec<Journey> = journeys
        .iter()
        .filter_map(|raw| match Journey::parse(raw).and_then(combine_journey) {
            Ok(journey) => Some(journey),
            Err(e) => {
                debug!(legs = raw.len(), error = %e, "Discarding journey");
                None
            }
        })
        .collect();

    debug!(
        input = journeys.len(),
        output = combined.len(),
        "Combined journeys"
    );

    combined
}

/// Merge maximal runs of urban legs in one validated journey.
pub fn combine_journey(journey: Journey) -> Result<Journey, DomainError> {
    Journey::new(combine_legs(journey.into_legs()))
}

/// Merge maximal runs of purely-urban legs into single legs.
///
/// Order is preserved, and so are the first origin and last destination.
pub fn combine_legs(legs: Vec<Leg>) -> Vec<Leg> {
    let mut combined = Vec::with_capacity(legs.len());
    let mut run: Option<UrbanRun> = None;

    for leg in legs {
        if leg.is_urban() {
            match run.as_mut() {
                Some(open) => open.extend(leg),
                None => run = Some(UrbanRun::start(leg)),
            }
        } else {
            if let Some(open) = run.take() {
                combined.push(open.into_leg());
            }
            combined.push(leg);
        }
    }

    if let Some(open) = run {
        combined.push(open.into_leg());
    }

    combined
}

/// An open run of consecutive urban legs.
struct UrbanRun {
    first: Leg,
    last: Option<Leg>,
}

impl UrbanRun {
    fn start(leg: Leg) -> Self {
        Self {
            first: leg,
            last: None,
        }
    }

    fn extend(&mut self, leg: Leg) {
        self.last = Some(leg);
    }

    fn into_leg(self) -> Leg {
        match self.last {
            // A single-leg run passes through untouched
            None => self.first,
            Some(last) => Leg::new(self.first.origin().clone(), last.destination().clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RawLeg;

    fn raw(legs: &[(&str, &str)]) -> RawJourney {
        legs.iter().map(|(o, d)| RawLeg::new(*o, *d)).collect()
    }

    fn pairs(journey: &Journey) -> Vec<(&str, &str)> {
        journey
            .legs()
            .iter()
            .map(|l| (l.origin().as_str(), l.destination().as_str()))
            .collect()
    }

    #[test]
    fn urban_run_then_rail() {
        let out = combine(&[raw(&[("940A", "940B"), ("940B", "940C"), ("910X", "910Y")])]);
        assert_eq!(out.len(), 1);
        assert_eq!(pairs(&out[0]), vec![("940A", "940C"), ("910X", "910Y")]);
    }

    #[test]
    fn all_urban_collapses_to_single_leg() {
        let out = combine(&[raw(&[("940A", "940B"), ("940B", "940C")])]);
        assert_eq!(pairs(&out[0]), vec![("940A", "940C")]);
    }

    #[test]
    fn no_urban_legs_pass_through() {
        let legs = raw(&[("910A", "910B"), ("910B", "910C")]);
        let out = combine(std::slice::from_ref(&legs));
        assert_eq!(out[0].to_raw(), legs);
    }

    #[test]
    fn mixed_network_leg_breaks_run() {
        let out = combine(&[raw(&[
            ("940A", "940B"),
            ("940B", "910C"),
            ("910C", "940D"),
            ("940D", "940E"),
            ("940E", "940F"),
        ])]);
        assert_eq!(
            pairs(&out[0]),
            vec![
                ("940A", "940B"),
                ("940B", "910C"),
                ("910C", "940D"),
                ("940D", "940F"),
            ]
        );
    }

    #[test]
    fn runs_either_side_of_rail() {
        let out = combine(&[raw(&[
            ("940A", "940B"),
            ("940B", "940C"),
            ("910C", "910D"),
            ("940D", "940E"),
            ("940E", "940F"),
        ])]);
        assert_eq!(
            pairs(&out[0]),
            vec![("940A", "940C"), ("910C", "910D"), ("940D", "940F")]
        );
    }

    #[test]
    fn implicit_interchange_is_merged_across() {
        // Destination of one leg need not equal origin of the next
        let out = combine(&[raw(&[("940A", "940B"), ("940Z", "940C")])]);
        assert_eq!(pairs(&out[0]), vec![("940A", "940C")]);
    }

    #[test]
    fn invalid_code_discards_whole_journey() {
        let out = combine(&[
            raw(&[("940A", "940B")]),
            raw(&[("940A", "940B"), ("HUBXYZ", "910C")]),
            raw(&[("910A", "910B")]),
        ]);
        assert_eq!(out.len(), 2);
        assert_eq!(pairs(&out[0]), vec![("940A", "940B")]);
        assert_eq!(pairs(&out[1]), vec![("910A", "910B")]);
    }

    #[test]
    fn empty_journey_discarded() {
        assert!(combine(&[vec![]]).is_empty());
    }

    #[test]
    fn empty_input() {
        assert!(combine(&[]).is_empty());
        assert!(combine_legs(vec![]).is_empty());
    }
}

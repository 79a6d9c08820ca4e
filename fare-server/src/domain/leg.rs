//! Journey leg type.
//!
//! A `Leg` is one directly observable hop in an itinerary: the stop where
//! the traveller boards and the stop where they alight. Interchanges
//! between consecutive legs may be implicit, so a leg's destination need
//! not equal the next leg's origin.

use serde::Serialize;

use super::{InvalidStationCode, StationCode};

/// A hop between two network-tagged stops.
///
/// Legs are immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Leg {
    origin: StationCode,
    destination: StationCode,
}

impl Leg {
    /// Construct a leg from two already-validated codes.
    pub fn new(origin: StationCode, destination: StationCode) -> Self {
        Self {
            origin,
            destination,
        }
    }

    /// Parse both endpoints, failing if either has an unrecognised prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// use fare_server::domain::Leg;
    ///
    /// let leg = Leg::parse("940GZZLUBND", "940GZZLUVIC").unwrap();
    /// assert!(leg.is_urban());
    ///
    /// assert!(Leg::parse("940GZZLUBND", "HUBVIC").is_err());
    /// ```
    pub fn parse(origin: &str, destination: &str) -> Result<Self, InvalidStationCode> {
        Ok(Self::new(
            StationCode::parse(origin)?,
            StationCode::parse(destination)?,
        ))
    }

    /// Returns the boarding stop.
    pub fn origin(&self) -> &StationCode {
        &self.origin
    }

    /// Returns the alighting stop.
    pub fn destination(&self) -> &StationCode {
        &self.destination
    }

    /// True when both endpoints are on the urban network.
    ///
    /// Only purely urban legs are merged by the leg combiner and skipped by
    /// national-rail pricing.
    pub fn is_urban(&self) -> bool {
        self.origin.is_urban() && self.destination.is_urban()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_leg() {
        let leg = Leg::parse("940GZZLUBND", "910GGTWK").unwrap();
        assert_eq!(leg.origin().as_str(), "940GZZLUBND");
        assert_eq!(leg.destination().as_str(), "910GGTWK");
    }

    #[test]
    fn parse_rejects_either_endpoint() {
        assert!(Leg::parse("HUBBND", "910GGTWK").is_err());
        assert!(Leg::parse("940GZZLUBND", "").is_err());
    }

    #[test]
    fn urban_only_when_both_ends_urban() {
        assert!(Leg::parse("940A", "940B").unwrap().is_urban());
        assert!(!Leg::parse("940A", "910B").unwrap().is_urban());
        assert!(!Leg::parse("910A", "940B").unwrap().is_urban());
        assert!(!Leg::parse("910A", "910B").unwrap().is_urban());
    }

    #[test]
    fn serializes_endpoints() {
        let leg = Leg::parse("940A", "910B").unwrap();
        assert_eq!(
            serde_json::to_value(&leg).unwrap(),
            serde_json::json!({ "origin": "940A", "destination": "910B" })
        );
    }
}

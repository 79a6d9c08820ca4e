//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Journey, Leg};
use crate::fares::RouteFares;
use crate::pricing::FareEntry;

/// Request for the routes between two stops.
#[derive(Debug, Deserialize)]
pub struct RoutesRequest {
    /// Origin station code (e.g. "940GZZLUBND")
    pub origin: String,

    /// Destination station code
    pub destination: String,
}

/// Request for fares between two stops.
#[derive(Debug, Deserialize)]
pub struct FaresRequest {
    pub origin: String,
    pub destination: String,

    /// Time of travel as HHMM (defaults to now)
    pub time: Option<String>,

    /// Whether the day of travel is a weekday (defaults to today)
    pub weekday: Option<bool>,

    /// Whether the traveller holds a railcard
    #[serde(default)]
    pub railcard: bool,
}

/// One leg of a route.
#[derive(Debug, Serialize)]
pub struct LegResult {
    pub origin: String,
    pub destination: String,

    /// True when both ends are on the urban network
    pub urban: bool,
}

impl LegResult {
    pub fn from_leg(leg: &Leg) -> Self {
        Self {
            origin: leg.origin().to_string(),
            destination: leg.destination().to_string(),
            urban: leg.is_urban(),
        }
    }
}

/// A combined route.
#[derive(Debug, Serialize)]
pub struct JourneyResult {
    pub legs: Vec<LegResult>,
}

impl JourneyResult {
    pub fn from_journey(journey: &Journey) -> Self {
        Self {
            legs: journey.legs().iter().map(LegResult::from_leg).collect(),
        }
    }
}

/// Response listing routes.
#[derive(Debug, Serialize)]
pub struct RoutesResponse {
    pub routes: Vec<JourneyResult>,
}

/// The fare for one window of a route.
#[derive(Debug, Serialize)]
pub struct FareResult {
    /// Index of the first leg in the window
    pub start: usize,

    /// Index of the last leg in the window (inclusive)
    pub end: usize,

    pub origin: String,
    pub destination: String,

    /// Cost in pounds; `None` when no valid fare exists
    pub cost: Option<f64>,
}

impl FareResult {
    pub fn from_entry(start: usize, end: usize, entry: &FareEntry) -> Self {
        Self {
            start,
            end,
            origin: entry.origin.to_string(),
            destination: entry.destination.to_string(),
            cost: entry.cost.is_available().then(|| entry.cost.value()),
        }
    }
}

/// A route with its fare matrix.
#[derive(Debug, Serialize)]
pub struct RouteFaresResult {
    pub journey: JourneyResult,

    /// Best fare for the whole route, urban fares only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whole_journey: Option<FareResult>,

    pub fares: Vec<FareResult>,
}

impl RouteFaresResult {
    pub fn from_route(route: &RouteFares) -> Self {
        let last = route.journey.len() - 1;
        Self {
            journey: JourneyResult::from_journey(&route.journey),
            whole_journey: route
                .fares
                .whole_journey()
                .map(|entry| FareResult::from_entry(0, last, entry)),
            fares: route
                .fares
                .iter()
                .map(|((start, end), entry)| FareResult::from_entry(start, end, entry))
                .collect(),
        }
    }
}

/// Response listing priced routes.
#[derive(Debug, Serialize)]
pub struct FaresResponse {
    /// Time of travel used for peak status, urban fares only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub peak: Option<bool>,

    pub routes: Vec<RouteFaresResult>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Cost, RawLeg, StationCode};
    use crate::pricing::FareMatrix;

    fn journey(legs: &[(&str, &str)]) -> Journey {
        let raw: Vec<_> = legs.iter().map(|(f, t)| RawLeg::new(*f, *t)).collect();
        Journey::parse(&raw).unwrap()
    }

    fn entry(from: &str, to: &str, cost: Cost) -> FareEntry {
        FareEntry::new(
            StationCode::parse(from).unwrap(),
            StationCode::parse(to).unwrap(),
            cost,
        )
    }

    #[test]
    fn journey_result_from_journey() {
        let result = JourneyResult::from_journey(&journey(&[
            ("940GZZLUBND", "940GZZLUVIC"),
            ("910GVICTRIC", "910GGTWK"),
        ]));

        assert_eq!(result.legs.len(), 2);
        assert_eq!(result.legs[0].origin, "940GZZLUBND");
        assert_eq!(result.legs[0].destination, "940GZZLUVIC");
        assert!(result.legs[0].urban);
        assert!(!result.legs[1].urban);
    }

    #[test]
    fn unavailable_cost_is_none() {
        let result = FareResult::from_entry(0, 1, &entry("940A", "910B", Cost::UNAVAILABLE));
        assert_eq!(result.cost, None);

        let result = FareResult::from_entry(0, 0, &entry("940A", "940B", Cost::new(2.8)));
        assert_eq!(result.cost, Some(2.8));
    }

    #[test]
    fn route_fares_result_from_route() {
        let mut fares = FareMatrix::new();
        fares.insert(0, 0, entry("940A", "940B", Cost::new(2.8)));
        fares.insert(0, 1, entry("940A", "910C", Cost::UNAVAILABLE));
        fares.insert(1, 1, entry("910B", "910C", Cost::new(5.0)));
        fares.set_whole_journey(entry("940A", "910C", Cost::new(7.1)));
        let route = RouteFares {
            journey: journey(&[("940A", "940B"), ("910B", "910C")]),
            fares,
        };

        let result = RouteFaresResult::from_route(&route);

        let whole = result.whole_journey.as_ref().unwrap();
        assert_eq!((whole.start, whole.end), (0, 1));
        assert_eq!(whole.cost, Some(7.1));
        let windows: Vec<_> = result.fares.iter().map(|f| (f.start, f.end)).collect();
        assert_eq!(windows, vec![(0, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn serialised_shape() {
        let mut fares = FareMatrix::new();
        fares.insert(0, 0, entry("910A", "910B", Cost::UNAVAILABLE));
        let response = FaresResponse {
            time: None,
            peak: None,
            routes: vec![RouteFaresResult::from_route(&RouteFares {
                journey: journey(&[("910A", "910B")]),
                fares,
            })],
        };

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("time").is_none());
        let route = &json["routes"][0];
        assert!(route.get("whole_journey").is_none());
        assert_eq!(route["fares"][0]["origin"], "910A");
        assert!(route["fares"][0]["cost"].is_null());
    }
}

//! Route finding.
//!
//! Asks the journey planner for itineraries, reduces each to its leg
//! sequence, drops duplicates and empties, and combines urban runs.

use tracing::debug;

use crate::combine::combine;
use crate::domain::{Journey, StationCode};
use crate::lookup::{JourneyPlanner, LookupError, PlannerQuery};

use super::config::RouteConfig;
use super::itinerary::distinct_journeys;

/// Error from route finding.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    /// The journey planner could not be queried
    #[error("journey planner lookup from {origin} to {destination} failed: {source}")]
    Planner {
        origin: StationCode,
        destination: StationCode,
        #[source]
        source: LookupError,
    },
}

/// Finds candidate journeys between two stops.
pub struct RouteFinder<'a, P: JourneyPlanner> {
    planner: &'a P,
    config: &'a RouteConfig,
}

impl<'a, P: JourneyPlanner> RouteFinder<'a, P> {
    /// Create a new route finder.
    pub fn new(planner: &'a P, config: &'a RouteConfig) -> Self {
        Self { planner, config }
    }

    /// Find combined journeys from `origin` to `destination`.
    ///
    /// Journeys come back in planner order. Itineraries with unrecognised
    /// station codes are silently dropped; planner failures are returned.
    pub async fn find_routes(
        &self,
        origin: &StationCode,
        destination: &StationCode,
    ) -> Result<Vec<Journey>, RouteError> {
        let query = PlannerQuery {
            origin,
            destination,
            time: self.config.departure_time,
            modes: &self.config.modes,
        };

        let itineraries =
            self.planner
                .itineraries(&query)
                .await
                .map_err(|source| RouteError::Planner {
                    origin: origin.clone(),
                    destination: destination.clone(),
                    source,
                })?;

        let raw = distinct_journeys(&itineraries);
        let journeys = combine(&raw);

        debug!(
            origin = %origin,
            destination = %destination,
            itineraries = itineraries.len(),
            distinct = raw.len(),
            journeys = journeys.len(),
            "Found routes"
        );

        Ok(journeys)
    }
}

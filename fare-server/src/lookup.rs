//! Collaborator traits for the external services the engine depends on.
//!
//! The journey planner, both fare authorities and the station-name service
//! are injected through these traits, so the combiner and pricers can be
//! driven by in-memory doubles in tests. Lookups return `Send` futures so
//! the engine can run inside spawned tasks and axum handlers.

use chrono::NaiveDate;

use crate::domain::{Fare, FareCandidate, StationCode, TimeOfDay};
use crate::planner::Itinerary;
use crate::rail::RailFareError;
use crate::tfl::TflError;

/// Failure reaching an external service.
///
/// These are never absorbed by the engine: they abort the request that
/// triggered them.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// Journey planner, stop point or urban fare API failure
    #[error(transparent)]
    Tfl(#[from] TflError),

    /// National-rail fare service failure
    #[error(transparent)]
    Rail(#[from] RailFareError),

    /// Any other service failure
    #[error("service unavailable: {0}")]
    Unavailable(String),
}

/// Parameters for a journey planner lookup.
#[derive(Debug, Clone)]
pub struct PlannerQuery<'a> {
    pub origin: &'a StationCode,
    pub destination: &'a StationCode,
    /// Reference departure time.
    pub time: TimeOfDay,
    /// Allowed transport modes, e.g. `tube`, `national-rail`.
    pub modes: &'a [String],
}

/// Source of candidate itineraries between two stops.
pub trait JourneyPlanner {
    /// All itinerary options the planner returns, in its order.
    fn itineraries(
        &self,
        query: &PlannerQuery<'_>,
    ) -> impl Future<Output = Result<Vec<Itinerary>, LookupError>> + Send;
}

/// The urban-transit fare table.
pub trait UrbanFareAuthority {
    /// Every fare candidate for travelling from `origin` to `destination`.
    fn find_fares(
        &self,
        origin: &StationCode,
        destination: &StationCode,
        discount_card: bool,
    ) -> impl Future<Output = Result<Vec<FareCandidate>, LookupError>> + Send;
}

/// Parameters for a national-rail fare lookup.
///
/// Station names are already resolved and URL-encoded.
#[derive(Debug, Clone)]
pub struct RailFareQuery<'a> {
    pub origin: &'a str,
    pub destination: &'a str,
    pub time: TimeOfDay,
    pub date: NaiveDate,
    pub railcard: bool,
}

/// The national-rail fare table.
pub trait RailFareAuthority {
    /// The one definitive fare for the query.
    fn fare(
        &self,
        query: &RailFareQuery<'_>,
    ) -> impl Future<Output = Result<Fare, LookupError>> + Send;
}

/// Maps a station code to its display name.
pub trait StationNameResolver {
    /// The unmodified display name, e.g. `"Bond Street Underground Station"`.
    fn common_name(
        &self,
        code: &StationCode,
    ) -> impl Future<Output = Result<String, LookupError>> + Send;
}

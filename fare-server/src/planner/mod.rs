//! Route finding over the external journey planner.
//!
//! The planner returns itinerary options; this module reduces them to
//! distinct leg sequences and hands them to the leg combiner.

mod config;
mod finder;
mod itinerary;

pub use config::{DEFAULT_MODES, RouteConfig};
pub use finder::{RouteError, RouteFinder};
pub use itinerary::{Itinerary, PlannedLeg, distinct_journeys};

//! Domain types for the fare engine.
//!
//! This module contains the core domain model types: network-tagged
//! station codes, legs, journeys, times of day and fares. All types
//! enforce their invariants at construction time, so code that receives
//! these types can trust their validity.

mod error;
mod fare;
mod journey;
mod leg;
mod station;
mod time;

pub use error::DomainError;
pub use fare::{Cost, Fare, FareCandidate};
pub use journey::{Journey, RawJourney, RawLeg, SubJourney};
pub use leg::Leg;
pub use station::{InvalidStationCode, NATIONAL_RAIL_PREFIX, Network, StationCode, URBAN_PREFIX};
pub use time::{EVENING_PEAK, MORNING_PEAK, TimeError, TimeOfDay, is_peak};

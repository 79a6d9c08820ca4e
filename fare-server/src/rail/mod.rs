//! National-rail fare service client.
//!
//! Prices journeys between national-rail stations by name. Names must
//! already be in the form the service recognises; see
//! [`crate::stations::rail_station_name`].

mod client;
mod error;

pub use client::{FareDto, RailFareClient, RailFareConfig};
pub use error::RailFareError;

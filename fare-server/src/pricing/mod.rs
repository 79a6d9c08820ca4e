//! Fare partition pricing.
//!
//! Fare tables are not additive, so a journey is priced window by window:
//! every contiguous run of legs `start..=end` is looked up on its own.
//! The resulting [`FareMatrix`] lets a caller compare buying one ticket
//! for the whole trip against splitting it.

mod config;
mod error;
mod matrix;
mod rail;
mod urban;

pub use config::{PricingConfig, RailEvaluation};
pub use error::PricingError;
pub use matrix::{FareEntry, FareMatrix};
pub use rail::RailPricer;
pub use urban::{UrbanFareRequest, UrbanPricer, cheapest_fare, select_fare};

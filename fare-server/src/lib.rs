//! Multi-leg journey fare server.
//!
//! A web application that answers: "what does each part of this trip
//! across London cost, on the urban network and on national rail?"
//! Routes come from the journey planner, consecutive urban legs are
//! merged, and every contiguous window of legs is priced.

pub mod combine;
pub mod domain;
pub mod fares;
pub mod lookup;
pub mod planner;
pub mod pricing;
pub mod rail;
pub mod stations;
pub mod tfl;
pub mod web;

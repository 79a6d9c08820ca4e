//! Route search configuration.

use crate::domain::TimeOfDay;

/// Modes requested from the journey planner by default.
pub const DEFAULT_MODES: [&str; 5] = [
    "tube",
    "dlr",
    "overground",
    "elizabeth-line",
    "national-rail",
];

/// Configuration parameters for route finding.
#[derive(Debug, Clone)]
pub struct RouteConfig {
    /// Fixed reference departure time for planner queries.
    pub departure_time: TimeOfDay,

    /// Allowed transport modes.
    pub modes: Vec<String>,
}

impl RouteConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(departure_time: TimeOfDay, modes: Vec<String>) -> Self {
        Self {
            departure_time,
            modes,
        }
    }
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            departure_time: TimeOfDay::hm(9, 0),
            modes: DEFAULT_MODES.iter().map(|m| m.to_string()).collect(),
        }
    }
}

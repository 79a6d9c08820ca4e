//! Pricing error types.

use crate::domain::StationCode;
use crate::lookup::LookupError;

/// Error from fare pricing.
///
/// Every variant is an upstream failure. Missing fares are not errors:
/// they are recorded in the matrix as unavailable or absent.
#[derive(Debug, thiserror::Error)]
pub enum PricingError {
    /// The urban fare authority could not be queried
    #[error("urban fare lookup from {origin} to {destination} failed: {source}")]
    UrbanFare {
        origin: StationCode,
        destination: StationCode,
        #[source]
        source: LookupError,
    },

    /// The national-rail fare authority could not be queried
    #[error("national-rail fare lookup from {origin} to {destination} failed: {source}")]
    RailFare {
        origin: StationCode,
        destination: StationCode,
        #[source]
        source: LookupError,
    },

    /// A station name could not be resolved
    #[error("station name lookup for {code} failed: {source}")]
    NameResolution {
        code: StationCode,
        #[source]
        source: LookupError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = PricingError::NameResolution {
            code: StationCode::parse("940GZZLUBND").unwrap(),
            source: LookupError::Unavailable("timeout".into()),
        };
        assert_eq!(
            err.to_string(),
            "station name lookup for 940GZZLUBND failed: service unavailable: timeout"
        );
    }

    #[test]
    fn source_is_preserved() {
        use std::error::Error;

        let err = PricingError::UrbanFare {
            origin: StationCode::parse("940A").unwrap(),
            destination: StationCode::parse("940B").unwrap(),
            source: LookupError::Unavailable("down".into()),
        };
        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "service unavailable: down");
    }
}

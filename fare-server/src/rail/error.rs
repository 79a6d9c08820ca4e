//! National-rail fare service error types.

/// Errors that can occur when interacting with the national-rail fare service.
#[derive(Debug, thiserror::Error)]
pub enum RailFareError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Service returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// No fare exists between the two stations
    #[error("no fare from {origin} to {destination}")]
    NoFare { origin: String, destination: String },
}

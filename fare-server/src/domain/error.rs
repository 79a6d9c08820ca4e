//! Domain error types.
//!
//! These errors represent validation failures in the domain layer.
//! They are distinct from upstream API/IO errors.

use super::InvalidStationCode;

/// Domain-level errors for validation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    /// A station code has no recognised network prefix
    #[error(transparent)]
    InvalidStation(#[from] InvalidStationCode),

    /// Journey has no legs
    #[error("journey must have at least one leg")]
    EmptyJourney,
}

//! Web layer for the fare server.
//!
//! Provides JSON endpoints for listing routes and pricing them.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::{AppState, LiveFareService, RoutePlanner};

//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::{Datelike, Local, Weekday};
use tracing::warn;

use crate::domain::{StationCode, TimeOfDay};
use crate::fares::FareError;
use crate::lookup::LookupError;
use crate::planner::RouteError;
use crate::pricing::{PricingError, UrbanFareRequest};
use crate::tfl::TflError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/routes", get(find_routes))
        .route("/fares/urban", get(urban_fares))
        .route("/fares/rail", get(rail_fares))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List the combined routes between two stops.
async fn find_routes(
    State(state): State<AppState>,
    Query(req): Query<RoutesRequest>,
) -> Result<Json<RoutesResponse>, AppError> {
    let origin = parse_station("origin", &req.origin)?;
    let destination = parse_station("destination", &req.destination)?;

    let journeys = state
        .fare_service()
        .routes(&origin, &destination)
        .await?;

    Ok(Json(RoutesResponse {
        routes: journeys.iter().map(JourneyResult::from_journey).collect(),
    }))
}

/// Price every route against the urban fare table.
async fn urban_fares(
    State(state): State<AppState>,
    Query(req): Query<FaresRequest>,
) -> Result<Json<FaresResponse>, AppError> {
    let origin = parse_station("origin", &req.origin)?;
    let destination = parse_station("destination", &req.destination)?;

    let now = Local::now();
    let time = match &req.time {
        Some(time) => TimeOfDay::parse(time).map_err(|e| AppError::BadRequest {
            message: format!("Invalid time {time:?}: {e}"),
        })?,
        None => TimeOfDay::from_naive_time(now.time()),
    };
    let weekday = req.weekday.unwrap_or_else(|| is_weekday(now.weekday()));
    let request = UrbanFareRequest::new(time, weekday, req.railcard);

    let routes = state
        .fare_service()
        .urban_fares(&origin, &destination, &request)
        .await?;

    Ok(Json(FaresResponse {
        time: Some(time.to_string()),
        peak: Some(request.is_peak()),
        routes: routes.iter().map(RouteFaresResult::from_route).collect(),
    }))
}

/// Price every route against the national-rail fare service.
///
/// Rail fares are evaluated at fixed parameters, so the time, weekday
/// and railcard query parameters are accepted but not used.
async fn rail_fares(
    State(state): State<AppState>,
    Query(req): Query<FaresRequest>,
) -> Result<Json<FaresResponse>, AppError> {
    let origin = parse_station("origin", &req.origin)?;
    let destination = parse_station("destination", &req.destination)?;

    let routes = state
        .fare_service()
        .rail_fares(&origin, &destination)
        .await?;

    Ok(Json(FaresResponse {
        time: None,
        peak: None,
        routes: routes.iter().map(RouteFaresResult::from_route).collect(),
    }))
}

fn parse_station(field: &str, value: &str) -> Result<StationCode, AppError> {
    StationCode::parse(value).map_err(|e| AppError::BadRequest {
        message: format!("Invalid {field}: {e}"),
    })
}

fn is_weekday(day: Weekday) -> bool {
    !matches!(day, Weekday::Sat | Weekday::Sun)
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    BadGateway { message: String },
    Internal { message: String },
}

impl AppError {
    /// Map an upstream failure, keeping the full error chain in the message.
    fn upstream(source: &LookupError, message: String) -> Self {
        match source {
            // Our API key was refused: a server configuration problem
            LookupError::Tfl(TflError::Unauthorized) => AppError::Internal { message },
            _ => AppError::BadGateway { message },
        }
    }
}

impl From<RouteError> for AppError {
    fn from(e: RouteError) -> Self {
        let message = e.to_string();
        match &e {
            RouteError::Planner { source, .. } => AppError::upstream(source, message),
        }
    }
}

impl From<PricingError> for AppError {
    fn from(e: PricingError) -> Self {
        let message = e.to_string();
        match &e {
            PricingError::UrbanFare { source, .. }
            | PricingError::RailFare { source, .. }
            | PricingError::NameResolution { source, .. } => AppError::upstream(source, message),
        }
    }
}

impl From<FareError> for AppError {
    fn from(e: FareError) -> Self {
        match e {
            FareError::Route(e) => e.into(),
            FareError::Pricing(e) => e.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::BadGateway { message } => (StatusCode::BAD_GATEWAY, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(status = %status, error = %message, "Request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

//! TfL Unified API client.
//!
//! This module provides an HTTP client for the Transport for London API,
//! which backs three of the engine's collaborators:
//! - the journey planner (`Journey/JourneyResults`)
//! - stop point name lookup (`StopPoint/{id}`)
//! - the urban single fare finder (`StopPoint/{from}/FareTo/{to}`)
//!
//! Stop identifiers are NaPTAN codes: `940G...` for Underground, DLR and
//! other urban stops, `910G...` for national-rail stations.

mod client;
mod convert;
mod error;
mod mock;
mod types;

pub use client::{TflClient, TflConfig};
pub use convert::{convert_fares, convert_journey_results};
pub use error::TflError;
pub use mock::MockJourneyPlanner;
pub use types::{
    FareRowDto, FaresSectionDto, JourneyDto, JourneyResultsDto, LegDto, PointDto,
    StopPointDto, TicketDto, TicketTimeDto, TicketTypeDto,
};

//! TfL Unified API response DTOs.
//!
//! These types map directly to the JSON the API returns. They use
//! `Option` and `#[serde(default)]` liberally because TfL omits fields
//! rather than sending null values in many cases. Only the fields the
//! engine reads are declared; serde ignores the rest.

use serde::Deserialize;

/// Response from `Journey/JourneyResults/{from}/to/{to}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyResultsDto {
    /// Itinerary options, best first.
    #[serde(default)]
    pub journeys: Vec<JourneyDto>,
}

/// One itinerary option.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyDto {
    /// Legs in travel order.
    #[serde(default)]
    pub legs: Vec<LegDto>,
}

/// One leg of an itinerary.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegDto {
    /// Where the leg starts.
    pub departure_point: Option<PointDto>,

    /// Where the leg ends.
    pub arrival_point: Option<PointDto>,
}

/// A stop point reference inside a leg.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointDto {
    /// NaPTAN stop identifier, e.g. `940GZZLUBND`. Absent for street points.
    pub naptan_id: Option<String>,
}

/// Response from `StopPoint/{id}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopPointDto {
    /// Display name, e.g. `Bond Street Underground Station`.
    pub common_name: String,
}

/// One section of a `StopPoint/{from}/FareTo/{to}` response.
///
/// The response is an array of sections. The first is normally the
/// standard route; later ones are flagged as alternatives (e.g. avoiding
/// zone 1).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaresSectionDto {
    /// Whether every fare in this section is for an alternative route.
    #[serde(default)]
    pub is_alternative: bool,

    /// Fare rows (one per route description).
    #[serde(default)]
    pub rows: Vec<FareRowDto>,
}

/// A row of tickets for one route.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FareRowDto {
    /// Tickets on offer.
    #[serde(default)]
    pub tickets_available: Vec<TicketDto>,
}

/// A single ticket.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketDto {
    /// Price in pounds, as a decimal string like `"2.80"`.
    pub cost: String,

    /// Peak / off-peak.
    pub ticket_time: Option<TicketTimeDto>,

    /// Pay as you go, paper single, ...
    pub ticket_type: Option<TicketTypeDto>,
}

/// When a ticket is valid.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketTimeDto {
    /// `Peak`, `Off Peak` or `Anytime`.
    #[serde(rename = "type")]
    pub kind: String,
}

/// What sort of ticket this is.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketTypeDto {
    /// e.g. `Pay as you go`.
    #[serde(rename = "type")]
    pub kind: String,
}

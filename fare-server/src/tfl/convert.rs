//! Conversion from TfL DTOs to engine types.

use crate::domain::FareCandidate;
use crate::planner::{Itinerary, PlannedLeg};

use super::error::TflError;
use super::types::{FaresSectionDto, JourneyResultsDto, PointDto, TicketDto};

/// Ticket time type for peak-only fares.
const PEAK: &str = "Peak";

/// Ticket time type for fares valid at any time of day.
const ANYTIME: &str = "Anytime";

/// Ticket type eligible for the railcard discount.
const PAY_AS_YOU_GO: &str = "Pay as you go";

/// Convert a journey planner response to itineraries.
///
/// Stop points without a NaPTAN identifier (street addresses, walking
/// waypoints) get an empty id, which itinerary extraction skips.
pub fn convert_journey_results(results: &JourneyResultsDto) -> Vec<Itinerary> {
    results
        .journeys
        .iter()
        .map(|journey| Itinerary {
            legs: journey
                .legs
                .iter()
                .map(|leg| {
                    PlannedLeg::new(
                        naptan_id(leg.departure_point.as_ref()),
                        naptan_id(leg.arrival_point.as_ref()),
                    )
                })
                .collect(),
        })
        .collect()
}

fn naptan_id(point: Option<&PointDto>) -> String {
    point
        .and_then(|p| p.naptan_id.clone())
        .unwrap_or_default()
}

/// Flatten a `FareTo` response into fare candidates.
///
/// Every ticket in every section becomes one candidate, flagged
/// alternative if its section is. `Anytime` tickets are valid both in and
/// out of peak, so they yield one candidate of each kind.
///
/// With a discount card, off-peak pay-as-you-go fares are reduced by a
/// third, rounded to the nearest penny.
pub fn convert_fares(
    sections: &[FaresSectionDto],
    discount_card: bool,
) -> Result<Vec<FareCandidate>, TflError> {
    let mut candidates = Vec::new();

    for section in sections {
        for row in &section.rows {
            for ticket in &row.tickets_available {
                let pence = parse_pence(&ticket.cost)?;
                let kind = ticket.ticket_time.as_ref().map(|t| t.kind.as_str());

                let peak_options: &[bool] = match kind {
                    Some(PEAK) => &[true],
                    Some(ANYTIME) => &[true, false],
                    _ => &[false],
                };

                for &is_peak in peak_options {
                    let pence = if discount_card && !is_peak && is_pay_as_you_go(ticket) {
                        apply_railcard_discount(pence)
                    } else {
                        pence
                    };
                    candidates.push(FareCandidate::new(
                        pence as f64 / 100.0,
                        is_peak,
                        section.is_alternative,
                    ));
                }
            }
        }
    }

    Ok(candidates)
}

fn is_pay_as_you_go(ticket: &TicketDto) -> bool {
    ticket
        .ticket_type
        .as_ref()
        .is_some_and(|t| t.kind == PAY_AS_YOU_GO)
}

/// Two thirds of the fare, to the nearest penny.
fn apply_railcard_discount(pence: u32) -> u32 {
    (pence * 2 + 1) / 3
}

/// Parse a decimal pounds string like `"2.80"` into pence.
fn parse_pence(cost: &str) -> Result<u32, TflError> {
    let invalid = || TflError::Json {
        message: format!("invalid fare cost {cost:?}"),
        body: None,
    };

    let pounds: f64 = cost.trim().parse().map_err(|_| invalid())?;
    if !pounds.is_finite() || pounds < 0.0 {
        return Err(invalid());
    }
    Ok((pounds * 100.0).round() as u32)
}

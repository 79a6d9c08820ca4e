//! National-rail fare pricing.
//!
//! Windows whose endpoints are both urban stops are not national-rail
//! journeys and are left out of the matrix. Every other window is priced
//! by station name, at the fixed evaluation time and date.

use futures::future::try_join_all;
use tracing::debug;

use crate::domain::{Cost, Journey, StationCode, SubJourney};
use crate::lookup::{LookupError, RailFareAuthority, RailFareQuery, StationNameResolver};
use crate::rail::RailFareError;
use crate::stations::rail_station_name;

use super::config::PricingConfig;
use super::error::PricingError;
use super::matrix::{FareEntry, FareMatrix};

/// Prices journeys against a national-rail fare authority.
pub struct RailPricer<'a, A, N>
where
    A: RailFareAuthority,
    N: StationNameResolver,
{
    authority: &'a A,
    names: &'a N,
    config: &'a PricingConfig,
}

impl<'a, A, N> RailPricer<'a, A, N>
where
    A: RailFareAuthority,
    N: StationNameResolver,
{
    pub fn new(authority: &'a A, names: &'a N, config: &'a PricingConfig) -> Self {
        Self {
            authority,
            names,
            config,
        }
    }

    /// Build the national-rail fare matrix for a combined journey.
    ///
    /// Costs are recorded exactly as the authority returns them. A window
    /// the authority has no fare for is recorded as `Cost::UNAVAILABLE`;
    /// any other failure aborts the request. The whole-journey entry is
    /// never set.
    pub async fn price(&self, journey: &Journey) -> Result<FareMatrix, PricingError> {
        let mut matrix = FareMatrix::new();

        let windows: Vec<_> = journey
            .sub_journeys()
            .filter(|window| !window.is_urban())
            .collect();
        let skipped = journey.sub_journeys().count() - windows.len();

        for batch in windows.chunks(self.config.effective_batch_size()) {
            let futures = batch.iter().map(|window| async move {
                let cost = self.window_fare(window).await?;
                Ok::<_, PricingError>((window, cost))
            });

            for (window, cost) in try_join_all(futures).await? {
                matrix.insert(
                    window.start,
                    window.end,
                    FareEntry::new(window.origin.clone(), window.destination.clone(), cost),
                );
            }
        }

        debug!(
            origin = %journey.origin(),
            destination = %journey.destination(),
            legs = journey.len(),
            priced = matrix.len(),
            skipped,
            "Priced national-rail fares"
        );

        Ok(matrix)
    }

    async fn window_fare(&self, window: &SubJourney<'_>) -> Result<Cost, PricingError> {
        let origin = self.rail_name(window.origin).await?;
        let destination = self.rail_name(window.destination).await?;

        let evaluation = &self.config.rail;
        let query = RailFareQuery {
            origin: &origin,
            destination: &destination,
            time: evaluation.time,
            date: evaluation.date,
            railcard: evaluation.railcard,
        };

        match self.authority.fare(&query).await {
            Ok(fare) => Ok(fare.cost),
            // No fare between these stations: a gap in the table, not an outage
            Err(LookupError::Rail(RailFareError::NoFare { .. })) => {
                debug!(
                    origin = %window.origin,
                    destination = %window.destination,
                    "No national-rail fare"
                );
                Ok(Cost::UNAVAILABLE)
            }
            Err(source) => Err(PricingError::RailFare {
                origin: window.origin.clone(),
                destination: window.destination.clone(),
                source,
            }),
        }
    }

    async fn rail_name(&self, code: &StationCode) -> Result<String, PricingError> {
        let name = self
            .names
            .common_name(code)
            .await
            .map_err(|source| PricingError::NameResolution {
                code: code.clone(),
                source,
            })?;
        Ok(rail_station_name(&name))
    }
}

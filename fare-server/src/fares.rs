//! Per-route fare lookup.
//!
//! Finds the combined journeys between two stops and prices each one,
//! returning one fare matrix per route in planner order.

use tracing::info;

use crate::domain::{Journey, StationCode};
use crate::lookup::{JourneyPlanner, RailFareAuthority, StationNameResolver, UrbanFareAuthority};
use crate::planner::{RouteConfig, RouteError, RouteFinder};
use crate::pricing::{
    FareMatrix, PricingConfig, PricingError, RailPricer, UrbanFareRequest, UrbanPricer,
};

/// Error from per-route fare lookup.
#[derive(Debug, thiserror::Error)]
pub enum FareError {
    #[error(transparent)]
    Route(#[from] RouteError),

    #[error(transparent)]
    Pricing(#[from] PricingError),
}

/// A route and its fare matrix.
#[derive(Debug, Clone)]
pub struct RouteFares {
    pub journey: Journey,
    pub fares: FareMatrix,
}

/// The external services a fare lookup needs.
pub struct FareService<'a, P, U, R, N> {
    planner: &'a P,
    urban: &'a U,
    rail: &'a R,
    names: &'a N,
    routes: &'a RouteConfig,
    pricing: &'a PricingConfig,
}

impl<'a, P, U, R, N> FareService<'a, P, U, R, N>
where
    P: JourneyPlanner,
    U: UrbanFareAuthority,
    R: RailFareAuthority,
    N: StationNameResolver,
{
    pub fn new(
        planner: &'a P,
        urban: &'a U,
        rail: &'a R,
        names: &'a N,
        routes: &'a RouteConfig,
        pricing: &'a PricingConfig,
    ) -> Self {
        Self {
            planner,
            urban,
            rail,
            names,
            routes,
            pricing,
        }
    }

    /// Combined journeys from `origin` to `destination`.
    pub async fn routes(
        &self,
        origin: &StationCode,
        destination: &StationCode,
    ) -> Result<Vec<Journey>, RouteError> {
        RouteFinder::new(self.planner, self.routes)
            .find_routes(origin, destination)
            .await
    }

    /// Urban fare matrices for every route.
    pub async fn urban_fares(
        &self,
        origin: &StationCode,
        destination: &StationCode,
        request: &UrbanFareRequest,
    ) -> Result<Vec<RouteFares>, FareError> {
        let pricer = UrbanPricer::new(self.urban, self.pricing);
        let journeys = self.routes(origin, destination).await?;

        let mut priced = Vec::with_capacity(journeys.len());
        for journey in journeys {
            let fares = pricer.price(&journey, request).await?;
            priced.push(RouteFares { journey, fares });
        }

        info!(
            origin = %origin,
            destination = %destination,
            time = %request.time,
            peak = request.is_peak(),
            routes = priced.len(),
            "Urban fares priced"
        );

        Ok(priced)
    }

    /// National-rail fare matrices for every route.
    pub async fn rail_fares(
        &self,
        origin: &StationCode,
        destination: &StationCode,
    ) -> Result<Vec<RouteFares>, FareError> {
        let pricer = RailPricer::new(self.rail, self.names, self.pricing);
        let journeys = self.routes(origin, destination).await?;

        let mut priced = Vec::with_capacity(journeys.len());
        for journey in journeys {
            let fares = pricer.price(&journey).await?;
            priced.push(RouteFares { journey, fares });
        }

        info!(
            origin = %origin,
            destination = %destination,
            routes = priced.len(),
            "National-rail fares priced"
        );

        Ok(priced)
    }
}

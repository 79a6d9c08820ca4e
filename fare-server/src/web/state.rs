//! Application state for the web layer.

use std::sync::Arc;

use crate::fares::FareService;
use crate::lookup::{JourneyPlanner, LookupError, PlannerQuery};
use crate::planner::{Itinerary, RouteConfig};
use crate::pricing::PricingConfig;
use crate::rail::RailFareClient;
use crate::stations::{CachedNameResolver, NameCacheConfig};
use crate::tfl::{MockJourneyPlanner, TflClient};

/// Where routes come from.
#[derive(Debug, Clone)]
pub enum RoutePlanner {
    /// The live TfL journey planner
    Tfl(TflClient),

    /// Saved planner responses, for running offline
    Mock(MockJourneyPlanner),
}

impl JourneyPlanner for RoutePlanner {
    async fn itineraries(&self, query: &PlannerQuery<'_>) -> Result<Vec<Itinerary>, LookupError> {
        match self {
            RoutePlanner::Tfl(client) => client.itineraries(query).await,
            RoutePlanner::Mock(mock) => mock.itineraries(query).await,
        }
    }
}

/// The fare service as wired up against the server's clients.
pub type LiveFareService<'a> =
    FareService<'a, RoutePlanner, TflClient, RailFareClient, CachedNameResolver<TflClient>>;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Journey planner
    pub planner: Arc<RoutePlanner>,

    /// TfL client: urban fares
    pub tfl: Arc<TflClient>,

    /// National-rail fare service client
    pub rail: Arc<RailFareClient>,

    /// Station name lookups, cached
    pub names: Arc<CachedNameResolver<TflClient>>,

    /// Route finding configuration
    pub routes: Arc<RouteConfig>,

    /// Fare pricing configuration
    pub pricing: Arc<PricingConfig>,
}

impl AppState {
    /// Create a new app state.
    ///
    /// Name lookups share the TfL client's connection pool and rate limit.
    pub fn new(
        planner: RoutePlanner,
        tfl: TflClient,
        rail: RailFareClient,
        routes: RouteConfig,
        pricing: PricingConfig,
        name_cache: &NameCacheConfig,
    ) -> Self {
        let names = CachedNameResolver::new(tfl.clone(), name_cache);
        Self {
            planner: Arc::new(planner),
            tfl: Arc::new(tfl),
            rail: Arc::new(rail),
            names: Arc::new(names),
            routes: Arc::new(routes),
            pricing: Arc::new(pricing),
        }
    }

    /// A fare service borrowing this state's clients.
    pub fn fare_service(&self) -> LiveFareService<'_> {
        FareService::new(
            self.planner.as_ref(),
            self.tfl.as_ref(),
            self.rail.as_ref(),
            self.names.as_ref(),
            self.routes.as_ref(),
            self.pricing.as_ref(),
        )
    }
}

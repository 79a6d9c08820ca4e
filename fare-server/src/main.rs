use std::net::SocketAddr;

use tracing::{info, level_filters::LevelFilter, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use fare_server::planner::RouteConfig;
use fare_server::pricing::PricingConfig;
use fare_server::rail::{RailFareClient, RailFareConfig};
use fare_server::stations::NameCacheConfig;
use fare_server::tfl::{MockJourneyPlanner, TflClient, TflConfig};
use fare_server::web::{AppState, RoutePlanner, create_router};

const DEFAULT_ADDR: &str = "127.0.0.1:3000";

fn init_logger() {
    let default_level = LevelFilter::INFO;
    let rust_log =
        std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_else(|_| default_level.to_string());
    let env_filter = EnvFilter::try_new(rust_log).unwrap_or_else(|err| {
        eprintln!(
            "invalid {}, falling back to level '{}' - {}",
            EnvFilter::DEFAULT_ENV,
            default_level,
            err,
        );
        EnvFilter::new(default_level.to_string())
    });
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(env_filter)
        .init();
}

#[tokio::main]
async fn main() {
    init_logger();

    // Get configuration from environment
    let app_key = std::env::var("TFL_APP_KEY").ok();
    if app_key.is_none() {
        warn!("TFL_APP_KEY not set. TfL requests will be rate limited.");
    }
    let rail_config = match std::env::var("RAIL_FARES_URL") {
        Ok(url) => RailFareConfig::new(url),
        Err(_) => RailFareConfig::default(),
    };
    let addr: SocketAddr = std::env::var("FARE_SERVER_ADDR")
        .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
        .parse()
        .expect("FARE_SERVER_ADDR must be a socket address");

    let tfl = TflClient::new(TflConfig::new(app_key)).expect("Failed to create TfL client");
    let rail = RailFareClient::new(rail_config).expect("Failed to create rail fare client");

    // Serve routes from saved planner responses when a fixture directory is given
    let planner = match std::env::var("TFL_MOCK_DIR") {
        Ok(dir) => {
            let mock = MockJourneyPlanner::new(&dir).expect("Failed to load mock journeys");
            info!(dir = %dir, routes = mock.available_routes().len(), "Using mock journey planner");
            RoutePlanner::Mock(mock)
        }
        Err(_) => RoutePlanner::Tfl(tfl.clone()),
    };

    let state = AppState::new(
        planner,
        tfl,
        rail,
        RouteConfig::default(),
        PricingConfig::default(),
        &NameCacheConfig::default(),
    );
    let app = create_router(state);

    info!(%addr, "Fare server listening");
    info!("  GET /health       - Health check");
    info!("  GET /routes       - Combined routes between two stops");
    info!("  GET /fares/urban  - Urban fare matrix per route");
    info!("  GET /fares/rail   - National-rail fare matrix per route");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}

//! TfL Unified API HTTP client.
//!
//! Provides the journey planner, stop point name lookup and urban fare
//! table behind the engine's collaborator traits.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tokio::sync::Semaphore;
use tracing::debug;

use crate::domain::{FareCandidate, StationCode};
use crate::lookup::{
    JourneyPlanner, LookupError, PlannerQuery, StationNameResolver, UrbanFareAuthority,
};
use crate::planner::Itinerary;

use super::convert::{convert_fares, convert_journey_results};
use super::error::TflError;
use super::types::{FaresSectionDto, JourneyResultsDto, StopPointDto};

/// Default base URL for the TfL Unified API.
const DEFAULT_BASE_URL: &str = "https://api.tfl.gov.uk";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Configuration for the TfL client.
#[derive(Debug, Clone)]
pub struct TflConfig {
    /// Optional app key, sent as the `app_key` query parameter
    pub app_key: Option<String>,
    /// Base URL for the API (defaults to production)
    pub base_url: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl TflConfig {
    /// Create a new config, optionally authenticated with an app key.
    ///
    /// TfL serves anonymous requests at a lower rate limit.
    pub fn new(app_key: Option<String>) -> Self {
        Self {
            app_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for TflConfig {
    fn default() -> Self {
        Self::new(None)
    }
}

/// TfL Unified API client.
///
/// Uses a semaphore to limit concurrent requests and avoid rate limiting.
#[derive(Debug, Clone)]
pub struct TflClient {
    http: reqwest::Client,
    base_url: String,
    app_key: Option<String>,
    semaphore: Arc<Semaphore>,
}

impl TflClient {
    /// Create a new TfL client with the given configuration.
    pub fn new(config: TflConfig) -> Result<Self, TflError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            app_key: config.app_key,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent.max(1))),
        })
    }

    /// Plan journeys between two stops.
    ///
    /// # Arguments
    ///
    /// * `query` - Origin, destination, departure time and allowed modes
    pub async fn journey_results(
        &self,
        query: &PlannerQuery<'_>,
    ) -> Result<JourneyResultsDto, TflError> {
        let path = format!(
            "Journey/JourneyResults/{}/to/{}",
            query.origin, query.destination
        );
        let params = [
            ("time", query.time.to_string()),
            ("modes", query.modes.join(",")),
        ];
        self.get_json(&path, &params).await
    }

    /// Fetch a stop point's details.
    pub async fn stop_point(&self, code: &StationCode) -> Result<StopPointDto, TflError> {
        self.get_json(&format!("StopPoint/{code}"), &[]).await
    }

    /// Fetch the single fare finder response between two stops.
    pub async fn fares_to(
        &self,
        origin: &StationCode,
        destination: &StationCode,
    ) -> Result<Vec<FaresSectionDto>, TflError> {
        self.get_json(&format!("StopPoint/{origin}/FareTo/{destination}"), &[])
            .await
    }

    /// GET `{base_url}/{path}` and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, TflError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| TflError::Api {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let url = format!("{}/{}", self.base_url, path);
        debug!(url = %url, "TfL request");

        let mut request = self.http.get(&url).query(params);
        if let Some(key) = &self.app_key {
            request = request.query(&[("app_key", key)]);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(TflError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(TflError::RateLimited);
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(TflError::NotFound(path.to_string()));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TflError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| TflError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}

impl JourneyPlanner for TflClient {
    async fn itineraries(&self, query: &PlannerQuery<'_>) -> Result<Vec<Itinerary>, LookupError> {
        let results = self.journey_results(query).await?;
        Ok(convert_journey_results(&results))
    }
}

impl StationNameResolver for TflClient {
    async fn common_name(&self, code: &StationCode) -> Result<String, LookupError> {
        Ok(self.stop_point(code).await?.common_name)
    }
}

impl UrbanFareAuthority for TflClient {
    async fn find_fares(
        &self,
        origin: &StationCode,
        destination: &StationCode,
        discount_card: bool,
    ) -> Result<Vec<FareCandidate>, LookupError> {
        let sections = self.fares_to(origin, destination).await?;
        Ok(convert_fares(&sections, discount_card)?)
    }
}

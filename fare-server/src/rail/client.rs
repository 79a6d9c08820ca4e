//! National-rail fare service HTTP client.

use serde::Deserialize;

use crate::domain::{Cost, Fare};
use crate::lookup::{LookupError, RailFareAuthority, RailFareQuery};

use super::error::RailFareError;

/// Default base URL for a locally running fare service.
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8081";

/// Fare response body.
#[derive(Debug, Clone, Deserialize)]
pub struct FareDto {
    /// Cheapest fare in pounds.
    pub cost: f64,
}

/// Configuration for the national-rail fare client.
#[derive(Debug, Clone)]
pub struct RailFareConfig {
    /// Base URL for the service
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl RailFareConfig {
    /// Create a new config pointing at the given service.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: 30,
        }
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for RailFareConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Client for the national-rail fare service.
///
/// Issues `GET {base}/fares/{origin}/{destination}?date=&time=&railcard=`.
/// Station names arrive URL-encoded and are placed in the path verbatim.
#[derive(Debug, Clone)]
pub struct RailFareClient {
    http: reqwest::Client,
    base_url: String,
}

impl RailFareClient {
    /// Create a new fare client.
    pub fn new(config: RailFareConfig) -> Result<Self, RailFareError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build the request URL for a query.
    fn fare_url(&self, query: &RailFareQuery<'_>) -> String {
        format!(
            "{}/fares/{}/{}?date={}&time={}&railcard={}",
            self.base_url,
            query.origin,
            query.destination,
            query.date.format("%Y-%m-%d"),
            query.time,
            query.railcard
        )
    }

    /// Fetch the fare for a query.
    pub async fn fetch_fare(&self, query: &RailFareQuery<'_>) -> Result<FareDto, RailFareError> {
        let response = self.http.get(self.fare_url(query)).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(RailFareError::NoFare {
                origin: query.origin.to_string(),
                destination: query.destination.to_string(),
            });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RailFareError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| RailFareError::Json {
            message: e.to_string(),
        })
    }
}

impl RailFareAuthority for RailFareClient {
    async fn fare(&self, query: &RailFareQuery<'_>) -> Result<Fare, LookupError> {
        let dto = self.fetch_fare(query).await?;
        Ok(Fare {
            cost: Cost::new(dto.cost),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TimeOfDay;
    use chrono::NaiveDate;

    #[test]
    fn config_defaults() {
        let config = RailFareConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn config_with_timeout() {
        let config = RailFareConfig::new("http://fares.example").with_timeout(5);
        assert_eq!(config.base_url, "http://fares.example");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn fare_url_keeps_encoded_names() {
        let client = RailFareClient::new(RailFareConfig::new("http://fares.example/")).unwrap();
        let query = RailFareQuery {
            origin: "London%20Victoria",
            destination: "Gatwick%20Airport",
            time: TimeOfDay::parse("1600").unwrap(),
            date: NaiveDate::from_ymd_opt(2025, 3, 4).unwrap(),
            railcard: true,
        };

        assert_eq!(
            client.fare_url(&query),
            "http://fares.example/fares/London%20Victoria/Gatwick%20Airport?date=2025-03-04&time=1600&railcard=true"
        );
    }

    #[test]
    fn fare_dto_parses() {
        let dto: FareDto = serde_json::from_str(r#"{ "cost": 19.1, "ticket": "Off-Peak Single" }"#).unwrap();
        assert_eq!(dto.cost, 19.1);
    }
}

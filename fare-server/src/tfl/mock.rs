//! Mock journey planner for use without API access.
//!
//! Loads saved `JourneyResults` responses from JSON files and serves them
//! as if they were live API responses.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::lookup::{JourneyPlanner, LookupError, PlannerQuery};
use crate::planner::Itinerary;

use super::convert::convert_journey_results;
use super::error::TflError;
use super::types::JourneyResultsDto;

/// Journey planner that serves responses from JSON files.
///
/// Responses are keyed by `(origin, destination)` code strings.
#[derive(Debug, Clone)]
pub struct MockJourneyPlanner {
    responses: Arc<HashMap<(String, String), JourneyResultsDto>>,
}

impl MockJourneyPlanner {
    /// Load every `{origin}_{destination}.json` file in a directory.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, TflError> {
        let data_dir = data_dir.as_ref();
        let mut responses = HashMap::new();

        let entries = std::fs::read_dir(data_dir).map_err(|e| TflError::Api {
            status: 0,
            message: format!("Failed to read mock data directory: {}", e),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| TflError::Api {
                status: 0,
                message: format!("Failed to read directory entry: {}", e),
            })?;

            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            // "940GZZLUBND_910GGTWK.json" -> ("940GZZLUBND", "910GGTWK")
            let key = path
                .file_stem()
                .and_then(|s| s.to_str())
                .and_then(|stem| stem.split_once('_'))
                .map(|(o, d)| (o.to_string(), d.to_string()))
                .ok_or_else(|| TflError::Api {
                    status: 0,
                    message: format!("Invalid filename: {:?}", path),
                })?;

            let json = std::fs::read_to_string(&path).map_err(|e| TflError::Api {
                status: 0,
                message: format!("Failed to read {:?}: {}", path, e),
            })?;

            let results: JourneyResultsDto =
                serde_json::from_str(&json).map_err(|e| TflError::Json {
                    message: format!("Failed to parse {:?}: {}", path, e),
                    body: None,
                })?;

            responses.insert(key, results);
        }

        if responses.is_empty() {
            return Err(TflError::Api {
                status: 0,
                message: format!("No mock journey files found in {:?}", data_dir),
            });
        }

        Ok(Self {
            responses: Arc::new(responses),
        })
    }

    /// List the `(origin, destination)` pairs with saved responses.
    pub fn available_routes(&self) -> Vec<(String, String)> {
        self.responses.keys().cloned().collect()
    }
}

impl JourneyPlanner for MockJourneyPlanner {
    /// Time and mode parameters are ignored - mock data is static.
    async fn itineraries(&self, query: &PlannerQuery<'_>) -> Result<Vec<Itinerary>, LookupError> {
        let key = (
            query.origin.as_str().to_string(),
            query.destination.as_str().to_string(),
        );
        let results = self.responses.get(&key).ok_or_else(|| {
            TflError::NotFound(format!(
                "no mock journeys from {} to {}",
                query.origin, query.destination
            ))
        })?;

        Ok(convert_journey_results(results))
    }
}

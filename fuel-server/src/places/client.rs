//! Places HTTP client.

use std::sync::Arc;

use tokio::sync::Semaphore;

use crate::domain::{Coordinate, Station};

use super::error::PlacesError;
use super::types::PlacesResponse;

/// Default base URL for the Places nearby search endpoint.
const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place/nearbysearch/json";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Place type filter: only fuel stations.
const PLACE_TYPE: &str = "gas_station";

/// Configuration for the Places client.
#[derive(Debug, Clone)]
pub struct PlacesConfig {
    /// API key, sent as the `key` query parameter
    pub api_key: String,
    /// Base URL for the API (defaults to production)
    pub base_url: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl PlacesConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
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

/// Client for the Places nearby search API.
///
/// Uses a semaphore to limit concurrent requests: the station finder
/// issues one search per sampled route point, which for a long route
/// is many requests at once.
#[derive(Debug, Clone)]
pub struct PlacesClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    semaphore: Arc<Semaphore>,
}

impl PlacesClient {
    /// Create a new Places client.
    pub fn new(config: PlacesConfig) -> Result<Self, PlacesError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }

    /// Search for fuel stations within `radius_m` metres of `center`.
    ///
    /// A `ZERO_RESULTS` status is a successful empty search; any other
    /// non-`OK` body status is an error. The call is attempted exactly
    /// once.
    pub async fn nearby_stations(
        &self,
        center: Coordinate,
        radius_m: f64,
    ) -> Result<Vec<Station>, PlacesError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| PlacesError::Api {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("location", center.to_string()),
                ("radius", radius_m.to_string()),
                ("type", PLACE_TYPE.to_string()),
                ("key", self.api_key.clone()),
            ])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PlacesError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let parsed: PlacesResponse =
            serde_json::from_str(&body).map_err(|e| PlacesError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        stations_from_response(parsed)
    }
}

/// Interpret a parsed nearby search response as station records.
///
/// `ZERO_RESULTS` is a successful empty search; any other non-`OK`
/// status is a failure.
fn stations_from_response(parsed: PlacesResponse) -> Result<Vec<Station>, PlacesError> {
    match parsed.status.as_str() {
        "OK" => Ok(parsed.results.into_iter().map(Station::from).collect()),
        "ZERO_RESULTS" => Ok(Vec::new()),
        _ => Err(PlacesError::Status {
            status: parsed.status,
            message: parsed.error_message,
        }),
    }
}

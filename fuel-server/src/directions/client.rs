//! Directions HTTP client.

use crate::domain::RouteGeometry;

use super::error::DirectionsError;
use super::types::DirectionsResponse;

/// Default base URL for the Directions API.
const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/directions/json";

/// Configuration for the Directions client.
#[derive(Debug, Clone)]
pub struct DirectionsConfig {
    /// API key, sent as the `key` query parameter
    pub api_key: String,
    /// Base URL for the API (defaults to production)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl DirectionsConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Client for the Directions API.
///
/// Resolves a pair of free-text place descriptions to the encoded
/// geometry of the best route between them.
#[derive(Debug, Clone)]
pub struct DirectionsClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl DirectionsClient {
    /// Create a new Directions client.
    pub fn new(config: DirectionsConfig) -> Result<Self, DirectionsError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
        })
    }

    /// Resolve a route between two free-text place descriptions.
    ///
    /// Returns the encoded geometry of the first route option. Any
    /// non-`OK` API status (for example `ZERO_RESULTS` when the places
    /// are not connected by road) becomes [`DirectionsError::NoRoute`],
    /// carrying the status and the API's message when present. The
    /// call is attempted exactly once.
    pub async fn resolve(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<RouteGeometry, DirectionsError> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("origin", origin),
                ("destination", destination),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DirectionsError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let parsed: DirectionsResponse =
            serde_json::from_str(&body).map_err(|e| DirectionsError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        route_from_response(parsed)
    }
}

/// Interpret a parsed Directions response as a route geometry.
///
/// Only the first route option is considered. A non-`OK` status, a
/// success with no routes, and a success with an empty geometry all
/// become [`DirectionsError::NoRoute`].
fn route_from_response(parsed: DirectionsResponse) -> Result<RouteGeometry, DirectionsError> {
    if parsed.status != "OK" {
        return Err(DirectionsError::NoRoute {
            status: parsed.status,
            message: parsed.error_message,
        });
    }

    let first = parsed
        .routes
        .into_iter()
        .next()
        .ok_or_else(|| DirectionsError::NoRoute {
            status: "OK".to_string(),
            message: Some("response contained no routes".to_string()),
        })?;

    let geometry = RouteGeometry::new(first.overview_polyline.points);

    // A successful resolution must decode to at least one point.
    if geometry.is_empty() {
        return Err(DirectionsError::NoRoute {
            status: "OK".to_string(),
            message: Some("route had an empty geometry".to_string()),
        });
    }

    Ok(geometry)
}

//! Directions API response DTOs.
//!
//! These types map directly to the Directions JSON API responses,
//! restricted to the fields this application reads. The API uses
//! snake_case keys, so no renaming is needed.

use serde::Deserialize;

/// Top-level response from the Directions API.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsResponse {
    /// Request status, `"OK"` on success. Other documented values
    /// include `"ZERO_RESULTS"`, `"NOT_FOUND"` and `"REQUEST_DENIED"`.
    pub status: String,

    /// Route options, best first. Empty unless status is `"OK"`.
    #[serde(default)]
    pub routes: Vec<RouteOption>,

    /// Human-readable detail accompanying a failure status.
    pub error_message: Option<String>,
}

/// One route option.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteOption {
    /// Encoded polyline covering the whole route.
    pub overview_polyline: OverviewPolyline,

    /// Short description of the route, e.g. a main road name.
    pub summary: Option<String>,
}

/// Wrapper around the encoded polyline string.
#[derive(Debug, Clone, Deserialize)]
pub struct OverviewPolyline {
    pub points: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_successful_response() {
        let json = r#"{
            "status": "OK",
            "routes": [
                {
                    "summary": "A9",
                    "overview_polyline": {"points": "_p~iF~ps|U_ulLnnqC"},
                    "legs": [{"distance": {"text": "584 km", "value": 584123}}]
                }
            ]
        }"#;

        let response: DirectionsResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.status, "OK");
        assert_eq!(response.routes.len(), 1);
        assert_eq!(response.routes[0].summary.as_deref(), Some("A9"));
        assert_eq!(
            response.routes[0].overview_polyline.points,
            "_p~iF~ps|U_ulLnnqC"
        );
    }

    #[test]
    fn deserialize_zero_results() {
        let json = r#"{"status": "ZERO_RESULTS", "routes": []}"#;

        let response: DirectionsResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.status, "ZERO_RESULTS");
        assert!(response.routes.is_empty());
        assert!(response.error_message.is_none());
    }

    #[test]
    fn deserialize_denied_with_message() {
        let json = r#"{
            "status": "REQUEST_DENIED",
            "error_message": "The provided API key is invalid."
        }"#;

        let response: DirectionsResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.status, "REQUEST_DENIED");
        assert!(response.routes.is_empty());
        assert_eq!(
            response.error_message.as_deref(),
            Some("The provided API key is invalid.")
        );
    }
}

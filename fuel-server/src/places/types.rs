//! Places API response DTOs.
//!
//! Mapped directly from the nearby search JSON, restricted to the
//! fields this application reads. `Option` marks the fields the API
//! omits for places without a rating or a formatted address.

use serde::Deserialize;

use crate::domain::{Coordinate, Station};

/// Top-level response from the nearby search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct PlacesResponse {
    /// Request status. `"OK"` with results, `"ZERO_RESULTS"` when the
    /// search succeeded but found nothing nearby.
    pub status: String,

    /// Places found, in API-determined prominence order.
    #[serde(default)]
    pub results: Vec<PlaceResult>,

    /// Human-readable detail accompanying a failure status.
    pub error_message: Option<String>,
}

/// One place in a nearby search response.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceResult {
    /// Display name of the place.
    pub name: String,

    /// Geometry wrapper holding the place's location.
    pub geometry: PlaceGeometry,

    /// Average user rating (1.0 to 5.0), omitted for unrated places.
    pub rating: Option<f64>,

    /// Short address, e.g. street and locality.
    pub vicinity: Option<String>,
}

/// Geometry wrapper around a place location.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceGeometry {
    pub location: PlaceLocation,
}

/// A latitude/longitude pair as the Places API spells it.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceLocation {
    pub lat: f64,
    pub lng: f64,
}

impl From<PlaceResult> for Station {
    fn from(place: PlaceResult) -> Self {
        Station {
            name: place.name,
            location: Coordinate::new(place.geometry.location.lat, place.geometry.location.lng),
            rating: place.rating,
            address: place.vicinity,
        }
    }
}

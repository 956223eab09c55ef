//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Coordinate, Station, distance_km};

/// Request to search for stations along a route.
#[derive(Debug, Deserialize)]
pub struct StationSearchRequest {
    /// Free-text starting point
    #[serde(default)]
    pub origin: String,

    /// Free-text destination
    #[serde(default)]
    pub destination: String,
}

/// JSON response for a station search.
#[derive(Debug, Serialize)]
pub struct StationSearchResponse {
    pub origin: String,
    pub destination: String,

    /// Number of distinct stations found.
    pub count: usize,

    /// Stations in finder order.
    pub stations: Vec<StationResult>,
}

/// One station in a JSON search response.
#[derive(Debug, Serialize)]
pub struct StationResult {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub rating: Option<f64>,
    pub address: Option<String>,

    /// Great-circle distance from the previous entry in kilometres.
    /// Absent on the first entry.
    pub distance_from_previous_km: Option<f64>,
}

impl StationResult {
    /// Build JSON results from the finder's station list, inserting
    /// the pairwise distance between consecutive entries.
    pub fn from_stations(stations: &[Station]) -> Vec<StationResult> {
        let mut results = Vec::with_capacity(stations.len());
        let mut previous: Option<Coordinate> = None;

        for station in stations {
            results.push(StationResult {
                name: station.name.clone(),
                latitude: station.location.latitude,
                longitude: station.location.longitude,
                rating: station.rating,
                address: station.address.clone(),
                distance_from_previous_km: previous.map(|p| distance_km(p, station.location)),
            });
            previous = Some(station.location);
        }

        results
    }
}

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

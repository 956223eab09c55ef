//! Application state for the web layer.

use std::sync::Arc;

use crate::directions::DirectionsClient;
use crate::finder::FinderConfig;
use crate::places::PlacesClient;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Directions API client
    pub directions: Arc<DirectionsClient>,

    /// Places API client
    pub places: Arc<PlacesClient>,

    /// Station finder configuration
    pub config: Arc<FinderConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(directions: DirectionsClient, places: PlacesClient, config: FinderConfig) -> Self {
        Self {
            directions: Arc::new(directions),
            places: Arc::new(places),
            config: Arc::new(config),
        }
    }
}

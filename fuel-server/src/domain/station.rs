//! Gas station records.

use serde::{Deserialize, Serialize};

use super::Coordinate;

/// A gas station discovered near the route.
///
/// The display name doubles as the deduplication key: the station
/// finder keeps at most one record per distinct name. Rating and
/// address are optional because the places API omits them for some
/// results; `None` renders as "unknown" in the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// Display name, non-empty. Deduplication key.
    pub name: String,

    /// Where the station is.
    pub location: Coordinate,

    /// Average user rating, if the places API reported one.
    pub rating: Option<f64>,

    /// Short human-readable address, if the places API reported one.
    pub address: Option<String>,
}

impl Station {
    /// Create a station record with no rating or address.
    pub fn new(name: impl Into<String>, location: Coordinate) -> Self {
        Self {
            name: name.into(),
            location,
            rating: None,
            address: None,
        }
    }

    /// Rating formatted for display, `"N/A"` when unknown.
    pub fn rating_label(&self) -> String {
        match self.rating {
            Some(rating) => format!("{rating}"),
            None => "N/A".to_string(),
        }
    }

    /// Address for display, a placeholder when unknown.
    pub fn address_label(&self) -> &str {
        self.address.as_deref().unwrap_or("No address available")
    }
}

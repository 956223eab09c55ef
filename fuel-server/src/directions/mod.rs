//! Routing API client.
//!
//! Resolves two free-text place descriptions into an encoded route
//! geometry via the Google Directions API. Only the first returned
//! route option is used; there is no retry and no caching.

mod client;
mod error;
mod types;

pub use client::{DirectionsClient, DirectionsConfig};
pub use error::DirectionsError;
pub use types::{DirectionsResponse, OverviewPolyline, RouteOption};

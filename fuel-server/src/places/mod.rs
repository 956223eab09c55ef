//! Places API client.
//!
//! Queries the Google Places nearby search for fuel stations around a
//! coordinate. The station finder fans one of these queries out per
//! sampled route point, so the client bounds its own concurrency with
//! a semaphore.

mod client;
mod error;
mod types;

pub use client::{PlacesClient, PlacesConfig};
pub use error::PlacesError;
pub use types::{PlaceGeometry, PlaceLocation, PlaceResult, PlacesResponse};

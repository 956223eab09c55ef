//! Domain types for the fuel-stop finder.
//!
//! This module contains the core value types shared by the route
//! resolver, the polyline codec and the station finder: geographic
//! coordinates, the opaque encoded route geometry, and the station
//! record itself.

mod coordinate;
mod geometry;
mod station;

pub use coordinate::{Coordinate, EARTH_RADIUS_KM, distance_km};
pub use geometry::RouteGeometry;
pub use station::Station;

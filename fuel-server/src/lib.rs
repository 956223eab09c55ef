//! Fuel-stop finder server.
//!
//! A web application that answers: "where can I fill up on the way
//! from A to B?" It resolves a driving route between two free-text
//! addresses, samples points along the route geometry and searches
//! for gas stations near each sample point.

pub mod directions;
pub mod domain;
pub mod finder;
pub mod places;
pub mod polyline;
pub mod web;

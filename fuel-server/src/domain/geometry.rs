//! Encoded route geometry.

use std::fmt;

/// An encoded polyline geometry as returned by the routing API.
///
/// The string is opaque at this level: it is produced by the route
/// resolver and only ever consumed by [`crate::polyline::decode`].
/// A geometry obtained from a successful route resolution is never
/// empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteGeometry(String);

impl RouteGeometry {
    /// Wrap an encoded polyline string.
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// The encoded polyline as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the encoded string is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume the wrapper, returning the encoded string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for RouteGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

//! Configuration for the station finder.

/// Default sample stride: query every 20th route point.
const DEFAULT_SAMPLE_STRIDE: usize = 20;

/// Default nearby-search radius in metres.
const DEFAULT_SEARCH_RADIUS_M: f64 = 2000.0;

/// Configuration parameters for the station finder.
///
/// The stride bounds the number of nearby searches issued for a long
/// route; it is a deliberate completeness/cost trade-off, and stations
/// between sample points may be missed.
#[derive(Debug, Clone)]
pub struct FinderConfig {
    /// Take every n-th decoded route point, starting at index 0.
    pub sample_stride: usize,

    /// Search radius around each sampled point, in metres.
    pub search_radius_m: f64,
}

impl FinderConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(sample_stride: usize, search_radius_m: f64) -> Self {
        Self {
            sample_stride,
            search_radius_m,
        }
    }

    /// Set the sample stride.
    pub fn with_sample_stride(mut self, stride: usize) -> Self {
        self.sample_stride = stride;
        self
    }

    /// Set the search radius in metres.
    pub fn with_search_radius_m(mut self, radius: f64) -> Self {
        self.search_radius_m = radius;
        self
    }
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            sample_stride: DEFAULT_SAMPLE_STRIDE,
            search_radius_m: DEFAULT_SEARCH_RADIUS_M,
        }
    }
}

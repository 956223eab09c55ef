//! The find pipeline: subsample, fan out, merge, deduplicate.

use std::collections::HashMap;
use std::future::Future;

use tracing::{debug, warn};

use crate::domain::{Coordinate, Station};
use crate::places::{PlacesClient, PlacesError};

use super::config::FinderConfig;

/// Trait for searching stations around a point.
///
/// This abstraction allows the finder to be tested without HTTP
/// access. The production implementation is [`PlacesClient`].
pub trait StationProvider {
    /// Find fuel stations within `radius_m` metres of `center`.
    fn nearby_stations(
        &self,
        center: Coordinate,
        radius_m: f64,
    ) -> impl Future<Output = Result<Vec<Station>, PlacesError>> + Send;
}

impl StationProvider for PlacesClient {
    async fn nearby_stations(
        &self,
        center: Coordinate,
        radius_m: f64,
    ) -> Result<Vec<Station>, PlacesError> {
        PlacesClient::nearby_stations(self, center, radius_m).await
    }
}

/// Result of a find, with enough detail to tell a degraded search
/// from a genuinely empty one.
#[derive(Debug, Clone, PartialEq)]
pub struct FindOutcome {
    /// Deduplicated stations, in the order each distinct name first
    /// appeared in the merged results.
    pub stations: Vec<Station>,

    /// How many sample points were queried.
    pub points_queried: usize,

    /// How many of those queries failed and were skipped.
    pub points_failed: usize,
}

/// Station finder over a [`StationProvider`].
pub struct StationFinder<'a, P: StationProvider> {
    provider: &'a P,
    config: &'a FinderConfig,
}

impl<'a, P: StationProvider> StationFinder<'a, P> {
    /// Create a new finder.
    pub fn new(provider: &'a P, config: &'a FinderConfig) -> Self {
        Self { provider, config }
    }

    /// Find fuel stations along the decoded route points.
    ///
    /// Subsamples `points` by the configured stride, issues one nearby
    /// search per sampled point, merges the results in sample order
    /// and deduplicates by name (last record wins, first-appearance
    /// order preserved).
    ///
    /// The queries run concurrently, but `join_all` yields the results
    /// in input order, so the merge is deterministic. A failed query
    /// is logged and contributes nothing; it never aborts the search.
    /// When every query fails the outcome holds an empty station list,
    /// with the failure visible in `points_failed`.
    pub async fn find_along(&self, points: &[Coordinate]) -> FindOutcome {
        let samples = subsample(points, self.config.sample_stride);
        debug!(
            route_points = points.len(),
            sample_points = samples.len(),
            radius_m = self.config.search_radius_m,
            "searching for stations along route"
        );

        let queries = samples
            .iter()
            .map(|&point| self.provider.nearby_stations(point, self.config.search_radius_m));
        let results = futures::future::join_all(queries).await;

        let mut raw = Vec::new();
        let mut points_failed = 0;

        for (point, result) in samples.iter().zip(results) {
            match result {
                Ok(stations) => raw.extend(stations),
                Err(error) => {
                    points_failed += 1;
                    warn!(%point, %error, "nearby search failed, skipping sample point");
                }
            }
        }

        FindOutcome {
            stations: dedup_by_name(raw),
            points_queried: samples.len(),
            points_failed,
        }
    }
}

/// Take every `stride`-th point, starting at index 0.
///
/// A stride of 0 is treated as 1. 21 points with a stride of 20 yield
/// the points at indices 0 and 20.
pub fn subsample(points: &[Coordinate], stride: usize) -> Vec<Coordinate> {
    points.iter().step_by(stride.max(1)).copied().collect()
}

/// Deduplicate stations by name, keeping insertion order.
///
/// Walks the raw list in order and maintains an ordered mapping keyed
/// by name: the first occurrence of a name fixes its position in the
/// output, and every later occurrence overwrites the stored record.
/// Two distinct stations sharing a display name therefore collapse
/// into one; that mirrors the upstream behavior and is accepted.
pub fn dedup_by_name(raw: Vec<Station>) -> Vec<Station> {
    let mut ordered: Vec<Station> = Vec::new();
    let mut slot_by_name: HashMap<String, usize> = HashMap::new();

    for station in raw {
        match slot_by_name.get(station.name.as_str()) {
            Some(&slot) => ordered[slot] = station,
            None => {
                slot_by_name.insert(station.name.clone(), ordered.len());
                ordered.push(station);
            }
        }
    }

    ordered
}

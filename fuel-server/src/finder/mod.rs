//! Station finder: the core route-sampling pipeline.
//!
//! Takes the decoded route points, subsamples them to bound the
//! number of external queries, fans a nearby search out per sampled
//! point, then merges the raw results into a deduplicated station
//! list. One failed sample point never fails the whole search.

mod config;
mod find;


pub use config::FinderConfig;
pub use find::{FindOutcome, StationFinder, StationProvider, dedup_by_name, subsample};

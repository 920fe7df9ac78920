//! Line topology maintenance.
//!
//! A line is a single unbranched path of segments. This module is the only
//! place that changes that path: it decides where a new segment attaches,
//! splits an existing segment when a new one forks from it, and merges
//! neighbours when an interior station is removed.

mod diff;
mod error;
mod placement;
mod segment_chain;

pub use diff::ChainDiff;
pub use error::ChainError;
pub use placement::Placement;
pub use segment_chain::SegmentChain;

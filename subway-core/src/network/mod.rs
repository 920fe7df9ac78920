//! The whole subway network.
//!
//! A [`NetworkSnapshot`] is what storage hands over. [`Network::resolve`]
//! checks it and turns it into shared [`Line`](crate::domain::Line)s and
//! per-line chains that path queries and segment edits run against.

mod error;
mod model;
mod snapshot;

pub use error::NetworkError;
pub use model::{Network, PathSummary};
pub use snapshot::{NetworkSnapshot, SegmentRecord};

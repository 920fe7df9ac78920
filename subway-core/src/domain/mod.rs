//! Domain types for the subway network.
//!
//! This module contains the entity model shared by the segment chain and the
//! route engine. All types enforce their invariants at construction time, so
//! code that receives these types can trust their validity.

mod distance;
mod error;
mod line;
mod segment;
mod station;

pub use distance::{Distance, InvalidDistance};
pub use error::DomainError;
pub use line::{Line, LineId};
pub use segment::{Segment, SegmentId};
pub use station::{Station, StationId};

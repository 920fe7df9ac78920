//! Shortest-path result.

use std::sync::Arc;

use crate::domain::{Line, Segment, Station};

/// A route found by the engine.
///
/// # Invariants
///
/// - `stations` starts at the source and ends at the target
/// - `segments.len() == stations.len() - 1`, in travel order
/// - `distance` is the sum of the segment distances
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    stations: Vec<Station>,
    distance: u64,
    segments: Vec<Segment>,
}

impl Route {
    pub(crate) fn new(stations: Vec<Station>, distance: u64, segments: Vec<Segment>) -> Self {
        debug_assert_eq!(stations.len(), segments.len() + 1);
        Self {
            stations,
            distance,
            segments,
        }
    }

    /// Stations from source to target.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Total distance travelled.
    pub fn distance(&self) -> u64 {
        self.distance
    }

    /// Segments travelled, in order.
    ///
    /// With a bidirectional engine a segment may have been travelled from its
    /// downstream end; the segment is reported as stored.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The highest line surcharge along the route, or 0 if no segment was
    /// travelled.
    pub fn max_extra_fare(&self) -> u32 {
        self.segments
            .iter()
            .map(|s| s.line().extra_fare)
            .max()
            .unwrap_or(0)
    }

    /// Lines used, in the order they are first boarded.
    pub fn lines(&self) -> Vec<Arc<Line>> {
        let mut lines: Vec<Arc<Line>> = Vec::new();
        for segment in &self.segments {
            if !lines.iter().any(|l| l.id == segment.line_id()) {
                lines.push(segment.line().clone());
            }
        }
        lines
    }
}

//! Ordered segment chain for a single line.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::{debug, trace};

use crate::domain::{Line, Segment, Station, StationId};

use super::{ChainDiff, ChainError, Placement};

/// The ordered segments of one line.
///
/// # Invariants
///
/// - At least one segment
/// - `segments[i].down() == segments[i + 1].up()` for every adjacent pair
/// - No station appears twice except as the joint of consecutive segments
/// - All segments belong to the same line
///
/// The vector order is the line order; nothing else records it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentChain {
    line: Arc<Line>,
    segments: Vec<Segment>,
}

impl SegmentChain {
    /// A new line's chain: its single initial segment.
    pub fn start(segment: Segment) -> Self {
        Self {
            line: segment.line().clone(),
            segments: vec![segment],
        }
    }

    /// Rebuild a chain from stored segments in any order.
    ///
    /// # Errors
    ///
    /// - [`ChainError::Empty`] if `segments` is empty
    /// - [`ChainError::LineMismatch`] if the segments span several lines
    /// - [`ChainError::Broken`] if they branch, loop, or leave a gap
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use subway_core::chain::SegmentChain;
    /// use subway_core::domain::{Distance, Line, LineId, Segment, Station, StationId};
    ///
    /// let line = Arc::new(Line::new(LineId(1), "Line 1", "bg-blue-600", 0));
    /// let st = |id: u64| Station::new(StationId(id), format!("S{id}"));
    /// let seg = |up: u64, down: u64| {
    ///     Segment::new(line.clone(), st(up), st(down), Distance::new(5).unwrap()).unwrap()
    /// };
    ///
    /// // Stored out of order: B->C before A->B
    /// let chain = SegmentChain::new(vec![seg(2, 3), seg(1, 2)]).unwrap();
    /// let ids: Vec<u64> = chain.stations().iter().map(|s| s.id().0).collect();
    /// assert_eq!(ids, vec![1, 2, 3]);
    /// ```
    pub fn new(segments: Vec<Segment>) -> Result<Self, ChainError> {
        let first = segments.first().ok_or(ChainError::Empty)?;
        let line = first.line().clone();

        if let Some(foreign) = segments.iter().find(|s| s.line_id() != line.id) {
            return Err(ChainError::LineMismatch {
                expected: line.id,
                found: foreign.line_id(),
            });
        }

        let mut by_up: HashMap<StationId, Segment> = HashMap::with_capacity(segments.len());
        let mut downs: HashSet<StationId> = HashSet::with_capacity(segments.len());
        let total = segments.len();

        for segment in segments {
            let up = segment.up().id();
            if !downs.insert(segment.down().id()) {
                return Err(ChainError::Broken {
                    station: segment.down().id(),
                });
            }
            if by_up.insert(up, segment).is_some() {
                return Err(ChainError::Broken { station: up });
            }
        }

        // The upstream terminus is the only station nobody arrives at
        let mut heads = by_up.keys().filter(|up| !downs.contains(up)).copied();
        let head = match (heads.next(), heads.next()) {
            (Some(head), None) => head,
            (Some(_), Some(other)) => return Err(ChainError::Broken { station: other }),
            (None, _) => {
                // Every station is someone's downstream: the segments loop
                let station = by_up.keys().min().copied().ok_or(ChainError::Empty)?;
                return Err(ChainError::Broken { station });
            }
        };

        let mut ordered = Vec::with_capacity(total);
        let mut cursor = head;
        while let Some(segment) = by_up.remove(&cursor) {
            cursor = segment.down().id();
            ordered.push(segment);
        }

        if let Some(station) = by_up.keys().min() {
            return Err(ChainError::Broken { station: *station });
        }

        debug!(line = %line.id, segments = ordered.len(), "Rebuilt segment chain");

        Ok(Self {
            line,
            segments: ordered,
        })
    }

    /// Returns the line this chain belongs to.
    pub fn line(&self) -> &Arc<Line> {
        &self.line
    }

    /// Returns the segments in line order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Consume the chain, returning its segments in line order.
    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }

    /// Number of segments (always at least one).
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false for a chain built through this type.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the upstream terminus.
    pub fn up_terminus(&self) -> &Station {
        self.segments[0].up()
    }

    /// Returns the downstream terminus.
    pub fn down_terminus(&self) -> &Station {
        self.segments[self.segments.len() - 1].down()
    }

    /// True if any segment starts or ends at `station`.
    pub fn contains_station(&self, station: StationId) -> bool {
        self.segments.iter().any(|s| s.touches(station))
    }

    /// Sum of all segment distances.
    pub fn total_distance(&self) -> u64 {
        self.segments
            .iter()
            .map(|s| u64::from(s.distance().get()))
            .sum()
    }

    /// Stations from the upstream to the downstream terminus.
    ///
    /// The upstream end of every segment in order, then the final downstream
    /// terminus once.
    pub fn stations(&self) -> Vec<Station> {
        let mut stations: Vec<Station> = self.segments.iter().map(|s| s.up().clone()).collect();
        stations.push(self.down_terminus().clone());
        stations
    }

    /// Decide where `segment` would go without changing the chain.
    pub fn classify(&self, segment: &Segment) -> Placement {
        if segment.line_id() != self.line.id {
            return Placement::ForeignLine;
        }

        if self.segments.iter().any(|s| s.same_endpoints(segment)) {
            return Placement::Duplicate;
        }

        let up = segment.up();
        let down = segment.down();
        let has_up = self.contains_station(up.id());
        let has_down = self.contains_station(down.id());

        let placement = match (has_up, has_down) {
            (true, true) => Placement::BothPresent,
            (false, false) => Placement::Disconnected,
            (false, true) if down == self.up_terminus() => Placement::PrependTerminus,
            (true, false) if up == self.down_terminus() => Placement::AppendTerminus,
            (true, false) => self
                .position_by_up(up.id())
                .and_then(|index| {
                    self.segments[index]
                        .distance()
                        .checked_sub(segment.distance())
                        .map(|remaining| Placement::FrontFork { index, remaining })
                })
                .unwrap_or(Placement::InvalidFork),
            (false, true) => self
                .position_by_down(down.id())
                .and_then(|index| {
                    self.segments[index]
                        .distance()
                        .checked_sub(segment.distance())
                        .map(|remaining| Placement::BackFork { index, remaining })
                })
                .unwrap_or(Placement::InvalidFork),
        };

        trace!(
            line = %self.line.id,
            up = %up.id(),
            down = %down.id(),
            placement = ?placement,
            "Classified segment"
        );

        placement
    }

    /// Insert `segment`, splitting an existing segment if it forks.
    ///
    /// Returns the placement that was applied.
    ///
    /// # Errors
    ///
    /// - [`ChainError::DuplicateSegment`] if the pair is already present
    /// - [`ChainError::BothEndpointsPresent`] if both stations are present
    /// - [`ChainError::NoEndpointPresent`] if neither station is present
    /// - [`ChainError::InvalidForkLength`] if a fork is not strictly shorter
    ///   than the segment it splits
    /// - [`ChainError::LineMismatch`] if the segment is on another line
    pub fn append(&mut self, segment: Segment) -> Result<Placement, ChainError> {
        let placement = self.classify(&segment);
        let up = segment.up().id();
        let down = segment.down().id();

        let rejection = match placement {
            Placement::PrependTerminus => {
                self.segments.insert(0, segment);
                None
            }
            Placement::AppendTerminus => {
                self.segments.push(segment);
                None
            }
            Placement::FrontFork { index, remaining } => {
                self.segments[index].retract_up(segment.down().clone(), remaining);
                self.segments.insert(index, segment);
                None
            }
            Placement::BackFork { index, remaining } => {
                self.segments[index].retract_down(segment.up().clone(), remaining);
                self.segments.insert(index + 1, segment);
                None
            }
            Placement::Duplicate => Some(ChainError::DuplicateSegment { up, down }),
            Placement::BothPresent => Some(ChainError::BothEndpointsPresent { up, down }),
            Placement::Disconnected => Some(ChainError::NoEndpointPresent { up, down }),
            Placement::InvalidFork => Some(ChainError::InvalidForkLength {
                up,
                down,
                distance: segment.distance(),
            }),
            Placement::ForeignLine => Some(ChainError::LineMismatch {
                expected: self.line.id,
                found: segment.line_id(),
            }),
        };

        if let Some(err) = rejection {
            debug!(line = %self.line.id, error = %err, "Rejected segment");
            return Err(err);
        }

        debug!(
            line = %self.line.id,
            placement = ?placement,
            segments = self.segments.len(),
            "Appended segment"
        );

        Ok(placement)
    }

    /// Remove `station` from the line.
    ///
    /// A terminus drops its segment. An interior station merges the segment
    /// arriving at it with the one leaving it; the merged segment is new (no
    /// stored id) and keeps the line of the arriving segment.
    ///
    /// # Errors
    ///
    /// - [`ChainError::ChainTooSmall`] if only one segment is left
    /// - [`ChainError::SegmentNotFound`] if no segment touches `station`
    pub fn remove(&mut self, station: StationId) -> Result<(), ChainError> {
        if self.segments.len() == 1 {
            return Err(ChainError::ChainTooSmall { line: self.line.id });
        }

        if self.up_terminus().id() == station {
            self.segments.remove(0);
            debug!(line = %self.line.id, station = %station, "Removed upstream terminus");
            return Ok(());
        }

        if self.down_terminus().id() == station {
            self.segments.pop();
            debug!(line = %self.line.id, station = %station, "Removed downstream terminus");
            return Ok(());
        }

        let front_idx = self
            .position_by_down(station)
            .ok_or(ChainError::SegmentNotFound(station))?;
        let back_idx = self
            .position_by_up(station)
            .ok_or(ChainError::SegmentNotFound(station))?;

        let back = self.segments.remove(back_idx);
        let merged = Segment::joined(&self.segments[front_idx], &back);
        self.segments[front_idx] = merged;

        debug!(
            line = %self.line.id,
            station = %station,
            segments = self.segments.len(),
            "Merged segments around interior station"
        );

        Ok(())
    }

    /// Compare against the segments the chain was loaded from.
    pub fn diff(&self, before: &[Segment]) -> ChainDiff {
        ChainDiff::between(before, &self.segments)
    }

    fn position_by_up(&self, station: StationId) -> Option<usize> {
        self.segments.iter().position(|s| s.up().id() == station)
    }

    fn position_by_down(&self, station: StationId) -> Option<usize> {
        self.segments.iter().position(|s| s.down().id() == station)
    }
}

#[cfg(test)]
#[path = "segment_chain_tests.rs"]
mod tests;

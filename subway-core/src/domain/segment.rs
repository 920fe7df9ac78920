//! Segment type.
//!
//! A `Segment` is one directed, weighted hop between two adjacent stations on
//! a single line. It holds its line through an `Arc<Line>` so that cloning a
//! segment into a route result stays cheap.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{Distance, DomainError, Line, LineId, Station, StationId};

/// Identifier of a stored segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SegmentId(pub u64);

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.0)
    }
}

/// A directed segment of a line.
///
/// # Invariants
///
/// - `up != down`
/// - `distance > 0` (guaranteed by [`Distance`])
///
/// Stations and distance only change in place when the chain splits this
/// segment to make room for a fork; everything else builds a new segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    id: Option<SegmentId>,
    line: Arc<Line>,
    up: Station,
    down: Station,
    distance: Distance,
}

impl Segment {
    /// Construct a segment that has not been stored yet.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::SameEndpoints`] if `up` and `down` are the same
    /// station.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use subway_core::domain::{Distance, Line, LineId, Segment, Station, StationId};
    ///
    /// let line = Arc::new(Line::new(LineId(1), "Line 1", "bg-blue-600", 0));
    /// let a = Station::new(StationId(1), "A");
    /// let b = Station::new(StationId(2), "B");
    ///
    /// let segment = Segment::new(line.clone(), a.clone(), b, Distance::new(5).unwrap()).unwrap();
    /// assert_eq!(segment.distance().get(), 5);
    /// assert!(segment.id().is_none());
    ///
    /// assert!(Segment::new(line, a.clone(), a, Distance::new(5).unwrap()).is_err());
    /// ```
    pub fn new(
        line: Arc<Line>,
        up: Station,
        down: Station,
        distance: Distance,
    ) -> Result<Self, DomainError> {
        if up == down {
            return Err(DomainError::SameEndpoints(up.id()));
        }
        Ok(Self {
            id: None,
            line,
            up,
            down,
            distance,
        })
    }

    /// Attach the identifier the segment is stored under.
    pub fn with_id(mut self, id: SegmentId) -> Self {
        self.id = Some(id);
        self
    }

    /// Returns the stored identifier, if any.
    pub fn id(&self) -> Option<SegmentId> {
        self.id
    }

    /// Returns the owning line.
    pub fn line(&self) -> &Arc<Line> {
        &self.line
    }

    /// Returns the owning line's identifier.
    pub fn line_id(&self) -> LineId {
        self.line.id
    }

    /// Returns the upstream station.
    pub fn up(&self) -> &Station {
        &self.up
    }

    /// Returns the downstream station.
    pub fn down(&self) -> &Station {
        &self.down
    }

    /// Returns the segment length.
    pub fn distance(&self) -> Distance {
        self.distance
    }

    /// True if `station` is either endpoint.
    pub fn touches(&self, station: StationId) -> bool {
        self.up.id() == station || self.down.id() == station
    }

    /// True if both segments connect the same (upstream, downstream) pair.
    pub fn same_endpoints(&self, other: &Segment) -> bool {
        self.up == other.up && self.down == other.down
    }

    /// Join `front` and the segment following it into one unsaved segment on
    /// `front`'s line.
    pub(crate) fn joined(front: &Segment, back: &Segment) -> Segment {
        debug_assert!(front.down == back.up);
        debug_assert!(front.up != back.down);
        Self {
            id: None,
            line: front.line.clone(),
            up: front.up.clone(),
            down: back.down.clone(),
            distance: front.distance.saturating_add(back.distance),
        }
    }

    /// Move the upstream end forward to `station`, leaving `remaining` length.
    pub(crate) fn retract_up(&mut self, station: Station, remaining: Distance) {
        debug_assert!(station != self.down);
        self.up = station;
        self.distance = remaining;
    }

    /// Move the downstream end back to `station`, leaving `remaining` length.
    pub(crate) fn retract_down(&mut self, station: Station, remaining: Distance) {
        debug_assert!(station != self.up);
        self.down = station;
        self.distance = remaining;
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} ({}, {})",
            self.up, self.down, self.distance, self.line
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line() -> Arc<Line> {
        Arc::new(Line::new(LineId(1), "Line 1", "bg-blue-600", 0))
    }

    fn station(id: u64, name: &str) -> Station {
        Station::new(StationId(id), name)
    }

    fn dist(v: u32) -> Distance {
        Distance::new(v).unwrap()
    }

    #[test]
    fn rejects_same_endpoints() {
        let err = Segment::new(line(), station(1, "A"), station(1, "A"), dist(3)).unwrap_err();
        assert_eq!(err, DomainError::SameEndpoints(StationId(1)));
    }

    #[test]
    fn touches_either_end() {
        let s = Segment::new(line(), station(1, "A"), station(2, "B"), dist(3)).unwrap();
        assert!(s.touches(StationId(1)));
        assert!(s.touches(StationId(2)));
        assert!(!s.touches(StationId(3)));
    }

    #[test]
    fn same_endpoints_is_directional() {
        let ab = Segment::new(line(), station(1, "A"), station(2, "B"), dist(3)).unwrap();
        let ab_longer = Segment::new(line(), station(1, "A"), station(2, "B"), dist(9)).unwrap();
        let ba = Segment::new(line(), station(2, "B"), station(1, "A"), dist(3)).unwrap();
        assert!(ab.same_endpoints(&ab_longer));
        assert!(!ab.same_endpoints(&ba));
    }

    #[test]
    fn retract_keeps_id_and_line() {
        let mut s = Segment::new(line(), station(1, "A"), station(2, "B"), dist(15))
            .unwrap()
            .with_id(SegmentId(10));
        s.retract_up(station(3, "X"), dist(5));
        assert_eq!(s.id(), Some(SegmentId(10)));
        assert_eq!(s.up().id(), StationId(3));
        assert_eq!(s.down().id(), StationId(2));
        assert_eq!(s.distance(), dist(5));
        assert_eq!(s.line_id(), LineId(1));
    }

    #[test]
    fn display() {
        let s = Segment::new(line(), station(1, "A"), station(2, "B"), dist(4)).unwrap();
        assert_eq!(s.to_string(), "A -> B (4, Line 1)");
    }

    #[test]
    fn joined_spans_both_segments() {
        let front = Segment::new(line(), station(1, "A"), station(2, "B"), dist(3))
            .unwrap()
            .with_id(SegmentId(7));
        let back = Segment::new(line(), station(2, "B"), station(3, "C"), dist(4)).unwrap();

        let joined = Segment::joined(&front, &back);
        assert_eq!(joined.up().id(), StationId(1));
        assert_eq!(joined.down().id(), StationId(3));
        assert_eq!(joined.distance(), dist(7));
        assert_eq!(joined.id(), None);
        assert_eq!(joined.line_id(), LineId(1));
    }
}

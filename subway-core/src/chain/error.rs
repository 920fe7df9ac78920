//! Segment chain error types.

use crate::domain::{Distance, LineId, StationId};

/// Errors from building or mutating a [`SegmentChain`](super::SegmentChain).
///
/// Each variant carries the identifiers needed to explain the rejection to a
/// user. None of these are transient: retrying the same request fails the
/// same way.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChainError {
    /// The (upstream, downstream) pair is already on the line
    #[error("segment {up} -> {down} is already registered on the line")]
    DuplicateSegment { up: StationId, down: StationId },

    /// Adding the segment would close a loop or duplicate an existing path
    #[error("stations {up} and {down} are both already on the line")]
    BothEndpointsPresent { up: StationId, down: StationId },

    /// Neither station is on the line, so the segment cannot attach
    #[error("neither {up} nor {down} is on the line")]
    NoEndpointPresent { up: StationId, down: StationId },

    /// A forking segment must be strictly shorter than the one it splits
    #[error("segment {up} -> {down} of length {distance} is not shorter than the segment it would split")]
    InvalidForkLength {
        up: StationId,
        down: StationId,
        distance: Distance,
    },

    /// Removing a station would leave the line without segments
    #[error("line {line} has only one segment left")]
    ChainTooSmall { line: LineId },

    /// No segment starts or ends at the station
    #[error("no segment on the line touches station {0}")]
    SegmentNotFound(StationId),

    /// The segment belongs to a different line
    #[error("segment belongs to line {found}, expected line {expected}")]
    LineMismatch { expected: LineId, found: LineId },

    /// A chain needs at least one segment
    #[error("a line needs at least one segment")]
    Empty,

    /// Stored segments do not form a single unbranched path
    #[error("segments do not form a single path (at station {station})")]
    Broken { station: StationId },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ChainError::DuplicateSegment {
            up: StationId(1),
            down: StationId(2),
        };
        assert_eq!(
            err.to_string(),
            "segment #1 -> #2 is already registered on the line"
        );

        let err = ChainError::InvalidForkLength {
            up: StationId(1),
            down: StationId(9),
            distance: Distance::new(15).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "segment #1 -> #9 of length 15 is not shorter than the segment it would split"
        );

        let err = ChainError::ChainTooSmall { line: LineId(2) };
        assert_eq!(err.to_string(), "line L2 has only one segment left");

        let err = ChainError::SegmentNotFound(StationId(5));
        assert_eq!(err.to_string(), "no segment on the line touches station #5");

        let err = ChainError::Broken {
            station: StationId(3),
        };
        assert_eq!(
            err.to_string(),
            "segments do not form a single path (at station #3)"
        );
    }
}

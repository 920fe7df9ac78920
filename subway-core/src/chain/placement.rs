//! Where an appended segment goes.

use crate::domain::Distance;

/// Outcome of classifying a segment against a chain.
///
/// Computed once by [`SegmentChain::classify`](super::SegmentChain::classify)
/// and then either applied or turned into a [`ChainError`](super::ChainError).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// New upstream terminus.
    PrependTerminus,
    /// New downstream terminus.
    AppendTerminus,
    /// Shares its upstream with the segment at `index`, which keeps
    /// `remaining` length after the split.
    FrontFork { index: usize, remaining: Distance },
    /// Shares its downstream with the segment at `index`, which keeps
    /// `remaining` length after the split.
    BackFork { index: usize, remaining: Distance },
    /// Same (upstream, downstream) pair already present.
    Duplicate,
    /// Both stations already on the line.
    BothPresent,
    /// Neither station on the line.
    Disconnected,
    /// Interior insertion that is not strictly shorter than what it splits.
    InvalidFork,
    /// Segment of another line.
    ForeignLine,
}

impl Placement {
    /// True for placements that modify the chain.
    pub fn is_accepted(&self) -> bool {
        matches!(
            self,
            Placement::PrependTerminus
                | Placement::AppendTerminus
                | Placement::FrontFork { .. }
                | Placement::BackFork { .. }
        )
    }
}

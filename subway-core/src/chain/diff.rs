//! Changes between two versions of a line's segments.
//!
//! Whoever stores segments loads a chain, mutates it, and then needs to know
//! which rows to insert, update and delete. Segments without an id have never
//! been stored; merged segments and newly appended ones fall in that bucket.

use std::collections::{HashMap, HashSet};

use crate::domain::{Segment, SegmentId};

/// Row-level changes that turn `before` into `after`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainDiff {
    /// Segments to store for the first time.
    pub inserted: Vec<Segment>,
    /// Stored segments whose stations or distance changed.
    pub updated: Vec<Segment>,
    /// Stored segments that no longer exist.
    pub removed: Vec<SegmentId>,
}

impl ChainDiff {
    /// Compute the diff from `before` to `after`.
    pub fn between(before: &[Segment], after: &[Segment]) -> Self {
        let previous: HashMap<SegmentId, &Segment> = before
            .iter()
            .filter_map(|s| s.id().map(|id| (id, s)))
            .collect();

        let mut diff = ChainDiff::default();
        let mut kept: HashSet<SegmentId> = HashSet::with_capacity(after.len());

        for segment in after {
            match segment.id() {
                Some(id) => match previous.get(&id) {
                    Some(old) => {
                        kept.insert(id);
                        if *old != segment {
                            diff.updated.push(segment.clone());
                        }
                    }
                    None => diff.inserted.push(segment.clone()),
                },
                None => diff.inserted.push(segment.clone()),
            }
        }

        diff.removed = before
            .iter()
            .filter_map(Segment::id)
            .filter(|id| !kept.contains(id))
            .collect();

        diff
    }

    /// True if nothing changed.
    pub fn is_empty(&self) -> bool {
        self.inserted.is_empty() && self.updated.is_empty() && self.removed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::{Distance, Line, LineId, Station, StationId};

    fn line() -> Arc<Line> {
        Arc::new(Line::new(LineId(1), "Line 1", "bg-blue-600", 0))
    }

    fn seg(id: Option<u64>, up: u64, down: u64, distance: u32) -> Segment {
        let s = Segment::new(
            line(),
            Station::new(StationId(up), format!("S{up}")),
            Station::new(StationId(down), format!("S{down}")),
            Distance::new(distance).unwrap(),
        )
        .unwrap();
        match id {
            Some(id) => s.with_id(SegmentId(id)),
            None => s,
        }
    }

    #[test]
    fn unchanged_is_empty() {
        let before = vec![seg(Some(1), 1, 2, 5), seg(Some(2), 2, 3, 5)];
        let diff = ChainDiff::between(&before, &before.clone());
        assert!(diff.is_empty());
    }

    #[test]
    fn new_segment_is_inserted() {
        let before = vec![seg(Some(1), 1, 2, 5)];
        let after = vec![seg(Some(1), 1, 2, 5), seg(None, 2, 3, 4)];
        let diff = ChainDiff::between(&before, &after);
        assert_eq!(diff.inserted, vec![seg(None, 2, 3, 4)]);
        assert!(diff.updated.is_empty());
        assert!(diff.removed.is_empty());
    }

    #[test]
    fn changed_segment_is_updated() {
        let before = vec![seg(Some(1), 1, 2, 15)];
        let after = vec![seg(None, 1, 9, 10), seg(Some(1), 9, 2, 5)];
        let diff = ChainDiff::between(&before, &after);
        assert_eq!(diff.inserted.len(), 1);
        assert_eq!(diff.updated, vec![seg(Some(1), 9, 2, 5)]);
        assert!(diff.removed.is_empty());
    }

    #[test]
    fn missing_segment_is_removed() {
        let before = vec![seg(Some(1), 1, 2, 5), seg(Some(2), 2, 3, 5)];
        let after = vec![seg(Some(2), 2, 3, 5)];
        let diff = ChainDiff::between(&before, &after);
        assert!(diff.inserted.is_empty());
        assert!(diff.updated.is_empty());
        assert_eq!(diff.removed, vec![SegmentId(1)]);
    }
}

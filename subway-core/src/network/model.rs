//! Resolved in-memory network.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use crate::chain::{ChainDiff, SegmentChain};
use crate::domain::{
    Distance, DomainError, Line, LineId, Segment, SegmentId, Station, StationId,
};
use crate::fare::{Fare, FarePolicy};
use crate::route::{Route, RouteConfig, RouteEngine};

use super::error::NetworkError;
use super::snapshot::{NetworkSnapshot, SegmentRecord};

/// Answer to a path query.
#[derive(Debug, Clone)]
pub struct PathSummary {
    /// The route travelled.
    pub route: Route,
    /// Fare for the route and passenger.
    pub fare: Fare,
}

impl PathSummary {
    /// Stations from source to target.
    pub fn stations(&self) -> &[Station] {
        self.route.stations()
    }

    /// Total distance.
    pub fn distance(&self) -> u64 {
        self.route.distance()
    }
}

/// Stations, lines and their segments, checked against each other.
///
/// Every line's segments form a valid chain at all times: edits go through
/// [`SegmentChain`] and are only stored when it accepts them.
#[derive(Debug, Clone)]
pub struct Network {
    stations: HashMap<StationId, Station>,
    lines: BTreeMap<LineId, Arc<Line>>,
    segments: BTreeMap<LineId, Vec<Segment>>,
    route_config: RouteConfig,
    fare_policy: FarePolicy,
    next_segment_id: u64,
}

impl Network {
    /// Read and resolve a JSON snapshot file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, NetworkError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| NetworkError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let snapshot: NetworkSnapshot = serde_json::from_str(&text)?;
        info!(path = %path.display(), "Loaded network snapshot");
        Self::resolve(snapshot)
    }

    /// Check a snapshot and build the network from it.
    ///
    /// # Errors
    ///
    /// - Duplicate station or line identifiers
    /// - Segments that reference unknown stations or lines
    /// - Segments that are invalid on their own (same endpoints, zero length)
    /// - A line whose segments do not form a single path
    /// - An unusable fare configuration
    pub fn resolve(snapshot: NetworkSnapshot) -> Result<Self, NetworkError> {
        let mut stations = HashMap::with_capacity(snapshot.stations.len());
        for station in snapshot.stations {
            let id = station.id();
            if stations.insert(id, station).is_some() {
                return Err(NetworkError::DuplicateStation(id));
            }
        }

        let mut lines = BTreeMap::new();
        for line in snapshot.lines {
            let id = line.id;
            if lines.insert(id, Arc::new(line)).is_some() {
                return Err(NetworkError::DuplicateLine(id));
            }
        }

        let mut next_segment_id = 1;
        let mut by_line: BTreeMap<LineId, Vec<Segment>> = BTreeMap::new();
        for record in snapshot.segments {
            if let Some(SegmentId(id)) = record.id {
                let after = id.checked_add(1).ok_or(NetworkError::SegmentIdsExhausted)?;
                next_segment_id = next_segment_id.max(after);
            }
            let line_id = record.line_id;
            let segment = resolve_segment(&stations, &lines, record)?;
            by_line.entry(line_id).or_default().push(segment);
        }

        // Store each line in chain order
        let mut segments = BTreeMap::new();
        for (line_id, line_segments) in by_line {
            let chain = SegmentChain::new(line_segments)?;
            segments.insert(line_id, chain.into_segments());
        }

        let fare_policy = FarePolicy::new(snapshot.fare)?;

        debug!(
            stations = stations.len(),
            lines = lines.len(),
            segments = segments.values().map(Vec::len).sum::<usize>(),
            "Resolved network"
        );

        Ok(Self {
            stations,
            lines,
            segments,
            route_config: snapshot.route,
            fare_policy,
            next_segment_id,
        })
    }

    /// Replace the route configuration.
    pub fn with_route_config(mut self, config: RouteConfig) -> Self {
        self.route_config = config;
        self
    }

    /// Look up a station.
    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.stations.get(&id)
    }

    /// Look up a line.
    pub fn line(&self, id: LineId) -> Option<&Arc<Line>> {
        self.lines.get(&id)
    }

    /// All lines, ordered by identifier.
    pub fn lines(&self) -> impl Iterator<Item = &Arc<Line>> {
        self.lines.values()
    }

    /// The chain of `line`.
    ///
    /// # Errors
    ///
    /// [`NetworkError::UnknownLine`] if the line does not exist, or
    /// [`ChainError::Empty`](crate::chain::ChainError::Empty) if it has no
    /// segments yet.
    pub fn chain(&self, line: LineId) -> Result<SegmentChain, NetworkError> {
        if !self.lines.contains_key(&line) {
            return Err(NetworkError::UnknownLine(line));
        }
        let segments = self.segments.get(&line).cloned().unwrap_or_default();
        Ok(SegmentChain::new(segments)?)
    }

    /// A route engine over every line's segments.
    pub fn route_engine(&self) -> RouteEngine {
        RouteEngine::new(
            self.segments.values().flatten().cloned(),
            &self.route_config,
        )
    }

    /// Shortest route between two stations and its fare for a passenger of
    /// `age`.
    pub fn find_path(
        &self,
        source: StationId,
        target: StationId,
        age: i32,
    ) -> Result<PathSummary, NetworkError> {
        for id in [source, target] {
            if !self.stations.contains_key(&id) {
                return Err(NetworkError::UnknownStation(id));
            }
        }

        let route = self.route_engine().shortest_path(source, target)?;
        let fare = self.fare_policy.fare_for(&route, age)?;

        Ok(PathSummary { route, fare })
    }

    /// Add a segment between two existing stations on `line`.
    ///
    /// A line without segments starts a new chain. Returns the row changes;
    /// inserted segments have been given identifiers.
    pub fn add_segment(
        &mut self,
        line: LineId,
        up: StationId,
        down: StationId,
        distance: u32,
    ) -> Result<ChainDiff, NetworkError> {
        let record = SegmentRecord {
            id: None,
            line_id: line,
            up_station_id: up,
            down_station_id: down,
            distance,
        };
        let segment = resolve_segment(&self.stations, &self.lines, record)?;

        let before = self.segments.get(&line).cloned().unwrap_or_default();
        let chain = if before.is_empty() {
            SegmentChain::start(segment)
        } else {
            let mut chain = SegmentChain::new(before.clone())?;
            chain.append(segment)?;
            chain
        };

        self.store(line, &before, chain)
    }

    /// Remove `station` from `line`, merging around it if it is interior.
    pub fn remove_station(
        &mut self,
        line: LineId,
        station: StationId,
    ) -> Result<ChainDiff, NetworkError> {
        let mut chain = self.chain(line)?;
        let before = chain.segments().to_vec();
        chain.remove(station)?;
        self.store(line, &before, chain)
    }

    /// Save a mutated chain, assigning identifiers to new segments.
    ///
    /// Nothing is saved if the identifiers run out.
    fn store(
        &mut self,
        line: LineId,
        before: &[Segment],
        chain: SegmentChain,
    ) -> Result<ChainDiff, NetworkError> {
        let mut next = self.next_segment_id;
        let segments = chain
            .into_segments()
            .into_iter()
            .map(|segment| match segment.id() {
                Some(_) => Ok(segment),
                None => {
                    let id = SegmentId(next);
                    next = next
                        .checked_add(1)
                        .ok_or(NetworkError::SegmentIdsExhausted)?;
                    Ok(segment.with_id(id))
                }
            })
            .collect::<Result<Vec<_>, NetworkError>>()?;
        self.next_segment_id = next;

        let diff = ChainDiff::between(before, &segments);
        debug!(
            line = %line,
            inserted = diff.inserted.len(),
            updated = diff.updated.len(),
            removed = diff.removed.len(),
            "Stored line segments"
        );
        self.segments.insert(line, segments);
        Ok(diff)
    }

    /// Raw records for every stored segment, line by line in chain order.
    pub fn segment_records(&self) -> Vec<SegmentRecord> {
        self.segments
            .values()
            .flatten()
            .map(|s| SegmentRecord {
                id: s.id(),
                line_id: s.line_id(),
                up_station_id: s.up().id(),
                down_station_id: s.down().id(),
                distance: s.distance().get(),
            })
            .collect()
    }
}

fn resolve_segment(
    stations: &HashMap<StationId, Station>,
    lines: &BTreeMap<LineId, Arc<Line>>,
    record: SegmentRecord,
) -> Result<Segment, NetworkError> {
    let line = lines
        .get(&record.line_id)
        .ok_or(NetworkError::UnknownLine(record.line_id))?;
    let up = stations
        .get(&record.up_station_id)
        .ok_or(NetworkError::UnknownStation(record.up_station_id))?;
    let down = stations
        .get(&record.down_station_id)
        .ok_or(NetworkError::UnknownStation(record.down_station_id))?;
    let distance = Distance::new(record.distance).map_err(DomainError::from)?;

    let segment = Segment::new(line.clone(), up.clone(), down.clone(), distance)?;
    Ok(match record.id {
        Some(id) => segment.with_id(id),
        None => segment,
    })
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;

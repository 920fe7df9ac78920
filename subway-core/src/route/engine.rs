//! Shortest-path engine over all lines.
//!
//! The engine is a weighted directed multigraph: one vertex per station, one
//! edge per segment weighted by its distance. Parallel edges are kept because
//! two lines may join the same pair of stations at different lengths and
//! surcharges. The graph is built per query from a snapshot of segments and
//! never updated afterwards.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use tracing::{debug, trace};

use crate::chain::SegmentChain;
use crate::domain::{Segment, Station, StationId};

use super::config::RouteConfig;
use super::error::RouteError;
use super::path::Route;

/// Outgoing edge in the adjacency list.
#[derive(Debug, Clone, Copy)]
struct Edge {
    to: usize,
    weight: u64,
    /// Index into `RouteEngine::segments`.
    segment: usize,
}

/// Read-only shortest-path engine.
///
/// Safe to share between threads once built. When segments change, build a
/// new engine from a fresh snapshot.
#[derive(Debug, Clone)]
pub struct RouteEngine {
    index: HashMap<StationId, usize>,
    stations: Vec<Station>,
    adjacency: Vec<Vec<Edge>>,
    segments: Vec<Segment>,
}

impl RouteEngine {
    /// Build the graph from every segment the caller wants searched.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use subway_core::domain::{Distance, Line, LineId, Segment, Station, StationId};
    /// use subway_core::route::{RouteConfig, RouteEngine};
    ///
    /// let line = Arc::new(Line::new(LineId(1), "Line 1", "bg-blue-600", 0));
    /// let st = |id: u64| Station::new(StationId(id), format!("S{id}"));
    /// let seg = |up: u64, down: u64, d: u32| {
    ///     Segment::new(line.clone(), st(up), st(down), Distance::new(d).unwrap()).unwrap()
    /// };
    ///
    /// let engine = RouteEngine::new(
    ///     vec![seg(1, 2, 5), seg(2, 3, 5), seg(1, 3, 8)],
    ///     &RouteConfig::default(),
    /// );
    /// let route = engine.shortest_path(StationId(1), StationId(3)).unwrap();
    /// assert_eq!(route.distance(), 8);
    /// ```
    pub fn new<I>(segments: I, config: &RouteConfig) -> Self
    where
        I: IntoIterator<Item = Segment>,
    {
        let segments: Vec<Segment> = segments.into_iter().collect();
        let mut index: HashMap<StationId, usize> = HashMap::new();
        let mut stations: Vec<Station> = Vec::new();
        let mut adjacency: Vec<Vec<Edge>> = Vec::new();

        let mut vertex = |station: &Station,
                          stations: &mut Vec<Station>,
                          adjacency: &mut Vec<Vec<Edge>>| {
            *index.entry(station.id()).or_insert_with(|| {
                stations.push(station.clone());
                adjacency.push(Vec::new());
                stations.len() - 1
            })
        };

        for (i, segment) in segments.iter().enumerate() {
            let up = vertex(segment.up(), &mut stations, &mut adjacency);
            let down = vertex(segment.down(), &mut stations, &mut adjacency);
            let weight = u64::from(segment.distance().get());

            adjacency[up].push(Edge {
                to: down,
                weight,
                segment: i,
            });
            if config.bidirectional {
                adjacency[down].push(Edge {
                    to: up,
                    weight,
                    segment: i,
                });
            }
        }

        debug!(
            stations = stations.len(),
            segments = segments.len(),
            bidirectional = config.bidirectional,
            "Built route graph"
        );

        Self {
            index,
            stations,
            adjacency,
            segments,
        }
    }

    /// Build the graph from every line's chain.
    pub fn from_chains<'a, I>(chains: I, config: &RouteConfig) -> Self
    where
        I: IntoIterator<Item = &'a SegmentChain>,
    {
        Self::new(
            chains
                .into_iter()
                .flat_map(|chain| chain.segments().iter().cloned()),
            config,
        )
    }

    /// Number of distinct stations.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Number of segments (edges before any reverse duplication).
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// True if `station` is a vertex of the graph.
    pub fn contains(&self, station: StationId) -> bool {
        self.index.contains_key(&station)
    }

    /// Shortest route from `from` to `to`.
    ///
    /// Uses Dijkstra's algorithm with a binary heap; all weights are positive.
    /// When several routes share the minimum distance, which one is returned
    /// is unspecified.
    ///
    /// # Errors
    ///
    /// - [`RouteError::UnknownStation`] if either station is not in the graph
    /// - [`RouteError::NoPathExists`] if `to` cannot be reached
    pub fn shortest_path(&self, from: StationId, to: StationId) -> Result<Route, RouteError> {
        let source = self.vertex(from)?;
        let target = self.vertex(to)?;

        let n = self.stations.len();
        let mut dist = vec![u64::MAX; n];
        // Edge used to reach each vertex: (previous vertex, segment index)
        let mut prev: Vec<Option<(usize, usize)>> = vec![None; n];
        let mut heap: BinaryHeap<Reverse<(u64, usize)>> = BinaryHeap::new();

        dist[source] = 0;
        heap.push(Reverse((0, source)));

        while let Some(Reverse((d, u))) = heap.pop() {
            if u == target {
                break;
            }
            if d > dist[u] {
                continue;
            }
            for edge in &self.adjacency[u] {
                let next = d.saturating_add(edge.weight);
                if next < dist[edge.to] {
                    dist[edge.to] = next;
                    prev[edge.to] = Some((u, edge.segment));
                    heap.push(Reverse((next, edge.to)));
                }
            }
        }

        if dist[target] == u64::MAX {
            debug!(from = %from, to = %to, "No route found");
            return Err(RouteError::NoPathExists { from, to });
        }

        let mut vertices = vec![target];
        let mut segments = Vec::new();
        let mut cursor = target;
        while let Some((previous, segment)) = prev[cursor] {
            segments.push(self.segments[segment].clone());
            vertices.push(previous);
            cursor = previous;
        }
        vertices.reverse();
        segments.reverse();

        let stations: Vec<Station> = vertices
            .into_iter()
            .map(|v| self.stations[v].clone())
            .collect();

        trace!(
            from = %from,
            to = %to,
            distance = dist[target],
            hops = segments.len(),
            "Found shortest route"
        );

        Ok(Route::new(stations, dist[target], segments))
    }

    fn vertex(&self, station: StationId) -> Result<usize, RouteError> {
        self.index
            .get(&station)
            .copied()
            .ok_or(RouteError::UnknownStation(station))
    }
}

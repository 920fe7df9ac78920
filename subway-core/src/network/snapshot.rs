//! Raw network records.
//!
//! These mirror what a station/line/segment store hands over: plain
//! identifiers and numbers, not yet checked against each other.

use serde::{Deserialize, Serialize};

use crate::domain::{Line, LineId, SegmentId, Station, StationId};
use crate::fare::FareConfig;
use crate::route::RouteConfig;

/// A stored segment row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentRecord {
    #[serde(default)]
    pub id: Option<SegmentId>,
    pub line_id: LineId,
    pub up_station_id: StationId,
    pub down_station_id: StationId,
    pub distance: u32,
}

/// Everything needed to build a [`Network`](super::Network).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetworkSnapshot {
    #[serde(default)]
    pub stations: Vec<Station>,
    #[serde(default)]
    pub lines: Vec<Line>,
    #[serde(default)]
    pub segments: Vec<SegmentRecord>,
    #[serde(default)]
    pub route: RouteConfig,
    #[serde(default)]
    pub fare: FareConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_snapshot() {
        let json = r#"{
            "stations": [{"id": 1, "name": "Seolleung"}, {"id": 2, "name": "Jamsil"}],
            "lines": [{"id": 2, "name": "Line 2", "color": "bg-green-600", "extra_fare": 900}],
            "segments": [
                {"line_id": 2, "up_station_id": 1, "down_station_id": 2, "distance": 7}
            ]
        }"#;

        let snapshot: NetworkSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.stations.len(), 2);
        assert_eq!(snapshot.lines[0].extra_fare, 900);
        assert_eq!(snapshot.segments[0].id, None);
        assert_eq!(snapshot.segments[0].distance, 7);
        assert_eq!(snapshot.route, RouteConfig::default());
        assert_eq!(snapshot.fare, FareConfig::default());
    }

    #[test]
    fn config_sections_override_defaults() {
        let json = r#"{"route": {"bidirectional": true}, "fare": {"base_fare": 1350}}"#;
        let snapshot: NetworkSnapshot = serde_json::from_str(json).unwrap();
        assert!(snapshot.route.bidirectional);
        assert_eq!(snapshot.fare.base_fare, 1350);
        assert_eq!(snapshot.fare.base_distance, 10);
    }
}

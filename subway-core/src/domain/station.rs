//! Station identity types.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Opaque station identifier, as assigned by whoever stores stations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(pub u64);

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A station: an identifier plus a display name.
///
/// Equality and hashing use the identifier only, so two values with the
/// same id and different names are the same station. The core never renames
/// stations; that belongs to whoever manages station records.
///
/// # Examples
///
/// ```
/// use subway_core::domain::{Station, StationId};
///
/// let a = Station::new(StationId(1), "Sindorim");
/// let b = Station::new(StationId(1), "Sindorim (renamed)");
/// assert_eq!(a, b);
/// assert_eq!(a.to_string(), "Sindorim");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Station {
    id: StationId,
    name: String,
}

impl Station {
    /// Create a station.
    pub fn new(id: StationId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Returns the station identifier.
    pub fn id(&self) -> StationId {
        self.id
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Station {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Station {}

impl Hash for Station {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_ignores_name() {
        let a = Station::new(StationId(7), "Bucheon");
        let b = Station::new(StationId(7), "Something else");
        let c = Station::new(StationId(8), "Bucheon");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn hash_consistent_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Station::new(StationId(1), "Onsu"));
        assert!(set.contains(&Station::new(StationId(1), "renamed")));
        assert!(!set.contains(&Station::new(StationId(2), "Onsu")));
    }

    #[test]
    fn display() {
        let station = Station::new(StationId(3), "Yeokgok");
        assert_eq!(station.to_string(), "Yeokgok");
        assert_eq!(station.id().to_string(), "#3");
    }

    #[test]
    fn id_serializes_transparently() {
        let json = serde_json::to_string(&StationId(42)).unwrap();
        assert_eq!(json, "42");
        let back: StationId = serde_json::from_str("42").unwrap();
        assert_eq!(back, StationId(42));
    }
}

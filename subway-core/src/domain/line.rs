//! Transit line type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque line identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(pub u64);

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}", self.0)
    }
}

/// A transit line.
///
/// Segments share their line through an `Arc<Line>`, so a route can report
/// which lines it used and what they charge on top of the base fare.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub id: LineId,
    pub name: String,
    pub color: String,
    /// Surcharge added when a route travels on this line.
    #[serde(default)]
    pub extra_fare: u32,
}

impl Line {
    /// Create a line.
    pub fn new(id: LineId, name: impl Into<String>, color: impl Into<String>, extra_fare: u32) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
            extra_fare,
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extra_fare_defaults_to_zero() {
        let line: Line =
            serde_json::from_str(r#"{"id": 2, "name": "Line 2", "color": "bg-green-600"}"#)
                .unwrap();
        assert_eq!(line.id, LineId(2));
        assert_eq!(line.extra_fare, 0);
    }

    #[test]
    fn display() {
        let line = Line::new(LineId(1), "Line 1", "bg-blue-600", 900);
        assert_eq!(line.to_string(), "Line 1");
        assert_eq!(line.id.to_string(), "L1");
    }
}

//! Route engine configuration.

use serde::{Deserialize, Serialize};

/// How the route engine turns segments into edges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteConfig {
    /// Also allow travel from a segment's downstream to its upstream station.
    ///
    /// Off by default: each segment is a single directed edge.
    #[serde(default)]
    pub bidirectional: bool,
}

impl RouteConfig {
    /// Create a new configuration.
    pub fn new(bidirectional: bool) -> Self {
        Self { bidirectional }
    }

    /// Directed edges only.
    pub fn directed() -> Self {
        Self::new(false)
    }

    /// Every segment can be travelled both ways.
    pub fn bidirectional() -> Self {
        Self::new(true)
    }
}

//! Route query error types.

use crate::domain::StationId;

/// Errors from a shortest-path query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// The station is not on any segment the engine was built from
    #[error("station {0} is not registered on any line")]
    UnknownStation(StationId),

    /// The target cannot be reached from the source
    #[error("no route from {from} to {to}")]
    NoPathExists { from: StationId, to: StationId },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = RouteError::UnknownStation(StationId(12));
        assert_eq!(err.to_string(), "station #12 is not registered on any line");

        let err = RouteError::NoPathExists {
            from: StationId(1),
            to: StationId(2),
        };
        assert_eq!(err.to_string(), "no route from #1 to #2");
    }
}

//! Network error types.

use std::path::PathBuf;

use crate::chain::ChainError;
use crate::domain::{DomainError, LineId, StationId};
use crate::fare::FareError;
use crate::route::RouteError;

/// Errors from resolving, querying or editing a network snapshot.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// Snapshot file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Snapshot file is not valid JSON for a snapshot
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Two stations share an identifier
    #[error("station {0} is defined more than once")]
    DuplicateStation(StationId),

    /// Two lines share an identifier
    #[error("line {0} is defined more than once")]
    DuplicateLine(LineId),

    /// A reference to a station that does not exist
    #[error("station {0} does not exist")]
    UnknownStation(StationId),

    /// A reference to a line that does not exist
    #[error("line {0} does not exist")]
    UnknownLine(LineId),

    /// No segment identifier is left to assign
    #[error("segment identifiers are exhausted")]
    SegmentIdsExhausted,

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Chain(#[from] ChainError),

    #[error(transparent)]
    Route(#[from] RouteError),

    #[error(transparent)]
    Fare(#[from] FareError),
}

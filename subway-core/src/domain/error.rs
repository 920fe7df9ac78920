//! Domain error types.
//!
//! These errors represent values that could never form a valid segment.
//! Topology rules live with the chain, see `crate::chain::ChainError`.

use super::{InvalidDistance, StationId};

/// Domain-level errors for validation of individual values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Upstream and downstream are the same station
    #[error("upstream and downstream must differ (both are station {0})")]
    SameEndpoints(StationId),

    /// Distance was zero
    #[error(transparent)]
    InvalidDistance(#[from] InvalidDistance),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Distance;

    #[test]
    fn error_display() {
        let err = DomainError::SameEndpoints(StationId(4));
        assert_eq!(
            err.to_string(),
            "upstream and downstream must differ (both are station #4)"
        );

        let err: DomainError = Distance::new(0).unwrap_err().into();
        assert_eq!(err.to_string(), "invalid distance 0: must be greater than zero");
    }
}

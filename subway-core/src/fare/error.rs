//! Fare error types.

/// Errors from fare calculation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FareError {
    /// Age was negative
    #[error("cannot compute a fare for age {0}")]
    InvalidAge(i32),

    /// Configuration would divide by zero or is otherwise unusable
    #[error("invalid fare configuration: {0}")]
    InvalidConfig(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            FareError::InvalidAge(-1).to_string(),
            "cannot compute a fare for age -1"
        );
        assert_eq!(
            FareError::InvalidConfig("middle_step must be positive").to_string(),
            "invalid fare configuration: middle_step must be positive"
        );
    }
}

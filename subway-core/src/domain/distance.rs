//! Segment distance type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when constructing a distance that is not positive.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid distance {value}: must be greater than zero")]
pub struct InvalidDistance {
    value: u32,
}

/// A strictly positive segment length.
///
/// # Examples
///
/// ```
/// use subway_core::domain::Distance;
///
/// let d = Distance::new(10).unwrap();
/// assert_eq!(d.get(), 10);
///
/// assert!(Distance::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Distance(u32);

impl Distance {
    /// Create a distance, rejecting zero.
    pub fn new(value: u32) -> Result<Self, InvalidDistance> {
        if value == 0 {
            return Err(InvalidDistance { value });
        }
        Ok(Distance(value))
    }

    /// Returns the raw value.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Subtract `other`, returning `None` unless the result stays positive.
    pub fn checked_sub(self, other: Distance) -> Option<Distance> {
        self.0
            .checked_sub(other.0)
            .filter(|&v| v > 0)
            .map(Distance)
    }

    /// Sum of two distances, saturating at `u32::MAX`.
    pub fn saturating_add(self, other: Distance) -> Distance {
        Distance(self.0.saturating_add(other.0))
    }
}

impl TryFrom<u32> for Distance {
    type Error = InvalidDistance;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Distance::new(value)
    }
}

impl From<Distance> for u32 {
    fn from(d: Distance) -> Self {
        d.0
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any positive value is accepted and returned unchanged
        #[test]
        fn positive_always_valid(v in 1u32..) {
            prop_assert_eq!(Distance::new(v).unwrap().get(), v);
        }

        /// Splitting a distance and adding the parts back is lossless
        #[test]
        fn split_then_sum(total in 2u32..10_000, cut in 1u32..10_000) {
            prop_assume!(cut < total);
            let whole = Distance::new(total).unwrap();
            let part = Distance::new(cut).unwrap();
            let rest = whole.checked_sub(part).unwrap();
            prop_assert_eq!(rest.saturating_add(part), whole);
        }
    }
}

//! Fare calculation.

use tracing::debug;

use crate::route::Route;

use super::{AgeGroup, FareConfig, FareError};

/// Breakdown of a computed fare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fare {
    /// Fare for the distance alone.
    pub distance_fare: u64,
    /// Highest line surcharge on the route.
    pub extra_fare: u64,
    /// Passenger category the discount was taken from.
    pub age_group: AgeGroup,
    /// Amount to pay.
    pub total: u64,
}

/// Computes fares from distance, line surcharge and age.
#[derive(Debug, Clone, Default)]
pub struct FarePolicy {
    config: FareConfig,
}

impl FarePolicy {
    /// Create a policy, rejecting unusable configurations.
    pub fn new(config: FareConfig) -> Result<Self, FareError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &FareConfig {
        &self.config
    }

    /// Fare for `distance` before surcharge and discount.
    ///
    /// The base fare covers the first tier. The middle tier adds a step fare
    /// for every started middle step, and anything past it adds a step fare
    /// for every started long step. Saturates at `u64::MAX`.
    pub fn distance_fare(&self, distance: u64) -> u64 {
        let c = &self.config;
        let mut fare = c.base_fare;

        if distance > c.base_distance {
            let middle = distance.min(c.middle_distance_limit) - c.base_distance;
            fare = fare.saturating_add(middle.div_ceil(c.middle_step).saturating_mul(c.step_fare));
        }
        if distance > c.middle_distance_limit {
            let long = distance - c.middle_distance_limit;
            fare = fare.saturating_add(long.div_ceil(c.long_step).saturating_mul(c.step_fare));
        }

        fare
    }

    /// Fare for a trip of `distance` on lines charging at most `extra_fare`.
    ///
    /// # Errors
    ///
    /// Returns [`FareError::InvalidAge`] for negative ages.
    pub fn fare(&self, distance: u64, extra_fare: u32, age: i32) -> Result<Fare, FareError> {
        let age_group = AgeGroup::from_age(age)?;
        let distance_fare = self.distance_fare(distance);
        let extra_fare = u64::from(extra_fare);
        let total = age_group.discount(distance_fare.saturating_add(extra_fare), &self.config);

        debug!(
            distance,
            distance_fare,
            extra_fare,
            age_group = ?age_group,
            total,
            "Computed fare"
        );

        Ok(Fare {
            distance_fare,
            extra_fare,
            age_group,
            total,
        })
    }

    /// Fare for travelling `route`.
    pub fn fare_for(&self, route: &Route, age: i32) -> Result<Fare, FareError> {
        self.fare(route.distance(), route.max_extra_fare(), age)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Longer trips never cost less
        #[test]
        fn monotonic_in_distance(d in 0u64..500) {
            let policy = FarePolicy::default();
            prop_assert!(policy.distance_fare(d) <= policy.distance_fare(d + 1));
        }

        /// Discounts never raise the fare
        #[test]
        fn discount_never_increases(d in 0u64..500, extra in 0u32..2000, age in 0i32..100) {
            let policy = FarePolicy::default();
            let fare = policy.fare(d, extra, age).unwrap();
            prop_assert!(fare.total <= fare.distance_fare + fare.extra_fare);
        }
    }
}

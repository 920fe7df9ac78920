//! Age groups and their discounts.

use super::{FareConfig, FareError};

/// Passenger category derived from age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgeGroup {
    /// 0 to 5: travels free.
    Infant,
    /// 6 to 12.
    Child,
    /// 13 to 18.
    Teenager,
    /// 19 and over: full fare.
    Adult,
}

impl AgeGroup {
    /// Classify an age.
    ///
    /// # Errors
    ///
    /// Returns [`FareError::InvalidAge`] for negative ages.
    pub fn from_age(age: i32) -> Result<Self, FareError> {
        match age {
            i32::MIN..=-1 => Err(FareError::InvalidAge(age)),
            0..=5 => Ok(AgeGroup::Infant),
            6..=12 => Ok(AgeGroup::Child),
            13..=18 => Ok(AgeGroup::Teenager),
            _ => Ok(AgeGroup::Adult),
        }
    }

    /// Apply this group's discount to `fare`.
    pub fn discount(self, fare: u64, config: &FareConfig) -> u64 {
        let reduced = |percent: u64| {
            let base = fare.saturating_sub(config.discount_deduction);
            let keep = 100 - percent.min(100);
            // Split by hundreds so the product stays within u64
            base / 100 * keep + base % 100 * keep / 100
        };
        match self {
            AgeGroup::Infant => 0,
            AgeGroup::Child => reduced(config.child_discount_percent),
            AgeGroup::Teenager => reduced(config.teen_discount_percent),
            AgeGroup::Adult => fare,
        }
    }
}

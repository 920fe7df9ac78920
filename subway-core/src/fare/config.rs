//! Fare configuration.

use serde::{Deserialize, Serialize};

use super::FareError;

/// Parameters of the distance-tier fare and the age discounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FareConfig {
    /// Fare for any trip up to `base_distance`.
    pub base_fare: u64,

    /// Distance covered by the base fare.
    pub base_distance: u64,

    /// Upper end of the middle tier.
    pub middle_distance_limit: u64,

    /// Middle tier charges `step_fare` per started step of this length.
    pub middle_step: u64,

    /// Beyond the middle tier, `step_fare` per started step of this length.
    pub long_step: u64,

    /// Fare added per step.
    pub step_fare: u64,

    /// Deducted before a child or teenager discount is applied.
    pub discount_deduction: u64,

    /// Percentage taken off for children (6 to 12).
    pub child_discount_percent: u64,

    /// Percentage taken off for teenagers (13 to 18).
    pub teen_discount_percent: u64,
}

impl FareConfig {
    /// Check that the configuration can be used to compute fares.
    pub fn validate(&self) -> Result<(), FareError> {
        if self.middle_step == 0 {
            return Err(FareError::InvalidConfig("middle_step must be positive"));
        }
        if self.long_step == 0 {
            return Err(FareError::InvalidConfig("long_step must be positive"));
        }
        if self.middle_distance_limit < self.base_distance {
            return Err(FareError::InvalidConfig(
                "middle_distance_limit must not be below base_distance",
            ));
        }
        if self.child_discount_percent > 100 || self.teen_discount_percent > 100 {
            return Err(FareError::InvalidConfig("discounts are at most 100 percent"));
        }
        Ok(())
    }
}

impl Default for FareConfig {
    fn default() -> Self {
        Self {
            base_fare: 1250,
            base_distance: 10,
            middle_distance_limit: 50,
            middle_step: 5,
            long_step: 8,
            step_fare: 100,
            discount_deduction: 350,
            child_discount_percent: 50,
            teen_discount_percent: 20,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = FareConfig::default();

        assert_eq!(config.base_fare, 1250);
        assert_eq!(config.base_distance, 10);
        assert_eq!(config.middle_distance_limit, 50);
        assert_eq!(config.middle_step, 5);
        assert_eq!(config.long_step, 8);
        assert_eq!(config.step_fare, 100);
        assert_eq!(config.discount_deduction, 350);
        assert_eq!(config.child_discount_percent, 50);
        assert_eq!(config.teen_discount_percent, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_zero_steps() {
        let config = FareConfig {
            middle_step: 0,
            ..FareConfig::default()
        };
        assert!(config.validate().is_err());

        let config = FareConfig {
            long_step: 0,
            ..FareConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_inverted_tiers() {
        let config = FareConfig {
            base_distance: 60,
            ..FareConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_json_uses_defaults() {
        let config: FareConfig = serde_json::from_str(r#"{"base_fare": 1400}"#).unwrap();
        assert_eq!(config.base_fare, 1400);
        assert_eq!(config.step_fare, 100);
    }
}

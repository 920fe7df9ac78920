//! Fare policy.
//!
//! A fare is the distance-tier fare plus the highest surcharge among the
//! lines travelled, after the passenger's age discount.

mod age;
mod config;
mod error;
mod policy;

pub use age::AgeGroup;
pub use config::FareConfig;
pub use error::FareError;
pub use policy::{Fare, FarePolicy};

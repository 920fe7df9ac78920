//! Subway network topology and route planning.
//!
//! Keeps each line's segments as a single unbranched chain, and answers
//! "what is the shortest way from this station to that one, and what does it
//! cost?"

pub mod chain;
pub mod domain;
pub mod fare;
pub mod network;
pub mod route;

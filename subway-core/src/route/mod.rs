//! Shortest routes across every line.
//!
//! The engine knows distances and segments, not money: a [`Route`] exposes
//! the segments it travelled so the fare policy can charge the highest line
//! surcharge on top of the distance fare.

mod config;
mod engine;
mod error;
mod path;

pub use config::RouteConfig;
pub use engine::RouteEngine;
pub use error::RouteError;
pub use path::Route;

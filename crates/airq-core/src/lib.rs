//! Core domain model for the air quality platform: record types, the
//! Indian city registry, pollution factor tables, and the AQI estimator.
//!
//! Everything in this crate is pure and synchronous. Persistence and
//! orchestration live in the `airq-db` and `airq-service` crates.

pub mod estimator;
pub mod factors;
pub mod geography;
pub mod types;

pub use estimator::*;
pub use factors::*;
pub use geography::*;
pub use types::*;

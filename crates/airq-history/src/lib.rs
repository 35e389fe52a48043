//! Synthetic 30-day history, generated once per city on first read.
//!
//! Cities have no real measurement feed, so the first request for a
//! city's history synthesizes a plausible month of records around the
//! city's AQI baseline and persists it. Every later request reads the
//! stored series back unchanged.

pub mod store;
pub mod synth;

pub use store::*;
pub use synth::*;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] airq_db::DbError),
}

pub type HistoryResult<T> = Result<T, HistoryError>;

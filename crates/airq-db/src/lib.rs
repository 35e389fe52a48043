//! SQLite persistence layer for air quality records.
//!
//! One table, `air_quality_records`, holds both synthesized history and
//! on-demand predictions, partitioned by the `kind` column. The schema is
//! created on demand by [`DbClient::ensure_schema`]; there is no separate
//! migration tooling.

pub mod client;
pub mod queries;
pub mod schema;

pub use client::*;
pub use schema::*;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
}

pub type DbResult<T> = Result<T, DbError>;

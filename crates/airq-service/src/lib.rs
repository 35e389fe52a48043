//! Service facade for the air quality platform.
//!
//! Ties the estimator, the history store and the record repository
//! together behind the handful of calls a presentation layer needs:
//! estimate-and-record, fetch history, list cities.

pub mod service;

pub use service::*;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Database error: {0}")]
    Database(#[from] airq_db::DbError),

    #[error("History error: {0}")]
    History(#[from] airq_history::HistoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

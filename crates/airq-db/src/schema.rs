//! Row types matching the `air_quality_records` table.
//!
//! Column names are camelCase where the dashboard's JSON uses camelCase
//! (`windSpeed`), so rows map onto the wire format without renames at the
//! query layer.

use airq_core::{EnvironmentalRecord, RecordKind};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::{DbError, DbResult};

/// One stored reading, as it comes back from the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct RecordRow {
    /// Autoincrement primary key, also the tie-break for equal timestamps.
    pub id: i64,

    pub city: String,

    /// Unix epoch seconds, UTC.
    pub timestamp: i64,

    pub aqi: f64,

    pub temperature: f64,

    pub humidity: f64,

    #[sqlx(rename = "windSpeed")]
    pub wind_speed: f64,

    /// Stored as text; see [`RecordKind::as_str`].
    pub kind: String,
}

impl RecordRow {
    /// Converts a stored row into the domain record. A `kind` value that
    /// is neither `historical` nor `prediction` means the table was
    /// written by something else and surfaces as a constraint violation.
    pub fn into_record(self) -> DbResult<EnvironmentalRecord> {
        let kind = RecordKind::parse(&self.kind).ok_or_else(|| {
            DbError::ConstraintViolation(format!("unknown record kind: {}", self.kind))
        })?;

        Ok(EnvironmentalRecord {
            city: self.city,
            timestamp: self.timestamp,
            aqi: self.aqi,
            temperature: self.temperature,
            humidity: self.humidity,
            wind_speed: self.wind_speed,
            kind,
        })
    }
}

/// Table names used by the query layer
pub mod tables {
    pub const RECORDS: &str = "air_quality_records";
}

//! Shared record and classification types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unix epoch time in seconds. All records are stamped in UTC.
pub type Timestamp = i64;

/// Distinguishes synthesized history rows from rows written by the
/// estimator on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Historical,
    Prediction,
}

impl RecordKind {
    /// Stable string form used in the database `kind` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Historical => "historical",
            RecordKind::Prediction => "prediction",
        }
    }

    /// Parses the database string form back into a kind.
    pub fn parse(value: &str) -> Option<RecordKind> {
        match value {
            "historical" => Some(RecordKind::Historical),
            "prediction" => Some(RecordKind::Prediction),
            _ => None,
        }
    }
}

/// One environmental reading for a city, either synthesized or predicted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalRecord {
    /// City the reading belongs to, e.g. "Bangalore".
    pub city: String,
    /// When the reading was taken, seconds since the Unix epoch.
    pub timestamp: Timestamp,
    /// Air Quality Index on the 0..=500 scale.
    pub aqi: f64,
    /// Ambient temperature in degrees Celsius.
    pub temperature: f64,
    /// Relative humidity in percent.
    pub humidity: f64,
    /// Wind speed in km/h.
    #[serde(rename = "windSpeed")]
    pub wind_speed: f64,
    /// Whether this row is synthesized history or an on-demand prediction.
    pub kind: RecordKind,
}

impl EnvironmentalRecord {
    /// The record timestamp as a UTC datetime, `None` if out of range.
    pub fn date_time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.timestamp, 0)
    }
}

/// CPCB air quality classification bands.
///
/// Variants are ordered from cleanest to most hazardous so comparisons
/// follow severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AqiLevel {
    Good,
    Satisfactory,
    Moderate,
    Poor,
    #[serde(rename = "Very Poor")]
    VeryPoor,
    Severe,
}

impl AqiLevel {
    /// Human-readable band name.
    pub fn label(&self) -> &'static str {
        match self {
            AqiLevel::Good => "Good",
            AqiLevel::Satisfactory => "Satisfactory",
            AqiLevel::Moderate => "Moderate",
            AqiLevel::Poor => "Poor",
            AqiLevel::VeryPoor => "Very Poor",
            AqiLevel::Severe => "Severe",
        }
    }

    /// Display color for the band as a hex string.
    pub fn color(&self) -> &'static str {
        match self {
            AqiLevel::Good => "#4CAF50",
            AqiLevel::Satisfactory => "#FFC107",
            AqiLevel::Moderate => "#FF9800",
            AqiLevel::Poor => "#FF5722",
            AqiLevel::VeryPoor => "#9C27B0",
            AqiLevel::Severe => "#FF0000",
        }
    }
}

impl std::fmt::Display for AqiLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

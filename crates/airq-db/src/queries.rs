//! Query operations for the records table

use crate::schema::RecordRow;
use crate::{DbClient, DbResult};
use airq_core::{EnvironmentalRecord, RecordKind};
use sqlx::Row;
use tracing::{debug, instrument};

impl DbClient {
    /// Insert a single record
    #[instrument(skip(self, record))]
    pub async fn insert_record(&self, record: &EnvironmentalRecord) -> DbResult<()> {
        sqlx::query(
            r#"
            INSERT INTO air_quality_records (
                city, timestamp, aqi, temperature, humidity, windSpeed, kind
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&record.city)
        .bind(record.timestamp)
        .bind(record.aqi)
        .bind(record.temperature)
        .bind(record.humidity)
        .bind(record.wind_speed)
        .bind(record.kind.as_str())
        .execute(self.pool())
        .await?;

        debug!(
            "Inserted {} record for {} at {}",
            record.kind.as_str(),
            record.city,
            record.timestamp
        );
        Ok(())
    }

    /// Insert a batch of records inside a single transaction. Either every
    /// record lands or none do.
    #[instrument(skip(self, records))]
    pub async fn insert_records(&self, records: &[EnvironmentalRecord]) -> DbResult<()> {
        let mut tx = self.pool().begin().await?;

        for record in records {
            sqlx::query(
                r#"
                INSERT INTO air_quality_records (
                    city, timestamp, aqi, temperature, humidity, windSpeed, kind
                ) VALUES (?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(&record.city)
            .bind(record.timestamp)
            .bind(record.aqi)
            .bind(record.temperature)
            .bind(record.humidity)
            .bind(record.wind_speed)
            .bind(record.kind.as_str())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        debug!("Inserted batch of {} records", records.len());
        Ok(())
    }

    /// Get every record of one kind for a city, oldest first. Ties on
    /// timestamp fall back to insertion order.
    #[instrument(skip(self))]
    pub async fn records_for(
        &self,
        city: &str,
        kind: RecordKind,
    ) -> DbResult<Vec<EnvironmentalRecord>> {
        let rows = sqlx::query_as::<_, RecordRow>(
            r#"
            SELECT * FROM air_quality_records
            WHERE city = ? AND kind = ?
            ORDER BY timestamp ASC, id ASC
            "#,
        )
        .bind(city)
        .bind(kind.as_str())
        .fetch_all(self.pool())
        .await?;

        let records = rows
            .into_iter()
            .map(RecordRow::into_record)
            .collect::<DbResult<Vec<_>>>()?;

        debug!(
            "Retrieved {} {} records for {}",
            records.len(),
            kind.as_str(),
            city
        );
        Ok(records)
    }

    /// Get every record for a city regardless of kind, oldest first
    #[instrument(skip(self))]
    pub async fn all_records_for(&self, city: &str) -> DbResult<Vec<EnvironmentalRecord>> {
        let rows = sqlx::query_as::<_, RecordRow>(
            r#"
            SELECT * FROM air_quality_records
            WHERE city = ?
            ORDER BY timestamp ASC, id ASC
            "#,
        )
        .bind(city)
        .fetch_all(self.pool())
        .await?;

        rows.into_iter().map(RecordRow::into_record).collect()
    }

    /// Get count of records of one kind for a city
    #[instrument(skip(self))]
    pub async fn count_records(&self, city: &str, kind: RecordKind) -> DbResult<i64> {
        let row = sqlx::query(
            r#"
            SELECT COUNT(*) as count FROM air_quality_records
            WHERE city = ? AND kind = ?
            "#,
        )
        .bind(city)
        .bind(kind.as_str())
        .fetch_one(self.pool())
        .await?;

        Ok(row.get("count"))
    }
}

//! Generate-on-first-read access to a city's stored history.

use crate::{city_seed, synthesize_series, HistoryResult, HISTORY_DAYS};
use airq_core::{EnvironmentalRecord, RecordKind};
use airq_db::DbClient;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument};

/// Serves a city's historical series, synthesizing it exactly once.
///
/// Concurrent first reads for the same city are serialized through a
/// per-city lock with a re-check after acquisition, so the series is
/// never written twice. Reads for cities that already have history take
/// the fast path and skip the lock entirely.
pub struct HistoryStore {
    db: DbClient,
    generation_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl HistoryStore {
    pub fn new(db: DbClient) -> Self {
        Self {
            db,
            generation_locks: Mutex::new(HashMap::new()),
        }
    }

    /// The city's historical series, oldest first. Generates and persists
    /// the series if the city has none. A city with a partial series (for
    /// example, trimmed by an operator) is returned as stored, not
    /// regenerated.
    #[instrument(skip(self))]
    pub async fn history(&self, city: &str) -> HistoryResult<Vec<EnvironmentalRecord>> {
        let existing = self.db.records_for(city, RecordKind::Historical).await?;
        if !existing.is_empty() {
            return Ok(existing);
        }

        let lock = self.lock_for(city).await;
        let _guard = lock.lock().await;

        // Another task may have generated the series while we waited.
        let existing = self.db.records_for(city, RecordKind::Historical).await?;
        if !existing.is_empty() {
            debug!("History for {} appeared while waiting on the lock", city);
            return Ok(existing);
        }

        info!("Synthesizing {}-day history for {}", HISTORY_DAYS, city);
        let mut rng = StdRng::seed_from_u64(city_seed(city));
        let series = synthesize_series(city, Utc::now(), &mut rng);
        self.db.insert_records(&series).await?;

        // Read back so callers see rows exactly as stored.
        Ok(self.db.records_for(city, RecordKind::Historical).await?)
    }

    async fn lock_for(&self, city: &str) -> Arc<Mutex<()>> {
        let mut locks = self.generation_locks.lock().await;
        locks.entry(city.to_string()).or_default().clone()
    }
}

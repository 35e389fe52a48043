//! The AirQualityService facade

use airq_config::AppConfig;
use airq_core::{
    all_cities, city_factor, classify, estimate, sample_noise, season_factor, AqiLevel,
    EnvironmentalRecord, RecordKind,
};
use airq_db::DbClient;
use airq_history::HistoryStore;
use chrono::{Datelike, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::{info, instrument};

use crate::ServiceResult;

/// One classified estimate, shaped for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub aqi: f64,
    pub level: AqiLevel,
    pub color: &'static str,
}

/// Facade over estimation, history synthesis and persistence.
///
/// The service owns the prediction-noise RNG so estimates stay
/// reproducible when a seed is supplied through [`AppConfig`] or
/// [`AirQualityService::with_rng`].
pub struct AirQualityService {
    db: DbClient,
    history: HistoryStore,
    rng: StdRng,
}

impl AirQualityService {
    /// Service over an existing client, with OS-seeded prediction noise.
    pub fn new(db: DbClient) -> Self {
        Self::with_rng(db, StdRng::from_os_rng())
    }

    /// Service with an injectable noise source.
    pub fn with_rng(db: DbClient, rng: StdRng) -> Self {
        let history = HistoryStore::new(db.clone());
        Self { db, history, rng }
    }

    /// Connect to a database URL and prepare the schema.
    pub async fn connect(database_url: &str) -> ServiceResult<Self> {
        let db = DbClient::new(database_url).await?;
        db.ensure_schema().await?;
        Ok(Self::new(db))
    }

    /// Build the service from loaded configuration: resolve the database
    /// URL, prepare the schema and seed the noise RNG if configured.
    pub async fn from_config(config: &AppConfig) -> ServiceResult<Self> {
        let db = DbClient::new(&config.database_url()).await?;
        db.ensure_schema().await?;

        let rng = match config.noise_seed() {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self::with_rng(db, rng))
    }

    /// Access to the underlying client, e.g. for health checks.
    pub fn db(&self) -> &DbClient {
        &self.db
    }

    /// Estimate the AQI for a city under the given conditions, persist it
    /// as a prediction record stamped with the current time, and return
    /// the classified result.
    #[instrument(skip(self))]
    pub async fn estimate_and_record(
        &mut self,
        city: &str,
        temperature: f64,
        humidity: f64,
        wind_speed: f64,
    ) -> ServiceResult<Prediction> {
        let now = Utc::now();
        let noise = sample_noise(&mut self.rng);
        let aqi = estimate(
            temperature,
            humidity,
            wind_speed,
            city_factor(city),
            season_factor(now.month()),
            noise,
        );
        let level = classify(aqi);

        let record = EnvironmentalRecord {
            city: city.to_string(),
            timestamp: now.timestamp(),
            aqi,
            temperature,
            humidity,
            wind_speed,
            kind: RecordKind::Prediction,
        };
        self.db.insert_record(&record).await?;

        info!("Prediction recorded for {}: {:.1} ({})", city, aqi, level);

        Ok(Prediction {
            aqi,
            level,
            color: level.color(),
        })
    }

    /// The city's historical series, oldest first, synthesized on first
    /// access.
    pub async fn fetch_history(&self, city: &str) -> ServiceResult<Vec<EnvironmentalRecord>> {
        Ok(self.history.history(city).await?)
    }

    /// All cities available for selection, sorted by name.
    pub fn list_cities(&self) -> Vec<&'static str> {
        all_cities()
    }
}

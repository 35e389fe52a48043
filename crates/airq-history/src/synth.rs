//! Series synthesis: one record per day around the city's AQI baseline.

use airq_core::{base_aqi, clip_aqi, gaussian, season_factor, EnvironmentalRecord, RecordKind};
use chrono::{DateTime, Datelike, Duration, Utc};
use rand::Rng;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Number of daily records in a synthesized series.
pub const HISTORY_DAYS: i64 = 30;

/// Spread of daily AQI values around the city baseline.
pub const HISTORY_AQI_STD_DEV: f64 = 30.0;

pub const TEMPERATURE_MEAN: f64 = 30.0;
pub const TEMPERATURE_STD_DEV: f64 = 5.0;
pub const HUMIDITY_MEAN: f64 = 65.0;
pub const HUMIDITY_STD_DEV: f64 = 15.0;
pub const WIND_MEAN: f64 = 12.0;
pub const WIND_STD_DEV: f64 = 4.0;

/// Deterministic per-city seed, so regenerating a city's history after a
/// database reset produces the same series within one build.
pub fn city_seed(city: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    city.hash(&mut hasher);
    hasher.finish()
}

/// Synthesizes a daily series ending at `now`, oldest record first.
///
/// Each day draws its AQI from a Gaussian centered on the city baseline,
/// scales it by that day's season factor and clips to the AQI range.
/// Weather fields are drawn from fixed climate-shaped distributions.
pub fn synthesize_series<R: Rng>(
    city: &str,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Vec<EnvironmentalRecord> {
    let base = base_aqi(city);

    (0..HISTORY_DAYS)
        .map(|day| {
            let moment = now - Duration::days(HISTORY_DAYS - 1 - day);
            let seasonal = season_factor(moment.month());
            let aqi = clip_aqi(gaussian(rng, base, HISTORY_AQI_STD_DEV) * seasonal);

            EnvironmentalRecord {
                city: city.to_string(),
                timestamp: moment.timestamp(),
                aqi,
                temperature: gaussian(rng, TEMPERATURE_MEAN, TEMPERATURE_STD_DEV),
                humidity: gaussian(rng, HUMIDITY_MEAN, HUMIDITY_STD_DEV),
                wind_speed: gaussian(rng, WIND_MEAN, WIND_STD_DEV),
                kind: RecordKind::Historical,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fixed_now(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_series_shape() {
        let now = fixed_now(2024, 7, 15);
        let mut rng = StdRng::seed_from_u64(1);
        let series = synthesize_series("Bangalore", now, &mut rng);

        assert_eq!(series.len(), HISTORY_DAYS as usize);
        assert!(series.iter().all(|r| r.kind == RecordKind::Historical));
        assert!(series.iter().all(|r| r.city == "Bangalore"));
        assert_eq!(series.last().unwrap().timestamp, now.timestamp());

        for pair in series.windows(2) {
            assert_eq!(pair[1].timestamp - pair[0].timestamp, 86_400);
        }
    }

    #[test]
    fn test_series_respects_aqi_scale() {
        let now = fixed_now(2024, 12, 25);
        let mut rng = StdRng::seed_from_u64(2);
        for city in ["Delhi", "Shillong", "Nonexistent City"] {
            for record in synthesize_series(city, now, &mut rng) {
                assert!((0.0..=500.0).contains(&record.aqi), "{city}: {}", record.aqi);
            }
        }
    }

    #[test]
    fn test_series_is_deterministic_per_seed() {
        let now = fixed_now(2024, 7, 15);
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(
            synthesize_series("Mumbai", now, &mut a),
            synthesize_series("Mumbai", now, &mut b)
        );

        let mut c = StdRng::seed_from_u64(43);
        assert_ne!(
            synthesize_series("Mumbai", now, &mut a),
            synthesize_series("Mumbai", now, &mut c)
        );
    }

    #[test]
    fn test_city_seed_is_stable() {
        assert_eq!(city_seed("Delhi"), city_seed("Delhi"));
        assert_ne!(city_seed("Delhi"), city_seed("Mumbai"));
    }

    #[test]
    fn test_winter_series_scales_up() {
        // Same draw sequence, different calendars: the December window sits
        // entirely in winter months, the July window entirely outside them.
        let mut summer_rng = StdRng::seed_from_u64(7);
        let mut winter_rng = StdRng::seed_from_u64(7);
        let summer = synthesize_series("Bangalore", fixed_now(2024, 7, 15), &mut summer_rng);
        let winter = synthesize_series("Bangalore", fixed_now(2024, 12, 25), &mut winter_rng);

        for (s, w) in summer.iter().zip(winter.iter()) {
            if s.aqi > 1.0 && w.aqi < 499.0 {
                assert!((w.aqi - s.aqi * 1.3).abs() < 1e-9);
            }
        }
    }
}

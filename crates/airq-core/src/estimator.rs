//! Linear AQI estimation model and CPCB classification.
//!
//! The estimator itself is pure: callers resolve the city and season
//! factors and draw the Gaussian noise sample, then pass everything in.
//! That keeps randomness at the edges where it can be seeded in tests.

use rand::Rng;
use rand_distr::StandardNormal;

use crate::types::AqiLevel;

/// Weight applied to temperature in degrees Celsius.
pub const TEMPERATURE_WEIGHT: f64 = 2.0;
/// Weight applied to relative humidity in percent.
pub const HUMIDITY_WEIGHT: f64 = 0.8;
/// Weight applied to wind speed in km/h. Wind disperses pollutants, so
/// the weight is negative.
pub const WIND_SPEED_WEIGHT: f64 = -1.5;
/// Standard deviation of the per-estimate noise term.
pub const NOISE_STD_DEV: f64 = 5.0;
/// Lower bound of the AQI scale.
pub const AQI_MIN: f64 = 0.0;
/// Upper bound of the AQI scale.
pub const AQI_MAX: f64 = 500.0;

/// Estimates an AQI from weather conditions and pre-resolved factors.
///
/// The weighted sum of the inputs plus `noise` is scaled by the city and
/// season factors, then clipped to the valid AQI range.
pub fn estimate(
    temperature: f64,
    humidity: f64,
    wind_speed: f64,
    city_factor: f64,
    season_factor: f64,
    noise: f64,
) -> f64 {
    let raw = temperature * TEMPERATURE_WEIGHT
        + humidity * HUMIDITY_WEIGHT
        + wind_speed * WIND_SPEED_WEIGHT
        + noise;
    clip_aqi(raw * city_factor * season_factor)
}

/// Clamps a value to the valid AQI range `[0, 500]`.
pub fn clip_aqi(value: f64) -> f64 {
    value.clamp(AQI_MIN, AQI_MAX)
}

/// Maps an AQI to its CPCB band. Thresholds are right-inclusive, so an
/// AQI of exactly 100.0 is still Satisfactory.
pub fn classify(aqi: f64) -> AqiLevel {
    if aqi <= 50.0 {
        AqiLevel::Good
    } else if aqi <= 100.0 {
        AqiLevel::Satisfactory
    } else if aqi <= 200.0 {
        AqiLevel::Moderate
    } else if aqi <= 300.0 {
        AqiLevel::Poor
    } else if aqi <= 400.0 {
        AqiLevel::VeryPoor
    } else {
        AqiLevel::Severe
    }
}

/// Draws one sample from a Gaussian with the given mean and standard
/// deviation.
pub fn gaussian<R: Rng>(rng: &mut R, mean: f64, std_dev: f64) -> f64 {
    let z: f64 = rng.sample(StandardNormal);
    mean + std_dev * z
}

/// Draws one zero-mean noise sample for the estimator.
pub fn sample_noise<R: Rng>(rng: &mut R) -> f64 {
    gaussian(rng, 0.0, NOISE_STD_DEV)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_bangalore_reference_scenario() {
        // 30 C, 60% humidity, 10 km/h wind, city factor 0.9, off-season,
        // noise suppressed: (60 + 48 - 15) * 0.9 = 83.7.
        let aqi = estimate(30.0, 60.0, 10.0, 0.9, 1.0, 0.0);
        assert!((aqi - 83.7).abs() < 1e-9, "got {aqi}");
        assert_eq!(classify(aqi), AqiLevel::Satisfactory);
    }

    #[test]
    fn test_noise_passes_through_unscaled_inputs() {
        let aqi = estimate(0.0, 0.0, 0.0, 1.0, 1.0, 42.0);
        assert!((aqi - 42.0).abs() < 1e-9);
    }

    #[test]
    fn test_clip_bounds() {
        // Strong wind with no heat or humidity drives the raw value negative.
        assert!((estimate(0.0, 0.0, 100.0, 1.0, 1.0, 0.0) - 0.0).abs() < 1e-9);
        // Extreme conditions in a winter mega city saturate the scale.
        assert!((estimate(300.0, 100.0, 0.0, 1.5, 1.3, 0.0) - 500.0).abs() < 1e-9);
        assert!((clip_aqi(-5.0) - 0.0).abs() < 1e-9);
        assert!((clip_aqi(123.4) - 123.4).abs() < 1e-9);
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify(0.0), AqiLevel::Good);
        assert_eq!(classify(50.0), AqiLevel::Good);
        assert_eq!(classify(50.1), AqiLevel::Satisfactory);
        assert_eq!(classify(100.0), AqiLevel::Satisfactory);
        assert_eq!(classify(200.0), AqiLevel::Moderate);
        assert_eq!(classify(300.0), AqiLevel::Poor);
        assert_eq!(classify(400.0), AqiLevel::VeryPoor);
        assert_eq!(classify(400.1), AqiLevel::Severe);
        assert_eq!(classify(500.0), AqiLevel::Severe);
    }

    #[test]
    fn test_classify_is_monotonic() {
        let probes = [0.0, 10.0, 50.0, 60.0, 100.0, 199.9, 200.1, 300.0, 399.0, 401.0, 500.0];
        for pair in probes.windows(2) {
            assert!(classify(pair[0]) <= classify(pair[1]));
        }
    }

    #[test]
    fn test_classification_table() {
        let table = [0, 25, 50, 75, 100, 150, 200, 250, 300, 350, 400, 450, 500]
            .iter()
            .map(|aqi| {
                let level = classify(*aqi as f64);
                format!("{aqi} {} {}", level.label(), level.color())
            })
            .collect::<Vec<_>>()
            .join("\n");
        insta::assert_snapshot!(table, @r"
        0 Good #4CAF50
        25 Good #4CAF50
        50 Good #4CAF50
        75 Satisfactory #FFC107
        100 Satisfactory #FFC107
        150 Moderate #FF9800
        200 Moderate #FF9800
        250 Poor #FF5722
        300 Poor #FF5722
        350 Very Poor #9C27B0
        400 Very Poor #9C27B0
        450 Severe #FF0000
        500 Severe #FF0000
        ");
    }

    #[test]
    fn test_gaussian_with_zero_std_dev_is_the_mean() {
        let mut rng = StdRng::seed_from_u64(7);
        let sample = gaussian(&mut rng, 30.0, 0.0);
        assert!((sample - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_noise_is_deterministic_per_seed() {
        let mut a = StdRng::seed_from_u64(9);
        let mut b = StdRng::seed_from_u64(9);
        for _ in 0..32 {
            assert!((sample_noise(&mut a) - sample_noise(&mut b)).abs() < 1e-12);
        }

        let mut c = StdRng::seed_from_u64(10);
        let diverges = (0..32).any(|_| {
            let x = sample_noise(&mut a);
            let y = sample_noise(&mut c);
            (x - y).abs() > 1e-12
        });
        assert!(diverges);
    }

    #[test]
    fn test_noise_distribution_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        let samples: Vec<f64> = (0..2000).map(|_| sample_noise(&mut rng)).collect();
        let mean = samples.iter().sum::<f64>() / samples.len() as f64;
        let variance =
            samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / samples.len() as f64;
        assert!(mean.abs() < 0.75, "mean drifted to {mean}");
        let std_dev = variance.sqrt();
        assert!((4.0..=6.0).contains(&std_dev), "std dev {std_dev}");
    }
}

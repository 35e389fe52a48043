//! Pollution scaling factors and per-city AQI baselines.
//!
//! A handful of cities with well-known pollution profiles carry curated
//! values. Everything else derives a value from its region and size tier,
//! so the tables never need to cover the whole registry.

use crate::geography::{region_of, size_tier, Region, SizeTier};

/// Multiplier applied during the north Indian winter months.
pub const WINTER_SEASON_FACTOR: f64 = 1.3;

/// Baseline AQI for cities without a curated entry, before regional and
/// size scaling.
pub const DEFAULT_BASE_AQI: f64 = 90.0;

fn curated_city_factor(city: &str) -> Option<f64> {
    let factor = match city {
        "Delhi" => 1.5,
        "Ghaziabad" => 1.45,
        "Kanpur" => 1.4,
        "Lucknow" => 1.35,
        "Patna" => 1.35,
        "Kolkata" => 1.3,
        "Jaipur" => 1.2,
        "Mumbai" => 1.2,
        "Ahmedabad" => 1.15,
        "Hyderabad" => 1.05,
        "Chennai" => 1.0,
        "Pune" => 0.95,
        "Bangalore" => 0.9,
        "Kochi" => 0.75,
        "Thiruvananthapuram" => 0.7,
        "Shillong" => 0.65,
        _ => return None,
    };
    Some(factor)
}

fn curated_base_aqi(city: &str) -> Option<f64> {
    let base = match city {
        "Delhi" => 240.0,
        "Ghaziabad" => 230.0,
        "Kanpur" => 220.0,
        "Lucknow" => 200.0,
        "Patna" => 200.0,
        "Kolkata" => 170.0,
        "Jaipur" => 150.0,
        "Mumbai" => 140.0,
        "Ahmedabad" => 135.0,
        "Hyderabad" => 115.0,
        "Chennai" => 105.0,
        "Pune" => 100.0,
        "Bangalore" => 95.0,
        "Kochi" => 70.0,
        "Thiruvananthapuram" => 60.0,
        "Shillong" => 55.0,
        _ => return None,
    };
    Some(base)
}

/// Regional pollution multiplier. The Indo-Gangetic north runs well above
/// the national baseline, the coastal south and the northeast below it.
pub fn region_factor(region: Region) -> f64 {
    match region {
        Region::North => 1.2,
        Region::South => 0.8,
        Region::East => 1.0,
        Region::West => 1.1,
        Region::Northeast => 0.7,
        Region::Other => 1.0,
    }
}

/// Population-tier multiplier.
pub fn size_factor(tier: SizeTier) -> f64 {
    match tier {
        SizeTier::Mega => 1.4,
        SizeTier::Large => 1.2,
        SizeTier::Other => 1.0,
    }
}

/// Pollution multiplier for a city. Curated values win; otherwise the
/// factor is derived from region and size tier. Unknown cities come out
/// at exactly 1.0.
pub fn city_factor(city: &str) -> f64 {
    match curated_city_factor(city) {
        Some(factor) => factor,
        None => region_factor(region_of(city)) * size_factor(size_tier(city)),
    }
}

/// Seasonal multiplier for a calendar month (1..=12). November through
/// January carry the winter uplift, every other month is neutral.
pub fn season_factor(month: u32) -> f64 {
    if matches!(month, 11 | 12 | 1) {
        WINTER_SEASON_FACTOR
    } else {
        1.0
    }
}

/// Long-run AQI baseline for a city, used to center synthesized history.
/// Curated values win; otherwise the default baseline is scaled by region
/// and size tier.
pub fn base_aqi(city: &str) -> f64 {
    match curated_base_aqi(city) {
        Some(base) => base,
        None => DEFAULT_BASE_AQI * region_factor(region_of(city)) * size_factor(size_tier(city)),
    }
}

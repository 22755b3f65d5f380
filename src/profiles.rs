//! Seeded synthetic generation profiles for runs without measured data.
//!
//! The CLI falls back to these when no profile CSVs are configured. Both
//! generators are deterministic for a fixed seed, so synthetic runs are
//! reproducible.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::sim::types::{HOURS_PER_DAY, HOURS_PER_YEAR};

/// Hour of day when PV generation starts (inclusive).
const SUNRISE_HOUR: usize = 6;
/// Hour of day when PV generation ends (exclusive).
const SUNSET_HOUR: usize = 18;

/// AR(1) correlation of the wind multiplier.
const WIND_ALPHA: f32 = 0.95;
/// Long-run mean of the wind multiplier.
const WIND_MEAN: f32 = 0.45;
/// Innovation noise of the wind multiplier.
const WIND_NOISE_STD: f32 = 0.6;

/// Generates one year of hourly PV output (MW) at the given installed peak.
///
/// Half-cosine diurnal shape between sunrise and sunset, a seasonal
/// envelope peaking at midsummer, and per-hour Gaussian weather noise.
/// Zero at night.
pub fn synthetic_pv_year(peak_mw: f32, seed: u64) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut profile = Vec::with_capacity(HOURS_PER_YEAR);
    for hour in 0..HOURS_PER_YEAR {
        let day = hour / HOURS_PER_DAY;
        let frac = daylight_frac(hour % HOURS_PER_DAY);
        if frac <= 0.0 {
            profile.push(0.0);
            continue;
        }
        // Seasonal envelope: ~1.0 at midsummer (day 172), ~0.5 at midwinter.
        let season = 0.75 + 0.25 * (2.0 * std::f32::consts::PI * (day as f32 - 172.0) / 365.0).cos();
        let noise_mult = 1.0 + gaussian_noise(&mut rng, 0.15);
        profile.push((peak_mw * frac * season * noise_mult).max(0.0));
    }
    profile
}

/// Generates one year of hourly wind output (MW) at the given capacity.
///
/// An AR(1) process on a capacity multiplier models multi-hour weather
/// fronts; the multiplier is clamped to `[0, 1]`.
pub fn synthetic_wind_year(capacity_mw: f32, seed: u64) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut multiplier = WIND_MEAN;
    let mut profile = Vec::with_capacity(HOURS_PER_YEAR);
    for _ in 0..HOURS_PER_YEAR {
        let epsilon = gaussian_noise(&mut rng, WIND_NOISE_STD);
        multiplier = WIND_ALPHA * multiplier + (1.0 - WIND_ALPHA) * (WIND_MEAN + epsilon);
        multiplier = multiplier.clamp(0.0, 1.0);
        profile.push(capacity_mw * multiplier);
    }
    profile
}

/// Half-cosine daylight fraction for an hour of day.
fn daylight_frac(hour_of_day: usize) -> f32 {
    if hour_of_day < SUNRISE_HOUR || hour_of_day >= SUNSET_HOUR {
        return 0.0;
    }
    let span = (SUNSET_HOUR - SUNRISE_HOUR) as f32;
    let x = (hour_of_day - SUNRISE_HOUR) as f32 / span;
    (std::f32::consts::PI * x).sin().max(0.0)
}

/// Gaussian noise via the Box-Muller transform.
fn gaussian_noise(rng: &mut StdRng, std_dev: f32) -> f32 {
    if std_dev <= 0.0 {
        return 0.0;
    }
    let u1: f32 = rng.random::<f32>().clamp(1e-6, 1.0);
    let u2: f32 = rng.random::<f32>();
    let z0 = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f32::consts::PI * u2).cos();
    z0 * std_dev
}

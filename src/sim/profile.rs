//! Representative dispatch-day extraction for profile reporting.

use super::types::{HOURS_PER_DAY, HourlyDispatchRecord};

/// One calendar day sliced out of an hourly dispatch run.
#[derive(Debug, Clone)]
pub struct DayProfile {
    /// Day index within the run (0-based).
    pub day: usize,
    /// Total renewable (pv + wind) generation over the day (MWh).
    pub renewable_mwh: f32,
    /// The day's 24 hourly records.
    pub records: Vec<HourlyDispatchRecord>,
}

/// The two dispatch-profile days consumed by external chart tooling.
#[derive(Debug, Clone)]
pub struct RepresentativeDays {
    /// Day with the median daily renewable generation.
    pub typical: DayProfile,
    /// Day whose renewable generation is closest to the 10th percentile.
    pub low_renewable: DayProfile,
}

/// Extracts the typical and low-renewable days from one capacity's records.
///
/// The typical day has the median daily renewable total; the low-renewable
/// day is the one closest to the 10th percentile (not the absolute minimum,
/// which can be a freak outage day). Trailing hours that do not form a full
/// 24-hour day are ignored. Returns `None` when fewer than one complete day
/// is present.
pub fn representative_days(records: &[HourlyDispatchRecord]) -> Option<RepresentativeDays> {
    let full_days = records.len() / HOURS_PER_DAY;
    if full_days == 0 {
        return None;
    }

    let daily_renewable: Vec<f32> = records
        .chunks(HOURS_PER_DAY)
        .take(full_days)
        .map(|day| day.iter().map(HourlyDispatchRecord::renewable_mw).sum())
        .collect();

    let mut order: Vec<usize> = (0..full_days).collect();
    order.sort_by(|&a, &b| daily_renewable[a].total_cmp(&daily_renewable[b]));

    let median_day = order[full_days / 2];
    let p10_value = daily_renewable[order[(full_days - 1) / 10]];

    let mut low_day = 0;
    let mut best_distance = f32::INFINITY;
    for (day, &total) in daily_renewable.iter().enumerate() {
        let distance = (total - p10_value).abs();
        if distance < best_distance {
            best_distance = distance;
            low_day = day;
        }
    }

    Some(RepresentativeDays {
        typical: slice_day(records, median_day, daily_renewable[median_day]),
        low_renewable: slice_day(records, low_day, daily_renewable[low_day]),
    })
}

fn slice_day(records: &[HourlyDispatchRecord], day: usize, renewable_mwh: f32) -> DayProfile {
    let start = day * HOURS_PER_DAY;
    DayProfile {
        day,
        renewable_mwh,
        records: records[start..start + HOURS_PER_DAY].to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::types::Tier;

    /// Builds `days` calendar days where day `d` has a flat `wind(d)` MW.
    fn year_with_daily_wind(days: usize, wind: impl Fn(usize) -> f32) -> Vec<HourlyDispatchRecord> {
        (0..days * HOURS_PER_DAY)
            .map(|hour| HourlyDispatchRecord {
                hour,
                hydro_mw: 250.0,
                pv_mw: 0.0,
                wind_mw: wind(hour / HOURS_PER_DAY),
                tier: Tier::Supplemental,
                delivered_mw: 250.0,
                charge_mw: 0.0,
                discharge_mw: 0.0,
                soc_mwh: 0.0,
                curtailed_mw: 0.0,
            })
            .collect()
    }

    #[test]
    fn median_day_is_typical() {
        // Daily wind 0, 10, 20, ..., 40 -> median is day 2 (20 MW).
        let records = year_with_daily_wind(5, |d| 10.0 * d as f32);
        let days = representative_days(&records).unwrap();
        assert_eq!(days.typical.day, 2);
        assert_eq!(days.typical.records.len(), HOURS_PER_DAY);
        assert!((days.typical.renewable_mwh - 20.0 * 24.0).abs() < 1e-2);
    }

    #[test]
    fn low_day_tracks_tenth_percentile() {
        // 20 days with increasing wind: p10 lands near the low end but
        // above the absolute minimum.
        let records = year_with_daily_wind(20, |d| 10.0 * d as f32);
        let days = representative_days(&records).unwrap();
        assert!(days.low_renewable.day <= 2);
        assert!(days.low_renewable.renewable_mwh <= days.typical.renewable_mwh);
    }

    #[test]
    fn too_short_input_yields_none() {
        let records = year_with_daily_wind(1, |_| 0.0);
        assert!(representative_days(&records[..12]).is_none());
        assert!(representative_days(&records).is_some());
    }

    #[test]
    fn trailing_partial_day_ignored() {
        let mut records = year_with_daily_wind(3, |d| d as f32);
        records.truncate(3 * HOURS_PER_DAY - 1); // drop one hour of day 2
        let days = representative_days(&records).unwrap();
        assert!(days.typical.day < 2);
    }
}

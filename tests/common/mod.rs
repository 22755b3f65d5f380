//! Shared test fixtures for integration tests.

use firm_sim::sim::types::{
    BessConfig, HOURS_PER_DAY, HOURS_PER_YEAR, HourlyGeneration, HourlyInputs, InitialSoc,
};

/// Baseline BESS parameters (500 MW target, 250 MW hydro floor, 500 MW
/// charge/discharge, 90% efficiency, starts full) at the given capacity.
pub fn baseline_bess(capacity_mwh: f32) -> BessConfig {
    BessConfig {
        capacity_mwh,
        max_charge_mw: 500.0,
        max_discharge_mw: 500.0,
        round_trip_efficiency: 0.9,
        target_firm_mw: 500.0,
        hydro_floor_mw: 250.0,
        initial_soc: InitialSoc::Full,
    }
}

/// One full year with the same generation every hour.
pub fn constant_year(hydro_mw: f32, pv_mw: f32, wind_mw: f32) -> HourlyInputs {
    HourlyInputs::from_hourly(vec![
        HourlyGeneration {
            hydro_mw,
            pv_mw,
            wind_mw,
        };
        HOURS_PER_YEAR
    ])
}

/// One full year with a repeating diurnal PV block: 250 MW hydro around the
/// clock plus `pv_mw` of PV during hours 8..17 of every day.
pub fn diurnal_year(pv_mw: f32) -> HourlyInputs {
    let hours = (0..HOURS_PER_YEAR)
        .map(|hour| {
            let hour_of_day = hour % HOURS_PER_DAY;
            HourlyGeneration {
                hydro_mw: 250.0,
                pv_mw: if (8..17).contains(&hour_of_day) {
                    pv_mw
                } else {
                    0.0
                },
                wind_mw: 0.0,
            }
        })
        .collect();
    HourlyInputs::from_hourly(hours)
}

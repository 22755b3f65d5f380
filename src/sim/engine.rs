//! Dispatch engine: hour-by-hour three-tier simulation over one year.

use super::battery::BatteryState;
use super::types::{
    BessConfig, HOURS_PER_YEAR, HourlyDispatchRecord, HourlyGeneration, HourlyInputs, SimError,
    Tier,
};

/// Simulates one year of three-tier dispatch for a single BESS capacity.
///
/// Pure function of its inputs plus the configured initial state-of-charge
/// policy: identical arguments always yield identical records. Validation
/// runs first and fails fast; no partial simulation is returned.
///
/// Per hour, with `available = hydro + pv + wind` and
/// `deficit = target_firm_mw - available`:
/// - surplus (`deficit <= 0`): FIRM at the target; the surplus charges the
///   battery up to its rate and headroom limits, the rest is curtailed.
/// - shortfall the battery can close (`deficit <=
///   min(max_discharge_mw, soc)`): FIRM at the target via discharge. The
///   boundary case classifies as FIRM.
/// - otherwise, hydro at or above its floor: SUPPLEMENTAL, hydro alone is
///   delivered and unused renewables charge the battery. No discharge is
///   committed on hours that cannot reach the firm target.
/// - otherwise: SHUTDOWN, nothing is delivered and all available
///   generation charges the battery.
///
/// # Errors
///
/// [`SimError::InvalidInput`] when the series is not exactly 8760 hours or
/// any generation value is negative; [`SimError::InvalidConfig`] when the
/// BESS parameters are out of range (negative capacity, efficiency outside
/// `(0, 1]`, non-positive rate limits or firm target).
pub fn simulate(
    inputs: &HourlyInputs,
    bess: &BessConfig,
) -> Result<Vec<HourlyDispatchRecord>, SimError> {
    validate_config(bess)?;
    validate_inputs(inputs)?;

    let mut battery = BatteryState::new(bess);
    let mut records = Vec::with_capacity(inputs.len());
    for (hour, generation) in inputs.hours.iter().enumerate() {
        records.push(step(hour, generation, bess, &mut battery));
    }
    Ok(records)
}

/// Executes one dispatch hour and returns its record.
fn step(
    hour: usize,
    generation: &HourlyGeneration,
    bess: &BessConfig,
    battery: &mut BatteryState,
) -> HourlyDispatchRecord {
    let available_mw = generation.available_mw();
    let deficit_mw = bess.target_firm_mw - available_mw;

    let mut charge_mw = 0.0;
    let mut discharge_mw = 0.0;

    let (tier, delivered_mw, curtailed_mw) = if deficit_mw <= 0.0 {
        // Surplus hour: firm target met from generation alone.
        let surplus_mw = -deficit_mw;
        charge_mw = battery.charge(surplus_mw);
        (Tier::Firm, bess.target_firm_mw, surplus_mw - charge_mw)
    } else if deficit_mw <= battery.dischargeable_mw() {
        // Battery closes the whole shortfall.
        discharge_mw = battery.discharge(deficit_mw);
        (Tier::Firm, bess.target_firm_mw, 0.0)
    } else if generation.hydro_mw >= bess.hydro_floor_mw {
        // Hydro-only tier; renewables cannot be delivered, so they charge.
        let renewable_mw = generation.pv_mw + generation.wind_mw;
        charge_mw = battery.charge(renewable_mw);
        (Tier::Supplemental, generation.hydro_mw, renewable_mw - charge_mw)
    } else {
        // Degraded hydro: plant offline, everything charges or is curtailed.
        charge_mw = battery.charge(available_mw);
        (Tier::Shutdown, 0.0, available_mw - charge_mw)
    };

    HourlyDispatchRecord {
        hour,
        hydro_mw: generation.hydro_mw,
        pv_mw: generation.pv_mw,
        wind_mw: generation.wind_mw,
        tier,
        delivered_mw,
        charge_mw,
        discharge_mw,
        soc_mwh: battery.soc_mwh(),
        curtailed_mw,
    }
}

/// Rejects out-of-range BESS parameters.
///
/// Zero capacity is accepted: it models the no-battery baseline that sweep
/// ranges start from. Only negative capacity is an error.
fn validate_config(bess: &BessConfig) -> Result<(), SimError> {
    if bess.capacity_mwh < 0.0 {
        return Err(SimError::InvalidConfig {
            field: "capacity_mwh",
            message: format!("must be >= 0, got {}", bess.capacity_mwh),
        });
    }
    let eta = bess.round_trip_efficiency;
    if !(eta > 0.0 && eta <= 1.0) {
        return Err(SimError::InvalidConfig {
            field: "round_trip_efficiency",
            message: format!("must be in (0, 1], got {eta}"),
        });
    }
    if bess.max_charge_mw <= 0.0 {
        return Err(SimError::InvalidConfig {
            field: "max_charge_mw",
            message: format!("must be > 0, got {}", bess.max_charge_mw),
        });
    }
    if bess.max_discharge_mw <= 0.0 {
        return Err(SimError::InvalidConfig {
            field: "max_discharge_mw",
            message: format!("must be > 0, got {}", bess.max_discharge_mw),
        });
    }
    if bess.target_firm_mw <= 0.0 {
        return Err(SimError::InvalidConfig {
            field: "target_firm_mw",
            message: format!("must be > 0, got {}", bess.target_firm_mw),
        });
    }
    if bess.hydro_floor_mw < 0.0 {
        return Err(SimError::InvalidConfig {
            field: "hydro_floor_mw",
            message: format!("must be >= 0, got {}", bess.hydro_floor_mw),
        });
    }
    Ok(())
}

/// Rejects short/long series and negative generation values.
fn validate_inputs(inputs: &HourlyInputs) -> Result<(), SimError> {
    if inputs.len() != HOURS_PER_YEAR {
        return Err(SimError::InvalidInput {
            hour: None,
            message: format!("expected {HOURS_PER_YEAR} hours, got {}", inputs.len()),
        });
    }
    for (hour, generation) in inputs.hours.iter().enumerate() {
        for (name, value) in [
            ("hydro_mw", generation.hydro_mw),
            ("pv_mw", generation.pv_mw),
            ("wind_mw", generation.wind_mw),
        ] {
            if value < 0.0 {
                return Err(SimError::InvalidInput {
                    hour: Some(hour),
                    message: format!("{name} is negative ({value})"),
                });
            }
        }
    }
    Ok(())
}

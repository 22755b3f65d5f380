//! Core simulation types: inputs, BESS configuration, hourly records, and errors.

use std::fmt;

/// Hours in the fixed simulation horizon (one non-leap year).
pub const HOURS_PER_YEAR: usize = 8760;

/// Hours per calendar day, used for full-day grouping.
pub const HOURS_PER_DAY: usize = 24;

/// Default constant hydro baseload in MW.
pub const DEFAULT_HYDRO_MW: f32 = 250.0;

/// Dispatch tier assigned to each simulated hour.
///
/// The three-tier policy is a pure per-hour decision: FIRM when the firm
/// target is met (with or without battery assist), SUPPLEMENTAL when only
/// the hydro baseload can be dispatched, SHUTDOWN when even hydro is below
/// its floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Full firm-power delivery at `target_firm_mw`.
    Firm,
    /// Hydro-only delivery; renewables and battery cannot reach the target.
    Supplemental,
    /// No delivery; hydro itself is below its 24/7 floor.
    Shutdown,
}

impl Tier {
    /// Stable uppercase name used in CSV exports and reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Firm => "FIRM",
            Tier::Supplemental => "SUPPLEMENTAL",
            Tier::Shutdown => "SHUTDOWN",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generation available in one hour, in MW.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourlyGeneration {
    /// Hydro baseload output (MW).
    pub hydro_mw: f32,
    /// Solar PV output (MW).
    pub pv_mw: f32,
    /// Wind output (MW).
    pub wind_mw: f32,
}

impl HourlyGeneration {
    /// Total generation available this hour (MW).
    pub fn available_mw(&self) -> f32 {
        self.hydro_mw + self.pv_mw + self.wind_mw
    }
}

/// Ordered year of hourly generation, exactly [`HOURS_PER_YEAR`] entries.
///
/// Construction does not validate; [`crate::sim::engine::simulate`] rejects
/// wrong lengths and negative values before running.
#[derive(Debug, Clone)]
pub struct HourlyInputs {
    /// Hour-indexed generation records (hour 0 = Jan 1, 00:00).
    pub hours: Vec<HourlyGeneration>,
}

impl HourlyInputs {
    /// Builds inputs from PV and wind profiles with a constant hydro baseload.
    ///
    /// Profiles are zipped by hour index; the shorter profile bounds the
    /// result, so mismatched lengths surface as an `InvalidInput` length
    /// failure at simulation time.
    pub fn from_profiles(pv_mw: &[f32], wind_mw: &[f32], hydro_mw: f32) -> Self {
        let hours = pv_mw
            .iter()
            .zip(wind_mw.iter())
            .map(|(&pv, &wind)| HourlyGeneration {
                hydro_mw,
                pv_mw: pv,
                wind_mw: wind,
            })
            .collect();
        Self { hours }
    }

    /// Builds inputs from per-hour records, for degraded-hydro scenarios.
    pub fn from_hourly(hours: Vec<HourlyGeneration>) -> Self {
        Self { hours }
    }

    /// Number of hours in the input sequence.
    pub fn len(&self) -> usize {
        self.hours.len()
    }

    /// True when no hours are present.
    pub fn is_empty(&self) -> bool {
        self.hours.is_empty()
    }
}

/// Initial battery state-of-charge policy applied at hour 0 of every run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InitialSoc {
    /// Start empty (0 MWh).
    Empty,
    /// Start at half capacity.
    Half,
    /// Start full (the conventional study initialisation).
    #[default]
    Full,
}

impl InitialSoc {
    /// Initial stored energy in MWh for the given capacity.
    pub fn soc_mwh(self, capacity_mwh: f32) -> f32 {
        match self {
            InitialSoc::Empty => 0.0,
            InitialSoc::Half => capacity_mwh / 2.0,
            InitialSoc::Full => capacity_mwh,
        }
    }
}

/// BESS and dispatch-target parameters for one simulation run.
///
/// `capacity_mwh` is the swept variable; all other fields are held fixed
/// across a sweep. A capacity of zero models the no-battery baseline.
#[derive(Debug, Clone)]
pub struct BessConfig {
    /// BESS energy capacity (MWh). Zero disables the battery.
    pub capacity_mwh: f32,
    /// Maximum charge power (MW, > 0).
    pub max_charge_mw: f32,
    /// Maximum discharge power (MW, > 0).
    pub max_discharge_mw: f32,
    /// Round-trip efficiency in (0, 1], applied entirely on the charge path.
    pub round_trip_efficiency: f32,
    /// Firm-power delivery target (MW, > 0).
    pub target_firm_mw: f32,
    /// Hydro floor for the SUPPLEMENTAL tier (MW).
    pub hydro_floor_mw: f32,
    /// State-of-charge policy at hour 0.
    pub initial_soc: InitialSoc,
}

impl BessConfig {
    /// Returns a copy with a different swept capacity, all else unchanged.
    pub fn with_capacity(&self, capacity_mwh: f32) -> Self {
        Self {
            capacity_mwh,
            ..self.clone()
        }
    }
}

/// Complete dispatch record for one simulated hour.
#[derive(Debug, Clone)]
pub struct HourlyDispatchRecord {
    /// Hour index (0..8759).
    pub hour: usize,
    /// Hydro generation this hour (MW).
    pub hydro_mw: f32,
    /// PV generation this hour (MW).
    pub pv_mw: f32,
    /// Wind generation this hour (MW).
    pub wind_mw: f32,
    /// Dispatch tier for this hour.
    pub tier: Tier,
    /// Power delivered to the firm load (MW).
    pub delivered_mw: f32,
    /// Battery charge power drawn this hour, before efficiency loss (MW).
    pub charge_mw: f32,
    /// Battery discharge power delivered this hour (MW).
    pub discharge_mw: f32,
    /// Battery state of charge at the end of the hour (MWh).
    pub soc_mwh: f32,
    /// Generation neither delivered nor stored (MW).
    pub curtailed_mw: f32,
}

impl HourlyDispatchRecord {
    /// Total generation available this hour (MW).
    pub fn available_mw(&self) -> f32 {
        self.hydro_mw + self.pv_mw + self.wind_mw
    }

    /// Renewable (non-hydro) generation this hour (MW).
    pub fn renewable_mw(&self) -> f32 {
        self.pv_mw + self.wind_mw
    }
}

impl fmt::Display for HourlyDispatchRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "h={:>4} | {:<12} | avail={:>7.1} MW (hydro={:.1} pv={:.1} wind={:.1}) | \
             delivered={:>7.1} MW | bess(chg={:.1}, dis={:.1}, soc={:.1} MWh) | \
             curtailed={:.1} MW",
            self.hour,
            self.tier,
            self.available_mw(),
            self.hydro_mw,
            self.pv_mw,
            self.wind_mw,
            self.delivered_mw,
            self.charge_mw,
            self.discharge_mw,
            self.soc_mwh,
            self.curtailed_mw,
        )
    }
}

/// Simulation failure raised by the dispatch engine.
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// Malformed input series: wrong length or negative generation.
    InvalidInput {
        /// Offending hour index, when a specific hour is at fault.
        hour: Option<usize>,
        /// Constraint description.
        message: String,
    },
    /// Nonsensical BESS parameters.
    InvalidConfig {
        /// Offending configuration field.
        field: &'static str,
        /// Constraint description.
        message: String,
    },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidInput {
                hour: Some(h),
                message,
            } => write!(f, "invalid input at hour {h}: {message}"),
            SimError::InvalidInput {
                hour: None,
                message,
            } => write!(f, "invalid input: {message}"),
            SimError::InvalidConfig { field, message } => {
                write!(f, "invalid config: {field} — {message}")
            }
        }
    }
}

impl std::error::Error for SimError {}

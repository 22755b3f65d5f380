//! TOML-based scenario configuration and preset definitions.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::sim::types::{BessConfig, InitialSoc};

/// Top-level scenario configuration parsed from TOML.
///
/// All fields have defaults matching the baseline study (500 MW firm
/// target, 250 MW hydro, 500 MW BESS power at 90% round-trip efficiency).
/// Load from TOML with [`ScenarioConfig::from_toml_file`] or use
/// [`ScenarioConfig::baseline`] for the built-in default.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Firm target and hydro baseload parameters.
    #[serde(default)]
    pub system: SystemConfig,
    /// BESS power, efficiency, and initial-state parameters.
    #[serde(default)]
    pub bess: BessSection,
    /// Capacity sweep definition.
    #[serde(default)]
    pub sweep: SweepSection,
    /// Generation profile sources.
    #[serde(default)]
    pub profiles: ProfilesSection,
}

/// Firm target and hydro baseload parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SystemConfig {
    /// Firm-power delivery target (MW).
    pub target_firm_mw: f32,
    /// Constant 24/7 hydro baseload (MW).
    pub hydro_mw: f32,
    /// Hydro floor below which the plant shuts down (MW).
    pub hydro_floor_mw: f32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            target_firm_mw: 500.0,
            hydro_mw: 250.0,
            hydro_floor_mw: 250.0,
        }
    }
}

/// BESS power, efficiency, and initial-state parameters.
///
/// The energy capacity is not configured here: it is the swept variable,
/// defined by [`SweepSection::capacities_mwh`].
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BessSection {
    /// Maximum charging power (MW).
    pub max_charge_mw: f32,
    /// Maximum discharging power (MW).
    pub max_discharge_mw: f32,
    /// Round-trip efficiency (0.0–1.0), applied on the charge path.
    pub round_trip_efficiency: f32,
    /// Initial state of charge: `"empty"`, `"half"`, or `"full"`.
    pub initial_soc: String,
}

impl Default for BessSection {
    fn default() -> Self {
        Self {
            max_charge_mw: 500.0,
            max_discharge_mw: 500.0,
            round_trip_efficiency: 0.9,
            initial_soc: "full".to_string(),
        }
    }
}

/// Capacity sweep definition.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SweepSection {
    /// Candidate BESS capacities in MWh, swept in order.
    pub capacities_mwh: Vec<f32>,
}

impl Default for SweepSection {
    fn default() -> Self {
        Self {
            capacities_mwh: vec![
                500.0, 1000.0, 1500.0, 2000.0, 2200.0, 2250.0, 2500.0, 3000.0, 3500.0,
            ],
        }
    }
}

/// Generation profile sources.
///
/// When the CSV paths are absent, the binary falls back to seeded
/// synthetic profiles scaled to the peak fields below.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProfilesSection {
    /// Path to an 8760-row PV profile CSV (MW).
    pub pv_csv: Option<String>,
    /// Path to an 8760-row wind profile CSV (MW).
    pub wind_csv: Option<String>,
    /// Installed PV capacity used by the synthetic profile (MW).
    pub pv_peak_mw: f32,
    /// Installed wind capacity used by the synthetic profile (MW).
    pub wind_capacity_mw: f32,
    /// Seed for the synthetic profile generators.
    pub seed: u64,
}

impl Default for ProfilesSection {
    fn default() -> Self {
        Self {
            pv_csv: None,
            wind_csv: None,
            pv_peak_mw: 500.0,
            wind_capacity_mw: 1104.0,
            seed: 42,
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"bess.round_trip_efficiency"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {} — {}", self.field, self.message)
    }
}

impl ScenarioConfig {
    /// Returns the baseline scenario with the default study parameters.
    pub fn baseline() -> Self {
        Self {
            system: SystemConfig::default(),
            bess: BessSection::default(),
            sweep: SweepSection::default(),
            profiles: ProfilesSection::default(),
        }
    }

    /// Returns the large-PV preset: the 1000 MW PV comparison case.
    pub fn large_pv() -> Self {
        Self {
            profiles: ProfilesSection {
                pv_peak_mw: 1000.0,
                ..ProfilesSection::default()
            },
            ..Self::baseline()
        }
    }

    /// Returns the full-target preset: firm target raised to the full
    /// 1104 MW electrolyzer block with a wider sweep.
    pub fn full_target() -> Self {
        Self {
            system: SystemConfig {
                target_firm_mw: 1104.0,
                ..SystemConfig::default()
            },
            sweep: SweepSection {
                capacities_mwh: vec![0.0, 1000.0, 2000.0, 3000.0, 4000.0, 5000.0],
            },
            ..Self::baseline()
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["baseline", "large_pv", "full_target"];

    /// Loads a scenario from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "baseline" => Ok(Self::baseline()),
            "large_pv" => Ok(Self::large_pv()),
            "full_target" => Ok(Self::full_target()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a scenario from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "scenario".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a scenario from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        let sys = &self.system;
        if sys.target_firm_mw <= 0.0 {
            errors.push(ConfigError {
                field: "system.target_firm_mw".into(),
                message: "must be > 0".into(),
            });
        }
        if sys.hydro_mw < 0.0 {
            errors.push(ConfigError {
                field: "system.hydro_mw".into(),
                message: "must be >= 0".into(),
            });
        }
        if sys.hydro_floor_mw < 0.0 {
            errors.push(ConfigError {
                field: "system.hydro_floor_mw".into(),
                message: "must be >= 0".into(),
            });
        }

        let bess = &self.bess;
        if bess.max_charge_mw <= 0.0 {
            errors.push(ConfigError {
                field: "bess.max_charge_mw".into(),
                message: "must be > 0".into(),
            });
        }
        if bess.max_discharge_mw <= 0.0 {
            errors.push(ConfigError {
                field: "bess.max_discharge_mw".into(),
                message: "must be > 0".into(),
            });
        }
        if !(bess.round_trip_efficiency > 0.0 && bess.round_trip_efficiency <= 1.0) {
            errors.push(ConfigError {
                field: "bess.round_trip_efficiency".into(),
                message: "must be in (0, 1]".into(),
            });
        }
        if parse_initial_soc(&bess.initial_soc).is_none() {
            errors.push(ConfigError {
                field: "bess.initial_soc".into(),
                message: format!(
                    "must be \"empty\", \"half\", or \"full\", got \"{}\"",
                    bess.initial_soc
                ),
            });
        }

        if self.sweep.capacities_mwh.iter().any(|&c| c < 0.0) {
            errors.push(ConfigError {
                field: "sweep.capacities_mwh".into(),
                message: "capacities must be >= 0".into(),
            });
        }

        let prof = &self.profiles;
        if prof.pv_peak_mw < 0.0 {
            errors.push(ConfigError {
                field: "profiles.pv_peak_mw".into(),
                message: "must be >= 0".into(),
            });
        }
        if prof.wind_capacity_mw < 0.0 {
            errors.push(ConfigError {
                field: "profiles.wind_capacity_mw".into(),
                message: "must be >= 0".into(),
            });
        }

        errors
    }

    /// Builds the sweep-base [`BessConfig`] (capacity zero; the sweep
    /// substitutes each candidate capacity).
    pub fn bess_config(&self) -> BessConfig {
        BessConfig {
            capacity_mwh: 0.0,
            max_charge_mw: self.bess.max_charge_mw,
            max_discharge_mw: self.bess.max_discharge_mw,
            round_trip_efficiency: self.bess.round_trip_efficiency,
            target_firm_mw: self.system.target_firm_mw,
            hydro_floor_mw: self.system.hydro_floor_mw,
            initial_soc: parse_initial_soc(&self.bess.initial_soc).unwrap_or_default(),
        }
    }
}

fn parse_initial_soc(s: &str) -> Option<InitialSoc> {
    match s {
        "empty" => Some(InitialSoc::Empty),
        "half" => Some(InitialSoc::Half),
        "full" => Some(InitialSoc::Full),
        _ => None,
    }
}

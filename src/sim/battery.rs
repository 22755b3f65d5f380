//! BESS state-of-charge model used by the dispatch engine.

use super::types::BessConfig;

/// Mutable battery state for one simulation run.
///
/// Owned exclusively by a single [`simulate`](super::engine::simulate) call;
/// a fresh state is built per run so sweeps share nothing.
///
/// # Efficiency Convention
/// The full round-trip loss is applied on the charge path: drawing
/// `charge_mw` for one hour stores `charge_mw * eta` MWh, and discharging
/// is 1:1 (one stored MWh delivers one MWh). One fixed convention, applied
/// consistently.
#[derive(Debug, Clone)]
pub struct BatteryState {
    /// Energy capacity (MWh). Zero models the no-battery baseline.
    capacity_mwh: f32,
    /// Maximum charge power (MW).
    max_charge_mw: f32,
    /// Maximum discharge power (MW).
    max_discharge_mw: f32,
    /// Round-trip efficiency, applied on charge.
    eta: f32,
    /// Stored energy (MWh), kept within `[0, capacity_mwh]`.
    soc_mwh: f32,
}

impl BatteryState {
    /// Builds the run-initial battery state from a validated config.
    pub fn new(bess: &BessConfig) -> Self {
        Self {
            capacity_mwh: bess.capacity_mwh,
            max_charge_mw: bess.max_charge_mw,
            max_discharge_mw: bess.max_discharge_mw,
            eta: bess.round_trip_efficiency,
            soc_mwh: bess.initial_soc.soc_mwh(bess.capacity_mwh),
        }
    }

    /// Current stored energy (MWh).
    pub fn soc_mwh(&self) -> f32 {
        self.soc_mwh
    }

    /// Power the battery can deliver this hour (MW): rate- and SOC-limited.
    pub fn dischargeable_mw(&self) -> f32 {
        self.max_discharge_mw.min(self.soc_mwh)
    }

    /// Charges from surplus generation for one hour.
    ///
    /// Accepts up to `min(surplus, max_charge, headroom / eta)` MW and
    /// stores it with the efficiency loss applied. Returns the charge power
    /// actually drawn (before loss); the caller curtails the remainder.
    pub fn charge(&mut self, surplus_mw: f32) -> f32 {
        if surplus_mw <= 0.0 || self.capacity_mwh <= 0.0 {
            return 0.0;
        }
        let headroom_mwh = (self.capacity_mwh - self.soc_mwh).max(0.0);
        let charge_mw = surplus_mw
            .min(self.max_charge_mw)
            .min(headroom_mwh / self.eta);
        self.soc_mwh = (self.soc_mwh + charge_mw * self.eta).min(self.capacity_mwh);
        charge_mw
    }

    /// Discharges up to `demand_mw` for one hour, bounded by
    /// [`dischargeable_mw`](Self::dischargeable_mw). Returns the power
    /// delivered.
    pub fn discharge(&mut self, demand_mw: f32) -> f32 {
        let delivered_mw = demand_mw.min(self.dischargeable_mw()).max(0.0);
        self.soc_mwh -= delivered_mw;
        delivered_mw
    }
}

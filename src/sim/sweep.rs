//! Sweep aggregator: one dispatch run per candidate BESS capacity.

use std::fmt;

use super::engine::simulate;
use super::kpi::SweepResult;
use super::types::{BessConfig, HourlyInputs, SimError};

/// A sweep failure, carrying the capacity whose run failed.
///
/// The aggregator does not attempt per-capacity recovery: a misconfigured
/// sweep is a caller error, so the first failure aborts the remaining
/// iterations and no partial results are returned.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepError {
    /// The candidate capacity whose simulation failed (MWh).
    pub capacity_mwh: f32,
    /// The underlying engine failure.
    pub source: SimError,
}

impl fmt::Display for SweepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sweep failed at capacity {} MWh: {}",
            self.capacity_mwh, self.source
        )
    }
}

impl std::error::Error for SweepError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Runs the dispatch engine once per candidate capacity and reduces each
/// run to a [`SweepResult`], in input order.
///
/// Each run owns a fresh battery state, so results are independent of one
/// another and of the capacity ordering. An empty `capacities` slice
/// returns an empty vector without invoking the engine.
///
/// # Errors
///
/// Propagates the first engine failure as a [`SweepError`] with the
/// offending capacity attached.
pub fn sweep(
    inputs: &HourlyInputs,
    base: &BessConfig,
    capacities: &[f32],
) -> Result<Vec<SweepResult>, SweepError> {
    let mut results = Vec::with_capacity(capacities.len());
    for &capacity_mwh in capacities {
        let bess = base.with_capacity(capacity_mwh);
        let records = simulate(inputs, &bess).map_err(|source| SweepError {
            capacity_mwh,
            source,
        })?;
        results.push(SweepResult::from_records(
            capacity_mwh,
            bess.target_firm_mw,
            records,
        ));
    }
    Ok(results)
}

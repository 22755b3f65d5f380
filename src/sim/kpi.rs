//! Post-hoc reduction of hourly dispatch records into sizing KPIs.

use std::fmt;

use super::types::{HOURS_PER_DAY, HourlyDispatchRecord, Tier};

/// Summary of one dispatch run at a single BESS capacity.
///
/// Computed post-hoc from the complete hourly record vector so reported
/// metrics always agree with the exported hourly table. The records are
/// retained for dispatch-profile extraction and hourly export.
#[derive(Debug, Clone)]
pub struct SweepResult {
    /// Candidate BESS capacity this run was simulated with (MWh).
    pub capacity_mwh: f32,
    /// Delivered energy as a percentage of `target_firm_mw * hours`.
    pub capacity_factor_pct: f32,
    /// Calendar days (24-hour blocks) with all 24 hours at FIRM.
    pub full_days_count: usize,
    /// Curtailed energy as a percentage of all available generation.
    pub curtailment_pct: f32,
    /// Hours classified FIRM.
    pub hours_firm: usize,
    /// Hours classified SUPPLEMENTAL.
    pub hours_supplemental: usize,
    /// Hours classified SHUTDOWN.
    pub hours_shutdown: usize,
    /// Total energy delivered over the run (MWh).
    pub delivered_mwh: f32,
    /// Total energy curtailed over the run (MWh).
    pub curtailed_mwh: f32,
    /// The full hourly dispatch sequence for this capacity.
    pub records: Vec<HourlyDispatchRecord>,
}

impl SweepResult {
    /// Reduces a complete hourly record vector for one capacity.
    ///
    /// # Arguments
    ///
    /// * `capacity_mwh` - The swept capacity the records were produced with
    /// * `target_firm_mw` - Firm target used as the capacity-factor basis
    /// * `records` - Complete hourly dispatch records (takes ownership)
    pub fn from_records(
        capacity_mwh: f32,
        target_firm_mw: f32,
        records: Vec<HourlyDispatchRecord>,
    ) -> Self {
        let mut delivered_mwh = 0.0_f32;
        let mut curtailed_mwh = 0.0_f32;
        let mut available_mwh = 0.0_f32;
        let mut hours_firm = 0_usize;
        let mut hours_supplemental = 0_usize;
        let mut hours_shutdown = 0_usize;

        for r in &records {
            delivered_mwh += r.delivered_mw;
            curtailed_mwh += r.curtailed_mw;
            available_mwh += r.available_mw();
            match r.tier {
                Tier::Firm => hours_firm += 1,
                Tier::Supplemental => hours_supplemental += 1,
                Tier::Shutdown => hours_shutdown += 1,
            }
        }

        let theoretical_mwh = target_firm_mw * records.len() as f32;
        let capacity_factor_pct = if theoretical_mwh > 0.0 {
            100.0 * delivered_mwh / theoretical_mwh
        } else {
            0.0
        };
        let curtailment_pct = if available_mwh > 0.0 {
            100.0 * curtailed_mwh / available_mwh
        } else {
            0.0
        };

        let full_days_count = records
            .chunks(HOURS_PER_DAY)
            .filter(|day| day.len() == HOURS_PER_DAY && day.iter().all(|r| r.tier == Tier::Firm))
            .count();

        Self {
            capacity_mwh,
            capacity_factor_pct,
            full_days_count,
            curtailment_pct,
            hours_firm,
            hours_supplemental,
            hours_shutdown,
            delivered_mwh,
            curtailed_mwh,
            records,
        }
    }
}

impl fmt::Display for SweepResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BESS {:>7.0} MWh | CF {:>6.2}% | full days {:>3} | curtailment {:>6.2}% | \
             hours F/S/D {:>4}/{:>4}/{:>4}",
            self.capacity_mwh,
            self.capacity_factor_pct,
            self.full_days_count,
            self.curtailment_pct,
            self.hours_firm,
            self.hours_supplemental,
            self.hours_shutdown,
        )
    }
}

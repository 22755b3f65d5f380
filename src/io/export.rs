//! CSV export for hourly dispatch tables and sweep summaries.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::sim::kpi::SweepResult;
use crate::sim::types::HourlyDispatchRecord;

/// Column header for the hourly dispatch table export.
const HOURLY_HEADER: &str = "hour,tier,hydro_mw,pv_mw,wind_mw,delivered_mw,\
                             charge_mw,discharge_mw,soc_mwh,curtailed_mw";

/// Column header for the sweep summary export.
const SUMMARY_HEADER: &str = "capacity_mwh,capacity_factor_pct,full_days_count,\
                              curtailment_pct,hours_firm,hours_supplemental,\
                              hours_shutdown,delivered_mwh,curtailed_mwh";

/// Exports one capacity's hourly dispatch table to a CSV file.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_hourly_csv(records: &[HourlyDispatchRecord], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_hourly_csv(records, buf)
}

/// Writes an hourly dispatch table as CSV to any writer.
///
/// One row per hour in hour order; deterministic output for identical
/// inputs.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_hourly_csv(records: &[HourlyDispatchRecord], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HOURLY_HEADER.split(',').map(str::trim))?;
    for r in records {
        wtr.write_record(&[
            r.hour.to_string(),
            r.tier.as_str().to_string(),
            format!("{:.4}", r.hydro_mw),
            format!("{:.4}", r.pv_mw),
            format!("{:.4}", r.wind_mw),
            format!("{:.4}", r.delivered_mw),
            format!("{:.4}", r.charge_mw),
            format!("{:.4}", r.discharge_mw),
            format!("{:.4}", r.soc_mwh),
            format!("{:.4}", r.curtailed_mw),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Exports the sweep summary table (one row per capacity) to a CSV file.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_summary_csv(results: &[SweepResult], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_summary_csv(results, buf)
}

/// Writes the sweep summary table as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_summary_csv(results: &[SweepResult], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(SUMMARY_HEADER.split(',').map(str::trim))?;
    for s in results {
        wtr.write_record(&[
            format!("{:.1}", s.capacity_mwh),
            format!("{:.2}", s.capacity_factor_pct),
            s.full_days_count.to_string(),
            format!("{:.2}", s.curtailment_pct),
            s.hours_firm.to_string(),
            s.hours_supplemental.to_string(),
            s.hours_shutdown.to_string(),
            format!("{:.1}", s.delivered_mwh),
            format!("{:.1}", s.curtailed_mwh),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

//! Firm-power sweep entry point — CLI wiring and scenario-driven runs.

use std::path::Path;
use std::process;

use firm_sim::config::ScenarioConfig;
use firm_sim::io::export::{export_hourly_csv, export_summary_csv};
use firm_sim::io::loader::load_profile_csv;
use firm_sim::profiles::{synthetic_pv_year, synthetic_wind_year};
use firm_sim::sim::profile::representative_days;
use firm_sim::sim::sweep::sweep;
use firm_sim::sim::types::HourlyInputs;

/// Seed offset for the wind RNG to avoid correlation with the PV profile.
const WIND_SEED_OFFSET: u64 = 101;

/// Parsed CLI arguments.
struct CliArgs {
    scenario_path: Option<String>,
    preset: Option<String>,
    pv_path: Option<String>,
    wind_path: Option<String>,
    seed_override: Option<u64>,
    summary_out: Option<String>,
    hourly_out: Option<String>,
    hourly_capacity: Option<f32>,
}

fn print_help() {
    eprintln!("firm-sim — Firm-power dispatch and BESS capacity sweep");
    eprintln!();
    eprintln!("Usage: firm-sim [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --scenario <path>         Load scenario from TOML config file");
    eprintln!("  --preset <name>           Use a built-in preset (baseline, large_pv, full_target)");
    eprintln!("  --pv <path>               Hourly PV profile CSV, overrides the scenario");
    eprintln!("  --wind <path>             Hourly wind profile CSV, overrides the scenario");
    eprintln!("  --seed <u64>              Override synthetic-profile seed");
    eprintln!("  --summary-out <path>      Export the sweep summary to CSV");
    eprintln!("  --hourly-out <path>       Export one capacity's hourly dispatch to CSV");
    eprintln!("  --hourly-capacity <mwh>   Capacity for --hourly-out (default: last swept)");
    eprintln!("  --help                    Show this help message");
    eprintln!();
    eprintln!("If no --scenario or --preset is given, the baseline preset is used.");
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        scenario_path: None,
        preset: None,
        pv_path: None,
        wind_path: None,
        seed_override: None,
        summary_out: None,
        hourly_out: None,
        hourly_capacity: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--scenario" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --scenario requires a path argument");
                    process::exit(1);
                }
                cli.scenario_path = Some(args[i].clone());
            }
            "--preset" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --preset requires a name argument");
                    process::exit(1);
                }
                cli.preset = Some(args[i].clone());
            }
            "--pv" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --pv requires a path argument");
                    process::exit(1);
                }
                cli.pv_path = Some(args[i].clone());
            }
            "--wind" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --wind requires a path argument");
                    process::exit(1);
                }
                cli.wind_path = Some(args[i].clone());
            }
            "--seed" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --seed requires a u64 argument");
                    process::exit(1);
                }
                if let Ok(s) = args[i].parse::<u64>() {
                    cli.seed_override = Some(s);
                } else {
                    eprintln!("error: --seed value \"{}\" is not a valid u64", args[i]);
                    process::exit(1);
                }
            }
            "--summary-out" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --summary-out requires a path argument");
                    process::exit(1);
                }
                cli.summary_out = Some(args[i].clone());
            }
            "--hourly-out" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --hourly-out requires a path argument");
                    process::exit(1);
                }
                cli.hourly_out = Some(args[i].clone());
            }
            "--hourly-capacity" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --hourly-capacity requires a MWh argument");
                    process::exit(1);
                }
                if let Ok(c) = args[i].parse::<f32>() {
                    cli.hourly_capacity = Some(c);
                } else {
                    eprintln!(
                        "error: --hourly-capacity value \"{}\" is not a number",
                        args[i]
                    );
                    process::exit(1);
                }
            }
            other => {
                eprintln!("error: unknown argument \"{other}\"");
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    cli
}

/// Resolves the PV and wind profiles: CSV paths win, synthetic otherwise.
fn load_profiles(cli: &CliArgs, scenario: &ScenarioConfig) -> (Vec<f32>, Vec<f32>) {
    let prof = &scenario.profiles;
    let seed = cli.seed_override.unwrap_or(prof.seed);

    let pv_path = cli.pv_path.as_deref().or(prof.pv_csv.as_deref());
    let pv = match pv_path {
        Some(path) => match load_profile_csv(Path::new(path)) {
            Ok(values) => values,
            Err(e) => {
                eprintln!("error: PV {e}");
                process::exit(1);
            }
        },
        None => synthetic_pv_year(prof.pv_peak_mw, seed),
    };

    let wind_path = cli.wind_path.as_deref().or(prof.wind_csv.as_deref());
    let wind = match wind_path {
        Some(path) => match load_profile_csv(Path::new(path)) {
            Ok(values) => values,
            Err(e) => {
                eprintln!("error: wind {e}");
                process::exit(1);
            }
        },
        None => synthetic_wind_year(prof.wind_capacity_mw, seed.wrapping_add(WIND_SEED_OFFSET)),
    };

    (pv, wind)
}

fn main() {
    let cli = parse_args();

    // Load config: --scenario takes priority, then --preset, then baseline default
    let scenario = if let Some(ref path) = cli.scenario_path {
        match ScenarioConfig::from_toml_file(Path::new(path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else if let Some(ref name) = cli.preset {
        match ScenarioConfig::from_preset(name) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else {
        ScenarioConfig::baseline()
    };

    // Validate
    let errors = scenario.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    // Resolve profiles and build the hourly input series
    let (pv, wind) = load_profiles(&cli, &scenario);
    let inputs = HourlyInputs::from_profiles(&pv, &wind, scenario.system.hydro_mw);

    // Run the capacity sweep
    let base = scenario.bess_config();
    let results = match sweep(&inputs, &base, &scenario.sweep.capacities_mwh) {
        Ok(results) => results,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };

    // Print one summary row per capacity
    for r in &results {
        println!("{r}");
    }

    // Representative days for the largest capacity
    if let Some(last) = results.last() {
        if let Some(rep) = representative_days(&last.records) {
            println!();
            println!(
                "representative days at {:.0} MWh: typical day {} ({:.1} MWh renewables), \
                 low-renewable day {} ({:.1} MWh renewables)",
                last.capacity_mwh,
                rep.typical.day,
                rep.typical.renewable_mwh,
                rep.low_renewable.day,
                rep.low_renewable.renewable_mwh,
            );
        }
    }

    // Export the sweep summary if requested
    if let Some(ref path) = cli.summary_out {
        if let Err(e) = export_summary_csv(&results, Path::new(path)) {
            eprintln!("error: failed to write summary CSV: {e}");
            process::exit(1);
        }
        eprintln!("Summary written to {path}");
    }

    // Export one capacity's hourly dispatch if requested
    if let Some(ref path) = cli.hourly_out {
        let chosen = match cli.hourly_capacity {
            Some(cap) => results.iter().find(|r| r.capacity_mwh == cap),
            None => results.last(),
        };
        match chosen {
            Some(r) => {
                if let Err(e) = export_hourly_csv(&r.records, Path::new(path)) {
                    eprintln!("error: failed to write hourly CSV: {e}");
                    process::exit(1);
                }
                eprintln!("Hourly dispatch for {:.0} MWh written to {path}", r.capacity_mwh);
            }
            None => {
                eprintln!("error: --hourly-capacity does not match any swept capacity");
                process::exit(1);
            }
        }
    }
}

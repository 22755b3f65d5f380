//! Integration tests for the year-long dispatch engine.

mod common;

use firm_sim::sim::engine::simulate;
use firm_sim::sim::kpi::SweepResult;
use firm_sim::sim::types::{
    HOURS_PER_DAY, HOURS_PER_YEAR, HourlyGeneration, HourlyInputs, SimError, Tier,
};

#[test]
fn full_run_produces_one_record_per_hour() {
    let inputs = common::constant_year(250.0, 0.0, 0.0);
    let records = simulate(&inputs, &common::baseline_bess(0.0)).unwrap();
    assert_eq!(records.len(), HOURS_PER_YEAR);
    for (i, r) in records.iter().enumerate() {
        assert_eq!(r.hour, i);
    }
}

#[test]
fn hydro_only_year_runs_supplemental() {
    // 250 MW of hydro against an 1104 MW target, no battery: every hour
    // falls back to hydro-only delivery.
    let inputs = common::constant_year(250.0, 0.0, 0.0);
    let mut bess = common::baseline_bess(0.0);
    bess.target_firm_mw = 1104.0;

    let records = simulate(&inputs, &bess).unwrap();
    assert!(records.iter().all(|r| r.tier == Tier::Supplemental));
    assert!(records.iter().all(|r| r.delivered_mw == 250.0));

    let result = SweepResult::from_records(0.0, bess.target_firm_mw, records);
    assert!((result.capacity_factor_pct - 100.0 * 250.0 / 1104.0).abs() < 0.01);
    assert_eq!(result.full_days_count, 0);
}

#[test]
fn generation_above_target_runs_firm_with_curtailment() {
    // 1350 MW available against an 1104 MW target, no battery: FIRM every
    // hour, with the 246 MW surplus curtailed.
    let inputs = common::constant_year(250.0, 500.0, 600.0);
    let mut bess = common::baseline_bess(0.0);
    bess.target_firm_mw = 1104.0;

    let records = simulate(&inputs, &bess).unwrap();
    assert!(records.iter().all(|r| r.tier == Tier::Firm));
    assert!(records.iter().all(|r| (r.curtailed_mw - 246.0).abs() < 1e-2));

    let result = SweepResult::from_records(0.0, bess.target_firm_mw, records);
    assert!((result.capacity_factor_pct - 100.0).abs() < 1e-3);
    assert_eq!(result.full_days_count, 365);
    assert!((result.curtailment_pct - 100.0 * 246.0 / 1350.0).abs() < 0.01);
}

#[test]
fn hydro_below_floor_shuts_down() {
    // 100 MW of hydro is below the 250 MW floor: nothing is delivered.
    let inputs = common::constant_year(100.0, 0.0, 0.0);
    let records = simulate(&inputs, &common::baseline_bess(0.0)).unwrap();
    assert!(records.iter().all(|r| r.tier == Tier::Shutdown));
    assert!(records.iter().all(|r| r.delivered_mw == 0.0));
    // With no battery, everything available is curtailed.
    assert!(records.iter().all(|r| (r.curtailed_mw - 100.0).abs() < 1e-3));
}

#[test]
fn one_supplemental_hour_per_day_disqualifies_every_day() {
    // 23 FIRM hours and one hydro-only hour each day: zero full days.
    let hours: Vec<_> = (0..HOURS_PER_YEAR)
        .map(|hour| HourlyGeneration {
            hydro_mw: 250.0,
            pv_mw: if hour % HOURS_PER_DAY == 0 { 0.0 } else { 250.0 },
            wind_mw: 0.0,
        })
        .collect();
    let inputs = HourlyInputs::from_hourly(hours);

    let records = simulate(&inputs, &common::baseline_bess(0.0)).unwrap();
    let result = SweepResult::from_records(0.0, 500.0, records);
    assert_eq!(result.full_days_count, 0);
    assert_eq!(result.hours_firm, HOURS_PER_YEAR - 365);
    assert_eq!(result.hours_supplemental, 365);
}

#[test]
fn full_battery_bridges_exactly_its_capacity() {
    // Constant 250 MW deficit against a full 2000 MWh battery: eight FIRM
    // hours of 250 MW discharge, then hydro-only for the rest of the year.
    let inputs = common::constant_year(250.0, 0.0, 0.0);
    let records = simulate(&inputs, &common::baseline_bess(2000.0)).unwrap();

    for r in &records[..8] {
        assert_eq!(r.tier, Tier::Firm);
        assert!((r.discharge_mw - 250.0).abs() < 1e-3);
    }
    assert!(records[8..].iter().all(|r| r.tier == Tier::Supplemental));
    assert!((records[7].soc_mwh).abs() < 1e-3);
}

#[test]
fn soc_stays_within_capacity_bounds() {
    let inputs = common::diurnal_year(600.0);
    let records = simulate(&inputs, &common::baseline_bess(1000.0)).unwrap();
    for r in &records {
        assert!(
            r.soc_mwh >= -1e-3 && r.soc_mwh <= 1000.0 + 1e-3,
            "soc {} out of bounds at hour {}",
            r.soc_mwh,
            r.hour
        );
    }
}

#[test]
fn tier_delivery_levels_are_exact() {
    let inputs = common::diurnal_year(600.0);
    let records = simulate(&inputs, &common::baseline_bess(1000.0)).unwrap();
    for r in &records {
        match r.tier {
            Tier::Firm => assert_eq!(r.delivered_mw, 500.0),
            Tier::Supplemental => assert_eq!(r.delivered_mw, 250.0),
            Tier::Shutdown => assert_eq!(r.delivered_mw, 0.0),
        }
    }
}

#[test]
fn hourly_power_balance_holds() {
    // Every hour: available + discharge == delivered + charge + curtailed.
    let inputs = common::diurnal_year(600.0);
    let records = simulate(&inputs, &common::baseline_bess(1500.0)).unwrap();
    for r in &records {
        let in_mw = r.available_mw() + r.discharge_mw;
        let out_mw = r.delivered_mw + r.charge_mw + r.curtailed_mw;
        assert!(
            (in_mw - out_mw).abs() < 1e-2,
            "power imbalance at hour {}: in={in_mw} out={out_mw}",
            r.hour
        );
    }
}

#[test]
fn determinism_two_identical_runs_produce_identical_records() {
    let inputs = common::diurnal_year(600.0);
    let bess = common::baseline_bess(1000.0);
    let records1 = simulate(&inputs, &bess).unwrap();
    let records2 = simulate(&inputs, &bess).unwrap();

    assert_eq!(records1.len(), records2.len());
    for (r1, r2) in records1.iter().zip(records2.iter()) {
        assert_eq!(r1.tier, r2.tier);
        assert_eq!(r1.delivered_mw, r2.delivered_mw);
        assert_eq!(r1.charge_mw, r2.charge_mw);
        assert_eq!(r1.discharge_mw, r2.discharge_mw);
        assert_eq!(r1.soc_mwh, r2.soc_mwh);
        assert_eq!(r1.curtailed_mw, r2.curtailed_mw);
    }
}

#[test]
fn wrong_length_input_is_rejected() {
    let inputs = HourlyInputs::from_hourly(vec![
        HourlyGeneration {
            hydro_mw: 250.0,
            pv_mw: 0.0,
            wind_mw: 0.0,
        };
        100
    ]);
    let err = simulate(&inputs, &common::baseline_bess(0.0)).unwrap_err();
    assert!(matches!(err, SimError::InvalidInput { hour: None, .. }));
}

#[test]
fn negative_generation_names_the_hour() {
    let mut inputs = common::constant_year(250.0, 0.0, 0.0);
    inputs.hours[17].pv_mw = -1.0;
    let err = simulate(&inputs, &common::baseline_bess(0.0)).unwrap_err();
    match err {
        SimError::InvalidInput { hour, message } => {
            assert_eq!(hour, Some(17));
            assert!(message.contains("pv_mw"));
        }
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn bad_efficiency_is_rejected() {
    let inputs = common::constant_year(250.0, 0.0, 0.0);
    let mut bess = common::baseline_bess(1000.0);
    bess.round_trip_efficiency = 1.5;
    let err = simulate(&inputs, &bess).unwrap_err();
    assert!(matches!(
        err,
        SimError::InvalidConfig {
            field: "round_trip_efficiency",
            ..
        }
    ));
}

#[test]
fn negative_capacity_is_rejected_but_zero_is_not() {
    let inputs = common::constant_year(250.0, 0.0, 0.0);

    let mut bess = common::baseline_bess(-1.0);
    assert!(simulate(&inputs, &bess).is_err());

    bess.capacity_mwh = 0.0;
    assert!(simulate(&inputs, &bess).is_ok());
}

//! Maintenance-records tests: sort order, the pending-order tail,
//! and per-type cost/downtime envelopes.

use chrono::{Duration, NaiveDate};
use waterdemo_core::{
    config::GenConfig,
    maintenance::{MaintenanceGenerator, MaintenanceRecord, ASSET_TYPES},
    rng::{GeneratorSlot, RngBank},
};

fn generate(seed: u64) -> (GenConfig, Vec<MaintenanceRecord>) {
    let config = GenConfig {
        seed,
        ..GenConfig::default()
    };
    let mut rng = RngBank::new(seed).for_generator(GeneratorSlot::Maintenance);
    let records = MaintenanceGenerator::generate(&config, &mut rng);
    (config, records)
}

fn period_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

#[test]
fn output_is_sorted_by_maintenance_date() {
    let (_, records) = generate(42);
    assert!(!records.is_empty());
    for pair in records.windows(2) {
        assert!(
            pair[0].maintenance_date <= pair[1].maintenance_date,
            "records out of order: {} after {}",
            pair[0].maintenance_date,
            pair[1].maintenance_date
        );
    }
}

#[test]
fn pending_orders_sit_past_the_horizon_with_null_operational_fields() {
    let (config, records) = generate(42);
    let horizon = period_start() + Duration::days(config.horizon_days());

    let pending: Vec<_> = records
        .iter()
        .filter(|r| r.completed == "Scheduled")
        .collect();
    assert_eq!(pending.len(), config.pending_work_orders as usize);

    for r in pending {
        assert!(r.maintenance_date > horizon, "scheduled in the past: {}", r.maintenance_date);
        assert!(r.maintenance_date <= horizon + Duration::days(40));
        assert_eq!(r.maintenance_type, "Preventive");
        assert_eq!(r.priority, "Normal");
        assert!(r.install_date.is_none());
        assert!(r.age_years.is_none());
        assert!(r.failure_mode.is_none());
        assert!(r.downtime_hours.is_none());
        assert!(r.cost_usd.is_none());
        assert!(r.parts_replaced.is_none());
        assert!(ASSET_TYPES.contains(&r.asset_type));
    }
}

#[test]
fn history_fields_are_complete_and_inside_their_envelopes() {
    let (config, records) = generate(42);
    let start = period_start();
    let horizon = start + Duration::days(config.horizon_days());

    for r in records.iter().filter(|r| r.completed == "Yes") {
        let install = r.install_date.expect("history has install date");
        assert!(install >= start - Duration::days(3650));
        assert!(install <= start - Duration::days(365));
        assert!(r.maintenance_date <= horizon);
        assert!(r.maintenance_date > install);
        assert!(r.age_years.expect("history has age") > 0.0);
        assert!(r.asset_id.starts_with(r.asset_type));

        let is_failure = matches!(r.maintenance_type, "Corrective" | "Emergency");
        assert_eq!(
            r.failure_mode.is_some(),
            is_failure,
            "failure mode only accompanies corrective/emergency work"
        );
        if !is_failure {
            assert_eq!(r.parts_replaced, Some(false));
        }

        let downtime = r.downtime_hours.expect("history has downtime");
        let cost = r.cost_usd.expect("history has cost");
        match r.maintenance_type {
            "Emergency" => {
                assert!((4.0..=48.0).contains(&downtime));
                assert!((5000.0..=25000.0).contains(&cost));
                assert_eq!(r.priority, "Critical");
            }
            "Corrective" => {
                assert!((1.0..=12.0).contains(&downtime));
                assert!((1000.0..=8000.0).contains(&cost));
                assert_eq!(r.priority, "High");
            }
            "Preventive" => {
                assert!((0.5..=4.0).contains(&downtime));
                assert!((200.0..=1500.0).contains(&cost));
                assert_eq!(r.priority, "Normal");
            }
            _ => {
                assert!((0.2..=2.0).contains(&downtime));
                assert!((100.0..=500.0).contains(&cost));
                assert_eq!(r.priority, "Normal");
            }
        }
    }
}

#[test]
fn every_asset_type_produces_history() {
    let (_, records) = generate(42);
    for asset_type in ASSET_TYPES {
        let count = records
            .iter()
            .filter(|r| r.asset_type == asset_type && r.completed == "Yes")
            .count();
        // 80-150 assets with up to 20 events each; even the sparsest
        // type lands well into the hundreds.
        assert!(count > 50, "{asset_type}: only {count} events");
    }
}

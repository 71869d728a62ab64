//! Network-performance tests: clamps, NRW accounting, the Zone-C leak
//! progression, and the two pressure anomalies.

use chrono::Datelike;
use waterdemo_core::{
    config::GenConfig,
    network::{NetworkGenerator, NetworkRecord, PRESSURE_ZONES},
    rng::{GeneratorSlot, RngBank},
};

fn generate(seed: u64, months: u32) -> Vec<NetworkRecord> {
    let config = GenConfig {
        months,
        ..GenConfig::default()
    };
    let mut rng = RngBank::new(seed).for_generator(GeneratorSlot::Network);
    NetworkGenerator::generate(&config, &mut rng)
}

#[test]
fn row_count_is_hours_times_zones() {
    let records = generate(42, 1);
    assert_eq!(records.len(), 30 * 24 * PRESSURE_ZONES.len());
}

#[test]
fn clamps_and_nrw_accounting_hold_everywhere() {
    for r in generate(42, 8) {
        assert!(r.flow_rate_gpm >= 0.0);
        assert!((20.0..=100.0).contains(&r.pressure_psi), "pressure {}", r.pressure_psi);
        assert!(
            r.billed_consumption_gpm >= 0.0
                && r.billed_consumption_gpm <= r.flow_rate_gpm,
            "consumption {} exceeds flow {}",
            r.billed_consumption_gpm,
            r.flow_rate_gpm
        );
        assert!(
            (r.flow_rate_gpm - r.billed_consumption_gpm - r.nrw_gpm).abs() < 1e-6,
            "nrw volume is not flow minus consumption"
        );
        assert!((0.0..=100.0).contains(&r.nrw_percent), "nrw% {}", r.nrw_percent);
        assert_eq!(
            r.pressure_compliant,
            (40.0..=80.0).contains(&r.pressure_psi)
        );
    }
}

#[test]
fn zone_c_leak_grows_flow_and_nrw_through_the_summer() {
    let records = generate(42, 8);

    let zone_c_mean = |month: u32, f: fn(&NetworkRecord) -> f64| {
        let values: Vec<_> = records
            .iter()
            .filter(|r| r.zone == "Zone-C-South" && r.timestamp.month() == month)
            .map(f)
            .collect();
        values.iter().sum::<f64>() / values.len() as f64
    };

    // June is summer but pre-leak; August carries 31-61 days of a leak
    // growing at 2 gpm/day.
    let june_flow = zone_c_mean(6, |r| r.flow_rate_gpm);
    let august_flow = zone_c_mean(8, |r| r.flow_rate_gpm);
    assert!(
        august_flow > june_flow + 50.0,
        "leak should raise August flow: june {june_flow:.1}, august {august_flow:.1}"
    );

    let june_nrw = zone_c_mean(6, |r| r.nrw_percent);
    let august_nrw = zone_c_mean(8, |r| r.nrw_percent);
    assert!(
        august_nrw > june_nrw + 5.0,
        "leak should worsen NRW: june {june_nrw:.1}%, august {august_nrw:.1}%"
    );
}

#[test]
fn pressure_anomalies_separate_the_two_problem_zones() {
    let records = generate(42, 8);

    let mean_pressure = |zone: &str| {
        let values: Vec<_> = records
            .iter()
            .filter(|r| r.zone == zone)
            .map(|r| r.pressure_psi)
            .collect();
        values.iter().sum::<f64>() / values.len() as f64
    };

    let baseline = mean_pressure("Zone-B-North");
    let downtown = mean_pressure("Zone-A-Downtown");
    let hills = mean_pressure("Zone-H-Hills");

    assert!(
        downtown > baseline + 10.0,
        "downtown should run over-pressured: {downtown:.1} vs {baseline:.1}"
    );
    assert!(
        hills < baseline - 5.0,
        "hills should run under-pressured: {hills:.1} vs {baseline:.1}"
    );
}

#[test]
fn nrw_percent_defaults_to_zero_when_flow_is_zero() {
    // Zero flow never occurs with the default bases, so check the
    // guard at the record level: every stored percentage is finite.
    for r in generate(42, 1) {
        assert!(r.nrw_percent.is_finite());
    }
}

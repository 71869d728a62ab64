//! THE MOST IMPORTANT TEST IN THE PROJECT.
//!
//! Two engines, same seed, same configuration.
//! They must produce byte-identical output files, manifest included.
//! Any divergence is a blocker — do not merge until fixed.

use std::fs;
use std::path::PathBuf;
use waterdemo_core::{
    config::GenConfig,
    engine::DatasetEngine,
    quality::QualityGenerator,
    rng::{GeneratorSlot, RngBank},
};

fn temp_out(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!("waterdemo-{tag}-{}", std::process::id()))
}

fn small_config(seed: u64, out_dir: PathBuf) -> GenConfig {
    GenConfig {
        seed,
        out_dir,
        months: 1,
        customers: 120,
        complaints: 60,
        pending_work_orders: 5,
    }
}

#[test]
fn same_seed_produces_byte_identical_files() {
    let _ = env_logger::builder().is_test(true).try_init();
    const SEED: u64 = 0xDEAD_BEEF_CAFE_1234;

    let dir_a = temp_out("det-a");
    let dir_b = temp_out("det-b");
    DatasetEngine::build(small_config(SEED, dir_a.clone()))
        .run_all()
        .expect("run a");
    DatasetEngine::build(small_config(SEED, dir_b.clone()))
        .run_all()
        .expect("run b");

    let mut names: Vec<_> = fs::read_dir(&dir_a)
        .expect("read dir a")
        .map(|e| e.expect("dir entry").file_name())
        .collect();
    names.sort();
    // Six datasets plus the manifest.
    assert_eq!(names.len(), 7, "expected 7 output files, got {names:?}");

    for name in &names {
        let a = fs::read(dir_a.join(name)).expect("read a");
        let b = fs::read(dir_b.join(name)).expect("read b");
        assert_eq!(a, b, "output {name:?} diverged between identical seeds");
    }

    fs::remove_dir_all(&dir_a).ok();
    fs::remove_dir_all(&dir_b).ok();
}

#[test]
fn manifest_record_counts_match_the_csv_files() {
    let dir = temp_out("manifest");
    let summaries = DatasetEngine::build(small_config(42, dir.clone()))
        .run_all()
        .expect("run");

    let manifest: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(dir.join("manifest.json")).expect("read manifest"),
    )
    .expect("parse manifest");

    let datasets = manifest["datasets"].as_array().expect("datasets array");
    assert_eq!(datasets.len(), summaries.len());

    let mut total = 0u64;
    for entry in datasets {
        let file = entry["file"].as_str().expect("file name");
        let records = entry["records"].as_u64().expect("record count");
        let lines = fs::read_to_string(dir.join(file))
            .expect("read dataset")
            .lines()
            .count() as u64;
        // One header row, then one line per record.
        assert_eq!(records, lines - 1, "{file}");
        total += records;
    }
    assert_eq!(manifest["total_records"].as_u64(), Some(total));

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn different_seeds_produce_different_data() {
    let config = GenConfig {
        months: 1,
        ..GenConfig::default()
    };

    let mut rng_a = RngBank::new(42).for_generator(GeneratorSlot::Quality);
    let mut rng_b = RngBank::new(99).for_generator(GeneratorSlot::Quality);
    let records_a = QualityGenerator::generate(&config, &mut rng_a);
    let records_b = QualityGenerator::generate(&config, &mut rng_b);

    assert_eq!(records_a.len(), records_b.len());
    assert_ne!(
        records_a, records_b,
        "different seeds produced identical readings — seed is not being used"
    );
}

#[test]
fn generator_streams_are_independent_of_each_other() {
    // The quality stream must not shift when other generators draw
    // from the bank first, or at all.
    let config = GenConfig {
        months: 1,
        ..GenConfig::default()
    };

    let bank = RngBank::new(7);
    let mut fresh = bank.for_generator(GeneratorSlot::Quality);
    let direct = QualityGenerator::generate(&config, &mut fresh);

    let mut network_rng = bank.for_generator(GeneratorSlot::Network);
    network_rng.next_f64();
    let mut again = bank.for_generator(GeneratorSlot::Quality);
    let after_other_draws = QualityGenerator::generate(&config, &mut again);

    assert_eq!(direct, after_other_draws);
}

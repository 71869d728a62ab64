//! dataset-gen: headless generator for the water-utility demo datasets.
//!
//! Runs the canonical configuration — seed 42, eight synthetic months,
//! all six datasets written to ./data. No flags and no environment
//! variables change the output; rerunning produces byte-identical
//! files.

use anyhow::Result;
use waterdemo_core::{config::GenConfig, engine::DatasetEngine};

fn main() -> Result<()> {
    env_logger::init();

    let config = GenConfig::default();
    println!("Water-utility demo — dataset generator");
    println!("  seed:    {}", config.seed);
    println!(
        "  period:  {} months ({} hours from 2024-01-01)",
        config.months,
        config.hours()
    );
    println!("  out dir: {}", config.out_dir.display());
    println!();

    let engine = DatasetEngine::build(config);
    let summaries = engine.run_all()?;

    println!("=== GENERATION SUMMARY ===");
    let mut total = 0usize;
    for summary in &summaries {
        println!(
            "  {:<22} {:>9} records -> {}",
            summary.name, summary.records, summary.file
        );
        total += summary.records;
    }
    println!("  total records: {total}");
    Ok(())
}

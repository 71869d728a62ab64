//! The dataset engine — wires the six generators together.
//!
//! EXECUTION ORDER (fixed, documented, never reordered):
//!   1. Water quality
//!   2. Network performance
//!   3. Energy usage
//!   4. Maintenance records
//!   5. Customer consumption
//!   6. Customer complaints
//!
//! RULES:
//!   - Generators execute sequentially, in registration order.
//!   - No generator reads another generator's output.
//!   - All randomness flows through the RngBank, one derived stream
//!     per generator, so dropping or adding a generator never changes
//!     the bytes any other generator produces.

use crate::{
    complaints::ComplaintsGenerator,
    config::GenConfig,
    consumption::ConsumptionGenerator,
    energy::EnergyGenerator,
    error::GenResult,
    generator::DatasetGenerator,
    maintenance::MaintenanceGenerator,
    network::NetworkGenerator,
    output,
    quality::QualityGenerator,
    rng::{GeneratorSlot, RngBank},
};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct DatasetSummary {
    pub name: &'static str,
    pub file: &'static str,
    pub records: usize,
}

/// Run metadata written alongside the datasets. Deliberately free of
/// timestamps and paths so reruns with the same seed stay
/// byte-identical.
#[derive(Debug, Serialize)]
struct RunManifest<'a> {
    generator_version: &'static str,
    config: &'a GenConfig,
    datasets: &'a [DatasetSummary],
    total_records: usize,
}

pub struct DatasetEngine {
    config: GenConfig,
    rng_bank: RngBank,
    generators: Vec<(GeneratorSlot, Box<dyn DatasetGenerator>)>,
}

impl DatasetEngine {
    pub fn new(config: GenConfig) -> Self {
        let rng_bank = RngBank::new(config.seed);
        Self {
            config,
            rng_bank,
            generators: Vec::new(),
        }
    }

    /// Build a fully wired engine with all six generators registered.
    /// Call this instead of new() + manual register() calls.
    pub fn build(config: GenConfig) -> Self {
        let mut engine = Self::new(config);
        engine.register(GeneratorSlot::Quality, Box::new(QualityGenerator));
        engine.register(GeneratorSlot::Network, Box::new(NetworkGenerator));
        engine.register(GeneratorSlot::Energy, Box::new(EnergyGenerator));
        engine.register(GeneratorSlot::Maintenance, Box::new(MaintenanceGenerator));
        engine.register(GeneratorSlot::Consumption, Box::new(ConsumptionGenerator));
        engine.register(GeneratorSlot::Complaints, Box::new(ComplaintsGenerator));
        engine
    }

    /// Register a generator. Call in the documented execution order.
    pub fn register(&mut self, slot: GeneratorSlot, generator: Box<dyn DatasetGenerator>) {
        self.generators.push((slot, generator));
    }

    pub fn config(&self) -> &GenConfig {
        &self.config
    }

    /// Run every registered generator, then write the run manifest.
    /// Output files replace whatever was there before.
    pub fn run_all(&self) -> GenResult<Vec<DatasetSummary>> {
        output::ensure_dir(&self.config.out_dir)?;

        let mut summaries = Vec::with_capacity(self.generators.len());
        for (slot, generator) in &self.generators {
            let mut rng = self.rng_bank.for_generator(*slot);
            log::info!("generator={} starting", generator.name());
            let records = generator.run(&self.config, &mut rng, &self.config.out_dir)?;
            log::info!(
                "generator={} wrote {records} records to {}",
                generator.name(),
                generator.file_name()
            );
            summaries.push(DatasetSummary {
                name: generator.name(),
                file: generator.file_name(),
                records,
            });
        }

        self.write_manifest(&summaries)?;
        Ok(summaries)
    }

    fn write_manifest(&self, summaries: &[DatasetSummary]) -> GenResult<()> {
        let manifest = RunManifest {
            generator_version: env!("CARGO_PKG_VERSION"),
            config: &self.config,
            datasets: summaries,
            total_records: summaries.iter().map(|s| s.records).sum(),
        };
        let json = serde_json::to_string_pretty(&manifest)?;
        std::fs::write(self.config.out_dir.join("manifest.json"), json)?;
        Ok(())
    }
}

//! Generator trait and contract.
//!
//! RULE: Every dataset generator implements DatasetGenerator.
//! The engine calls run() on each registered generator exactly once,
//! in slot order. A generator builds its full dataset in memory,
//! sorts it where the dataset defines an order, and writes it in a
//! single pass.

use crate::{config::GenConfig, error::GenResult, rng::GeneratorRng};
use std::path::Path;

pub trait DatasetGenerator: Send {
    /// Unique stable name for this generator.
    fn name(&self) -> &'static str;

    /// Output file name under the run's output directory.
    fn file_name(&self) -> &'static str;

    /// Generate, sort, and write the dataset. Returns the row count.
    fn run(
        &self,
        config: &GenConfig,
        rng: &mut GeneratorRng,
        out_dir: &Path,
    ) -> GenResult<usize>;
}

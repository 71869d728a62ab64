//! Run configuration.
//!
//! The canonical demo shape is `GenConfig::default()`. Tests shrink the
//! period and the populations to keep runs fast; everything else about
//! the generation arithmetic is fixed in the generator modules.

use crate::types::DayOffset;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenConfig {
    /// Master seed. Every generator stream derives from this.
    pub seed: u64,
    /// Output directory, created on demand. Excluded from the manifest
    /// so identical seeds produce byte-identical output anywhere.
    #[serde(skip)]
    pub out_dir: PathBuf,
    /// Period length in 30-day synthetic months, at most 12. The period
    /// always starts 2024-01-01.
    pub months: u32,
    /// Customer population for the consumption dataset. Complaint
    /// customer IDs are drawn from the same range.
    pub customers: u32,
    /// Number of complaint tickets.
    pub complaints: u32,
    /// Number of pending (scheduled, incomplete) work orders appended
    /// to the maintenance dataset.
    pub pending_work_orders: u32,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            out_dir: PathBuf::from("data"),
            months: 8,
            customers: 5000,
            complaints: 2000,
            pending_work_orders: 50,
        }
    }
}

impl GenConfig {
    /// Hours in the synthetic period.
    pub fn hours(&self) -> u64 {
        self.months as u64 * 30 * 24
    }

    /// Days in the synthetic period.
    pub fn horizon_days(&self) -> DayOffset {
        self.months as i64 * 30
    }
}

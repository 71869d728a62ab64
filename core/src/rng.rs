//! Deterministic random number generation.
//!
//! RULE: Nothing in the generators may call any platform RNG.
//! All randomness flows through GeneratorRng instances derived
//! from the single master seed in the run configuration.
//!
//! Each generator gets its own RNG stream, seeded deterministically
//! from (master_seed XOR generator_slot). This means:
//!   - Adding a new generator never changes existing datasets.
//!   - Each dataset's stream is fully reproducible in isolation.

use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;
use std::f64::consts::TAU;

/// A named, deterministic RNG for a single dataset generator.
pub struct GeneratorRng {
    pub name: &'static str,
    inner: Pcg64Mcg,
}

impl GeneratorRng {
    /// Create a generator RNG from the master seed and a stable
    /// slot index. The index must never change once assigned.
    pub fn new(master_seed: u64, slot_index: u64) -> Self {
        let derived_seed = master_seed ^ (slot_index.wrapping_mul(0x9e37_79b9_7f4a_7c15));
        Self {
            name: "unnamed",
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        use rand::RngCore;
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Roll a u64 in [0, n).
    pub fn next_u64_below(&mut self, n: u64) -> u64 {
        use rand::RngCore;
        assert!(n > 0, "n must be > 0");
        self.inner.next_u64() % n
    }

    /// Bernoulli trial: returns true with probability p.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Uniform float in [lo, hi).
    pub fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    /// Uniform integer in [lo, hi], both endpoints included.
    pub fn int_between(&mut self, lo: i64, hi: i64) -> i64 {
        debug_assert!(lo <= hi, "int_between({lo}, {hi})");
        lo + self.next_u64_below((hi - lo + 1) as u64) as i64
    }

    /// Sample a normal distribution via Box-Muller. Consumes exactly
    /// two uniform draws per call, so stream positions stay stable.
    pub fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-12);
        let u2 = self.next_f64();
        mean + std_dev * (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos()
    }

    /// Pick one element uniformly.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.next_u64_below(items.len() as u64) as usize]
    }

    /// Weighted categorical draw by cumulative scan. Weights need not
    /// sum to 1; they are normalized by their total.
    pub fn pick_weighted<'a, T>(&mut self, items: &'a [T], weights: &[f64]) -> &'a T {
        debug_assert_eq!(items.len(), weights.len());
        let total: f64 = weights.iter().sum();
        let roll = self.next_f64() * total;
        let mut cumulative = 0.0;
        for (item, weight) in items.iter().zip(weights) {
            cumulative += weight;
            if roll < cumulative {
                return item;
            }
        }
        items.last().expect("pick_weighted on empty slice")
    }
}

/// All generator RNGs for a single run, indexed by stable slot.
pub struct RngBank {
    master_seed: u64,
}

impl RngBank {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn for_generator(&self, slot: GeneratorSlot) -> GeneratorRng {
        GeneratorRng::new(self.master_seed, slot as u64).with_name(slot.name())
    }
}

/// Stable generator slot assignments.
/// NEVER reorder or remove entries — only append.
/// Reordering changes every dataset's stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum GeneratorSlot {
    Quality = 0,
    Network = 1,
    Energy = 2,
    Maintenance = 3,
    Consumption = 4,
    Complaints = 5,
    // Add new generators here — append only.
}

impl GeneratorSlot {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Quality => "water_quality",
            Self::Network => "network_performance",
            Self::Energy => "energy_usage",
            Self::Maintenance => "maintenance_records",
            Self::Consumption => "customer_consumption",
            Self::Complaints => "customer_complaints",
        }
    }
}

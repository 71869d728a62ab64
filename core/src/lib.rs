//! waterdemo-core — procedural generation of synthetic water-utility
//! operational datasets.
//!
//! Six independent generators, each producing one flat CSV dataset:
//! hourly water-quality readings, distribution-network flow/pressure,
//! facility energy usage, asset maintenance history, monthly customer
//! billing, and customer-complaint tickets.
//!
//! RULES:
//!   - Generation is fully deterministic: one master seed, one derived
//!     RNG stream per generator. Same seed, same bytes on disk.
//!   - Generators run sequentially and never read each other's output.
//!   - Every numeric field is clamped and rounded to its storage
//!     precision before any derived flag is computed from it.

pub mod complaints;
pub mod config;
pub mod consumption;
pub mod energy;
pub mod engine;
pub mod error;
pub mod generator;
pub mod maintenance;
pub mod network;
pub mod output;
pub mod period;
pub mod quality;
pub mod rng;
pub mod types;

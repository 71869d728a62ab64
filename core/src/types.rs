//! Shared primitive types used across all generators.

/// Index of an hour within the synthetic period, starting at 0.
pub type HourIndex = u64;

/// Whole days relative to the period start. Negative values point
/// before the period (asset install dates).
pub type DayOffset = i64;

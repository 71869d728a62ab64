//! Fixed-point date arithmetic over the synthetic period.
//!
//! The period starts 2024-01-01 00:00 and runs for a whole number of
//! 30-day months. All calendar-driven patterns (rush hours, weekly
//! demand dips, summer) are derived from these helpers so every
//! generator agrees on what a timestamp means.

use crate::types::HourIndex;
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};

/// First instant of the synthetic period: 2024-01-01 00:00:00.
pub fn period_start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .expect("period start date is valid")
        .and_hms_opt(0, 0, 0)
        .expect("period start time is valid")
}

/// Timestamp of the given hour within the period.
pub fn hour_timestamp(hour: HourIndex) -> NaiveDateTime {
    period_start() + Duration::hours(hour as i64)
}

/// June through August drive the seasonal adjustments.
pub fn is_summer(ts: &NaiveDateTime) -> bool {
    matches!(ts.month(), 6..=8)
}

/// Friday and Saturday carry the reduced-demand weekly pattern.
pub fn is_low_demand_day(ts: &NaiveDateTime) -> bool {
    matches!(ts.weekday(), Weekday::Fri | Weekday::Sat)
}

pub fn fmt_timestamp(ts: &NaiveDateTime) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}

pub fn fmt_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

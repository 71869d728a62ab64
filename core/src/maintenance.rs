//! Maintenance-records generator — event history per asset plus a tail
//! of pending work orders.
//!
//! Each asset walks a last-maintenance pointer forward by a random
//! interval until it passes the period horizon. Short intervals skew
//! toward corrective and emergency work; long intervals toward
//! preventive. Assets past ten years of age get an extra failure bias
//! regardless of interval. The full set is sorted by maintenance date
//! before output.

use crate::{
    config::GenConfig,
    error::GenResult,
    generator::DatasetGenerator,
    output::{self, round_to, CsvRecord},
    period,
    rng::GeneratorRng,
};
use chrono::{Duration, NaiveDate};
use std::io::Write;
use std::path::Path;

pub const ASSET_TYPES: [&str; 8] = [
    "Pump",
    "Valve",
    "Motor",
    "Pipe-Section",
    "Chlorinator",
    "Filter",
    "Sensor",
    "Meter",
];

const MAINTENANCE_TYPES: [&str; 5] = [
    "Preventive",
    "Corrective",
    "Emergency",
    "Inspection",
    "Calibration",
];

const FAILURE_MODES: [&str; 9] = [
    "Bearing-Failure",
    "Seal-Leak",
    "Corrosion",
    "Electrical-Fault",
    "Blockage",
    "Wear",
    "Calibration-Drift",
    "Software-Error",
    "Mechanical-Break",
];

// Type-selection weights over MAINTENANCE_TYPES, keyed by the interval
// since the previous event.
const WEIGHTS_SHORT_INTERVAL: [f64; 5] = [10.0, 40.0, 40.0, 5.0, 5.0];
const WEIGHTS_MID_INTERVAL: [f64; 5] = [60.0, 30.0, 5.0, 3.0, 2.0];
const WEIGHTS_LONG_INTERVAL: [f64; 5] = [70.0, 20.0, 5.0, 3.0, 2.0];

#[derive(Debug, Clone, PartialEq)]
pub struct MaintenanceRecord {
    pub asset_id: String,
    pub asset_type: &'static str,
    pub install_date: Option<NaiveDate>,
    pub age_years: Option<f64>,
    pub maintenance_date: NaiveDate,
    pub maintenance_type: &'static str,
    pub failure_mode: Option<&'static str>,
    pub downtime_hours: Option<f64>,
    pub cost_usd: Option<f64>,
    pub parts_replaced: Option<bool>,
    pub priority: &'static str,
    /// "Yes" for history, "Scheduled" for pending work orders.
    pub completed: &'static str,
}

impl CsvRecord for MaintenanceRecord {
    fn header() -> &'static [&'static str] {
        &[
            "asset_id",
            "asset_type",
            "install_date",
            "age_years",
            "maintenance_date",
            "maintenance_type",
            "failure_mode",
            "downtime_hours",
            "cost_usd",
            "parts_replaced",
            "priority",
            "completed",
        ]
    }

    fn write_row(&self, out: &mut dyn Write) -> std::io::Result<()> {
        let install = self
            .install_date
            .map(|d| period::fmt_date(&d))
            .unwrap_or_default();
        let age = self.age_years.map(|v| format!("{v:.1}")).unwrap_or_default();
        let downtime = self
            .downtime_hours
            .map(|v| format!("{v:.1}"))
            .unwrap_or_default();
        let cost = self.cost_usd.map(|v| format!("{v:.2}")).unwrap_or_default();
        let parts = self
            .parts_replaced
            .map(output::yes_no)
            .unwrap_or_default();
        writeln!(
            out,
            "{},{},{},{},{},{},{},{},{},{},{},{}",
            self.asset_id,
            self.asset_type,
            install,
            age,
            period::fmt_date(&self.maintenance_date),
            self.maintenance_type,
            self.failure_mode.unwrap_or_default(),
            downtime,
            cost,
            parts,
            self.priority,
            self.completed,
        )
    }
}

pub struct MaintenanceGenerator;

impl MaintenanceGenerator {
    pub fn generate(
        config: &GenConfig,
        rng: &mut GeneratorRng,
    ) -> Vec<MaintenanceRecord> {
        let start = period::period_start().date();
        let horizon = start + Duration::days(config.horizon_days());
        let mut records = Vec::new();
        let mut asset_counter: i64 = 1;

        for asset_type in ASSET_TYPES.iter() {
            let num_assets = rng.int_between(80, 150);

            for _ in 0..num_assets {
                let asset_id = format!("{asset_type}-{asset_counter:04}");
                asset_counter += 1;

                let install_date = start - Duration::days(rng.int_between(365, 3650));
                let age_years = (start - install_date).num_days() as f64 / 365.0;

                let num_events = rng.int_between(3, 20);
                let mut last_maintenance = install_date;

                for _ in 0..num_events {
                    let days_since = rng.int_between(30, 180);
                    let event_date = last_maintenance + Duration::days(days_since);
                    if event_date > horizon {
                        break;
                    }

                    let mut maint_type = *if days_since < 60 {
                        rng.pick_weighted(&MAINTENANCE_TYPES, &WEIGHTS_SHORT_INTERVAL)
                    } else if days_since < 120 {
                        rng.pick_weighted(&MAINTENANCE_TYPES, &WEIGHTS_MID_INTERVAL)
                    } else {
                        rng.pick_weighted(&MAINTENANCE_TYPES, &WEIGHTS_LONG_INTERVAL)
                    };

                    // Older assets fail more often, whatever the interval
                    // said. Both rolls always happen for aged assets.
                    if age_years > 10.0 {
                        if rng.chance(0.3) {
                            maint_type = "Corrective";
                        }
                        if rng.chance(0.1) {
                            maint_type = "Emergency";
                        }
                    }

                    let is_failure =
                        matches!(maint_type, "Corrective" | "Emergency");
                    let failure_mode = if is_failure {
                        Some(*rng.pick(&FAILURE_MODES))
                    } else {
                        None
                    };

                    let downtime = match maint_type {
                        "Emergency" => rng.uniform(4.0, 48.0),
                        "Corrective" => rng.uniform(1.0, 12.0),
                        "Preventive" => rng.uniform(0.5, 4.0),
                        _ => rng.uniform(0.25, 2.0),
                    };

                    let cost = match maint_type {
                        "Emergency" => rng.uniform(5000.0, 25000.0),
                        "Corrective" => rng.uniform(1000.0, 8000.0),
                        "Preventive" => rng.uniform(200.0, 1500.0),
                        _ => rng.uniform(100.0, 500.0),
                    };

                    let parts_replaced = is_failure && rng.chance(0.5);

                    let age_at_event = age_years
                        + (event_date - start).num_days() as f64 / 365.0;

                    records.push(MaintenanceRecord {
                        asset_id: asset_id.clone(),
                        asset_type: *asset_type,
                        install_date: Some(install_date),
                        age_years: Some(round_to(age_at_event, 1)),
                        maintenance_date: event_date,
                        maintenance_type: maint_type,
                        failure_mode,
                        downtime_hours: Some(round_to(downtime, 1)),
                        cost_usd: Some(round_to(cost, 2)),
                        parts_replaced: Some(parts_replaced),
                        priority: match maint_type {
                            "Emergency" => "Critical",
                            "Corrective" => "High",
                            _ => "Normal",
                        },
                        completed: "Yes",
                    });

                    last_maintenance = event_date;
                }
            }

            log::info!(
                "maintenance: {asset_type} assets done, {} events so far",
                records.len()
            );
        }

        // Pending work orders scheduled 10-40 days past the horizon.
        // Asset numbers are drawn over the whole ID range and may not
        // correspond to an asset with recorded history.
        for _ in 0..config.pending_work_orders {
            let asset_type = *rng.pick(&ASSET_TYPES);
            let asset_no = rng.int_between(1, asset_counter);
            let scheduled =
                start + Duration::days(config.horizon_days() + rng.int_between(10, 40));

            records.push(MaintenanceRecord {
                asset_id: format!("{asset_type}-{asset_no:04}"),
                asset_type,
                install_date: None,
                age_years: None,
                maintenance_date: scheduled,
                maintenance_type: "Preventive",
                failure_mode: None,
                downtime_hours: None,
                cost_usd: None,
                parts_replaced: None,
                priority: "Normal",
                completed: "Scheduled",
            });
        }

        records.sort_by_key(|r| r.maintenance_date);
        records
    }
}

impl DatasetGenerator for MaintenanceGenerator {
    fn name(&self) -> &'static str {
        "maintenance_records"
    }

    fn file_name(&self) -> &'static str {
        "maintenance-records.csv"
    }

    fn run(
        &self,
        config: &GenConfig,
        rng: &mut GeneratorRng,
        out_dir: &Path,
    ) -> GenResult<usize> {
        let records = Self::generate(config, rng);
        output::write_dataset(&out_dir.join(self.file_name()), &records)?;
        Ok(records.len())
    }
}

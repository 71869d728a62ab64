//! Customer-complaints generator — ticket records with lifecycle
//! status.
//!
//! Ticket dates spread uniformly over the period. Priority skews by
//! complaint-type group, status derives from ticket age against the
//! period horizon, and resolved tickets get a priority-dependent
//! resolution time. Locations cluster lightly: pressure complaints
//! toward the under-pressured hills zone, quality complaints toward
//! the two chronic-issue stations. Output is sorted by complaint date.

use crate::{
    config::GenConfig,
    error::GenResult,
    generator::DatasetGenerator,
    network::PRESSURE_ZONES,
    output::{self, round_to, CsvRecord},
    period,
    quality::MONITORING_STATIONS,
    rng::GeneratorRng,
};
use chrono::{Duration, NaiveDateTime};
use std::io::Write;
use std::path::Path;

pub const COMPLAINT_TYPES: [&str; 10] = [
    "High-Bill",
    "Low-Pressure",
    "Water-Quality",
    "Billing-Error",
    "Leak-Reported",
    "Service-Interruption",
    "Meter-Issue",
    "Customer-Service",
    "Connection-Request",
    "Other",
];
const COMPLAINT_TYPE_WEIGHTS: [f64; 10] =
    [25.0, 15.0, 12.0, 10.0, 8.0, 10.0, 5.0, 5.0, 7.0, 3.0];

const PRIORITIES: [&str; 4] = ["Low", "Medium", "High", "Critical"];
const STATUSES: [&str; 4] = ["Open", "In-Progress", "Resolved", "Closed"];

// Priority weights by complaint-type group.
const WEIGHTS_URGENT_GROUP: [f64; 4] = [5.0, 20.0, 40.0, 35.0];
const WEIGHTS_SERVICE_GROUP: [f64; 4] = [10.0, 40.0, 40.0, 10.0];
const WEIGHTS_ROUTINE_GROUP: [f64; 4] = [40.0, 40.0, 15.0, 5.0];

// Status weights for tickets old enough to have a full lifecycle.
const WEIGHTS_AGED_STATUS: [f64; 4] = [2.0, 5.0, 20.0, 73.0];

#[derive(Debug, Clone, PartialEq)]
pub struct ComplaintRecord {
    pub complaint_id: String,
    pub customer_id: String,
    pub complaint_date: NaiveDateTime,
    pub complaint_type: &'static str,
    pub priority: &'static str,
    pub status: &'static str,
    pub location: &'static str,
    pub resolution_date: Option<NaiveDateTime>,
    pub resolution_hours: Option<f64>,
    pub customer_satisfied: Option<&'static str>,
}

impl CsvRecord for ComplaintRecord {
    fn header() -> &'static [&'static str] {
        &[
            "complaint_id",
            "customer_id",
            "complaint_date",
            "complaint_type",
            "priority",
            "status",
            "location",
            "resolution_date",
            "resolution_hours",
            "customer_satisfied",
        ]
    }

    fn write_row(&self, out: &mut dyn Write) -> std::io::Result<()> {
        let resolution_date = self
            .resolution_date
            .map(|d| period::fmt_timestamp(&d))
            .unwrap_or_default();
        let resolution_hours = self
            .resolution_hours
            .map(|v| format!("{v:.1}"))
            .unwrap_or_default();
        writeln!(
            out,
            "{},{},{},{},{},{},{},{},{},{}",
            self.complaint_id,
            self.customer_id,
            period::fmt_timestamp(&self.complaint_date),
            self.complaint_type,
            self.priority,
            self.status,
            self.location,
            resolution_date,
            resolution_hours,
            self.customer_satisfied.unwrap_or_default(),
        )
    }
}

pub struct ComplaintsGenerator;

impl ComplaintsGenerator {
    pub fn generate(
        config: &GenConfig,
        rng: &mut GeneratorRng,
    ) -> Vec<ComplaintRecord> {
        let start = period::period_start();
        let horizon_end = start + Duration::days(config.horizon_days());
        let locations: Vec<&'static str> = MONITORING_STATIONS
            .iter()
            .chain(PRESSURE_ZONES.iter())
            .copied()
            .collect();

        let mut records = Vec::with_capacity(config.complaints as usize);

        for n in 1..=config.complaints {
            let complaint_date =
                start + Duration::days(rng.int_between(0, config.horizon_days()));
            let complaint_type =
                *rng.pick_weighted(&COMPLAINT_TYPES, &COMPLAINT_TYPE_WEIGHTS);

            let priority = *match complaint_type {
                "Service-Interruption" | "Water-Quality" => {
                    rng.pick_weighted(&PRIORITIES, &WEIGHTS_URGENT_GROUP)
                }
                "High-Bill" | "Low-Pressure" | "Leak-Reported" => {
                    rng.pick_weighted(&PRIORITIES, &WEIGHTS_SERVICE_GROUP)
                }
                _ => rng.pick_weighted(&PRIORITIES, &WEIGHTS_ROUTINE_GROUP),
            };

            // Lifecycle stage follows ticket age at the horizon.
            let age_days = (horizon_end - complaint_date).num_days();
            let status = if age_days < 2 {
                "Open"
            } else if age_days < 5 {
                *rng.pick(&["Open", "In-Progress"])
            } else if age_days < 15 {
                *rng.pick(&["In-Progress", "Resolved"])
            } else {
                *rng.pick_weighted(&STATUSES, &WEIGHTS_AGED_STATUS)
            };
            let settled = matches!(status, "Resolved" | "Closed");

            let (resolution_hours, resolution_date) = if settled {
                let hours = match priority {
                    "Critical" => rng.uniform(1.0, 12.0),
                    "High" => rng.uniform(4.0, 48.0),
                    "Medium" => rng.uniform(24.0, 120.0),
                    _ => rng.uniform(48.0, 240.0),
                };
                let hours = round_to(hours, 1);
                let date =
                    complaint_date + Duration::seconds((hours * 3600.0) as i64);
                (Some(hours), Some(date))
            } else {
                (None, None)
            };

            let customer_id =
                format!("CUST-{:05}", rng.int_between(1, config.customers as i64));

            // Light geographic clustering of problem areas.
            let location = if complaint_type == "Low-Pressure" && rng.chance(0.4) {
                "Zone-H-Hills"
            } else if complaint_type == "Water-Quality" && rng.chance(0.3) {
                *rng.pick(&["Station-02-Industrial", "Station-12-Suburb-West"])
            } else {
                *rng.pick(&locations)
            };

            let customer_satisfied = if settled {
                Some(*rng.pick(&["Yes", "No", "Pending"]))
            } else {
                None
            };

            records.push(ComplaintRecord {
                complaint_id: format!("COMP-{n:05}"),
                customer_id,
                complaint_date,
                complaint_type,
                priority,
                status,
                location,
                resolution_date,
                resolution_hours,
                customer_satisfied,
            });
        }

        records.sort_by_key(|r| r.complaint_date);
        records
    }
}

impl DatasetGenerator for ComplaintsGenerator {
    fn name(&self) -> &'static str {
        "customer_complaints"
    }

    fn file_name(&self) -> &'static str {
        "customer-complaints.csv"
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

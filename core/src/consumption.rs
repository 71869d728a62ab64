//! Customer-consumption generator — monthly billing per customer.
//!
//! Each customer gets a fixed type and base monthly volume, then each
//! billing month applies multiplicative noise, a summer uplift, and two
//! independent low-probability anomalies (residential leak spike,
//! conservation/vacancy dip). Bills recompute exactly from the stored
//! consumption figure.

use crate::{
    config::GenConfig,
    error::GenResult,
    generator::DatasetGenerator,
    output::{self, round_to, CsvRecord},
    period,
    rng::GeneratorRng,
};
use chrono::{Datelike, NaiveDate};
use std::io::Write;
use std::path::Path;

pub const CUSTOMER_TYPES: [&str; 4] =
    ["Residential", "Commercial", "Industrial", "Government"];
const CUSTOMER_TYPE_WEIGHTS: [f64; 4] = [70.0, 20.0, 7.0, 3.0];

const PAYMENT_STATUSES: [&str; 3] = ["Paid", "Pending", "Overdue"];
const PAYMENT_STATUS_WEIGHTS: [f64; 3] = [85.0, 10.0, 5.0];

/// Flat fee added to every bill, $.
const BASE_FEE_USD: f64 = 15.00;

/// Volumetric tariff, $ per 1000 gallons.
fn volumetric_rate(customer_type: &str) -> f64 {
    match customer_type {
        "Residential" => 2.50,
        "Commercial" => 3.00,
        "Industrial" => 2.80,
        _ => 2.20,
    }
}

fn base_monthly_consumption(customer_type: &str, rng: &mut GeneratorRng) -> f64 {
    match customer_type {
        "Residential" => rng.uniform(3000.0, 12000.0),
        "Commercial" => rng.uniform(15000.0, 50000.0),
        "Industrial" => rng.uniform(100_000.0, 500_000.0),
        _ => rng.uniform(20000.0, 80000.0),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConsumptionRecord {
    pub customer_id: String,
    pub customer_type: &'static str,
    pub billing_date: NaiveDate,
    pub billing_period: String,
    pub consumption_gallons: f64,
    pub bill_amount_usd: f64,
    pub payment_status: &'static str,
    pub rate_per_1000_gal: f64,
}

impl CsvRecord for ConsumptionRecord {
    fn header() -> &'static [&'static str] {
        &[
            "customer_id",
            "customer_type",
            "billing_date",
            "billing_period",
            "consumption_gallons",
            "bill_amount_usd",
            "payment_status",
            "rate_per_1000_gal",
        ]
    }

    fn write_row(&self, out: &mut dyn Write) -> std::io::Result<()> {
        writeln!(
            out,
            "{},{},{},{},{:.0},{:.2},{},{:.2}",
            self.customer_id,
            self.customer_type,
            period::fmt_date(&self.billing_date),
            self.billing_period,
            self.consumption_gallons,
            self.bill_amount_usd,
            self.payment_status,
            self.rate_per_1000_gal,
        )
    }
}

pub struct ConsumptionGenerator;

impl ConsumptionGenerator {
    pub fn generate(
        config: &GenConfig,
        rng: &mut GeneratorRng,
    ) -> Vec<ConsumptionRecord> {
        assert!(config.months <= 12, "billing months map onto one calendar year");
        let mut records =
            Vec::with_capacity(config.customers as usize * config.months as usize);

        for customer_no in 1..=config.customers {
            let customer_type =
                *rng.pick_weighted(&CUSTOMER_TYPES, &CUSTOMER_TYPE_WEIGHTS);
            let base = base_monthly_consumption(customer_type, rng);
            let rate = volumetric_rate(customer_type);

            for month in 1..=config.months {
                let billing_date = NaiveDate::from_ymd_opt(
                    2024,
                    month,
                    rng.int_between(1, 28) as u32,
                )
                .expect("days 1-28 exist in every month");

                let mut consumption = base * rng.uniform(0.8, 1.2);

                if matches!(month, 6..=8) {
                    consumption *= rng.uniform(1.3, 1.6);
                }

                // Anomaly: major residential leak.
                if customer_type == "Residential" && rng.chance(0.03) {
                    consumption *= rng.uniform(2.5, 5.0);
                }

                // Anomaly: conservation or vacancy. Independent of the
                // leak roll; both can land on the same bill.
                if rng.chance(0.05) {
                    consumption *= rng.uniform(0.2, 0.5);
                }

                let consumption = round_to(consumption, 0);
                let bill = round_to(consumption / 1000.0 * rate + BASE_FEE_USD, 2);
                let payment_status =
                    *rng.pick_weighted(&PAYMENT_STATUSES, &PAYMENT_STATUS_WEIGHTS);

                records.push(ConsumptionRecord {
                    customer_id: format!("CUST-{customer_no:05}"),
                    customer_type,
                    billing_period: format!(
                        "{}-{:02}",
                        billing_date.year(),
                        billing_date.month()
                    ),
                    billing_date,
                    consumption_gallons: consumption,
                    bill_amount_usd: bill,
                    payment_status,
                    rate_per_1000_gal: rate,
                });
            }

            if customer_no % 500 == 0 {
                log::info!("consumption: {customer_no} customers billed");
            }
        }

        records
    }
}

impl DatasetGenerator for ConsumptionGenerator {
    fn name(&self) -> &'static str {
        "customer_consumption"
    }

    fn file_name(&self) -> &'static str {
        "customer-consumption.csv"
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

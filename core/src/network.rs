//! Network-performance generator — hourly flow/pressure per pressure
//! zone, with billed consumption and the derived non-revenue-water
//! (NRW) volume and percentage.
//!
//! The baseline assumes 25% NRW (consumption = 75% of flow). Three
//! zones override that ratio with chronic loss profiles, one zone
//! develops a progressive leak over July–August, and two zones carry
//! opposing pressure anomalies.

use crate::{
    config::GenConfig,
    error::GenResult,
    generator::DatasetGenerator,
    output::{self, round_to, CsvRecord},
    period,
    rng::GeneratorRng,
};
use chrono::{NaiveDate, NaiveDateTime, Timelike};
use std::io::Write;
use std::path::Path;

pub const PRESSURE_ZONES: [&str; 8] = [
    "Zone-A-Downtown",
    "Zone-B-North",
    "Zone-C-South",
    "Zone-D-East",
    "Zone-E-West",
    "Zone-F-Industrial",
    "Zone-G-Coastal",
    "Zone-H-Hills",
];

const PRESSURE_COMPLIANT_MIN_PSI: f64 = 40.0;
const PRESSURE_COMPLIANT_MAX_PSI: f64 = 80.0;

fn leak_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 7, 1).expect("leak start date is valid")
}

fn leak_end() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 8, 31).expect("leak end date is valid")
}

#[derive(Debug, Clone, PartialEq)]
pub struct NetworkRecord {
    pub timestamp: NaiveDateTime,
    pub zone: &'static str,
    pub flow_rate_gpm: f64,
    pub pressure_psi: f64,
    pub billed_consumption_gpm: f64,
    pub nrw_gpm: f64,
    pub nrw_percent: f64,
    pub pressure_compliant: bool,
}

impl CsvRecord for NetworkRecord {
    fn header() -> &'static [&'static str] {
        &[
            "timestamp",
            "zone",
            "flow_rate_gpm",
            "pressure_psi",
            "billed_consumption_gpm",
            "nrw_gpm",
            "nrw_percent",
            "pressure_compliant",
        ]
    }

    fn write_row(&self, out: &mut dyn Write) -> std::io::Result<()> {
        writeln!(
            out,
            "{},{},{:.1},{:.1},{:.1},{:.1},{:.2},{}",
            period::fmt_timestamp(&self.timestamp),
            self.zone,
            self.flow_rate_gpm,
            self.pressure_psi,
            self.billed_consumption_gpm,
            self.nrw_gpm,
            self.nrw_percent,
            output::yes_no(self.pressure_compliant),
        )
    }
}

pub struct NetworkGenerator;

impl NetworkGenerator {
    pub fn generate(config: &GenConfig, rng: &mut GeneratorRng) -> Vec<NetworkRecord> {
        let hours = config.hours();
        let mut records = Vec::with_capacity(hours as usize * PRESSURE_ZONES.len());

        for hour in 0..hours {
            let ts = period::hour_timestamp(hour);
            let hod = ts.hour();
            let date = ts.date();

            for (idx, zone) in PRESSURE_ZONES.iter().enumerate() {
                let zone_no = (idx + 1) as f64;

                let mut flow = 500.0 + zone_no * 100.0 + rng.gauss(0.0, 50.0);
                let mut pressure = 55.0 + rng.gauss(0.0, 5.0);
                let mut consumption = flow * 0.75;

                if (6..=9).contains(&hod) {
                    flow *= 1.4;
                    consumption *= 1.5;
                    pressure -= 8.0;
                } else if (18..=21).contains(&hod) {
                    flow *= 1.3;
                    consumption *= 1.4;
                    pressure -= 6.0;
                } else if hod <= 5 {
                    // Minimum night flow.
                    flow *= 0.4;
                    consumption *= 0.3;
                    pressure += 5.0;
                }

                if period::is_low_demand_day(&ts) {
                    flow *= 0.85;
                    consumption *= 0.80;
                }

                if period::is_summer(&ts) {
                    flow *= 1.25;
                    consumption *= 1.30;
                }

                // Chronic loss profiles override the billed fraction.
                match *zone {
                    "Zone-C-South" => consumption = flow * 0.60,
                    "Zone-G-Coastal" => consumption = flow * 0.65,
                    "Zone-H-Hills" => consumption = flow * 0.88,
                    _ => {}
                }

                // Progressive leak in Zone-C-South over July and August:
                // the extra flow grows by 2 gpm per day and the billed
                // fraction collapses to half.
                if *zone == "Zone-C-South"
                    && (leak_start()..=leak_end()).contains(&date)
                {
                    let leak_flow = (date - leak_start()).num_days() as f64 * 2.0;
                    flow += leak_flow;
                    consumption = flow * 0.50;
                    pressure -= 3.0;
                }

                // High elevation keeps Zone-H under-pressured; readings
                // that sink below 35 psi come back as service-limit noise.
                if *zone == "Zone-H-Hills" {
                    pressure -= 15.0;
                    if pressure < 35.0 {
                        pressure = rng.uniform(32.0, 38.0);
                    }
                }

                // Downtown runs over-pressured.
                if *zone == "Zone-A-Downtown" {
                    pressure += 20.0;
                }

                let flow = round_to(flow.max(0.0), 1);
                let pressure = round_to(pressure.clamp(20.0, 100.0), 1);
                let consumption = round_to(consumption.clamp(0.0, flow), 1);
                let nrw = round_to(flow - consumption, 1);
                let nrw_percent = if flow > 0.0 {
                    round_to((flow - consumption) / flow * 100.0, 2)
                } else {
                    0.0
                };

                records.push(NetworkRecord {
                    timestamp: ts,
                    zone: *zone,
                    flow_rate_gpm: flow,
                    pressure_psi: pressure,
                    billed_consumption_gpm: consumption,
                    nrw_gpm: nrw,
                    nrw_percent,
                    pressure_compliant: (PRESSURE_COMPLIANT_MIN_PSI
                        ..=PRESSURE_COMPLIANT_MAX_PSI)
                        .contains(&pressure),
                });
            }

            if hour % 1000 == 0 {
                log::info!("hour={hour} network: {} readings so far", records.len());
            }
        }

        records
    }
}

impl DatasetGenerator for NetworkGenerator {
    fn name(&self) -> &'static str {
        "network_performance"
    }

    fn file_name(&self) -> &'static str {
        "distribution-network-performance.csv"
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

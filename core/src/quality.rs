//! Water-quality generator — hourly readings per monitoring station.
//!
//! Layered adjustments, applied in fixed priority order: time-of-day,
//! day-of-week, season, chronic station issues, then the shared Aug 15
//! incident window. Every quantity is clamped and rounded to storage
//! precision before the compliance flags are derived from it.

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

pub const MONITORING_STATIONS: [&str; 12] = [
    "Station-01-Downtown",
    "Station-02-Industrial",
    "Station-03-Residential-North",
    "Station-04-Residential-South",
    "Station-05-Coastal",
    "Station-06-Airport",
    "Station-07-Hospital",
    "Station-08-University",
    "Station-09-Mall",
    "Station-10-Port",
    "Station-11-Suburb-East",
    "Station-12-Suburb-West",
];

/// Stations hit by the Aug 15 pH excursion.
const INCIDENT_PH_STATIONS: [&str; 2] =
    ["Station-03-Residential-North", "Station-11-Suburb-East"];

// Regulatory thresholds the compliance flags are checked against.
const CHLORINE_MIN_MG_L: f64 = 0.2;
const CHLORINE_MAX_MG_L: f64 = 4.0;
const PH_MIN: f64 = 6.5;
const PH_MAX: f64 = 8.5;
const TURBIDITY_MAX_NTU: f64 = 5.0;

/// Calendar date of the shared quality incident.
pub fn incident_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 8, 15).expect("incident date is valid")
}

#[derive(Debug, Clone, PartialEq)]
pub struct QualityRecord {
    pub timestamp: NaiveDateTime,
    pub station: &'static str,
    pub chlorine_mg_l: f64,
    pub ph: f64,
    pub turbidity_ntu: f64,
    pub temperature_c: f64,
    pub conductivity_us_cm: f64,
    pub chlorine_compliant: bool,
    pub ph_compliant: bool,
    pub turbidity_compliant: bool,
    pub overall_compliant: bool,
}

impl CsvRecord for QualityRecord {
    fn header() -> &'static [&'static str] {
        &[
            "timestamp",
            "station",
            "chlorine_mg_l",
            "ph",
            "turbidity_ntu",
            "temperature_c",
            "conductivity_us_cm",
            "chlorine_compliant",
            "ph_compliant",
            "turbidity_compliant",
            "overall_compliant",
        ]
    }

    fn write_row(&self, out: &mut dyn Write) -> std::io::Result<()> {
        writeln!(
            out,
            "{},{},{:.3},{:.2},{:.2},{:.1},{:.1},{},{},{},{}",
            period::fmt_timestamp(&self.timestamp),
            self.station,
            self.chlorine_mg_l,
            self.ph,
            self.turbidity_ntu,
            self.temperature_c,
            self.conductivity_us_cm,
            output::yes_no(self.chlorine_compliant),
            output::yes_no(self.ph_compliant),
            output::yes_no(self.turbidity_compliant),
            output::yes_no(self.overall_compliant),
        )
    }
}

pub struct QualityGenerator;

impl QualityGenerator {
    pub fn generate(config: &GenConfig, rng: &mut GeneratorRng) -> Vec<QualityRecord> {
        let hours = config.hours();
        let mut records =
            Vec::with_capacity(hours as usize * MONITORING_STATIONS.len());

        for hour in 0..hours {
            let ts = period::hour_timestamp(hour);
            let hod = ts.hour();

            for (idx, station) in MONITORING_STATIONS.iter().enumerate() {
                let station_no = (idx + 1) as f64;

                let mut chlorine = 1.2 + station_no * 0.1 + rng.gauss(0.0, 0.15);
                let mut ph = 7.3 + rng.gauss(0.0, 0.15);
                let mut turbidity = 0.5 + rng.gauss(0.0, 0.3);
                let mut temperature = 22.0 + 5.0 * rng.gauss(0.0, 1.0).abs();
                let mut conductivity = 450.0 + rng.gauss(0.0, 30.0);

                // Rush hours depress residual chlorine and stir sediment.
                if (6..=9).contains(&hod) {
                    chlorine -= 0.1;
                    turbidity += 0.2;
                } else if (18..=21).contains(&hod) {
                    chlorine -= 0.15;
                    turbidity += 0.3;
                }

                if period::is_low_demand_day(&ts) {
                    chlorine += 0.1;
                    turbidity -= 0.1;
                }

                if period::is_summer(&ts) {
                    temperature += 5.0;
                    turbidity += 0.3;
                    conductivity += 20.0;
                }

                // Chronic issue: persistent low chlorine with occasional
                // outright excursions below the regulatory floor.
                if *station == "Station-12-Suburb-West" {
                    chlorine -= 0.4;
                    if rng.chance(0.05) {
                        chlorine = rng.uniform(0.1, 0.19);
                    }
                }

                // Chronic issue: industrial turbidity spikes.
                if *station == "Station-02-Industrial" && rng.chance(0.02) {
                    turbidity = rng.uniform(5.5, 12.0);
                }

                // Chronic issue: coastal intrusion raises conductivity.
                if *station == "Station-05-Coastal" {
                    conductivity += 80.0;
                    if rng.chance(0.03) {
                        conductivity = rng.uniform(800.0, 950.0);
                    }
                }

                // Shared incident window: pH excursion at two stations
                // plus a system-wide turbidity event (rainfall).
                if ts.date() == incident_date() {
                    if (14..=18).contains(&hod) && INCIDENT_PH_STATIONS.contains(station)
                    {
                        ph = rng.uniform(8.6, 9.2);
                    }
                    if (10..=20).contains(&hod) {
                        turbidity += rng.uniform(3.0, 8.0);
                    }
                }

                let chlorine = round_to(chlorine.clamp(0.0, 5.0), 3);
                let ph = round_to(ph.clamp(6.0, 9.0), 2);
                let turbidity = round_to(turbidity.clamp(0.0, 20.0), 2);
                let temperature = round_to(temperature.clamp(10.0, 35.0), 1);
                let conductivity = round_to(conductivity.clamp(200.0, 1000.0), 1);

                let chlorine_compliant =
                    (CHLORINE_MIN_MG_L..=CHLORINE_MAX_MG_L).contains(&chlorine);
                let ph_compliant = (PH_MIN..=PH_MAX).contains(&ph);
                let turbidity_compliant = turbidity < TURBIDITY_MAX_NTU;

                records.push(QualityRecord {
                    timestamp: ts,
                    station: *station,
                    chlorine_mg_l: chlorine,
                    ph,
                    turbidity_ntu: turbidity,
                    temperature_c: temperature,
                    conductivity_us_cm: conductivity,
                    chlorine_compliant,
                    ph_compliant,
                    turbidity_compliant,
                    overall_compliant: chlorine_compliant
                        && ph_compliant
                        && turbidity_compliant,
                });
            }

            if hour % 1000 == 0 {
                log::info!("hour={hour} quality: {} readings so far", records.len());
            }
        }

        records
    }
}

impl DatasetGenerator for QualityGenerator {
    fn name(&self) -> &'static str {
        "water_quality"
    }

    fn file_name(&self) -> &'static str {
        "water-quality-monitoring.csv"
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

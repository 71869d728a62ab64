//! Energy-usage generator — hourly consumption and cost per facility.
//!
//! Base load is tiered by facility category, shaped by the water-demand
//! daily curve, then priced through a three-band time-of-use tariff.
//! Production facilities also report an estimated water output and an
//! efficiency ratio; administrative facilities report neither.

use crate::{
    config::GenConfig,
    error::GenResult,
    generator::DatasetGenerator,
    output::{self, round_to, CsvRecord},
    period,
    rng::GeneratorRng,
};
use chrono::{NaiveDateTime, Timelike};
use std::io::Write;
use std::path::Path;

pub const FACILITIES: [&str; 9] = [
    "Main-Treatment-Plant",
    "North-Pumping-Station",
    "South-Pumping-Station",
    "Desalination-Plant",
    "Booster-Station-1",
    "Booster-Station-2",
    "Admin-Building",
    "Laboratory",
    "Operations-Center",
];

// Time-of-use tariff, $/kWh.
const RATE_PEAK: f64 = 0.18;
const RATE_MID: f64 = 0.12;
const RATE_OFF_PEAK: f64 = 0.08;

// Water output per kWh, gallons.
const PLANT_GAL_PER_KWH: f64 = 0.5;
const PUMPING_GAL_PER_KWH: f64 = 1.2;

#[derive(Clone, Copy, PartialEq, Eq)]
enum FacilityCategory {
    /// Treatment and desalination plants.
    Plant,
    /// Pumping and booster stations.
    Pumping,
    /// Offices, lab, operations center.
    Administrative,
}

fn category(facility: &str) -> FacilityCategory {
    if facility.contains("Treatment") || facility.contains("Desalination") {
        FacilityCategory::Plant
    } else if facility.contains("Pumping") || facility.contains("Booster") {
        FacilityCategory::Pumping
    } else {
        FacilityCategory::Administrative
    }
}

/// Tariff band for an hour of day: (rate, band label).
fn tariff(hod: u32) -> (f64, &'static str) {
    if (14..=20).contains(&hod) {
        (RATE_PEAK, "Peak")
    } else if (6..14).contains(&hod) || (21..=23).contains(&hod) {
        (RATE_MID, "Mid")
    } else {
        (RATE_OFF_PEAK, "Off-Peak")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnergyRecord {
    pub timestamp: NaiveDateTime,
    pub facility: &'static str,
    pub energy_consumption_kwh: f64,
    pub energy_cost_usd: f64,
    pub energy_rate_per_kwh: f64,
    pub rate_period: &'static str,
    pub water_produced_gallons: Option<f64>,
    pub energy_efficiency_gal_per_kwh: Option<f64>,
}

impl CsvRecord for EnergyRecord {
    fn header() -> &'static [&'static str] {
        &[
            "timestamp",
            "facility",
            "energy_consumption_kwh",
            "energy_cost_usd",
            "energy_rate_per_kwh",
            "rate_period",
            "water_produced_gallons",
            "energy_efficiency_gal_per_kwh",
        ]
    }

    fn write_row(&self, out: &mut dyn Write) -> std::io::Result<()> {
        let produced = self
            .water_produced_gallons
            .map(|v| format!("{v:.1}"))
            .unwrap_or_default();
        let efficiency = self
            .energy_efficiency_gal_per_kwh
            .map(|v| format!("{v:.3}"))
            .unwrap_or_default();
        writeln!(
            out,
            "{},{},{:.2},{:.2},{:.3},{},{},{}",
            period::fmt_timestamp(&self.timestamp),
            self.facility,
            self.energy_consumption_kwh,
            self.energy_cost_usd,
            self.energy_rate_per_kwh,
            self.rate_period,
            produced,
            efficiency,
        )
    }
}

pub struct EnergyGenerator;

impl EnergyGenerator {
    pub fn generate(config: &GenConfig, rng: &mut GeneratorRng) -> Vec<EnergyRecord> {
        let hours = config.hours();
        let start_date = period::period_start().date();
        let mut records = Vec::with_capacity(hours as usize * FACILITIES.len());

        for hour in 0..hours {
            let ts = period::hour_timestamp(hour);
            let hod = ts.hour();

            for facility in FACILITIES.iter() {
                let cat = category(facility);

                let mut energy = match cat {
                    FacilityCategory::Plant => 1200.0 + rng.gauss(0.0, 80.0),
                    FacilityCategory::Pumping => 450.0 + rng.gauss(0.0, 40.0),
                    FacilityCategory::Administrative => 25.0 + rng.gauss(0.0, 5.0),
                };

                // Load follows the water-demand daily shape.
                if (6..=9).contains(&hod) {
                    energy *= 1.5;
                } else if (18..=21).contains(&hod) {
                    energy *= 1.4;
                } else if hod <= 5 {
                    energy *= 0.6;
                }

                // Offices run on business hours, not on water demand.
                if cat == FacilityCategory::Administrative {
                    if (8..=17).contains(&hod) {
                        energy *= 3.0;
                    } else {
                        energy *= 0.3;
                    }
                }

                if period::is_low_demand_day(&ts) {
                    if matches!(*facility, "Admin-Building" | "Laboratory") {
                        energy *= 0.2;
                    } else {
                        energy *= 0.85;
                    }
                }

                if period::is_summer(&ts) {
                    if cat == FacilityCategory::Administrative {
                        // Cooling load.
                        energy *= 1.8;
                    } else {
                        // Higher production.
                        energy *= 1.15;
                    }
                }

                // Known inefficiency: North station pumps 25% over its
                // rated load.
                if *facility == "North-Pumping-Station" {
                    energy *= 1.25;
                }

                // Membrane fouling: 5% per year, linear over elapsed days.
                if *facility == "Desalination-Plant" {
                    let days_elapsed = (ts.date() - start_date).num_days() as f64;
                    energy *= 1.0 + (days_elapsed / 365.0) * 0.05;
                }

                let (rate, rate_period) = tariff(hod);
                let energy = round_to(energy.max(0.0), 2);
                let cost = round_to(energy * rate, 2);

                let produced_raw = match cat {
                    FacilityCategory::Plant => energy * PLANT_GAL_PER_KWH,
                    FacilityCategory::Pumping => energy * PUMPING_GAL_PER_KWH,
                    FacilityCategory::Administrative => 0.0,
                };

                let (water_produced, efficiency) =
                    if energy > 0.0 && produced_raw > 0.0 {
                        (
                            Some(round_to(produced_raw, 1)),
                            Some(round_to(produced_raw / energy, 3)),
                        )
                    } else {
                        (None, None)
                    };

                records.push(EnergyRecord {
                    timestamp: ts,
                    facility: *facility,
                    energy_consumption_kwh: energy,
                    energy_cost_usd: cost,
                    energy_rate_per_kwh: rate,
                    rate_period,
                    water_produced_gallons: water_produced,
                    energy_efficiency_gal_per_kwh: efficiency,
                });
            }

            if hour % 1000 == 0 {
                log::info!("hour={hour} energy: {} readings so far", records.len());
            }
        }

        records
    }
}

impl DatasetGenerator for EnergyGenerator {
    fn name(&self) -> &'static str {
        "energy_usage"
    }

    fn file_name(&self) -> &'static str {
        "energy-usage.csv"
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

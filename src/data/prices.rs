//! # Daily Price Series
//!
//! Loader for the externally supplied daily WTI spot price CSV
//! (`observation_date`, `DCOILWTICO`) and its quarterly resampling. Days
//! with a missing price are dropped before averaging.

use crate::data::records::Period;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use csv::Reader;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

/// One daily observation from the price CSV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceObservation {
    /// Observation date.
    #[serde(rename = "observation_date")]
    pub date: NaiveDate,
    /// Spot price in dollars per barrel; `None` on non-trading days.
    #[serde(rename = "DCOILWTICO")]
    pub price: Option<f64>,
}

/// Load the daily price series from a CSV file.
pub fn load_daily_prices<P: AsRef<Path>>(path: P) -> Result<Vec<PriceObservation>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open file: {:?}", path.as_ref()))?;

    let mut reader = Reader::from_reader(file);
    let mut observations = Vec::new();
    for result in reader.deserialize() {
        let observation: PriceObservation =
            result.context("Failed to parse price observation")?;
        observations.push(observation);
    }
    Ok(observations)
}

/// Resample daily observations to quarterly arithmetic means.
///
/// Observations before `since` and observations with a missing price are
/// dropped first. The result is keyed by quarter, so it comes back sorted
/// chronologically with one entry per quarter.
pub fn quarterly_mean_price(
    observations: &[PriceObservation],
    since: NaiveDate,
) -> Vec<(Period, f64)> {
    let mut sums: BTreeMap<Period, (f64, u32)> = BTreeMap::new();

    for observation in observations {
        let price = match observation.price {
            Some(price) => price,
            None => continue,
        };
        if observation.date < since {
            continue;
        }
        let entry = sums.entry(Period::from_date(observation.date)).or_insert((0.0, 0));
        entry.0 += price;
        entry.1 += 1;
    }

    sums.into_iter()
        .map(|(period, (sum, count))| (period, sum / count as f64))
        .collect()
}

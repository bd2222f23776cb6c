//! CSV-based rate loader
//!
//! Reads a published rate table with `nome,valor` columns, where `valor` is a
//! percentage (13.75 means 13.75% per year), matching the layout of the public
//! rates feed the tables are usually exported from.

use std::io::Read;
use std::path::Path;

use csv::Reader;
use log::info;
use serde::Deserialize;

use super::provider::StaticRates;

/// Errors while loading a rate table
#[derive(Debug, thiserror::Error)]
pub enum RateLoadError {
    #[error("failed to read rate table: {0}")]
    Csv(#[from] csv::Error),

    #[error("rate `{name}` has non-finite value {value}")]
    NonFinite { name: String, value: f64 },

    #[error("rate table lists `{0}` more than once")]
    Duplicate(String),
}

/// Raw CSV row matching the published rate table columns
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "nome")]
    name: String,
    #[serde(rename = "valor")]
    percent: f64,
}

/// Load a rate table from a CSV file
pub fn load_rates<P: AsRef<Path>>(path: P) -> Result<StaticRates, RateLoadError> {
    let path = path.as_ref();
    let rates = read_rates(Reader::from_path(path)?)?;
    info!("Loaded {} rates from {}", rates.len(), path.display());
    Ok(rates)
}

/// Load a rate table from any reader (string buffer, response body, ...)
pub fn load_rates_from_reader<R: Read>(reader: R) -> Result<StaticRates, RateLoadError> {
    read_rates(Reader::from_reader(reader))
}

fn read_rates<R: Read>(mut reader: Reader<R>) -> Result<StaticRates, RateLoadError> {
    let mut rates = StaticRates::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        let name = row.name.trim().to_string();

        if !row.percent.is_finite() {
            return Err(RateLoadError::NonFinite {
                name,
                value: row.percent,
            });
        }

        if rates.insert(name.clone(), row.percent / 100.0).is_some() {
            return Err(RateLoadError::Duplicate(name));
        }
    }

    Ok(rates)
}

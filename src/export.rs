//! Tabular rendering of simulated series
//!
//! One row per period, one nominal and one real column per scenario:
//! `Mes, <name> (Nominal), <name> (Real), ...`. Values are written unrounded;
//! formatting for display is left to whatever consumes the table.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::info;
use serde::Serialize;

use crate::projection::SimulationReport;

/// Header of the period column
pub const PERIOD_COLUMN: &str = "Mes";

/// Errors while writing an export
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A single table row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub month: u32,

    /// Nominal and real balance per scenario, interleaved in column order
    pub values: Vec<f64>,
}

/// Series of every scenario in a report, laid out for tabular export
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesTable {
    pub columns: Vec<String>,
    pub rows: Vec<TableRow>,
}

/// Column header for a scenario's nominal series
pub fn nominal_column(name: &str) -> String {
    format!("{} (Nominal)", name)
}

/// Column header for a scenario's real series
pub fn real_column(name: &str) -> String {
    format!("{} (Real)", name)
}

impl SeriesTable {
    /// Build the table from a report, periods `0..=horizon`
    pub fn from_report(report: &SimulationReport) -> Self {
        let mut columns = Vec::with_capacity(1 + 2 * report.results.len());
        columns.push(PERIOD_COLUMN.to_string());
        for result in &report.results {
            columns.push(nominal_column(&result.scenario.name));
            columns.push(real_column(&result.scenario.name));
        }

        let rows = (0..=report.run.horizon)
            .map(|month| {
                let idx = month as usize;
                let values = report
                    .results
                    .iter()
                    .flat_map(|r| [r.series.nominal()[idx], r.series.real()[idx]])
                    .collect();
                TableRow { month, values }
            })
            .collect();

        Self { columns, rows }
    }

    /// Write as CSV with a header row
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), ExportError> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(&self.columns)?;

        for row in &self.rows {
            let mut record = Vec::with_capacity(self.columns.len());
            record.push(row.month.to_string());
            record.extend(row.values.iter().map(|v| v.to_string()));
            csv_writer.write_record(&record)?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    /// Write as CSV to a file path
    pub fn write_csv_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ExportError> {
        let path = path.as_ref();
        self.write_csv(File::create(path)?)?;
        info!("Wrote {} rows to {}", self.rows.len(), path.display());
        Ok(())
    }

    /// Write as pretty-printed JSON
    pub fn write_json<W: Write>(&self, writer: W) -> Result<(), ExportError> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Write as pretty-printed JSON to a file path
    pub fn write_json_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ExportError> {
        let path = path.as_ref();
        self.write_json(File::create(path)?)?;
        info!("Wrote {} rows to {}", self.rows.len(), path.display());
        Ok(())
    }
}

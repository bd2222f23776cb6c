//! Terminal profit metrics for a simulated scenario

use serde::{Deserialize, Serialize};

use super::series::Series;

/// Summary of a scenario at the end of the horizon
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioMetrics {
    /// Initial balance plus every contribution
    pub invested: f64,

    pub terminal_nominal: f64,

    pub terminal_real: f64,

    /// Terminal nominal balance minus amount invested
    pub profit_nominal: f64,

    /// `profit_nominal / invested`, or 0 when nothing was invested
    pub profit_fraction: f64,
}

impl ScenarioMetrics {
    /// Real terminal balance minus amount invested
    pub fn profit_real(&self) -> f64 {
        self.terminal_real - self.invested
    }

    /// Real return on the amount invested, or 0 when nothing was invested
    ///
    /// This is the key scenarios are ranked by.
    pub fn real_return_fraction(&self) -> f64 {
        fraction_of_invested(self.profit_real(), self.invested)
    }
}

fn fraction_of_invested(profit: f64, invested: f64) -> f64 {
    if invested > 0.0 {
        profit / invested
    } else {
        0.0
    }
}

/// Compute terminal metrics for a series
///
/// `invested = initial_balance + contribution * horizon`.
pub fn aggregate_metrics(
    series: &Series,
    initial_balance: f64,
    contribution: f64,
    horizon: u32,
) -> ScenarioMetrics {
    let invested = initial_balance + contribution * horizon as f64;
    let terminal_nominal = series.terminal_nominal();
    let terminal_real = series.terminal_real();
    let profit_nominal = terminal_nominal - invested;

    ScenarioMetrics {
        invested,
        terminal_nominal,
        terminal_real,
        profit_nominal,
        profit_fraction: fraction_of_invested(profit_nominal, invested),
    }
}

//! Core simulation engine for monthly accumulation projections

use std::collections::HashSet;

use log::{debug, info};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::metrics::{aggregate_metrics, ScenarioMetrics};
use super::series::Series;
use super::state::AccumulationState;
use crate::error::{Result, SimulationError};
use crate::rates::validate_rate;
use crate::ranking::{rank, CategoryRankings};
use crate::scenario::Scenario;

/// Parameters for one simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRun {
    /// Balance at period 0
    pub initial_balance: f64,

    /// Amount added at the end of every period, after growth
    pub periodic_contribution: f64,

    /// Number of periods (months) to project
    pub horizon: u32,

    /// Monthly inflation rate used to deflate every scenario
    pub inflation_periodic_rate: f64,

    /// Scenarios in input order
    pub scenarios: Vec<Scenario>,
}

impl SimulationRun {
    pub fn new(
        initial_balance: f64,
        periodic_contribution: f64,
        horizon: u32,
        inflation_periodic_rate: f64,
        scenarios: Vec<Scenario>,
    ) -> Self {
        Self {
            initial_balance,
            periodic_contribution,
            horizon,
            inflation_periodic_rate,
            scenarios,
        }
    }

    /// Check every input before any scenario is simulated
    pub fn validate(&self) -> Result<()> {
        validate_inputs(
            self.initial_balance,
            self.periodic_contribution,
            self.inflation_periodic_rate,
        )?;

        let mut names = HashSet::with_capacity(self.scenarios.len());
        for scenario in &self.scenarios {
            validate_rate(scenario.periodic_rate)?;
            if !names.insert(scenario.name.as_str()) {
                return Err(SimulationError::invalid_parameter(
                    "scenarios",
                    format!("duplicate scenario name `{}`", scenario.name),
                ));
            }
        }

        Ok(())
    }

    /// Total amount put in over the horizon
    pub fn invested(&self) -> f64 {
        self.initial_balance + self.periodic_contribution * self.horizon as f64
    }
}

/// Simulated series and metrics for one scenario
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioResult {
    pub scenario: Scenario,
    pub series: Series,
    pub metrics: ScenarioMetrics,
}

/// Complete output of a simulation run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationReport {
    /// Parameters the report was produced from
    pub run: SimulationRun,

    /// One result per scenario, in scenario input order
    pub results: Vec<ScenarioResult>,

    /// Scenarios grouped by category, best real return first
    pub rankings: CategoryRankings,
}

impl SimulationReport {
    /// Find a scenario's result by name
    pub fn result(&self, name: &str) -> Option<&ScenarioResult> {
        self.results.iter().find(|r| r.scenario.name == name)
    }
}

fn validate_amount(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(SimulationError::invalid_parameter(name, "must be finite"));
    }
    if value < 0.0 {
        return Err(SimulationError::invalid_parameter(name, "must be non-negative"));
    }
    Ok(())
}

fn validate_inputs(
    initial_balance: f64,
    contribution: f64,
    inflation_periodic_rate: f64,
) -> Result<()> {
    validate_amount("initial_balance", initial_balance)?;
    validate_amount("periodic_contribution", contribution)?;
    validate_rate(inflation_periodic_rate)
}

/// Project one scenario's nominal and real balances
///
/// For each period `i` in `1..=horizon`:
/// ```text
/// nominal[i] = nominal[i-1] * (1 + periodic_rate) + contribution
/// real[i]    = nominal[i] / (1 + inflation_periodic_rate)^i
/// ```
/// `horizon = 0` returns single-point series holding `initial_balance`.
///
/// No upper bound is placed on `horizon`; for very long horizons or large
/// rates balances can exceed `f64` range and become infinite. Both series are
/// allocated up front at `horizon + 1` values each (16 bytes per period), so a
/// horizon near `u32::MAX` exhausts memory before it reaches that bound.
///
/// # Errors
/// `InvalidParameter` for a negative or non-finite balance or contribution,
/// `InvalidRate` for a rate at or below -100%.
pub fn simulate(
    initial_balance: f64,
    contribution: f64,
    horizon: u32,
    periodic_rate: f64,
    inflation_periodic_rate: f64,
) -> Result<Series> {
    validate_inputs(initial_balance, contribution, inflation_periodic_rate)?;
    validate_rate(periodic_rate)?;

    Ok(project(initial_balance, contribution, horizon, periodic_rate, inflation_periodic_rate))
}

/// Recurrence over already-validated inputs
fn project(
    initial_balance: f64,
    contribution: f64,
    horizon: u32,
    periodic_rate: f64,
    inflation_periodic_rate: f64,
) -> Series {
    let mut series = Series::with_capacity(initial_balance, horizon);
    let mut state = AccumulationState::new(initial_balance);

    for _period in 1..=horizon {
        state.advance_period(periodic_rate, contribution, inflation_periodic_rate);
        series.push(state.nominal_balance, state.real_balance());
    }

    series
}

/// Simulate every scenario in a run, compute metrics and rankings
///
/// Scenarios are independent and are simulated in parallel; results keep
/// scenario input order regardless of completion order.
pub fn run(params: &SimulationRun) -> Result<SimulationReport> {
    params.validate()?;

    info!(
        "Simulating {} scenarios over {} months (initial {:.2}, contribution {:.2})",
        params.scenarios.len(),
        params.horizon,
        params.initial_balance,
        params.periodic_contribution,
    );

    let results: Vec<ScenarioResult> = params
        .scenarios
        .par_iter()
        .map(|scenario| {
            let series = project(
                params.initial_balance,
                params.periodic_contribution,
                params.horizon,
                scenario.periodic_rate,
                params.inflation_periodic_rate,
            );
            let metrics = aggregate_metrics(
                &series,
                params.initial_balance,
                params.periodic_contribution,
                params.horizon,
            );
            debug!(
                "Scenario {}: terminal nominal {:.2}, terminal real {:.2}",
                scenario.name, metrics.terminal_nominal, metrics.terminal_real
            );
            ScenarioResult {
                scenario: scenario.clone(),
                series,
                metrics,
            }
        })
        .collect();

    let rankings = rank(results.iter().map(|r| (&r.scenario, &r.metrics)));

    Ok(SimulationReport {
        run: params.clone(),
        results,
        rankings,
    })
}

//! Projection engine for recurring-contribution scenarios

mod state;
mod engine;
mod series;
mod metrics;

pub use state::AccumulationState;
pub use engine::{run, simulate, ScenarioResult, SimulationReport, SimulationRun};
pub use series::Series;
pub use metrics::{aggregate_metrics, ScenarioMetrics};

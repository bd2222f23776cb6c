//! Investment Simulator - Projection engine for recurring investments
//!
//! This library provides:
//! - Annual to monthly rate normalization
//! - Injected named-rate providers with documented fallbacks
//! - Nominal and inflation-adjusted balance projections per scenario
//! - Terminal profit metrics and per-category rankings by real return
//! - Tabular export of projected series

pub mod error;
pub mod rates;
pub mod scenario;
pub mod projection;
pub mod ranking;
pub mod export;

// Re-export commonly used types
pub use error::SimulationError;
pub use rates::{monthly_rate, RateProvider, RateSnapshot, StaticRates};
pub use scenario::{Category, Scenario, CatalogConfig, default_scenarios};
pub use projection::{
    run, simulate, aggregate_metrics, Series, ScenarioMetrics, SimulationRun, SimulationReport,
};
pub use ranking::{rank, RankingEntry, CategoryRankings};
pub use export::SeriesTable;

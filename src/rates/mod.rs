//! Rate inputs for a simulation run
//!
//! - Annual to monthly rate normalization
//! - Named-rate providers (the engine never fetches rates itself)
//! - CSV loading of published rate tables

mod normalize;
mod provider;
pub mod loader;

pub use normalize::{annual_rate, monthly_rate, validate_rate, PERIODS_PER_YEAR};
pub use provider::{
    RateFallbacks, RateProvider, RateSnapshot, ResolvedRate, StaticRates, CDI, IPCA, SELIC,
};
pub use loader::{load_rates, load_rates_from_reader, RateLoadError};

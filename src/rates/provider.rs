//! Named-rate providers and caller-side fallback resolution
//!
//! Rates arrive from an external collaborator (a remote feed, a file, a test
//! fixture). Whatever the source, the engine only ever sees the numbers that
//! `RateSnapshot::resolve` hands on, with missing names already replaced by
//! their documented defaults.

use std::collections::BTreeMap;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::normalize::monthly_rate;
use crate::error::Result;

/// Benchmark policy rate
pub const SELIC: &str = "Selic";
/// Interbank deposit rate
pub const CDI: &str = "CDI";
/// Consumer price inflation
pub const IPCA: &str = "IPCA";

/// Source of annual rates keyed by name
///
/// Values are annual fractions (0.1375 for 13.75%). Returning `None` means the
/// rate is unavailable and the caller's fallback applies.
pub trait RateProvider {
    fn annual_rate(&self, name: &str) -> Option<f64>;
}

impl<P: RateProvider + ?Sized> RateProvider for &P {
    fn annual_rate(&self, name: &str) -> Option<f64> {
        (**self).annual_rate(name)
    }
}

/// In-memory rate table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StaticRates {
    rates: BTreeMap<String, f64>,
}

impl StaticRates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with_rate(mut self, name: impl Into<String>, annual_rate: f64) -> Self {
        self.insert(name, annual_rate);
        self
    }

    /// Insert or replace a rate, returning the previous value
    pub fn insert(&mut self, name: impl Into<String>, annual_rate: f64) -> Option<f64> {
        self.rates.insert(name.into(), annual_rate)
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.rates.iter().map(|(name, rate)| (name.as_str(), *rate))
    }
}

impl RateProvider for StaticRates {
    fn annual_rate(&self, name: &str) -> Option<f64> {
        self.rates.get(name).copied()
    }
}

/// Default annual rates used when a provider has no value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateFallbacks {
    pub selic: f64,
    pub cdi: f64,
    pub ipca: f64,
}

impl Default for RateFallbacks {
    fn default() -> Self {
        Self {
            selic: 0.13,
            cdi: 0.13,
            ipca: 0.04,
        }
    }
}

/// A named annual rate and whether it came from the fallback table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedRate {
    pub name: String,
    pub annual: f64,
    pub fallback: bool,
}

impl ResolvedRate {
    fn resolve<P: RateProvider + ?Sized>(provider: &P, name: &str, default: f64) -> Self {
        match provider.annual_rate(name) {
            Some(annual) => {
                debug!("Rate {} resolved from provider: {:.6}", name, annual);
                Self {
                    name: name.to_string(),
                    annual,
                    fallback: false,
                }
            }
            None => {
                warn!(
                    "Rate {} unavailable from provider, using default {:.4}",
                    name, default
                );
                Self {
                    name: name.to_string(),
                    annual: default,
                    fallback: true,
                }
            }
        }
    }

    /// Equivalent monthly compounding rate
    pub fn monthly(&self) -> Result<f64> {
        monthly_rate(self.annual)
    }
}

/// Benchmark and inflation rates resolved for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateSnapshot {
    pub selic: ResolvedRate,
    pub cdi: ResolvedRate,
    pub ipca: ResolvedRate,
}

impl RateSnapshot {
    /// Look up Selic, CDI and IPCA, substituting fallbacks for missing names
    pub fn resolve<P: RateProvider + ?Sized>(provider: &P, fallbacks: &RateFallbacks) -> Self {
        Self {
            selic: ResolvedRate::resolve(provider, SELIC, fallbacks.selic),
            cdi: ResolvedRate::resolve(provider, CDI, fallbacks.cdi),
            ipca: ResolvedRate::resolve(provider, IPCA, fallbacks.ipca),
        }
    }

    /// Monthly inflation rate used to deflate every series in the run
    pub fn inflation_monthly(&self) -> Result<f64> {
        self.ipca.monthly()
    }

    /// True if any rate came from the fallback table
    pub fn uses_fallbacks(&self) -> bool {
        self.selic.fallback || self.cdi.fallback || self.ipca.fallback
    }
}

//! Investment scenarios and the default scenario catalog
//!
//! A scenario is one named alternative with its own monthly growth rate and
//! the category it is ranked in. The catalog builds the standard comparison
//! set from resolved benchmark rates.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::rates::{validate_rate, RateSnapshot};

/// Ranking group for a scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Savings accounts, treasury bonds, deposit-linked products
    FixedIncome,
    /// Equities, crypto assets
    VariableIncome,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 2] = [Category::FixedIncome, Category::VariableIncome];

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            Category::FixedIncome => "Renda Fixa",
            Category::VariableIncome => "Renda Variável",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One named investment alternative
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Unique within a run
    pub name: String,

    /// Monthly growth rate as a fraction
    pub periodic_rate: f64,

    pub category: Category,
}

impl Scenario {
    pub fn new(name: impl Into<String>, periodic_rate: f64, category: Category) -> Self {
        Self {
            name: name.into(),
            periodic_rate,
            category,
        }
    }

    /// Build a scenario from an annual rate, normalized to monthly compounding
    pub fn from_annual(
        name: impl Into<String>,
        annual_rate: f64,
        category: Category,
    ) -> Result<Self> {
        let periodic_rate = crate::rates::monthly_rate(annual_rate)?;
        Ok(Self::new(name, periodic_rate, category))
    }
}

/// Savings account monthly yield
pub const DEFAULT_SAVINGS_MONTHLY_RATE: f64 = 0.005;
/// Placeholder monthly growth for the crypto scenario
pub const DEFAULT_BITCOIN_MONTHLY_RATE: f64 = 0.02;
/// Placeholder monthly growth for the equity scenario
pub const DEFAULT_EQUITY_MONTHLY_RATE: f64 = 0.012;
/// Equity ticker used when none is given
pub const DEFAULT_TICKER: &str = "PETR4";

/// Inputs for the default scenario catalog that do not come from a rate provider
///
/// The variable-income rates are assumptions supplied by the caller. Nothing
/// here derives them from market prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub savings_monthly_rate: f64,
    pub bitcoin_monthly_rate: f64,
    pub equity_monthly_rate: f64,
    pub ticker: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            savings_monthly_rate: DEFAULT_SAVINGS_MONTHLY_RATE,
            bitcoin_monthly_rate: DEFAULT_BITCOIN_MONTHLY_RATE,
            equity_monthly_rate: DEFAULT_EQUITY_MONTHLY_RATE,
            ticker: DEFAULT_TICKER.to_string(),
        }
    }
}

/// Build the standard comparison set
///
/// Order: Poupança, Tesouro Selic, CDI, Bitcoin, Ação `<TICKER>`.
pub fn default_scenarios(rates: &RateSnapshot, config: &CatalogConfig) -> Result<Vec<Scenario>> {
    validate_rate(config.savings_monthly_rate)?;
    validate_rate(config.bitcoin_monthly_rate)?;
    validate_rate(config.equity_monthly_rate)?;

    let ticker = config.ticker.trim().to_uppercase();

    Ok(vec![
        Scenario::new("Poupança", config.savings_monthly_rate, Category::FixedIncome),
        Scenario::new("Tesouro Selic", rates.selic.monthly()?, Category::FixedIncome),
        Scenario::new("CDI", rates.cdi.monthly()?, Category::FixedIncome),
        Scenario::new("Bitcoin", config.bitcoin_monthly_rate, Category::VariableIncome),
        Scenario::new(
            format!("Ação {}", ticker),
            config.equity_monthly_rate,
            Category::VariableIncome,
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimulationError;
    use crate::rates::{RateFallbacks, StaticRates, CDI, SELIC};
    use approx::assert_relative_eq;

    fn snapshot() -> RateSnapshot {
        let rates = StaticRates::new().with_rate(SELIC, 0.1375).with_rate(CDI, 0.1365);
        RateSnapshot::resolve(&rates, &RateFallbacks::default())
    }

    #[test]
    fn test_default_catalog_order_and_categories() {
        let scenarios = default_scenarios(&snapshot(), &CatalogConfig::default()).unwrap();

        let names: Vec<_> = scenarios.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Poupança", "Tesouro Selic", "CDI", "Bitcoin", "Ação PETR4"]);

        let categories: Vec<_> = scenarios.iter().map(|s| s.category).collect();
        assert_eq!(
            categories,
            [
                Category::FixedIncome,
                Category::FixedIncome,
                Category::FixedIncome,
                Category::VariableIncome,
                Category::VariableIncome,
            ]
        );
    }

    #[test]
    fn test_catalog_normalizes_benchmark_rates() {
        let scenarios = default_scenarios(&snapshot(), &CatalogConfig::default()).unwrap();

        assert_eq!(scenarios[0].periodic_rate, 0.005);
        let selic = (1.0 + scenarios[1].periodic_rate).powi(12);
        let cdi = (1.0 + scenarios[2].periodic_rate).powi(12);
        assert_relative_eq!(selic, 1.1375, max_relative = 1e-12);
        assert_relative_eq!(cdi, 1.1365, max_relative = 1e-12);
        assert_eq!(scenarios[3].periodic_rate, 0.02);
        assert_eq!(scenarios[4].periodic_rate, 0.012);
    }

    #[test]
    fn test_catalog_uppercases_ticker() {
        let config = CatalogConfig {
            ticker: " vale3 ".to_string(),
            equity_monthly_rate: 0.008,
            ..CatalogConfig::default()
        };
        let scenarios = default_scenarios(&snapshot(), &config).unwrap();
        assert_eq!(scenarios[4].name, "Ação VALE3");
        assert_eq!(scenarios[4].periodic_rate, 0.008);
    }

    #[test]
    fn test_catalog_rejects_invalid_placeholder_rate() {
        let config = CatalogConfig {
            bitcoin_monthly_rate: -1.0,
            ..CatalogConfig::default()
        };
        assert_eq!(
            default_scenarios(&snapshot(), &config),
            Err(SimulationError::InvalidRate { rate: -1.0 })
        );
    }

    #[test]
    fn test_from_annual() {
        let scenario = Scenario::from_annual("CDB", 0.12, Category::FixedIncome).unwrap();
        assert_relative_eq!((1.0 + scenario.periodic_rate).powi(12), 1.12, max_relative = 1e-12);
        assert!(Scenario::from_annual("Bad", -1.2, Category::FixedIncome).is_err());
    }

    #[test]
    fn test_category_labels_and_order() {
        assert_eq!(Category::FixedIncome.to_string(), "Renda Fixa");
        assert_eq!(Category::VariableIncome.to_string(), "Renda Variável");
        assert!(Category::FixedIncome < Category::VariableIncome);
    }
}

//! Per-category ranking of scenarios by real return

use std::collections::BTreeMap;

use serde::Serialize;

use crate::projection::ScenarioMetrics;
use crate::scenario::{Category, Scenario};

/// One ranked scenario
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingEntry {
    pub scenario_name: String,

    /// `(terminal_real - invested) / invested`, 0 when nothing was invested
    pub real_return_fraction: f64,

    pub real_terminal_balance: f64,
}

/// Rankings keyed by category, in category declaration order
pub type CategoryRankings = BTreeMap<Category, Vec<RankingEntry>>;

/// Group scenarios by category and order each group by real return, best first
///
/// The sort is stable: scenarios with equal real return keep their input
/// order. Every category is present in the output, empty if it has no
/// scenarios. Keys follow IEEE total order, so a NaN return (a balance that
/// overflowed) ranks above `+inf` if positive and below `-inf` if negative.
pub fn rank<'a, I>(items: I) -> CategoryRankings
where
    I: IntoIterator<Item = (&'a Scenario, &'a ScenarioMetrics)>,
{
    let mut rankings: CategoryRankings = Category::ALL
        .iter()
        .map(|&category| (category, Vec::new()))
        .collect();

    for (scenario, metrics) in items {
        rankings
            .entry(scenario.category)
            .or_default()
            .push(RankingEntry {
                scenario_name: scenario.name.clone(),
                real_return_fraction: metrics.real_return_fraction(),
                real_terminal_balance: metrics.terminal_real,
            });
    }

    for entries in rankings.values_mut() {
        entries.sort_by(|a, b| b.real_return_fraction.total_cmp(&a.real_return_fraction));
    }

    rankings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(terminal_real: f64, invested: f64) -> ScenarioMetrics {
        ScenarioMetrics {
            invested,
            terminal_nominal: terminal_real,
            terminal_real,
            profit_nominal: terminal_real - invested,
            profit_fraction: 0.0,
        }
    }

    fn names(entries: &[RankingEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.scenario_name.as_str()).collect()
    }

    #[test]
    fn test_rank_descending_within_category() {
        let scenarios = [
            Scenario::new("Poupança", 0.005, Category::FixedIncome),
            Scenario::new("Bitcoin", 0.02, Category::VariableIncome),
            Scenario::new("CDI", 0.01, Category::FixedIncome),
            Scenario::new("Ação VALE3", 0.012, Category::VariableIncome),
        ];
        let results = [
            metrics(1100.0, 1000.0),
            metrics(1500.0, 1000.0),
            metrics(1200.0, 1000.0),
            metrics(1300.0, 1000.0),
        ];

        let rankings = rank(scenarios.iter().zip(results.iter()));

        assert_eq!(names(&rankings[&Category::FixedIncome]), ["CDI", "Poupança"]);
        assert_eq!(names(&rankings[&Category::VariableIncome]), ["Bitcoin", "Ação VALE3"]);

        let top = &rankings[&Category::FixedIncome][0];
        assert!((top.real_return_fraction - 0.2).abs() < 1e-12);
        assert_eq!(top.real_terminal_balance, 1200.0);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let scenarios = [
            Scenario::new("A", 0.01, Category::FixedIncome),
            Scenario::new("B", 0.01, Category::FixedIncome),
            Scenario::new("C", 0.02, Category::FixedIncome),
            Scenario::new("D", 0.01, Category::FixedIncome),
        ];
        let results = [
            metrics(1100.0, 1000.0),
            metrics(1100.0, 1000.0),
            metrics(1300.0, 1000.0),
            metrics(1100.0, 1000.0),
        ];

        let rankings = rank(scenarios.iter().zip(results.iter()));
        assert_eq!(names(&rankings[&Category::FixedIncome]), ["C", "A", "B", "D"]);
    }

    #[test]
    fn test_rank_is_deterministic() {
        let scenarios: Vec<_> = (0..20)
            .map(|i| Scenario::new(format!("S{}", i), 0.0, Category::VariableIncome))
            .collect();
        let results: Vec<_> = (0..20).map(|i| metrics(1000.0 + (i % 3) as f64, 1000.0)).collect();

        let first = rank(scenarios.iter().zip(results.iter()));
        let second = rank(scenarios.iter().zip(results.iter()));
        assert_eq!(first, second);
    }

    #[test]
    fn test_all_categories_present() {
        let scenarios = [Scenario::new("CDI", 0.01, Category::FixedIncome)];
        let results = [metrics(1100.0, 1000.0)];

        let rankings = rank(scenarios.iter().zip(results.iter()));
        assert_eq!(rankings.len(), 2);
        assert!(rankings[&Category::VariableIncome].is_empty());

        let order: Vec<_> = rankings.keys().copied().collect();
        assert_eq!(order, [Category::FixedIncome, Category::VariableIncome]);
    }

    #[test]
    fn test_zero_invested_ranks_as_zero_return() {
        let scenarios = [
            Scenario::new("A", 0.01, Category::FixedIncome),
            Scenario::new("B", 0.02, Category::FixedIncome),
        ];
        let results = [metrics(0.0, 0.0), metrics(0.0, 0.0)];

        let rankings = rank(scenarios.iter().zip(results.iter()));
        let fixed = &rankings[&Category::FixedIncome];
        assert_eq!(names(fixed), ["A", "B"]);
        assert!(fixed.iter().all(|e| e.real_return_fraction == 0.0));
    }

    #[test]
    fn test_nan_returns_are_totally_ordered() {
        let scenarios: Vec<_> = (0..64)
            .map(|i| Scenario::new(format!("S{}", i), 0.01, Category::FixedIncome))
            .collect();
        let results: Vec<_> = (0..64)
            .map(|i| {
                if i % 5 == 0 {
                    metrics(f64::NAN, 1000.0)
                } else {
                    metrics(1000.0 + ((i * 37) % 23) as f64 * 10.0, 1000.0)
                }
            })
            .collect();

        let rankings = rank(scenarios.iter().zip(results.iter()));
        let fixed = &rankings[&Category::FixedIncome];
        assert_eq!(fixed.len(), 64);

        // NaN entries form one contiguous block, kept in input order
        let nan_positions: Vec<_> = fixed
            .iter()
            .enumerate()
            .filter(|(_, e)| e.real_return_fraction.is_nan())
            .map(|(pos, _)| pos)
            .collect();
        assert_eq!(nan_positions.len(), 13);
        assert!(nan_positions.windows(2).all(|w| w[1] == w[0] + 1));

        let nan_names: Vec<_> = nan_positions
            .iter()
            .map(|&pos| fixed[pos].scenario_name.clone())
            .collect();
        let expected: Vec<_> = (0..64).step_by(5).map(|i| format!("S{}", i)).collect();
        assert_eq!(nan_names, expected);

        let finite: Vec<_> = fixed.iter().filter(|e| !e.real_return_fraction.is_nan()).collect();
        assert_eq!(finite.len(), 51);
        for pair in finite.windows(2) {
            assert!(pair[0].real_return_fraction >= pair[1].real_return_fraction);
        }

        let again = rank(scenarios.iter().zip(results.iter()));
        assert_eq!(names(&again[&Category::FixedIncome]), names(fixed));
    }
}

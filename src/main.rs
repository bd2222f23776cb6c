//! Investment Simulator CLI
//!
//! Command-line interface for comparing recurring-investment scenarios

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use serde::Serialize;

use investment_simulator::{
    default_scenarios, run,
    rates::{load_rates, RateFallbacks, RateSnapshot, StaticRates},
    scenario::{
        CatalogConfig, DEFAULT_BITCOIN_MONTHLY_RATE, DEFAULT_EQUITY_MONTHLY_RATE,
        DEFAULT_SAVINGS_MONTHLY_RATE, DEFAULT_TICKER,
    },
    SeriesTable, SimulationReport, SimulationRun,
};

/// Compare nominal and inflation-adjusted growth of recurring investments
#[derive(Debug, Parser)]
#[command(name = "investment_simulator", version)]
struct Args {
    /// Initial balance (R$)
    #[arg(long, default_value_t = 1000.0)]
    initial: f64,

    /// Monthly contribution (R$)
    #[arg(long, default_value_t = 200.0)]
    contribution: f64,

    /// Investment horizon in months
    #[arg(long, default_value_t = 24)]
    months: u32,

    /// Equity ticker for the stock scenario
    #[arg(long, default_value = DEFAULT_TICKER)]
    ticker: String,

    /// CSV rate table (`nome,valor`, percent values); defaults apply to missing rates
    #[arg(long)]
    rates: Option<PathBuf>,

    /// Monthly savings account yield
    #[arg(long, default_value_t = DEFAULT_SAVINGS_MONTHLY_RATE)]
    savings_rate: f64,

    /// Assumed monthly growth for the crypto scenario
    #[arg(long, default_value_t = DEFAULT_BITCOIN_MONTHLY_RATE)]
    bitcoin_rate: f64,

    /// Assumed monthly growth for the equity scenario
    #[arg(long, default_value_t = DEFAULT_EQUITY_MONTHLY_RATE)]
    equity_rate: f64,

    /// Write the period-by-period table as CSV
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write the period-by-period table as JSON
    #[arg(long)]
    table_json: Option<PathBuf>,

    /// Write the full report as JSON
    #[arg(long)]
    json: Option<PathBuf>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: DateTime<Utc>,
    rates: &'a RateSnapshot,
    report: &'a SimulationReport,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let provider = match &args.rates {
        Some(path) => load_rates(path)
            .with_context(|| format!("Failed to load rates from {}", path.display()))?,
        None => StaticRates::new(),
    };
    let rates = RateSnapshot::resolve(&provider, &RateFallbacks::default());

    let catalog = CatalogConfig {
        savings_monthly_rate: args.savings_rate,
        bitcoin_monthly_rate: args.bitcoin_rate,
        equity_monthly_rate: args.equity_rate,
        ticker: args.ticker.clone(),
    };
    let scenarios = default_scenarios(&rates, &catalog)?;

    let params = SimulationRun::new(
        args.initial,
        args.contribution,
        args.months,
        rates.inflation_monthly()?,
        scenarios,
    );
    let report = run(&params)?;

    println!("Investment Simulator v{}", env!("CARGO_PKG_VERSION"));
    println!("======================\n");
    println!("Rates (annual):");
    for rate in [&rates.selic, &rates.cdi, &rates.ipca] {
        let source = if rate.fallback { " (default)" } else { "" };
        println!("  {:<6} {:>7.2}%{}", rate.name, rate.annual * 100.0, source);
    }

    println!("\nFinal Results ({} months, invested R$ {:.2}):", params.horizon, params.invested());
    for result in &report.results {
        let m = &result.metrics;
        println!(
            "  {:<16} Final R$ {:>12.2} | Profit R$ {:>12.2} ({:>7.2}%) | Real R$ {:>12.2}",
            result.scenario.name,
            m.terminal_nominal,
            m.profit_nominal,
            m.profit_fraction * 100.0,
            m.terminal_real,
        );
    }

    println!("\nRankings by Category (real return):");
    for (category, entries) in &report.rankings {
        println!("  {}", category);
        for (position, entry) in entries.iter().enumerate() {
            println!(
                "    {}. {:<16} Real R$ {:>12.2} | Return {:>7.2}%",
                position + 1,
                entry.scenario_name,
                entry.real_terminal_balance,
                entry.real_return_fraction * 100.0,
            );
        }
    }

    if args.csv.is_some() || args.table_json.is_some() {
        println!();
        let table = SeriesTable::from_report(&report);

        if let Some(path) = &args.csv {
            table
                .write_csv_file(path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Table written to: {}", path.display());
        }

        if let Some(path) = &args.table_json {
            table
                .write_json_file(path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Table written to: {}", path.display());
        }
    }

    if let Some(path) = &args.json {
        let file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        let output = JsonReport {
            generated_at: Utc::now(),
            rates: &rates,
            report: &report,
        };
        serde_json::to_writer_pretty(file, &output)?;
        println!("Report written to: {}", path.display());
    }

    Ok(())
}

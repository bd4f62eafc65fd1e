//! Holding Engine CLI
//!
//! Command-line front end for projections, segment ledgers and catalog summaries.
//! Reads the built-in reference catalog unless `--catalog` (or `CATALOG_DIR`)
//! points at a directory of catalog CSV files.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use holding_engine::format::{format_millions, format_money, format_percent, format_whole_usd};
use holding_engine::projection::{
    approximate_sector_ledger, mean_projected_profit, performance_summary, total_allocation,
    PerformanceSummary, StrategyProjection, DEFAULT_PRINCIPAL,
};
use holding_engine::series::{allocation_series, performance_series, report_series};
use holding_engine::{CalculatorConfig, Catalog, LedgerRow, ScenarioRunner, SectorId, Strategy};

#[derive(Parser)]
#[command(name = "holding-engine", version, about = "Portfolio projections and derived metrics")]
struct Cli {
    /// Directory containing catalog CSV files (overrides CATALOG_DIR)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Print JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compound a principal at a strategy's projected rate
    Project {
        /// Amount invested (USD)
        #[arg(long, default_value_t = DEFAULT_PRINCIPAL, allow_negative_numbers = true)]
        principal: f64,

        /// "balanced" or a sector name
        #[arg(long, default_value = "balanced")]
        strategy: Strategy,

        /// Horizons in years, comma separated
        #[arg(long, value_delimiter = ',', default_values_t = [1, 3, 5])]
        years: Vec<u32>,

        /// Project every strategy instead of one
        #[arg(long)]
        all: bool,
    },
    /// Approximate trailing quarters from a sector's annual figures
    Ledger {
        /// Sector name; all sectors when omitted
        #[arg(long)]
        sector: Option<SectorId>,
    },
    /// Balanced rate, allocation and realized performance per sector
    Summary,
    /// Chart-ready series
    Series {
        #[arg(value_enum)]
        kind: SeriesKind,

        /// Sector for the performance series
        #[arg(long, required_if_eq("kind", "performance"))]
        sector: Option<SectorId>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SeriesKind {
    Allocation,
    Reports,
    Performance,
}

#[derive(Serialize)]
struct SectorLedger<'a> {
    sector: SectorId,
    title: &'a str,
    rows: [LedgerRow; 3],
}

#[derive(Serialize)]
struct SectorSummary<'a> {
    sector: SectorId,
    title: &'a str,
    projected_profit: f64,
    allocation: f64,
    performance: Option<PerformanceSummary>,
}

#[derive(Serialize)]
struct CatalogSummary<'a> {
    balanced_rate: f64,
    total_allocation: f64,
    sectors: Vec<SectorSummary<'a>>,
}

fn load_catalog(path: Option<PathBuf>) -> Result<Catalog> {
    let path = path.or_else(|| env::var_os("CATALOG_DIR").map(PathBuf::from));

    match path {
        Some(dir) => Catalog::from_csv_path(&dir)
            .with_context(|| format!("failed to load catalog from {}", dir.display())),
        None => Ok(Catalog::reference()),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_projection(result: &StrategyProjection) {
    println!(
        "{} ({}% projected annual yield)",
        result.strategy.label, result.strategy.rate_percent
    );
    println!("{:>8} {:>18} {:>18}", "Years", "Profit", "Value");
    for p in &result.projections {
        let profit = format_whole_usd(p.profit);
        let profit = if p.profit >= 0.0 { format!("+{}", profit) } else { profit };
        println!("{:>8} {:>18} {:>18}", p.years, profit, format_whole_usd(p.total));
    }
    println!();
}

fn print_ledger(ledger: &SectorLedger<'_>) {
    println!("{} segment ledger", ledger.title);
    println!("{:>10} {:>12} {:>12} {:>10}", "Period", "Revenue", "Profit", "Status");
    for row in &ledger.rows {
        println!(
            "{:>10} {:>12} {:>12} {:>10}",
            row.period,
            format_millions(row.revenue),
            format_millions(row.profit),
            format!("{:?}", row.status)
        );
    }
    println!();
}

fn run(cli: Cli) -> Result<()> {
    let catalog = load_catalog(cli.catalog)?;

    match cli.command {
        Command::Project { principal, strategy, years, all } => {
            let runner = ScenarioRunner::with_config(catalog, CalculatorConfig { principal, horizons: years });

            let results = if all {
                runner.run_all()?
            } else {
                vec![runner.run(strategy)?]
            };

            if cli.json {
                print_json(&results)?;
            } else {
                println!("Principal: {}\n", format_whole_usd(principal));
                results.iter().for_each(print_projection);
            }
        }
        Command::Ledger { sector } => {
            let selected: Vec<_> = match sector {
                Some(id) => vec![catalog
                    .sector(id)
                    .with_context(|| format!("sector {} is not in the catalog", id))?],
                None => catalog.sectors().iter().collect(),
            };

            let ledgers = selected
                .into_iter()
                .map(|s| {
                    Ok(SectorLedger {
                        sector: s.id,
                        title: &s.title,
                        rows: approximate_sector_ledger(s)?,
                    })
                })
                .collect::<Result<Vec<_>>>()?;

            if cli.json {
                print_json(&ledgers)?;
            } else {
                ledgers.iter().for_each(print_ledger);
            }
        }
        Command::Summary => {
            let sectors = catalog
                .sectors()
                .iter()
                .map(|s| SectorSummary {
                    sector: s.id,
                    title: &s.title,
                    projected_profit: s.projected_profit,
                    allocation: s.allocation,
                    performance: performance_summary(catalog.performance(s.id)).ok(),
                })
                .collect();

            let summary = CatalogSummary {
                balanced_rate: mean_projected_profit(catalog.sectors())?,
                total_allocation: total_allocation(catalog.sectors()),
                sectors,
            };

            if cli.json {
                print_json(&summary)?;
            } else {
                println!("Balanced projected yield: {:.2}%", summary.balanced_rate);
                println!("Total allocation: {}%\n", summary.total_allocation);
                println!(
                    "{:<26} {:>8} {:>8} {:>10} {:>10} {:>14}",
                    "Sector", "Yield", "Alloc", "Mean ROI", "Mean Vol", "Valuation"
                );
                for (row, record) in summary.sectors.iter().zip(catalog.sectors()) {
                    let (roi, vol) = row
                        .performance
                        .map(|p| (format!("{:.2}", p.mean_roi), format!("{:.2}", p.mean_volatility)))
                        .unwrap_or_else(|| ("-".to_string(), "-".to_string()));
                    println!(
                        "{:<26} {:>8} {:>7}% {:>10} {:>10} {:>14}",
                        row.title,
                        format_percent(row.projected_profit),
                        row.allocation,
                        roi,
                        vol,
                        format_money(&record.financials.valuation)
                    );
                }
            }
        }
        Command::Series { kind, sector } => match kind {
            SeriesKind::Allocation => print_json(&allocation_series(&catalog))?,
            SeriesKind::Reports => print_json(&report_series(&catalog))?,
            SeriesKind::Performance => {
                let sector = sector.context("--sector is required for the performance series")?;
                print_json(&performance_series(&catalog, sector)?)?
            }
        },
    }

    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    run(Cli::parse())
}

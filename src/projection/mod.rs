//! Projection engine: compound growth, strategy resolution, segment ledgers and card statistics

mod growth;
mod strategy;
mod ledger;
mod stats;
mod engine;

pub use growth::{project, ProjectionResult, STANDARD_HORIZONS};
pub use strategy::{resolve_strategy, ResolvedStrategy, Strategy, BALANCED_COLOR, BALANCED_LABEL};
pub use ledger::{
    approximate_quarters, approximate_sector_ledger, LedgerRow, LedgerStatus, LEDGER_PERIODS, QUARTER_DIVISORS,
};
pub use stats::{mean_projected_profit, performance_summary, total_allocation, PerformanceSummary};
pub use engine::{ProjectionEngine, CalculatorConfig, StrategyProjection, DEFAULT_PRINCIPAL};

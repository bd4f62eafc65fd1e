//! Holding Engine - Projection and derived-metrics engine for a diversified holding portfolio
//!
//! This library provides:
//! - An immutable reference catalog of sectors, quarterly reports and audit entries
//! - Compound-growth projections per sector or for the balanced portfolio
//! - Segment ledgers approximated from annual figures
//! - Card statistics and chart-ready series
//! - Display formatting for the presentation boundary

pub mod error;
pub mod catalog;
pub mod projection;
pub mod scenario;
pub mod series;
pub mod format;

// Re-export commonly used types
pub use error::{CatalogError, EngineError, EngineResult};
pub use catalog::{Catalog, SectorId, SectorRecord, FinancialReportPoint};
pub use projection::{project, resolve_strategy, approximate_quarters, mean_projected_profit};
pub use projection::{ProjectionResult, Strategy, ResolvedStrategy, LedgerRow, ProjectionEngine, CalculatorConfig};
pub use scenario::ScenarioRunner;

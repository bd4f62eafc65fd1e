//! Calculator engine: one strategy projected across a set of horizons

use serde::{Deserialize, Serialize};

use super::growth::{project, ProjectionResult, STANDARD_HORIZONS};
use super::strategy::{resolve_strategy, ResolvedStrategy, Strategy};
use crate::catalog::Catalog;
use crate::error::EngineResult;

/// Principal the calculator starts from (USD)
pub const DEFAULT_PRINCIPAL: f64 = 100_000.0;

/// Configuration for a calculator run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Amount invested at year 0
    pub principal: f64,

    /// Horizons to project, in years
    pub horizons: Vec<u32>,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            principal: DEFAULT_PRINCIPAL,
            horizons: STANDARD_HORIZONS.to_vec(),
        }
    }
}

/// A resolved strategy with one projection per configured horizon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyProjection {
    pub strategy: ResolvedStrategy,

    /// Projections in the order the horizons were configured
    pub projections: Vec<ProjectionResult>,
}

impl StrategyProjection {
    /// Projection for a specific horizon, if it was configured
    pub fn at(&self, years: u32) -> Option<&ProjectionResult> {
        self.projections.iter().find(|p| p.years == years)
    }

    /// Projection with the longest horizon
    pub fn longest(&self) -> Option<&ProjectionResult> {
        self.projections.iter().max_by_key(|p| p.years)
    }
}

/// Projection engine bound to a catalog and a calculator configuration
pub struct ProjectionEngine<'a> {
    catalog: &'a Catalog,
    config: CalculatorConfig,
}

impl<'a> ProjectionEngine<'a> {
    /// Create a new projection engine with given catalog and config
    pub fn new(catalog: &'a Catalog, config: CalculatorConfig) -> Self {
        Self { catalog, config }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Resolve `strategy` once and project it at every configured horizon
    pub fn project_strategy(&self, strategy: Strategy) -> EngineResult<StrategyProjection> {
        let resolved = resolve_strategy(strategy, self.catalog)?;

        let projections = self
            .config
            .horizons
            .iter()
            .map(|&years| project(self.config.principal, resolved.rate_percent, years))
            .collect::<EngineResult<Vec<_>>>()?;

        log::debug!(
            "projected {} at {}% over {} horizons",
            resolved.label,
            resolved.rate_percent,
            projections.len()
        );

        Ok(StrategyProjection {
            strategy: resolved,
            projections,
        })
    }
}

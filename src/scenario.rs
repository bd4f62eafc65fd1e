//! Scenario runner for batch projections
//!
//! Holds the catalog once, then runs any number of strategies or principals
//! against it without rebuilding reference data.

use rayon::prelude::*;

use crate::catalog::Catalog;
use crate::error::EngineResult;
use crate::projection::{CalculatorConfig, ProjectionEngine, Strategy, StrategyProjection};

/// Pre-loaded scenario runner for batch projections
///
/// # Example
/// ```
/// use holding_engine::{Catalog, ScenarioRunner, Strategy};
///
/// let runner = ScenarioRunner::new(Catalog::reference());
/// let balanced = runner.run(Strategy::Balanced).unwrap();
/// assert_eq!(balanced.projections.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    catalog: Catalog,
    config: CalculatorConfig,
}

impl ScenarioRunner {
    /// Create runner with the default calculator configuration
    pub fn new(catalog: Catalog) -> Self {
        Self::with_config(catalog, CalculatorConfig::default())
    }

    pub fn with_config(catalog: Catalog, config: CalculatorConfig) -> Self {
        Self { catalog, config }
    }

    /// Every selectable strategy: balanced first, then sectors in catalog order
    pub fn strategies(&self) -> Vec<Strategy> {
        std::iter::once(Strategy::Balanced)
            .chain(self.catalog.sectors().iter().map(|s| Strategy::Sector(s.id)))
            .collect()
    }

    /// Run a single strategy with the runner's config
    pub fn run(&self, strategy: Strategy) -> EngineResult<StrategyProjection> {
        ProjectionEngine::new(&self.catalog, self.config.clone()).project_strategy(strategy)
    }

    /// Run every strategy in parallel; output follows `strategies()` order
    pub fn run_all(&self) -> EngineResult<Vec<StrategyProjection>> {
        let strategies = self.strategies();
        log::debug!("running {} strategies", strategies.len());

        let engine = ProjectionEngine::new(&self.catalog, self.config.clone());
        strategies
            .par_iter()
            .map(|&strategy| engine.project_strategy(strategy))
            .collect()
    }

    /// Run one strategy for several principals
    pub fn run_principals(&self, strategy: Strategy, principals: &[f64]) -> EngineResult<Vec<StrategyProjection>> {
        principals
            .iter()
            .map(|&principal| {
                let config = CalculatorConfig {
                    principal,
                    ..self.config.clone()
                };
                ProjectionEngine::new(&self.catalog, config).project_strategy(strategy)
            })
            .collect()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new(Catalog::reference())
    }
}

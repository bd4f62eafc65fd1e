//! Strategy selection: a single sector, or the synthetic balanced portfolio

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::stats::mean_projected_profit;
use crate::catalog::{Catalog, SectorId};
use crate::error::{EngineError, EngineResult};

pub const BALANCED_LABEL: &str = "Balanced Portfolio";
pub const BALANCED_COLOR: &str = "#6366f1";

/// What the calculator compounds at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Mean projected profit across every sector in the catalog
    Balanced,
    Sector(SectorId),
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Balanced => f.write_str("balanced"),
            Strategy::Sector(id) => write!(f, "{}", id),
        }
    }
}

impl FromStr for Strategy {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("balanced") {
            Ok(Strategy::Balanced)
        } else {
            s.parse().map(Strategy::Sector)
        }
    }
}

impl From<SectorId> for Strategy {
    fn from(id: SectorId) -> Self {
        Strategy::Sector(id)
    }
}

/// A strategy resolved against a catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedStrategy {
    pub strategy: Strategy,
    pub label: String,

    /// Annual rate to compound at (percent)
    pub rate_percent: f64,

    pub color_hint: String,
}

/// Map a strategy to its label, annual rate and color
///
/// The balanced rate is recomputed from the catalog on every call.
///
/// # Errors
/// `NotFound` if the sector is absent from the catalog; `EmptyInput` when
/// resolving `Balanced` against an empty catalog.
pub fn resolve_strategy(strategy: Strategy, catalog: &Catalog) -> EngineResult<ResolvedStrategy> {
    match strategy {
        Strategy::Balanced => Ok(ResolvedStrategy {
            strategy,
            label: BALANCED_LABEL.to_string(),
            rate_percent: mean_projected_profit(catalog.sectors())?,
            color_hint: BALANCED_COLOR.to_string(),
        }),
        Strategy::Sector(id) => {
            let sector = catalog
                .sector(id)
                .ok_or_else(|| EngineError::NotFound(format!("sector {} is not in the catalog", id)))?;

            Ok(ResolvedStrategy {
                strategy,
                label: sector.title.clone(),
                rate_percent: sector.projected_profit,
                color_hint: sector.color.clone(),
            })
        }
    }
}

//! Descriptive statistics shown on sector and portfolio cards

use serde::{Deserialize, Serialize};

use crate::catalog::{SectorPerformance, SectorRecord};
use crate::error::{ensure_finite, EngineError, EngineResult};

/// Arithmetic mean of `projected_profit` across all sectors
///
/// # Errors
/// `EmptyInput` when `sectors` is empty, `InvalidInput` when any sector's
/// projected profit is non-finite or negative.
pub fn mean_projected_profit(sectors: &[SectorRecord]) -> EngineResult<f64> {
    if sectors.is_empty() {
        return Err(EngineError::EmptyInput("mean projected profit over zero sectors"));
    }
    for sector in sectors {
        ensure_finite("projected profit", sector.projected_profit)?;
        if sector.projected_profit < 0.0 {
            return Err(EngineError::InvalidInput(format!(
                "{}: projected profit must not be negative, got {}",
                sector.id, sector.projected_profit
            )));
        }
    }

    let sum: f64 = sectors.iter().map(|s| s.projected_profit).sum();
    Ok(sum / sectors.len() as f64)
}

/// Sum of sector allocations (percent); expected to be 100 but not enforced
pub fn total_allocation(sectors: &[SectorRecord]) -> f64 {
    sectors.iter().map(|s| s.allocation).sum()
}

/// Summary of realized monthly samples for one sector
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSummary {
    pub months: usize,
    pub mean_roi: f64,
    pub mean_volatility: f64,
    pub best_roi: f64,
    pub worst_roi: f64,
}

/// Summarize monthly ROI and volatility samples
///
/// # Errors
/// `EmptyInput` when there are no samples, `InvalidInput` when a sample is
/// non-finite.
pub fn performance_summary(samples: &[SectorPerformance]) -> EngineResult<PerformanceSummary> {
    if samples.is_empty() {
        return Err(EngineError::EmptyInput("performance summary over zero samples"));
    }
    for sample in samples {
        ensure_finite("roi", sample.roi)?;
        ensure_finite("volatility", sample.volatility)?;
    }

    let n = samples.len() as f64;
    let mean_roi = samples.iter().map(|s| s.roi).sum::<f64>() / n;
    let mean_volatility = samples.iter().map(|s| s.volatility).sum::<f64>() / n;
    let best_roi = samples.iter().map(|s| s.roi).fold(f64::NEG_INFINITY, f64::max);
    let worst_roi = samples.iter().map(|s| s.roi).fold(f64::INFINITY, f64::min);

    Ok(PerformanceSummary {
        months: samples.len(),
        mean_roi,
        mean_volatility,
        best_roi,
        worst_roi,
    })
}

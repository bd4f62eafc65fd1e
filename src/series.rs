//! Chart-ready series derived from the catalog

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, FinancialReportPoint, SectorId, SectorPerformance};
use crate::error::{EngineError, EngineResult};

/// One slice of the allocation chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationSlice {
    pub label: String,
    pub value: f64,
    pub color: String,
}

/// Portfolio allocation by sector, in catalog order
pub fn allocation_series(catalog: &Catalog) -> Vec<AllocationSlice> {
    catalog
        .sectors()
        .iter()
        .map(|s| AllocationSlice {
            label: s.title.clone(),
            value: s.allocation,
            color: s.color.clone(),
        })
        .collect()
}

/// Quarterly revenue, profit and assets, oldest first
pub fn report_series(catalog: &Catalog) -> Vec<FinancialReportPoint> {
    catalog.financial_reports().to_vec()
}

/// Monthly ROI and volatility for one sector
///
/// # Errors
/// `NotFound` if the sector is absent from the catalog.
pub fn performance_series(catalog: &Catalog, sector: SectorId) -> EngineResult<Vec<SectorPerformance>> {
    if catalog.sector(sector).is_none() {
        return Err(EngineError::NotFound(format!("sector {} is not in the catalog", sector)));
    }
    Ok(catalog.performance(sector).to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_allocation_series() {
        let catalog = Catalog::reference();
        let slices = allocation_series(&catalog);

        assert_eq!(slices.len(), 5);
        assert_eq!(slices[0].label, "Strategic Mining");
        assert_eq!(slices[0].value, 30.0);
        assert_eq!(slices[4].color, "#ec4899");
        assert_eq!(slices.iter().map(|s| s.value).sum::<f64>(), 100.0);
    }

    #[test]
    fn test_report_series_chronological() {
        let catalog = Catalog::reference();
        let series = report_series(&catalog);

        let quarters: Vec<_> = series.iter().map(|p| p.quarter.as_str()).collect();
        assert_eq!(quarters, vec!["Q1 2024", "Q2 2024", "Q3 2024", "Q4 2024 (Proj)"]);
        assert_eq!(series[3].assets, 18_500_000.0);
    }

    #[test]
    fn test_performance_series() {
        let catalog = Catalog::reference();
        let energy = performance_series(&catalog, SectorId::Energy).unwrap();
        assert_eq!(energy.first().unwrap().month, "Jan");
        assert_eq!(energy.last().unwrap().roi, 18.1);

        let empty = Catalog::new(Vec::new(), Vec::new(), BTreeMap::new(), Vec::new());
        assert!(matches!(
            performance_series(&empty, SectorId::Energy),
            Err(EngineError::NotFound(_))
        ));
    }
}

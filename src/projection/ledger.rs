//! Segment ledger: illustrative trailing quarters derived from LTM figures

use serde::{Deserialize, Serialize};

use crate::catalog::SectorRecord;
use crate::error::{ensure_finite, EngineResult};

/// Divisors applied to annual figures, oldest quarter first
pub const QUARTER_DIVISORS: [f64; 3] = [4.5, 4.2, 4.0];

/// Period labels matching `QUARTER_DIVISORS`
pub const LEDGER_PERIODS: [&str; 3] = ["Q1 2024", "Q2 2024", "Q3 2024"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerStatus {
    Audited,
}

/// One quarter of a segment ledger, in the same unit as the annual inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerRow {
    pub period: String,
    pub revenue: f64,
    pub profit: f64,
    pub status: LedgerStatus,
}

/// Split annual revenue and profit into three ramping quarters
///
/// Rows run oldest to most recent, each the annual figure over the matching
/// entry of `QUARTER_DIVISORS`.
pub fn approximate_quarters(annual_revenue: f64, annual_profit: f64) -> EngineResult<[LedgerRow; 3]> {
    ensure_finite("annual revenue", annual_revenue)?;
    ensure_finite("annual profit", annual_profit)?;

    Ok(std::array::from_fn(|i| LedgerRow {
        period: LEDGER_PERIODS[i].to_string(),
        revenue: annual_revenue / QUARTER_DIVISORS[i],
        profit: annual_profit / QUARTER_DIVISORS[i],
        status: LedgerStatus::Audited,
    }))
}

/// Segment ledger for a sector's LTM revenue and profit
pub fn approximate_sector_ledger(sector: &SectorRecord) -> EngineResult<[LedgerRow; 3]> {
    approximate_quarters(sector.financials.revenue, sector.financials.profit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, SectorId};
    use crate::error::EngineError;
    use approx::assert_relative_eq;

    fn round2(x: f64) -> f64 {
        (x * 100.0).round() / 100.0
    }

    #[test]
    fn test_mining_ledger_in_millions() {
        let rows = approximate_quarters(145.2, 42.8).unwrap();

        let rounded: Vec<(f64, f64)> = rows.iter().map(|r| (round2(r.revenue), round2(r.profit))).collect();
        assert_eq!(rounded, vec![(32.27, 9.51), (34.57, 10.19), (36.30, 10.70)]);

        assert_eq!(rows[0].period, "Q1 2024");
        assert_eq!(rows[2].period, "Q3 2024");
        assert!(rows.iter().all(|r| r.status == LedgerStatus::Audited));
    }

    #[test]
    fn test_exact_division() {
        let rows = approximate_quarters(145.2, 42.8).unwrap();
        assert_eq!(rows[0].revenue, 145.2 / 4.5);
        assert_eq!(rows[1].profit, 42.8 / 4.2);
        assert_eq!(rows[2].revenue, 145.2 / 4.0);
    }

    #[test]
    fn test_quarters_ramp_upward() {
        let rows = approximate_quarters(1_000.0, 250.0).unwrap();
        assert!(rows[0].revenue < rows[1].revenue && rows[1].revenue < rows[2].revenue);
        assert!(rows[0].profit < rows[1].profit && rows[1].profit < rows[2].profit);
    }

    #[test]
    fn test_sector_ledger_uses_absolute_units() {
        let catalog = Catalog::reference();
        let mining = catalog.sector(SectorId::Mining).unwrap();
        let rows = approximate_sector_ledger(mining).unwrap();

        assert_relative_eq!(rows[2].revenue, 36_300_000.0, max_relative = 1e-12);
        assert_relative_eq!(rows[2].profit, 10_700_000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(matches!(approximate_quarters(f64::NAN, 1.0), Err(EngineError::InvalidInput(_))));
        assert!(matches!(approximate_quarters(1.0, f64::INFINITY), Err(EngineError::InvalidInput(_))));
    }
}

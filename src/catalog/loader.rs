//! CSV-based catalog loader
//!
//! Loads the sector catalog and company reports from CSV files in data/catalog/

use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use super::records::{AuditLogEntry, AuditStatus, FinancialReportPoint, SectorPerformance};
use super::sector::{Currency, MarketTrend, MoneyAmount, SectorFinancials, SectorId, SectorRecord};
use crate::error::{CatalogError, EngineError};

/// Default path to the catalog directory
pub const DEFAULT_CATALOG_PATH: &str = "data/catalog";

const SECTORS_FILE: &str = "sectors.csv";
const REPORTS_FILE: &str = "financial_reports.csv";
const PERFORMANCE_FILE: &str = "performance.csv";
const AUDIT_FILE: &str = "audit_log.csv";

/// Raw row of sectors.csv
#[derive(Debug, Deserialize)]
struct SectorRow {
    id: String,
    title: String,
    description: String,
    full_detail: String,
    icon: String,
    projected_profit: f64,
    allocation: f64,
    market_trend: String,
    color: String,
    revenue: f64,
    profit: f64,
    valuation: f64,
    valuation_currency: String,
    growth_pct: f64,
    financing_need: Option<f64>,
    financing_need_currency: Option<String>,
}

impl SectorRow {
    fn to_record(self) -> Result<SectorRecord, CatalogError> {
        let bad = |reason: String| CatalogError::invalid(SECTORS_FILE, reason);

        let id: SectorId = self.id.parse().map_err(|e| bad(format!("{}", e)))?;

        let numeric = [
            ("projected_profit", self.projected_profit),
            ("allocation", self.allocation),
            ("revenue", self.revenue),
            ("profit", self.profit),
            ("valuation", self.valuation),
            ("growth_pct", self.growth_pct),
        ];
        for (name, value) in numeric {
            if !value.is_finite() {
                return Err(bad(format!("{}: {} is not finite", id, name)));
            }
        }
        if self.projected_profit < 0.0 {
            return Err(bad(format!(
                "{}: projected_profit must not be negative, got {}",
                id, self.projected_profit
            )));
        }

        let market_trend: MarketTrend = self.market_trend.parse().map_err(|e| bad(format!("{}: {}", id, e)))?;
        let valuation_currency: Currency = self
            .valuation_currency
            .parse()
            .map_err(|e| bad(format!("{}: {}", id, e)))?;

        let financing_need = match (self.financing_need, self.financing_need_currency) {
            (None, None) => None,
            (Some(amount), Some(currency)) => {
                if !amount.is_finite() {
                    return Err(bad(format!("{}: financing_need is not finite", id)));
                }
                let currency: Currency = currency.parse().map_err(|e| bad(format!("{}: {}", id, e)))?;
                Some(MoneyAmount { amount, currency })
            }
            (Some(_), None) => return Err(bad(format!("{}: financing_need has no currency", id))),
            (None, Some(currency)) => {
                return Err(bad(format!(
                    "{}: financing_need_currency {} given without an amount",
                    id, currency
                )))
            }
        };

        Ok(SectorRecord {
            id,
            title: self.title,
            description: self.description,
            full_detail: self.full_detail,
            icon: self.icon,
            projected_profit: self.projected_profit,
            allocation: self.allocation,
            market_trend,
            color: self.color,
            financials: SectorFinancials {
                revenue: self.revenue,
                profit: self.profit,
                valuation: MoneyAmount {
                    amount: self.valuation,
                    currency: valuation_currency,
                },
                growth_pct: self.growth_pct,
                financing_need,
            },
        })
    }
}

/// Raw row of performance.csv
#[derive(Debug, Deserialize)]
struct PerformanceRow {
    sector: String,
    month: String,
    roi: f64,
    volatility: f64,
}

/// Raw row of audit_log.csv
#[derive(Debug, Deserialize)]
struct AuditRow {
    id: String,
    date: NaiveDate,
    action: String,
    sector: String,
    status: String,
    verified_by: String,
}

/// Load sector records from sectors.csv, in file order
pub fn load_sectors(path: &Path) -> Result<Vec<SectorRecord>, CatalogError> {
    let file = File::open(path.join(SECTORS_FILE))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut sectors: Vec<SectorRecord> = Vec::new();

    for result in reader.deserialize() {
        let row: SectorRow = result?;
        let record = row.to_record()?;
        if sectors.iter().any(|s| s.id == record.id) {
            return Err(CatalogError::invalid(
                SECTORS_FILE,
                format!("duplicate sector id: {}", record.id),
            ));
        }
        sectors.push(record);
    }

    Ok(sectors)
}

/// Load quarterly reports from financial_reports.csv
pub fn load_financial_reports(path: &Path) -> Result<Vec<FinancialReportPoint>, CatalogError> {
    let file = File::open(path.join(REPORTS_FILE))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut reports = Vec::new();

    for result in reader.deserialize() {
        let point: FinancialReportPoint = result?;
        if !(point.revenue.is_finite() && point.profit.is_finite() && point.assets.is_finite()) {
            return Err(CatalogError::invalid(
                REPORTS_FILE,
                format!("{}: values must be finite", point.quarter),
            ));
        }
        reports.push(point);
    }

    Ok(reports)
}

/// Load monthly performance samples from performance.csv
/// Returns samples grouped by sector, file order preserved within a sector
pub fn load_performance(path: &Path) -> Result<BTreeMap<SectorId, Vec<SectorPerformance>>, CatalogError> {
    let file = File::open(path.join(PERFORMANCE_FILE))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut performance: BTreeMap<SectorId, Vec<SectorPerformance>> = BTreeMap::new();

    for result in reader.deserialize() {
        let row: PerformanceRow = result?;
        let sector: SectorId = row
            .sector
            .parse()
            .map_err(|e| CatalogError::invalid(PERFORMANCE_FILE, format!("{}", e)))?;

        if !(row.roi.is_finite() && row.volatility.is_finite()) {
            return Err(CatalogError::invalid(
                PERFORMANCE_FILE,
                format!("{} {}: values must be finite", sector, row.month),
            ));
        }

        performance.entry(sector).or_default().push(SectorPerformance {
            month: row.month,
            roi: row.roi,
            volatility: row.volatility,
        });
    }

    Ok(performance)
}

/// Load audit entries from audit_log.csv
pub fn load_audit_log(path: &Path) -> Result<Vec<AuditLogEntry>, CatalogError> {
    let file = File::open(path.join(AUDIT_FILE))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut entries = Vec::new();

    for result in reader.deserialize() {
        let row: AuditRow = result?;
        let bad = |e: EngineError| CatalogError::invalid(AUDIT_FILE, format!("{}: {}", row.id, e));

        let sector: SectorId = row.sector.parse().map_err(bad)?;
        let status: AuditStatus = row.status.parse().map_err(bad)?;

        entries.push(AuditLogEntry {
            id: row.id,
            date: row.date,
            action: row.action,
            sector,
            status,
            verified_by: row.verified_by,
        });
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const SECTOR_HEADER: &str = "id,title,description,full_detail,icon,projected_profit,allocation,market_trend,color,revenue,profit,valuation,valuation_currency,growth_pct,financing_need,financing_need_currency";

    fn write_sectors(dir: &Path, rows: &[&str]) {
        let mut body = String::from(SECTOR_HEADER);
        for row in rows {
            body.push('\n');
            body.push_str(row);
        }
        body.push('\n');
        fs::write(dir.join(SECTORS_FILE), body).unwrap();
    }

    #[test]
    fn test_load_default_sectors() {
        let sectors = load_sectors(Path::new(DEFAULT_CATALOG_PATH)).expect("Failed to load sectors");

        assert_eq!(sectors.len(), 5);
        assert_eq!(sectors[0].id, SectorId::Mining);
        assert_eq!(sectors[3].id, SectorId::RealEstate);
        assert_eq!(sectors[0].financials.revenue, 145_200_000.0);
        assert!(sectors[3].financials.financing_need.is_none());
    }

    #[test]
    fn test_load_default_performance_and_audit() {
        let path = Path::new(DEFAULT_CATALOG_PATH);

        let performance = load_performance(path).expect("Failed to load performance");
        assert_eq!(performance.len(), 5);
        assert_eq!(performance[&SectorId::Bitcoin].len(), 6);
        assert_eq!(performance[&SectorId::Bitcoin][1].roi, -4.1);

        let audit = load_audit_log(path).expect("Failed to load audit log");
        assert_eq!(audit.len(), 5);
        assert_eq!(audit[4].sector, SectorId::RealEstate);
    }

    #[test]
    fn test_rejects_negative_projected_profit() {
        let dir = tempfile::tempdir().unwrap();
        write_sectors(
            dir.path(),
            &["Mining,Strategic Mining,d,f,x,-5.0,30,up,#1a9e55,1,1,1,USD,1,,"],
        );

        let err = load_sectors(dir.path()).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidRecord { file: SECTORS_FILE, .. }));
        assert!(err.to_string().contains("projected_profit"));
    }

    #[test]
    fn test_rejects_unknown_and_duplicate_ids() {
        let dir = tempfile::tempdir().unwrap();
        write_sectors(dir.path(), &["Gold,Gold,d,f,x,5.0,30,up,#fff,1,1,1,USD,1,,"]);
        assert!(load_sectors(dir.path()).is_err());

        write_sectors(
            dir.path(),
            &[
                "Energy,A,d,f,x,5.0,30,up,#fff,1,1,1,USD,1,,",
                "energy,B,d,f,x,6.0,30,up,#fff,1,1,1,USD,1,,",
            ],
        );
        let err = load_sectors(dir.path()).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_financing_need_requires_amount_and_currency() {
        let dir = tempfile::tempdir().unwrap();
        write_sectors(dir.path(), &["Consulting,C,d,f,x,15.0,10,up,#fff,8,4,25,USD,15,3.5,ETB"]);
        let sectors = load_sectors(dir.path()).unwrap();
        assert_eq!(sectors[0].financials.financing_need, Some(MoneyAmount::etb(3.5)));

        write_sectors(dir.path(), &["Consulting,C,d,f,x,15.0,10,up,#fff,8,4,25,USD,15,3.5,"]);
        let err = load_sectors(dir.path()).unwrap_err();
        assert!(err.to_string().contains("no currency"));

        write_sectors(dir.path(), &["Consulting,C,d,f,x,15.0,10,up,#fff,8,4,25,USD,15,,ETB"]);
        let err = load_sectors(dir.path()).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidRecord { file: SECTORS_FILE, .. }));
        assert!(err.to_string().contains("without an amount"));
    }

    #[test]
    fn test_rejects_non_finite_performance() {
        let dir = tempfile::tempdir().unwrap();
        for rows in ["Mining,Jan,NaN,1.0\nMining,Feb,4.2,1.0", "Mining,Jan,4.2,1.0\nMining,Feb,inf,1.0"] {
            fs::write(
                dir.path().join(PERFORMANCE_FILE),
                format!("sector,month,roi,volatility\n{}\n", rows),
            )
            .unwrap();

            let err = load_performance(dir.path()).unwrap_err();
            assert!(matches!(err, CatalogError::InvalidRecord { file: PERFORMANCE_FILE, .. }));
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_financial_reports(dir.path()).unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }
}

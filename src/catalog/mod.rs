//! Static reference catalog: sectors, company reports, performance samples and audit log

mod sector;
mod records;
mod reference;
pub mod loader;

pub use sector::{SectorId, SectorRecord, SectorFinancials, MarketTrend, Currency, MoneyAmount};
pub use records::{FinancialReportPoint, SectorPerformance, AuditLogEntry, AuditStatus};
pub use loader::DEFAULT_CATALOG_PATH;

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::CatalogError;
use crate::projection::total_allocation;

/// Immutable container for everything the engine reads
///
/// Built once at start-up and passed by reference; nothing in the crate
/// mutates it after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    sectors: Vec<SectorRecord>,
    financial_reports: Vec<FinancialReportPoint>,
    performance: BTreeMap<SectorId, Vec<SectorPerformance>>,
    audit_log: Vec<AuditLogEntry>,
}

impl Catalog {
    /// Assemble a catalog from parts
    pub fn new(
        sectors: Vec<SectorRecord>,
        financial_reports: Vec<FinancialReportPoint>,
        performance: BTreeMap<SectorId, Vec<SectorPerformance>>,
        audit_log: Vec<AuditLogEntry>,
    ) -> Self {
        let allocated = total_allocation(&sectors);
        if !sectors.is_empty() && (allocated - 100.0).abs() > 1e-9 {
            log::warn!("sector allocations sum to {}%, not 100%", allocated);
        }

        Self {
            sectors,
            financial_reports,
            performance,
            audit_log,
        }
    }

    /// The built-in reference catalog (five sectors, FY2024 reports)
    pub fn reference() -> Self {
        Self::new(
            reference::sectors(),
            reference::financial_reports(),
            reference::historical_performance(),
            reference::audit_log(),
        )
    }

    /// Load the catalog from CSV files in the default location (data/catalog/)
    pub fn from_csv() -> Result<Self, CatalogError> {
        Self::from_csv_path(Path::new(DEFAULT_CATALOG_PATH))
    }

    /// Load the catalog from CSV files in a specific directory
    pub fn from_csv_path(path: &Path) -> Result<Self, CatalogError> {
        log::debug!("loading catalog from {}", path.display());

        let catalog = Self::new(
            loader::load_sectors(path)?,
            loader::load_financial_reports(path)?,
            loader::load_performance(path)?,
            loader::load_audit_log(path)?,
        );

        log::debug!(
            "catalog loaded: {} sectors, {} reports, {} audit entries",
            catalog.sectors.len(),
            catalog.financial_reports.len(),
            catalog.audit_log.len()
        );

        Ok(catalog)
    }

    /// Sectors in catalog order
    pub fn sectors(&self) -> &[SectorRecord] {
        &self.sectors
    }

    pub fn sector(&self, id: SectorId) -> Option<&SectorRecord> {
        self.sectors.iter().find(|s| s.id == id)
    }

    /// Quarterly company reports, oldest first
    pub fn financial_reports(&self) -> &[FinancialReportPoint] {
        &self.financial_reports
    }

    /// Monthly performance samples for a sector (empty if none recorded)
    pub fn performance(&self, id: SectorId) -> &[SectorPerformance] {
        self.performance.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn audit_log(&self) -> &[AuditLogEntry] {
        &self.audit_log
    }

    /// Audit entries recorded against one sector
    pub fn audit_log_for(&self, id: SectorId) -> impl Iterator<Item = &AuditLogEntry> + '_ {
        self.audit_log.iter().filter(move |entry| entry.sector == id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::reference()
    }
}

//! Company-level reports, monthly performance samples and audit entries

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::sector::SectorId;
use crate::error::EngineError;

/// Consolidated results for one quarter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialReportPoint {
    /// Quarter label, e.g. "Q3 2024"
    pub quarter: String,
    pub revenue: f64,
    pub profit: f64,
    pub assets: f64,

    /// Forward-looking quarter rather than reported actuals
    #[serde(default)]
    pub projected: bool,
}

/// A realized monthly sample for one sector (ROI may be negative)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorPerformance {
    pub month: String,
    pub roi: f64,
    pub volatility: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuditStatus {
    Verified,
    Pending,
    Flagged,
}

impl FromStr for AuditStatus {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "verified" => Ok(AuditStatus::Verified),
            "pending" => Ok(AuditStatus::Pending),
            "flagged" => Ok(AuditStatus::Flagged),
            other => Err(EngineError::InvalidInput(format!("unknown audit status: {}", other))),
        }
    }
}

/// An external verification recorded against a sector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditLogEntry {
    pub id: String,
    pub date: NaiveDate,
    pub action: String,
    pub sector: SectorId,
    pub status: AuditStatus,
    pub verified_by: String,
}

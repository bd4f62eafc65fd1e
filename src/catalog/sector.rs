//! Sector records and their financial snapshots

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// The closed set of investment verticals held by the company
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SectorId {
    Mining,
    Bitcoin,
    Energy,
    #[serde(rename = "Real Estate")]
    RealEstate,
    Consulting,
}

impl SectorId {
    /// Every sector, in catalog order
    pub const ALL: [SectorId; 5] = [
        SectorId::Mining,
        SectorId::Bitcoin,
        SectorId::Energy,
        SectorId::RealEstate,
        SectorId::Consulting,
    ];

    /// Display name, also used as the identifier in catalog files
    pub fn as_str(&self) -> &'static str {
        match self {
            SectorId::Mining => "Mining",
            SectorId::Bitcoin => "Bitcoin",
            SectorId::Energy => "Energy",
            SectorId::RealEstate => "Real Estate",
            SectorId::Consulting => "Consulting",
        }
    }
}

impl fmt::Display for SectorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectorId {
    type Err = EngineError;

    /// Accepts the display name in any case, with `-`, `_` or a space
    /// between words ("Real Estate", "real-estate", "realestate").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "mining" => Ok(SectorId::Mining),
            "bitcoin" => Ok(SectorId::Bitcoin),
            "energy" => Ok(SectorId::Energy),
            "realestate" => Ok(SectorId::RealEstate),
            "consulting" => Ok(SectorId::Consulting),
            _ => Err(EngineError::InvalidInput(format!("unknown sector: {}", s.trim()))),
        }
    }
}

/// Direction a sector's market is heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketTrend {
    Up,
    Down,
    Stable,
}

impl FromStr for MarketTrend {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(MarketTrend::Up),
            "down" => Ok(MarketTrend::Down),
            "stable" => Ok(MarketTrend::Stable),
            other => Err(EngineError::InvalidInput(format!("unknown market trend: {}", other))),
        }
    }
}

/// Currency a monetary magnitude is denominated in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Etb,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Etb => "ETB",
        }
    }
}

impl FromStr for Currency {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "USD" => Ok(Currency::Usd),
            "ETB" => Ok(Currency::Etb),
            other => Err(EngineError::InvalidInput(format!("unknown currency: {}", other))),
        }
    }
}

/// An absolute amount in a named currency
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoneyAmount {
    pub amount: f64,
    pub currency: Currency,
}

impl MoneyAmount {
    pub fn usd(amount: f64) -> Self {
        Self { amount, currency: Currency::Usd }
    }

    pub fn etb(amount: f64) -> Self {
        Self { amount, currency: Currency::Etb }
    }
}

/// Trailing-twelve-month financial snapshot for a sector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorFinancials {
    /// LTM revenue in USD
    pub revenue: f64,

    /// LTM profit in USD
    pub profit: f64,

    pub valuation: MoneyAmount,

    /// Year-over-year growth (percent)
    pub growth_pct: f64,

    /// Outstanding capital requirement, if the sector is raising
    #[serde(default)]
    pub financing_need: Option<MoneyAmount>,
}

/// A single investment vertical as presented to investors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorRecord {
    pub id: SectorId,
    pub title: String,
    pub description: String,
    pub full_detail: String,
    pub icon: String,

    /// Annualized return assumed for compounding (percent, never negative)
    pub projected_profit: f64,

    /// Share of the portfolio (percent)
    pub allocation: f64,

    pub market_trend: MarketTrend,

    /// Display color hint, e.g. `#1a9e55`
    pub color: String,

    pub financials: SectorFinancials,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sector_id_parsing() {
        assert_eq!("Mining".parse::<SectorId>(), Ok(SectorId::Mining));
        assert_eq!("bitcoin".parse::<SectorId>(), Ok(SectorId::Bitcoin));
        assert_eq!("Real Estate".parse::<SectorId>(), Ok(SectorId::RealEstate));
        assert_eq!("real-estate".parse::<SectorId>(), Ok(SectorId::RealEstate));
        assert_eq!(" REAL_ESTATE ".parse::<SectorId>(), Ok(SectorId::RealEstate));
        assert!(matches!("Gold".parse::<SectorId>(), Err(EngineError::InvalidInput(_))));
    }

    #[test]
    fn test_sector_id_display_round_trip() {
        for id in SectorId::ALL {
            assert_eq!(id.to_string().parse::<SectorId>(), Ok(id));
        }
    }

    #[test]
    fn test_sector_id_serde_name() {
        let json = serde_json::to_string(&SectorId::RealEstate).unwrap();
        assert_eq!(json, "\"Real Estate\"");
    }

    #[test]
    fn test_currency_and_trend_parsing() {
        assert_eq!("etb".parse::<Currency>(), Ok(Currency::Etb));
        assert_eq!("Stable".parse::<MarketTrend>(), Ok(MarketTrend::Stable));
        assert!("sideways".parse::<MarketTrend>().is_err());
    }
}

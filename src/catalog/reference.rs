//! Built-in reference catalog for the holding company

use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::records::{AuditLogEntry, AuditStatus, FinancialReportPoint, SectorPerformance};
use super::sector::{MarketTrend, MoneyAmount, SectorFinancials, SectorId, SectorRecord};

pub(super) fn sectors() -> Vec<SectorRecord> {
    vec![
        SectorRecord {
            id: SectorId::Mining,
            title: "Strategic Mining".to_string(),
            description: "Exporting Lithium, Beryllium, Copper, and Crystal Quartz to global markets.".to_string(),
            full_detail: "Four key minerals are exported today, with expansion to eight underway. \
                Primary export markets are China, India and the United States, with a focus on \
                Lithium and Beryllium for global tech supply chains."
                .to_string(),
            icon: "⛏️".to_string(),
            projected_profit: 78.0,
            allocation: 30.0,
            market_trend: MarketTrend::Up,
            color: "#1a9e55".to_string(),
            financials: SectorFinancials {
                revenue: 145_200_000.0,
                profit: 42_800_000.0,
                valuation: MoneyAmount::etb(240_000_000.0),
                growth_pct: 18.4,
                financing_need: Some(MoneyAmount::etb(240_000_000.0)),
            },
        },
        SectorRecord {
            id: SectorId::Bitcoin,
            title: "PHOENIX Bitcoin Mining".to_string(),
            description: "Minor hosting services with a roadmap to becoming a primary Bitcoin miner.".to_string(),
            full_detail: "Hosting under the PHOENIX brand with 80MW of capacity (52MW active). \
                The plan scales capacity 16x to become a leading regional miner on low-cost \
                energy partnerships."
                .to_string(),
            icon: "₿".to_string(),
            projected_profit: 74.0,
            allocation: 20.0,
            market_trend: MarketTrend::Up,
            color: "#e67e22".to_string(),
            financials: SectorFinancials {
                revenue: 12_500_000.0,
                profit: 8_200_000.0,
                valuation: MoneyAmount::etb(1_800_000_000.0),
                growth_pct: 74.0,
                financing_need: Some(MoneyAmount::etb(1_800_000_000.0)),
            },
        },
        SectorRecord {
            id: SectorId::Energy,
            title: "Hydropower Energy".to_string(),
            description: "Rehabilitating Hydro Electric Power Stations for long-term PPAs.".to_string(),
            full_detail: "Hydropower station rehabilitation backed by government Power Purchase \
                Agreements. The Fincha Hydro Power Rehab project anchors the energy portfolio."
                .to_string(),
            icon: "⚡".to_string(),
            projected_profit: 130.0,
            allocation: 25.0,
            market_trend: MarketTrend::Stable,
            color: "#0ea5e9".to_string(),
            financials: SectorFinancials {
                revenue: 88_400_000.0,
                profit: 115_000_000.0,
                valuation: MoneyAmount::etb(480_000_000.0),
                growth_pct: 130.0,
                financing_need: Some(MoneyAmount::etb(480_000_000.0)),
            },
        },
        SectorRecord {
            id: SectorId::RealEstate,
            title: "Real Estate Development".to_string(),
            description: "Focusing on middle-income housing in Addis Ababa and Dire Dawa.".to_string(),
            full_detail: "Middle-income housing developments in Addis Ababa and Dire Dawa, \
                serving urban demand in both economic hubs."
                .to_string(),
            icon: "🏢".to_string(),
            projected_profit: 22.5,
            allocation: 15.0,
            market_trend: MarketTrend::Stable,
            color: "#8b5cf6".to_string(),
            financials: SectorFinancials {
                revenue: 34_800_000.0,
                profit: 12_200_000.0,
                valuation: MoneyAmount::usd(120_000_000.0),
                growth_pct: 12.5,
                financing_need: None,
            },
        },
        SectorRecord {
            id: SectorId::Consulting,
            title: "Strategic Consulting".to_string(),
            description: "Extensive experience in Mining and Energy sector consultancy.".to_string(),
            full_detail: "Advisory services for energy and mineral exploration for public \
                institutions and private clients across East African resource management."
                .to_string(),
            icon: "📊".to_string(),
            projected_profit: 15.0,
            allocation: 10.0,
            market_trend: MarketTrend::Up,
            color: "#ec4899".to_string(),
            financials: SectorFinancials {
                revenue: 8_200_000.0,
                profit: 4_500_000.0,
                valuation: MoneyAmount::usd(25_000_000.0),
                growth_pct: 15.0,
                financing_need: None,
            },
        },
    ]
}

pub(super) fn financial_reports() -> Vec<FinancialReportPoint> {
    let point = |quarter: &str, revenue: f64, profit: f64, assets: f64, projected: bool| {
        FinancialReportPoint {
            quarter: quarter.to_string(),
            revenue,
            profit,
            assets,
            projected,
        }
    };

    vec![
        point("Q1 2024", 12_000_000.0, 4_500_000.0, 4_500_000.0, false),
        point("Q2 2024", 15_500_000.0, 6_200_000.0, 8_200_000.0, false),
        point("Q3 2024", 19_800_000.0, 8_900_000.0, 12_400_000.0, false),
        point("Q4 2024 (Proj)", 24_500_000.0, 12_500_000.0, 18_500_000.0, true),
    ]
}

pub(super) fn historical_performance() -> BTreeMap<SectorId, Vec<SectorPerformance>> {
    const MONTHS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

    // (roi, volatility) per month
    let table: [(SectorId, [(f64, f64); 6]); 5] = [
        (SectorId::Mining, [(4.2, 1.5), (5.5, 1.4), (6.8, 1.6), (8.1, 1.5), (9.5, 1.4), (11.0, 1.3)]),
        (SectorId::Bitcoin, [(12.5, 6.2), (-4.1, 8.1), (18.4, 9.8), (10.6, 5.5), (-8.2, 7.8), (22.2, 10.2)]),
        (SectorId::Energy, [(8.4, 0.8), (9.1, 0.9), (10.8, 1.1), (12.2, 0.9), (14.9, 1.0), (18.1, 1.2)]),
        (SectorId::RealEstate, [(1.8, 0.4), (2.1, 0.3), (2.4, 0.4), (2.2, 0.3), (2.5, 0.4), (2.8, 0.3)]),
        (SectorId::Consulting, [(1.2, 0.2), (1.4, 0.1), (1.3, 0.2), (1.5, 0.1), (1.6, 0.2), (1.8, 0.1)]),
    ];

    table
        .iter()
        .map(|(sector, samples)| {
            let series: Vec<SectorPerformance> = MONTHS
                .iter()
                .zip(samples.iter())
                .map(|(month, &(roi, volatility))| SectorPerformance {
                    month: month.to_string(),
                    roi,
                    volatility,
                })
                .collect();
            (*sector, series)
        })
        .collect()
}

/// id, (year, month, day), action, sector, verified by
type AuditRow = (&'static str, (i32, u32, u32), &'static str, SectorId, &'static str);

const AUDIT_ROWS: [AuditRow; 5] = [
    ("GR-001", (2024, 6, 15), "FCY Mobilization Audit", SectorId::Mining, "Federal Bank"),
    ("GR-002", (2024, 6, 10), "Fincha Project ROI Review", SectorId::Energy, "Ministry of Water"),
    ("GR-003", (2024, 6, 5), "Beryllium Reserve Audit", SectorId::Mining, "Mining Commission"),
    ("GR-004", (2024, 5, 28), "Hosting Center Capacity Audit", SectorId::Bitcoin, "Energy Authority"),
    ("GR-005", (2024, 5, 15), "Addis Ababa Housing Progress", SectorId::RealEstate, "Construction Bureau"),
];

pub(super) fn audit_log() -> Vec<AuditLogEntry> {
    AUDIT_ROWS
        .iter()
        .filter_map(|&(id, (y, m, d), action, sector, verified_by)| {
            let date = NaiveDate::from_ymd_opt(y, m, d)?;
            Some(AuditLogEntry {
                id: id.to_string(),
                date,
                action: action.to_string(),
                sector,
                status: AuditStatus::Verified,
                verified_by: verified_by.to_string(),
            })
        })
        .collect()
}

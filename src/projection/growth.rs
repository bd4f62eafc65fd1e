//! Compound-growth projection for a principal held at a fixed annual rate

use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, EngineError, EngineResult};

/// Horizons offered by the calculator (years)
pub const STANDARD_HORIZONS: [u32; 3] = [1, 3, 5];

/// Outcome of compounding a principal over a horizon
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub principal: f64,

    /// Annual rate the projection compounded at (percent)
    pub rate_percent: f64,

    /// Horizon in whole years
    pub years: u32,

    /// Value at the end of the horizon
    pub total: f64,

    /// `total - principal`
    pub profit: f64,
}

/// Compound `principal` annually at `annual_rate_percent` for `years`
///
/// `total = principal * (1 + rate/100)^years`, unrounded. Zero or negative
/// principals are accepted and carried through the formula; `years == 0`
/// returns the principal unchanged, as does a zero principal at any horizon.
///
/// # Errors
/// `InvalidInput` if the principal or rate is non-finite, the rate is
/// negative, or the result overflows.
pub fn project(principal: f64, annual_rate_percent: f64, years: u32) -> EngineResult<ProjectionResult> {
    ensure_finite("principal", principal)?;
    ensure_finite("annual rate", annual_rate_percent)?;
    if annual_rate_percent < 0.0 {
        return Err(EngineError::InvalidInput(format!(
            "annual rate must not be negative, got {}",
            annual_rate_percent
        )));
    }

    let rate = annual_rate_percent / 100.0;
    let total = if principal == 0.0 {
        principal
    } else {
        principal * (1.0 + rate).powf(years as f64)
    };
    if !total.is_finite() {
        return Err(EngineError::InvalidInput(format!(
            "projection of {} at {}% over {} years overflows",
            principal, annual_rate_percent, years
        )));
    }

    Ok(ProjectionResult {
        principal,
        rate_percent: annual_rate_percent,
        years,
        total,
        profit: total - principal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_one_year_mining_rate() {
        let result = project(100_000.0, 78.0, 1).unwrap();
        assert_relative_eq!(result.total, 178_000.0, max_relative = 1e-12);
        assert_relative_eq!(result.profit, 78_000.0, max_relative = 1e-12);
        assert_eq!(result.years, 1);
    }

    #[test]
    fn test_five_year_energy_rate() {
        // 100,000 * 2.30^5
        let result = project(100_000.0, 130.0, 5).unwrap();
        assert_relative_eq!(result.total, 6_436_343.0, max_relative = 1e-9);
        assert_relative_eq!(result.profit, 6_336_343.0, max_relative = 1e-9);
    }

    #[test]
    fn test_zero_years_returns_principal() {
        for &(principal, rate) in &[(100_000.0, 78.0), (0.0, 15.0), (-250.0, 130.0), (42.5, 0.0)] {
            let result = project(principal, rate, 0).unwrap();
            assert_eq!(result.total, principal);
            assert_eq!(result.profit, 0.0);
        }
    }

    #[test]
    fn test_zero_principal() {
        let result = project(0.0, 74.0, 5).unwrap();
        assert_eq!(result.total, 0.0);
        assert_eq!(result.profit, 0.0);
    }

    #[test]
    fn test_zero_principal_over_long_horizon() {
        // 2.30^1000 overflows f64 on its own
        let result = project(0.0, 130.0, 1_000).unwrap();
        assert_eq!(result.total, 0.0);
        assert_eq!(result.profit, 0.0);
    }

    #[test]
    fn test_negative_principal_is_accepted() {
        let result = project(-1_000.0, 22.5, 1).unwrap();
        assert_relative_eq!(result.total, -1_225.0, max_relative = 1e-12);
        assert_relative_eq!(result.profit, -225.0, max_relative = 1e-12);
    }

    #[test]
    fn test_growth_never_shrinks_principal() {
        for &principal in &[0.0, 1.0, 100_000.0, 2.5e9] {
            for &rate in &[0.0, 15.0, 63.9, 130.0] {
                for years in 0..=10 {
                    let result = project(principal, rate, years).unwrap();
                    assert!(
                        result.total >= principal,
                        "{} at {}% for {}y shrank to {}",
                        principal, rate, years, result.total
                    );
                }
            }
        }
    }

    #[test]
    fn test_repeated_calls_are_bit_identical() {
        let a = project(123_456.78, 63.9, 3).unwrap();
        let b = project(123_456.78, 63.9, 3).unwrap();
        assert_eq!(a.total.to_bits(), b.total.to_bits());
        assert_eq!(a.profit.to_bits(), b.profit.to_bits());
    }

    #[test]
    fn test_rejects_invalid_inputs() {
        assert!(matches!(project(f64::NAN, 10.0, 1), Err(EngineError::InvalidInput(_))));
        assert!(matches!(project(f64::INFINITY, 10.0, 1), Err(EngineError::InvalidInput(_))));
        assert!(matches!(project(100.0, -1.0, 1), Err(EngineError::InvalidInput(_))));
        assert!(matches!(project(100.0, f64::NAN, 1), Err(EngineError::InvalidInput(_))));
    }

    #[test]
    fn test_overflow_is_reported() {
        let err = project(1e300, 130.0, 1_000).unwrap_err();
        assert!(err.to_string().contains("overflows"));
    }

    #[test]
    fn test_accepts_long_horizons() {
        let result = project(1_000.0, 10.0, 30).unwrap();
        assert_relative_eq!(result.total, 1_000.0 * 1.1_f64.powi(30), max_relative = 1e-12);
    }
}

//! Reverse solve of compounding-only growth
//!
//! Inverts `target = principal * (1 + r)^n` for either the rate or the
//! principal, with `n = floor(total_days / period_days)`. Periodic
//! contributions are not part of the inverse: a caller whose scenario has
//! contributions gets the contribution-free answer.

use crate::error::{ProjectionError, Result};
use crate::params::require_finite;

/// Per-period rate (percent) that grows `principal` into `target_amount`
pub fn solve_rate(principal: f64, target_amount: f64, total_days: u32, period_days: u32) -> Result<f64> {
    require_finite("principal", principal)?;
    require_finite("target_amount", target_amount)?;
    let n = periods(total_days, period_days)?;

    if principal <= 0.0 {
        return Err(degenerate("principal must be positive"));
    }
    if target_amount <= 0.0 {
        return Err(degenerate("target amount must be positive"));
    }

    let growth = target_amount / principal;
    Ok((growth.powf(1.0 / n as f64) - 1.0) * 100.0)
}

/// Starting principal that grows into `target_amount` at `rate_percent` per period
pub fn solve_principal(rate_percent: f64, target_amount: f64, total_days: u32, period_days: u32) -> Result<f64> {
    require_finite("rate_percent", rate_percent)?;
    require_finite("target_amount", target_amount)?;
    let n = periods(total_days, period_days)?;

    let base = 1.0 + rate_percent / 100.0;
    if base <= 0.0 {
        return Err(degenerate("growth factor 1 + rate/100 must be positive"));
    }

    Ok(target_amount / base.powf(n as f64))
}

fn periods(total_days: u32, period_days: u32) -> Result<u32> {
    if period_days == 0 {
        return Err(ProjectionError::InvalidPeriod(0.0));
    }
    match total_days / period_days {
        0 => Err(degenerate("horizon is shorter than one period")),
        n => Ok(n),
    }
}

fn degenerate(reason: &'static str) -> ProjectionError {
    log::warn!("reverse solve rejected: {}", reason);
    ProjectionError::DegenerateSolve(reason)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_solve_rate_simple() {
        // 1000 -> 1210 over two periods is 10% per period
        let rate = solve_rate(1000.0, 1210.0, 14, 7).unwrap();
        assert_relative_eq!(rate, 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_solve_principal_simple() {
        let principal = solve_principal(10.0, 1210.0, 2, 1).unwrap();
        assert_relative_eq!(principal, 1000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_round_trip() {
        for (p, t, days, period) in [(1000.0, 4321.94, 30, 1), (250.0, 100.0, 365, 30), (5000.0, 5000.0, 10, 1)] {
            let rate = solve_rate(p, t, days, period).unwrap();
            let back = solve_principal(rate, t, days, period).unwrap();
            assert_relative_eq!(back, p, max_relative = 1e-9);
        }
    }

    #[test]
    fn test_matches_projection() {
        use crate::params::Parameters;
        use crate::projection::project;

        let rate = solve_rate(1000.0, 2000.0, 12, 1).unwrap();
        let params = Parameters::new(1000.0, rate, 12, 1).unwrap();
        assert!((project(&params).unwrap().final_amount() - 2000.0).abs() < 0.01);
    }

    #[test]
    fn test_zero_periods_is_degenerate() {
        assert!(matches!(
            solve_rate(1000.0, 2000.0, 6, 7),
            Err(ProjectionError::DegenerateSolve(_))
        ));
        assert!(matches!(
            solve_principal(5.0, 2000.0, 0, 1),
            Err(ProjectionError::DegenerateSolve(_))
        ));
    }

    #[test]
    fn test_non_positive_bases_are_degenerate() {
        assert!(matches!(solve_rate(0.0, 2000.0, 30, 1), Err(ProjectionError::DegenerateSolve(_))));
        assert!(matches!(solve_rate(-5.0, 2000.0, 30, 1), Err(ProjectionError::DegenerateSolve(_))));
        assert!(matches!(solve_rate(1000.0, 0.0, 30, 1), Err(ProjectionError::DegenerateSolve(_))));
        assert!(matches!(solve_principal(-100.0, 2000.0, 30, 1), Err(ProjectionError::DegenerateSolve(_))));
    }

    #[test]
    fn test_zero_period_and_nan_inputs() {
        assert!(matches!(solve_rate(1000.0, 2000.0, 30, 0), Err(ProjectionError::InvalidPeriod(_))));
        assert!(matches!(
            solve_principal(f64::NAN, 2000.0, 30, 1),
            Err(ProjectionError::MissingInput { field: "rate_percent" })
        ));
    }
}

//! Forward compounding engine

use crate::error::{ProjectionError, Result};
use crate::params::{Parameters, RateConvention};
use super::series::{round2, Projection, ProjectionPoint};

/// Configuration for a projection run
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProjectionConfig {
    /// How the stated rate maps to a per-period rate
    pub rate_convention: RateConvention,
}

impl ProjectionConfig {
    pub fn annualized() -> Self {
        Self {
            rate_convention: RateConvention::Annualized,
        }
    }
}

/// Main projection engine
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Run the compounding recurrence over the whole horizon
    ///
    /// Emits `steps + 1` points. Each point carries the running balance rounded
    /// to cents; the accumulator itself is never rounded, so rounding error does
    /// not compound from one period to the next.
    ///
    /// A zero-length period is rejected before anything is computed.
    pub fn project(&self, params: &Parameters) -> Result<Projection> {
        let steps = params
            .steps()
            .ok_or(ProjectionError::InvalidPeriod(params.period_days as f64))?;
        let rate = self
            .config
            .rate_convention
            .periodic_rate(params.annual_rate_percent, params.period_days);

        log::debug!(
            "projecting {} steps of {} days at {:.6} per period",
            steps,
            params.period_days,
            rate
        );

        let mut projection = Projection::with_capacity(steps as usize + 1);
        let mut amount = params.principal;

        for i in 0..=steps {
            projection.add_point(ProjectionPoint {
                period_index: i,
                day_offset: i * params.period_days,
                amount: round2(amount),
            });
            amount = amount * (1.0 + rate) + params.contribution_per_period;
        }

        Ok(projection)
    }
}

/// Project with the default (per-period rate) engine
pub fn project(params: &Parameters) -> Result<Projection> {
    ProjectionEngine::default().project(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn params(principal: f64, rate: f64, days: u32, period: u32) -> Parameters {
        Parameters::new(principal, rate, days, period).unwrap()
    }

    #[test]
    fn test_length_is_steps_plus_one() {
        for (days, period) in [(30, 1), (100, 7), (365, 30), (10, 365), (0, 1)] {
            let p = project(&params(1000.0, 5.0, days, period)).unwrap();
            assert_eq!(p.len(), (days / period) as usize + 1);
        }
    }

    #[test]
    fn test_first_point_is_principal() {
        let p = project(&params(1234.567, 5.0, 30, 1)).unwrap();
        let first = p.points()[0];
        assert_eq!(first.period_index, 0);
        assert_eq!(first.day_offset, 0);
        assert_eq!(first.amount, 1234.57);
    }

    #[test]
    fn test_zero_steps_single_point() {
        let p = project(&params(1000.0, 5.0, 6, 7)).unwrap();
        assert_eq!(p.len(), 1);
        assert_eq!(p.final_amount(), 1000.0);
    }

    #[test]
    fn test_rate_applied_once_per_period() {
        // 5% per daily period for 30 periods
        let p = project(&params(1000.0, 5.0, 30, 1)).unwrap();
        assert_eq!(p.len(), 31);
        assert_abs_diff_eq!(p.final_amount(), 4321.94, epsilon = 0.006);
    }

    #[test]
    fn test_closed_form_without_contributions() {
        let p = project(&params(2500.0, 3.0, 12 * 30, 30)).unwrap();
        for point in p.iter() {
            let expected = 2500.0 * 1.03_f64.powi(point.period_index as i32);
            assert_abs_diff_eq!(point.amount, expected, epsilon = 0.006);
        }
    }

    #[test]
    fn test_day_offsets() {
        let p = project(&params(1000.0, 1.0, 30, 7)).unwrap();
        let days: Vec<u32> = p.iter().map(|pt| pt.day_offset).collect();
        assert_eq!(days, vec![0, 7, 14, 21, 28]);
    }

    #[test]
    fn test_contribution_added_after_interest() {
        let p = project(&params(1000.0, 10.0, 2, 1).with_contribution(100.0)).unwrap();
        let amounts: Vec<f64> = p.iter().map(|pt| pt.amount).collect();
        assert_eq!(amounts, vec![1000.0, 1200.0, 1420.0]);
    }

    #[test]
    fn test_accumulator_not_rounded() {
        // 0.004 growth is lost to rounding at every step if the running total is rounded
        let p = project(&params(1.0, 0.4, 10, 1)).unwrap();
        assert_relative_eq!(p.final_amount(), round2(1.004_f64.powi(10)));
        assert_eq!(p.final_amount(), 1.04);
    }

    #[test]
    fn test_monotone_for_positive_rate() {
        let p = project(&params(500.0, 2.0, 60, 1).with_contribution(5.0)).unwrap();
        assert!(p.points().windows(2).all(|w| w[1].amount >= w[0].amount));
    }

    #[test]
    fn test_negative_rate_decays() {
        let p = project(&params(1000.0, -10.0, 3, 1)).unwrap();
        assert_abs_diff_eq!(p.final_amount(), 729.0, epsilon = 1e-9);
    }

    #[test]
    fn test_annualized_convention() {
        let engine = ProjectionEngine::new(ProjectionConfig::annualized());
        // 36.5% nominal annual over 10 daily periods = 0.1% per day
        let p = engine.project(&params(1000.0, 36.5, 10, 1)).unwrap();
        assert_abs_diff_eq!(p.final_amount(), 1000.0 * 1.001_f64.powi(10), epsilon = 0.006);
    }

    #[test]
    fn test_zero_period_rejected_before_projection() {
        // Deserialized parameters are validated on the way in
        let json = r#"{"principal": 1000.0, "annual_rate_percent": 5.0, "total_days": 30, "period_days": 0}"#;
        assert!(serde_json::from_str::<Parameters>(json).is_err());

        // Hand-built parameters are checked by the engine itself
        let mut bad = params(1000.0, 5.0, 30, 1);
        bad.period_days = 0;
        assert!(matches!(project(&bad), Err(ProjectionError::InvalidPeriod(_))));
    }
}

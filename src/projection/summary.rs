//! Summary statistics derived from a projection
//!
//! - Interest earned (compounding gain net of contributed capital)
//! - Rule-of-72 doubling time estimate
//! - Inflation-adjusted (real) final value

use crate::params::{Parameters, DAYS_PER_YEAR};
use super::series::{round2, Projection};
use super::target::first_hit;
use serde::{Deserialize, Serialize};

/// Summary of a single projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub final_amount: f64,

    /// Principal plus every periodic contribution
    pub total_contributed: f64,

    /// `final_amount - total_contributed`
    pub interest_earned: f64,

    /// First day the target is reached; `None` = not reached or no target
    pub target_hit_day: Option<u32>,

    /// Rule-of-72 estimate; `None` unless rate and principal are positive
    pub doubling_days: Option<u64>,

    pub inflation_adjusted_amount: f64,
}

impl Summary {
    pub fn target_reached(&self) -> bool {
        self.target_hit_day.is_some()
    }
}

/// Derive the summary for `projection`, which must come from `params`
pub fn summarize(params: &Parameters, projection: &Projection) -> Summary {
    let final_amount = projection.final_amount();
    let steps = projection.steps();
    let total_contributed = params.principal + steps as f64 * params.contribution_per_period;

    Summary {
        final_amount,
        total_contributed: round2(total_contributed),
        interest_earned: round2(final_amount - total_contributed),
        target_hit_day: first_hit(projection, params.target_amount),
        doubling_days: doubling_days(params.annual_rate_percent, params.principal),
        inflation_adjusted_amount: inflation_adjusted(
            final_amount,
            params.inflation_rate_percent,
            params.total_days,
        ),
    }
}

/// Rule-of-72 doubling time in days
///
/// `72 / rate` years, times 365, rounded. A heuristic: accurate near 6-10%,
/// increasingly off elsewhere. Not an exact solve of `(1 + r)^n = 2`.
pub fn doubling_days(annual_rate_percent: f64, principal: f64) -> Option<u64> {
    if annual_rate_percent <= 0.0 || principal <= 0.0 || !annual_rate_percent.is_finite() {
        return None;
    }

    if !(6.0..=10.0).contains(&annual_rate_percent) {
        log::debug!(
            "rule of 72 applied at {}%, outside its accurate range",
            annual_rate_percent
        );
    }

    let years_to_double = 72.0 / annual_rate_percent;
    Some((years_to_double * DAYS_PER_YEAR).round() as u64)
}

/// Deflate `amount` by `inflation_rate_percent` per year over `total_days`
///
/// Returns `amount` unchanged when inflation or horizon is zero.
pub fn inflation_adjusted(amount: f64, inflation_rate_percent: f64, total_days: u32) -> f64 {
    if inflation_rate_percent == 0.0 || total_days == 0 {
        return amount;
    }

    let years = total_days as f64 / DAYS_PER_YEAR;
    round2(amount / (1.0 + inflation_rate_percent / 100.0).powf(years))
}

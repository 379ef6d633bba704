//! Projection parameters and input validation
//!
//! `ParameterInput` is the loose record a form or request supplies (every field
//! optional). `validate` turns it into `Parameters`; deserializing
//! `Parameters` directly runs the same checks.

use crate::error::{ProjectionError, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PRINCIPAL: f64 = 1000.0;
pub const DEFAULT_RATE_PERCENT: f64 = 5.0;
pub const DEFAULT_TOTAL_DAYS: u32 = 30;
pub const DEFAULT_PERIOD_DAYS: u32 = 1;
pub const DEFAULT_CURRENCY: &str = "INR";

/// Days per year used for inflation discounting and annualized rates
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Common compounding cadences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PeriodOption {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl PeriodOption {
    pub const ALL: [PeriodOption; 4] = [
        PeriodOption::Daily,
        PeriodOption::Weekly,
        PeriodOption::Monthly,
        PeriodOption::Yearly,
    ];

    /// Length of one period in days
    pub fn days(&self) -> u32 {
        match self {
            PeriodOption::Daily => 1,
            PeriodOption::Weekly => 7,
            PeriodOption::Monthly => 30,
            PeriodOption::Yearly => 365,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PeriodOption::Daily => "Daily",
            PeriodOption::Weekly => "Weekly",
            PeriodOption::Monthly => "Monthly",
            PeriodOption::Yearly => "Yearly",
        }
    }

    /// Preset matching a period length, if any
    pub fn from_days(days: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.days() == days)
    }
}

/// How the stated rate is turned into a per-period growth rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RateConvention {
    /// Stated rate is applied once per period, whatever the period length
    #[default]
    PerPeriod,
    /// Stated rate is a nominal annual rate, split by `period_days / 365`
    Annualized,
}

impl RateConvention {
    /// Per-period growth rate as a decimal (5% -> 0.05)
    pub fn periodic_rate(&self, annual_rate_percent: f64, period_days: u32) -> f64 {
        let rate = annual_rate_percent / 100.0;
        match self {
            RateConvention::PerPeriod => rate,
            RateConvention::Annualized => rate * period_days as f64 / DAYS_PER_YEAR,
        }
    }
}

/// Validated projection parameters
///
/// Deserializing goes through `ParameterInput::validate`, so a record with a
/// zero period or a missing field is rejected rather than accepted as is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ParameterInput")]
pub struct Parameters {
    /// Starting balance at period 0
    pub principal: f64,

    /// Growth rate in percent; zero is flat, negative is decay
    pub annual_rate_percent: f64,

    /// Projection horizon in days
    pub total_days: u32,

    /// Length of one compounding period in days (always > 0)
    pub period_days: u32,

    /// Added at the end of each period, after interest
    pub contribution_per_period: f64,

    pub target_amount: Option<f64>,

    pub inflation_rate_percent: f64,
}

impl Parameters {
    /// Create parameters with no contribution, target or inflation
    pub fn new(
        principal: f64,
        annual_rate_percent: f64,
        total_days: u32,
        period_days: u32,
    ) -> Result<Self> {
        require_finite("principal", principal)?;
        require_finite("annual_rate_percent", annual_rate_percent)?;
        if period_days == 0 {
            return Err(ProjectionError::InvalidPeriod(0.0));
        }

        Ok(Self {
            principal,
            annual_rate_percent,
            total_days,
            period_days,
            contribution_per_period: 0.0,
            target_amount: None,
            inflation_rate_percent: 0.0,
        })
    }

    pub fn with_contribution(mut self, contribution_per_period: f64) -> Self {
        self.contribution_per_period = contribution_per_period;
        self
    }

    pub fn with_target(mut self, target_amount: f64) -> Self {
        self.target_amount = Some(target_amount);
        self
    }

    pub fn with_inflation(mut self, inflation_rate_percent: f64) -> Self {
        self.inflation_rate_percent = inflation_rate_percent;
        self
    }

    /// Number of whole compounding periods in the horizon
    ///
    /// `None` when the period is zero.
    pub fn steps(&self) -> Option<u32> {
        self.total_days.checked_div(self.period_days)
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            principal: DEFAULT_PRINCIPAL,
            annual_rate_percent: DEFAULT_RATE_PERCENT,
            total_days: DEFAULT_TOTAL_DAYS,
            period_days: DEFAULT_PERIOD_DAYS,
            contribution_per_period: 0.0,
            target_amount: None,
            inflation_rate_percent: 0.0,
        }
    }
}

/// Unvalidated parameters as supplied by a caller
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterInput {
    #[serde(default)]
    pub principal: Option<f64>,
    #[serde(default)]
    pub annual_rate_percent: Option<f64>,
    #[serde(default)]
    pub total_days: Option<f64>,
    #[serde(default)]
    pub period_days: Option<f64>,
    #[serde(default)]
    pub contribution_per_period: Option<f64>,
    #[serde(default)]
    pub target_amount: Option<f64>,
    #[serde(default)]
    pub inflation_rate_percent: Option<f64>,
}

impl ParameterInput {
    /// Check every precondition and build `Parameters`
    ///
    /// Required fields are principal, rate, horizon and period. Optional
    /// fields fall back to zero (contribution, inflation) or no target.
    /// Fractional horizons are floored; the period must be a whole number.
    pub fn validate(&self) -> Result<Parameters> {
        let principal = required("principal", self.principal)?;
        let annual_rate_percent = required("annual_rate_percent", self.annual_rate_percent)?;
        let total_days = required("total_days", self.total_days)?;
        let period_days = required("period_days", self.period_days)?;

        if period_days <= 0.0 || period_days.fract() != 0.0 || period_days > u32::MAX as f64 {
            return Err(ProjectionError::InvalidPeriod(period_days));
        }
        if total_days < 0.0 {
            return Err(ProjectionError::NegativeHorizon(total_days));
        }
        if total_days.floor() > u32::MAX as f64 {
            return Err(ProjectionError::HorizonTooLarge(total_days));
        }

        let contribution_per_period = optional("contribution_per_period", self.contribution_per_period)?;
        let inflation_rate_percent = optional("inflation_rate_percent", self.inflation_rate_percent)?;
        let target_amount = match self.target_amount {
            Some(t) => Some(require_finite("target_amount", t)?),
            None => None,
        };

        Ok(Parameters {
            principal,
            annual_rate_percent,
            total_days: total_days.floor() as u32,
            period_days: period_days as u32,
            contribution_per_period,
            target_amount,
            inflation_rate_percent,
        })
    }
}

impl TryFrom<ParameterInput> for Parameters {
    type Error = ProjectionError;

    fn try_from(input: ParameterInput) -> Result<Self> {
        input.validate()
    }
}

impl From<&Parameters> for ParameterInput {
    fn from(params: &Parameters) -> Self {
        Self {
            principal: Some(params.principal),
            annual_rate_percent: Some(params.annual_rate_percent),
            total_days: Some(params.total_days as f64),
            period_days: Some(params.period_days as f64),
            contribution_per_period: Some(params.contribution_per_period),
            target_amount: params.target_amount,
            inflation_rate_percent: Some(params.inflation_rate_percent),
        }
    }
}

pub(crate) fn require_finite(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ProjectionError::MissingInput { field })
    }
}

fn required(field: &'static str, value: Option<f64>) -> Result<f64> {
    match value {
        Some(v) => require_finite(field, v),
        None => Err(ProjectionError::MissingInput { field }),
    }
}

fn optional(field: &'static str, value: Option<f64>) -> Result<f64> {
    match value {
        Some(v) => require_finite(field, v),
        None => Ok(0.0),
    }
}

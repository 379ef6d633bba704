//! Side-by-side comparison of independently parameterized scenarios
//!
//! Scenarios carry their own principal, rate and horizon but never their own
//! compounding cadence: every scenario in a run shares the runner's period
//! length and target.

use crate::error::{ProjectionError, Result};
use crate::params::Parameters;
use crate::projection::{summarize, ProjectionConfig, ProjectionEngine, Summary};
use serde::{Deserialize, Serialize};

/// A named variant of the projection parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub label: String,
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub total_days: u32,

    /// Display colour, passed through untouched
    #[serde(default)]
    pub color: Option<String>,
}

impl Scenario {
    pub fn new(label: impl Into<String>, principal: f64, annual_rate_percent: f64, total_days: u32) -> Self {
        Self {
            label: label.into(),
            principal,
            annual_rate_percent,
            total_days,
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Full parameters for this scenario under the shared period and target
    ///
    /// Contributions are always zero for scenarios.
    pub fn parameters(&self, period_days: u32, target_amount: Option<f64>) -> Result<Parameters> {
        let mut params = Parameters::new(self.principal, self.annual_rate_percent, self.total_days, period_days)?;
        params.target_amount = target_amount;
        Ok(params)
    }
}

/// One compared scenario and its summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    pub scenario: Scenario,
    pub summary: Summary,
}

/// Runs many scenarios against one shared period length and target
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    /// Compounding period shared by every scenario
    period_days: u32,
    target_amount: Option<f64>,
    engine: ProjectionEngine,
}

impl ScenarioRunner {
    pub fn new(period_days: u32) -> Result<Self> {
        if period_days == 0 {
            return Err(ProjectionError::InvalidPeriod(0.0));
        }
        Ok(Self {
            period_days,
            target_amount: None,
            engine: ProjectionEngine::default(),
        })
    }

    pub fn with_target(mut self, target_amount: Option<f64>) -> Self {
        self.target_amount = target_amount;
        self
    }

    pub fn with_config(mut self, config: ProjectionConfig) -> Self {
        self.engine = ProjectionEngine::new(config);
        self
    }

    pub fn period_days(&self) -> u32 {
        self.period_days
    }

    /// Project and summarize one scenario
    pub fn run(&self, scenario: &Scenario) -> Result<ScenarioOutcome> {
        let params = scenario.parameters(self.period_days, self.target_amount)?;
        let projection = self.engine.project(&params)?;
        Ok(ScenarioOutcome {
            scenario: scenario.clone(),
            summary: summarize(&params, &projection),
        })
    }

    /// Summaries for every scenario, in input order
    ///
    /// Fails on the first scenario with invalid numbers; no partial result.
    pub fn compare(&self, scenarios: &[Scenario]) -> Result<Vec<ScenarioOutcome>> {
        log::debug!(
            "comparing {} scenarios at {}-day periods",
            scenarios.len(),
            self.period_days
        );
        scenarios.iter().map(|s| self.run(s)).collect()
    }
}

/// Compare scenarios under the default engine
pub fn compare(scenarios: &[Scenario], period_days: u32, target_amount: Option<f64>) -> Result<Vec<ScenarioOutcome>> {
    ScenarioRunner::new(period_days)?
        .with_target(target_amount)
        .compare(scenarios)
}

//! Saved calculation record
//!
//! Flat JSON record of the last inputs and their result, so a front end can
//! restore its state. Nothing in the engine reads it back.

use crate::error::Result;
use crate::params::{Parameters, DEFAULT_CURRENCY, DEFAULT_PERIOD_DAYS};
use crate::projection::{Projection, ProjectionPoint};
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_period_days() -> u32 {
    DEFAULT_PERIOD_DAYS
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedCalculation {
    pub principal: f64,
    pub rate: f64,
    pub days: u32,
    #[serde(default = "default_period_days")]
    pub period_days: u32,
    #[serde(default)]
    pub contribution: f64,

    /// Display label only, never used for conversion
    #[serde(default = "default_currency")]
    pub currency: String,

    #[serde(default)]
    pub target: Option<f64>,
    #[serde(default)]
    pub data: Vec<ProjectionPoint>,
    #[serde(default)]
    pub final_amount: f64,
}

impl SavedCalculation {
    pub fn new(params: &Parameters, projection: &Projection, currency: &str) -> Self {
        Self {
            principal: params.principal,
            rate: params.annual_rate_percent,
            days: params.total_days,
            period_days: params.period_days,
            contribution: params.contribution_per_period,
            currency: currency.to_string(),
            target: params.target_amount,
            data: projection.points().to_vec(),
            final_amount: projection.final_amount(),
        }
    }

    /// Parameters to re-run the saved calculation
    pub fn parameters(&self) -> Result<Parameters> {
        let mut params = Parameters::new(self.principal, self.rate, self.days, self.period_days)?
            .with_contribution(self.contribution);
        params.target_amount = self.target;
        Ok(params)
    }

    pub fn projection(&self) -> Projection {
        Projection::from_points(self.data.clone())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path.as_ref(), self.to_json()?)?;
        log::info!("saved calculation to {}", path.as_ref().display());
        Ok(())
    }

    /// Load a saved record; `Ok(None)` if nothing has been saved
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Option<Self>> {
        match std::fs::read_to_string(path.as_ref()) {
            Ok(json) => Ok(Some(Self::from_json(&json)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Remove the saved record if present
    pub fn clear<P: AsRef<Path>>(path: P) -> Result<()> {
        match std::fs::remove_file(path.as_ref()) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::project;

    #[test]
    fn test_save_load_clear() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calc.json");

        let params = Parameters::default().with_target(1200.0);
        let record = SavedCalculation::new(&params, &project(&params).unwrap(), "USD");
        record.save(&path).unwrap();

        let loaded = SavedCalculation::load(&path).unwrap().unwrap();
        assert_eq!(loaded, record);
        assert_eq!(loaded.parameters().unwrap(), params);

        SavedCalculation::clear(&path).unwrap();
        assert!(SavedCalculation::load(&path).unwrap().is_none());
        SavedCalculation::clear(&path).unwrap();
    }

    #[test]
    fn test_older_record_defaults() {
        let json = r#"{"principal": 500, "rate": 4, "days": 10, "currency": "EUR"}"#;
        let record = SavedCalculation::from_json(json).unwrap();
        assert_eq!(record.period_days, 1);
        assert_eq!(record.contribution, 0.0);
        assert!(record.target.is_none());
        assert!(record.projection().is_empty());
    }

    #[test]
    fn test_camel_case_keys() {
        let params = Parameters::new(1000.0, 5.0, 7, 7).unwrap();
        let json = SavedCalculation::new(&params, &project(&params).unwrap(), "INR").to_json().unwrap();
        assert!(json.contains("\"periodDays\""));
        assert!(json.contains("\"finalAmount\""));
    }
}

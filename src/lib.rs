//! Compound Projection - deterministic compound interest projection engine
//!
//! This library provides:
//! - Period-by-period value series from principal, rate, cadence and contributions
//! - Target detection, interest earned, Rule-of-72 doubling time, inflation-adjusted value
//! - Reverse solve for the rate or principal needed to reach a target
//! - Multi-scenario comparison under a shared compounding period
//! - CSV rows and a JSON saved-calculation record for front ends
//!
//! Every calculation is a pure function of its inputs.

pub mod error;
pub mod export;
pub mod params;
pub mod projection;
pub mod record;
pub mod scenario;
pub mod solver;

// Re-export commonly used types
pub use error::{ProjectionError, Result};
pub use params::{ParameterInput, Parameters, PeriodOption, RateConvention};
pub use projection::{
    first_hit, project, summarize, Projection, ProjectionConfig, ProjectionEngine, ProjectionPoint,
    Summary,
};
pub use scenario::{compare, Scenario, ScenarioOutcome, ScenarioRunner};
pub use solver::{solve_principal, solve_rate};

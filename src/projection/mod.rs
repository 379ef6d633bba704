//! Projection engine, target detection and summary statistics

mod engine;
mod series;
mod summary;
mod target;

pub use engine::{project, ProjectionConfig, ProjectionEngine};
pub use series::{round2, Projection, ProjectionPoint, SeriesStats};
pub use summary::{doubling_days, inflation_adjusted, summarize, Summary};
pub use target::first_hit;

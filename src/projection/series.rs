//! Projection output structures

use serde::{Deserialize, Serialize};

/// Round to 2 decimal places (cents)
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Account value at the start of one period
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// Period number, 0 = initial principal
    pub period_index: u32,

    /// `period_index * period_days`
    pub day_offset: u32,

    /// Balance rounded to 2 dp
    pub amount: f64,
}

/// Ordered value series, one point per period plus the starting point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    points: Vec<ProjectionPoint>,
}

impl Projection {
    pub(crate) fn with_capacity(len: usize) -> Self {
        Self {
            points: Vec::with_capacity(len),
        }
    }

    pub(crate) fn add_point(&mut self, point: ProjectionPoint) {
        self.points.push(point);
    }

    /// Rebuild a projection from previously emitted points
    pub fn from_points(points: Vec<ProjectionPoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[ProjectionPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of compounding steps (points after the initial one)
    pub fn steps(&self) -> u32 {
        self.points.len().saturating_sub(1) as u32
    }

    /// Amount of the last point, 0.0 for an empty series
    pub fn final_amount(&self) -> f64 {
        self.points.last().map(|p| p.amount).unwrap_or(0.0)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProjectionPoint> {
        self.points.iter()
    }

    /// Max, min and average of the point amounts
    pub fn stats(&self) -> Option<SeriesStats> {
        if self.points.is_empty() {
            return None;
        }

        let max = self.points.iter().map(|p| p.amount).fold(f64::MIN, f64::max);
        let min = self.points.iter().map(|p| p.amount).fold(f64::MAX, f64::min);
        let total: f64 = self.points.iter().map(|p| p.amount).sum();

        Some(SeriesStats {
            max,
            min,
            average: round2(total / self.points.len() as f64),
        })
    }
}

impl<'a> IntoIterator for &'a Projection {
    type Item = &'a ProjectionPoint;
    type IntoIter = std::slice::Iter<'a, ProjectionPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Descriptive statistics over a projection's amounts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesStats {
    pub max: f64,
    pub min: f64,
    pub average: f64,
}

//! Target detection over a projection

use super::series::Projection;

/// Day offset of the first point whose amount reaches `target`
///
/// Scans in chronological order; a point exactly equal to the target counts.
/// `None` means no target was set or the series never reaches it, which is a
/// normal outcome rather than an error.
pub fn first_hit(projection: &Projection, target: Option<f64>) -> Option<u32> {
    let target = target?;
    projection
        .iter()
        .find(|point| point.amount >= target)
        .map(|point| point.day_offset)
}

impl Projection {
    pub fn first_hit(&self, target: Option<f64>) -> Option<u32> {
        first_hit(self, target)
    }
}

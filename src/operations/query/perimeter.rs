use tracing::debug;

use crate::boundary::RoomBoundary;
use crate::geometry::{Curve, SegmentCurve};

/// Computes a room perimeter as the summed length of all boundary segments.
pub struct Perimeter<'a, C = SegmentCurve> {
    boundary: &'a RoomBoundary<C>,
}

impl<'a, C: Curve> Perimeter<'a, C> {
    /// Creates a new `Perimeter` query.
    #[must_use]
    pub fn new(boundary: &'a RoomBoundary<C>) -> Self {
        Self { boundary }
    }

    /// Executes the query. Interior loops count towards the perimeter; an
    /// unbound room has perimeter `0`.
    #[must_use]
    pub fn execute(&self) -> f64 {
        let perimeter = self.boundary.segments().map(|s| s.curve.length()).sum();
        debug!(perimeter, loops = self.boundary.loops.len(), "room perimeter calculated");
        perimeter
    }
}

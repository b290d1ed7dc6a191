use tracing::debug;

use crate::boundary::BoundarySegment;
use crate::geometry::{Curve, SegmentCurve};
use crate::math::{Point3, TOLERANCE};

/// Finds the first boundary segment a point lies on.
///
/// A point at a junction matches the earlier of the two segments in
/// traversal order.
pub struct LocateSegment<'a, C = SegmentCurve> {
    segments: &'a [BoundarySegment<C>],
    point: Point3,
    tolerance: f64,
}

impl<'a, C: Curve> LocateSegment<'a, C> {
    /// Creates a new `LocateSegment` query.
    #[must_use]
    pub fn new(segments: &'a [BoundarySegment<C>], point: Point3) -> Self {
        Self {
            segments,
            point,
            tolerance: TOLERANCE,
        }
    }

    /// Sets the distance within which the point counts as on a segment.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Executes the query, returning the segment index or `None` when the
    /// point is not on any segment.
    #[must_use]
    pub fn execute(&self) -> Option<usize> {
        let index = self.segments.iter().position(|segment| {
            segment
                .curve
                .project(&self.point)
                .coincides(self.tolerance)
        });
        match index {
            Some(i) => debug!(index = i, "boundary segment found"),
            None => debug!(
                x = self.point.x,
                y = self.point.y,
                z = self.point.z,
                "point is not on any boundary segment"
            ),
        }
        index
    }
}

use crate::error::{GeometryError, Result};
use crate::math::distance_3d::{project_point_on_segment, segment_segment_closest};
use crate::math::{Point3, Vector3, TOLERANCE};

use super::{relate_by_endpoints, Curve, CurveRelation, Projection};

/// A straight segment between two points.
///
/// The parametric form is: `P(t) = start + t * (end - start)`, `t ∈ [0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSegment {
    start: Point3,
    end: Point3,
}

impl LineSegment {
    /// Creates a new segment from its endpoints.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoints coincide.
    pub fn new(start: Point3, end: Point3) -> Result<Self> {
        if (end - start).norm() < TOLERANCE {
            return Err(GeometryError::Degenerate("line segment has zero length".into()).into());
        }
        Ok(Self { start, end })
    }

    fn direction(&self) -> Vector3 {
        self.end - self.start
    }
}

impl Curve for LineSegment {
    fn start(&self) -> Point3 {
        self.start
    }

    fn end(&self) -> Point3 {
        self.end
    }

    fn point_at(&self, t: f64) -> Point3 {
        self.start + self.direction() * t
    }

    fn length(&self) -> f64 {
        self.direction().norm()
    }

    fn project(&self, point: &Point3) -> Projection {
        let foot = project_point_on_segment(point, &self.start, &self.end);
        Projection {
            point: foot.point,
            parameter: foot.t,
            distance: foot.distance,
        }
    }

    fn relate(&self, other: &Self, tolerance: f64) -> CurveRelation {
        let approach = segment_segment_closest(&self.start, &self.end, &other.start, &other.end);
        if approach.distance > tolerance {
            return CurveRelation::Disjoint;
        }
        match relate_by_endpoints(self, other, tolerance) {
            // The segments come within tolerance away from every endpoint.
            CurveRelation::Disjoint => CurveRelation::Overlap,
            relation => relation,
        }
    }
}

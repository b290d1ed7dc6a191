use crate::error::{GeometryError, Result};
use crate::geometry::{ArcSegment, Curve, CurveRelation, LineSegment, Pline, SegmentCurve};
use crate::math::arc_2d::arc_from_bulge;
use crate::math::Point3;
use crate::model::ElementId;

use super::BoundarySegment;

/// A closed (or nearly closed) path of boundary segments.
///
/// Segment order is whatever the producer supplied until the loop passes
/// through [`OrderBoundary`](crate::operations::OrderBoundary).
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryLoop<C = SegmentCurve> {
    pub segments: Vec<BoundarySegment<C>>,
}

impl<C> BoundaryLoop<C> {
    /// Creates a loop from its segments.
    #[must_use]
    pub fn new(segments: Vec<BoundarySegment<C>>) -> Self {
        Self { segments }
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns whether the loop has no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl<C: Curve> BoundaryLoop<C> {
    /// Returns whether every consecutive pair of segments overlaps.
    ///
    /// The wrap-around from the last segment back to the first is not checked.
    #[must_use]
    pub fn is_fully_adjacent(&self, tolerance: f64) -> bool {
        self.segments
            .windows(2)
            .all(|pair| pair[0].curve.relate(&pair[1].curve, tolerance) == CurveRelation::Overlap)
    }
}

impl BoundaryLoop {
    /// Builds a loop from a plan-view bulge polyline lifted to `elevation`.
    ///
    /// `elements` names the bounding element of each polyline segment, in
    /// segment order.
    ///
    /// # Errors
    ///
    /// Returns an error if `elements` does not match the segment count or a
    /// segment is degenerate.
    pub fn from_pline(pline: &Pline, elevation: f64, elements: &[ElementId]) -> Result<Self> {
        if elements.len() != pline.segment_count() {
            return Err(GeometryError::Degenerate(format!(
                "expected {} bounding elements, got {}",
                pline.segment_count(),
                elements.len()
            ))
            .into());
        }

        let segments = pline
            .segments()
            .zip(elements)
            .map(|((from, to), &element)| -> Result<BoundarySegment> {
                let curve: SegmentCurve = match arc_from_bulge(from.x, from.y, to.x, to.y, from.bulge) {
                    Some(arc) => ArcSegment::from_planar(&arc, elevation)?.into(),
                    None => LineSegment::new(
                        Point3::new(from.x, from.y, elevation),
                        Point3::new(to.x, to.y, elevation),
                    )?
                    .into(),
                };
                Ok(BoundarySegment::new(curve, element))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { segments })
    }
}

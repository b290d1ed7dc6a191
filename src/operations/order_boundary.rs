use tracing::warn;

use crate::boundary::{BoundaryLoop, RoomBoundary};
use crate::geometry::{Curve, CurveRelation, SegmentCurve};
use crate::math::TOLERANCE;

/// A position in a loop where no later segment continued the chain.
///
/// Not an error: the loop is still returned in best-effort order, but paths
/// built on it may skip or double back over walls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmbiguousOrdering {
    /// Index of the loop in the room boundary.
    pub loop_index: usize,
    /// Position whose segment had no overlapping successor.
    pub position: usize,
}

/// Room boundary whose loops have been put in adjacency order.
#[derive(Debug, Clone)]
pub struct OrderedBoundary<C = SegmentCurve> {
    boundary: RoomBoundary<C>,
    diagnostics: Vec<AmbiguousOrdering>,
}

impl<C> OrderedBoundary<C> {
    /// Returns the ordered loops.
    #[must_use]
    pub fn loops(&self) -> &[BoundaryLoop<C>] {
        &self.boundary.loops
    }

    /// Returns the ordered boundary.
    #[must_use]
    pub fn boundary(&self) -> &RoomBoundary<C> {
        &self.boundary
    }

    /// Returns every position where ordering could not find a successor.
    #[must_use]
    pub fn diagnostics(&self) -> &[AmbiguousOrdering] {
        &self.diagnostics
    }

    /// Returns whether every loop was chained without gaps.
    #[must_use]
    pub fn is_fully_ordered(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Consumes the result, returning the ordered boundary.
    #[must_use]
    pub fn into_boundary(self) -> RoomBoundary<C> {
        self.boundary
    }
}

/// Reorders each boundary loop so consecutive segments overlap.
///
/// This is a greedy repair, not a topological sort: for each position `i`
/// the first later segment overlapping segment `i` is swapped into `i + 1`.
/// Segment winding is left as supplied. The input boundary is not modified.
pub struct OrderBoundary<'a, C = SegmentCurve> {
    boundary: &'a RoomBoundary<C>,
    tolerance: f64,
}

impl<'a, C: Curve + Clone> OrderBoundary<'a, C> {
    /// Creates a new `OrderBoundary` operation.
    #[must_use]
    pub fn new(boundary: &'a RoomBoundary<C>) -> Self {
        Self {
            boundary,
            tolerance: TOLERANCE,
        }
    }

    /// Sets the tolerance used to decide whether two curves meet.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Executes the operation, returning ordered copies of every loop.
    #[must_use]
    pub fn execute(&self) -> OrderedBoundary<C> {
        let mut diagnostics = Vec::new();
        let loops = self
            .boundary
            .loops
            .iter()
            .enumerate()
            .map(|(loop_index, lp)| self.order_loop(loop_index, lp, &mut diagnostics))
            .collect();

        OrderedBoundary {
            boundary: RoomBoundary::new(loops),
            diagnostics,
        }
    }

    fn order_loop(
        &self,
        loop_index: usize,
        lp: &BoundaryLoop<C>,
        diagnostics: &mut Vec<AmbiguousOrdering>,
    ) -> BoundaryLoop<C> {
        let mut segments = lp.segments.clone();
        let n = segments.len();

        for i in 0..n.saturating_sub(1) {
            let successor = (i + 1..n).find(|&j| {
                segments[i]
                    .curve
                    .relate(&segments[j].curve, self.tolerance)
                    == CurveRelation::Overlap
            });
            match successor {
                Some(j) => segments.swap(i + 1, j),
                None => {
                    warn!(loop_index, position = i, "no adjacent boundary segment found");
                    diagnostics.push(AmbiguousOrdering {
                        loop_index,
                        position: i,
                    });
                }
            }
        }

        BoundaryLoop::new(segments)
    }
}
